//! 仓库元数据读取相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("地址拼接失败: {0}")]
    InvalidUrl(String),

    #[error("仓库标识不能为空")]
    EmptyRepoId,

    #[error("没有访问仓库 {repo_id} 的权限（状态 {status}），请检查访问令牌")]
    Unauthorized { repo_id: String, status: StatusCode },

    #[error("仓库不存在: {repo_id}@{revision}")]
    RepoNotFound { repo_id: String, revision: String },

    #[error("服务器返回异常状态 {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("仓库元数据解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("仓库中的文件路径不安全: {0}")]
    UnsafePath(String),
}
