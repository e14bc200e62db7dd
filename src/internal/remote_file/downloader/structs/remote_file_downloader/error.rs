//! 下载相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::remote_file::downloader::traits::download::HookAbort;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("读取文件失败: {0}")]
    ReadFile(std::io::Error),

    #[error("删除临时文件失败: {0}")]
    RemoveTempFile(std::io::Error),

    #[error("保存文件失败: {0}")]
    Finalize(std::io::Error),

    #[error("未设置保存路径")]
    NoDestination,

    #[error("没有下载权限（状态 {status}）: {url}")]
    Unauthorized { status: StatusCode, url: String },

    #[error("远程文件不存在: {url}")]
    NotFound { url: String },

    #[error("服务器返回异常状态 {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("文件大小不一致，期望 {expected} 字节，实际 {actual} 字节")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("文件校验失败，期望 sha256 {expected}，实际 {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// 钩子在 before_start 中返回错误，中止下载。
    #[error("{0}")]
    HookAbort(#[from] HookAbort),
}
