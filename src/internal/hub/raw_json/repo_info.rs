use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// `api/{type}/{repo_id}/revision/{revision}?blobs=true` 的原始响应
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    /// 仓库标识，部分镜像不返回
    #[serde(default)]
    pub id: Option<String>,
    /// 解析出的提交哈希
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
}

/// 仓库中的单个文件
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sibling {
    /// 相对仓库根目录的文件路径，以 `/` 分隔
    pub rfilename: String,
    #[serde(default)]
    pub size: Option<u64>,
    /// git blob 哈希；LFS 文件以 lfs.sha256 为准
    #[serde(default)]
    pub blob_id: Option<String>,
    #[serde(default)]
    pub lfs: Option<LfsInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LfsInfo {
    pub sha256: String,
    pub size: u64,
}
