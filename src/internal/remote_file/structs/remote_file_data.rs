use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::internal::hub::enums::RepoType;

#[derive(Debug, Clone)]
pub struct RemoteFileData {
    pub repo_id: String,
    pub repo_type: RepoType,
    pub revision: String,           // 已解析的提交哈希（或原始 revision）
    pub relative_path: String,      // 文件的相对路径（相对仓库根目录，`/` 分隔）
    pub url: Url,                   // 文件的完整下载地址
    pub name: String,               // 文件名（路径最后一段）
    pub size: Option<u64>,          // 文件大小（字节）
    pub blob_id: Option<String>,    // 共享缓存中的 blob 名称
    pub sha256: Option<String>,     // LFS 文件的内容摘要
    pub last_modified: Option<DateTime<FixedOffset>>, // 仓库最后修改时间
}

impl RemoteFileData {
    /// 用于共享缓存的 blob 名称：优先 LFS sha256，其次 git blob 哈希
    pub fn cache_blob_name(&self) -> Option<&str> {
        self.sha256.as_deref().or(self.blob_id.as_deref())
    }
}
