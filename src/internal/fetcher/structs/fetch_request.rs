use std::path::{Path, PathBuf};

use crate::internal::hub::enums::RepoType;

/// 默认的仓库版本
pub const DEFAULT_REVISION: &str = "main";

/// 一次快照获取的配置，创建后在整个运行期间不变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// 远程仓库标识，如 `THUDM/CogVideoX-5b-I2V`
    pub repository_id: String,
    /// 本地目标目录，可以尚不存在
    pub destination_path: PathBuf,
    /// 是否续传未完成的文件
    pub resume: bool,
    /// 是否允许以指向共享缓存的链接代替完整拷贝
    pub use_symlinks: bool,
    /// 分支、标签或提交哈希
    pub revision: String,
    pub repo_type: RepoType,
}

impl FetchRequest {
    /// 默认续传、完整拷贝、`main` 分支的模型仓库。
    pub fn new(
        repository_id: impl Into<String>,
        destination_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository_id: repository_id.into(),
            destination_path: destination_path.into(),
            resume: true,
            use_symlinks: false,
            revision: DEFAULT_REVISION.to_string(),
            repo_type: RepoType::Model,
        }
    }

    pub fn resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    pub fn use_symlinks(mut self, use_symlinks: bool) -> Self {
        self.use_symlinks = use_symlinks;
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    pub fn repo_type(mut self, repo_type: RepoType) -> Self {
        self.repo_type = repo_type;
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination_path
    }

    /// 校验前置条件：仓库标识与 revision 非空，目标路径非空。
    pub fn validate(&self) -> Result<(), String> {
        if self.repository_id.trim().trim_matches('/').is_empty() {
            return Err("仓库标识不能为空".to_string());
        }
        if self.revision.trim().is_empty() {
            return Err("revision 不能为空".to_string());
        }
        if self.destination_path.as_os_str().is_empty() {
            return Err("下载目录不能为空".to_string());
        }
        Ok(())
    }
}
