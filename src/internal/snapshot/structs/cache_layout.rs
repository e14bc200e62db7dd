use std::path::{Path, PathBuf};

use crate::internal::hub::enums::RepoType;

/// 共享缓存根目录
///
/// 目录结构与官方客户端一致：`<root>/<models|datasets|spaces>--<org>--<name>/blobs/<blob>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 按优先级解析缓存根目录：显式配置 > `HF_HUB_CACHE` > `HF_HOME/hub` > `~/.cache/huggingface/hub`。
    pub fn resolve(explicit: Option<&Path>) -> Option<Self> {
        Self::resolve_with(explicit, |k| std::env::var(k).ok(), dirs::home_dir())
    }

    /// 同 [`resolve`](Self::resolve)，环境变量与家目录由调用方提供。
    pub fn resolve_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Option<Self> {
        let non_empty = |k: &str| env(k).filter(|v| !v.trim().is_empty());

        if let Some(p) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return Some(Self::new(p));
        }
        if let Some(p) = non_empty("HF_HUB_CACHE") {
            return Some(Self::new(p));
        }
        if let Some(p) = non_empty("HF_HOME") {
            return Some(Self::new(PathBuf::from(p).join("hub")));
        }
        home.map(|h| Self::new(h.join(".cache").join("huggingface").join("hub")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 仓库目录：`models--org--name`
    pub fn repo_dir(&self, repo_type: RepoType, repo_id: &str) -> PathBuf {
        let folder = format!(
            "{}--{}",
            repo_type.cache_prefix(),
            repo_id.trim_matches('/').replace('/', "--")
        );
        self.root.join(folder)
    }

    pub fn blob_path(
        &self,
        repo_type: RepoType,
        repo_id: &str,
        blob: &str,
    ) -> PathBuf {
        self.repo_dir(repo_type, repo_id).join("blobs").join(blob)
    }
}
