use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::auth::HubAuth;
use crate::internal::fetcher::structs::{
    FetchRequest, SnapshotSummary, TransferError,
};
use crate::internal::fetcher::traits::snapshot_transfer::SnapshotTransfer;
use crate::internal::hub::functions::get_repo_info::{get_repo_info, RepoRef};
use crate::internal::remote_file::downloader::traits::download::DownloadHook;
use crate::remote_file::{DownloadResult, RemoteFile, RemoteFileData};

use super::cache_layout::CacheLayout;
use super::link::link_or_copy;

/// 按文件生成下载钩子（如进度条）
pub type FileHookFactory =
    dyn Fn(&RemoteFileData) -> Box<dyn DownloadHook> + Send + Sync;

/// 基于 Hub HTTP 接口的快照下载器，逐个顺序下载文件。
#[derive(Clone)]
pub struct SnapshotDownloader {
    hub_auth: HubAuth,
    cache_dir: Option<PathBuf>,
    verify_checksum: bool,
    file_hook: Option<Arc<FileHookFactory>>,
}

impl std::fmt::Debug for SnapshotDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotDownloader")
            .field("hub_auth", &self.hub_auth)
            .field("cache_dir", &self.cache_dir)
            .field("verify_checksum", &self.verify_checksum)
            .field("file_hook", &self.file_hook.is_some())
            .finish()
    }
}

/// 仓库内相对路径（`/` 分隔，已校验）映射到本地路径
fn local_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(root.to_path_buf(), |acc, seg| acc.join(seg))
}

impl SnapshotDownloader {
    pub fn new(hub_auth: HubAuth) -> Self {
        Self {
            hub_auth,
            cache_dir: None,
            verify_checksum: true,
            file_hook: None,
        }
    }

    /// 共享缓存目录，仅在链接模式下使用；未设置时按环境变量解析。
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    /// 为每个文件的下载注册一个钩子。
    pub fn with_file_hook<F>(mut self, factory: F) -> Self
    where
        F: Fn(&RemoteFileData) -> Box<dyn DownloadHook> + Send + Sync + 'static,
    {
        self.file_hook = Some(Arc::new(factory));
        self
    }

    /// 列出快照中的全部文件，下载地址固定到解析出的提交。
    pub async fn list_files(
        &self,
        request: &FetchRequest,
    ) -> Result<(String, Vec<RemoteFile>), TransferError> {
        let repo = RepoRef {
            repo_type: request.repo_type,
            repo_id: &request.repository_id,
            revision: &request.revision,
        };
        let repo_info = get_repo_info(&self.hub_auth, &repo).await?;
        let revision_sha = repo_info
            .sha
            .clone()
            .unwrap_or_else(|| request.revision.clone());
        let files = RemoteFile::from_repo_info(&self.hub_auth, repo_info, &repo)?;
        Ok((revision_sha, files))
    }

    async fn download_to(
        &self,
        file: &RemoteFile,
        save_path: &Path,
        resume: bool,
    ) -> Result<DownloadResult, TransferError> {
        let mut downloader = file
            .build_downloader()
            .save_to(save_path)
            .resume(resume)
            .verify_checksum(self.verify_checksum);

        if let Some(factory) = &self.file_hook {
            downloader = downloader.with_boxed_hook(factory(&file.data));
        }

        downloader
            .send()
            .await
            .map_err(|source| TransferError::Download {
                file: file.data.relative_path.clone(),
                source,
            })
    }

    /// 链接模式：先下载到缓存 blob，再在目标位置创建链接。
    async fn download_linked(
        &self,
        file: &RemoteFile,
        cache: &CacheLayout,
        blob: &str,
        target: &Path,
        resume: bool,
    ) -> Result<DownloadResult, TransferError> {
        let blob_path =
            cache.blob_path(file.data.repo_type, &file.data.repo_id, blob);

        let result = self.download_to(file, &blob_path, resume).await?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(|source| {
                TransferError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }

        // 相对路径的链接会相对链接所在目录解析
        let blob_path = std::path::absolute(&blob_path).unwrap_or(blob_path);

        let how = link_or_copy(&blob_path, target).await.map_err(|source| {
            TransferError::Link {
                link: target.to_path_buf(),
                source,
            }
        })?;
        debug!(
            file = %file.data.relative_path,
            blob = %blob_path.display(),
            ?how,
            "已放置到目标目录"
        );

        Ok(result)
    }
}

#[async_trait]
impl SnapshotTransfer for SnapshotDownloader {
    async fn retrieve_snapshot(
        &self,
        request: &FetchRequest,
    ) -> Result<SnapshotSummary, TransferError> {
        let (revision_sha, files) = self.list_files(request).await?;

        info!(
            repo = %request.repository_id,
            revision = %revision_sha,
            files = files.len(),
            "开始下载快照"
        );

        let cache = if request.use_symlinks {
            Some(
                CacheLayout::resolve(self.cache_dir.as_deref())
                    .ok_or(TransferError::NoCacheDir)?,
            )
        } else {
            None
        };

        let mut summary = SnapshotSummary {
            revision_sha,
            files_total: files.len(),
            ..Default::default()
        };

        for file in &files {
            let target =
                local_path(&request.destination_path, &file.data.relative_path);

            let result = match (&cache, file.data.cache_blob_name()) {
                (Some(cache), Some(blob)) => {
                    self.download_linked(file, cache, blob, &target, request.resume)
                        .await?
                }
                _ => self.download_to(file, &target, request.resume).await?,
            };

            match result {
                DownloadResult::AlreadyComplete => summary.files_skipped += 1,
                DownloadResult::Saved { bytes_written, .. } => {
                    summary.files_downloaded += 1;
                    summary.bytes_downloaded += bytes_written;
                }
            }
        }

        Ok(summary)
    }
}
