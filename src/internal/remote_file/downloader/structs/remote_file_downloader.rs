//! 远程文件下载器
//!
//! 本模块实现了 Hub 仓库中单个文件的下载功能。
//!
//! ## 功能特性
//!
//! - **流式下载**：整文件 GET，边下载边写盘，不占用大块内存
//! - **断点续传**：未完成的数据写在 `<目标>.incomplete`，再次下载时通过 Range 请求从断点继续
//! - **完整性校验**：已知 LFS 摘要时，下载完成后校验 sha256，失败则丢弃未完成文件
//! - **钩子机制**：支持在下载各阶段插入自定义逻辑（开始前、每块数据、进度更新、完成后）
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use hub_snapshot::remote_file::RemoteFile;
//! # async fn example(remote_file: RemoteFile) -> Result<(), Box<dyn std::error::Error>> {
//! let result = remote_file
//!     .build_downloader()
//!     .save_to("models/config.json")
//!     .resume(true)
//!     .with_on_progress_hook(|done, total| println!("{done}/{total:?}"))
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## 内部实现说明
//!
//! - `resume` 子模块：根据本地状态计算续传起点
//! - `range_request` 子模块：带 Range 头的请求与状态码转换
//! - `transfer` 子模块：流式写入未完成文件
//! - `checksum` 子模块：sha256 校验
//! - `error` 子模块：下载相关错误类型定义

mod checksum;
mod error;
mod range_request;
mod resume;
mod transfer;

use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Client;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_file::RemoteFile;
use crate::internal::remote_file::structs::remote_file_data::RemoteFileData;

use super::download_config::DownloadConfig;
use super::download_hooks_container::DownloadHooksContainer;
use super::download_result::DownloadResult;
use checksum::sha256_file;
use resume::{compute_resume_start, ComputeResumeStartParams, ResumeOutcome};
use transfer::{run_transfer, RunTransferParams};

pub use error::DownloadError;

/// 未完成文件的后缀
pub const PARTIAL_SUFFIX: &str = ".incomplete";

/// 目标文件对应的未完成文件路径：`<目标>.incomplete`
pub fn partial_path_for(save_path: &Path) -> PathBuf {
    let mut name: OsString = save_path.as_os_str().to_owned();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

/// 远程文件下载器
pub struct RemoteFileDownloader {
    pub(crate) client: Client,
    pub(crate) file_data: Arc<RemoteFileData>,
    pub(crate) config: DownloadConfig,
    pub(crate) hooks: DownloadHooksContainer,
}

impl RemoteFile {
    /// 创建专属于本远程文件的下载器；可链式配置后调用 [`RemoteFileDownloader::send`] 执行下载。
    pub fn build_downloader(&self) -> RemoteFileDownloader {
        RemoteFileDownloader {
            client: self.hub_auth.client.clone(),
            file_data: Arc::clone(&self.data),
            config: DownloadConfig::default(),
            hooks: Default::default(),
        }
    }
}

impl RemoteFileDownloader {
    /// 设置保存路径；传空路径表示未设置。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        self.config.save_path = if p.as_os_str().is_empty() {
            None
        } else {
            Some(p.to_path_buf())
        };
        self
    }

    /// 是否从未完成文件续传，默认开启。
    pub fn resume(mut self, resume: bool) -> Self {
        self.config.resume = resume;
        self
    }

    /// 是否在已知摘要时校验 sha256，默认开启。
    pub fn verify_checksum(mut self, verify: bool) -> Self {
        self.config.verify_checksum = verify;
        self
    }

    /// 注册「开始前」钩子，参数为续传起点；闭包返回 `Err(HookAbort)` 会中止本次下载。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(u64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(super::hook_adapters::BeforeStartHookAdapter(f));
        self
    }

    /// 注册「进度」钩子；参数为已下载字节数（含续传前部分）、总大小（可能未知为 `None`）。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.hooks.add(super::hook_adapters::OnProgressHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子；下载成功结束（含已完整跳过）后以结果调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(DownloadResult) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(super::hook_adapters::AfterCompleteHookAdapter(f));
        self
    }

    /// 添加完整钩子，在下载各阶段插入逻辑。
    pub fn with_hook(
        mut self,
        hook: impl DownloadHook + 'static,
    ) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 添加已装箱的完整钩子。
    pub fn with_boxed_hook(
        mut self,
        hook: Box<dyn DownloadHook>,
    ) -> Self {
        self.hooks.add_boxed(hook);
        self
    }

    /// 执行下载。本地已完整时返回 `AlreadyComplete`，否则下载（或续传）后返回 `Saved`。
    pub async fn send(mut self) -> Result<DownloadResult, DownloadError> {
        let save_path = self
            .config
            .save_path
            .clone()
            .ok_or(DownloadError::NoDestination)?;
        let partial_path = partial_path_for(&save_path);
        let total = self.file_data.size;

        let outcome = compute_resume_start(ComputeResumeStartParams {
            save_path: &save_path,
            partial_path: &partial_path,
            total,
            resume: self.config.resume,
        })
        .await?;

        let start = match outcome {
            ResumeOutcome::AlreadyComplete => {
                let done = match total {
                    Some(t) => t,
                    None => fs::metadata(&save_path)
                        .await
                        .map(|m| m.len())
                        .map_err(DownloadError::ReadFile)?,
                };
                self.hooks
                    .run_before_start(&self.file_data, done)
                    .await?;
                self.hooks.run_on_progress(done, Some(done));

                debug!(
                    file = %self.file_data.relative_path,
                    "本地文件已完整，跳过"
                );
                let result = DownloadResult::AlreadyComplete;
                self.hooks.run_after_complete(&result).await;
                return Ok(result);
            }
            ResumeOutcome::DownloadFrom { start } => start,
        };

        self.hooks.run_before_start(&self.file_data, start).await?;

        if let Some(parent) = save_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(DownloadError::CreateFile)?;
        }

        if start > 0 {
            info!(
                file = %self.file_data.relative_path,
                start,
                "从断点继续下载"
            );
        }

        let stats = run_transfer(RunTransferParams {
            client: &self.client,
            file_data: &self.file_data,
            partial_path: &partial_path,
            start,
            hooks: &mut self.hooks,
        })
        .await?;

        self.finalize(&partial_path, &save_path).await?;

        let result = DownloadResult::Saved {
            resumed_from: stats.resumed_from,
            bytes_written: stats.bytes_written,
        };
        self.hooks.run_after_complete(&result).await;

        Ok(result)
    }

    /// 校验未完成文件的大小与摘要，通过后移动到目标路径。
    async fn finalize(
        &self,
        partial_path: &Path,
        save_path: &Path,
    ) -> Result<(), DownloadError> {
        let actual = fs::metadata(partial_path)
            .await
            .map(|m| m.len())
            .map_err(DownloadError::ReadFile)?;

        if let Some(expected) = self.file_data.size {
            if actual != expected {
                // 比远程大说明数据已损坏，比远程小则保留以便下次续传
                if actual > expected {
                    let _ = fs::remove_file(partial_path).await;
                }
                return Err(DownloadError::SizeMismatch { expected, actual });
            }
        }

        if self.config.verify_checksum {
            if let Some(expected) = self.file_data.sha256.as_deref() {
                let actual = sha256_file(partial_path).await?;
                if !actual.eq_ignore_ascii_case(expected) {
                    warn!(
                        file = %self.file_data.relative_path,
                        "sha256 校验失败，丢弃已下载数据"
                    );
                    fs::remove_file(partial_path)
                        .await
                        .map_err(DownloadError::RemoveTempFile)?;
                    return Err(DownloadError::ChecksumMismatch {
                        expected: expected.to_string(),
                        actual,
                    });
                }
            }
        }

        // 目标路径可能是上一次留下的符号链接，先移除再改名
        if let Ok(meta) = fs::symlink_metadata(save_path).await {
            if meta.file_type().is_symlink() {
                fs::remove_file(save_path)
                    .await
                    .map_err(DownloadError::Finalize)?;
            }
        }

        fs::rename(partial_path, save_path)
            .await
            .map_err(DownloadError::Finalize)
    }
}
