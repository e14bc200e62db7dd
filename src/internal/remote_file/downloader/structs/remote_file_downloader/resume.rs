//! 断点续传——根据目标文件与未完成文件的状态，决定续传起点或已完整。

use std::path::Path;

use tokio::fs;
use tracing::debug;

use super::error::DownloadError;

/// 断点续传检查结果：已完整可直接返回，或从某偏移开始下载。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    AlreadyComplete,
    DownloadFrom { start: u64 },
}

/// 计算续传起点时的参数（形参超过 3 个，用 struct 承载）。
pub struct ComputeResumeStartParams<'a> {
    pub save_path: &'a Path,
    pub partial_path: &'a Path,
    pub total: Option<u64>,
    pub resume: bool,
}

/// 普通文件的长度；不存在或是符号链接时为 `None`
async fn file_len(path: &Path) -> Option<u64> {
    fs::symlink_metadata(path)
        .await
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
}

async fn discard(path: &Path) -> Result<(), DownloadError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DownloadError::RemoveTempFile(e)),
    }
}

/// 根据本地文件是否存在及大小，决定续传起点或已完整。
///
/// - 目标文件存在且大小与远程一致（或远程大小未知）：已完整；
/// - 未开启续传：丢弃未完成文件，从 0 开始；
/// - 未完成文件比远程大：数据不可信，丢弃后从 0 开始；
/// - 否则从未完成文件的长度处继续。
pub async fn compute_resume_start(
    params: ComputeResumeStartParams<'_>,
) -> Result<ResumeOutcome, DownloadError> {
    if let Some(local_len) = file_len(params.save_path).await {
        if params.total.is_none_or(|t| t == local_len) {
            return Ok(ResumeOutcome::AlreadyComplete);
        }
        debug!(
            path = %params.save_path.display(),
            local_len,
            "目标文件大小与远程不一致，重新下载"
        );
    }

    let partial_len = match file_len(params.partial_path).await {
        Some(len) => len,
        None => return Ok(ResumeOutcome::DownloadFrom { start: 0 }),
    };

    if !params.resume {
        discard(params.partial_path).await?;
        return Ok(ResumeOutcome::DownloadFrom { start: 0 });
    }

    if params.total.is_some_and(|t| partial_len > t) {
        discard(params.partial_path).await?;
        return Ok(ResumeOutcome::DownloadFrom { start: 0 });
    }

    Ok(ResumeOutcome::DownloadFrom { start: partial_len })
}
