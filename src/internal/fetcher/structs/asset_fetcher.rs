use std::error::Error;

use tokio::fs;
use tracing::{error, info};

use crate::internal::fetcher::traits::snapshot_transfer::SnapshotTransfer;

use super::{FetchError, FetchOutcome, FetchRequest, SnapshotSummary};

/// 快照获取器：确保目录存在 → 委托传输 → 转换为终态结果。
///
/// 每次调用只执行一次传输，本身不做重试；续传语义由传输协作者提供。
#[derive(Debug, Clone)]
pub struct AssetFetcher<T> {
    transfer: T,
}

impl<T: SnapshotTransfer> AssetFetcher<T> {
    pub fn new(transfer: T) -> Self {
        Self { transfer }
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// 执行获取。任何错误都会转换为 [`FetchOutcome::Failure`]，不会向外传播。
    pub async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        match self.try_fetch(request).await {
            Ok(summary) => {
                info!(
                    repo = %request.repository_id,
                    revision = %summary.revision_sha,
                    files = summary.files_total,
                    skipped = summary.files_skipped,
                    bytes = summary.bytes_downloaded,
                    "快照下载完成"
                );
                FetchOutcome::Success {
                    local_path: request.destination_path.clone(),
                }
            }
            Err(e) => {
                let error_message = error_chain_message(&e);
                error!(repo = %request.repository_id, error = %error_message, "快照下载失败");
                FetchOutcome::Failure { error_message }
            }
        }
    }

    /// 与 [`fetch`](Self::fetch) 相同，但保留具体错误类型。
    pub async fn try_fetch(
        &self,
        request: &FetchRequest,
    ) -> Result<SnapshotSummary, FetchError> {
        request.validate().map_err(FetchError::InvalidRequest)?;

        // 目录已存在时不报错
        let destination = request.destination();
        fs::create_dir_all(destination)
            .await
            .map_err(|source| FetchError::DirectoryCreation {
                path: destination.to_path_buf(),
                source,
            })?;

        let summary = self.transfer.retrieve_snapshot(request).await?;
        Ok(summary)
    }
}

/// 拼接整条错误链，底层原因（如连接被拒绝）只在 `source()` 中。
/// 已经出现在外层文本里的原因不再重复。
fn error_chain_message(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    for cause in std::iter::successors(err.source(), |&e| e.source()) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
    }
    message
}
