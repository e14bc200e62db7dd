use async_trait::async_trait;

use crate::internal::fetcher::structs::{
    FetchRequest, SnapshotSummary, TransferError,
};

/// 传输协作者：把仓库快照的全部文件取到 `request.destination_path`。
///
/// 实现方需支持：
/// - 续传本地未完成的文件（`request.resume`）；
/// - 完整拷贝模式（`request.use_symlinks == false` 时不得留下指向缓存的链接）；
/// - 失败时返回可读的错误描述。
///
/// 目标目录在调用前已由 [`AssetFetcher`](crate::fetcher::AssetFetcher) 创建。
#[async_trait]
pub trait SnapshotTransfer: Send + Sync {
    async fn retrieve_snapshot(
        &self,
        request: &FetchRequest,
    ) -> Result<SnapshotSummary, TransferError>;
}

#[async_trait]
impl<T: SnapshotTransfer + ?Sized> SnapshotTransfer for std::sync::Arc<T> {
    async fn retrieve_snapshot(
        &self,
        request: &FetchRequest,
    ) -> Result<SnapshotSummary, TransferError> {
        (**self).retrieve_snapshot(request).await
    }
}
