use crate::{
    auth::HubAuth,
    fetcher::{AssetFetcher, FetchOutcome, FetchRequest, TransferError},
    remote_file::RemoteFile,
    snapshot::SnapshotDownloader,
};

/// 读取快照中的全部文件，并转换成领域结构体模型
///
/// 只读取元数据，不下载任何内容；下载地址已固定到解析出的提交。
///
/// example:
/// ```
/// use hub_snapshot::auth::HubAuth;
/// use hub_snapshot::fetcher::FetchRequest;
/// use hub_snapshot::get_snapshot_files;
///
/// let auth = HubAuth::new("https://hf-mirror.com", None).unwrap();
/// let request = FetchRequest::new("THUDM/CogVideoX-5b-I2V", "models/cog");
///
/// let files = get_snapshot_files(&auth, &request).await.unwrap();
/// ```
pub async fn get_snapshot_files(
    hub_auth: &HubAuth,
    request: &FetchRequest,
) -> Result<Vec<RemoteFile>, TransferError> {
    let (_, files) = SnapshotDownloader::new(hub_auth.clone())
        .list_files(request)
        .await?;
    Ok(files)
}

/// 本库主入口：把仓库快照下载到 `request.destination_path`
///
/// 目录不存在时会先创建；任何失败都以 [`FetchOutcome::Failure`] 返回。
/// 需要进度展示或自定义缓存目录时，直接组合 [`SnapshotDownloader`] 与 [`AssetFetcher`]。
pub async fn fetch_snapshot(
    hub_auth: &HubAuth,
    request: &FetchRequest,
) -> FetchOutcome {
    AssetFetcher::new(SnapshotDownloader::new(hub_auth.clone()))
        .fetch(request)
        .await
}
