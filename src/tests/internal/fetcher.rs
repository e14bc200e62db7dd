//! 获取流程：目录准备、委托传输、结果转换。传输协作者用内存实现替代。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::fetcher::{
    AssetFetcher, FetchError, FetchOutcome, FetchRequest, SnapshotSummary, SnapshotTransfer,
    TransferError,
};

/// 记录收到的请求，并按预设返回成功或失败
#[derive(Default)]
struct FakeTransfer {
    fail_with: Option<String>,
    calls: Mutex<Vec<FetchRequest>>,
}

impl FakeTransfer {
    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<FetchRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotTransfer for FakeTransfer {
    async fn retrieve_snapshot(
        &self,
        request: &FetchRequest,
    ) -> Result<SnapshotSummary, TransferError> {
        self.calls.lock().unwrap().push(request.clone());
        // 调用时目标目录必须已经存在
        assert!(request.destination_path.is_dir());
        match &self.fail_with {
            Some(message) => Err(TransferError::Other(message.clone())),
            None => Ok(SnapshotSummary {
                revision_sha: "abc".into(),
                files_total: 1,
                files_downloaded: 1,
                bytes_downloaded: 4,
                ..Default::default()
            }),
        }
    }
}

#[tokio::test]
async fn success_reports_destination() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("models").join("CogVideoX-5b-I2V");
    let request = FetchRequest::new("THUDM/CogVideoX-5b-I2V", &dest);
    let fetcher = AssetFetcher::new(FakeTransfer::default());

    let outcome = fetcher.fetch(&request).await;

    assert_eq!(outcome, FetchOutcome::Success { local_path: dest.clone() });
    assert!(dest.is_dir());
    // 请求原样传给协作者，且只调用一次
    assert_eq!(fetcher.transfer().calls(), vec![request]);
}

#[tokio::test]
async fn transfer_failure_becomes_failure_outcome() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("models");
    let fetcher = AssetFetcher::new(FakeTransfer::failing("connection reset by peer"));

    let outcome = fetcher
        .fetch(&FetchRequest::new("THUDM/CogVideoX-5b-I2V", &dest))
        .await;

    assert!(!outcome.is_success());
    assert!(outcome
        .error_message()
        .unwrap()
        .contains("connection reset by peer"));
    // 目录在失败前已经创建，不会被清理
    assert!(dest.is_dir());
    assert_eq!(fetcher.transfer().calls().len(), 1);
}

#[tokio::test]
async fn existing_directory_is_fine() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("keep.txt"), b"keep").unwrap();
    let fetcher = AssetFetcher::new(FakeTransfer::default());
    let request = FetchRequest::new("org/name", dir.path());

    let first = fetcher.fetch(&request).await;
    let second = fetcher.fetch(&request).await;

    assert!(first.is_success());
    assert_eq!(first, second);
    assert!(dir.path().join("keep.txt").exists());
    assert_eq!(fetcher.transfer().calls().len(), 2);
}

#[tokio::test]
async fn uncreatable_directory_skips_transfer() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let fetcher = AssetFetcher::new(FakeTransfer::default());
    let request = FetchRequest::new("org/name", blocker.join("models"));

    let err = fetcher.try_fetch(&request).await.unwrap_err();
    assert!(matches!(err, FetchError::DirectoryCreation { .. }), "{err:?}");

    let outcome = fetcher.fetch(&request).await;
    assert!(!outcome.is_success());
    assert!(fetcher.transfer().calls().is_empty());
}

#[tokio::test]
async fn invalid_request_skips_transfer() {
    let dir = TempDir::new().unwrap();
    let fetcher = AssetFetcher::new(FakeTransfer::default());

    let outcome = fetcher.fetch(&FetchRequest::new("  ", dir.path())).await;

    assert!(!outcome.is_success());
    assert!(fetcher.transfer().calls().is_empty());
}

#[tokio::test]
async fn shared_transfer_through_arc() {
    let dir = TempDir::new().unwrap();
    let transfer = Arc::new(FakeTransfer::default());
    let fetcher = AssetFetcher::new(Arc::clone(&transfer));

    let outcome = fetcher.fetch(&FetchRequest::new("org/name", dir.path())).await;

    assert!(outcome.is_success());
    assert_eq!(transfer.calls().len(), 1);
}
