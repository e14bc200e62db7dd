//! 整个快照的下载：完整拷贝、重复运行跳过、链接模式与失败转换。

use httpmock::prelude::*;
use tempfile::TempDir;

use crate::fetch_snapshot;
use crate::fetcher::{AssetFetcher, FetchOutcome, FetchRequest, SnapshotTransfer};
use crate::remote_file::partial_path_for;
use crate::snapshot::{CacheLayout, SnapshotDownloader};
use crate::tests::{
    hub_auth, mock_file, mock_repo_info, repo_json, sha256_hex, CONFIG, REPO_ID, REVISION_SHA,
    WEIGHTS,
};

#[tokio::test]
async fn copies_every_file_into_destination() {
    let server = MockServer::start_async().await;
    mock_repo_info(&server, repo_json(&[&CONFIG, &WEIGHTS]));
    let config = mock_file(&server, &CONFIG);
    let weights = mock_file(&server, &WEIGHTS);
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("models").join("tiny");

    let outcome = fetch_snapshot(&hub_auth(&server), &FetchRequest::new(REPO_ID, &dest)).await;

    assert_eq!(outcome, FetchOutcome::Success { local_path: dest.clone() });
    config.assert();
    weights.assert();
    let weights_path = dest.join("unet").join("diffusion_pytorch_model.bin");
    assert_eq!(std::fs::read(dest.join("config.json")).unwrap(), CONFIG.body);
    assert_eq!(std::fs::read(&weights_path).unwrap(), WEIGHTS.body);
    // 完整拷贝模式下不会出现链接
    let meta = std::fs::symlink_metadata(&weights_path).unwrap();
    assert!(!meta.file_type().is_symlink());
    assert!(!partial_path_for(&weights_path).exists());
}

#[tokio::test]
async fn second_run_skips_complete_files() {
    let server = MockServer::start_async().await;
    let info = mock_repo_info(&server, repo_json(&[&CONFIG, &WEIGHTS]));
    let config = mock_file(&server, &CONFIG);
    let weights = mock_file(&server, &WEIGHTS);
    let dir = TempDir::new().unwrap();

    let transfer = SnapshotDownloader::new(hub_auth(&server));
    let request = FetchRequest::new(REPO_ID, dir.path());

    let first = transfer.retrieve_snapshot(&request).await.unwrap();
    let second = transfer.retrieve_snapshot(&request).await.unwrap();

    assert_eq!(first.revision_sha, REVISION_SHA);
    assert_eq!(first.files_downloaded, 2);
    assert_eq!(
        first.bytes_downloaded,
        (CONFIG.body.len() + WEIGHTS.body.len()) as u64
    );
    assert_eq!(second.files_skipped, 2);
    assert_eq!(second.bytes_downloaded, 0);
    assert_eq!(info.calls(), 2);
    assert_eq!(config.calls(), 1);
    assert_eq!(weights.calls(), 1);
}

#[tokio::test]
async fn interrupted_file_resumes_on_next_run() {
    let server = MockServer::start_async().await;
    mock_repo_info(&server, repo_json(&[&WEIGHTS]));
    let split = 30;
    let ranged = server.mock(|when, then| {
        when.method(GET)
            .path(crate::tests::resolve_path(&WEIGHTS))
            .header("range", format!("bytes={split}-"));
        then.status(206).body(&WEIGHTS.body[split..]);
    });
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("unet").join("diffusion_pytorch_model.bin");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(partial_path_for(&target), &WEIGHTS.body[..split]).unwrap();

    let fetcher = AssetFetcher::new(SnapshotDownloader::new(hub_auth(&server)));
    let request = FetchRequest::new(REPO_ID, dir.path());

    let summary = fetcher.try_fetch(&request).await.unwrap();
    assert_eq!(summary.bytes_downloaded, (WEIGHTS.body.len() - split) as u64);
    ranged.assert();
    assert_eq!(std::fs::read(&target).unwrap(), WEIGHTS.body);

    // 再次运行时文件已完整
    assert!(fetcher.fetch(&request).await.is_success());
    assert_eq!(ranged.calls(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn symlink_mode_links_into_cache() {
    let server = MockServer::start_async().await;
    mock_repo_info(&server, repo_json(&[&WEIGHTS]));
    mock_file(&server, &WEIGHTS);
    let dest = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();

    let fetcher = AssetFetcher::new(
        SnapshotDownloader::new(hub_auth(&server)).cache_dir(cache.path()),
    );
    let request = FetchRequest::new(REPO_ID, dest.path()).use_symlinks(true);
    let outcome = fetcher.fetch(&request).await;
    assert!(outcome.is_success(), "{outcome:?}");

    let link = dest.path().join("unet").join("diffusion_pytorch_model.bin");
    let blob = CacheLayout::new(cache.path()).blob_path(
        request.repo_type,
        REPO_ID,
        &sha256_hex(WEIGHTS.body),
    );
    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_link(&link).unwrap(), blob);
    assert_eq!(std::fs::read(&link).unwrap(), WEIGHTS.body);
}

#[tokio::test]
async fn missing_repo_becomes_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/models/org/missing/revision/main");
        then.status(404);
    });
    let dir = TempDir::new().unwrap();

    let outcome = fetch_snapshot(
        &hub_auth(&server),
        &FetchRequest::new("org/missing", dir.path()),
    )
    .await;

    let message = outcome.error_message().unwrap();
    assert!(message.contains("org/missing"), "{message}");
}

#[tokio::test]
async fn failing_file_stops_and_keeps_earlier_files() {
    let server = MockServer::start_async().await;
    mock_repo_info(&server, repo_json(&[&CONFIG, &WEIGHTS]));
    mock_file(&server, &CONFIG);
    server.mock(|when, then| {
        when.method(GET).path(crate::tests::resolve_path(&WEIGHTS));
        then.status(500);
    });
    let dir = TempDir::new().unwrap();

    let outcome = fetch_snapshot(&hub_auth(&server), &FetchRequest::new(REPO_ID, dir.path())).await;

    let message = outcome.error_message().unwrap();
    assert!(message.contains(WEIGHTS.path), "{message}");
    assert_eq!(std::fs::read(dir.path().join("config.json")).unwrap(), CONFIG.body);
}

#[cfg(unix)]
#[tokio::test]
async fn unreachable_hub_reports_underlying_cause() {
    // 端口 1 没有服务监听，连接会被拒绝
    let auth = crate::auth::HubAuth::new("http://127.0.0.1:1", None).unwrap();
    let dir = TempDir::new().unwrap();

    let outcome = fetch_snapshot(&auth, &FetchRequest::new("org/name", dir.path())).await;

    let message = outcome.error_message().unwrap();
    assert!(message.contains("127.0.0.1:1"), "{message}");
    assert!(message.to_lowercase().contains("refused"), "{message}");
}

#[tokio::test]
async fn symlink_mode_copies_file_without_blob_name() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/models/{REPO_ID}/revision/main"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "sha": REVISION_SHA,
                "siblings": [{ "rfilename": CONFIG.path, "size": CONFIG.body.len() }]
            }));
    });
    let file = mock_file(&server, &CONFIG);
    let dest = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();

    let fetcher = AssetFetcher::new(
        SnapshotDownloader::new(hub_auth(&server)).cache_dir(cache.path()),
    );
    let outcome = fetcher
        .fetch(&FetchRequest::new(REPO_ID, dest.path()).use_symlinks(true))
        .await;

    assert!(outcome.is_success(), "{outcome:?}");
    file.assert();
    let target = dest.path().join(CONFIG.path);
    let meta = std::fs::symlink_metadata(&target).unwrap();
    assert!(meta.file_type().is_file());
    assert_eq!(std::fs::read(&target).unwrap(), CONFIG.body);
    assert_eq!(std::fs::read_dir(cache.path()).unwrap().count(), 0);
}
