//! 仓库元数据读取：状态码映射、令牌、文件列表转换。

use httpmock::prelude::*;

use crate::auth::HubAuth;
use crate::fetcher::FetchRequest;
use crate::get_snapshot_files;
use crate::hub::enums::RepoType;
use crate::hub::functions::{get_repo_info, RepoRef};
use crate::hub::HubError;
use crate::tests::{
    hub_auth, mock_repo_info, repo_json, sha256_hex, CONFIG, REPO_ID, REVISION_SHA, WEIGHTS,
};

#[tokio::test]
async fn repo_info_lists_siblings() {
    let server = MockServer::start_async().await;
    let mock = mock_repo_info(&server, repo_json(&[&CONFIG, &WEIGHTS]));

    let info = get_repo_info(&hub_auth(&server), &RepoRef::model(REPO_ID, "main"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(info.id.as_deref(), Some(REPO_ID));
    assert_eq!(info.sha.as_deref(), Some(REVISION_SHA));
    assert_eq!(info.siblings.len(), 2);
    assert!(info.last_modified.is_some());
    let lfs = info.siblings[1].lfs.as_ref().unwrap();
    assert_eq!(lfs.sha256, sha256_hex(WEIGHTS.body));
}

#[tokio::test]
async fn missing_repo_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/models/org/missing/revision/main");
        then.status(404).body(r#"{"error":"Repository not found"}"#);
    });

    let err = get_repo_info(&hub_auth(&server), &RepoRef::model("org/missing", "main"))
        .await
        .unwrap_err();

    match err {
        HubError::RepoNotFound { repo_id, revision } => {
            assert_eq!(repo_id, "org/missing");
            assert_eq!(revision, "main");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn gated_repo_maps_to_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/models/org/gated/revision/main");
        then.status(401);
    });

    let err = get_repo_info(&hub_auth(&server), &RepoRef::model("org/gated", "main"))
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Unauthorized { .. }), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/models/org/broken/revision/main");
        then.status(500).body("upstream unavailable");
    });

    let err = get_repo_info(&hub_auth(&server), &RepoRef::model("org/broken", "main"))
        .await
        .unwrap_err();
    match err {
        HubError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/datasets/org/data/revision/v1.0")
            .header("authorization", "Bearer hf_test_token");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "sha": REVISION_SHA, "siblings": [] }));
    });

    let auth = HubAuth::new(&server.base_url(), Some("hf_test_token")).unwrap();
    let repo = RepoRef {
        repo_type: RepoType::Dataset,
        repo_id: "org/data",
        revision: "v1.0",
    };
    let info = get_repo_info(&auth, &repo).await.unwrap();

    mock.assert();
    assert!(info.siblings.is_empty());
}

#[tokio::test]
async fn files_are_pinned_to_resolved_commit() {
    let server = MockServer::start_async().await;
    mock_repo_info(&server, repo_json(&[&CONFIG, &WEIGHTS]));

    let files = get_snapshot_files(&hub_auth(&server), &FetchRequest::new(REPO_ID, "unused"))
        .await
        .unwrap();

    assert_eq!(files.len(), 2);
    let weights = files
        .iter()
        .find(|f| f.data.relative_path == WEIGHTS.path)
        .unwrap();
    assert_eq!(weights.data.revision, REVISION_SHA);
    assert_eq!(weights.data.name, "diffusion_pytorch_model.bin");
    assert_eq!(weights.data.size, Some(WEIGHTS.body.len() as u64));
    assert_eq!(weights.data.sha256.as_deref(), Some(sha256_hex(WEIGHTS.body).as_str()));
    assert!(weights
        .data
        .url
        .path()
        .ends_with(&format!("/resolve/{REVISION_SHA}/unet/diffusion_pytorch_model.bin")));

    let config = files.iter().find(|f| f.data.relative_path == CONFIG.path).unwrap();
    assert_eq!(config.data.sha256, None);
}

#[tokio::test]
async fn traversal_paths_are_rejected() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/models/{REPO_ID}/revision/main"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "sha": REVISION_SHA,
                "siblings": [{ "rfilename": "../escape.txt", "size": 1 }]
            }));
    });

    let err = get_snapshot_files(&hub_auth(&server), &FetchRequest::new(REPO_ID, "unused"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("../escape.txt"), "{err}");
}
