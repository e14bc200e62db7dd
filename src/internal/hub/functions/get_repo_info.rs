use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;
use tracing::debug;

use crate::auth::HubAuth;
use crate::internal::hub::enums::RepoType;
use crate::internal::hub::error::HubError;
use crate::internal::hub::raw_json::repo_info::RepoInfo;

/// 单个路径段的编码集，`/` 也会被编码
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b':')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// 一次快照请求所指向的仓库版本
#[derive(Debug, Clone, Copy)]
pub struct RepoRef<'a> {
    pub repo_type: RepoType,
    pub repo_id: &'a str,
    pub revision: &'a str,
}

impl<'a> RepoRef<'a> {
    pub fn model(repo_id: &'a str, revision: &'a str) -> Self {
        Self {
            repo_type: RepoType::Model,
            repo_id,
            revision,
        }
    }
}

/// 按段编码 `a/b c` 这类路径，`/` 保留为分隔符
pub(crate) fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|seg| utf8_percent_encode(seg, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// 获取仓库元数据（含文件列表、大小与 LFS 摘要）
pub async fn get_repo_info(
    hub_auth: &HubAuth,
    repo: &RepoRef<'_>,
) -> Result<RepoInfo, HubError> {
    let repo_id = repo.repo_id.trim().trim_matches('/');
    if repo_id.is_empty() {
        return Err(HubError::EmptyRepoId);
    }

    let mut url = hub_auth
        .join(&format!(
            "api/{}/{}/revision/{}",
            repo.repo_type.api_segment(),
            encode_path(repo_id),
            utf8_percent_encode(repo.revision, PATH_SEGMENT),
        ))
        .map_err(HubError::InvalidUrl)?;
    url.query_pairs_mut().append_pair("blobs", "true");

    debug!(%url, "读取仓库元数据");

    let res = hub_auth
        .client
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?;

    let status = res.status();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(HubError::Unauthorized {
                repo_id: repo_id.to_string(),
                status,
            });
        }
        StatusCode::NOT_FOUND => {
            return Err(HubError::RepoNotFound {
                repo_id: repo_id.to_string(),
                revision: repo.revision.to_string(),
            });
        }
        _ => {}
    }

    let body = res.bytes().await?;

    if !status.is_success() {
        return Err(HubError::Status {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let repo_info: RepoInfo = serde_json::from_slice(&body)?;

    Ok(repo_info)
}
