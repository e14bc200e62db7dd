use percent_encoding::utf8_percent_encode;
use url::Url;

use crate::internal::hub::error::HubError;
use crate::internal::hub::functions::get_repo_info::{
    encode_path, RepoRef, PATH_SEGMENT,
};
use crate::internal::hub::raw_json::repo_info::{RepoInfo, Sibling};
use crate::remote_file::RemoteFileData;

pub trait ToRemoteFileData {
    fn to_remote_file_data(
        self,
        endpoint: &Url,
        repo: &RepoRef<'_>,
    ) -> Result<Vec<RemoteFileData>, HubError>;
}

/// 仓库内路径只允许普通的相对路径，避免写出目标目录
pub(crate) fn check_relative_path(path: &str) -> Result<(), HubError> {
    let unsafe_path = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path.contains('\0')
        || path
            .split('/')
            .any(|seg| seg.is_empty() || seg == "." || seg == "..");

    if unsafe_path {
        return Err(HubError::UnsafePath(path.to_string()));
    }
    Ok(())
}

fn clean_hash(raw: Option<String>) -> Option<String> {
    // 去掉首尾引号及空格，空串视为无
    raw.map(|s| s.trim().trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
}

impl ToRemoteFileData for RepoInfo {
    fn to_remote_file_data(
        self,
        endpoint: &Url,
        repo: &RepoRef<'_>,
    ) -> Result<Vec<RemoteFileData>, HubError> {
        let repo_id = repo.repo_id.trim().trim_matches('/');

        // 固定到解析出的提交，保证整个快照来自同一版本
        let revision = clean_hash(self.sha)
            .unwrap_or_else(|| repo.revision.to_string());

        let mut resources = Vec::with_capacity(self.siblings.len());

        for Sibling {
            rfilename,
            size,
            blob_id,
            lfs,
        } in self.siblings
        {
            check_relative_path(&rfilename)?;

            let url = endpoint
                .join(&format!(
                    "{}{}/resolve/{}/{}",
                    repo.repo_type.url_prefix(),
                    encode_path(repo_id),
                    utf8_percent_encode(&revision, PATH_SEGMENT),
                    encode_path(&rfilename),
                ))
                .map_err(|e| HubError::InvalidUrl(e.to_string()))?;

            let name = rfilename
                .rsplit('/')
                .next()
                .unwrap_or(rfilename.as_str())
                .to_string();

            // LFS 文件的大小以 lfs.size 为准，size 字段有时是指针文件大小
            let (size, sha256) = match lfs {
                Some(lfs) => (Some(lfs.size), clean_hash(Some(lfs.sha256))),
                None => (size, None),
            };

            resources.push(RemoteFileData {
                repo_id: repo_id.to_string(),
                repo_type: repo.repo_type,
                revision: revision.clone(),
                relative_path: rfilename,
                url,
                name,
                size,
                blob_id: clean_hash(blob_id),
                sha256,
                last_modified: self.last_modified,
            });
        }

        Ok(resources)
    }
}
