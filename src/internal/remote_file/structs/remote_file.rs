use std::sync::Arc;

use crate::{
    auth::HubAuth,
    hub::{structs::RepoInfo, traits::ToRemoteFileData, HubError},
    remote_file::RemoteFileData,
};

#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub data: Arc<RemoteFileData>, // 使用 Arc 以支持多线程共享
    pub hub_auth: HubAuth,
}

impl RemoteFile {
    pub fn from_repo_info(
        hub_auth: &HubAuth,
        repo_info: RepoInfo,
        request: &crate::hub::functions::RepoRef<'_>,
    ) -> Result<Vec<Self>, HubError> {
        let resources =
            repo_info.to_remote_file_data(&hub_auth.endpoint, request)?;

        let files = resources
            .into_iter()
            .map(|remote_file_data| Self {
                data: Arc::new(remote_file_data),
                hub_auth: hub_auth.clone(),
            })
            .collect::<Vec<Self>>();

        Ok(files)
    }
}
