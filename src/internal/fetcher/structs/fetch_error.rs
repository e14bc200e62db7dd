//! 获取流程的错误类型：目录创建失败与传输失败。

use std::path::PathBuf;

use thiserror::Error;

use super::transfer_error::TransferError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("请求无效: {0}")]
    InvalidRequest(String),

    #[error("创建下载目录 {} 失败: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transfer(#[from] TransferError),
}
