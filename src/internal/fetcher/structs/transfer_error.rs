//! 传输协作者的错误类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::hub::error::HubError;
use crate::internal::remote_file::downloader::structs::DownloadError;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Hub(#[from] HubError),

    #[error("下载 {file} 失败: {source}")]
    Download {
        file: String,
        #[source]
        source: DownloadError,
    },

    #[error("创建目录 {} 失败: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("创建链接 {} 失败: {source}", link.display())]
    Link {
        link: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("未找到可用的共享缓存目录")]
    NoCacheDir,

    /// 其他协作者实现的自定义错误
    #[error("{0}")]
    Other(String),
}
