pub mod download_config;
pub mod download_hooks_container;
pub mod download_result;
pub(crate) mod hook_adapters;
pub mod remote_file_downloader;

// 重导出公共类型
pub use download_config::DownloadConfig;
pub use download_hooks_container::DownloadHooksContainer;
pub use download_result::DownloadResult;
pub use remote_file_downloader::{
    partial_path_for, DownloadError, RemoteFileDownloader,
};
