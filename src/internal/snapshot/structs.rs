pub mod cache_layout;
pub mod link;
pub mod snapshot_downloader;

pub use cache_layout::CacheLayout;
pub use snapshot_downloader::SnapshotDownloader;
