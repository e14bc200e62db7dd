pub mod asset_fetcher;
pub mod fetch_error;
pub mod fetch_outcome;
pub mod fetch_request;
pub mod snapshot_summary;
pub mod transfer_error;

pub use asset_fetcher::AssetFetcher;
pub use fetch_error::FetchError;
pub use fetch_outcome::FetchOutcome;
pub use fetch_request::FetchRequest;
pub use snapshot_summary::SnapshotSummary;
pub use transfer_error::TransferError;
