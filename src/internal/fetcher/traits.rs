pub mod snapshot_transfer;
