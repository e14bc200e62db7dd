pub mod auth;
pub mod cli;
pub mod entrance;
pub mod fetcher;
pub mod hub;
pub mod remote_file;
pub mod snapshot;
pub mod telemetry;
