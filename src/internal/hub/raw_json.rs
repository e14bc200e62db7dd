pub mod impl_repo_info;
pub mod repo_info;
