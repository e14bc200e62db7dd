pub mod get_repo_info;
