use std::path::{Path, PathBuf};

/// 一次获取的终态结果，每次调用恰好产生一个。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { local_path: PathBuf },
    Failure { error_message: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            FetchOutcome::Success { local_path } => Some(local_path),
            FetchOutcome::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchOutcome::Success { .. } => None,
            FetchOutcome::Failure { error_message } => Some(error_message),
        }
    }
}
