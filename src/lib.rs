/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::*;
    pub use internal::auth::structs::hub_auth::{HubAuth, DEFAULT_ENDPOINT};
}

/// 对外提供 Hub 基础访问能力，不能限制死在入口函数中，以防有人自己要用
pub mod hub {
    pub use crate::internal::hub::error::HubError;

    pub mod functions {
        use crate::internal;
        pub use internal::hub::functions::get_repo_info::{get_repo_info, RepoRef};
    }

    pub mod enums {
        use crate::internal;
        pub use internal::hub::enums::*;
    }

    pub mod traits {
        pub use crate::internal::hub::raw_json::impl_repo_info::ToRemoteFileData;
    }

    pub mod structs {
        pub use crate::internal::hub::raw_json::repo_info::*;
    }
}

pub mod remote_file {
    use crate::internal;
    // 结构体模型
    pub use internal::remote_file::structs::remote_file::*;
    pub use internal::remote_file::structs::remote_file_data::*;
    // 下载器：类型与入口（以 lib 为中心，此处统一导出）
    pub use internal::remote_file::downloader::structs::*;
    pub use internal::remote_file::downloader::traits::*;
}

/// 快照获取：请求、终态结果与传输协作者接口
pub mod fetcher {
    use crate::internal;
    pub use internal::fetcher::structs::*;
    pub use internal::fetcher::structs::fetch_request::DEFAULT_REVISION;
    pub use internal::fetcher::traits::snapshot_transfer::SnapshotTransfer;
}

pub mod snapshot {
    use crate::internal;
    pub use internal::snapshot::structs::*;
    pub use internal::snapshot::structs::snapshot_downloader::FileHookFactory;
}

pub mod cli {
    use crate::internal;
    pub use internal::cli::*;
}

pub mod telemetry {
    use crate::internal;
    pub use internal::telemetry::*;
}
