use std::path::PathBuf;

use clap::Parser;

use crate::auth::DEFAULT_ENDPOINT;
use crate::fetcher::{FetchRequest, DEFAULT_REVISION};
use crate::hub::enums::RepoType;
use crate::internal::telemetry::DEFAULT_LOG_LEVEL;

/// 默认下载的仓库
pub const DEFAULT_REPO: &str = "THUDM/CogVideoX-5b-I2V";

/// 默认的本地目录
pub const DEFAULT_LOCAL_DIR: &str = "models/CogVideoX-5b-I2V";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "下载 Hub 仓库快照到本地目录，支持断点续传")]
pub struct Args {
    /// 仓库标识，如 org/name
    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    /// 本地下载目录，不存在时自动创建
    #[arg(long = "local-dir", value_name = "DIR", default_value = DEFAULT_LOCAL_DIR)]
    pub local_dir: PathBuf,

    /// 分支、标签或提交哈希
    #[arg(long, default_value = DEFAULT_REVISION)]
    pub revision: String,

    /// 仓库类型：model / dataset / space
    #[arg(long, default_value = "model")]
    pub repo_type: RepoType,

    /// 不续传，未完成的文件从头下载
    #[arg(long)]
    pub no_resume: bool,

    /// 以指向共享缓存的符号链接代替完整拷贝
    #[arg(long)]
    pub use_symlinks: bool,

    /// 跳过 sha256 校验
    #[arg(long)]
    pub no_verify: bool,

    /// Hub 地址，可换成镜像源
    #[arg(long, env = "HF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// 访问令牌（私有或受限仓库需要）
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// 共享缓存目录，仅链接模式使用
    #[arg(long, env = "HF_HUB_CACHE", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// 不显示进度条
    #[arg(long, short)]
    pub quiet: bool,

    /// 日志级别或过滤指令
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Args {
    pub fn to_request(&self) -> FetchRequest {
        FetchRequest::new(self.repo.clone(), self.local_dir.clone())
            .resume(!self.no_resume)
            .use_symlinks(self.use_symlinks)
            .revision(self.revision.clone())
            .repo_type(self.repo_type)
    }
}
