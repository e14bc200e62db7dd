use std::io;
use std::process::ExitCode;

use tracing::debug;

use crate::auth::HubAuth;
use crate::internal::fetcher::structs::{AssetFetcher, FetchOutcome};
use crate::internal::remote_file::downloader::traits::download::DownloadHook;
use crate::internal::snapshot::structs::SnapshotDownloader;

use super::args::Args;
use super::banner;
use super::progress_hook::ProgressBarHook;

/// 结果对应的进程退出码：成功 0，失败 1
pub fn exit_status(outcome: &FetchOutcome) -> u8 {
    if outcome.is_success() { 0 } else { 1 }
}

fn build_transfer(args: &Args) -> Result<SnapshotDownloader, String> {
    let hub_auth = HubAuth::new(&args.endpoint, args.token.as_deref())?;
    debug!(endpoint = %hub_auth.endpoint, token = hub_auth.has_token(), "已创建 Hub 客户端");

    let mut transfer = SnapshotDownloader::new(hub_auth).verify_checksum(!args.no_verify);
    if let Some(dir) = &args.cache_dir {
        transfer = transfer.cache_dir(dir);
    }
    if !args.quiet {
        transfer = transfer.with_file_hook(|file| {
            Box::new(ProgressBarHook::new(file)) as Box<dyn DownloadHook>
        });
    }
    Ok(transfer)
}

/// 执行一次下载并打印横幅，返回进程退出码。
pub async fn run(args: Args) -> ExitCode {
    let request = args.to_request();
    let mut out = io::stdout();

    let _ = banner::write_start(&mut out, &request, &args.endpoint);

    let outcome = match build_transfer(&args) {
        Ok(transfer) => AssetFetcher::new(transfer).fetch(&request).await,
        Err(error_message) => FetchOutcome::Failure { error_message },
    };

    let _ = banner::write_outcome(&mut out, &outcome);
    ExitCode::from(exit_status(&outcome))
}
