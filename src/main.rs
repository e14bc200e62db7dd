use std::process::ExitCode;

use clap::Parser;

use hub_snapshot::cli::{run, Args};
use hub_snapshot::telemetry::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // 先加载 .env，环境变量才能作为参数默认值
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("日志初始化失败: {e}");
    }

    run(args).await
}
