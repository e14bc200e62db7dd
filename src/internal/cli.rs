//! 命令行入口：参数解析、横幅输出、进度条与退出码。

pub mod args;
pub mod banner;
pub mod progress_hook;
pub mod run;

pub use args::Args;
pub use run::{exit_status, run};
