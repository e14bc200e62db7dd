//! 终端横幅：开始前打印配置，结束后打印结果。写入任意 `Write` 以便测试。

use std::io::{self, Write};

use crate::internal::fetcher::structs::{FetchOutcome, FetchRequest};

const RULE: &str = "============================================================";

/// 下载失败时给出的镜像源示例
pub const MIRROR_HINT: &str = "https://hf-mirror.com";

fn on_off(flag: bool) -> &'static str {
    if flag { "开启" } else { "关闭" }
}

pub fn write_start<W: Write>(
    out: &mut W,
    request: &FetchRequest,
    endpoint: &str,
) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "开始下载 {}", request.repository_id)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "仓库: {} ({})", request.repository_id, request.repo_type)?;
    writeln!(out, "下载目录: {}", request.destination_path.display())?;
    writeln!(out, "版本: {}", request.revision)?;
    writeln!(out, "断点续传: {}", on_off(request.resume))?;
    writeln!(
        out,
        "文件形式: {}",
        if request.use_symlinks {
            "链接到共享缓存"
        } else {
            "完整拷贝"
        }
    )?;
    writeln!(out, "下载源: {endpoint}")?;
    writeln!(out, "{RULE}")?;
    out.flush()
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &FetchOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    match outcome {
        FetchOutcome::Success { local_path } => {
            writeln!(out, "✅ 下载完成！")?;
            writeln!(out, "{RULE}")?;
            writeln!(out, "文件位置: {}", local_path.display())?;
        }
        FetchOutcome::Failure { error_message } => {
            writeln!(out, "❌ 下载失败: {error_message}")?;
            writeln!(out, "{RULE}")?;
            writeln!(
                out,
                "请检查网络连接，或使用镜像源重试（例如 --endpoint {MIRROR_HINT}）"
            )?;
            writeln!(out, "未完成的文件已保留，再次运行会从断点继续")?;
        }
    }
    out.flush()
}
