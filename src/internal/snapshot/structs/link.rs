//! 在目标目录中为缓存 blob 创建链接；无法创建链接时退回完整拷贝。

use std::io;
use std::path::Path;

use tokio::fs;
use tracing::warn;

/// 链接结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    Symlink,
    Copy,
}

#[cfg(unix)]
async fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    fs::symlink(src, dst).await
}

#[cfg(windows)]
async fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    fs::symlink_file(src, dst).await
}

#[cfg(not(any(unix, windows)))]
async fn symlink(_src: &Path, _dst: &Path) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "当前平台不支持符号链接"))
}

/// 移除目标位置已有的文件或链接；不存在时忽略。
pub async fn remove_existing(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} 是目录", path.display()),
        )),
        Ok(_) => fs::remove_file(path).await,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// 让 `link` 指向 `blob`。链接失败（权限、文件系统不支持等）时拷贝完整内容。
pub async fn link_or_copy(blob: &Path, link: &Path) -> io::Result<Materialized> {
    remove_existing(link).await?;

    match symlink(blob, link).await {
        Ok(()) => Ok(Materialized::Symlink),
        Err(e) => {
            warn!(
                link = %link.display(),
                error = %e,
                "无法创建符号链接，改为拷贝"
            );
            fs::copy(blob, link).await?;
            Ok(Materialized::Copy)
        }
    }
}
