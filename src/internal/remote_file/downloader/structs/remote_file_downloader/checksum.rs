//! 下载完成后的 sha256 校验。

use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::error::DownloadError;

const READ_BUF_SIZE: usize = 1024 * 1024;

/// 流式计算文件的 sha256，返回小写十六进制。
pub async fn sha256_file(path: &Path) -> Result<String, DownloadError> {
    let mut file = File::open(path).await.map_err(DownloadError::ReadFile)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; READ_BUF_SIZE];
    loop {
        let n = file.read(&mut buf).await.map_err(DownloadError::ReadFile)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
