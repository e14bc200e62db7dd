//! 单线程流式传输：按续传起点请求，写入未完成文件并更新进度。

use std::path::Path;

use futures_util::StreamExt;
use reqwest::StatusCode;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::internal::remote_file::downloader::structs::DownloadHooksContainer;
use crate::internal::remote_file::structs::remote_file_data::RemoteFileData;

use super::error::DownloadError;
use super::range_request::{check_status, fetch_range_response, FetchRangeParams};

/// 执行传输时的参数（形参超过 3 个，用 struct 承载）。
pub struct RunTransferParams<'a> {
    pub client: &'a reqwest::Client,
    pub file_data: &'a RemoteFileData,
    pub partial_path: &'a Path,
    pub start: u64,
    pub hooks: &'a mut DownloadHooksContainer,
}

/// 传输统计：实际续传起点与本次写入字节数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStats {
    pub resumed_from: u64,
    pub bytes_written: u64,
}

async fn open_partial(path: &Path, start: u64) -> Result<File, DownloadError> {
    if start == 0 {
        return File::create(path).await.map_err(DownloadError::CreateFile);
    }
    OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(DownloadError::CreateFile)
}

/// 从 `start` 开始传输剩余数据到未完成文件。
///
/// 服务器不支持 Range（返回 200）时截断重来；Range 不可满足（416）时丢弃部分数据从零重来。
pub async fn run_transfer(
    params: RunTransferParams<'_>,
) -> Result<TransferStats, DownloadError> {
    let total = params.file_data.size;
    let mut start = params.start;

    // 未完成文件其实已写满，只差收尾
    if start > 0 && total == Some(start) {
        params.hooks.run_on_progress(start, total);
        return Ok(TransferStats {
            resumed_from: start,
            bytes_written: 0,
        });
    }

    let mut resp = fetch_range_response(FetchRangeParams {
        client: params.client,
        url: &params.file_data.url,
        start,
    })
    .await?;

    if start > 0 {
        match resp.status() {
            StatusCode::PARTIAL_CONTENT => {}
            StatusCode::RANGE_NOT_SATISFIABLE => {
                warn!(
                    file = %params.file_data.relative_path,
                    start,
                    "续传范围无效，从头下载"
                );
                start = 0;
                resp = fetch_range_response(FetchRangeParams {
                    client: params.client,
                    url: &params.file_data.url,
                    start,
                })
                .await?;
            }
            status if status.is_success() => {
                warn!(
                    file = %params.file_data.relative_path,
                    "服务器不支持 Range 请求，从头下载"
                );
                start = 0;
            }
            _ => {}
        }
    }

    check_status(&resp)?;

    let mut file = open_partial(params.partial_path, start).await?;
    let mut stream = resp.bytes_stream();
    let mut bytes_written: u64 = 0;

    params.hooks.run_on_progress(start, total);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        if chunk.is_empty() {
            continue;
        }

        file.write_all(&chunk)
            .await
            .map_err(DownloadError::WriteFile)?;
        bytes_written += chunk.len() as u64;

        params.hooks.run_on_chunk(&chunk);
        params.hooks.run_on_progress(start + bytes_written, total);
    }

    file.flush().await.map_err(DownloadError::WriteFile)?;
    file.sync_data().await.map_err(DownloadError::WriteFile)?;

    debug!(
        file = %params.file_data.relative_path,
        resumed_from = start,
        bytes_written,
        "传输结束"
    );

    Ok(TransferStats {
        resumed_from: start,
        bytes_written,
    })
}
