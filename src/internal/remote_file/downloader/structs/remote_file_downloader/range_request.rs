//! 发起文件请求：续传时携带 Range 头，返回响应供流式读取。

use reqwest::header::RANGE;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use super::error::DownloadError;

/// 生成续传 Range 请求头：`bytes=start-`，读到文件末尾。
pub(super) fn range_header(start: u64) -> String {
    format!("bytes={}-", start)
}

/// 发起请求时的参数（形参超过 3 个时用 struct 承载）。
pub struct FetchRangeParams<'a> {
    pub client: &'a Client,
    pub url: &'a Url,
    pub start: u64,
}

/// 发起 GET 请求；`start > 0` 时只请求剩余部分。
pub async fn fetch_range_response(
    params: FetchRangeParams<'_>,
) -> Result<Response, DownloadError> {
    let mut req = params.client.get(params.url.clone());
    if params.start > 0 {
        req = req.header(RANGE, range_header(params.start));
    }
    Ok(req.send().await?)
}

/// 将非 2xx 响应转换为具体错误。
pub fn check_status(resp: &Response) -> Result<(), DownloadError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let url = resp.url().to_string();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DownloadError::Unauthorized { status, url }
        }
        StatusCode::NOT_FOUND => DownloadError::NotFound { url },
        _ => DownloadError::Status { status, url },
    })
}
