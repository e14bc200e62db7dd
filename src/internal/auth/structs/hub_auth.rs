use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use sha2::{Digest, Sha256};
use url::Url;

/// 官方 Hub 地址
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// 建立连接的超时时间；大文件传输本身不设整体超时
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储 Hub 访问地址（官方或镜像）与可选的访问令牌
/// - 用于仓库元数据读取与文件下载的网络访问功能支持
///
/// 默认Eq时会匹配endpoint和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct HubAuth {
    pub client: Client,    // 内部是Arc，不需要特殊处理
    pub endpoint: Arc<Url>, // 下载任务会跨线程持有，使用 Arc
    pub(crate) token_fingerprint: Option<Arc<String>>, // 只保留摘要，不保留明文
}

impl HubAuth {
    /// 创建新的认证结构体；`token` 为空字符串时视为匿名访问
    pub fn new(endpoint: &str, token: Option<&str>) -> Result<Self, String> {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        let http_client = _InternalHttpClient::_create(token)?;

        let endpoint =
            _format_endpoint(endpoint).map_err(|e| e.to_string())?;

        Ok(Self {
            client: http_client.client,
            endpoint: Arc::new(endpoint),
            token_fingerprint: http_client.token_fingerprint.map(Arc::new),
        })
    }

    /// 是否携带访问令牌
    pub fn has_token(&self) -> bool {
        self.token_fingerprint.is_some()
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
    }

    /// 基于 endpoint 拼接相对路径，拒绝跳出 endpoint 的结果
    pub fn join(&self, path: &str) -> Result<Url, String> {
        let joined = self
            .endpoint
            .join(path.trim_start_matches('/'))
            .map_err(|_| "路径格式错误".to_string())?;

        if joined.scheme() != self.endpoint.scheme()
            || joined.host_str() != self.endpoint.host_str()
            || joined.port() != self.endpoint.port()
            || !joined.path().starts_with(self.endpoint.path())
        {
            return Err("父目录不允许".to_string());
        }

        Ok(joined)
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for HubAuth {
    fn eq(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
            && self.endpoint == other.endpoint
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for HubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubAuth")
            .field("endpoint", &self.endpoint.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

fn _format_endpoint(url: &str) -> Result<Url, String> {
    if url.trim().is_empty() {
        return Err("地址为空".to_string());
    }

    let mut endpoint = Url::parse(url.trim()).map_err(|e| e.to_string())?;

    if !endpoint.path().ends_with('/') {
        let new_path = format!("{}/", endpoint.path());
        endpoint.set_path(&new_path);
    }

    Ok(endpoint)
}

/// 内部临时使用的http客户端结构体，在初始化HubAuth时使用
struct _InternalHttpClient {
    client: Client,
    token_fingerprint: Option<String>,
}

impl _InternalHttpClient {
    fn _fingerprint(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建http客户端，内部使用
    fn _create(token: Option<&str>) -> Result<Self, String> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            let mut auth_value =
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| e.to_string())?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        let http_client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client: http_client,
            token_fingerprint: token.map(Self::_fingerprint),
        })
    }
}
