//! HTTP 客户端模块
use crate::{
    config::Config,
    error::{ProbeError, Result},
    types::{CompletionRequest, CompletionResponse, ErrorEnvelope},
};
use log::{debug, error};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Response,
};

// ================================================================================================
// 核心客户端模块
// ================================================================================================

/// 绑定单个 API 密钥的 chat completion 客户端
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
    config: Config,
}

impl ProbeClient {
    /// 创建一个新的 `ProbeClient` 实例
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .inspect_err(|e| error!("Failed to build reqwest client: {}", e))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 构建 API 请求所需的 HTTP 标头
    ///
    /// 没有密钥时不发送 `Authorization`，由服务端拒绝
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(key) = self.config.api_key.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| ProbeError::InvalidRequest(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// 发送一次 chat completion 请求，不重试
    pub async fn chat_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let headers = self.build_headers()?;
        let endpoint = self.endpoint();
        debug!("POST {} model={}", endpoint, request.model);

        let response = self
            .client
            .post(&endpoint)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let body = response.text().await.map_err(transport_error)?;
        let completion: CompletionResponse = serde_json::from_str(&body)?;
        debug!("completion id={} model={}", completion.id, completion.model);
        Ok(completion)
    }
}

fn transport_error(e: reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout(e.to_string())
    } else {
        ProbeError::Http(e)
    }
}

/// 非 2xx 响应转换为对应类别的错误
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .ok()
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| format!("Request failed with status: {}", status));

    debug!("API returned {}: {}", status, message);
    Err(ProbeError::from_status(status.as_u16(), message))
}
