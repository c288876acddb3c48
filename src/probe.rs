//! 探测模块：发送一次固定的 chat completion 请求并汇总结果
use crate::{
    client::ProbeClient,
    config::Config,
    error::{ProbeError, Result},
    types::{CompletionRequest, CompletionResponse, Role},
    utils::{message, prepare_messages},
};
use log::{debug, warn};
use std::time::Instant;

/// 探测结果
///
/// 任何失败都折叠为 `Failure`，由调用方决定如何输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Success {
        content: String,
        model: String,
        tokens_used: u32,
    },
    Failure {
        kind: String,
        message: String,
    },
}

impl ProbeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success { .. })
    }
}

impl From<ProbeError> for ProbeResult {
    fn from(e: ProbeError) -> Self {
        ProbeResult::Failure {
            kind: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

/// 由配置构造固定的探测请求：系统消息 + 用户消息，限制生成长度
pub fn build_request(config: &Config) -> CompletionRequest {
    let messages = vec![message(Role::User, config.prompt())];
    CompletionRequest {
        model: config.model().to_string(),
        messages: prepare_messages(config.system_message(), &messages),
        max_tokens: config.max_tokens(),
    }
}

/// 从响应中提取第一条回复、模型名和总 token 数
pub fn summarize(response: CompletionResponse) -> Result<ProbeResult> {
    let usage = response
        .usage
        .ok_or_else(|| ProbeError::MalformedResponse("response has no usage".into()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProbeError::MalformedResponse("response has no choices".into()))?;

    Ok(ProbeResult::Success {
        content: choice.message.content.unwrap_or_default(),
        model: response.model,
        tokens_used: usage.total_tokens,
    })
}

async fn try_run(config: Config) -> Result<ProbeResult> {
    let client = ProbeClient::new(config)?;
    let request = build_request(client.config());
    let response = client.chat_completion(&request).await?;
    summarize(response)
}

/// 执行探测
///
/// 构造客户端、发送请求、解析响应中的任何错误都在这里转换为 `ProbeResult::Failure`
pub async fn run(config: Config) -> ProbeResult {
    let start = Instant::now();
    let result = try_run(config).await.unwrap_or_else(|e| {
        warn!("probe failed: {}", e);
        e.into()
    });
    debug!("probe finished in {}ms", start.elapsed().as_millis());
    result
}
