//! API 数据结构模块

use serde::{Deserialize, Serialize};

// ================================================================================================
// API 请求结构
// ================================================================================================

/// 对话消息
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// 角色
    pub role: Role,
    /// 内容
    pub content: String,
}

/// 角色枚举
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 系统
    System,
    /// 用户
    #[default]
    User,
    /// 机器人
    Assistant,
}

/// Chat completion 请求体
#[derive(Debug, Serialize, Clone)]
pub struct CompletionRequest {
    /// 模型名称
    pub model: String,
    /// 对话消息
    pub messages: Vec<Message>,
    /// 最大生成 token 数
    pub max_tokens: u32,
}

// ================================================================================================
// API 响应结构
// ================================================================================================

/// API 响应体
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CompletionResponse {
    /// 响应 ID
    #[serde(default)]
    pub id: String,
    /// 对话选择
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// 创建时间
    #[serde(default)]
    pub created: u64,
    /// 使用模型
    #[serde(default)]
    pub model: String,
    /// 对象类型
    #[serde(default)]
    pub object: String,
    /// token 使用情况
    pub usage: Option<Usage>,
}

/// 对话选择
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Choice {
    /// 结束原因
    pub finish_reason: Option<String>,
    /// 索引
    #[serde(default)]
    pub index: u32,
    /// 消息内容
    #[serde(default)]
    pub message: ResponseMessage,
}

/// 响应中的消息，`content` 可能为 null
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ResponseMessage {
    /// 角色
    pub role: Option<Role>,
    /// 内容
    pub content: Option<String>,
}

/// token 使用情况
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// 完成 token 数量
    #[serde(default)]
    pub completion_tokens: u32,
    /// 提示 token 数量
    #[serde(default)]
    pub prompt_tokens: u32,
    /// 总 token 数量
    #[serde(default)]
    pub total_tokens: u32,
}

/// 服务端错误响应体：`{"error": {"message": ...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
