//! 工具函数模块
use crate::types::{Message, Role};

/// 密钥预览保留的字符数
pub const PREVIEW_CHARS: usize = 20;

/// 创建消息的便捷函数
///
/// # 参数
///
/// * `role` - 消息角色
/// * `content` - 消息内容
///
/// # 返回
///
/// 新创建的消息实例
pub fn message(role: Role, content: &str) -> Message {
    Message {
        role,
        content: content.to_string(),
    }
}

/// 准备发送到 API 的消息列表
///
/// 如果系统消息不为空，则将其作为第一条消息。
pub(crate) fn prepare_messages(system_message: &str, messages: &[Message]) -> Vec<Message> {
    let system_iter = if !system_message.is_empty() {
        vec![message(Role::System, system_message)].into_iter()
    } else {
        vec![].into_iter()
    };
    system_iter.chain(messages.iter().cloned()).collect()
}

/// 密钥预览：最多前 20 个字符加省略号
///
/// 按字符截断，短于 20 个字符时原样保留
pub fn credential_preview(secret: &str) -> String {
    let head: String = secret.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}
