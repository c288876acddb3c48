//! 配置模块
use crate::error::Result;
use log::debug;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

/// 读取的 API 密钥环境变量名
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

// ===============================================================================================
// 配置模块
// ===============================================================================================

/// 探测客户端配置
///
/// 只有 API 密钥来自环境；其余字段使用固定默认值，可通过 Builder 方法覆盖
#[derive(Debug, Clone)]
pub struct Config {
    /// API 密钥，缺失或为空时为 `None`
    pub(crate) api_key: Option<String>,
    /// API 基础 URL
    pub(crate) api_base: String,
    /// 模型名称
    pub(crate) model: String,
    /// 系统消息
    pub(crate) system_message: String,
    /// 用户消息
    pub(crate) prompt: String,
    /// 最大生成 token 数
    pub(crate) max_tokens: u32,
    /// 请求超时时间
    pub(crate) timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".into(),
            model: "gpt-3.5-turbo".into(),
            system_message: "You are a helpful assistant.".into(),
            prompt: "Say hello in one word".into(),
            max_tokens: 10,
            timeout: Duration::from_secs(600),
        }
    }
}

/// 生成 Config Builder 方法的宏
///
/// 自动生成 `with_field_name` 形式的 builder 方法
macro_rules! config_builder {
    ($field:ident, $type:ty) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = $field;
                self
            }
        }
    };
}

impl Config {
    pub fn api_key(&self) -> Option<&str> { self.api_key.as_deref() }
    pub fn api_base(&self) -> &str { &self.api_base }
    pub fn model(&self) -> &str { &self.model }
    pub fn system_message(&self) -> &str { &self.system_message }
    pub fn prompt(&self) -> &str { &self.prompt }
    pub fn max_tokens(&self) -> u32 { self.max_tokens }
    pub fn timeout(&self) -> Duration { self.timeout }

    /// 从进程环境和 `.env` 文件加载配置
    ///
    /// `.env` 在当前目录及其父目录中查找，找不到不算错误。
    /// 进程环境变量优先于 `.env` 中的同名项，且进程环境不会被修改。
    pub fn from_env() -> Result<Self> {
        let file_vars = match dotenvy::from_filename_iter(".env") {
            Ok(iter) => collect_pairs(iter)?,
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self::merge(&file_vars, |key| env::var(key).ok()))
    }

    /// 从指定的 `.env` 路径和环境查找函数加载配置
    ///
    /// `dotenv_path` 为 `None` 或文件不存在时只使用 `lookup`
    pub fn from_sources<F>(dotenv_path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = match dotenv_path {
            Some(path) => match dotenvy::from_path_iter(path) {
                Ok(iter) => collect_pairs(iter)?,
                Err(e) if e.not_found() => HashMap::new(),
                Err(e) => return Err(e.into()),
            },
            None => HashMap::new(),
        };
        Ok(Self::merge(&file_vars, lookup))
    }

    fn merge<F>(file_vars: &HashMap<String, String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .or_else(|| file_vars.get(API_KEY_VAR).cloned())
            .filter(|key| !key.is_empty());
        debug!(
            "{} {}",
            API_KEY_VAR,
            if api_key.is_some() { "resolved" } else { "missing" }
        );
        Config {
            api_key,
            ..Default::default()
        }
    }

    /// 设置 API 密钥，空字符串视为未设置
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key).filter(|key| !key.is_empty());
        self
    }

    // 使用宏生成 builder 方法
    config_builder!(api_base, String);
    config_builder!(model, String);
    config_builder!(system_message, String);
    config_builder!(prompt, String);
    config_builder!(max_tokens, u32);
    config_builder!(timeout, Duration);
}

fn collect_pairs<I>(iter: I) -> Result<HashMap<String, String>>
where
    I: Iterator<Item = std::result::Result<(String, String), dotenvy::Error>>,
{
    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}
