//! 错误处理模块

use thiserror::Error;

/// keyprobe 的统一错误类型
///
/// 分类仅用于展示：探测边界对所有错误一视同仁
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 配置相关错误（如 `.env` 文件格式错误）
    #[error("配置错误: {0}")]
    Config(String),

    /// 请求参数无效
    #[error("请求参数无效: {0}")]
    InvalidRequest(String),

    /// HTTP 请求相关错误（连接失败等）
    #[error("HTTP请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 请求超时错误
    #[error("请求超时: {0}")]
    Timeout(String),

    /// 400：服务端拒绝请求参数
    #[error("Error code: {status} - {message}")]
    BadRequest { status: u16, message: String },

    /// 401：身份验证失败
    #[error("Error code: {status} - {message}")]
    Auth { status: u16, message: String },

    /// 403：密钥无权访问
    #[error("Error code: {status} - {message}")]
    PermissionDenied { status: u16, message: String },

    /// 404：指定的模型或端点不存在
    #[error("Error code: {status} - {message}")]
    NotFound { status: u16, message: String },

    /// 409
    #[error("Error code: {status} - {message}")]
    Conflict { status: u16, message: String },

    /// 422
    #[error("Error code: {status} - {message}")]
    UnprocessableEntity { status: u16, message: String },

    /// 429：API 请求频率限制
    #[error("Error code: {status} - {message}")]
    RateLimit { status: u16, message: String },

    /// 5xx：服务端内部错误
    #[error("Error code: {status} - {message}")]
    InternalServer { status: u16, message: String },

    /// 其他非 2xx 状态
    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    /// 响应体无法解析
    #[error("JSON处理错误: {0}")]
    Decode(String),

    /// 响应缺少必要字段
    #[error("响应格式错误: {0}")]
    MalformedResponse(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// 错误类别名称，输出在 `Error type:` 之后
    ///
    /// 与官方 SDK 的异常类名保持一致
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Config(_) => "ConfigError",
            ProbeError::InvalidRequest(_) => "InvalidRequestError",
            ProbeError::Http(_) => "APIConnectionError",
            ProbeError::Timeout(_) => "APITimeoutError",
            ProbeError::BadRequest { .. } => "BadRequestError",
            ProbeError::Auth { .. } => "AuthenticationError",
            ProbeError::PermissionDenied { .. } => "PermissionDeniedError",
            ProbeError::NotFound { .. } => "NotFoundError",
            ProbeError::Conflict { .. } => "ConflictError",
            ProbeError::UnprocessableEntity { .. } => "UnprocessableEntityError",
            ProbeError::RateLimit { .. } => "RateLimitError",
            ProbeError::InternalServer { .. } => "InternalServerError",
            ProbeError::Api { .. } => "APIStatusError",
            ProbeError::Decode(_) => "DecodeError",
            ProbeError::MalformedResponse(_) => "MalformedResponseError",
            ProbeError::Io(_) => "IoError",
        }
    }

    /// 根据 HTTP 状态码和服务端消息构造错误
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ProbeError::BadRequest { status, message },
            401 => ProbeError::Auth { status, message },
            403 => ProbeError::PermissionDenied { status, message },
            404 => ProbeError::NotFound { status, message },
            409 => ProbeError::Conflict { status, message },
            422 => ProbeError::UnprocessableEntity { status, message },
            429 => ProbeError::RateLimit { status, message },
            500..=u16::MAX => ProbeError::InternalServer { status, message },
            _ => ProbeError::Api { status, message },
        }
    }

    /// 服务端返回的 HTTP 状态码，非状态类错误为 `None`
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeError::BadRequest { status, .. }
            | ProbeError::Auth { status, .. }
            | ProbeError::PermissionDenied { status, .. }
            | ProbeError::NotFound { status, .. }
            | ProbeError::Conflict { status, .. }
            | ProbeError::UnprocessableEntity { status, .. }
            | ProbeError::RateLimit { status, .. }
            | ProbeError::InternalServer { status, .. }
            | ProbeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// keyprobe 的 Result 类型别名
pub type Result<T> = std::result::Result<T, ProbeError>;

impl From<serde_json::Error> for ProbeError {
    fn from(e: serde_json::Error) -> Self {
        ProbeError::Decode(e.to_string())
    }
}

impl From<dotenvy::Error> for ProbeError {
    fn from(e: dotenvy::Error) -> Self {
        match e {
            dotenvy::Error::Io(io) => ProbeError::Io(io),
            other => ProbeError::Config(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, "BadRequestError"),
            (401, "AuthenticationError"),
            (403, "PermissionDeniedError"),
            (404, "NotFoundError"),
            (409, "ConflictError"),
            (422, "UnprocessableEntityError"),
            (429, "RateLimitError"),
            (500, "InternalServerError"),
            (502, "InternalServerError"),
            (503, "InternalServerError"),
            (418, "APIStatusError"),
        ];
        for (status, kind) in cases {
            let err = ProbeError::from_status(status, "x".into());
            assert_eq!(err.kind(), kind, "status {}", status);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_status_error_display_names_code() {
        let err = ProbeError::from_status(401, "Incorrect API key provided".into());
        assert_eq!(err.to_string(), "Error code: 401 - Incorrect API key provided");
    }

    #[test]
    fn test_transport_kinds() {
        let err = ProbeError::Timeout("deadline elapsed".into());
        assert_eq!(err.kind(), "APITimeoutError");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: ProbeError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ProbeError::Decode(_)));
        assert_eq!(err.kind(), "DecodeError");
    }
}
