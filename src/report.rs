//! 控制台输出模块
use crate::{probe::ProbeResult, utils::credential_preview};
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// 密钥状态行
pub fn key_status(api_key: Option<&str>) -> String {
    match api_key {
        Some(key) if !key.is_empty() => format!("API Key loaded: {}", credential_preview(key)),
        _ => "No API key found".to_string(),
    }
}

/// 写出密钥状态
pub fn write_key_status<W: Write>(out: &mut W, api_key: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", key_status(api_key))
}

/// 写出请求前的标题
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Testing OpenAI API...")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// 写出探测结果
pub fn write_result<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    match result {
        ProbeResult::Success {
            content,
            model,
            tokens_used,
        } => {
            writeln!(out)?;
            writeln!(out, "✅ SUCCESS!")?;
            writeln!(out, "Response: {}", content)?;
            writeln!(out, "Model: {}", model)?;
            writeln!(out, "Tokens used: {}", tokens_used)
        }
        ProbeResult::Failure { kind, message } => {
            writeln!(out)?;
            writeln!(out, "❌ ERROR: {}", message)?;
            writeln!(out, "Error type: {}", kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &ProbeResult) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_key_status_missing_or_empty() {
        assert_eq!(key_status(None), "No API key found");
        assert_eq!(key_status(Some("")), "No API key found");
    }

    #[test]
    fn test_key_status_preview() {
        assert_eq!(
            key_status(Some("sk-test1234567890abcdefghij")),
            "API Key loaded: sk-test1234567890ab..."
        );
    }

    #[test]
    fn test_banner() {
        let mut buf = Vec::new();
        write_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("\nTesting OpenAI API...\n{}\n", "=".repeat(50)));
    }

    #[test]
    fn test_success_output() {
        let text = render(&ProbeResult::Success {
            content: "Hello".into(),
            model: "gpt-3.5-turbo".into(),
            tokens_used: 7,
        });
        assert_eq!(
            text,
            "\n✅ SUCCESS!\nResponse: Hello\nModel: gpt-3.5-turbo\nTokens used: 7\n"
        );
    }

    #[test]
    fn test_failure_output() {
        let text = render(&ProbeResult::Failure {
            kind: "RateLimitError".into(),
            message: "slow down".into(),
        });
        assert_eq!(text, "\n❌ ERROR: slow down\nError type: RateLimitError\n");
    }
}
