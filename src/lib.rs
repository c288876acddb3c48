//! # keyprobe - OpenAI API 密钥检查工具
//!
//! 从进程环境（以及可选的 `.env` 文件）读取 `OPENAI_API_KEY`，
//! 发送一次固定的 chat completion 请求，并报告成功或失败。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use keyprobe::{config::Config, probe, report};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = Config::from_env().unwrap_or_default();
//!     let result = probe::run(config).await;
//!     report::write_result(&mut std::io::stdout(), &result)
//! }
//! ```

// 模块定义
pub mod client;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod types;
pub mod utils;

pub use client::ProbeClient;
pub use config::Config;
pub use error::{ProbeError, Result};
pub use probe::ProbeResult;
