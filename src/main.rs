use keyprobe::{config::Config, probe, report};
use log::warn;
use std::io::{self, Write};

/// 检查 `OPENAI_API_KEY` 是否可用
///
/// 无论探测成功与否，进程都以状态码 0 退出
#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().unwrap_or_else(|e| {
        warn!("ignoring .env: {}", e);
        Config::from_sources(None, |key| std::env::var(key).ok()).unwrap_or_default()
    });

    {
        let mut out = io::stdout().lock();
        report::write_key_status(&mut out, config.api_key())?;
        report::write_banner(&mut out)?;
        out.flush()?;
    }

    let result = probe::run(config).await;

    let mut out = io::stdout().lock();
    report::write_result(&mut out, &result)?;
    out.flush()
}
