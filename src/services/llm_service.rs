//! LLM 服务 - 业务能力层
//!
//! 只负责"带重试地生成一段文本"，不关心提示词内容。
//! 重试耗尽后返回固定兜底文本而不是错误，整个批处理不会因为 API 不可用而中断。

use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::clients::TextGenerator;
use crate::config::Config;

/// 生成失败时写入答案的兜底文本
pub const GENERATION_FALLBACK: &str = "【答案】此处应由大模型生成，但 API 调用失败，请检查配置。";

/// LLM 服务
pub struct LlmService<G> {
    generator: G,
    max_retries: usize,
    retry_delay: Duration,
}

impl<G: TextGenerator> LlmService<G> {
    /// 按配置创建
    pub fn new(generator: G, config: &Config) -> Self {
        Self::with_retry(
            generator,
            config.llm_max_retries,
            Duration::from_millis(config.llm_retry_delay_ms),
        )
    }

    /// 自定义重试参数，`max_retries` 至少为 1
    pub fn with_retry(generator: G, max_retries: usize, retry_delay: Duration) -> Self {
        Self {
            generator,
            max_retries: max_retries.max(1),
            retry_delay,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// 生成文本；每次失败后等待 `retry_delay` 再试，最后一次失败后不再等待
    pub async fn generate_or_fallback(&self, prompt: &str) -> String {
        for attempt in 1..=self.max_retries {
            match self.generator.generate(prompt).await {
                Ok(text) => return text,
                Err(e) => {
                    warn!("❌ API 错误 (尝试 {}/{}): {}", attempt, self.max_retries, e);
                }
            }

            if attempt < self.max_retries {
                sleep(self.retry_delay).await;
            }
        }

        error!("⚠️ 已重试 {} 次仍失败，使用兜底文本", self.max_retries);
        GENERATION_FALLBACK.to_string()
    }
}
