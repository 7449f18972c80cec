use crate::error::LlmError;

/// 文本生成能力
///
/// 一次调用对应一次远程请求，不做重试；重试由 `LlmService` 负责
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// 发送提示词，返回生成的文本（已去除首尾空白）
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
