/// DashScope 文本生成 API 客户端
///
/// 请求格式：`input.messages` + `parameters`，成功响应的文本位于 `output.text`
use crate::clients::TextGenerator;
use crate::config::Config;
use crate::error::LlmError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// DashScope 客户端
pub struct DashScopeClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model_name: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GenerationParameters {
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput<'a>,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationInput<'a> {
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    output: Option<GenerationOutput>,
}

#[derive(Deserialize)]
struct GenerationOutput {
    text: Option<String>,
}

impl DashScopeClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|source| LlmError::Transport {
                model: config.llm_model_name.clone(),
                source,
            })?;

        Ok(Self {
            http,
            api_key: config.llm_api_key.clone(),
            api_url: config.llm_api_url.clone(),
            model_name: config.llm_model_name.clone(),
            parameters: GenerationParameters {
                max_tokens: config.llm_max_tokens,
                temperature: config.llm_temperature,
                top_p: config.llm_top_p,
            },
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> GenerationRequest<'a> {
        GenerationRequest {
            model: &self.model_name,
            input: GenerationInput {
                messages: vec![ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            },
            parameters: self.parameters,
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> LlmError {
        LlmError::Transport {
            model: self.model_name.clone(),
            source,
        }
    }
}

impl TextGenerator for DashScopeClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("调用 DashScope API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.chars().count());

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let raw = response.text().await.unwrap_or_default();
            return Err(LlmError::BadStatus {
                model: self.model_name.clone(),
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!("DashScope API 调用成功");

        extract_text(body).ok_or_else(|| LlmError::EmptyContent {
            model: self.model_name.clone(),
        })
    }
}

/// 从错误响应中取出 `message`，取不到时返回原始响应体
fn error_message(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| raw.to_string())
}

fn extract_text(body: GenerationResponse) -> Option<String> {
    body.output
        .and_then(|output| output.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> DashScopeClient {
        let config = Config {
            llm_api_key: "test-key".to_string(),
            ..Config::default()
        };
        DashScopeClient::new(&config).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let client = test_client();
        let body = serde_json::to_value(client.build_request("总结一下")).unwrap();

        assert_eq!(body["model"], "qwen-max");
        assert_eq!(body["input"]["messages"][0]["role"], "user");
        assert_eq!(body["input"]["messages"][0]["content"], "总结一下");
        assert_eq!(body["input"]["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["parameters"]["max_tokens"], 500);
        assert!((body["parameters"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert!((body["parameters"]["top_p"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_extract_text_from_output() {
        let body: GenerationResponse =
            serde_json::from_str(r#"{"output":{"text":"  HR 发起招聘流程。 \n"},"usage":{}}"#).unwrap();
        assert_eq!(extract_text(body).as_deref(), Some("HR 发起招聘流程。"));

        let body: GenerationResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(extract_text(body), None);

        let body: GenerationResponse = serde_json::from_str(r#"{"output":{"text":"  "}}"#).unwrap();
        assert_eq!(extract_text(body), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"code":"InvalidApiKey","message":"Invalid API-key provided."}"#),
            "Invalid API-key provided."
        );
        assert_eq!(error_message("<html>502</html>"), "<html>502</html>");
    }

    /// 测试真实 API 连通性
    ///
    /// 运行方式：
    /// ```bash
    /// LLM_API_KEY=sk-... cargo test test_dashscope_connectivity -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_dashscope_connectivity() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env().unwrap();
        let client = DashScopeClient::new(&config).unwrap();

        match client.generate("用一句话介绍你自己").await {
            Ok(text) => {
                println!("\n========== LLM 响应 ==========");
                println!("{}", text);
                println!("==============================\n");
                assert!(!text.is_empty());
            }
            Err(e) => panic!("DashScope 调用失败: {}", e),
        }
    }
}
