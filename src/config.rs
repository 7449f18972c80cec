use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名（位于当前工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "xlsx_to_qa.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待处理的 Excel 文件列表
    pub input_files: Vec<String>,
    /// 输出目录（DOCX 与 CSV）
    pub output_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub llm_model_name: String,
    /// 最大生成长度
    pub llm_max_tokens: u32,
    pub llm_temperature: f32,
    pub llm_top_p: f32,
    /// 单次请求超时（秒）
    pub llm_timeout_secs: u64,
    /// 最大尝试次数
    pub llm_max_retries: usize,
    /// 两次尝试之间的等待（毫秒）
    pub llm_retry_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: vec!["files/人力助手.xls".to_string()],
            output_folder: "result".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_url:
                "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation"
                    .to_string(),
            llm_model_name: "qwen-max".to_string(),
            llm_max_tokens: 500,
            llm_temperature: 0.3,
            llm_top_p: 0.8,
            llm_timeout_secs: 60,
            llm_max_retries: 3,
            llm_retry_delay_ms: 1000,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var("XLSX_QA_CONFIG").ok();
        let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let base = if explicit.is_some() || Path::new(&path).exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };

        base.with_env_overrides()
    }

    /// 从环境变量加载（不读取配置文件）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取，未出现的字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Result<Self, ConfigError> {
        Ok(Self {
            input_files: std::env::var("INPUT_FILES")
                .ok()
                .map(|v| split_file_list(&v))
                .unwrap_or(self.input_files),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            verbose_logging: parse_env("VERBOSE_LOGGING", "bool")?.unwrap_or(self.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(self.llm_api_key),
            llm_api_url: std::env::var("LLM_API_URL").unwrap_or(self.llm_api_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            llm_max_tokens: self.llm_max_tokens,
            llm_temperature: self.llm_temperature,
            llm_top_p: self.llm_top_p,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.llm_timeout_secs),
            llm_max_retries: parse_env("LLM_MAX_RETRIES", "usize")?
                .unwrap_or(self.llm_max_retries),
            llm_retry_delay_ms: parse_env("LLM_RETRY_DELAY_MS", "u64")?
                .unwrap_or(self.llm_retry_delay_ms),
        })
    }
}

/// 按 `;` 拆分文件列表，忽略空项
fn split_file_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            input_files = ["a.xlsx", "b.xls"]
            llm_max_retries = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.input_files, vec!["a.xlsx", "b.xls"]);
        assert_eq!(config.llm_max_retries, 5);
        assert_eq!(config.output_folder, "result");
        assert_eq!(config.llm_model_name, "qwen-max");
        assert_eq!(config.llm_retry_delay_ms, 1000);
    }

    #[test]
    fn test_split_file_list() {
        assert_eq!(
            split_file_list(" a.xlsx ;; files/b.xls;"),
            vec!["a.xlsx".to_string(), "files/b.xls".to_string()]
        );
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("llm_max_retries = \"three\"").is_err());
    }

    /// 环境变量是进程级共享状态，覆盖与报错放在同一个测试里顺序执行
    #[test]
    fn test_env_overrides_and_parse_errors() {
        std::env::set_var("INPUT_FILES", "files/a.xlsx; files/b.xls ;");
        std::env::set_var("LLM_MAX_RETRIES", "5");
        let config = Config::from_env().unwrap();
        assert_eq!(config.input_files, vec!["files/a.xlsx", "files/b.xls"]);
        assert_eq!(config.llm_max_retries, 5);
        assert_eq!(config.output_folder, "result");

        std::env::set_var("LLM_MAX_RETRIES", "three");
        let err = Config::from_env().unwrap_err();
        std::env::remove_var("INPUT_FILES");
        std::env::remove_var("LLM_MAX_RETRIES");

        match err {
            ConfigError::EnvVarParseFailed {
                var_name, value, ..
            } => {
                assert_eq!(var_name, "LLM_MAX_RETRIES");
                assert_eq!(value, "three");
            }
            other => panic!("意外的错误类型: {}", other),
        }
    }
}
