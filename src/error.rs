use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 工作簿读取错误
    #[error("工作簿错误: {0}")]
    Workbook(#[from] WorkbookError),
    /// 报告输出错误（DOCX / CSV）
    #[error("输出错误: {0}")]
    Report(#[from] ReportError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 工作簿读取错误
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// 打开工作簿失败
    #[error("无法打开工作簿 ({path}): {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: calamine::Error,
    },
    /// 读取工作表失败
    #[error("无法读取工作表 {sheet}: {source}")]
    SheetReadFailed {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// 报告输出错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// DOCX 打包失败
    #[error("DOCX 打包失败 ({path}): {source}")]
    DocxPackFailed {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
    /// CSV 写入失败
    #[error("CSV 写入失败 ({path}): {source}")]
    CsvWriteFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// 主路径与备选路径都写入失败
    #[error("CSV 主路径 {primary} 与备选路径 {fallback} 均写入失败")]
    CsvFallbackExhausted { primary: String, fallback: String },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 网络请求失败
    #[error("LLM 请求失败 (模型: {model}): {source}")]
    Transport {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务返回非 200 状态
    #[error("LLM 返回错误状态 (模型: {model}): {status} - {message}")]
    BadStatus {
        model: String,
        status: u16,
        message: String,
    },
    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl FileError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
