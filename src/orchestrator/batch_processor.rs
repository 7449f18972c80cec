//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责按配置顺序处理全部 Excel 文件。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建 DashScope 客户端与工作表流程
//! 2. **顺序处理**：逐个文件委托 `workbook_processor`
//! 3. **容错**：找不到或处理失败的文件只记录，不中断批处理
//! 4. **全局统计**：汇总所有文件的处理结果

use crate::clients::{DashScopeClient, TextGenerator};
use crate::config::Config;
use crate::error::FileError;
use crate::orchestrator::workbook_processor;
use crate::utils::logging::{log_startup, log_workbook_start, print_final_stats};
use crate::workflow::SheetFlow;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// 全部文件的处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub files_done: usize,
    pub files_missing: usize,
    pub files_failed: usize,
    pub sheets_processed: usize,
    pub sheets_skipped: usize,
    pub qa_records: usize,
}

/// 应用主结构
pub struct App<G = DashScopeClient> {
    config: Config,
    flow: SheetFlow<G>,
}

impl App<DashScopeClient> {
    /// 使用 DashScope 客户端初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        if config.llm_api_key.trim().is_empty() {
            warn!("⚠️ 未配置 LLM_API_KEY，场景总结将使用兜底文本");
        }

        let client = DashScopeClient::new(&config).context("创建 DashScope 客户端失败")?;
        info!("✓ DashScope 客户端已创建，模型: {}", client.model_name());
        Ok(Self::with_generator(config, client))
    }
}

impl<G: TextGenerator> App<G> {
    /// 使用指定的文本生成器创建应用
    pub fn with_generator(config: Config, generator: G) -> Self {
        let flow = SheetFlow::from_generator(generator, &config);
        Self { config, flow }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<BatchStats> {
        let files = &self.config.input_files;
        log_startup(files.len(), &self.config.llm_model_name);

        let mut stats = BatchStats::default();

        for (index, file) in files.iter().enumerate() {
            let path = Path::new(file);
            if !path.exists() {
                error!("❌ {}", FileError::NotFound { path: file.clone() });
                stats.files_missing += 1;
                continue;
            }

            log_workbook_start(index + 1, files.len(), file);

            match workbook_processor::process_workbook(path, &self.config, &self.flow).await {
                Ok(result) => {
                    stats.files_done += 1;
                    stats.sheets_processed += result.sheets_processed;
                    stats.sheets_skipped += result.sheets_skipped;
                    stats.qa_records += result.qa_records;
                }
                Err(e) => {
                    error!("❌ 处理文件 {} 时发生错误: {:#}", file, e);
                    stats.files_failed += 1;
                }
            }
        }

        print_final_stats(
            stats.files_done,
            stats.files_missing,
            stats.files_failed,
            (stats.sheets_processed, stats.sheets_skipped),
            stats.qa_records,
        );

        Ok(stats)
    }
}
