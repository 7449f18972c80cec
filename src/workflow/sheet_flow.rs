//! 工作表处理流程 - 流程层
//!
//! 核心职责：定义"一个工作表"的完整处理流程
//!
//! 流程顺序：
//! 1. 识别表头 → 未命中则跳过
//! 2. 提取连续数据行 → 无数据则跳过
//! 3. 场景总结（大模型，失败时兜底）
//! 4. 构建场景级与步骤级问答对

use tracing::{debug, info, warn};

use crate::clients::TextGenerator;
use crate::config::Config;
use crate::models::{ExtractedRow, QaRecord, ScenarioSummary, SheetGrid};
use crate::services::qa_builder::{row_qa, scenario_qa};
use crate::services::{
    extract_rows, resolve_header, LlmService, ScenarioSummarizer, StopReason,
};
use crate::workflow::sheet_ctx::SheetCtx;

/// 跳过工作表的原因（不是错误）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 没有任何数据
    EmptySheet,
    /// 没有可识别的表头
    HeaderNotFound,
    /// 表头下没有有效数据行
    NoDataRows,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::EmptySheet => "空表",
            SkipReason::HeaderNotFound => "未找到表头",
            SkipReason::NoDataRows => "无有效数据",
        };
        write!(f, "{}", text)
    }
}

/// 一个工作表的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub sheet_name: String,
    /// 命中的表头格式名称
    pub variant: &'static str,
    pub rows: Vec<ExtractedRow>,
    pub stop: StopReason,
    pub summary: ScenarioSummary,
    /// 场景级问答对
    pub scenario: QaRecord,
    /// 步骤级问答对，与 `rows` 一一对应
    pub row_records: Vec<QaRecord>,
}

impl SheetReport {
    /// 按输出顺序返回全部问答对：场景级在前
    pub fn qa_records(&self) -> impl Iterator<Item = &QaRecord> {
        std::iter::once(&self.scenario).chain(self.row_records.iter())
    }
}

/// 工作表处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Processed(SheetReport),
    Skipped(SkipReason),
}

/// 工作表处理流程
///
/// - 编排表头识别、行提取、场景总结、问答构建
/// - 不持有任何输出资源（文档 / CSV）
pub struct SheetFlow<G> {
    summarizer: ScenarioSummarizer<G>,
}

impl<G: TextGenerator> SheetFlow<G> {
    pub fn new(summarizer: ScenarioSummarizer<G>) -> Self {
        Self { summarizer }
    }

    /// 按配置的重试参数包装生成器
    pub fn from_generator(generator: G, config: &Config) -> Self {
        Self::new(ScenarioSummarizer::new(LlmService::new(generator, config)))
    }

    pub fn summarizer(&self) -> &ScenarioSummarizer<G> {
        &self.summarizer
    }

    pub async fn run(&self, ctx: &SheetCtx, grid: &SheetGrid) -> SheetOutcome {
        info!("{} 🔄 处理工作表", ctx);

        if grid.is_empty() {
            return self.skip(ctx, SkipReason::EmptySheet);
        }

        // ========== 1. 识别表头 ==========
        let Some(header) = resolve_header(grid) else {
            return self.skip(ctx, SkipReason::HeaderNotFound);
        };
        let variant = header.mapping.variant();
        info!(
            "{} ✓ 第 {} 行识别到表头: {}",
            ctx,
            header.header_row + 1,
            variant
        );
        debug!("{} 表头列: {:?}", ctx, header.mapping.columns());

        // ========== 2. 提取数据行 ==========
        let extraction = extract_rows(grid, &header);
        if extraction.rows.is_empty() {
            return self.skip(ctx, SkipReason::NoDataRows);
        }
        info!("{} ✓ 提取到 {} 条测试步骤", ctx, extraction.rows.len());

        // ========== 3. 场景总结 ==========
        info!("{} 🤖 正在生成场景总结...", ctx);
        let steps: Vec<&str> = extraction.rows.iter().map(|r| r.step.as_str()).collect();
        let summary = self.summarizer.summarize(&ctx.sheet_name, steps.as_slice()).await;

        // ========== 4. 构建问答对 ==========
        let scenario = scenario_qa(&ctx.sheet_name, &summary);
        let row_records = extraction
            .rows
            .iter()
            .map(|row| row_qa(&ctx.sheet_name, row))
            .collect();

        SheetOutcome::Processed(SheetReport {
            sheet_name: ctx.sheet_name.clone(),
            variant: variant.name,
            rows: extraction.rows,
            stop: extraction.stop,
            summary,
            scenario,
            row_records,
        })
    }

    fn skip(&self, ctx: &SheetCtx, reason: SkipReason) -> SheetOutcome {
        warn!("{} ⚠️ {}，跳过", ctx, reason);
        SheetOutcome::Skipped(reason)
    }
}
