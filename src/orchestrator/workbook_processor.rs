//! 单个 Excel 文件处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **加载工作簿**：读取全部工作表网格
//! 2. **遍历工作表**：逐个交给 `SheetFlow`，结果写入 `ReportContext`
//! 3. **输出文件**：保存 Word 文档与问答 CSV
//! 4. **统计输出**：记录成功/跳过的工作表与问答对数量

use crate::clients::TextGenerator;
use crate::config::Config;
use crate::error::FileError;
use crate::infrastructure::{load_workbook, write_qa_csv_with_fallback};
use crate::models::SheetGrid;
use crate::services::GENERATION_FALLBACK;
use crate::utils::logging::log_workbook_complete;
use crate::workflow::{ReportContext, SheetCtx, SheetFlow, SheetOutcome};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// 工作表遍历结果
#[derive(Debug, Clone)]
pub struct SheetsReport {
    pub context: ReportContext,
    pub processed: usize,
    pub skipped: usize,
}

/// 单个文件的处理统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookStats {
    pub sheets_processed: usize,
    pub sheets_skipped: usize,
    pub qa_records: usize,
    /// Word 文档保存失败时为 `None`
    pub docx_path: Option<PathBuf>,
    /// CSV 实际写入的位置（可能是备选路径）
    pub csv_path: PathBuf,
}

/// 按顺序处理所有工作表，累积到以 `file_stem` 为标题的上下文中
pub async fn process_sheets<G: TextGenerator>(
    file_stem: &str,
    grids: &[SheetGrid],
    flow: &SheetFlow<G>,
) -> SheetsReport {
    let mut context = ReportContext::new(file_stem);
    let mut processed = 0;
    let mut skipped = 0;

    for (index, grid) in grids.iter().enumerate() {
        let ctx = SheetCtx::new(file_stem, index + 1, grid.name.as_str());

        match flow.run(&ctx, grid).await {
            SheetOutcome::Processed(report) => {
                debug!("{} 提取结束原因: {:?}", ctx, report.stop);
                if report.summary.narrative == GENERATION_FALLBACK {
                    warn!("{} ⚠️ 场景总结使用兜底文本", ctx);
                }
                info!(
                    "{} ✓ 生成 {} 条问答对",
                    ctx,
                    report.row_records.len() + 1
                );
                context.emit_sheet(&report);
                processed += 1;
            }
            SheetOutcome::Skipped(_) => skipped += 1,
        }
    }

    SheetsReport {
        context,
        processed,
        skipped,
    }
}

/// 处理单个 Excel 文件
///
/// # 参数
/// - `path`: Excel 文件路径
/// - `config`: 配置（输出目录）
/// - `flow`: 工作表处理流程（复用）
///
/// # 返回
/// 返回文件级统计；只有读取失败或 CSV 两个位置都写入失败时返回错误
pub async fn process_workbook<G: TextGenerator>(
    path: &Path,
    config: &Config,
    flow: &SheetFlow<G>,
) -> Result<WorkbookStats> {
    let file_stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("无法解析文件名: {}", path.display()))?;

    let grids = load_workbook(path)
        .with_context(|| format!("读取 Excel 文件失败: {}", path.display()))?;
    info!("📑 共 {} 个工作表", grids.len());

    let report = process_sheets(&file_stem, &grids, flow).await;
    let (document, records) = report.context.into_parts();

    let output_dir = Path::new(&config.output_folder);
    if let Err(source) = fs::create_dir_all(output_dir) {
        let err = FileError::CreateDirFailed {
            path: output_dir.display().to_string(),
            source,
        };
        error!("❌ {}", err);
    }

    // ========== Word 文档 ==========
    let docx_path = output_dir.join(format!("{}.docx", file_stem));
    let docx_path = match document.save(&docx_path) {
        Ok(()) => {
            info!("✅ Word 文档已保存: {}", docx_path.display());
            Some(docx_path)
        }
        Err(e) => {
            error!("❌ 保存 Word 文档失败: {}", e);
            None
        }
    };

    // ========== 问答 CSV ==========
    let csv_name = format!("{}_qa.csv", file_stem);
    let csv_path = write_qa_csv_with_fallback(
        &output_dir.join(&csv_name),
        || std::env::current_dir().map(|cwd| cwd.join(&csv_name)),
        &records,
    )
    .with_context(|| format!("写入问答 CSV 失败: {}", csv_name))?;
    info!(
        "✅ CSV 文件已保存: {} ({} 条)",
        csv_path.display(),
        records.len()
    );

    log_workbook_complete(
        &path.display().to_string(),
        report.processed,
        report.skipped,
        records.len(),
    );

    Ok(WorkbookStats {
        sheets_processed: report.processed,
        sheets_skipped: report.skipped,
        qa_records: records.len(),
        docx_path,
        csv_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::infrastructure::DocBlock;
    use crate::services::{LlmService, ScenarioSummarizer};
    use std::time::Duration;

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok("总结".to_string())
        }
    }

    fn flow() -> SheetFlow<EchoGenerator> {
        SheetFlow::new(ScenarioSummarizer::new(LlmService::with_retry(
            EchoGenerator,
            1,
            Duration::ZERO,
        )))
    }

    #[tokio::test]
    async fn test_process_sheets_counts_and_orders() {
        let grids = vec![
            SheetGrid::new("空", Vec::new()),
            SheetGrid::from_rows(
                "请假",
                [
                    vec!["测试步骤", "功能路径", "输入数据"],
                    vec!["提交", "首页->请假", "事由"],
                    vec!["审批", "待办", ""],
                ],
            ),
            SheetGrid::from_rows("说明", [vec!["本文件仅供参考"]]),
        ];

        let report = process_sheets("人力", &grids, &flow()).await;

        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.context.records().len(), 3);

        let blocks = report.context.document().blocks();
        assert_eq!(blocks.first(), Some(&DocBlock::Title("人力".to_string())));
        assert_eq!(blocks.last(), Some(&DocBlock::PageBreak));
        let headings = blocks
            .iter()
            .filter(|b| matches!(b, DocBlock::Heading(_)))
            .count();
        assert_eq!(headings, 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_folder: dir.path().display().to_string(),
            ..Config::default()
        };

        let result = process_workbook(&dir.path().join("不存在.xlsx"), &config, &flow()).await;
        assert!(result.is_err());
    }
}
