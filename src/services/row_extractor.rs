//! 数据行提取 - 业务能力层
//!
//! 从表头下一行开始逐行取值，遇到第一条不完整的行即停止。
//! 表格末尾常有备注、签字栏等内容，只取表头下方连续完整的数据块。

use crate::models::{ExtractedRow, HeaderMatch, LogicalField, SheetGrid};
use tracing::debug;

/// 提取停止的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 已到表尾
    EndOfSheet,
    /// 单元格越界（行比表头短）
    CellOutOfRange { row: usize, col: usize },
    /// 必填字段为空
    MissingRequired { row: usize, field: LogicalField },
    /// 表头映射中没有测试步骤列
    StepColumnMissing,
}

/// 提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// 按表格顺序排列的有效行
    pub rows: Vec<ExtractedRow>,
    pub stop: StopReason,
}

/// 从 `header.data_start_row` 开始提取连续的有效数据行
pub fn extract_rows(grid: &SheetGrid, header: &HeaderMatch) -> Extraction {
    let mapping = &header.mapping;
    let mut rows = Vec::new();

    if mapping.column_for(LogicalField::Step).is_none() {
        return finish(grid, rows, StopReason::StepColumnMissing);
    }

    for row_index in header.data_start_row..grid.row_count() {
        let mut values: [Option<String>; 5] = Default::default();

        for (slot, field) in LogicalField::ALL.iter().enumerate() {
            let Some(col) = mapping.column_for(*field) else {
                continue;
            };
            match grid.cell(row_index, col) {
                Some(value) => values[slot] = Some(value.trim().to_string()),
                None => {
                    return finish(
                        grid,
                        rows,
                        StopReason::CellOutOfRange {
                            row: row_index,
                            col,
                        },
                    )
                }
            }
        }

        let [role, step, path, input, expected] = values;
        let step = step.unwrap_or_default();

        let missing = std::iter::once(LogicalField::Step)
            .chain(mapping.variant().row_required.iter().copied())
            .find(|field| {
                let value = match field {
                    LogicalField::Role => role.as_deref(),
                    LogicalField::Step => Some(step.as_str()),
                    LogicalField::Path => path.as_deref(),
                    LogicalField::Input => input.as_deref(),
                    LogicalField::Expected => expected.as_deref(),
                };
                value.map_or(true, str::is_empty)
            });

        if let Some(field) = missing {
            return finish(
                grid,
                rows,
                StopReason::MissingRequired {
                    row: row_index,
                    field,
                },
            );
        }

        rows.push(ExtractedRow {
            role,
            step,
            path,
            input,
            expected,
        });
    }

    finish(grid, rows, StopReason::EndOfSheet)
}

fn finish(grid: &SheetGrid, rows: Vec<ExtractedRow>, stop: StopReason) -> Extraction {
    debug!(
        "工作表 {} 提取 {} 行，停止原因: {:?}",
        grid.name,
        rows.len(),
        stop
    );
    Extraction { rows, stop }
}
