//! 工作簿加载 - 基础设施层
//!
//! 把每个工作表转换为去空白后的字符串网格

use crate::error::{AppResult, WorkbookError};
use crate::models::SheetGrid;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, warn};

/// 打开工作簿并按工作表顺序读取所有网格
///
/// 单个工作表读取失败只记录警告，不影响其他工作表
pub fn load_workbook(path: &Path) -> AppResult<Vec<SheetGrid>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|source| WorkbookError::OpenFailed {
            path: path.display().to_string(),
            source,
        })?;

    let sheet_names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        match workbook.worksheet_range(&name) {
            Ok(range) => {
                let grid = range_to_grid(&name, &range);
                debug!("工作表 {} 读取完成: {} 行", name, grid.row_count());
                sheets.push(grid);
            }
            Err(source) => {
                let err = WorkbookError::SheetReadFailed {
                    sheet: name.clone(),
                    source,
                };
                warn!("⚠️ {}", err);
            }
        }
    }

    Ok(sheets)
}

/// 把 calamine 的区域转换为从 A1 开始的矩形网格
fn range_to_grid(name: &str, range: &Range<Data>) -> SheetGrid {
    let Some((end_row, end_col)) = range.end() else {
        return SheetGrid::new(name, Vec::new());
    };

    let rows = (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(cell_to_string)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    SheetGrid::new(name, rows)
}

/// 单元格转字符串
///
/// - 整数值的浮点数不带小数点
/// - 日期时间输出为 `2024-03-15 00:00:00`
/// - 空值与错误值为 ""
pub fn cell_to_string(cell: &Data) -> String {
    let text = match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| dt.to_string()),
        other => other.to_string(),
    };
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("  登录  ".to_string())), "登录");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_date_cells_render_as_datetime() {
        use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("入职.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("入职").unwrap();
        sheet.write_string(0, 0, "输入数据").unwrap();
        let date = ExcelDateTime::from_ymd(2024, 3, 15).unwrap();
        let format = Format::new().set_num_format("yyyy-mm-dd");
        sheet.write_datetime_with_format(1, 0, &date, &format).unwrap();
        sheet.write_number(2, 0, 45366.0).unwrap();
        workbook.save(&path).unwrap();

        let sheets = load_workbook(&path).unwrap();
        assert_eq!(sheets[0].cell(1, 0), Some("2024-03-15 00:00:00"));
        assert_eq!(sheets[0].cell(2, 0), Some("45366"));
    }
}
