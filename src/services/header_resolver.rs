//! 表头识别 - 业务能力层
//!
//! 自上而下扫描网格，找到第一行能完整匹配某个表头格式的行

use crate::models::{HeaderMapping, HeaderMatch, HeaderVariant, SheetGrid, HEADER_VARIANTS};
use tracing::debug;

/// 在网格中定位表头
///
/// - 全空行直接跳过
/// - 每一行按 [`HEADER_VARIANTS`] 的顺序尝试，第一个全部表头都出现的格式胜出
/// - 同一表头在行内出现多次时，取第一次出现的列
///
/// 整张表都没有命中时返回 `None`
pub fn resolve_header(grid: &SheetGrid) -> Option<HeaderMatch> {
    resolve_header_with(grid, &HEADER_VARIANTS)
}

/// 使用指定的格式列表识别表头
pub fn resolve_header_with(
    grid: &SheetGrid,
    variants: &'static [HeaderVariant],
) -> Option<HeaderMatch> {
    for (row_index, row) in grid.rows().iter().enumerate() {
        let non_empty: Vec<(usize, &str)> = row
            .iter()
            .enumerate()
            .map(|(col, value)| (col, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        if non_empty.is_empty() {
            continue;
        }

        let values: Vec<&str> = non_empty.iter().map(|(_, v)| *v).collect();

        let Some(variant) = variants.iter().find(|variant| variant.matches(&values)) else {
            continue;
        };

        let columns = variant
            .labels
            .iter()
            .filter_map(|label| {
                non_empty
                    .iter()
                    .find(|(_, value)| value == label)
                    .map(|(col, _)| (*label, *col))
            })
            .collect();

        debug!(
            "工作表 {} 第 {} 行命中表头格式: {}",
            grid.name,
            row_index + 1,
            variant
        );

        return Some(HeaderMatch {
            mapping: HeaderMapping::new(variant, columns),
            header_row: row_index,
            data_start_row: row_index + 1,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogicalField;

    #[test]
    fn test_header_after_title_and_blank_rows() {
        let grid = SheetGrid::from_rows(
            "登录测试",
            [
                vec!["", "", "", ""],
                vec!["登录模块用例", "", "", ""],
                vec!["预期结果", "测试步骤", "输入数据/特殊信息", "功能路径"],
                vec!["成功", "登录", "admin", "首页->登录"],
            ],
        );

        let found = resolve_header(&grid).expect("应识别到表头");
        assert_eq!(found.header_row, 2);
        assert_eq!(found.data_start_row, 3);
        assert_eq!(found.mapping.variant().name, "步骤/路径/特殊信息/预期");
        assert_eq!(found.mapping.column_for(LogicalField::Step), Some(1));
        assert_eq!(found.mapping.column_for(LogicalField::Path), Some(3));
        assert_eq!(found.mapping.column_for(LogicalField::Input), Some(2));
        assert_eq!(found.mapping.column_for(LogicalField::Expected), Some(0));
        assert_eq!(found.mapping.column_for(LogicalField::Role), None);
        assert_eq!(found.mapping.columns().len(), 4);
    }

    #[test]
    fn test_most_specific_variant_wins() {
        let grid = SheetGrid::from_rows(
            "s",
            [vec!["测试角色", "测试步骤", "功能路径", "输入数据/特殊信息", "预期结果"]],
        );
        let found = resolve_header(&grid).unwrap();
        assert_eq!(found.mapping.variant(), &HEADER_VARIANTS[0]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let grid = SheetGrid::from_rows(
            "s",
            [vec!["序号", "测试步骤", "备注", "功能路径", "输入数据"]],
        );
        let found = resolve_header(&grid).unwrap();
        assert_eq!(found.mapping.variant().name, "步骤/路径/输入");
        assert_eq!(found.mapping.column("功能路径"), Some(3));
        assert_eq!(found.mapping.column("备注"), None);
    }

    #[test]
    fn test_duplicate_label_binds_first_occurrence() {
        let grid = SheetGrid::from_rows(
            "s",
            [vec!["测试步骤", "功能路径", "输入数据", "输入数据", "测试步骤"]],
        );
        let found = resolve_header(&grid).unwrap();
        assert_eq!(found.mapping.column("测试步骤"), Some(0));
        assert_eq!(found.mapping.column("输入数据"), Some(2));
    }

    #[test]
    fn test_key_step_variant() {
        let grid = SheetGrid::from_rows(
            "s",
            [vec!["关键环节", "操作角色", "操作步骤", "输入数据", "预期结果"]],
        );
        let found = resolve_header(&grid).unwrap();
        assert_eq!(found.mapping.variant(), &HEADER_VARIANTS[6]);
        assert_eq!(found.mapping.column_for(LogicalField::Step), Some(2));
    }

    #[test]
    fn test_labels_split_across_rows_do_not_match() {
        let grid = SheetGrid::from_rows(
            "s",
            [vec!["测试步骤", "功能路径", ""], vec!["", "", "输入数据"]],
        );
        assert!(resolve_header(&grid).is_none());
    }

    #[test]
    fn test_no_partial_or_fuzzy_match() {
        let grid = SheetGrid::from_rows(
            "s",
            [
                vec!["测试步骤", "功能 路径", "输入数据"],
                vec!["步骤", "路径", "输入"],
            ],
        );
        assert!(resolve_header(&grid).is_none());
    }

    #[test]
    fn test_empty_grid() {
        assert!(resolve_header(&SheetGrid::new("s", Vec::new())).is_none());
    }
}
