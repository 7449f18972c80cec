//! 问答对构建 - 业务能力层

use crate::models::{ExtractedRow, LogicalField, QaRecord, ScenarioSummary};

/// 空值占位符
pub const EMPTY_PLACEHOLDER: &str = "-";

/// 场景级问题
pub fn scenario_question(sheet_name: &str) -> String {
    format!("{}的整体测试流程是什么？", sheet_name)
}

/// 步骤级问题
pub fn row_question(sheet_name: &str, step: &str) -> String {
    format!("如何测试{}中的{}？", sheet_name, step)
}

/// 场景级问答对
pub fn scenario_qa(sheet_name: &str, summary: &ScenarioSummary) -> QaRecord {
    QaRecord::new(scenario_question(sheet_name), summary.answer())
}

/// 步骤级问答对
pub fn row_qa(sheet_name: &str, row: &ExtractedRow) -> QaRecord {
    QaRecord::new(row_question(sheet_name, &row.step), render_row_answer(row))
}

/// 功能路径中的 `->` 渲染为 ` → `
pub fn render_path(path: &str) -> String {
    path.replace("->", " → ")
}

/// 按固定字段顺序渲染步骤答案
///
/// - 测试角色：有值才输出
/// - 输入数据：为空时输出占位符
/// - 预期结果：表头格式中没有该列时整行省略
pub fn render_row_answer(row: &ExtractedRow) -> String {
    let mut lines = Vec::with_capacity(5);

    if let Some(role) = row.role.as_deref().filter(|r| !r.is_empty()) {
        lines.push(field_line(LogicalField::Role, role));
    }
    lines.push(field_line(LogicalField::Step, &row.step));
    lines.push(field_line(
        LogicalField::Path,
        &render_path(row.path.as_deref().unwrap_or_default()),
    ));
    lines.push(field_line(LogicalField::Input, or_placeholder(row.input.as_deref())));
    if let Some(expected) = row.expected.as_deref() {
        lines.push(field_line(LogicalField::Expected, or_placeholder(Some(expected))));
    }

    lines.join("\n")
}

fn field_line(field: LogicalField, value: &str) -> String {
    format!("{}：{}", field.display_name(), value)
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_PLACEHOLDER)
}
