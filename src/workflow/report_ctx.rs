//! 输出累积上下文
//!
//! 一个 Excel 文件对应一个上下文：按工作表顺序追加文档段落与问答对

use crate::infrastructure::DocxDocument;
use crate::models::QaRecord;
use crate::workflow::sheet_flow::SheetReport;

/// 场景级问答与步骤级问答之间的分隔线
pub const SECTION_SEPARATOR: &str = "────────────────────────────────";

/// 输出累积上下文
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    document: DocxDocument,
    records: Vec<QaRecord>,
}

impl ReportContext {
    /// 以文件名作为主标题创建
    pub fn new(title: &str) -> Self {
        let mut document = DocxDocument::new();
        document.add_title(title);
        Self {
            document,
            records: Vec::new(),
        }
    }

    /// 追加一个工作表：标题 → 场景问答 → 分隔线 → 步骤问答 → 分页
    pub fn emit_sheet(&mut self, report: &SheetReport) {
        let doc = &mut self.document;

        doc.add_heading(report.sheet_name.as_str());

        doc.add_paragraph(format!("【问题】{}", report.scenario.question));
        doc.add_paragraph(format!("【答案】{}", report.scenario.answer));
        doc.add_paragraph(SECTION_SEPARATOR);

        for record in &report.row_records {
            doc.add_paragraph(format!("【问题】{}", record.question));
            doc.add_paragraph("【答案】");
            doc.add_paragraph(record.answer.as_str());
            doc.add_paragraph("");
        }

        doc.add_page_break();

        self.records.extend(report.qa_records().cloned());
    }

    pub fn document(&self) -> &DocxDocument {
        &self.document
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn into_parts(self) -> (DocxDocument, Vec<QaRecord>) {
        (self.document, self.records)
    }
}
