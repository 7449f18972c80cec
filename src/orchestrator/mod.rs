//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 管理应用生命周期（初始化、运行）
//! - 按配置顺序处理 Excel 文件
//! - 输出全局统计信息
//!
//! ### `workbook_processor` - 单个 Excel 文件处理器
//! - 遍历单个文件的所有工作表
//! - 复用 SheetFlow，结果累积到 ReportContext
//! - 保存 Word 文档与问答 CSV
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文件>)
//!     ↓
//! workbook_processor (处理 Vec<工作表>)
//!     ↓
//! workflow::SheetFlow (处理单个工作表)
//!     ↓
//! services (能力层：表头识别 / 行提取 / 场景总结 / 问答构建)
//!     ↓
//! infrastructure (基础设施：xlsx 读取 / docx / csv 写入)
//! ```

pub mod batch_processor;
pub mod workbook_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
pub use workbook_processor::{process_sheets, process_workbook, SheetsReport, WorkbookStats};
