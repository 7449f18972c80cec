//! 基础设施层
//!
//! 只负责文件格式的读写，不认识问答对以外的业务概念

pub mod csv_writer;
pub mod docx_writer;
pub mod workbook_loader;

pub use csv_writer::{write_qa_csv, write_qa_csv_with_fallback};
pub use docx_writer::{DocBlock, DocxDocument};
pub use workbook_loader::{cell_to_string, load_workbook};
