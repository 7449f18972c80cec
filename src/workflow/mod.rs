pub mod report_ctx;
pub mod sheet_ctx;
pub mod sheet_flow;

pub use report_ctx::ReportContext;
pub use sheet_ctx::SheetCtx;
pub use sheet_flow::{SheetFlow, SheetOutcome, SheetReport, SkipReason};
