//! # Xlsx To QA
//!
//! 把 Excel 测试用例表转换为 Word 报告和问答 CSV 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只负责文件格式的读写
//! - `load_workbook` - 读取 xls / xlsx 为字符串网格
//! - `DocxDocument` - 累积段落并保存 Word 文档
//! - `write_qa_csv` - 输出带 BOM 的问答 CSV
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - 远程文本生成服务
//! - `TextGenerator` - 生成能力的抽象，测试时可替换
//! - `DashScopeClient` - 通义千问 DashScope 实现
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个工作表
//! - `resolve_header` - 表头识别
//! - `extract_rows` - 连续数据行提取
//! - `LlmService` / `ScenarioSummarizer` - 带重试的场景总结
//! - `qa_builder` - 问答对构建
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一个工作表"的完整处理流程
//! - `SheetCtx` - 上下文封装（文件名 + 工作表序号）
//! - `SheetFlow` - 流程编排（表头 → 提取 → 总结 → 问答）
//! - `ReportContext` - 文档与问答对的累积上下文
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文件处理器
//! - `orchestrator/workbook_processor` - 单个文件处理器，遍历工作表
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{DashScopeClient, TextGenerator};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExtractedRow, QaRecord, SheetGrid};
pub use orchestrator::{process_workbook, App, BatchStats, WorkbookStats};
pub use workflow::{ReportContext, SheetCtx, SheetFlow, SheetOutcome};
