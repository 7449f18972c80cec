pub mod header_resolver;
pub mod llm_service;
pub mod qa_builder;
pub mod row_extractor;
pub mod scenario_summarizer;

pub use header_resolver::resolve_header;
pub use llm_service::{LlmService, GENERATION_FALLBACK};
pub use row_extractor::{extract_rows, Extraction, StopReason};
pub use scenario_summarizer::ScenarioSummarizer;
