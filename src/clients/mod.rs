pub mod dashscope_client;
pub mod text_generator;

pub use dashscope_client::DashScopeClient;
pub use text_generator::TextGenerator;
