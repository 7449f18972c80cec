//! 场景总结服务 - 业务能力层
//!
//! 把一个工作表的全部测试步骤交给大模型，总结为一段业务流程描述

use crate::clients::TextGenerator;
use crate::models::ScenarioSummary;
use crate::services::llm_service::LlmService;
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 步骤链分隔符
pub const STEP_ARROW: &str = " → ";

/// 场景总结服务
pub struct ScenarioSummarizer<G> {
    llm: LlmService<G>,
}

impl<G: TextGenerator> ScenarioSummarizer<G> {
    pub fn new(llm: LlmService<G>) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &LlmService<G> {
        &self.llm
    }

    /// 生成场景总结
    ///
    /// 生成失败时叙述部分为兜底文本，步骤链始终存在
    pub async fn summarize<S: AsRef<str>>(&self, scene_name: &str, steps: &[S]) -> ScenarioSummary {
        let prompt = build_summary_prompt(scene_name, steps);
        debug!("场景 {} 的提示词: {}", scene_name, truncate_text(&prompt, 200));

        let narrative = self.llm.generate_or_fallback(&prompt).await;

        ScenarioSummary {
            steps_chain: steps_chain(steps),
            narrative,
        }
    }
}

/// 把步骤用箭头串起来
pub fn steps_chain<S: AsRef<str>>(steps: &[S]) -> String {
    steps
        .iter()
        .map(|step| step.as_ref())
        .collect::<Vec<&str>>()
        .join(STEP_ARROW)
}

/// 构建场景总结提示词
pub fn build_summary_prompt<S: AsRef<str>>(scene_name: &str, steps: &[S]) -> String {
    let steps_text = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"你是一个 HR 系统专家。请根据以下测试步骤，总结出该场景的整体业务流程。

要求：
- 输出格式为一段连贯自然语言
- 不要编号、不要 bullet points
- 包含主要角色（如HR、用人部门）、关键环节、业务目的
- 长度控制在 300 字以内
- 不要编造未提及的功能

场景名称：{}
测试步骤列表：
{}

请输出总结："#,
        scene_name, steps_text
    )
}
