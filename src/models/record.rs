/// 提取出的一行测试用例
///
/// `None` 表示命中的表头格式中没有该字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRow {
    pub role: Option<String>,
    pub step: String,
    pub path: Option<String>,
    pub input: Option<String>,
    pub expected: Option<String>,
}

/// 场景级总结
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSummary {
    /// 步骤链（“A → B → C”）
    pub steps_chain: String,
    /// 大模型生成的叙述，失败时为兜底文本
    pub narrative: String,
}

impl ScenarioSummary {
    /// 最终答案：步骤链在前，叙述在后
    pub fn answer(&self) -> String {
        format!("测试步骤如下：{}。\n\n{}", self.steps_chain, self.narrative)
    }
}

/// 问答对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
