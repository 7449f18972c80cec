use phf::phf_map;

/// 逻辑字段
///
/// 不同表头写法（如“测试角色”“操作角色”）最终都归并到这五个槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    /// 测试角色
    Role,
    /// 测试步骤（必填）
    Step,
    /// 功能路径
    Path,
    /// 输入数据 / 特殊信息
    Input,
    /// 预期结果
    Expected,
}

/// 原始表头 → 逻辑字段
static LABEL_FIELDS: phf::Map<&'static str, LogicalField> = phf_map! {
    "测试角色" => LogicalField::Role,
    "操作角色" => LogicalField::Role,
    "测试步骤" => LogicalField::Step,
    "操作步骤" => LogicalField::Step,
    "关键环节" => LogicalField::Step,
    "功能路径" => LogicalField::Path,
    "输入数据/特殊信息" => LogicalField::Input,
    "输入数据" => LogicalField::Input,
    "预期结果" => LogicalField::Expected,
};

impl LogicalField {
    /// 固定输出顺序
    pub const ALL: [LogicalField; 5] = [
        LogicalField::Role,
        LogicalField::Step,
        LogicalField::Path,
        LogicalField::Input,
        LogicalField::Expected,
    ];

    /// 取值时依次尝试的表头别名（按优先级）
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Role => &["测试角色", "操作角色"],
            LogicalField::Step => &["测试步骤", "操作步骤", "关键环节"],
            LogicalField::Path => &["功能路径"],
            LogicalField::Input => &["输入数据/特殊信息", "输入数据"],
            LogicalField::Expected => &["预期结果"],
        }
    }

    /// 答案中使用的字段名
    pub fn display_name(self) -> &'static str {
        match self {
            LogicalField::Role => "测试角色",
            LogicalField::Step => "测试步骤",
            LogicalField::Path => "功能路径",
            LogicalField::Input => "输入数据 / 特殊信息",
            LogicalField::Expected => "预期结果",
        }
    }

    /// 从原始表头解析逻辑字段（精确匹配）
    pub fn from_label(label: &str) -> Option<Self> {
        LABEL_FIELDS.get(label).copied()
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_canonicalizes_to_its_field() {
        for field in LogicalField::ALL {
            for alias in field.aliases() {
                assert_eq!(LogicalField::from_label(alias), Some(field), "{}", alias);
            }
        }
    }

    #[test]
    fn test_unknown_or_untrimmed_label() {
        assert_eq!(LogicalField::from_label("备注"), None);
        assert_eq!(LogicalField::from_label(" 测试步骤"), None);
        assert_eq!(LogicalField::from_label("输入数据 / 特殊信息"), None);
    }
}
