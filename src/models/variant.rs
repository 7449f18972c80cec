use crate::models::field::LogicalField;

/// 表头格式（一种可识别的表头组合）
#[derive(Debug, PartialEq, Eq)]
pub struct HeaderVariant {
    /// 格式名称（仅用于日志）
    pub name: &'static str,
    /// 同一行中必须全部出现的表头
    pub labels: &'static [&'static str],
    /// 数据行中不允许为空的字段，任一为空即结束提取
    pub row_required: &'static [LogicalField],
}

const STEP_AND_EXPECTED: &[LogicalField] = &[LogicalField::Step, LogicalField::Expected];
const STEP_ONLY: &[LogicalField] = &[LogicalField::Step];

/// 所有可识别的表头格式，按优先级排列：信息最完整的在前
pub static HEADER_VARIANTS: [HeaderVariant; 9] = [
    HeaderVariant {
        name: "角色/步骤/路径/特殊信息/预期",
        labels: &["测试角色", "测试步骤", "功能路径", "输入数据/特殊信息", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "角色/步骤/路径/输入/预期",
        labels: &["测试角色", "测试步骤", "功能路径", "输入数据", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "步骤/路径/特殊信息/预期",
        labels: &["测试步骤", "功能路径", "输入数据/特殊信息", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "步骤/路径/输入/预期",
        labels: &["测试步骤", "功能路径", "输入数据", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "步骤/路径/特殊信息",
        labels: &["测试步骤", "功能路径", "输入数据/特殊信息"],
        row_required: STEP_ONLY,
    },
    HeaderVariant {
        name: "步骤/路径/输入",
        labels: &["测试步骤", "功能路径", "输入数据"],
        row_required: STEP_ONLY,
    },
    HeaderVariant {
        name: "环节/操作角色/操作步骤/输入/预期",
        labels: &["关键环节", "操作角色", "操作步骤", "输入数据", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "角色/步骤/输入/预期",
        labels: &["测试角色", "测试步骤", "输入数据", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
    HeaderVariant {
        name: "操作角色/步骤/路径/输入/预期",
        labels: &["操作角色", "测试步骤", "功能路径", "输入数据", "预期结果"],
        row_required: STEP_AND_EXPECTED,
    },
];

impl HeaderVariant {
    /// 该格式是否提供某个逻辑字段
    pub fn has_field(&self, field: LogicalField) -> bool {
        self.labels
            .iter()
            .any(|label| LogicalField::from_label(label) == Some(field))
    }

    /// 该行的非空值是否包含全部表头
    pub fn matches(&self, values: &[&str]) -> bool {
        self.labels.iter().all(|label| values.contains(label))
    }
}

impl std::fmt::Display for HeaderVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 表头映射：表头 → 列号
///
/// 由命中的格式一次性构建，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    variant: &'static HeaderVariant,
    columns: Vec<(&'static str, usize)>,
}

impl HeaderMapping {
    pub fn new(variant: &'static HeaderVariant, columns: Vec<(&'static str, usize)>) -> Self {
        Self { variant, columns }
    }

    pub fn variant(&self) -> &'static HeaderVariant {
        self.variant
    }

    pub fn columns(&self) -> &[(&'static str, usize)] {
        &self.columns
    }

    /// 按原始表头查列号
    pub fn column(&self, label: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, idx)| *idx)
    }

    /// 按逻辑字段查列号，依别名优先级取第一个存在的表头
    pub fn column_for(&self, field: LogicalField) -> Option<usize> {
        field
            .aliases()
            .iter()
            .find_map(|alias| self.column(alias))
    }
}

/// 表头识别结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub mapping: HeaderMapping,
    /// 表头所在行
    pub header_row: usize,
    /// 第一条数据所在行
    pub data_start_row: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_step_and_known_labels() {
        for variant in HEADER_VARIANTS.iter() {
            assert!(variant.has_field(LogicalField::Step), "{}", variant);
            for label in variant.labels {
                assert!(LogicalField::from_label(label).is_some(), "{}", label);
            }
            for field in variant.row_required {
                assert!(variant.has_field(*field), "{} 缺少 {}", variant, field);
            }
        }
    }

    #[test]
    fn test_step_alias_priority() {
        let variant = &HEADER_VARIANTS[6];
        let mapping = HeaderMapping::new(
            variant,
            vec![
                ("关键环节", 0),
                ("操作角色", 1),
                ("操作步骤", 2),
                ("输入数据", 3),
                ("预期结果", 4),
            ],
        );
        assert_eq!(mapping.column_for(LogicalField::Step), Some(2));
        assert_eq!(mapping.column_for(LogicalField::Role), Some(1));
        assert_eq!(mapping.column_for(LogicalField::Path), None);
    }
}
