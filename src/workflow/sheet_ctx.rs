//! 工作表处理上下文
//!
//! 封装"我正在处理哪个文件的第几个工作表"这一信息

use std::fmt::Display;

/// 工作表处理上下文
#[derive(Debug, Clone)]
pub struct SheetCtx {
    /// 所属文件名（不含扩展名）
    pub file_stem: String,

    /// 工作表在文件中的序号（从1开始，仅用于日志显示）
    pub sheet_index: usize,

    /// 工作表名称（同时作为场景名称）
    pub sheet_name: String,
}

impl SheetCtx {
    /// 创建新的工作表上下文
    pub fn new(file_stem: impl Into<String>, sheet_index: usize, sheet_name: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
            sheet_index,
            sheet_name: sheet_name.into(),
        }
    }
}

impl Display for SheetCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件 {} 工作表#{} {}]",
            self.file_stem, self.sheet_index, self.sheet_name
        )
    }
}
