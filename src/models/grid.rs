/// 单个工作表的单元格网格
///
/// 单元格均已去除首尾空白，空单元格为 ""
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    /// 工作表名称
    pub name: String,
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// 由字符串切片构造，便于测试
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.as_ref().trim().to_string()).collect())
            .collect();
        Self::new(name, rows)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 没有任何行
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 读取单元格，越界返回 None
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_access_and_bounds() {
        let grid = SheetGrid::from_rows("s", [vec![" a ", "b"], vec!["c"]]);
        assert_eq!(grid.cell(0, 0), Some("a"));
        assert_eq!(grid.cell(1, 0), Some("c"));
        assert_eq!(grid.cell(1, 1), None);
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.row_count(), 2);
    }
}
