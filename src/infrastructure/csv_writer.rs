//! CSV 写入 - 基础设施层
//!
//! 输出 UTF-8（带 BOM，便于 Excel 直接打开中文）的两列问答文件

use crate::error::{AppResult, FileError, ReportError};
use crate::models::QaRecord;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CSV_HEADER: [&str; 2] = ["问题", "预期回答"];

/// 写入问答 CSV，目标已存在时先删除
pub fn write_qa_csv(path: &Path, records: &[QaRecord]) -> AppResult<()> {
    let shown = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FileError::CreateDirFailed {
            path: parent.display().to_string(),
            source,
        })?;
    }

    if path.exists() {
        fs::remove_file(path).map_err(|source| FileError::DeleteFailed {
            path: shown.clone(),
            source,
        })?;
        info!("🔄 已删除旧文件: {}", shown);
    }

    let mut file = File::create(path).map_err(|source| FileError::write_failed(&shown, source))?;
    file.write_all(UTF8_BOM)
        .map_err(|source| FileError::write_failed(&shown, source))?;

    let csv_failed = |source: csv::Error| ReportError::CsvWriteFailed {
        path: shown.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(CSV_HEADER).map_err(csv_failed)?;
    for record in records {
        writer
            .write_record([record.question.as_str(), record.answer.as_str()])
            .map_err(csv_failed)?;
    }
    writer
        .flush()
        .map_err(|source| csv_failed(csv::Error::from(source)))?;

    Ok(())
}

/// 先写主路径，失败后再尝试一次备选路径
///
/// 备选路径只在主路径失败后才计算。返回实际写入的路径
pub fn write_qa_csv_with_fallback<F>(
    primary: &Path,
    fallback: F,
    records: &[QaRecord],
) -> AppResult<PathBuf>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    match write_qa_csv(primary, records) {
        Ok(()) => return Ok(primary.to_path_buf()),
        Err(e) => error!("❌ 生成 CSV 文件失败: {}", e),
    }

    let exhausted = |fallback: String| ReportError::CsvFallbackExhausted {
        primary: primary.display().to_string(),
        fallback,
    };

    let fallback = match fallback() {
        Ok(path) => path,
        Err(e) => {
            error!("❌ 无法确定备选路径: {}", e);
            return Err(exhausted("<不可用>".to_string()).into());
        }
    };
    warn!("🔄 尝试使用备选路径: {}", fallback.display());

    match write_qa_csv(&fallback, records) {
        Ok(()) => Ok(fallback),
        Err(e) => {
            error!("❌ 备选路径写入失败: {}", e);
            Err(exhausted(fallback.display().to_string()).into())
        }
    }
}
