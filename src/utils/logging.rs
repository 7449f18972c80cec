/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `file_count`: 待处理文件数
/// - `model`: 使用的模型
pub fn log_startup(file_count: usize, model: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 待处理文件数: {}", file_count);
    info!("🤖 场景总结模型: {}", model);
    info!("{}", "=".repeat(60));
}

/// 记录单个文件开始处理
pub fn log_workbook_start(index: usize, total: usize, path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("🚀 开始处理 Excel 文件 ({}/{}): {}", index, total, path);
    info!("{}", "=".repeat(60));
}

/// 记录单个文件处理完成
///
/// # 参数
/// - `path`: 文件路径
/// - `processed`: 成功处理的工作表数
/// - `skipped`: 跳过的工作表数
/// - `qa_count`: 问答对数量
pub fn log_workbook_complete(path: &str, processed: usize, skipped: usize, qa_count: usize) {
    info!("\n{}", "─".repeat(60));
    info!("🎉 处理完成: {}", path);
    info!("✓ 工作表: 成功 {} / 跳过 {}", processed, skipped);
    info!("🎉 共收集 {} 条问答对", qa_count);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `files_done`: 成功处理的文件数
/// - `files_missing`: 找不到的文件数
/// - `files_failed`: 处理失败的文件数
/// - `sheets`: 工作表（成功数，跳过数）
/// - `qa_total`: 问答对总数
pub fn print_final_stats(
    files_done: usize,
    files_missing: usize,
    files_failed: usize,
    sheets: (usize, usize),
    qa_total: usize,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}", files_done);
    info!("❓ 找不到: {}", files_missing);
    info!("❌ 失败: {}", files_failed);
    info!("📑 工作表: 成功 {} / 跳过 {}", sheets.0, sheets.1);
    info!("📝 问答对总数: {}", qa_total);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("人力助手测试", 4), "人力助手...");
        assert_eq!(truncate_text("短", 4), "短");
    }
}
