// ============================================================================
// LangFill - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 扫描结果与生成结果的控制台汇总
// 边界:
//   - ✅ 扫描统计与文件列表显示
//   - ✅ 待翻译键列表显示（预演模式）
//   - ✅ 生成结果汇总
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::path::PathBuf;

use crate::core::GenerationReport;
use crate::models::table::PendingKeySet;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 渲染扫描统计和文件列表
pub fn render_scan_summary(files: &[PathBuf], total_keys: usize, pending: usize) {
    Logger::info(tf!("generate.found_keys", total_keys, files.len()));
    Logger::info(tf!("generate.pending_keys", pending));
    Logger::info(t!("generate.files_scanned"));
    for file in files {
        println!("  {} {}", Colors::dim(icons::FILE), file.display());
    }
}

/// 渲染待翻译键列表
pub fn render_pending_keys(pending: &PendingKeySet) {
    if pending.is_empty() {
        return;
    }
    Logger::info(t!("generate.pending_list"));
    for key in pending {
        println!("  {} {}", Colors::dim(icons::ARROW), Colors::highlight(key));
    }
}

/// 渲染最终结果
pub fn render_generation_summary(report: &GenerationReport) {
    match &report.output {
        Some(path) => {
            Logger::success(tf!(
                "generate.completed",
                icons::SUCCESS,
                report.translated,
                path.display()
            ));
            if report.failed > 0 {
                Logger::warn(tf!("generate.kept_original", icons::ERROR, report.failed));
            }
        }
        None => Logger::info(tf!("generate.dry_run_complete", report.pending)),
    }
}
