// ============================================================================
// LangFill - 翻译进度条
// ============================================================================
//
// 文件: src/ui/progress.rs
// 职责: 逐条翻译时的进度显示
// 边界:
//   - ✅ 进度条创建与样式
//   - ✅ 进度条存在时的日志输出穿插
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::constants::progress_chars;

/// 翻译进度条，未启用或非终端输出时隐藏
pub struct TranslationProgress {
    bar: ProgressBar,
}

impl TranslationProgress {
    pub fn new(total: usize, enabled: bool) -> Self {
        let visible = enabled && total > 0 && atty::is(atty::Stream::Stdout);
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan}] {pos}/{len} {wide_msg}") {
            bar.set_style(style.progress_chars(progress_chars::BAR));
        }
        Self { bar }
    }

    /// 显示当前正在翻译的键
    pub fn set_current(&self, key: &str) {
        self.bar.set_message(key.to_string());
    }

    /// 暂停进度条输出一行日志
    pub fn log<F: FnOnce()>(&self, f: F) {
        self.bar.suspend(f);
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
