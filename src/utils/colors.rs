// ============================================================================
// LangFill - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和开关控制
// 边界:
//   - ✅ 日志级别颜色主题
//   - ✅ 颜色输出格式化
//   - ✅ 颜色开关（--no-color / 非终端输出）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 UI 组件实现
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::{ColoredString, Colorize};

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 根据配置和终端能力开关全局颜色输出
    pub fn configure(colored: bool) {
        let enabled = colored && atty::is(atty::Stream::Stdout);
        colored::control::set_override(enabled);
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> ColoredString {
        text.cyan()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> ColoredString {
        text.yellow()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// 次要信息 (灰色)
    pub fn dim(text: &str) -> ColoredString {
        text.bright_black()
    }

    /// 高亮文本
    pub fn highlight(text: &str) -> ColoredString {
        text.bold()
    }
}
