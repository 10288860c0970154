// ============================================================================
// LangFill - 界面文案国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 工具自身控制台文案的多语言支持
// 边界:
//   - ✅ 界面语言选择
//   - ✅ 文案宏定义和实现
//   - ✅ 参数化文案支持
//   - ❌ 不应包含具体文案内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含被扫描项目的翻译表处理
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::OnceLock;

/// 界面语言（启动时设置一次）
static LANGUAGE: OnceLock<String> = OnceLock::new();

/// 设置界面语言，只有第一次调用生效
pub fn set_language(language: &str) {
    let _ = LANGUAGE.set(language.to_string());
}

/// 获取文案
pub fn get_translation(key: &str) -> String {
    let language = LANGUAGE.get().map(String::as_str).unwrap_or("en_us");

    let translation_data = match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    };

    translation_data
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 简单文案宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 依次替换模板中的 {} 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut search_from = 0;
    for arg in args.iter() {
        // 从上次替换结束处继续，避免参数内容中的 {} 被再次替换
        if let Some(pos) = result[search_from..].find("{}") {
            let pos = search_from + pos;
            result.replace_range(pos..pos + 2, arg);
            search_from = pos + arg.len();
        }
    }
    result
}

/// 带参数的文案宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_english_key_has_a_chinese_entry() {
        for (key, _) in en_us::TRANSLATIONS {
            assert!(
                zh_cn::TRANSLATIONS.iter().any(|(k, _)| k == key),
                "missing zh_cn entry for {}",
                key
            );
        }
    }

    #[test]
    fn placeholders_are_filled_in_order() {
        let result = format_with_args("{} of {}".to_string(), vec!["1".into(), "2".into()]);
        assert_eq!(result, "1 of 2");
    }

    #[test]
    fn placeholder_text_inside_arguments_is_left_alone() {
        let result = format_with_args("\"{}\" -> \"{}\"".to_string(), vec!["{}".into(), "x".into()]);
        assert_eq!(result, "\"{}\" -> \"x\"");
    }
}
