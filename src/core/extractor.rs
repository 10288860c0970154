// ============================================================================
// LangFill - 翻译键提取器
// ============================================================================
//
// 文件: src/core/extractor.rs
// 职责: 从源文件文本中提取 t('...') / t("...") 调用的字面量参数
// 边界:
//   - ✅ 固定调用模式匹配
//   - ✅ 单文件内去重（保持首次出现顺序）
//   - ❌ 不应包含跨文件合并逻辑
//   - ❌ 不应包含语法树解析
//
// 匹配规则是刻意简化的：变量参数、跨行调用、模板字符串、
// 含引号的字面量都不会被匹配。
//
// ============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

use crate::models::table::KeySet;
use crate::tf;

/// t( + 引号 + 非引号字符 + 引号 + )
const CALL_PATTERN: &str = r#"t\(['"]([^'"]+)['"]\)"#;

/// 翻译键提取器
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(CALL_PATTERN).context("Failed to compile key pattern")?;
        Ok(Self { pattern })
    }

    /// 提取文本中的去重翻译键，按首次出现顺序返回
    pub fn extract(&self, content: &str) -> Vec<String> {
        let keys: KeySet = self
            .pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        keys.into_iter().collect()
    }

    /// 读取并提取单个文件，非 UTF-8 字节按替换字符解码
    pub fn extract_file(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).with_context(|| tf!("error.read_source_file", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let keys = self.extract(&content);
        tracing::debug!(file = %path.display(), count = keys.len(), "extracted keys");
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        KeyExtractor::new().unwrap().extract(content)
    }

    #[test]
    fn non_utf8_files_are_decoded_lossily() {
        let dir = tempfile::TempDir::new().unwrap();
        let legacy = dir.path().join("legacy.js");
        let modern = dir.path().join("a.js");
        std::fs::write(&legacy, b"// caf\xe9\nt('Open')").unwrap();
        std::fs::write(&modern, "t('Save')").unwrap();

        let extractor = KeyExtractor::new().unwrap();
        assert_eq!(extractor.extract_file(&legacy).unwrap(), vec!["Open"]);
        assert_eq!(extractor.extract_file(&modern).unwrap(), vec!["Save"]);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let extractor = KeyExtractor::new().unwrap();
        assert!(extractor.extract_file(&dir.path().join("missing.js")).is_err());
    }

    #[test]
    fn extracts_single_and_double_quoted_literals() {
        let content = r#"
            <button>{t('Save')}</button>
            <span>{t("Cancel")}</span>
        "#;
        assert_eq!(extract(content), vec!["Save", "Cancel"]);
    }

    #[test]
    fn duplicates_keep_first_seen_order() {
        let content = "t('b') t('a') t(\"b\") t('c') t('a')";
        assert_eq!(extract(content), vec!["b", "a", "c"]);
    }

    #[test]
    fn keeps_spaces_and_unicode_inside_literals() {
        let content = "t('Hello, world!') t('Größe ändern')";
        assert_eq!(extract(content), vec!["Hello, world!", "Größe ändern"]);
    }

    #[test]
    fn no_calls_yields_nothing() {
        assert!(extract("const x = 1;\nexport default x;").is_empty());
    }

    #[test]
    fn variable_arguments_are_not_matched() {
        assert!(extract("t(label) t(props.title) t(`Hi ${name}`)").is_empty());
    }

    #[test]
    fn calls_split_across_lines_are_not_matched() {
        let content = "t(\n  'Save'\n)\nt('Save'\n)";
        assert!(extract(content).is_empty());
    }

    #[test]
    fn literals_containing_quotes_are_not_matched() {
        assert!(extract(r#"t("Don't") t('Say "hi"') t('It\'s')"#).is_empty());
    }

    #[test]
    fn empty_literals_and_extra_arguments_are_not_matched() {
        assert!(extract("t('') t('count', { n: 1 })").is_empty());
    }

    #[test]
    fn mismatched_quotes_still_match() {
        assert_eq!(extract(r#"t('Open")"#), vec!["Open"]);
    }

    #[test]
    fn any_identifier_ending_in_t_matches() {
        assert_eq!(extract("alert('Oops') $t('Title')"), vec!["Oops", "Title"]);
    }
}
