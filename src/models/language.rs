// ============================================================================
// LangFill - 语言代码数据模型
// ============================================================================
//
// 文件: src/models/language.rs
// 职责: 目标语言代码定义
// 边界:
//   - ✅ 语言代码类型和校验
//   - ✅ 源语言判断
//   - ❌ 不应包含翻译请求逻辑
//   - ❌ 不应包含文件读写
//
// ============================================================================

use std::collections::HashMap;
use std::fmt;

use crate::utils::constants::translator::SOURCE_LANGUAGE;

/// 目标语言代码（如 "en"、"zh"、"jp"）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// 创建语言代码，空白代码返回 None
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            None
        } else {
            Some(Self(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为源语言（英文），源语言的翻译为原文
    pub fn is_source(&self) -> bool {
        self.0 == SOURCE_LANGUAGE
    }

    /// 在名称表中查找可读语言名，找不到时使用代码本身
    pub fn display_name<'a>(&'a self, names: &'a HashMap<String, String>) -> &'a str {
        names.get(&self.0).map(String::as_str).unwrap_or(&self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 内置语言名称表
pub fn default_language_names() -> HashMap<String, String> {
    HashMap::from([
        ("zh".to_string(), "Simplified Chinese".to_string()),
        ("en".to_string(), "English".to_string()),
    ])
}
