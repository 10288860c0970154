// ============================================================================
// LangFill - 翻译表数据模型
// ============================================================================
//
// 文件: src/models/table.rs
// 职责: 翻译表与待翻译键集合定义
// 边界:
//   - ✅ 翻译表类型定义（保持插入顺序）
//   - ✅ 待翻译键集合计算
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含翻译请求逻辑
//
// ============================================================================

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// 单一语言的翻译表：原文键 → 译文
///
/// 值保留文件中的原始 JSON（null、数字、嵌套对象等原样写回），新译文以字符串写入。
pub type TranslationTable = IndexMap<String, Value>;

/// 按首次出现顺序去重的键集合
pub type KeySet = IndexSet<String>;

/// 扫描到但翻译表中尚不存在的键
pub type PendingKeySet = IndexSet<String>;

/// 计算待翻译键
///
/// 只要键存在于翻译表中即视为已翻译，不论值的类型；`retranslate_empty`
/// 为 true 时，值为空字符串的键也重新翻译。
pub fn pending_keys(keys: &KeySet, table: &TranslationTable, retranslate_empty: bool) -> PendingKeySet {
    keys.iter()
        .filter(|key| match table.get(*key) {
            None => true,
            Some(value) => retranslate_empty && value.as_str().is_some_and(str::is_empty),
        })
        .cloned()
        .collect()
}
