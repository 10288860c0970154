// ============================================================================
// LangFill - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 配置与翻译数据结构导出
//
// ============================================================================

pub mod config;
pub mod language;
pub mod table;
