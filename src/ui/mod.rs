// ============================================================================
// LangFill - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 控制台展示组件导出
//
// ============================================================================

pub mod progress;
pub mod summary;
