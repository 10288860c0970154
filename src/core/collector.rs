// ============================================================================
// LangFill - 源文件收集器
// ============================================================================
//
// 文件: src/core/collector.rs
// 职责: 递归收集需要扫描翻译键的源文件
// 边界:
//   - ✅ 目录深度优先遍历
//   - ✅ node_modules 与忽略模式剪枝
//   - ✅ 扩展名白名单过滤
//   - ❌ 不应读取文件内容
//   - ❌ 不应包含翻译键提取逻辑
//
// 遍历顺序为目录列举顺序（不排序），遍历错误直接返回给调用方。
//
// ============================================================================

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::utils::constants::source;

/// 遍历错误
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// 源文件收集器
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// 扫描根目录
    root: PathBuf,
    /// 扩展名白名单（不含点）
    extensions: Vec<String>,
    /// 额外忽略的路径模式
    ignore: Vec<String>,
}

impl FileCollector {
    /// 创建使用默认扩展名白名单的收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: source::EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 收集所有匹配的源文件
    pub fn collect(&self) -> Result<Vec<PathBuf>, CollectError> {
        let patterns = self
            .ignore
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| CollectError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !self.is_pruned(e, &patterns))
        {
            let entry = entry.map_err(|source| CollectError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone()),
                source,
            })?;

            if entry.file_type().is_file() && self.has_allowed_extension(&entry) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %self.root.display(), count = files.len(), "collected source files");
        Ok(files)
    }

    /// 是否跳过该条目（目录被跳过时不再进入）
    fn is_pruned(&self, entry: &DirEntry, patterns: &[glob::Pattern]) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        if entry.file_type().is_dir() && entry.file_name() == source::DEPENDENCY_DIR {
            return true;
        }

        if patterns.is_empty() {
            return false;
        }

        let relative_path = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        patterns.iter().any(|pattern| pattern.matches(&relative_path))
    }

    /// 按文件名后缀匹配，".js" 这类只有扩展名的文件名同样匹配
    fn has_allowed_extension(&self, entry: &DirEntry) -> bool {
        let file_name = entry.file_name().to_string_lossy();
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(&format!(".{}", ext)))
    }
}
