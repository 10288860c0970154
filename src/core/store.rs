// ============================================================================
// LangFill - 翻译文件存储
// ============================================================================
//
// 文件: src/core/store.rs
// 职责: 按语言读写 <lang_dir>/<code>.json 翻译表
// 边界:
//   - ✅ 翻译表读取（缺失或损坏时返回空表）
//   - ✅ 翻译表写入（2 空格缩进，整体覆盖）
//   - ✅ 语言目录自动创建
//   - ❌ 不应包含待翻译键计算
//   - ❌ 不应包含翻译请求逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::models::language::LanguageCode;
use crate::models::table::TranslationTable;
use crate::tf;
use crate::utils::constants::store::FILE_EXTENSION;
use crate::utils::logger::Logger;

/// 翻译文件读写错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize translations for {lang}: {source}")]
    Serialize {
        lang: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 翻译文件存储
#[derive(Debug, Clone)]
pub struct TranslationStore {
    lang_dir: PathBuf,
}

impl TranslationStore {
    pub fn new(lang_dir: impl Into<PathBuf>) -> Self {
        Self {
            lang_dir: lang_dir.into(),
        }
    }

    /// 语言文件路径
    pub fn path_for(&self, lang: &LanguageCode) -> PathBuf {
        self.lang_dir
            .join(format!("{}.{}", lang.as_str(), FILE_EXTENSION))
    }

    /// 读取翻译表，文件不存在时返回 None
    pub fn try_load(&self, lang: &LanguageCode) -> Result<Option<TranslationTable>, StoreError> {
        let path = self.path_for(lang);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let table = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse { path, source })?;
        Ok(Some(table))
    }

    /// 读取翻译表，缺失或无法解析时返回空表并输出警告
    pub fn load(&self, lang: &LanguageCode) -> TranslationTable {
        match self.try_load(lang) {
            Ok(Some(table)) => {
                tracing::info!(lang = %lang, entries = table.len(), "loaded existing translations");
                table
            }
            Ok(None) => TranslationTable::new(),
            Err(e) => {
                tracing::warn!(lang = %lang, error = %e, "ignoring unreadable translation file");
                Logger::warn(tf!("store.load_failed", lang, e));
                TranslationTable::new()
            }
        }
    }

    /// 写入翻译表，整体覆盖已有文件
    pub fn save(&self, lang: &LanguageCode, table: &TranslationTable) -> Result<PathBuf, StoreError> {
        if !self.lang_dir.exists() {
            std::fs::create_dir_all(&self.lang_dir).map_err(|source| StoreError::CreateDir {
                path: self.lang_dir.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(table).map_err(|source| StoreError::Serialize {
            lang: lang.to_string(),
            source,
        })?;

        let path = self.path_for(lang);
        std::fs::write(&path, content).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), entries = table.len(), "wrote translations");
        Ok(path)
    }
}
