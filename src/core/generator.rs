// ============================================================================
// LangFill - 翻译生成器
// ============================================================================
//
// 文件: src/core/generator.rs
// 职责: 串联扫描、比对、翻译、写入的完整流程
// 边界:
//   - ✅ 源文件收集与翻译键汇总
//   - ✅ 已有翻译加载与待翻译键计算
//   - ✅ 逐条限速翻译与失败策略
//   - ✅ 合并结果写回语言文件
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含 HTTP 请求细节
//
// 流程设计:
// 1. 收集源文件并提取翻译键（跨文件去重）
// 2. 加载已有翻译表，计算待翻译键
// 3. 输出扫描统计
// 4. 按固定间隔逐条翻译，严格串行
// 5. 整体写回语言文件
//
// ============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::collector::FileCollector;
use crate::core::extractor::KeyExtractor;
use crate::core::pacer::Pacer;
use crate::core::store::TranslationStore;
use crate::core::translator::Translator;
use crate::models::config::{Config, ErrorStrategy};
use crate::models::language::LanguageCode;
use crate::models::table::{pending_keys, KeySet, PendingKeySet, TranslationTable};
use crate::ui::progress::TranslationProgress;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 生成结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// 扫描的文件数
    pub files_scanned: usize,
    /// 去重后的翻译键总数
    pub total_keys: usize,
    /// 待翻译键数
    pub pending: usize,
    /// 翻译成功数
    pub translated: usize,
    /// 翻译失败（保留原文）数
    pub failed: usize,
    /// 写入的语言文件，预演模式为 None
    pub output: Option<PathBuf>,
}

/// 源码扫描结果
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub keys: KeySet,
}

/// 翻译生成器
pub struct Generator<T> {
    collector: FileCollector,
    extractor: KeyExtractor,
    store: TranslationStore,
    translator: T,
    delay: Duration,
    error_strategy: ErrorStrategy,
    retranslate_empty: bool,
    show_progress: bool,
    dry_run: bool,
}

impl<T: Translator> Generator<T> {
    pub fn new(collector: FileCollector, store: TranslationStore, translator: T) -> Result<Self> {
        Ok(Self {
            collector,
            extractor: KeyExtractor::new()?,
            store,
            translator,
            delay: Duration::from_millis(crate::utils::constants::DEFAULT_DELAY_MS),
            error_strategy: ErrorStrategy::default(),
            retranslate_empty: false,
            show_progress: false,
            dry_run: false,
        })
    }

    /// 按配置创建生成器
    pub fn from_config(config: &Config, translator: T) -> Result<Self> {
        let collector = FileCollector::new(&config.source.root)
            .with_extensions(config.source.extensions.clone())
            .with_ignore(config.source.ignore.clone());
        let store = TranslationStore::new(&config.store.lang_dir);

        Ok(Self::new(collector, store, translator)?
            .with_delay(Duration::from_millis(config.generator.delay_ms))
            .with_error_strategy(config.translator.error_strategy)
            .with_retranslate_empty(config.store.retranslate_empty)
            .with_progress(config.output.show_progress && !config.output.verbose))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_error_strategy(mut self, strategy: ErrorStrategy) -> Self {
        self.error_strategy = strategy;
        self
    }

    pub fn with_retranslate_empty(mut self, retranslate_empty: bool) -> Self {
        self.retranslate_empty = retranslate_empty;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 预演模式：只扫描和比对，不翻译也不写文件
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 收集源文件并汇总所有翻译键
    pub fn scan(&self) -> Result<ScanResult> {
        let files = self
            .collector
            .collect()
            .with_context(|| tf!("error.collect_failed", self.collector.root().display()))?;

        let mut keys = KeySet::new();
        for file in &files {
            keys.extend(self.extractor.extract_file(file)?);
        }

        Ok(ScanResult { files, keys })
    }

    /// 计算待翻译键
    pub fn plan(&self, keys: &KeySet, table: &TranslationTable) -> PendingKeySet {
        pending_keys(keys, table, self.retranslate_empty)
    }

    /// 执行完整生成流程
    pub async fn run(&self, lang: &LanguageCode) -> Result<GenerationReport> {
        let scan = self.scan()?;
        let mut table = self.store.load(lang);
        let pending = self.plan(&scan.keys, &table);

        summary::render_scan_summary(&scan.files, scan.keys.len(), pending.len());

        let mut report = GenerationReport {
            files_scanned: scan.files.len(),
            total_keys: scan.keys.len(),
            pending: pending.len(),
            ..GenerationReport::default()
        };

        if self.dry_run {
            summary::render_pending_keys(&pending);
            return Ok(report);
        }

        let (translated, failed) = self.translate_pending(lang, pending, &mut table).await?;
        report.translated = translated;
        report.failed = failed;

        let path = self
            .store
            .save(lang, &table)
            .with_context(|| tf!("error.save_failed", lang))?;
        report.output = Some(path);

        Ok(report)
    }

    /// 逐条翻译待翻译键并写入内存中的翻译表
    async fn translate_pending(
        &self,
        lang: &LanguageCode,
        pending: PendingKeySet,
        table: &mut TranslationTable,
    ) -> Result<(usize, usize)> {
        let progress = TranslationProgress::new(pending.len(), self.show_progress);
        let mut pacer = Pacer::new(pending.into_iter(), self.delay);
        let mut translated = 0;
        let mut failed = 0;

        while let Some(key) = pacer.next().await {
            progress.set_current(&key);

            let value = match self.translator.translate(&key, lang).await {
                Ok(translation) => {
                    progress.log(|| Logger::info(tf!("generate.translated", &key, &translation)));
                    translated += 1;
                    translation
                }
                Err(e) => match self.error_strategy {
                    ErrorStrategy::BestEffort => {
                        tracing::warn!(key = %key, error = %e, "translation failed, keeping original");
                        progress.log(|| Logger::error(tf!("generate.translation_failed", &key, &e)));
                        failed += 1;
                        key.clone()
                    }
                    ErrorStrategy::FailFast => {
                        progress.finish();
                        return Err(anyhow::Error::new(e).context(tf!("error.translation_aborted", &key)));
                    }
                },
            };

            table.insert(key, Value::String(value));
            progress.inc();
        }

        progress.finish();
        if pacer.yielded() == 0 {
            Logger::info(t!("generate.nothing_to_translate"));
        }
        Ok((translated, failed))
    }
}
