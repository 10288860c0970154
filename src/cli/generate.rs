// ============================================================================
// LangFill - 翻译生成命令
// ============================================================================
//
// 文件: src/cli/generate.rs
// 职责: 翻译生成命令的 CLI 接口层
// 边界:
//   - ✅ 目标语言参数校验与用法提示
//   - ✅ 翻译器与生成器装配
//   - ✅ 执行结果汇总输出
//   - ❌ 不应包含扫描、比对、翻译的具体逻辑
//
// ============================================================================

use anyhow::Result;
use thiserror::Error;

use crate::core::{ChatCompletionTranslator, Generator};
use crate::models::config::Config;
use crate::models::language::LanguageCode;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 命令行用法错误
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("{}", t!("cli.missing_lang"))]
    MissingLanguage,
}

/// 翻译生成参数
#[derive(Debug)]
pub struct GenerateArgs {
    /// 目标语言代码
    pub lang: LanguageCode,
    /// 预演模式
    pub dry_run: bool,
}

/// 校验目标语言代码，缺失或为空白时返回用法错误
pub fn require_language(lang: Option<&str>) -> Result<LanguageCode, UsageError> {
    lang.and_then(LanguageCode::new).ok_or(UsageError::MissingLanguage)
}

/// 执行翻译生成
pub async fn handle_generate(args: GenerateArgs, config: Config) -> Result<()> {
    let lang = args.lang;
    Logger::info(tf!("generate.start", &lang, config.source.root.display()));

    if !args.dry_run && !lang.is_source() && config.translator.api_key.is_none() {
        Logger::warn(tf!("generate.missing_api_key", &config.translator.api_key_env));
    }

    let translator = ChatCompletionTranslator::new(config.translator.clone())?;
    let generator = Generator::from_config(&config, translator)?.with_dry_run(args.dry_run);

    let report = generator.run(&lang).await?;
    summary::render_generation_summary(&report);

    Ok(())
}

/// 用法提示（输出到 stderr）
pub fn print_usage() {
    eprintln!("{}", t!("cli.usage"));
    eprintln!("{}", t!("cli.example"));
}
