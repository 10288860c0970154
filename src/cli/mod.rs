// ============================================================================
// LangFill - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义
//   - ✅ 命令行参数解析配置
//   - ✅ 配置构建与运行环境初始化
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod generate;
pub mod init;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::i18n;
use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger::{init_tracing, Logger};
use generate::{handle_generate, print_usage, require_language, GenerateArgs, UsageError};
use init::{handle_init, InitArgs};

/// LangFill - Fill in missing frontend translations
#[derive(Debug, Parser)]
#[command(name = "langfill")]
#[command(about = "Scan t('...') keys in a frontend project and machine-translate the missing ones")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Target language code (e.g. zh, jp)
    pub lang: Option<String>,

    /// Source root directory to scan
    #[arg(short = 'C', long)]
    pub root: Option<PathBuf>,

    /// Directory holding <lang>.json translation files
    #[arg(long)]
    pub lang_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Pause between translation requests (milliseconds)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Translation request timeout (seconds)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Abort on the first failed translation instead of keeping the original text
    #[arg(long)]
    pub fail_fast: bool,

    /// Only report pending keys, do not translate or write files
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing configuration file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,
}

pub async fn run_cli() -> Result<()> {
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    // 显式指定界面语言时，用法错误也按该语言输出
    if let Some(language) = &cli.language {
        i18n::set_language(language);
    }

    if cli.init {
        let config = build_config(&cli)?;
        init_environment(&config);
        return handle_init(InitArgs {
            config: cli.config,
            force: cli.force,
        });
    }

    // 先校验语言参数，配置文件损坏时仍输出用法提示
    let lang = require_language(cli.lang.as_deref())?;
    let config = build_config(&cli)?;
    init_environment(&config);

    handle_generate(
        GenerateArgs {
            lang,
            dry_run: cli.dry_run,
        },
        config,
    )
    .await
}

/// 输出顶层错误，用法错误附带用法提示
pub fn report_error(error: &anyhow::Error) {
    Logger::error(format!("{:#}", error));
    if error.downcast_ref::<UsageError>().is_some() {
        print_usage();
    }
}

/// 配置文件 → 命令行覆盖 → 环境变量凭据
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config)?;
    config.merge_runtime_args(build_runtime_args(cli));
    config.resolve_credentials();
    Ok(config)
}

fn init_environment(config: &Config) {
    i18n::set_language(&config.i18n.language);
    Colors::configure(config.output.colored);
    init_tracing(config.output.verbose);
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        source_root: cli.root.clone(),
        lang_dir: cli.lang_dir.clone(),
        delay_ms: cli.delay_ms,
        timeout_secs: cli.timeout,
        fail_fast: if cli.fail_fast { Some(true) } else { None },
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        language: cli.language.clone(),
    }
}
