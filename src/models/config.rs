// ============================================================================
// LangFill - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 命令行参数覆盖
//   - ✅ 环境变量凭据解析
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// 配置在启动时构建一次，之后以值的形式向下传递，不提供全局读取。
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::language::default_language_names;
use crate::utils::constants;

/// LangFill 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 源码扫描配置
    #[serde(default)]
    pub source: SourceConfig,
    /// 翻译文件存储配置
    #[serde(default)]
    pub store: StoreConfig,
    /// 翻译接口配置
    #[serde(default)]
    pub translator: TranslatorConfig,
    /// 生成流程配置
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 界面语言配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 源码扫描配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// 扫描根目录
    #[serde(default = "Config::default_source_root")]
    pub root: PathBuf,
    /// 需要扫描的文件扩展名
    #[serde(default = "Config::default_extensions")]
    pub extensions: Vec<String>,
    /// 额外忽略的路径模式（glob），node_modules 始终忽略
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 翻译文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 语言文件目录
    #[serde(default = "Config::default_lang_dir")]
    pub lang_dir: PathBuf,
    /// 已存在但值为空字符串的键是否重新翻译
    #[serde(default)]
    pub retranslate_empty: bool,
}

/// 翻译失败时的处理策略
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorStrategy {
    /// 记录错误并保留原文，继续处理
    #[default]
    BestEffort,
    /// 立即终止本次运行
    FailFast,
}

/// 翻译接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Chat completion 接口地址
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,
    /// 模型名称
    #[serde(default = "Config::default_model")]
    pub model: String,
    /// 读取 API Key 的环境变量名
    #[serde(default = "Config::default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "Config::default_temperature")]
    pub temperature: f64,
    #[serde(default = "Config::default_max_tokens")]
    pub max_tokens: u32,
    /// 请求超时（秒）
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
    /// 翻译失败处理策略
    #[serde(default)]
    pub error_strategy: ErrorStrategy,
    /// 语言代码 → 提示词中使用的语言名
    #[serde(default = "default_language_names")]
    pub language_names: HashMap<String, String>,
    /// API Key，启动时从环境变量解析，不写入配置文件
    #[serde(skip)]
    pub api_key: Option<String>,
}

/// 生成流程配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// 两次翻译调用之间的间隔（毫秒）
    #[serde(default = "Config::default_delay_ms")]
    pub delay_ms: u64,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度条
    #[serde(default = "Config::default_show_progress")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 界面语言配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言 (zh_cn, en_us)
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub source_root: Option<PathBuf>,
    pub lang_dir: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub fail_fast: Option<bool>,
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    fn default_source_root() -> PathBuf {
        PathBuf::from(constants::source::ROOT)
    }

    fn default_extensions() -> Vec<String> {
        constants::source::EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect()
    }

    fn default_lang_dir() -> PathBuf {
        PathBuf::from(constants::store::LANG_DIR)
    }

    fn default_endpoint() -> String {
        constants::translator::ENDPOINT.to_string()
    }

    fn default_model() -> String {
        constants::translator::MODEL.to_string()
    }

    fn default_api_key_env() -> String {
        constants::translator::API_KEY_ENV.to_string()
    }

    fn default_temperature() -> f64 {
        constants::translator::TEMPERATURE
    }

    fn default_max_tokens() -> u32 {
        constants::translator::MAX_TOKENS
    }

    fn default_timeout_secs() -> u64 {
        constants::translator::TIMEOUT_SECS
    }

    fn default_delay_ms() -> u64 {
        constants::DEFAULT_DELAY_MS
    }

    fn default_show_progress() -> bool {
        true
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(root) = args.source_root {
            self.source.root = root;
        }
        if let Some(lang_dir) = args.lang_dir {
            self.store.lang_dir = lang_dir;
        }
        if let Some(delay_ms) = args.delay_ms {
            self.generator.delay_ms = delay_ms;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.translator.timeout_secs = timeout_secs;
        }
        if let Some(true) = args.fail_fast {
            self.translator.error_strategy = ErrorStrategy::FailFast;
        }
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            self.output.show_progress = show_progress;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 从环境变量解析 API Key（空值视为未设置）
    pub fn resolve_credentials(&mut self) {
        self.translator.api_key = std::env::var(&self.translator.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            store: StoreConfig::default(),
            translator: TranslatorConfig::default(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: Config::default_source_root(),
            extensions: Config::default_extensions(),
            ignore: Vec::new(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lang_dir: Config::default_lang_dir(),
            retranslate_empty: false,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: Config::default_endpoint(),
            model: Config::default_model(),
            api_key_env: Config::default_api_key_env(),
            temperature: Config::default_temperature(),
            max_tokens: Config::default_max_tokens(),
            timeout_secs: Config::default_timeout_secs(),
            error_strategy: ErrorStrategy::default(),
            language_names: default_language_names(),
            api_key: None,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: Config::default_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("langfill.toml")).unwrap();

        assert_eq!(config.source.root, PathBuf::from("src"));
        assert_eq!(config.source.extensions, vec!["js", "jsx", "tsx", "vue"]);
        assert_eq!(config.store.lang_dir, PathBuf::from("src/lang"));
        assert_eq!(config.translator.max_tokens, 100);
        assert_eq!(config.translator.timeout_secs, 30);
        assert_eq!(config.translator.error_strategy, ErrorStrategy::BestEffort);
        assert_eq!(config.generator.delay_ms, 1000);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("langfill.toml");
        std::fs::write(
            &path,
            r#"
[translator]
model = "other-model"
error_strategy = "fail-fast"

[translator.language_names]
jp = "Japanese"

[generator]
delay_ms = 250
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.translator.model, "other-model");
        assert_eq!(config.translator.error_strategy, ErrorStrategy::FailFast);
        assert_eq!(config.translator.endpoint, constants::translator::ENDPOINT);
        assert_eq!(config.translator.language_names.get("jp").map(String::as_str), Some("Japanese"));
        assert_eq!(config.generator.delay_ms, 250);
        assert_eq!(config.source.root, PathBuf::from("src"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("langfill.toml");
        std::fs::write(&path, "[generator\ndelay_ms = ").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.merge_runtime_args(RuntimeArgs {
            source_root: Some(PathBuf::from("app")),
            delay_ms: Some(0),
            fail_fast: Some(true),
            colored: Some(false),
            ..RuntimeArgs::default()
        });

        assert_eq!(config.source.root, PathBuf::from("app"));
        assert_eq!(config.store.lang_dir, PathBuf::from("src/lang"));
        assert_eq!(config.generator.delay_ms, 0);
        assert_eq!(config.translator.error_strategy, ErrorStrategy::FailFast);
        assert!(!config.output.colored);
    }

    #[test]
    fn default_template_round_trips_without_api_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("langfill.toml");
        let mut config = Config::default();
        config.translator.api_key = Some("secret".to_string());
        config.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("secret"));

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.translator.api_key, None);
        assert_eq!(loaded.translator.model, config.translator.model);
    }
}
