// ============================================================================
// LangFill - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量和默认值定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 默认路径、扩展名、接口参数
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LANGFILL";

/// 默认配置文件名
pub const CONFIG_FILE: &str = "langfill.toml";

/// 源码扫描相关默认值
pub mod source {
    /// 默认扫描根目录
    pub const ROOT: &str = "src";
    /// 支持的文件扩展名
    pub const EXTENSIONS: [&str; 4] = ["js", "jsx", "tsx", "vue"];
    /// 始终跳过的依赖缓存目录
    pub const DEPENDENCY_DIR: &str = "node_modules";
}

/// 翻译文件存储默认值
pub mod store {
    /// 语言文件目录
    pub const LANG_DIR: &str = "src/lang";
    /// 语言文件扩展名
    pub const FILE_EXTENSION: &str = "json";
}

/// 翻译接口默认值
pub mod translator {
    /// Chat completion 接口地址
    pub const ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";
    /// 模型名称
    pub const MODEL: &str = "deepseek-chat";
    /// 读取 API Key 的环境变量
    pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
    pub const TEMPERATURE: f64 = 0.3;
    pub const MAX_TOKENS: u32 = 100;
    /// 请求超时（秒）
    pub const TIMEOUT_SECS: u64 = 30;
    /// 源语言代码，翻译为恒等映射
    pub const SOURCE_LANGUAGE: &str = "en";
}

/// 两次翻译调用之间的固定间隔（毫秒）
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// 进度条字符（已完成、未完成）
pub mod progress_chars {
    pub const BAR: &str = "█░";
}

/// 图标
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const FILE: &str = "●";
    pub const ARROW: &str = "→";
}
