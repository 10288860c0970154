// ============================================================================
// LangFill - 中文文案表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文控制台文案定义
// 边界:
//   - ✅ 中文文案字符串定义
//   - ✅ 文案键值对维护
//   - ❌ 不应包含查找逻辑
//   - ❌ 不应包含其他语言文案
//
// ============================================================================

/// 中文文案表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // CLI 相关
    ("cli.missing_lang", "请指定语言代码"),
    ("cli.usage", "用法: langfill <语言代码>"),
    ("cli.example", "示例: langfill jp"),
    // 生成相关
    ("generate.start", "开始补全 \"{}\" 翻译，源码目录: {}"),
    ("generate.found_keys", "共发现 {} 条文案，来自 {} 个文件"),
    ("generate.pending_keys", "{} 条新文案需要翻译"),
    ("generate.files_scanned", "已扫描文件:"),
    ("generate.pending_list", "待翻译文案:"),
    ("generate.translated", "已将 \"{}\" 翻译为 \"{}\""),
    ("generate.translation_failed", "翻译 \"{}\" 失败，保留原文: {}"),
    ("generate.nothing_to_translate", "没有需要翻译的新文案"),
    ("generate.completed", "{} 已翻译 {} 条文案，保存至 {}"),
    ("generate.kept_original", "{} {} 条文案保留原文"),
    ("generate.dry_run_complete", "预演完成，将翻译 {} 条文案"),
    ("generate.missing_api_key", "未设置环境变量 {}，翻译请求将会失败"),
    // 存储相关
    ("store.load_failed", "无法加载 \"{}\" 的翻译，使用空表: {}"),
    // 初始化相关
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --init --force 覆盖"),
    ("init.config_created", "已创建配置文件: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 错误信息
    ("error.read_source_file", "读取源文件失败: {}"),
    ("error.collect_failed", "收集源文件失败: {}"),
    ("error.save_failed", "保存 \"{}\" 的翻译失败"),
    ("error.translation_aborted", "翻译 \"{}\" 失败，已中止且未写入文件"),
];
