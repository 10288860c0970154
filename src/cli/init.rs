// ============================================================================
// LangFill - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 生成默认配置文件
// 边界:
//   - ✅ 配置文件存在性检查
//   - ✅ 默认配置文件生成
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

use anyhow::Result;
use std::path::PathBuf;

use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug)]
pub struct InitArgs {
    /// 配置文件路径
    pub config: PathBuf,
    /// 强制覆盖已存在的配置文件
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    // 检查配置文件是否已存在
    if args.config.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.config.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    match Config::create_default_config_file(&args.config) {
        Ok(_) => {
            Logger::success(tf!("init.config_created", args.config.display()));
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            return Err(e);
        }
    }

    Ok(())
}
