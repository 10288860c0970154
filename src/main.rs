// ============================================================================
// LangFill - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序入口，加载 .env 并启动 CLI
// 边界:
//   - ✅ 模块声明
//   - ✅ 异步运行时启动
//   - ✅ 顶层错误退出码
//   - ❌ 不应包含命令处理逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = cli::run_cli().await {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
