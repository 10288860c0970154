// ============================================================================
// LangFill - 限速迭代器
// ============================================================================
//
// 文件: src/core/pacer.rs
// 职责: 按固定间隔逐个产出元素
// 边界:
//   - ✅ 首个元素立即产出
//   - ✅ 后续元素产出前等待固定间隔
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含并发控制
//
// 间隔从调用方请求下一个元素时开始计时，即上一个元素处理完成之后；
// 最后一个元素之后不再等待。
//
// ============================================================================

use std::time::Duration;

/// 限速迭代器
#[derive(Debug)]
pub struct Pacer<I> {
    inner: I,
    interval: Duration,
    yielded: usize,
}

impl<I: Iterator> Pacer<I> {
    pub fn new(inner: I, interval: Duration) -> Self {
        Self {
            inner,
            interval,
            yielded: 0,
        }
    }

    /// 产出下一个元素，必要时先等待
    pub async fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;

        if self.yielded > 0 && !self.interval.is_zero() {
            tracing::debug!(delay = ?self.interval, "pacing before next item");
            tokio::time::sleep(self.interval).await;
        }

        self.yielded += 1;
        Some(item)
    }

    /// 已产出元素数量
    pub fn yielded(&self) -> usize {
        self.yielded
    }
}
