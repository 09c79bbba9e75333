//! 请求令牌
//!
//! 同一个展示位（例如当前选中的科目）可能先后发出多个请求，
//! 只有最新发出的请求结果才允许写回界面状态。

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// 某个展示位上的一次请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    slot: String,
    seq: u64,
}

impl RequestTicket {
    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    counter: AtomicU64,
    latest: DashMap<String, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起新请求，之前同一展示位上的请求全部作废
    pub fn begin(&self, slot: impl Into<String>) -> RequestTicket {
        let slot = slot.into();
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.latest.insert(slot.clone(), seq);
        RequestTicket { slot, seq }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest
            .get(&ticket.slot)
            .is_some_and(|latest| *latest == ticket.seq)
    }

    /// 结果仍然有效时返回 `Some`，否则丢弃
    pub fn settle<T>(&self, ticket: &RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(
                "Discarding stale response for slot '{}' (seq {})",
                ticket.slot, ticket.seq
            );
            None
        }
    }

    /// 取消展示位上的所有在途请求
    pub fn cancel(&self, slot: &str) {
        self.latest.remove(slot);
    }
}
