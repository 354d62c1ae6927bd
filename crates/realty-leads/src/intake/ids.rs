use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Issues `PREFIX-<millis>` identifiers that stay time-ordered but never repeat.
///
/// When two submissions land in the same millisecond (or the wall clock steps
/// backwards) the number is bumped past the last one handed out.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    last: AtomicU64,
}

impl IdGenerator {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            last: AtomicU64::new(0),
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_id_at(now)
    }

    pub(crate) fn next_id_at(&self, now_millis: u64) -> String {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("{}-{candidate}", self.prefix),
                Err(observed) => current = observed,
            }
        }
    }
}
