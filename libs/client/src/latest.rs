//! Stale-response guard for overlapping reads
//!
//! Screens that refire a fetch on every filter change can have several
//! responses in flight at once. The guard hands out monotonically increasing
//! tickets and accepts a response only if it carries the newest ticket
//! issued so far, so a slow early response can never overwrite a fast later
//! one. A superseded request is discarded even when the newer one has not
//! landed yet.

use std::sync::Mutex;

use tracing::debug;

struct Inner<T> {
    next: u64,
    slot: Option<T>,
}

/// Holds the newest accepted value of a refetchable read
pub struct Latest<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Latest<T> {
    /// Create an empty guard. Ticket numbering starts at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner { next: 0, slot: None }),
        }
    }

    /// Issue a ticket for a request about to be sent. Issuing a ticket
    /// supersedes every ticket issued before it.
    pub fn ticket(&self) -> u64 {
        let mut inner = self.lock();
        inner.next += 1;
        inner.next
    }

    /// Offer a response under the ticket its request was issued. Returns
    /// whether the value was accepted as current.
    pub fn offer(&self, ticket: u64, value: T) -> bool {
        let mut inner = self.lock();
        if ticket < inner.next {
            debug!("Discarding stale response (ticket {} of {})", ticket, inner.next);
            return false;
        }
        inner.slot = Some(value);
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T: Clone> Latest<T> {
    /// The newest accepted value, if any
    pub fn get(&self) -> Option<T> {
        self.lock().slot.clone()
    }
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_accepted() {
        let latest = Latest::new();
        let first = latest.ticket();
        assert!(latest.offer(first, "a"));

        let second = latest.ticket();
        assert!(latest.offer(second, "b"));
        assert_eq!(latest.get(), Some("b"));
    }

    #[test]
    fn test_stale_response_discarded() {
        let latest = Latest::new();
        let slow = latest.ticket();
        let fast = latest.ticket();

        assert!(latest.offer(fast, "fast"));
        assert!(!latest.offer(slow, "slow"));
        assert_eq!(latest.get(), Some("fast"));
    }

    #[test]
    fn test_superseded_request_discarded_before_newer_lands() {
        let latest = Latest::new();
        let old = latest.ticket();
        let _newer = latest.ticket();

        assert!(!latest.offer(old, 1));
        assert_eq!(latest.get(), None);
    }

    #[test]
    fn test_empty_guard_has_no_value() {
        let latest: Latest<i32> = Latest::default();
        assert_eq!(latest.get(), None);
    }
}
