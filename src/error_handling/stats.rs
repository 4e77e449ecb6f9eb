//! Batch error statistics.
//!
//! This module provides thread-safe counting of failure categories during a
//! batch and renders them into the one-line error summary.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::types::ErrorCategory;

#[derive(Default)]
struct Counts {
    by_category: HashMap<ErrorCategory, usize>,
    // First-seen order, so the summary reads in the order failures surfaced
    order: Vec<ErrorCategory>,
}

/// Thread-safe failure counter for one batch.
///
/// Categories are created on first increment and never removed. The
/// read-increment-write of a count happens under a single lock, so
/// concurrent tasks cannot lose updates.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
#[derive(Default)]
pub struct ErrorStats {
    counts: Mutex<Counts>,
}

impl ErrorStats {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Counts> {
        // A panic while holding the lock cannot leave a count half-written
        self.counts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records one occurrence of `category`, returning the new count.
    pub fn increment(&self, category: ErrorCategory) -> usize {
        let mut counts = self.lock();
        let Counts { by_category, order } = &mut *counts;
        let count = by_category.entry(category.clone()).or_insert_with(|| {
            order.push(category);
            0
        });
        *count += 1;
        *count
    }

    /// Get the count for a category (0 if never seen).
    pub fn get_count(&self, category: &ErrorCategory) -> usize {
        self.lock().by_category.get(category).copied().unwrap_or(0)
    }

    /// Get total failure count across all categories.
    pub fn total(&self) -> usize {
        self.lock().by_category.values().sum()
    }

    /// Whether nothing has failed yet.
    pub fn is_empty(&self) -> bool {
        self.lock().order.is_empty()
    }

    /// Categories with their counts, in first-seen order.
    pub fn snapshot(&self) -> Vec<(ErrorCategory, usize)> {
        let counts = self.lock();
        counts
            .order
            .iter()
            .map(|category| {
                let count = counts.by_category.get(category).copied().unwrap_or(0);
                (category.clone(), count)
            })
            .collect()
    }

    /// Renders the summary line.
    ///
    /// A category seen once renders as its bare label, one seen `n > 1` times
    /// as `"n× label"`; entries are joined by `", "`. No failures render as
    /// the empty string.
    pub fn format_summary(&self) -> String {
        self.snapshot()
            .into_iter()
            .map(|(category, count)| {
                if count > 1 {
                    format!("{count}\u{d7} {category}")
                } else {
                    category.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
