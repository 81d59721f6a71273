use core::fmt;

use crate::{Error, step_count};

/// Lazily yields `(start, step_count)` for every start in `[start, limit)`,
/// in strictly ascending order.
///
/// The iterator holds nothing but the next start and the exclusive limit,
/// so a run restarts by constructing a fresh one. A limit of `u64::MAX`
/// makes the loop effectively unbounded.
pub struct StepCounts {
    next_start: u64,
    limit: u64,
}

impl StepCounts {
    #[inline]
    #[must_use]
    pub const fn new(start: u64, limit: u64) -> Self {
        Self {
            next_start: start,
            limit,
        }
    }
}

impl fmt::Debug for StepCounts {
    #[allow(clippy::min_ident_chars)]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "StepCounts {{ next_start: {}, limit: {}}}",
            self.next_start, self.limit
        )
    }
}

#[allow(clippy::missing_trait_methods)]
impl Iterator for StepCounts {
    type Item = Result<(u64, u64), Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.limit {
            return None;
        }
        let start = self.next_start;
        self.next_start += 1;
        Some(step_count(start).map(|steps| (start, steps)))
    }
}
