use itertools::Itertools;

use crate::{Error, StepCounts};

/// Yields each `(start, step_count)` whose step count strictly beats every
/// earlier start in the range — the record-setters 1, 2, 3, 6, 7, 9, 18, 25,
/// 27, …
#[derive(Debug)]
pub struct Records {
    step_counts: StepCounts,
    best: Option<u64>,
}

impl Records {
    #[inline]
    #[must_use]
    pub const fn new(start: u64, limit: u64) -> Self {
        Self {
            step_counts: StepCounts::new(start, limit),
            best: None,
        }
    }
}

#[allow(clippy::missing_trait_methods)]
impl Iterator for Records {
    type Item = Result<(u64, u64), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for result in self.step_counts.by_ref() {
            match result {
                Ok((start, steps)) => {
                    if self.best.is_none_or(|best| steps > best) {
                        self.best = Some(steps);
                        return Some(Ok((start, steps)));
                    }
                }
                Err(error) => return Some(Err(error)),
            }
        }

        None
    }
}

/// The start with the most steps in `[start, limit)`; ties resolve to the
/// smaller start. `None` for an empty range.
///
/// # Errors
///
/// Returns an error if any orbit in the range leaves the `u64` range.
pub fn champion_in_range(start: u64, limit: u64) -> Result<Option<(u64, u64)>, Error> {
    StepCounts::new(start, limit).fold_ok(None, |best, (candidate, steps)| match best {
        // Ascending order, so an earlier start keeps a tied record.
        Some((_, best_steps)) if best_steps >= steps => best,
        _ => Some((candidate, steps)),
    })
}
