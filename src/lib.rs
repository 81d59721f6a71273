use derive_more::Error as DeriveError;
use derive_more::derive::Display;
use thousands::Separable;

mod orbit;
mod parse;
mod records;
mod step_counts;

pub use orbit::{Orbit, OrbitSummary, OrbitTermination, Trajectory, step_count, summarize, trajectory};
pub use parse::parse_count;
pub use records::{Records, champion_in_range};
pub use step_counts::StepCounts;

/// Record-setting starts: each needs more steps to reach 1 than any smaller start.
pub const CHAMP_27: u64 = 27; // 111 steps
pub const CHAMP_97: u64 = 97; // 118 steps
pub const CHAMP_871: u64 = 871; // 178 steps
pub const CHAMP_6171: u64 = 6_171; // 261 steps
pub const CHAMP_77031: u64 = 77_031; // 350 steps
pub const CHAMP_837799: u64 = 837_799; // 524 steps

#[inline]
#[must_use]
pub const fn is_even(value: u64) -> bool {
    value & 1 == 0
}

/// A trait for iterators that can report progress to stderr at intervals.
pub trait StatusIterator: Iterator {
    /// Drains the iterator, printing its `Debug` state every `interval` items.
    /// Returns the number of items consumed.
    #[inline]
    fn count_with_status(&mut self, interval: u64) -> u64
    where
        Self: Sized + core::fmt::Debug,
    {
        let mut item_count: u64 = 0;

        while self.next().is_some() {
            item_count += 1;
            if item_count % interval == 0 {
                eprintln!("Step {}: {:?}", item_count.separate_with_commas(), self);
            }
        }

        item_count
    }
}

impl<T> StatusIterator for T where T: Iterator + core::fmt::Debug {}

/// Error type for parsing counts and running orbits.
#[derive(Debug, Display, DeriveError)]
pub enum Error {
    #[display("Invalid number format: {}", _0)]
    ParseIntError(core::num::ParseIntError),

    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    #[display("orbit of {} left the u64 range after {} steps", start, steps_taken)]
    ValueOverflow { start: u64, steps_taken: u64 },
}

// Implement conversions manually where needed
impl From<core::num::ParseIntError> for Error {
    fn from(err: core::num::ParseIntError) -> Self {
        Self::ParseIntError(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
