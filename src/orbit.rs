use core::{fmt, str::FromStr};

use derive_more::derive::Display;
use smallvec::SmallVec;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::{Error, is_even, parse_count};

/// The Collatz orbit of a single start value.
///
/// The stepping rule lives in the `Iterator` impl: each `next()` applies
/// `n / 2` (even) or `3n + 1` (odd) once and yields the new value. The
/// iterator ends once the orbit reaches 1, so the step count of a start is
/// the number of items the orbit yields.
#[wasm_bindgen]
pub struct Orbit {
    current: u64,
    steps_taken: u64,
    overflowed: bool,
}

#[wasm_bindgen]
impl Orbit {
    /// Creates a new orbit from a count string such as `"27"`, `"837_799"`,
    /// or `"2^20"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid count.
    #[wasm_bindgen(constructor)]
    pub fn from_string(start: &str) -> Result<Self, String> {
        start.parse().map_err(|error| format!("{error:?}"))
    }

    #[wasm_bindgen]
    pub fn step(&mut self) -> bool {
        self.next().is_some()
    }

    #[wasm_bindgen(js_name = "count")]
    pub fn count_js(&mut self, early_stop_is_some: bool, early_stop_number: u64) -> u64 {
        while (!early_stop_is_some || self.steps_taken < early_stop_number) && self.next().is_some()
        {
        }

        self.steps_taken
    }

    #[wasm_bindgen]
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[wasm_bindgen]
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    #[wasm_bindgen]
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn has_reached_one(&self) -> bool {
        self.current <= 1
    }

    #[wasm_bindgen]
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Orbit {
    #[inline]
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self {
            current: start,
            steps_taken: 0,
            overflowed: false,
        }
    }

    /// Drains the orbit and returns its step count.
    ///
    /// # Errors
    ///
    /// Returns an error if an intermediate value exceeds the `u64` range.
    pub fn step_count(mut self) -> Result<u64, Error> {
        let start = self.current;
        while self.next().is_some() {}

        if self.overflowed {
            Err(Error::ValueOverflow {
                start,
                steps_taken: self.steps_taken,
            })
        } else {
            Ok(self.steps_taken)
        }
    }
}

impl FromStr for Orbit {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let start = parse_count(input)?;
        Ok(Self::new(start))
    }
}

impl fmt::Debug for Orbit {
    #[allow(clippy::min_ident_chars)]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Orbit {{ current: {}, steps_taken: {}}}",
            self.current, self.steps_taken
        )
    }
}

#[allow(clippy::missing_trait_methods)]
impl Iterator for Orbit {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // Starts of 0 and 1 count as already arrived; the orbit of 0 would
        // otherwise never leave 0.
        if self.current <= 1 || self.overflowed {
            return None;
        }
        let next_value = if is_even(self.current) {
            self.current >> 1
        } else {
            match self
                .current
                .checked_mul(3)
                .and_then(|tripled| tripled.checked_add(1))
            {
                Some(next_value) => next_value,
                None => {
                    self.overflowed = true;
                    return None;
                }
            }
        };
        self.current = next_value;
        self.steps_taken += 1;
        Some(next_value)
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum OrbitTermination {
    #[display("reached 1")]
    ReachedOne,
    #[display("left the u64 range")]
    ValueOverflow,
}

/// What one finished orbit did: how many steps, how high it went, and why
/// it stopped.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[display("start {start}: {step_count} steps, peak {peak}")]
pub struct OrbitSummary {
    pub start: u64,
    pub step_count: u64,
    pub peak: u64,
    pub termination: OrbitTermination,
}

/// Number of Collatz steps needed to take `start` to 1.
///
/// # Errors
///
/// Returns an error if an intermediate value exceeds the `u64` range.
#[inline]
pub fn step_count(start: u64) -> Result<u64, Error> {
    Orbit::new(start).step_count()
}

/// Runs the orbit of `start` to completion, tracking the peak excursion.
#[must_use]
pub fn summarize(start: u64) -> OrbitSummary {
    let mut orbit = Orbit::new(start);
    let mut peak = start;
    for value in orbit.by_ref() {
        peak = peak.max(value);
    }

    let termination = if orbit.overflowed {
        OrbitTermination::ValueOverflow
    } else {
        OrbitTermination::ReachedOne
    };

    OrbitSummary {
        start,
        step_count: orbit.steps_taken,
        peak,
        termination,
    }
}

pub type Trajectory = SmallVec<[u64; 64]>;

/// The full orbit of `start`, including `start` itself and the final 1.
/// Always one longer than the step count.
///
/// # Errors
///
/// Returns an error if an intermediate value exceeds the `u64` range.
pub fn trajectory(start: u64) -> Result<Trajectory, Error> {
    let mut orbit = Orbit::new(start);
    let mut values = Trajectory::new();
    values.push(start);
    values.extend(orbit.by_ref());

    if orbit.overflowed {
        Err(Error::ValueOverflow {
            start,
            steps_taken: orbit.steps_taken,
        })
    } else {
        Ok(values)
    }
}
