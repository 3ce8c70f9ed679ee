// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are kept by the editor: one counter per committed kind of edit,
//! and one per kind of rejected command.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::errors::ErrorKind;

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    PointsAdded,
    FlipsUp,
    FlipsDown,
    Moves,
    Involutions,
    Resets,
}

const COUNT: usize = Counters::COUNT + ErrorKind::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn record_rejection(&mut self, kind: ErrorKind) {
        self.stats[Counters::COUNT + kind as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn rejections(&self, kind: ErrorKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{:<20}{}", name, self.get(counter))?;
        }
        write!(f, "{:<20}{}", "Rejected", self.total_rejections())
    }
}
