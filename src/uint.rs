use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A non-negative integer. Used for counters and indices that must never go
/// below zero, e.g. the track number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UInt(u64);

impl UInt {
    pub fn of(value: i64) -> Result<Self> {
        if value < 0 {
            bail!("{} is negative.", value);
        }
        Ok(UInt(value as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for UInt {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self> {
        UInt::of(value)
    }
}

impl From<u32> for UInt {
    fn from(value: u32) -> Self {
        UInt(value as u64)
    }
}

// Every `UInt` is built from an `i64` or a `u32`, so this never truncates.
impl From<UInt> for i64 {
    fn from(value: UInt) -> Self {
        value.0 as i64
    }
}

impl fmt::Display for UInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
