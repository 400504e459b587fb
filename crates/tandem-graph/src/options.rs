//! Graph configuration options.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Number of vertices to reserve room for on both sides of the pair.
    pub capacity: usize,
}

impl GraphOptions {
    /// Builds options from a signed capacity hint, rejecting negative values.
    pub fn from_capacity_hint(capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| Error::InvalidCapacity { capacity })?;
        Ok(Self { capacity })
    }
}
