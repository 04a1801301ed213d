//! Binary form of group descriptions using postcard.
//!
//! Only descriptions are serialized; loading always goes back through
//! validation, so a cached table cannot skip the capacity check.

use crate::description::RawGroup;
use crate::error::LayoutError;
use crate::layout::GroupLayout;

impl RawGroup {
    pub fn from_binary(bytes: &[u8]) -> Result<Self, LayoutError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}

impl GroupLayout {
    /// Decode and validate a binary description.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, LayoutError> {
        Self::from_raw(RawGroup::from_binary(bytes)?)
    }

    pub fn to_binary(&self) -> Vec<u8> {
        self.to_raw().to_binary()
    }
}
