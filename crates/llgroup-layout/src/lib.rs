#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Layout tables for llgroup groups.
//!
//! The group-construction process describes each group as a name, a byte size
//! and a list of members at known byte offsets. This crate turns those
//! descriptions into frozen [`GroupLayout`] tables that hand out compact
//! offsets, and reads populated group bytes through them via [`GroupImage`].
//!
//! - **Description layer**: [`RawGroup`], [`RawMember`], 1:1 with the JSON form
//! - **Table layer**: [`GroupLayout`], [`GroupSet`], validated and immutable
//! - **Storage**: [`GroupImage`], word-aligned bytes of a populated group

mod binary;
mod description;
mod dump;
mod error;
mod image;
mod invariants;
mod layout;
mod set;

#[cfg(test)]
mod set_tests;

pub use description::{RawGroup, RawMember, parse_groups};
pub use dump::{dump, dump_set};
pub use error::LayoutError;
pub use image::GroupImage;
pub use layout::{GroupLayout, Member};
pub use set::GroupSet;

pub use llgroup_core::{Colors, CompactOffset, GROUP_CAPACITY, WORD_SIZE};
