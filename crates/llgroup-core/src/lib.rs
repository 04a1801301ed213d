#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compact offset addressing for grouped runtime metadata.
//!
//! Read-mostly records (type descriptors, layout tables) live contiguously in a
//! bounded aggregate called a *group*. A reference to a record inside a group is
//! stored as a [`CompactOffset`]: the distance from the group base counted in
//! machine words, narrowed to 16 bits.
//!
//! Three layers:
//! - **Codec**: [`encode`], [`decode`], [`decode_with_skip`], [`is_null`]
//! - **Build-time checks**: [`assert_group_size!`], [`member_offset!`]
//! - **Packing**: [`CombinedWord`] stores an offset next to flag bits
//!
//! Addresses are plain `usize` integers. Nothing here dereferences memory.

mod check;
mod colors;
mod combined;
mod offset;


pub use check::check_group_size;
pub use colors::Colors;
pub use combined::{CombinedWord, FIRST_FLAG, OFFSET_BITS, OFFSET_MASK};
pub use offset::{
    CompactOffset, GROUP_CAPACITY, WORD_SIZE, decode, decode_with_skip, encode, is_null,
};
