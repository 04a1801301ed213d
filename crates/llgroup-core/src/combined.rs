//! A compact offset sharing one word with flag bits.
//!
//! Object headers often hold a reference to their type descriptor plus a few
//! flags. With the descriptor living in a group, the reference fits in the low
//! half-word and the flags use the bits above it.

use std::fmt;

use crate::offset::CompactOffset;

/// Width of the offset field in a combined word.
pub const OFFSET_BITS: u32 = 16;

/// Bits holding the offset.
pub const OFFSET_MASK: usize = (1 << OFFSET_BITS) - 1;

/// Lowest bit available for flags.
pub const FIRST_FLAG: usize = 1 << OFFSET_BITS;

/// Word layout:
/// - Bits 0-15: compact offset
/// - Bits 16..: flags
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CombinedWord(usize);

impl CombinedWord {
    /// Pack `offset` with `rest`, whose low 16 bits must be clear.
    #[inline]
    pub const fn combine(offset: CompactOffset, rest: usize) -> Self {
        debug_assert!(rest & OFFSET_MASK == 0, "flag bits overlap the offset field");
        Self(offset.get() as usize | rest)
    }

    #[inline]
    pub const fn from_raw(word: usize) -> Self {
        Self(word)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The offset in the low half-word.
    #[inline]
    pub const fn offset(self) -> CompactOffset {
        CompactOffset::from_raw((self.0 & OFFSET_MASK) as u16)
    }

    /// Everything above the offset field.
    #[inline]
    pub const fn rest(self) -> usize {
        self.0 & !OFFSET_MASK
    }

    #[inline]
    pub const fn with_flags(self, flags: usize) -> Self {
        debug_assert!(flags & OFFSET_MASK == 0, "flag bits overlap the offset field");
        Self(self.0 | flags)
    }

    #[inline]
    pub const fn without_flags(self, flags: usize) -> Self {
        Self(self.0 & !(flags & !OFFSET_MASK))
    }

    /// Whether every bit of `flags` is set.
    #[inline]
    pub const fn has_flags(self, flags: usize) -> bool {
        self.0 & flags == flags
    }
}

impl fmt::Debug for CombinedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedWord")
            .field("offset", &self.offset())
            .field("flags", &format_args!("{:#x}", self.rest() >> OFFSET_BITS))
            .finish()
    }
}
