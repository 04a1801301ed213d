//! The compact offset codec.
//!
//! A compact offset counts machine words from a group's base address to one of
//! its members. Offset 0 would address the group header itself, which is never
//! a member, so it doubles as the null reference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scaling unit of a compact offset: the native word size in bytes.
pub const WORD_SIZE: usize = std::mem::size_of::<usize>();

/// Largest group (in bytes) whose members can all be addressed by a compact offset.
pub const GROUP_CAPACITY: usize = 65536 * WORD_SIZE;

/// Word-scaled 16-bit distance from a group base to a member.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct CompactOffset(u16);

const _: () = assert!(std::mem::size_of::<CompactOffset>() == 2);

impl CompactOffset {
    /// The reserved "no member" offset.
    pub const NULL: Self = Self(0);

    /// Largest representable offset.
    pub const MAX: Self = Self(u16::MAX);

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw word count.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// `None` for the null offset.
    #[inline]
    pub const fn non_null(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }

    /// Encode a byte distance from the group base.
    ///
    /// Truncates toward zero and narrows to 16 bits without checking. The caller
    /// guarantees the distance is word-aligned and inside a group that passed
    /// [`check_group_size`](crate::check_group_size).
    #[inline]
    pub const fn from_byte_distance(distance: usize) -> Self {
        Self((distance / WORD_SIZE) as u16)
    }

    /// Byte distance from the group base.
    #[inline]
    pub const fn byte_distance(self) -> usize {
        self.0 as usize * WORD_SIZE
    }

    /// Encode a statically known member byte offset, rejecting anything that
    /// cannot be a group member.
    ///
    /// Meant for const contexts (see [`member_offset!`](crate::member_offset)),
    /// where a rejection fails the build.
    ///
    /// # Panics
    /// Panics if `byte_offset` is 0 (the group header), not a multiple of
    /// [`WORD_SIZE`], or beyond the last addressable word.
    pub const fn of_member(byte_offset: usize) -> Self {
        assert!(byte_offset != 0, "the group base is not a member");
        assert!(
            byte_offset % WORD_SIZE == 0,
            "group member is not word-aligned"
        );
        assert!(
            byte_offset / WORD_SIZE <= u16::MAX as usize,
            "group member is beyond the reach of a compact offset"
        );
        Self::from_byte_distance(byte_offset)
    }

    /// Decode from the 2-byte stored form.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Encode to the 2-byte stored form.
    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for CompactOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("null");
        }
        write!(f, "@{}", self.0)
    }
}

impl From<CompactOffset> for u16 {
    fn from(offset: CompactOffset) -> Self {
        offset.0
    }
}

impl From<u16> for CompactOffset {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Compact offset of `member` inside the group starting at `group_base`.
///
/// Unchecked: `member` must lie inside the group at a word multiple from its base.
///
/// # Examples
/// ```
/// use llgroup_core::{WORD_SIZE, decode, encode};
/// let base = 0x1000;
/// let member = base + 3 * WORD_SIZE;
/// assert_eq!(encode(base, member).get(), 3);
/// assert_eq!(decode(base, encode(base, member)), member);
/// ```
#[inline]
pub const fn encode(group_base: usize, member: usize) -> CompactOffset {
    CompactOffset::from_byte_distance(member.wrapping_sub(group_base))
}

/// Address of the member `offset` words past `group_base`.
///
/// The null offset decodes to the base itself; check [`is_null`] first.
#[inline]
pub const fn decode(group_base: usize, offset: CompactOffset) -> usize {
    group_base + offset.byte_distance()
}

/// Like [`decode`], then advance `skip` raw bytes.
///
/// The skip is not scaled: it is a byte displacement the caller already knows,
/// such as the length of a variable-sized section in front of the target.
#[inline]
pub const fn decode_with_skip(group_base: usize, offset: CompactOffset, skip: usize) -> usize {
    decode(group_base, offset) + skip
}

#[inline]
pub const fn is_null(offset: CompactOffset) -> bool {
    offset.is_null()
}
