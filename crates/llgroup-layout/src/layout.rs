//! Frozen member tables.
//!
//! A [`GroupLayout`] maps each member name to its byte offset and compact
//! offset. Validation enforces everything the codec itself assumes: the group
//! fits [`GROUP_CAPACITY`], no member sits on the header, every member is
//! word-aligned and inside the group, and no two members share or overlap
//! their byte ranges. A member of unknown size occupies one byte.
//! Once built the table never changes.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use llgroup_core::{CompactOffset, GROUP_CAPACITY, WORD_SIZE, decode_with_skip};
use log::{debug, trace};

use crate::description::{RawGroup, RawMember};
use crate::error::LayoutError;
use crate::invariants::EnsureIndex;

/// A validated group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    byte_offset: usize,
    size: Option<usize>,
    offset: CompactOffset,
}

impl Member {
    /// Byte distance from the group base.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Declared size in bytes, if the description gave one.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn offset(&self) -> CompactOffset {
        self.offset
    }

    /// One past the last byte the member occupies.
    pub fn end(&self) -> usize {
        self.byte_offset + self.size.unwrap_or(1)
    }
}

/// Validated, immutable layout of one group.
#[derive(Debug, Clone)]
pub struct GroupLayout {
    name: String,
    size: usize,
    /// Declaration order.
    members: IndexMap<String, Member>,
    /// Compact offset -> index into `members`.
    by_offset: BTreeMap<CompactOffset, usize>,
}

impl GroupLayout {
    /// Validate a description into a layout table.
    pub fn from_raw(raw: RawGroup) -> Result<Self, LayoutError> {
        let RawGroup {
            name,
            size,
            word_size,
            members: raw_members,
        } = raw;

        if let Some(declared) = word_size
            && declared != WORD_SIZE
        {
            return Err(LayoutError::WordSizeMismatch {
                group: name,
                declared,
                host: WORD_SIZE,
            });
        }

        if size > GROUP_CAPACITY {
            return Err(LayoutError::GroupTooLarge {
                group: name,
                size,
                capacity: GROUP_CAPACITY,
            });
        }

        let mut members: IndexMap<String, Member> = IndexMap::with_capacity(raw_members.len());
        let mut by_offset: BTreeMap<CompactOffset, usize> = BTreeMap::new();

        for raw_member in raw_members {
            let member = validate_member(&name, size, &raw_member)?;

            if members.contains_key(&raw_member.name) {
                return Err(LayoutError::DuplicateMember {
                    group: name,
                    member: raw_member.name,
                });
            }
            if let Some(&other) = by_offset.get(&member.offset) {
                let (other, _) = members.ensure_index(&name, other);
                return Err(LayoutError::AliasedMember {
                    other: other.clone(),
                    group: name,
                    member: raw_member.name,
                    offset: member.offset,
                });
            }

            let before = by_offset.range(..member.offset).next_back();
            let after = by_offset.range(member.offset..).next();
            let clash = before
                .filter(|&(_, &i)| members.ensure_index(&name, i).1.end() > member.byte_offset)
                .or(after.filter(|&(_, &i)| {
                    members.ensure_index(&name, i).1.byte_offset < member.end()
                }));
            if let Some((_, &other)) = clash {
                let (other, _) = members.ensure_index(&name, other);
                return Err(LayoutError::Overlapping {
                    other: other.clone(),
                    group: name,
                    member: raw_member.name,
                });
            }

            trace!(
                "group `{name}`: member `{}` at +{} -> {}",
                raw_member.name, member.byte_offset, member.offset
            );
            by_offset.insert(member.offset, members.len());
            members.insert(raw_member.name, member);
        }

        debug!(
            "group `{name}`: {} members in {size} bytes",
            members.len()
        );

        Ok(Self {
            name,
            size,
            members,
            by_offset,
        })
    }

    /// Back to the description form (host word size recorded explicitly).
    pub fn to_raw(&self) -> RawGroup {
        RawGroup {
            name: self.name.clone(),
            size: self.size,
            word_size: Some(WORD_SIZE),
            members: self
                .members
                .iter()
                .map(|(name, m)| RawMember {
                    name: name.clone(),
                    offset: m.byte_offset,
                    size: m.size,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Size in words, rounded up.
    pub fn words(&self) -> usize {
        self.size.div_ceil(WORD_SIZE)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    pub fn offset_of(&self, name: &str) -> Option<CompactOffset> {
        self.member(name).map(Member::offset)
    }

    /// Reverse lookup. The null offset never names a member.
    pub fn member_at(&self, offset: CompactOffset) -> Option<(&str, &Member)> {
        let &index = self.by_offset.get(&offset)?;
        let (name, member) = self.members.ensure_index(&self.name, index);
        Some((name.as_str(), member))
    }

    /// Byte position of `skip` bytes past the named member, relative to the base.
    pub fn resolve(&self, name: &str, skip: usize) -> Option<usize> {
        self.offset_of(name)
            .map(|offset| decode_with_skip(0, offset, skip))
    }
}

fn validate_member(group: &str, size: usize, raw: &RawMember) -> Result<Member, LayoutError> {
    let start = raw.offset;

    if start == 0 {
        return Err(LayoutError::HeaderMember {
            group: group.to_string(),
            member: raw.name.clone(),
        });
    }

    if !start.is_multiple_of(WORD_SIZE) {
        return Err(LayoutError::Misaligned {
            group: group.to_string(),
            member: raw.name.clone(),
            byte_offset: start,
            word_size: WORD_SIZE,
        });
    }

    let end = start.saturating_add(raw.size.unwrap_or(1));
    if start >= size || end > size {
        return Err(LayoutError::OutOfBounds {
            group: group.to_string(),
            member: raw.name.clone(),
            start,
            end,
            size,
        });
    }

    // start < size <= GROUP_CAPACITY, so the word count fits in 16 bits.
    Ok(Member {
        byte_offset: start,
        size: raw.size,
        offset: CompactOffset::from_byte_distance(start),
    })
}
