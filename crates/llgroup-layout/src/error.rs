use llgroup_core::CompactOffset;
use thiserror::Error;

/// Reasons a group description cannot become a layout table.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid binary layout: {0}")]
    Binary(#[from] postcard::Error),

    #[error("group `{group}`: described for {declared}-byte words, host words are {host} bytes")]
    WordSizeMismatch {
        group: String,
        declared: usize,
        host: usize,
    },

    #[error("group `{group}`: {size} bytes exceeds the compact offset capacity of {capacity} bytes")]
    GroupTooLarge {
        group: String,
        size: usize,
        capacity: usize,
    },

    #[error("group `{group}`: member `{member}` starts at the group header")]
    HeaderMember { group: String, member: String },

    #[error("group `{group}`: member `{member}` at byte {byte_offset} is not {word_size}-byte aligned")]
    Misaligned {
        group: String,
        member: String,
        byte_offset: usize,
        word_size: usize,
    },

    #[error("group `{group}`: member `{member}` spans bytes {start}..{end}, past the group size {size}")]
    OutOfBounds {
        group: String,
        member: String,
        start: usize,
        end: usize,
        size: usize,
    },

    #[error("group `{group}`: member `{member}` is declared twice")]
    DuplicateMember { group: String, member: String },

    #[error("group `{group}`: members `{other}` and `{member}` share offset {offset}")]
    AliasedMember {
        group: String,
        member: String,
        other: String,
        offset: CompactOffset,
    },

    #[error("group `{group}`: members `{other}` and `{member}` overlap")]
    Overlapping {
        group: String,
        member: String,
        other: String,
    },

    #[error("group `{group}` is declared twice")]
    DuplicateGroup { group: String },
}
