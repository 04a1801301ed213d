//! Word-aligned storage for a populated group.
//!
//! Compact offsets count words from the group base, so the bytes are kept in a
//! buffer that starts on a word boundary. Standard `Vec<u8>` provides no
//! alignment guarantees for `u8`.
//!
//! Reads go through the codec with a base of 0: a decoded offset is a byte
//! index into the image. No pointer arithmetic involved.

use std::ops::Deref;

use llgroup_core::{CompactOffset, WORD_SIZE, decode, decode_with_skip};

/// One machine word of bytes, aligned like `usize`.
#[repr(C)]
#[derive(Clone, Copy)]
struct Word {
    _align: [usize; 0],
    bytes: [u8; WORD_SIZE],
}

const _: () = assert!(std::mem::size_of::<Word>() == WORD_SIZE);
const _: () = assert!(std::mem::align_of::<Word>() == std::mem::align_of::<usize>());

const ZERO_WORD: Word = Word {
    _align: [],
    bytes: [0; WORD_SIZE],
};

/// Immutable bytes of one group, starting at a word boundary.
///
/// Uses `Vec<Word>` internally: Vec guarantees element alignment, so the
/// group base is word-aligned without a custom allocator.
#[derive(Clone)]
pub struct GroupImage {
    words: Vec<Word>,
    /// Bytes in use; the last word may be partially filled.
    len: usize,
}

impl GroupImage {
    /// Copy a populated group into aligned storage.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let mut words = vec![ZERO_WORD; bytes.len().div_ceil(WORD_SIZE)];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks(WORD_SIZE)) {
            word.bytes[..chunk.len()].copy_from_slice(chunk);
        }

        Self {
            words,
            len: bytes.len(),
        }
    }

    /// Load a group dumped by the allocator.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        std::fs::read(path).map(|bytes| Self::copy_from_slice(&bytes))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of words the group spans, counting a partial last word.
    pub fn words(&self) -> usize {
        self.words.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        debug_assert!(self.len <= self.words.len() * WORD_SIZE);
        // SAFETY: Word is repr(C) holding only [u8; WORD_SIZE] (the zero-length
        // array adds alignment, not size), so the words are contiguous bytes.
        // `len` never exceeds the words copied in copy_from_slice. An empty Vec
        // yields a dangling but aligned pointer, valid for a zero-length slice.
        unsafe { std::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.len) }
    }

    /// Address of the group base as an integer, for use with the address form
    /// of [`decode`].
    pub fn base_address(&self) -> usize {
        self.as_slice().as_ptr() as usize
    }

    /// Bytes from the member at `offset` to the end of the group.
    pub fn member(&self, offset: CompactOffset) -> &[u8] {
        &self.as_slice()[decode(0, offset)..]
    }

    /// Bytes from `skip` bytes past the member at `offset` to the end of the group.
    pub fn member_with_skip(&self, offset: CompactOffset, skip: usize) -> &[u8] {
        &self.as_slice()[decode_with_skip(0, offset, skip)..]
    }

    /// The native-endian word stored at the member.
    pub fn read_word(&self, offset: CompactOffset) -> usize {
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(&self.member(offset)[..WORD_SIZE]);
        usize::from_ne_bytes(word)
    }

    /// A compact offset stored `skip` bytes past the member at `offset`.
    pub fn read_offset(&self, offset: CompactOffset, skip: usize) -> CompactOffset {
        let bytes = self.member_with_skip(offset, skip);
        CompactOffset::from_bytes([bytes[0], bytes[1]])
    }
}

impl Deref for GroupImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for GroupImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupImage")
            .field("len", &self.len)
            .field("words", &self.words())
            .finish()
    }
}
