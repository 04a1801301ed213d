//! Group descriptions as emitted by the group-construction process.
//!
//! ```json
//! [
//!   {
//!     "name": "type_info",
//!     "size": 64,
//!     "word_size": 8,
//!     "members": [
//!       { "name": "int_type", "offset": 8, "size": 16 },
//!       { "name": "list_type", "offset": 40 }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One group, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGroup {
    pub name: String,
    /// Total size in bytes, header included.
    pub size: usize,
    /// Word size the description was generated for. Absent means "host".
    #[serde(default)]
    pub word_size: Option<usize>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

/// One member, positioned by byte offset from the group base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMember {
    pub name: String,
    pub offset: usize,
    #[serde(default)]
    pub size: Option<usize>,
}

impl RawGroup {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
            word_size: None,
            members: Vec::new(),
        }
    }

    /// Append a member (builder style, for descriptions assembled in code).
    pub fn member(mut self, name: impl Into<String>, offset: usize, size: Option<usize>) -> Self {
        self.members.push(RawMember {
            name: name.into(),
            offset,
            size,
        });
        self
    }
}

/// Parse a JSON array of group descriptions.
pub fn parse_groups(json: &str) -> Result<Vec<RawGroup>, serde_json::Error> {
    serde_json::from_str(json)
}
