//! Terminal styling for layout dumps, one escape sequence per role.

/// Escape sequences for each part of a dump line. Empty strings when off.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colors {
    /// Group and member names (blue).
    pub name: &'static str,
    /// Compact offsets (green).
    pub offset: &'static str,
    /// Byte positions, sizes, labels (dim).
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        offset: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        offset: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
