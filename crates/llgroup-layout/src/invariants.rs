//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use indexmap::IndexMap;

use crate::layout::Member;

pub(crate) trait EnsureIndex {
    fn ensure_index(&self, group: &str, index: usize) -> (&String, &Member);
}

impl EnsureIndex for IndexMap<String, Member> {
    fn ensure_index(&self, group: &str, index: usize) -> (&String, &Member) {
        self.get_index(index).unwrap_or_else(|| {
            panic!(
                "GroupLayout: member index {index} not found in group `{group}` \
                 (offset table must track member table)"
            )
        })
    }
}
