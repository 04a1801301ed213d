//! Build-time guarantees for statically declared groups.
//!
//! Both macros expand to const items, so a violation is a compile error rather
//! than anything observable at runtime.

use crate::offset::GROUP_CAPACITY;

/// Reject a group of `size` bytes that a compact offset cannot span.
///
/// # Panics
/// Panics if `size` exceeds [`GROUP_CAPACITY`]. In a const item that panic is a
/// build failure.
pub const fn check_group_size(size: usize) {
    assert!(
        size <= GROUP_CAPACITY,
        "group is too large for 16-bit compact offsets"
    );
}

/// Fail the build if a group type is larger than `65536 * WORD_SIZE` bytes.
///
/// # Examples
/// ```
/// use llgroup_core::{GROUP_CAPACITY, assert_group_size};
///
/// #[repr(C)]
/// struct TypeInfoGroup {
///     header: usize,
///     slots: [usize; 65535],
/// }
/// assert_group_size!(TypeInfoGroup);
/// const _: () = assert!(std::mem::size_of::<TypeInfoGroup>() == GROUP_CAPACITY);
/// ```
///
/// One byte over the limit does not compile:
/// ```compile_fail
/// use llgroup_core::{GROUP_CAPACITY, assert_group_size};
///
/// struct Oversized([u8; GROUP_CAPACITY + 1]);
/// assert_group_size!(Oversized);
/// ```
#[macro_export]
macro_rules! assert_group_size {
    ($($group:ty),+ $(,)?) => {
        $(
            const _: () = $crate::check_group_size(::core::mem::size_of::<$group>());
        )+
    };
}

/// Compact offset of a field inside a `#[repr(C)]` group, computed at compile time.
///
/// The offset comes from the type's layout, never from live addresses.
///
/// # Examples
/// ```
/// use llgroup_core::{WORD_SIZE, member_offset};
///
/// #[repr(C)]
/// struct Vtables {
///     header: usize,
///     list: [usize; 2],
///     dict: [usize; 3],
/// }
///
/// assert_eq!(member_offset!(Vtables, list).get(), 1);
/// assert_eq!(member_offset!(Vtables, dict).byte_distance(), 3 * WORD_SIZE);
/// ```
///
/// The group header cannot be referenced:
/// ```compile_fail
/// use llgroup_core::member_offset;
///
/// #[repr(C)]
/// struct Vtables {
///     header: usize,
///     list: usize,
/// }
///
/// let _ = member_offset!(Vtables, header);
/// ```
#[macro_export]
macro_rules! member_offset {
    ($group:ty, $($field:ident).+ $(,)?) => {{
        const OFFSET: $crate::CompactOffset =
            $crate::CompactOffset::of_member(::core::mem::offset_of!($group, $($field).+));
        OFFSET
    }};
}
