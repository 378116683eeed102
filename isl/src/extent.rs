// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Small geometric value types and the integer helpers used throughout the layout code.
//!
//! Extents carry a unit suffix in the names of the fields that hold them: `_px` for pixels, `_sa`
//! for samples, `_el` for format elements (blocks) and `_tl` for tiles. Sizes and offsets without a
//! suffix are in bytes.

/// A two-dimensional size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

impl Extent2D {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A three-dimensional size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent3D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent3D {
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// A three-dimensional size plus a number of array slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent4D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub array_len: u32,
}

impl Extent4D {
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32, array_len: u32) -> Self {
        Self {
            width,
            height,
            depth,
            array_len,
        }
    }
}

/// A three-dimensional offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset3D {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Offset3D {
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// A three-dimensional offset plus an array slice index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset4D {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub array: u32,
}

impl Offset4D {
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32, array: u32) -> Self {
        Self { x, y, z, array }
    }
}

/// Rounds `n` up to a multiple of `a`, which must be a power of two.
#[inline]
pub(crate) fn align(n: u32, a: u32) -> u32 {
    debug_assert!(a.is_power_of_two());
    (n + a - 1) & !(a - 1)
}

#[inline]
pub(crate) fn align_u64(n: u64, a: u64) -> u64 {
    debug_assert!(a.is_power_of_two());
    (n + a - 1) & !(a - 1)
}

/// Rounds `n` up to a multiple of `a`, which may be any nonzero value.
#[inline]
pub(crate) fn align_npot(n: u32, a: u32) -> u32 {
    debug_assert!(a > 0);
    n.div_ceil(a) * a
}

#[inline]
pub(crate) fn align_npot_u64(n: u64, a: u64) -> u64 {
    debug_assert!(a > 0);
    n.div_ceil(a) * a
}

#[inline]
pub(crate) fn align_div_npot(n: u32, a: u32) -> u32 {
    n.div_ceil(a)
}

/// The size of mip level `level` of a dimension whose level 0 size is `n`.
#[inline]
pub(crate) fn minify(n: u32, level: u32) -> u32 {
    if n == 0 {
        0
    } else {
        (n >> level).max(1)
    }
}

/// One plus the index of the least significant bit set, or zero if `n` is zero.
#[inline]
pub(crate) fn ffs(n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        n.trailing_zeros() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(align(13, 4), 16);
        assert_eq!(align(16, 4), 16);
        assert_eq!(align_npot(13, 12), 24);
        assert_eq!(align_div_npot(13, 4), 4);
        assert_eq!(align_u64(1, 65536), 65536);
    }

    #[test]
    fn minify_clamps_to_one() {
        assert_eq!(minify(512, 3), 64);
        assert_eq!(minify(512, 12), 1);
        assert_eq!(minify(0, 3), 0);
    }

    #[test]
    fn find_first_set() {
        assert_eq!(ffs(0), 0);
        assert_eq!(ffs(1), 1);
        assert_eq!(ffs(8), 4);
        assert_eq!(ffs(128), 8);
    }
}
