// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Memory tilings and the geometry of a single tile.
//!
//! A tiling rearranges the addresses of an image so that texels that are close in two (or three)
//! dimensions are also close in memory. Every tiling except [`Tiling::Linear`] splits memory into
//! tiles of a fixed byte size; the number of elements a tile holds depends on the element size,
//! the dimensionality of the surface and, for the standard tilings, on the sample count.
//!
//! ```
//! use isl::tiling::Tiling;
//! use isl::surface::{MsaaLayout, SurfaceDim};
//!
//! let info = Tiling::Y0.tile_info(SurfaceDim::Dim2d, MsaaLayout::None, 32, 1);
//! assert_eq!(info.logical_extent_el.width, 32);
//! assert_eq!(info.phys_extent.width * info.phys_extent.height, 4096);
//! ```

use crate::{
    extent::ffs,
    surface::{MsaaLayout, SurfaceDim},
    DeviceSize, Extent2D, Extent4D, Offset3D, Offset4D,
};
use std::fmt;

isl_enum! {
    /// A memory tiling.
    Tiling impl {
        /// Returns the flag corresponding to `self`.
        #[inline]
        pub const fn flag(self) -> TilingFlags {
            TilingFlags::from_tiling(self)
        }

        /// Returns whether `self` is one of the Y-major tilings, legacy or standard.
        #[inline]
        pub const fn is_any_y(self) -> bool {
            TilingFlags::ANY_Y.contains(self.flag())
        }

        /// Returns whether `self` is one of the standard 4 KiB or 64 KiB Y tilings.
        #[inline]
        pub const fn is_std_y(self) -> bool {
            TilingFlags::STD_Y.contains(self.flag())
        }

        /// Returns whether the tiles of `self` are 64 KiB in size.
        #[inline]
        pub const fn is_64k(self) -> bool {
            matches!(self, Tiling::SklYs | Tiling::IclYs | Tiling::Tile64)
        }

        /// Returns the short name of the tiling.
        pub const fn name(self) -> &'static str {
            match self {
                Tiling::Linear => "linear",
                Tiling::W => "W",
                Tiling::X => "X",
                Tiling::Y0 => "Y0",
                Tiling::SklYf => "SKL-Yf",
                Tiling::SklYs => "SKL-Ys",
                Tiling::IclYf => "ICL-Yf",
                Tiling::IclYs => "ICL-Ys",
                Tiling::Tile4 => "4",
                Tiling::Tile64 => "64",
                Tiling::Hiz => "hiz",
                Tiling::Ccs => "ccs",
                Tiling::Gfx12Ccs => "gfx12-ccs",
            }
        }
    }
    = u8;

    /// Pixels are stored row by row.
    Linear = 0,

    /// Tiling used by separate stencil buffers: 64×64 bytes, stored as 128×32.
    W = 1,

    /// X-major 4 KiB tiles of 512×8 bytes.
    X = 2,

    /// Legacy Y-major 4 KiB tiles of 128×32 bytes.
    Y0 = 3,

    /// Standard 4 KiB tiles, Skylake variant.
    SklYf = 4,

    /// Standard 64 KiB tiles, Skylake variant.
    SklYs = 5,

    /// Standard 4 KiB tiles, Ice Lake variant.
    IclYf = 6,

    /// Standard 64 KiB tiles, Ice Lake variant.
    IclYs = 7,

    /// 4 KiB tiles of 128×32 bytes with a different internal swizzle than `Y0`.
    Tile4 = 8,

    /// 64 KiB tiles.
    Tile64 = 9,

    /// Tiling of hierarchical depth buffers.
    Hiz = 10,

    /// Tiling of fast-clear and compression control surfaces before gfx12.
    Ccs = 11,

    /// Tiling of the compression control surface on gfx12 and newer.
    Gfx12Ccs = 12,
}

impl fmt::Display for Tiling {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

isl_bitflags! {
    /// A set of [`Tiling`] values, used to restrict the tilings a surface may be laid out with.
    TilingFlags impl {
        /// Every Y-major tiling.
        pub const ANY_Y: Self = Self(
            Self::Y0.0 | Self::SKL_YF.0 | Self::SKL_YS.0 | Self::ICL_YF.0 | Self::ICL_YS.0,
        );

        /// The standard Y tilings.
        pub const STD_Y: Self =
            Self(Self::SKL_YF.0 | Self::SKL_YS.0 | Self::ICL_YF.0 | Self::ICL_YS.0);

        /// Every tiling a primary surface may use.
        pub const ANY: Self = Self(
            Self::LINEAR.0
                | Self::W.0
                | Self::X.0
                | Self::ANY_Y.0
                | Self::TILE_4.0
                | Self::TILE_64.0,
        );

        /// Every tiling except linear.
        pub const NON_LINEAR: Self = Self(Self::ANY.0 & !Self::LINEAR.0);

        #[inline]
        pub const fn from_tiling(tiling: Tiling) -> Self {
            Self(1 << tiling as u32)
        }

        /// Returns whether `tiling` is in `self`.
        #[inline]
        pub const fn contains_tiling(self, tiling: Tiling) -> bool {
            self.contains(Self::from_tiling(tiling))
        }

        /// Returns the tilings in `self`, in declaration order.
        pub fn iter(self) -> impl Iterator<Item = Tiling> {
            Tiling::ALL
                .into_iter()
                .filter(move |&tiling| self.contains_tiling(tiling))
        }
    }
    = u32;

    LINEAR = 1 << 0,
    W = 1 << 1,
    X = 1 << 2,
    Y0 = 1 << 3,
    SKL_YF = 1 << 4,
    SKL_YS = 1 << 5,
    ICL_YF = 1 << 6,
    ICL_YS = 1 << 7,
    TILE_4 = 1 << 8,
    TILE_64 = 1 << 9,
    HIZ = 1 << 10,
    CCS = 1 << 11,
    GFX12_CCS = 1 << 12,
}

impl From<Tiling> for TilingFlags {
    #[inline]
    fn from(val: Tiling) -> Self {
        Self::from_tiling(val)
    }
}

/// The geometry of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileInfo {
    pub tiling: Tiling,

    /// The element size that the geometry was computed for.
    ///
    /// For formats whose element size is not a power of two, this is the element size divided by
    /// three. Callers must scale horizontal quantities by `bpb / format_bpb`.
    pub format_bpb: u32,

    /// The size of the tile in elements of `format_bpb` bits.
    ///
    /// The `array_len` of the extent is greater than one only for multisampled surfaces with a
    /// standard tiling, whose samples are stored as slices inside the tile.
    pub logical_extent_el: Extent4D,

    /// The size of the tile in memory, as a width in bytes and a height in rows.
    pub phys_extent: Extent2D,

    /// The largest number of levels that fit in a miptail with this tiling.
    pub max_miptail_levels: u32,
}

impl TileInfo {
    /// Returns the size of the tile in bytes.
    #[inline]
    pub fn size(&self) -> DeviceSize {
        self.phys_extent.width as DeviceSize * self.phys_extent.height as DeviceSize
    }
}

impl Tiling {
    /// Returns the geometry of one tile of this tiling.
    ///
    /// # Panics
    ///
    /// - Panics if the tiling cannot hold elements of `format_bpb` bits, for example a `W` tile
    ///   with anything other than 8-bit elements.
    /// - Panics if `dim` is [`SurfaceDim::Dim1d`] and `self` is a standard Y tiling.
    pub fn tile_info(
        self,
        dim: SurfaceDim,
        msaa_layout: MsaaLayout,
        format_bpb: u32,
        samples: u32,
    ) -> TileInfo {
        if self != Tiling::Linear && !format_bpb.is_power_of_two() {
            // Treat the tile as three times as wide, so that no element crosses a tile boundary.
            assert!(
                matches!(self, Tiling::X | Tiling::Y0 | Tiling::Tile4),
                "{} tiling does not support {} bit elements",
                self,
                format_bpb,
            );
            assert!((format_bpb / 8) % 3 == 0 && (format_bpb / 3).is_power_of_two());

            return self.tile_info(dim, msaa_layout, format_bpb / 3, samples);
        }

        let bs = format_bpb / 8;

        let (logical_extent_el, phys_extent) = match self {
            Tiling::Linear => {
                assert!(bs > 0);
                (Extent4D::new(1, 1, 1, 1), Extent2D::new(bs, 1))
            }
            Tiling::X => {
                assert!(bs > 0);
                (Extent4D::new(512 / bs, 8, 1, 1), Extent2D::new(512, 8))
            }
            Tiling::Y0 | Tiling::Tile4 => {
                assert!(bs > 0);
                (Extent4D::new(128 / bs, 32, 1, 1), Extent2D::new(128, 32))
            }
            Tiling::W => {
                // Stencil rows are stored interleaved in pairs, so a W tile occupies the same
                // memory as a Y tile.
                assert_eq!(bs, 1);
                (Extent4D::new(64, 64, 1, 1), Extent2D::new(128, 32))
            }
            Tiling::SklYf | Tiling::SklYs | Tiling::IclYf | Tiling::IclYs => {
                std_y_extent(self, dim, msaa_layout, format_bpb, samples)
            }
            Tiling::Tile64 => tile64_extent(dim, msaa_layout, format_bpb, samples),
            Tiling::Hiz => {
                // Two HiZ columns per Y-tiled column.
                assert_eq!(bs, 16);
                (Extent4D::new(16, 16, 1, 1), Extent2D::new(128, 32))
            }
            Tiling::Ccs => {
                // One bit pair per cache-line pair of the main surface, Y-tiled.
                assert!(format_bpb == 1 || format_bpb == 2);
                (
                    Extent4D::new(128, 256 / format_bpb, 1, 1),
                    Extent2D::new(128, 32),
                )
            }
            Tiling::Gfx12Ccs => {
                // One 64 byte row of CCS per 4 KiB of a Y-tiled main surface.
                assert_eq!(format_bpb, 4);
                (Extent4D::new(16, 8, 1, 1), Extent2D::new(64, 1))
            }
        };

        TileInfo {
            tiling: self,
            format_bpb,
            logical_extent_el,
            phys_extent,
            max_miptail_levels: self.max_miptail_levels(dim, samples),
        }
    }

    /// Returns the largest number of levels that can be packed into a miptail.
    pub fn max_miptail_levels(self, dim: SurfaceDim, samples: u32) -> u32 {
        // Mipmapped multisampled surfaces do not exist.
        if samples > 1 {
            return 0;
        }

        let (rows_2d, rows_3d) = match self {
            Tiling::SklYf | Tiling::SklYs => (
                SKL_STD_Y_2D_MIPTAIL_OFFSET_EL.len(),
                SKL_STD_Y_3D_MIPTAIL_OFFSET_EL.len(),
            ),
            Tiling::IclYf | Tiling::IclYs => (
                ICL_STD_Y_2D_MIPTAIL_OFFSET_EL.len(),
                ICL_STD_Y_3D_MIPTAIL_OFFSET_EL.len(),
            ),
            Tiling::Tile64 => (
                ICL_STD_Y_2D_MIPTAIL_OFFSET_EL.len(),
                ACM_TILE64_3D_MIPTAIL_OFFSET_EL.len(),
            ),
            _ => return 0,
        };

        // Tiled 1D surfaces do not exist.
        if dim == SurfaceDim::Dim1d {
            return 0;
        }

        let rows = if dim == SurfaceDim::Dim3d {
            rows_3d
        } else {
            rows_2d
        };

        rows as u32 - self.miptail_base_row()
    }

    /// Returns the first row of the miptail tables that is used by this tiling.
    #[inline]
    pub(crate) fn miptail_base_row(self) -> u32 {
        match self {
            Tiling::SklYf | Tiling::IclYf => 4,
            _ => 0,
        }
    }

    /// Returns the offset of level `level` of a miptail, relative to the start of the miptail, in
    /// elements.
    ///
    /// `level` counts from the first level in the miptail.
    pub fn miptail_level_offset_el(self, dim: SurfaceDim, format_bpb: u32, level: u32) -> Offset3D {
        debug_assert!(self.is_std_y() || self == Tiling::Tile64);

        let col = 8 - ffs(format_bpb) as usize;
        assert!(col < 5, "no miptail layout for {} bit elements", format_bpb);
        let row = (self.miptail_base_row() + level) as usize;

        let icl_layout = matches!(self, Tiling::Tile64 | Tiling::IclYf | Tiling::IclYs);

        match dim {
            SurfaceDim::Dim3d => {
                let table: &[[[u8; 3]; 5]] = match self {
                    Tiling::Tile64 => &ACM_TILE64_3D_MIPTAIL_OFFSET_EL,
                    _ if icl_layout => &ICL_STD_Y_3D_MIPTAIL_OFFSET_EL,
                    _ => &SKL_STD_Y_3D_MIPTAIL_OFFSET_EL,
                };
                let [x, y, z] = table[row][col];

                Offset3D::new(x as u32, y as u32, z as u32)
            }
            SurfaceDim::Dim1d | SurfaceDim::Dim2d => {
                let table: &[[[u8; 2]; 5]] = if icl_layout {
                    &ICL_STD_Y_2D_MIPTAIL_OFFSET_EL
                } else {
                    &SKL_STD_Y_2D_MIPTAIL_OFFSET_EL
                };
                let [x, y] = table[row][col];

                Offset3D::new(x as u32, y as u32, 0)
            }
        }
    }

    /// Splits a position in a surface into the byte offset of the tile that contains it and the
    /// position inside that tile.
    ///
    /// `total_offset_el` is in elements of `bpb` bits. `row_pitch` is in bytes and must be a
    /// multiple of the tile width. For tilings whose tiles hold more than one Z slice or array
    /// slice, `array_pitch_el_rows` must be a multiple of the tile height.
    pub fn intratile_offset_el(
        self,
        dim: SurfaceDim,
        msaa_layout: MsaaLayout,
        bpb: u32,
        samples: u32,
        row_pitch: u32,
        array_pitch_el_rows: u32,
        total_offset_el: Offset4D,
    ) -> IntratileOffset {
        if self == Tiling::Linear {
            debug_assert!(bpb % 8 == 0);
            debug_assert!(samples == 1);
            debug_assert!(total_offset_el.z == 0 && total_offset_el.array == 0);

            return IntratileOffset {
                tile_offset: total_offset_el.y as DeviceSize * row_pitch as DeviceSize
                    + total_offset_el.x as DeviceSize * (bpb / 8) as DeviceSize,
                offset_el: Offset4D::default(),
            };
        }

        let mut tile_info = self.tile_info(dim, msaa_layout, bpb, samples);
        let tile = tile_info.logical_extent_el;

        debug_assert!(row_pitch % tile_info.phys_extent.width == 0);
        if tile.depth > 1 || tile.array_len > 1 {
            debug_assert!(array_pitch_el_rows % tile.height == 0);
        }

        // With non-power-of-two elements, a tile holds as many elements as the tile of the
        // divisor, so it is that many times wider.
        tile_info.phys_extent.width *= bpb / tile_info.format_bpb;

        let offset_el = Offset4D::new(
            total_offset_el.x % tile.width,
            total_offset_el.y % tile.height,
            total_offset_el.z % tile.depth,
            total_offset_el.array % tile.array_len,
        );

        let x_tl = total_offset_el.x / tile.width;
        let z_tl = total_offset_el.z / tile.depth;
        let a_tl = total_offset_el.array / tile.array_len;
        let array_pitch_tl_rows = array_pitch_el_rows / tile.height;
        let y_tl = total_offset_el.y / tile.height + (z_tl + a_tl) * array_pitch_tl_rows;

        let tile_height = tile_info.phys_extent.height as DeviceSize;
        let tile_offset = y_tl as DeviceSize * tile_height * row_pitch as DeviceSize
            + x_tl as DeviceSize * tile_height * tile_info.phys_extent.width as DeviceSize;

        IntratileOffset {
            tile_offset,
            offset_el,
        }
    }
}

/// A position inside a tiled surface, as returned by [`Tiling::intratile_offset_el`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntratileOffset {
    /// Offset in bytes of the start of the tile.
    pub tile_offset: DeviceSize,

    /// Position inside the tile, in elements. Every component is smaller than the logical extent
    /// of the tile in that dimension.
    pub offset_el: Offset4D,
}

fn std_y_extent(
    tiling: Tiling,
    dim: SurfaceDim,
    msaa_layout: MsaaLayout,
    format_bpb: u32,
    samples: u32,
) -> (Extent4D, Extent2D) {
    assert!(format_bpb >= 8);

    let ys = tiling.is_64k() as u32;
    let f = ffs(format_bpb);

    let logical = match dim {
        SurfaceDim::Dim2d => {
            let mut logical = Extent4D::new(
                1 << (6 - (f - 4) / 2 + 2 * ys),
                1 << (6 - (f - 3) / 2 + 2 * ys),
                1,
                1,
            );

            // Samples of multisampled surfaces are stored as slices of the tile, and the tile
            // shrinks to keep its byte size: width first, then height. 2x halves the width only.
            if samples > 1 && tiling != Tiling::SklYf && msaa_layout == MsaaLayout::Array {
                let s = ffs(samples);
                logical.width >>= s / 2;
                logical.height >>= (s - 1) / 2;
                logical.array_len = samples;
            }

            logical
        }
        SurfaceDim::Dim3d => Extent4D::new(
            1 << (4 - (f - 2) / 3 + 2 * ys),
            1 << (4 - (f - 4) / 3 + ys),
            1 << (4 - (f - 3) / 3 + ys),
            1,
        ),
        SurfaceDim::Dim1d => panic!("{} tiling cannot be used for 1D surfaces", tiling),
    };

    let tile_size = if ys != 0 { 1 << 16 } else { 1 << 12 };
    let width = logical.width * (format_bpb / 8);

    (logical, Extent2D::new(width, tile_size / width))
}

fn tile64_extent(
    dim: SurfaceDim,
    msaa_layout: MsaaLayout,
    format_bpb: u32,
    samples: u32,
) -> (Extent4D, Extent2D) {
    let bs = format_bpb / 8;

    // The tables are in terms of the exponents Cv and Cu (and Cr for 3D), height before width.
    let extent_2d = |cv: u32, cu: u32, a: u32| Extent4D::new((1 << cu) / bs, 1 << cv, 1, a);
    let extent_3d = |cr: u32, cv: u32, cu: u32| Extent4D::new((1 << cu) / bs, 1 << cv, 1 << cr, 1);

    let logical = if dim == SurfaceDim::Dim3d {
        match format_bpb {
            128 | 64 => extent_3d(4, 4, 8),
            32 => extent_3d(4, 5, 7),
            16 | 8 => extent_3d(5, 5, 6),
            _ => panic!("Tile64 does not support {} bit elements in 3D", format_bpb),
        }
    } else if samples == 1 || msaa_layout == MsaaLayout::Interleaved {
        // Interleaved surfaces let the client unit swizzle the samples, and use the 1x layout.
        match format_bpb {
            128 | 64 => extent_2d(6, 10, 1),
            32 | 16 => extent_2d(7, 9, 1),
            8 => extent_2d(8, 8, 1),
            _ => panic!("Tile64 does not support {} bit elements", format_bpb),
        }
    } else if samples == 2 {
        match format_bpb {
            128 | 64 => extent_2d(6, 9, 2),
            32 | 16 => extent_2d(7, 8, 2),
            8 => extent_2d(8, 7, 2),
            _ => panic!("Tile64 does not support {} bit elements", format_bpb),
        }
    } else {
        match format_bpb {
            128 | 64 => extent_2d(5, 9, 4),
            32 | 16 => extent_2d(6, 8, 4),
            8 => extent_2d(7, 7, 4),
            _ => panic!("Tile64 does not support {} bit elements", format_bpb),
        }
    };

    let width = logical.width * bs;

    (logical, Extent2D::new(width, (64 * 1024) / width))
}

// Offsets of each level of a miptail, in elements. Rows are levels, columns are element sizes of
// 128, 64, 32, 16 and 8 bits.

const SKL_STD_Y_2D_MIPTAIL_OFFSET_EL: [[[u8; 2]; 5]; 15] = [
    [[32, 0], [64, 0], [64, 0], [128, 0], [128, 0]],
    [[0, 32], [0, 32], [0, 64], [0, 64], [0, 128]],
    [[16, 0], [32, 0], [32, 0], [64, 0], [64, 0]],
    [[0, 16], [0, 16], [0, 32], [0, 32], [0, 64]],
    [[8, 0], [16, 0], [16, 0], [32, 0], [32, 0]],
    [[4, 8], [8, 8], [8, 16], [16, 16], [16, 32]],
    [[0, 12], [0, 12], [0, 24], [0, 24], [0, 48]],
    [[0, 8], [0, 8], [0, 16], [0, 16], [0, 32]],
    [[4, 4], [8, 4], [8, 8], [16, 8], [16, 16]],
    [[4, 0], [8, 0], [8, 0], [16, 0], [16, 0]],
    [[0, 4], [0, 4], [0, 8], [0, 8], [0, 16]],
    [[3, 0], [6, 0], [4, 4], [8, 4], [0, 12]],
    [[2, 0], [4, 0], [4, 0], [8, 0], [0, 8]],
    [[1, 0], [2, 0], [0, 4], [0, 4], [0, 4]],
    [[0, 0], [0, 0], [0, 0], [0, 0], [0, 0]],
];

const ICL_STD_Y_2D_MIPTAIL_OFFSET_EL: [[[u8; 2]; 5]; 15] = [
    [[32, 0], [64, 0], [64, 0], [128, 0], [128, 0]],
    [[0, 32], [0, 32], [0, 64], [0, 64], [0, 128]],
    [[16, 0], [32, 0], [32, 0], [64, 0], [64, 0]],
    [[0, 16], [0, 16], [0, 32], [0, 32], [0, 64]],
    [[8, 0], [16, 0], [16, 0], [32, 0], [32, 0]],
    [[4, 8], [8, 8], [8, 16], [16, 16], [16, 32]],
    [[0, 12], [0, 12], [0, 24], [0, 24], [0, 48]],
    [[0, 8], [0, 8], [0, 16], [0, 16], [0, 32]],
    [[4, 4], [8, 4], [8, 8], [16, 8], [16, 16]],
    [[4, 0], [8, 0], [8, 0], [16, 0], [16, 0]],
    [[0, 4], [0, 4], [0, 8], [0, 8], [0, 16]],
    [[0, 0], [0, 0], [0, 0], [0, 0], [0, 0]],
    [[1, 0], [2, 0], [0, 4], [0, 4], [0, 4]],
    [[2, 0], [4, 0], [4, 0], [8, 0], [0, 8]],
    [[3, 0], [6, 0], [4, 4], [8, 4], [0, 12]],
];

const SKL_STD_Y_3D_MIPTAIL_OFFSET_EL: [[[u8; 3]; 5]; 16] = [
    [[8, 0, 0], [16, 0, 0], [16, 0, 0], [16, 0, 0], [32, 0, 0]],
    [[0, 8, 0], [0, 8, 0], [0, 16, 0], [0, 16, 0], [0, 16, 0]],
    [[0, 0, 8], [0, 0, 8], [0, 0, 8], [0, 0, 16], [0, 0, 16]],
    [[4, 0, 0], [8, 0, 0], [8, 0, 0], [8, 0, 0], [16, 0, 0]],
    [[0, 4, 0], [0, 4, 0], [0, 8, 0], [0, 8, 0], [0, 8, 0]],
    [[0, 0, 4], [0, 0, 4], [0, 0, 4], [0, 0, 8], [0, 0, 8]],
    [[3, 0, 0], [6, 0, 0], [4, 4, 0], [0, 4, 4], [0, 4, 4]],
    [[2, 0, 0], [4, 0, 0], [0, 4, 0], [0, 4, 0], [0, 4, 0]],
    [[1, 0, 3], [2, 0, 3], [4, 0, 3], [0, 0, 7], [0, 0, 7]],
    [[1, 0, 2], [2, 0, 2], [4, 0, 2], [0, 0, 6], [0, 0, 6]],
    [[1, 0, 1], [2, 0, 1], [4, 0, 1], [0, 0, 5], [0, 0, 5]],
    [[1, 0, 0], [2, 0, 0], [4, 0, 0], [0, 0, 4], [0, 0, 4]],
    [[0, 0, 3], [0, 0, 3], [0, 0, 3], [0, 0, 3], [0, 0, 3]],
    [[0, 0, 2], [0, 0, 2], [0, 0, 2], [0, 0, 2], [0, 0, 2]],
    [[0, 0, 1], [0, 0, 1], [0, 0, 1], [0, 0, 1], [0, 0, 1]],
    [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]],
];

const ICL_STD_Y_3D_MIPTAIL_OFFSET_EL: [[[u8; 3]; 5]; 15] = [
    [[8, 0, 0], [16, 0, 0], [16, 0, 0], [16, 0, 0], [32, 0, 0]],
    [[0, 8, 0], [0, 8, 0], [0, 16, 0], [0, 16, 0], [0, 16, 0]],
    [[0, 0, 8], [0, 0, 8], [0, 0, 8], [0, 0, 16], [0, 0, 16]],
    [[4, 0, 0], [8, 0, 0], [8, 0, 0], [8, 0, 0], [16, 0, 0]],
    [[0, 4, 0], [0, 4, 0], [0, 8, 0], [0, 8, 0], [0, 8, 0]],
    [[2, 0, 4], [4, 0, 4], [4, 0, 4], [4, 0, 8], [8, 0, 8]],
    [[0, 2, 4], [0, 2, 4], [0, 4, 4], [0, 4, 8], [0, 4, 8]],
    [[0, 0, 4], [0, 0, 4], [0, 0, 4], [0, 0, 8], [0, 0, 8]],
    [[2, 2, 0], [4, 2, 0], [4, 4, 0], [4, 4, 0], [8, 4, 0]],
    [[2, 0, 0], [4, 0, 0], [4, 0, 0], [4, 0, 0], [8, 0, 0]],
    [[0, 2, 0], [0, 2, 0], [0, 4, 0], [0, 4, 0], [0, 4, 0]],
    [[1, 0, 2], [2, 0, 2], [2, 0, 2], [2, 0, 4], [4, 0, 4]],
    [[0, 0, 2], [0, 0, 2], [0, 0, 2], [0, 0, 4], [0, 0, 4]],
    [[1, 0, 0], [2, 0, 0], [2, 0, 0], [2, 0, 0], [4, 0, 0]],
    [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]],
];

const ACM_TILE64_3D_MIPTAIL_OFFSET_EL: [[[u8; 3]; 5]; 15] = [
    [[8, 0, 0], [16, 0, 0], [16, 0, 0], [16, 0, 0], [32, 0, 0]],
    [[0, 8, 0], [0, 8, 0], [0, 16, 0], [0, 16, 0], [0, 16, 0]],
    [[0, 0, 8], [0, 0, 8], [0, 0, 8], [0, 0, 16], [0, 0, 16]],
    [[4, 0, 0], [8, 0, 0], [8, 0, 0], [8, 0, 0], [16, 0, 0]],
    [[0, 4, 0], [0, 4, 0], [0, 8, 0], [0, 8, 0], [0, 8, 0]],
    [[2, 0, 4], [4, 0, 4], [4, 0, 4], [0, 4, 8], [0, 4, 8]],
    [[1, 0, 4], [2, 0, 4], [0, 4, 4], [0, 0, 12], [0, 0, 12]],
    [[0, 0, 4], [0, 0, 4], [0, 0, 4], [0, 0, 8], [0, 0, 8]],
    [[3, 0, 0], [6, 0, 0], [4, 4, 0], [0, 4, 4], [0, 4, 4]],
    [[2, 0, 0], [4, 0, 0], [4, 0, 0], [0, 4, 0], [0, 4, 0]],
    [[1, 0, 0], [2, 0, 0], [0, 4, 0], [0, 0, 4], [0, 0, 4]],
    [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]],
    [[0, 0, 1], [0, 0, 1], [0, 0, 1], [0, 0, 1], [0, 0, 1]],
    [[0, 0, 2], [0, 0, 2], [0, 0, 2], [0, 0, 2], [0, 0, 2]],
    [[0, 0, 3], [0, 0, 3], [0, 0, 3], [0, 0, 3], [0, 0, 3]],
];

#[cfg(test)]
mod tests {
    use super::{Tiling, TilingFlags};
    use crate::{
        surface::{MsaaLayout, SurfaceDim},
        Offset3D, Offset4D,
    };

    const BPBS: [u32; 5] = [128, 64, 32, 16, 8];
    const SAMPLES: [u32; 5] = [1, 2, 4, 8, 16];

    fn check_tile_size(tiling: Tiling, dim: SurfaceDim, msaa_layout: MsaaLayout, bpb: u32, samples: u32) {
        let info = tiling.tile_info(dim, msaa_layout, bpb, samples);
        let logical = info.logical_extent_el;
        let phys = info.phys_extent;

        let logical_bits = logical.width as u64
            * logical.height as u64
            * logical.depth as u64
            * logical.array_len as u64
            * info.format_bpb as u64;
        assert_eq!(
            logical_bits,
            8 * phys.width as u64 * phys.height as u64,
            "{} {:?} {:?} bpb={} samples={}",
            tiling,
            dim,
            msaa_layout,
            bpb,
            samples,
        );

        let expected_size = if tiling.is_64k() { 65536 } else { 4096 };
        let actual_size = phys.width * phys.height;
        match tiling {
            Tiling::Linear => assert_eq!(actual_size, bpb / 8),
            Tiling::Gfx12Ccs => assert_eq!(actual_size, 64),
            _ => assert_eq!(actual_size, expected_size, "{} bpb={}", tiling, bpb),
        }
    }

    #[test]
    fn tile_size_invariant() {
        for tiling in [Tiling::Linear, Tiling::X, Tiling::Y0, Tiling::Tile4] {
            for bpb in BPBS {
                check_tile_size(tiling, SurfaceDim::Dim2d, MsaaLayout::None, bpb, 1);
                check_tile_size(tiling, SurfaceDim::Dim3d, MsaaLayout::None, bpb, 1);
            }
        }

        for tiling in TilingFlags::STD_Y.iter().chain([Tiling::Tile64]) {
            for bpb in BPBS {
                check_tile_size(tiling, SurfaceDim::Dim3d, MsaaLayout::None, bpb, 1);

                for samples in SAMPLES {
                    let layouts: &[MsaaLayout] = if samples == 1 {
                        &[MsaaLayout::None]
                    } else {
                        &[MsaaLayout::Array, MsaaLayout::Interleaved]
                    };

                    for &msaa_layout in layouts {
                        check_tile_size(tiling, SurfaceDim::Dim2d, msaa_layout, bpb, samples);
                    }
                }
            }
        }

        check_tile_size(Tiling::W, SurfaceDim::Dim2d, MsaaLayout::None, 8, 1);
        check_tile_size(Tiling::Hiz, SurfaceDim::Dim2d, MsaaLayout::None, 128, 1);
        check_tile_size(Tiling::Ccs, SurfaceDim::Dim2d, MsaaLayout::None, 1, 1);
        check_tile_size(Tiling::Ccs, SurfaceDim::Dim2d, MsaaLayout::None, 2, 1);
        check_tile_size(Tiling::Gfx12Ccs, SurfaceDim::Dim2d, MsaaLayout::None, 4, 1);
    }

    #[test]
    fn multisample_split() {
        // Width and height for 1, 2, 4, 8 and 16 samples, for 128, 64, 32, 16 and 8 bpb.
        const YF: [[(u32, u32); 5]; 5] = [
            [(16, 16), (8, 16), (8, 8), (4, 8), (4, 4)],
            [(32, 16), (16, 16), (16, 8), (8, 8), (8, 4)],
            [(32, 32), (16, 32), (16, 16), (8, 16), (8, 8)],
            [(64, 32), (32, 32), (32, 16), (16, 16), (16, 8)],
            [(64, 64), (32, 64), (32, 32), (16, 32), (16, 16)],
        ];
        const YS: [[(u32, u32); 5]; 5] = [
            [(64, 64), (32, 64), (32, 32), (16, 32), (16, 16)],
            [(128, 64), (64, 64), (64, 32), (32, 32), (32, 16)],
            [(128, 128), (64, 128), (64, 64), (32, 64), (32, 32)],
            [(256, 128), (128, 128), (128, 64), (64, 64), (64, 32)],
            [(256, 256), (128, 256), (128, 128), (64, 128), (64, 64)],
        ];

        for (tiling, table) in [(Tiling::IclYf, &YF), (Tiling::IclYs, &YS), (Tiling::SklYs, &YS)] {
            for (row, bpb) in BPBS.into_iter().enumerate() {
                for (col, samples) in SAMPLES.into_iter().enumerate() {
                    let layout = if samples == 1 {
                        MsaaLayout::None
                    } else {
                        MsaaLayout::Array
                    };
                    let info = tiling.tile_info(SurfaceDim::Dim2d, layout, bpb, samples);
                    let extent = info.logical_extent_el;

                    assert_eq!(
                        (extent.width, extent.height),
                        table[row][col],
                        "{} bpb={} samples={}",
                        tiling,
                        bpb,
                        samples,
                    );
                    assert_eq!(extent.array_len, samples);
                }
            }
        }
    }

    #[test]
    fn skl_yf_keeps_single_sample_tile() {
        let info = Tiling::SklYf.tile_info(SurfaceDim::Dim2d, MsaaLayout::Array, 32, 4);
        assert_eq!(info.logical_extent_el.width, 32);
        assert_eq!(info.logical_extent_el.height, 32);
        assert_eq!(info.logical_extent_el.array_len, 1);
    }

    #[test]
    fn non_power_of_two_elements() {
        let info = Tiling::Y0.tile_info(SurfaceDim::Dim2d, MsaaLayout::None, 96, 1);
        assert_eq!(info.format_bpb, 32);
        assert_eq!(info.logical_extent_el.width, 32);

        assert_should_panic!({
            Tiling::SklYf.tile_info(SurfaceDim::Dim2d, MsaaLayout::None, 96, 1);
        });
    }

    #[test]
    fn miptail_levels() {
        assert_eq!(Tiling::Y0.max_miptail_levels(SurfaceDim::Dim2d, 1), 0);
        assert_eq!(Tiling::SklYs.max_miptail_levels(SurfaceDim::Dim2d, 1), 15);
        assert_eq!(Tiling::SklYf.max_miptail_levels(SurfaceDim::Dim2d, 1), 11);
        assert_eq!(Tiling::SklYs.max_miptail_levels(SurfaceDim::Dim3d, 1), 16);
        assert_eq!(Tiling::IclYf.max_miptail_levels(SurfaceDim::Dim3d, 1), 11);
        assert_eq!(Tiling::Tile64.max_miptail_levels(SurfaceDim::Dim3d, 1), 15);
        assert_eq!(Tiling::Tile64.max_miptail_levels(SurfaceDim::Dim2d, 4), 0);
    }

    #[test]
    fn miptail_offsets() {
        assert_eq!(
            Tiling::SklYs.miptail_level_offset_el(SurfaceDim::Dim2d, 32, 0),
            Offset3D::new(64, 0, 0),
        );
        // Yf starts four rows into the table.
        assert_eq!(
            Tiling::SklYf.miptail_level_offset_el(SurfaceDim::Dim2d, 32, 0),
            Offset3D::new(16, 0, 0),
        );
        assert_eq!(
            Tiling::IclYs.miptail_level_offset_el(SurfaceDim::Dim2d, 8, 14),
            Offset3D::new(0, 12, 0),
        );
        assert_eq!(
            Tiling::Tile64.miptail_level_offset_el(SurfaceDim::Dim3d, 16, 6),
            Offset3D::new(0, 0, 12),
        );
    }

    #[test]
    fn intratile_offset() {
        // Y0 with 32 bpb: 32×32 elements per 4 KiB tile.
        let offset = Tiling::Y0.intratile_offset_el(
            SurfaceDim::Dim2d,
            MsaaLayout::None,
            32,
            1,
            1024,
            0,
            Offset4D::new(70, 40, 0, 0),
        );
        assert_eq!(offset.offset_el, Offset4D::new(6, 8, 0, 0));
        // One tile row down (32 rows × 1024 bytes), two tiles across.
        assert_eq!(offset.tile_offset, 32 * 1024 + 2 * 4096);

        let offset = Tiling::Linear.intratile_offset_el(
            SurfaceDim::Dim2d,
            MsaaLayout::None,
            32,
            1,
            256,
            0,
            Offset4D::new(3, 2, 0, 0),
        );
        assert_eq!(offset.tile_offset, 2 * 256 + 3 * 4);
        assert_eq!(offset.offset_el, Offset4D::default());
    }

    #[test]
    fn intratile_offset_three_component() {
        // 96 bpb elements use a tile three times as wide as the 32 bpb tile.
        let offset = Tiling::Y0.intratile_offset_el(
            SurfaceDim::Dim2d,
            MsaaLayout::None,
            96,
            1,
            384 * 2,
            0,
            Offset4D::new(33, 1, 0, 0),
        );
        assert_eq!(offset.offset_el, Offset4D::new(1, 1, 0, 0));
        assert_eq!(offset.tile_offset, 384 * 32);
    }

    #[test]
    fn flags() {
        assert!(Tiling::Y0.is_any_y());
        assert!(!Tiling::Y0.is_std_y());
        assert!(Tiling::IclYs.is_std_y());
        assert!(!Tiling::Tile4.is_any_y());
        assert_eq!(TilingFlags::from(Tiling::X), TilingFlags::X);
        assert_eq!(
            TilingFlags::STD_Y.iter().collect::<Vec<_>>(),
            [Tiling::SklYf, Tiling::SklYs, Tiling::IclYf, Tiling::IclYs],
        );
        assert_eq!(Tiling::Gfx12Ccs.to_string(), "gfx12-ccs");
        assert_eq!(Tiling::try_from(9u8), Ok(Tiling::Tile64));
    }
}
