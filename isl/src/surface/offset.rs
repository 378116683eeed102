// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use super::{DimLayout, MsaaLayout, Surface, SurfaceCreateInfo, SurfaceDim, SurfaceUsage};
use crate::{
    device::Device,
    extent::{align, align_div_npot, align_npot, minify},
    format::Format,
    tiling::{IntratileOffset, Tiling},
    DeviceSize, Extent4D, Offset4D, ValidationError,
};

/// The position of a subimage, split into the byte offset of the tile that contains its origin
/// and the position of the origin inside that tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageTileOffset {
    /// Offset in bytes from the start of the surface to the start of the tile.
    pub offset: DeviceSize,

    pub x: u32,

    pub y: u32,
}

/// A block-compressed surface seen through an uncompressed format with the same block size.
///
/// Each compression block of the original surface is one element of `surface`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UncompressedSurface {
    pub surface: Surface,

    /// The level of `surface` that holds the requested level.
    pub level: u32,

    /// The array layer of `surface` that holds the requested base layer.
    pub base_array_layer: u32,

    /// Where `surface` starts in the memory of the original surface.
    pub offset: ImageTileOffset,
}

impl Surface {
    /// Returns the offset of the subimage at (`level`, `layer`, `z`), in samples.
    ///
    /// Depending on the layout, the `z` and `array` members of the result are either zero or
    /// select a slice of the tiling.
    ///
    /// # Panics
    ///
    /// - Panics if `level` is not less than the number of levels.
    /// - Panics if `layer` is not less than the number of array layers.
    /// - Panics if `z` is not less than the depth of `level`.
    pub fn image_offset_sa(&self, level: u32, layer: u32, z: u32) -> Offset4D {
        assert!(level < self.levels);
        assert!(layer < self.logical_level0_px.array_len);
        assert!(z < minify(self.logical_level0_px.depth, level));

        match self.dim_layout {
            DimLayout::Gfx9_1d => self.image_offset_sa_gfx9_1d(level, layer),
            DimLayout::Gfx4_2d => self.image_offset_sa_gfx4_2d(level, layer + z),
            DimLayout::Gfx4_3d => self.image_offset_sa_gfx4_3d(level, layer + z),
            DimLayout::Gfx6StencilHiz => self.image_offset_sa_gfx6_stencil_hiz(level, layer + z),
        }
    }

    /// Returns the offset of the subimage at (`level`, `layer`, `z`), in elements.
    ///
    /// # Panics
    ///
    /// - Panics under the same conditions as [`image_offset_sa`](Self::image_offset_sa).
    pub fn image_offset_el(&self, level: u32, layer: u32, z: u32) -> Offset4D {
        let layout = self.format.layout();
        let offset_sa = self.image_offset_sa(level, layer, z);

        debug_assert!(offset_sa.x % layout.bw as u32 == 0);
        debug_assert!(offset_sa.y % layout.bh as u32 == 0);
        debug_assert!(offset_sa.z % layout.bd as u32 == 0);

        Offset4D::new(
            offset_sa.x / layout.bw as u32,
            offset_sa.y / layout.bh as u32,
            offset_sa.z / layout.bd as u32,
            offset_sa.array,
        )
    }

    /// Returns the byte offset of the tile containing the subimage at (`level`, `layer`, `z`),
    /// and the position of the subimage inside the tile, in elements.
    ///
    /// For a level in the miptail, the offset is that of the miptail and the position is zero.
    ///
    /// # Panics
    ///
    /// - Panics under the same conditions as [`image_offset_sa`](Self::image_offset_sa).
    /// - Panics if `level` is in the miptail but is not its first level.
    pub fn image_offset_tile_el(&self, level: u32, layer: u32, z: u32) -> ImageTileOffset {
        let intratile = self.intratile_offset(self.image_offset_el(level, layer, z));

        if level >= self.miptail_start_level {
            // The hardware offsets into the miptail itself.
            assert_eq!(
                level, self.miptail_start_level,
                "cannot offset into the middle of a miptail",
            );

            return ImageTileOffset {
                offset: intratile.tile_offset,
                x: 0,
                y: 0,
            };
        }

        assert!(intratile.offset_el.z == 0 && intratile.offset_el.array == 0);

        ImageTileOffset {
            offset: intratile.tile_offset,
            x: intratile.offset_el.x,
            y: intratile.offset_el.y,
        }
    }

    /// Same as [`image_offset_tile_el`](Self::image_offset_tile_el), but the position inside the
    /// tile is in samples.
    pub fn image_offset_tile_sa(&self, level: u32, layer: u32, z: u32) -> ImageTileOffset {
        let layout = self.format.layout();
        let offset = self.image_offset_tile_el(level, layer, z);

        ImageTileOffset {
            offset: offset.offset,
            x: offset.x * layout.bw as u32,
            y: offset.y * layout.bh as u32,
        }
    }

    /// Returns the range of bytes covered by the tiles that hold the subimage at
    /// (`level`, `layer`, `z`). The end of the range is exclusive.
    ///
    /// Only one Z slice or array layer is considered. The range may include bytes of other
    /// subimages that share tiles with this one.
    pub fn image_range_tile(&self, level: u32, layer: u32, z: u32) -> (DeviceSize, DeviceSize) {
        let layout = self.format.layout();
        let start_el = self.image_offset_el(level, layer, z);

        let subimage_w_el = align_div_npot(minify(self.phys_level0_sa.width, level), layout.bw as u32);
        let subimage_h_el =
            align_div_npot(minify(self.phys_level0_sa.height, level), layout.bh as u32);

        let last_el = Offset4D::new(
            start_el.x + subimage_w_el - 1,
            start_el.y + subimage_h_el - 1,
            start_el.z,
            start_el.array,
        );

        let start = self.intratile_offset(start_el).tile_offset;
        // The tile holding the last element is included.
        let end = self.intratile_offset(last_el).tile_offset + 1;
        debug_assert!(end <= self.size);

        (start, end)
    }

    /// Creates a single-level, single-layer 2D surface that aliases the subimage at
    /// (`level`, `layer`, `z`), and returns it along with the offset at which it starts.
    ///
    /// The new surface has the same format, tiling, sample count and row pitch as `self`, so
    /// that it can be bound at `offset.offset` bytes into the memory of `self`. The subimage
    /// starts `offset.x` and `offset.y` samples into the new surface.
    pub fn image_surface(
        &self,
        device: &Device,
        level: u32,
        layer: u32,
        z: u32,
    ) -> Result<(Surface, ImageTileOffset), Box<ValidationError>> {
        let offset = self.image_offset_tile_sa(level, layer, z);

        // A single face of a cube map is not a cube map.
        let usage = self.usage - SurfaceUsage::CUBE;

        let surface = Surface::new(
            device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim2d,
                format: self.format,
                extent: [
                    minify(self.logical_level0_px.width, level),
                    minify(self.logical_level0_px.height, level),
                    1,
                ],
                levels: 1,
                array_len: 1,
                samples: self.samples,
                usage,
                tiling_flags: self.tiling.flag(),
                row_pitch: self.row_pitch,
                ..Default::default()
            },
        )?;

        Ok((surface, offset))
    }

    /// Creates a surface that aliases one level of `self`, a block-compressed surface, with the
    /// uncompressed `view_format`. The view covers `array_len` layers (or Z slices of a 3D
    /// surface) starting at `base_array_layer`.
    ///
    /// The new surface is bound `offset.offset` bytes into the memory of `self`, and the level
    /// starts `offset.x` and `offset.y` elements into it.
    ///
    /// Returns an error if `self` is not compressed, if `view_format` is compressed or has a
    /// different block size, or if the view cannot be expressed on `device`. Levels other than
    /// the first can only be viewed one layer at a time, except with the standard Y and Tile64
    /// tilings. Before gfx9, only one layer can be viewed at a time.
    ///
    /// # Panics
    ///
    /// - Panics if `level` is not less than the number of levels.
    /// - Panics if `array_len` is zero.
    pub fn uncompressed_surface(
        &self,
        device: &Device,
        view_format: Format,
        level: u32,
        base_array_layer: u32,
        array_len: u32,
    ) -> Result<UncompressedSurface, Box<ValidationError>> {
        let layout = self.format.layout();

        if !self.format.is_compressed() {
            return Err(Box::new(ValidationError {
                context: "self.format()".into(),
                problem: "is not a compressed format".into(),
            }));
        }

        if view_format.is_compressed() {
            return Err(Box::new(ValidationError {
                context: "view_format".into(),
                problem: "is a compressed format".into(),
            }));
        }

        if view_format.layout().bpb != layout.bpb {
            return Err(Box::new(ValidationError {
                context: "view_format".into(),
                problem: format!(
                    "has {} bits per block, but `self.format()` has {}",
                    view_format.layout().bpb,
                    layout.bpb,
                )
                .into(),
            }));
        }

        if self.samples != 1 {
            return Err(Box::new(ValidationError {
                context: "self.samples()".into(),
                problem: "is not 1".into(),
            }));
        }

        if layout.bd != 1 {
            return Err(Box::new(ValidationError {
                context: "self.format()".into(),
                problem: "has three-dimensional blocks".into(),
            }));
        }

        assert!(level < self.levels);
        assert!(array_len > 0);

        let view_width_el =
            align_div_npot(minify(self.logical_level0_px.width, level), layout.bw as u32);
        let view_height_el =
            align_div_npot(minify(self.logical_level0_px.height, level), layout.bh as u32);

        if self.tiling.is_std_y() || self.tiling == Tiling::Tile64 {
            // Layers and slices are addressed through the tiling. A level in the miptail is
            // reached from the start of the miptail, whose slot offsets are fixed by the tiling.
            let base_level = level.min(self.miptail_start_level);
            let offset = self.image_offset_tile_el(base_level, 0, 0);
            debug_assert!(offset.x == 0 && offset.y == 0);

            let view_depth_el = minify(self.logical_level0_px.depth, level);
            let ucompr_level = level - base_level;

            // Grow the view so that it minifies back to its own size at `ucompr_level`. A
            // dimension of 1 stays 1, so that a 2D surface does not become 3D.
            let grow = |extent_el: u32| {
                if extent_el > 1 {
                    extent_el << ucompr_level
                } else {
                    1
                }
            };

            let mut surface = Surface::new(
                device,
                SurfaceCreateInfo {
                    dim: self.dim,
                    format: view_format,
                    extent: [
                        grow(view_width_el),
                        grow(view_height_el),
                        grow(view_depth_el),
                    ],
                    levels: ucompr_level + 1,
                    array_len: self.logical_level0_px.array_len,
                    samples: self.samples,
                    usage: self.usage,
                    tiling_flags: self.tiling.flag(),
                    row_pitch: self.row_pitch,
                    min_miptail_start_level: (level < self.miptail_start_level) as u32,
                    ..Default::default()
                },
            )?;

            // Layers keep the pitch of the original surface.
            debug_assert!(surface.array_pitch_el_rows <= self.array_pitch_el_rows);
            surface.array_pitch_el_rows = self.array_pitch_el_rows;

            return Ok(UncompressedSurface {
                surface,
                level: ucompr_level,
                base_array_layer,
                offset,
            });
        }

        if array_len > 1 {
            // The surface offsets must be zero when the surface is an array.
            if level > 0 {
                return Err(Box::new(ValidationError {
                    context: "level".into(),
                    problem: "is not 0, but `array_len` is greater than 1".into(),
                }));
            }

            // Before gfx9 the hardware derives the array pitch from the format, which changes
            // here.
            if device.ver() < 9 {
                return Err(Box::new(ValidationError {
                    context: "array_len".into(),
                    problem: format!(
                        "is greater than 1, but uncompressed views of arrays are not supported \
                        on {}",
                        device.version(),
                    )
                    .into(),
                }));
            }

            let mut surface = self.clone();
            surface.format = view_format;
            surface.levels = 1;
            surface.miptail_start_level = surface.miptail_start_level.min(1);
            surface.logical_level0_px.width = view_width_el;
            surface.logical_level0_px.height = view_height_el;
            surface.phys_level0_sa = Extent4D::new(
                align_div_npot(self.phys_level0_sa.width, layout.bw as u32),
                align_div_npot(self.phys_level0_sa.height, layout.bh as u32),
                self.phys_level0_sa.depth,
                self.phys_level0_sa.array_len,
            );

            return Ok(UncompressedSurface {
                surface,
                level: 0,
                base_array_layer,
                offset: ImageTileOffset::default(),
            });
        }

        let (layer, z) = if self.dim == SurfaceDim::Dim3d {
            (0, base_array_layer)
        } else {
            (base_array_layer, 0)
        };
        let offset = self.image_offset_tile_el(level, layer, z);

        // A single face of a cube map is not a cube map.
        let usage = self.usage - SurfaceUsage::CUBE;

        let surface = Surface::new(
            device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim2d,
                format: view_format,
                extent: [view_width_el, view_height_el, 1],
                levels: 1,
                array_len: 1,
                samples: 1,
                usage,
                tiling_flags: self.tiling.flag(),
                row_pitch: self.row_pitch,
                ..Default::default()
            },
        )?;

        Ok(UncompressedSurface {
            surface,
            level: 0,
            base_array_layer: 0,
            offset,
        })
    }

    fn intratile_offset(&self, total_offset_el: Offset4D) -> IntratileOffset {
        self.tiling.intratile_offset_el(
            self.dim,
            self.msaa_layout,
            self.format.layout().bpb as u32,
            self.samples,
            self.row_pitch,
            self.array_pitch_el_rows,
            total_offset_el,
        )
    }

    fn image_offset_sa_gfx4_2d(&self, level: u32, logical_array_layer: u32) -> Offset4D {
        let layout = self.format.layout();
        let image_alignment_sa = self.image_alignment_sa();

        let w0 = self.phys_level0_sa.width;
        let h0 = self.phys_level0_sa.height;

        let phys_layer = if self.msaa_layout == MsaaLayout::Array {
            logical_array_layer * self.samples
        } else {
            logical_array_layer
        };

        let mut offset = if self.tiling.is_std_y() || self.tiling == Tiling::Tile64 {
            // Slices and layers are addressed through the tiling.
            if self.dim == SurfaceDim::Dim3d {
                Offset4D::new(0, 0, phys_layer, 0)
            } else {
                Offset4D::new(0, 0, 0, phys_layer)
            }
        } else {
            Offset4D::new(0, phys_layer * self.array_pitch_sa_rows(), 0, 0)
        };

        for l in 0..level.min(self.miptail_start_level) {
            if l == 1 {
                offset.x += align_npot(minify(w0, l), image_alignment_sa.width);
            } else {
                offset.y += align_npot(minify(h0, l), image_alignment_sa.height);
            }
        }

        if level >= self.miptail_start_level {
            let miptail_offset_el = self.tiling.miptail_level_offset_el(
                self.dim,
                layout.bpb as u32,
                level - self.miptail_start_level,
            );

            offset.x += miptail_offset_el.x * layout.bw as u32;
            offset.y += miptail_offset_el.y * layout.bh as u32;
            offset.z += miptail_offset_el.z * layout.bd as u32;
        }

        offset
    }

    fn image_offset_sa_gfx4_3d(&self, level: u32, logical_z_offset_px: u32) -> Offset4D {
        let image_alignment_sa = self.image_alignment_sa();

        let w0 = self.phys_level0_sa.width;
        let h0 = self.phys_level0_sa.height;
        let level_depth = |l: u32| {
            let d = if self.dim == SurfaceDim::Dim3d {
                minify(self.phys_level0_sa.depth, l)
            } else {
                self.phys_level0_sa.array_len
            };

            align_npot(d, image_alignment_sa.depth)
        };

        let mut y = 0;

        for l in 0..level {
            let level_h = align_npot(minify(h0, l), image_alignment_sa.height);
            let max_layers_vert = align(level_depth(l), 1 << l) >> l;

            y += level_h * max_layers_vert;
        }

        let level_w = align_npot(minify(w0, level), image_alignment_sa.width);
        let level_h = align_npot(minify(h0, level), image_alignment_sa.height);
        let max_layers_horiz = level_depth(level).min(1 << level);

        Offset4D::new(
            level_w * (logical_z_offset_px % max_layers_horiz),
            y + level_h * (logical_z_offset_px / max_layers_horiz),
            0,
            0,
        )
    }

    fn image_offset_sa_gfx6_stencil_hiz(&self, level: u32, logical_array_layer: u32) -> Offset4D {
        let layout = self.format.layout();
        let image_alignment_sa = self.image_alignment_sa();
        let tile = self.tile_info().logical_extent_el;
        let tile_w_sa = tile.width * layout.bw as u32;
        let tile_h_sa = tile.height * layout.bh as u32;

        let w0 = self.phys_level0_sa.width;
        let h = align(self.phys_level0_sa.height, image_alignment_sa.height);

        let mut x = 0;
        let mut y = 0;

        for l in 0..level {
            if l == 0 {
                y += align(h * self.phys_level0_sa.array_len, tile_h_sa);
            } else {
                x += align(minify(w0, l), tile_w_sa);
            }
        }

        Offset4D::new(x, y + h * logical_array_layer, 0, 0)
    }

    fn image_offset_sa_gfx9_1d(&self, level: u32, layer: u32) -> Offset4D {
        let image_alignment_sa = self.image_alignment_sa();

        let x = (0..level)
            .map(|l| align_npot(minify(self.phys_level0_sa.width, l), image_alignment_sa.width))
            .sum();

        Offset4D::new(x, layer * self.array_pitch_sa_rows(), 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::ImageTileOffset;
    use crate::{
        format::Format,
        surface::{Surface, SurfaceCreateInfo, SurfaceDim, SurfaceUsage},
        tiling::{Tiling, TilingFlags},
        Offset4D,
    };

    fn rgba8(dim: SurfaceDim, extent: [u32; 3], levels: u32) -> SurfaceCreateInfo {
        SurfaceCreateInfo {
            dim,
            format: Format::R8G8B8A8_UNORM,
            extent,
            levels,
            usage: SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX,
            ..Default::default()
        }
    }

    #[test]
    fn gfx4_2d_levels() {
        let device = gfx_device!(8);
        let surface = Surface::new(&device, rgba8(SurfaceDim::Dim2d, [512, 512, 1], 10)).unwrap();

        let expected = [
            (0, 0),
            (0, 512),
            (256, 512),
            (256, 640),
            (256, 704),
            (256, 736),
            (256, 752),
            (256, 760),
            (256, 764),
            (256, 768),
        ];

        for (level, &(x, y)) in expected.iter().enumerate() {
            assert_eq!(
                surface.image_offset_el(level as u32, 0, 0),
                Offset4D::new(x, y, 0, 0),
                "level {}",
                level,
            );
        }
    }

    #[test]
    fn gfx4_3d_slices() {
        let device = gfx_device!(8);
        let surface =
            Surface::new(&device, rgba8(SurfaceDim::Dim3d, [256, 256, 256], 9)).unwrap();

        // (level, z, x, y)
        let expected = [
            (0, 0, 0, 0),
            (0, 1, 0, 256),
            (0, 255, 0, 65280),
            (1, 0, 0, 65536),
            (1, 1, 128, 65536),
            (1, 2, 0, 65664),
            (2, 5, 64, 73792),
            (3, 7, 224, 74752),
            (4, 15, 240, 74880),
            (5, 7, 56, 74896),
            (8, 0, 0, 74912),
        ];

        for &(level, z, x, y) in &expected {
            assert_eq!(
                surface.image_offset_el(level, 0, z),
                Offset4D::new(x, y, 0, 0),
                "level {} slice {}",
                level,
                z,
            );
        }
    }

    #[test]
    fn gfx6_stencil_levels() {
        let device = gfx_device!(6);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::R8_UINT,
                extent: [64, 64, 1],
                levels: 3,
                array_len: 2,
                usage: SurfaceUsage::STENCIL,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(surface.image_offset_sa(0, 1, 0), Offset4D::new(0, 64, 0, 0));
        assert_eq!(surface.image_offset_sa(1, 1, 0), Offset4D::new(0, 192, 0, 0));
        assert_eq!(surface.image_offset_sa(2, 0, 0), Offset4D::new(64, 128, 0, 0));
    }

    #[test]
    fn gfx9_1d_levels() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                array_len: 4,
                ..rgba8(SurfaceDim::Dim1d, [100, 1, 1], 3)
            },
        )
        .unwrap();

        assert_eq!(surface.image_offset_sa(2, 3, 0), Offset4D::new(192, 3, 0, 0));
    }

    #[test]
    fn array_layers() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                array_len: 3,
                ..rgba8(SurfaceDim::Dim2d, [64, 64, 1], 1)
            },
        )
        .unwrap();

        assert_eq!(surface.array_pitch_el_rows(), 64);
        assert_eq!(surface.image_offset_el(0, 2, 0), Offset4D::new(0, 128, 0, 0));

        // Layers are whole rows of tiles apart.
        let offset = surface.image_offset_tile_el(0, 2, 0);
        assert_eq!(
            offset,
            ImageTileOffset {
                offset: 128 / 32 * surface.row_pitch() as u64 * 32,
                x: 0,
                y: 0,
            },
        );
    }

    #[test]
    fn tile_offsets() {
        let device = gfx_device!(8);
        let surface = Surface::new(&device, rgba8(SurfaceDim::Dim2d, [512, 512, 1], 10)).unwrap();
        assert_eq!(surface.tiling(), Tiling::Y0);

        // Level 3 starts at (256, 640): tile column 8 of tile row 20.
        let offset = surface.image_offset_tile_el(3, 0, 0);
        assert_eq!(
            offset,
            ImageTileOffset {
                offset: 20 * 32 * 2048 + 8 * 4096,
                x: 0,
                y: 0,
            },
        );

        // Level 5 starts at (256, 736): 0 rows into tile row 23.
        assert_eq!(surface.image_offset_tile_el(5, 0, 0).offset, 23 * 32 * 2048 + 8 * 4096);

        // Level 6 starts at (256, 752): 16 rows into tile row 23.
        let offset = surface.image_offset_tile_el(6, 0, 0);
        assert_eq!(offset.offset, 23 * 32 * 2048 + 8 * 4096);
        assert_eq!((offset.x, offset.y), (0, 16));
    }

    #[test]
    fn compressed_tile_offsets() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::BC1_UNORM,
                extent: [256, 256, 1],
                levels: 3,
                usage: SurfaceUsage::TEXTURE,
                tiling_flags: TilingFlags::Y0,
                ..Default::default()
            },
        )
        .unwrap();

        // Level 1 starts 64 blocks down, two full tile rows of 32 blocks.
        let el = surface.image_offset_tile_el(1, 0, 0);
        let sa = surface.image_offset_tile_sa(1, 0, 0);
        assert_eq!(el.offset, sa.offset);
        assert_eq!((el.x, el.y), (0, 0));
        assert_eq!(surface.image_offset_sa(1, 0, 0), Offset4D::new(0, 256, 0, 0));
        assert_eq!(surface.image_offset_el(1, 0, 0), Offset4D::new(0, 64, 0, 0));
    }

    #[test]
    fn image_range() {
        let device = gfx_device!(8);
        let surface = Surface::new(&device, rgba8(SurfaceDim::Dim2d, [512, 512, 1], 10)).unwrap();

        let (start, end) = surface.image_range_tile(0, 0, 0);
        assert_eq!(start, 0);
        // The last element of level 0 is in the last tile of tile row 15.
        assert_eq!(end, 15 * 32 * 2048 + 15 * 4096 + 1);

        let (start, end) = surface.image_range_tile(1, 0, 0);
        assert_eq!(start, 16 * 32 * 2048);
        assert_eq!(end, 23 * 32 * 2048 + 7 * 4096 + 1);
        assert!(end <= surface.size());
    }

    #[test]
    fn image_surface() {
        let device = gfx_device!(8);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                array_len: 6,
                usage: SurfaceUsage::TEXTURE | SurfaceUsage::CUBE | SurfaceUsage::DISABLE_AUX,
                ..rgba8(SurfaceDim::Dim2d, [512, 512, 1], 10)
            },
        )
        .unwrap();

        let (image, offset) = surface.image_surface(&device, 1, 2, 0).unwrap();

        assert_eq!(image.levels(), 1);
        assert_eq!(image.logical_level0_px().width, 256);
        assert_eq!(image.tiling(), surface.tiling());
        assert_eq!(image.row_pitch(), surface.row_pitch());
        assert!(!image.usage().intersects(SurfaceUsage::CUBE));

        // Layer 2 starts 2 * 772 rows down and level 1 another 512 rows, 8 rows into tile row 64.
        assert_eq!(surface.array_pitch_el_rows(), 772);
        assert_eq!(offset.offset, 64 * 32 * 2048);
        assert_eq!((offset.x, offset.y), (0, 8));
    }

    fn bc1(
        extent: [u32; 3],
        levels: u32,
        array_len: u32,
        tiling_flags: TilingFlags,
    ) -> SurfaceCreateInfo {
        SurfaceCreateInfo {
            format: Format::BC1_UNORM,
            extent,
            levels,
            array_len,
            usage: SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX,
            tiling_flags,
            ..Default::default()
        }
    }

    #[test]
    fn uncompressed_single_layer() {
        let device = gfx_device!(9);
        let surface = Surface::new(&device, bc1([256, 256, 1], 9, 1, TilingFlags::Y0)).unwrap();

        let view = surface
            .uncompressed_surface(&device, Format::R16G16B16A16_UINT, 2, 0, 1)
            .unwrap();

        // Level 2 is 64×64 pixels, or 16×16 blocks.
        assert_eq!(view.surface.format(), Format::R16G16B16A16_UINT);
        assert_eq!(view.surface.logical_level0_px().width, 16);
        assert_eq!(view.surface.logical_level0_px().height, 16);
        assert_eq!(view.surface.levels(), 1);
        assert_eq!(view.surface.tiling(), Tiling::Y0);
        assert_eq!(view.surface.row_pitch(), surface.row_pitch());
        assert_eq!((view.level, view.base_array_layer), (0, 0));
        assert_eq!(view.offset, surface.image_offset_tile_el(2, 0, 0));
    }

    #[test]
    fn uncompressed_array() {
        let device = gfx_device!(9);
        let surface = Surface::new(&device, bc1([128, 128, 1], 4, 6, TilingFlags::Y0)).unwrap();

        let view = surface
            .uncompressed_surface(&device, Format::R32G32_UINT, 0, 2, 4)
            .unwrap();

        assert_eq!(view.surface.format(), Format::R32G32_UINT);
        assert_eq!(view.surface.levels(), 1);
        assert_eq!(view.surface.logical_level0_px().width, 32);
        assert_eq!(view.surface.logical_level0_px().array_len, 6);
        assert_eq!(view.surface.array_pitch_el_rows(), surface.array_pitch_el_rows());
        assert_eq!(view.surface.row_pitch(), surface.row_pitch());
        assert_eq!((view.level, view.base_array_layer), (0, 2));
        assert_eq!(view.offset, ImageTileOffset::default());

        // Arrays of a smaller level would need a nonzero offset.
        assert!(surface
            .uncompressed_surface(&device, Format::R32G32_UINT, 1, 0, 2)
            .is_err());

        // A single layer of it is fine.
        assert!(surface
            .uncompressed_surface(&device, Format::R32G32_UINT, 1, 3, 1)
            .is_ok());

        let device = gfx_device!(8);
        let surface = Surface::new(&device, bc1([128, 128, 1], 4, 6, TilingFlags::Y0)).unwrap();
        assert!(surface
            .uncompressed_surface(&device, Format::R32G32_UINT, 0, 0, 6)
            .is_err());
    }

    #[test]
    fn uncompressed_tile64() {
        let device = gfx_device!(12, 5);
        let surface =
            Surface::new(&device, bc1([1024, 1024, 1], 3, 2, TilingFlags::TILE_64)).unwrap();
        assert_eq!(surface.tiling(), Tiling::Tile64);
        assert!(surface.miptail_start_level() > 1);

        let view = surface
            .uncompressed_surface(&device, Format::R16G16B16A16_UINT, 1, 1, 1)
            .unwrap();

        // Layers stay addressed through the tiling, with the original array pitch.
        assert_eq!(view.surface.tiling(), Tiling::Tile64);
        assert_eq!(view.surface.levels(), 1);
        assert_eq!(view.surface.logical_level0_px().width, 128);
        assert_eq!(view.surface.logical_level0_px().array_len, 2);
        assert_eq!(view.surface.array_pitch_el_rows(), surface.array_pitch_el_rows());
        assert_eq!((view.level, view.base_array_layer), (0, 1));
        assert_eq!(view.offset, surface.image_offset_tile_el(1, 0, 0));
    }

    #[test]
    fn uncompressed_rejections() {
        let device = gfx_device!(9);

        let surface = Surface::new(&device, rgba8(SurfaceDim::Dim2d, [64, 64, 1], 1)).unwrap();
        let err = surface
            .uncompressed_surface(&device, Format::R32_UINT, 0, 0, 1)
            .unwrap_err();
        assert_eq!(err.context, "self.format()");

        let surface = Surface::new(&device, bc1([64, 64, 1], 1, 1, TilingFlags::Y0)).unwrap();
        let err = surface
            .uncompressed_surface(&device, Format::BC1_UNORM, 0, 0, 1)
            .unwrap_err();
        assert_eq!(err.context, "view_format");

        // 32 bits per block against the 64 of BC1.
        let err = surface
            .uncompressed_surface(&device, Format::R32_UINT, 0, 0, 1)
            .unwrap_err();
        assert_eq!(err.context, "view_format");
    }
}
