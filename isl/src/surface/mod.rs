// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The physical layout of images in memory.
//!
//! A [`Surface`] is created from a [`SurfaceCreateInfo`], which describes an image logically: its
//! dimensionality, format, extent, number of mip levels, array layers and samples, and what it will
//! be used for. Creating the surface chooses a tiling, a multisample layout and the alignment of
//! each subimage, and computes the row pitch, array pitch and total size that the hardware
//! generation of the [`Device`] requires.
//!
//! ```
//! use isl::device::{Device, DeviceCreateInfo};
//! use isl::format::Format;
//! use isl::surface::{Surface, SurfaceCreateInfo, SurfaceUsage};
//! use isl::tiling::Tiling;
//! use isl::Version;
//!
//! let device = Device::new(DeviceCreateInfo {
//!     version: Version::GFX9,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let surface = Surface::new(
//!     &device,
//!     SurfaceCreateInfo {
//!         format: Format::R8G8B8A8_UNORM,
//!         extent: [256, 256, 1],
//!         levels: 9,
//!         usage: SurfaceUsage::TEXTURE | SurfaceUsage::RENDER_TARGET,
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(surface.tiling(), Tiling::Y0);
//! assert_eq!(surface.row_pitch() % 128, 0);
//! ```
//!
//! # Units
//!
//! Quantities are measured in one of four units, which appear as a suffix of the method that
//! returns them:
//!
//! - `_px`: logical pixels, as seen by a shader.
//! - `_sa`: physical samples. For interleaved multisampled surfaces, one pixel covers several
//!   samples in each direction. Otherwise samples and pixels are the same.
//! - `_el`: format elements. For block-compressed formats, one element covers a block of samples.
//! - `_tl`: tiles.
//!
//! Sizes and offsets without a suffix are in bytes.

pub use self::{
    aux_surface::DepthFormat,
    layout::interleaved_msaa_px_size_sa,
    offset::{ImageTileOffset, UncompressedSurface},
};
use crate::{
    device::Device,
    extent::minify,
    format::Format,
    tiling::{TileInfo, Tiling, TilingFlags},
    DeviceSize, Extent3D, Extent4D, ValidationError,
};

mod aux_surface;
mod gfx;
mod layout;
mod offset;

isl_bitflags! {
    /// A set of sample counts.
    SampleCounts impl {
        /// Returns whether `self` contains the sample count `samples`.
        #[inline]
        pub const fn contains_count(self, samples: u32) -> bool {
            samples.is_power_of_two() && samples <= 16 && self.0 & samples != 0
        }
    }
    = u32;

    SAMPLE_1 = 1,
    SAMPLE_2 = 2,
    SAMPLE_4 = 4,
    SAMPLE_8 = 8,
    SAMPLE_16 = 16,
}

isl_bitflags! {
    /// Describes how a surface is going to be used.
    SurfaceUsage = u32;

    /// The surface will be rendered to.
    RENDER_TARGET = 1 << 0,

    /// The surface will be used as a depth buffer.
    DEPTH = 1 << 1,

    /// The surface will be used as a stencil buffer.
    STENCIL = 1 << 2,

    /// The surface will be sampled from.
    TEXTURE = 1 << 3,

    /// The surface holds the faces of one or more cube maps.
    CUBE = 1 << 4,

    /// The surface will never have an auxiliary surface.
    DISABLE_AUX = 1 << 5,

    /// The surface will be scanned out by the display engine.
    DISPLAY = 1 << 6,

    /// The surface will be read and written as a storage image.
    STORAGE = 1 << 7,

    /// The surface is a hierarchical depth buffer.
    HIZ = 1 << 8,

    /// The surface is a multisample control surface.
    MCS = 1 << 9,

    /// The surface is a color control surface.
    CCS = 1 << 10,

    VERTEX_BUFFER = 1 << 11,
    INDEX_BUFFER = 1 << 12,
    CONSTANT_BUFFER = 1 << 13,
    STAGING = 1 << 14,

    /// The surface is bound to memory in 64 KiB pages that may be missing.
    SPARSE = 1 << 15,
}

impl SurfaceUsage {
    #[inline]
    pub(crate) const fn is_depth_or_stencil(self) -> bool {
        self.intersects(SurfaceUsage::DEPTH.union(SurfaceUsage::STENCIL))
    }

    /// Returns whether the surface must be addressable by the display engine.
    #[inline]
    pub(crate) const fn is_display(self) -> bool {
        self.intersects(SurfaceUsage::DISPLAY)
    }
}

isl_enum! {
    /// The logical dimensionality of a surface.
    SurfaceDim = u8;

    Dim1d = 0,
    Dim2d = 1,
    Dim3d = 2,
}

isl_enum! {
    /// How the logical levels, layers and slices of a surface are arranged in memory.
    DimLayout = u8;

    /// Every array layer (or 3D slice) is a separate two-dimensional image, each laid out as:
    ///
    /// ```text
    /// +---------------+
    /// |               |
    /// |    level 0    |
    /// |               |
    /// +-------+-------+
    /// |   l1  | l2 |
    /// |       +----+
    /// |       |l3|
    /// +-------+--+
    /// ```
    ///
    /// Layers are stacked vertically, one array pitch apart.
    Gfx4_2d = 0,

    /// The slices of each level of a 3D surface are placed side by side, up to `1 << level` per
    /// row, and the levels are stacked vertically. Cube maps use this layout on gfx4.
    Gfx4_3d = 1,

    /// The layout of separate stencil and HiZ surfaces on gfx6. Each level holds all its array
    /// layers and is aligned to whole tiles. Level 0 sits at the top, the remaining levels sit side
    /// by side below it.
    Gfx6StencilHiz = 2,

    /// Linear one-dimensional surfaces on gfx9 and newer. Levels are placed side by side in a
    /// single row, and array layers are stacked vertically.
    Gfx9_1d = 3,
}

isl_enum! {
    /// How the samples of a multisampled surface are arranged.
    MsaaLayout = u8;

    /// The surface is single-sampled.
    None = 0,

    /// The samples of each pixel are stored next to each other, as if the surface was larger.
    Interleaved = 1,

    /// Each sample is stored in a separate array slice.
    Array = 2,
}

isl_enum! {
    /// How far apart two consecutive array layers are.
    ArrayPitchSpan = u8;

    /// The array pitch is large enough to hold every level, each aligned independently, whether
    /// or not the surface has that many levels.
    Full = 0,

    /// The array pitch is as small as it can be for the levels the surface actually has.
    Compact = 1,
}

/// The physical layout of an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    dim: SurfaceDim,
    dim_layout: DimLayout,
    msaa_layout: MsaaLayout,
    tiling: Tiling,
    format: Format,

    levels: u32,
    samples: u32,

    image_alignment_el: Extent3D,
    logical_level0_px: Extent4D,
    phys_level0_sa: Extent4D,

    size: DeviceSize,
    alignment: DeviceSize,
    row_pitch: u32,
    array_pitch_el_rows: u32,
    array_pitch_span: ArrayPitchSpan,
    miptail_start_level: u32,

    usage: SurfaceUsage,
}

impl Surface {
    /// Lays out a new surface.
    ///
    /// Returns an error if `create_info` is not valid, or if it describes a surface that cannot
    /// be laid out on `device`.
    pub fn new(
        device: &Device,
        create_info: SurfaceCreateInfo,
    ) -> Result<Surface, Box<ValidationError>> {
        Self::validate_new(device, &create_info)?;

        layout::surface_layout(device, &create_info)
            .map_err(|err| err.add_context("create_info"))
    }

    fn validate_new(
        device: &Device,
        create_info: &SurfaceCreateInfo,
    ) -> Result<(), Box<ValidationError>> {
        create_info
            .validate(device)
            .map_err(|err| err.add_context("create_info"))?;

        Ok(())
    }

    /// Returns the dimensionality of the surface.
    #[inline]
    pub fn dim(&self) -> SurfaceDim {
        self.dim
    }

    #[inline]
    pub fn dim_layout(&self) -> DimLayout {
        self.dim_layout
    }

    #[inline]
    pub fn msaa_layout(&self) -> MsaaLayout {
        self.msaa_layout
    }

    /// Returns the tiling that was chosen for the surface.
    #[inline]
    pub fn tiling(&self) -> Tiling {
        self.tiling
    }

    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the number of mip levels.
    #[inline]
    pub fn levels(&self) -> u32 {
        self.levels
    }

    #[inline]
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Returns the alignment of each subimage, in elements.
    #[inline]
    pub fn image_alignment_el(&self) -> Extent3D {
        self.image_alignment_el
    }

    /// Returns the alignment of each subimage, in samples.
    #[inline]
    pub fn image_alignment_sa(&self) -> Extent3D {
        let layout = self.format.layout();

        Extent3D::new(
            self.image_alignment_el.width * layout.bw as u32,
            self.image_alignment_el.height * layout.bh as u32,
            self.image_alignment_el.depth * layout.bd as u32,
        )
    }

    /// Returns the extent of level 0, as it was given at creation.
    #[inline]
    pub fn logical_level0_px(&self) -> Extent4D {
        self.logical_level0_px
    }

    /// Returns the extent of level 0 in memory.
    ///
    /// This differs from the logical extent for multisampled surfaces, whose samples are either
    /// interleaved (making the surface wider and taller) or stored as extra array slices.
    #[inline]
    pub fn phys_level0_sa(&self) -> Extent4D {
        self.phys_level0_sa
    }

    /// Returns the extent of mip level `level`, in pixels.
    ///
    /// # Panics
    ///
    /// - Panics if `level` is not less than the number of levels.
    pub fn level_extent_px(&self, level: u32) -> Extent3D {
        assert!(level < self.levels);

        Extent3D::new(
            minify(self.logical_level0_px.width, level),
            minify(self.logical_level0_px.height, level),
            minify(self.logical_level0_px.depth, level),
        )
    }

    /// Returns the size of the surface in bytes.
    #[inline]
    pub fn size(&self) -> DeviceSize {
        self.size
    }

    /// Returns the alignment that the base address of the surface must have.
    #[inline]
    pub fn alignment(&self) -> DeviceSize {
        self.alignment
    }

    /// Returns the distance between two consecutive rows of elements (or of tiles), in bytes.
    #[inline]
    pub fn row_pitch(&self) -> u32 {
        self.row_pitch
    }

    /// Returns the row pitch in elements.
    ///
    /// # Panics
    ///
    /// - Panics if the elements of the format are smaller than a byte.
    pub fn row_pitch_el(&self) -> u32 {
        let bpb = self.format.layout().bpb as u32;
        assert!(bpb % 8 == 0);

        self.row_pitch / (bpb / 8)
    }

    /// Returns the distance between two consecutive array layers, in rows of elements.
    #[inline]
    pub fn array_pitch_el_rows(&self) -> u32 {
        self.array_pitch_el_rows
    }

    /// Returns the distance between two consecutive array layers, in rows of samples.
    #[inline]
    pub fn array_pitch_sa_rows(&self) -> u32 {
        self.array_pitch_el_rows * self.format.layout().bh as u32
    }

    /// Returns the distance between two consecutive array layers, in bytes.
    ///
    /// Only meaningful for tilings that store layers one below the other.
    #[inline]
    pub fn array_pitch(&self) -> DeviceSize {
        self.array_pitch_el_rows as DeviceSize * self.row_pitch as DeviceSize
    }

    #[inline]
    pub fn array_pitch_span(&self) -> ArrayPitchSpan {
        self.array_pitch_span
    }

    /// Returns the first level that is stored in the miptail, or the number of levels if there is
    /// no miptail.
    #[inline]
    pub fn miptail_start_level(&self) -> u32 {
        self.miptail_start_level
    }

    #[inline]
    pub fn usage(&self) -> SurfaceUsage {
        self.usage
    }

    /// Returns the geometry of one tile of the surface.
    pub fn tile_info(&self) -> TileInfo {
        self.tiling.tile_info(
            self.dim,
            self.msaa_layout,
            self.format.layout().bpb as u32,
            self.samples,
        )
    }
}

/// Parameters to create a new `Surface`.
#[derive(Clone, Debug)]
pub struct SurfaceCreateInfo {
    /// The dimensionality of the surface.
    ///
    /// The default value is [`SurfaceDim::Dim2d`].
    pub dim: SurfaceDim,

    /// The format of the surface.
    ///
    /// The default value is [`Format::UNSUPPORTED`], which must be overridden.
    pub format: Format,

    /// The width, height and depth of level 0, in pixels.
    ///
    /// For 1D surfaces the height and depth must be 1, for 2D surfaces the depth must be 1.
    ///
    /// The default value is `[0; 3]`, which must be overridden.
    pub extent: [u32; 3],

    /// The number of mip levels.
    ///
    /// The default value is `1`.
    pub levels: u32,

    /// The number of array layers.
    ///
    /// The default value is `1`.
    pub array_len: u32,

    /// The number of samples per pixel.
    ///
    /// The default value is `1`.
    pub samples: u32,

    /// How the surface is going to be used.
    ///
    /// The default value is empty.
    pub usage: SurfaceUsage,

    /// The tilings that the surface may be laid out with. The best one that the hardware allows
    /// for the rest of the description is picked.
    ///
    /// The default value is [`TilingFlags::ANY`].
    pub tiling_flags: TilingFlags,

    /// The exact row pitch the surface must have, or `0` to let it be computed.
    ///
    /// The default value is `0`.
    pub row_pitch: u32,

    /// The smallest alignment the base address of the surface may have. Must be `0` or a power of
    /// two.
    ///
    /// The default value is `0`.
    pub min_alignment: u32,

    /// The miptail is not allowed to start before this level.
    ///
    /// The default value is `0`.
    pub min_miptail_start_level: u32,

    pub _ne: crate::NonExhaustive,
}

impl Default for SurfaceCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            dim: SurfaceDim::Dim2d,
            format: Format::UNSUPPORTED,
            extent: [0; 3],
            levels: 1,
            array_len: 1,
            samples: 1,
            usage: SurfaceUsage::empty(),
            tiling_flags: TilingFlags::ANY,
            row_pitch: 0,
            min_alignment: 0,
            min_miptail_start_level: 0,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl SurfaceCreateInfo {
    pub(crate) fn validate(&self, device: &Device) -> Result<(), Box<ValidationError>> {
        let &Self {
            dim,
            format,
            extent,
            levels,
            array_len,
            samples,
            usage,
            tiling_flags,
            row_pitch: _,
            min_alignment,
            min_miptail_start_level: _,
            _ne: _,
        } = self;

        if format == Format::UNSUPPORTED {
            return Err(Box::new(ValidationError {
                context: "format".into(),
                problem: "is `Format::UNSUPPORTED`".into(),
            }));
        }

        if format.layout().bpb == 0 {
            return Err(Box::new(ValidationError {
                context: "format".into(),
                problem: format!("{} has no memory layout", format).into(),
            }));
        }

        // Auxiliary formats describe metadata, and are only laid out as auxiliary surfaces.
        for (is_aux_format, aux_usage, usage_name) in [
            (format.is_hiz(), SurfaceUsage::HIZ, "HIZ"),
            (format.is_mcs(), SurfaceUsage::MCS, "MCS"),
            (format.is_ccs(), SurfaceUsage::CCS, "CCS"),
        ] {
            if is_aux_format && !usage.intersects(aux_usage) {
                return Err(Box::new(ValidationError {
                    problem: format!(
                        "`format` is the auxiliary format {}, but `usage` does not contain \
                        `SurfaceUsage::{}`",
                        format, usage_name,
                    )
                    .into(),
                    ..Default::default()
                }));
            }
        }

        if usage.intersects(SurfaceUsage::MCS) && !format.is_mcs() {
            return Err(Box::new(ValidationError {
                problem: "`usage` contains `SurfaceUsage::MCS`, but `format` is not an MCS format"
                    .into(),
                ..Default::default()
            }));
        }

        if format.is_planar() {
            return Err(Box::new(ValidationError {
                context: "format".into(),
                problem: "is a planar format; each plane must be laid out as its own surface"
                    .into(),
            }));
        }

        if extent.contains(&0) {
            return Err(Box::new(ValidationError {
                context: "extent".into(),
                problem: "one or more elements are zero".into(),
            }));
        }

        if levels == 0 {
            return Err(Box::new(ValidationError {
                context: "levels".into(),
                problem: "is zero".into(),
            }));
        }

        if array_len == 0 {
            return Err(Box::new(ValidationError {
                context: "array_len".into(),
                problem: "is zero".into(),
            }));
        }

        if !samples.is_power_of_two() || samples > 16 {
            return Err(Box::new(ValidationError {
                context: "samples".into(),
                problem: "is not 1, 2, 4, 8 or 16".into(),
            }));
        }

        let max_levels = 32 - extent[0].max(extent[1]).max(extent[2]).leading_zeros();

        if levels > max_levels {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "`levels` is {}, but an image of this extent has at most {} levels",
                    levels, max_levels,
                )
                .into(),
                ..Default::default()
            }));
        }

        match dim {
            SurfaceDim::Dim1d => {
                if extent[1] != 1 || extent[2] != 1 {
                    return Err(Box::new(ValidationError {
                        problem: "`dim` is `SurfaceDim::Dim1d`, but `extent[1]` and `extent[2]` \
                            are not both 1"
                            .into(),
                        ..Default::default()
                    }));
                }

                if samples != 1 {
                    return Err(Box::new(ValidationError {
                        problem: "`dim` is `SurfaceDim::Dim1d`, but `samples` is not 1".into(),
                        ..Default::default()
                    }));
                }
            }
            SurfaceDim::Dim2d => {
                if extent[2] != 1 {
                    return Err(Box::new(ValidationError {
                        problem: "`dim` is `SurfaceDim::Dim2d`, but `extent[2]` is not 1".into(),
                        ..Default::default()
                    }));
                }
            }
            SurfaceDim::Dim3d => {
                if array_len != 1 {
                    return Err(Box::new(ValidationError {
                        problem: "`dim` is `SurfaceDim::Dim3d`, but `array_len` is not 1".into(),
                        ..Default::default()
                    }));
                }

                if samples != 1 {
                    return Err(Box::new(ValidationError {
                        problem: "`dim` is `SurfaceDim::Dim3d`, but `samples` is not 1".into(),
                        ..Default::default()
                    }));
                }
            }
        }

        if samples > 1 && levels > 1 {
            return Err(Box::new(ValidationError {
                problem: "`samples` is greater than 1, but `levels` is also greater than 1".into(),
                ..Default::default()
            }));
        }

        if usage.intersects(SurfaceUsage::CUBE) {
            if dim != SurfaceDim::Dim2d {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::CUBE`, but `dim` is not \
                        `SurfaceDim::Dim2d`"
                        .into(),
                    ..Default::default()
                }));
            }

            if extent[0] != extent[1] || array_len % 6 != 0 {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::CUBE`, but the surface is not \
                        square, or `array_len` is not a multiple of 6"
                        .into(),
                    ..Default::default()
                }));
            }

            if device.ver() == 4 && array_len != 6 {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::CUBE`, but `array_len` is not 6, \
                        and cube arrays do not exist on gfx4"
                        .into(),
                    ..Default::default()
                }));
            }
        }

        if usage.intersects(SurfaceUsage::STENCIL)
            && device.use_separate_stencil()
            && format.layout().bpb != 8
        {
            return Err(Box::new(ValidationError {
                problem: format!(
                    "`usage` contains `SurfaceUsage::STENCIL`, but `format` does not have 8-bit \
                    elements, which separate stencil buffers on {} require",
                    device.version(),
                )
                .into(),
                ..Default::default()
            }));
        }

        if usage.intersects(SurfaceUsage::HIZ) {
            if !format.is_hiz() {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::HIZ`, but `format` is not a HiZ \
                        format"
                        .into(),
                    ..Default::default()
                }));
            }

            if tiling_flags != TilingFlags::HIZ {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::HIZ`, but `tiling_flags` is not \
                        `TilingFlags::HIZ`"
                        .into(),
                    ..Default::default()
                }));
            }
        }

        if usage.intersects(SurfaceUsage::CCS) {
            if !format.is_ccs() {
                return Err(Box::new(ValidationError {
                    problem: "`usage` contains `SurfaceUsage::CCS`, but `format` is not a CCS \
                        format"
                        .into(),
                    ..Default::default()
                }));
            }

            let expected = if device.ver() >= 12 {
                TilingFlags::GFX12_CCS
            } else {
                TilingFlags::CCS
            };

            if tiling_flags != expected {
                return Err(Box::new(ValidationError {
                    context: "tiling_flags".into(),
                    problem: format!(
                        "does not select the CCS tiling of {}",
                        device.version()
                    )
                    .into(),
                }));
            }
        }

        if tiling_flags.is_empty() {
            return Err(Box::new(ValidationError {
                context: "tiling_flags".into(),
                problem: "is empty".into(),
            }));
        }

        if min_alignment != 0 && !min_alignment.is_power_of_two() {
            return Err(Box::new(ValidationError {
                context: "min_alignment".into(),
                problem: "is not zero or a power of two".into(),
            }));
        }

        Ok(())
    }
}
