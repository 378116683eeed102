// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Rules that differ between hardware generations: which tilings a surface may use, how its
//! samples are arranged, and how its subimages are aligned.

use super::{DimLayout, MsaaLayout, SurfaceCreateInfo, SurfaceDim, SurfaceUsage};
use crate::{
    device::Device,
    format::{Format, Txc},
    tiling::{Tiling, TilingFlags},
    Extent3D, ValidationError,
};

/// Removes from `flags` every tiling that `device` cannot use for the described surface.
pub(super) fn filter_tiling(
    device: &Device,
    info: &SurfaceCreateInfo,
    flags: TilingFlags,
) -> TilingFlags {
    if device.verx10() >= 125 {
        filter_tiling_gfx125(info, flags)
    } else if device.ver() >= 6 {
        filter_tiling_gfx6(device, info, flags)
    } else {
        filter_tiling_gfx4(info, flags)
    }
}

fn filter_tiling_gfx4(info: &SurfaceCreateInfo, mut flags: TilingFlags) -> TilingFlags {
    flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::Y0;

    // Depth and combined depth-stencil buffers must be Y-tiled.
    if info.usage.is_depth_or_stencil() {
        flags &= TilingFlags::Y0;
    }

    if info.usage.is_display() {
        flags &= TilingFlags::LINEAR | TilingFlags::X;
    }

    flags
}

fn filter_tiling_gfx6(
    device: &Device,
    info: &SurfaceCreateInfo,
    mut flags: TilingFlags,
) -> TilingFlags {
    let layout = info.format.layout();

    flags -= TilingFlags::TILE_4 | TilingFlags::TILE_64;

    match device.ver() {
        ..=8 => flags -= TilingFlags::STD_Y,
        9..=10 => flags -= TilingFlags::ICL_YF | TilingFlags::ICL_YS,
        _ => flags -= TilingFlags::SKL_YF | TilingFlags::SKL_YS,
    }

    if !(layout.bpb as u32).is_power_of_two() {
        flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::Y0;
    }

    if info.usage.intersects(SurfaceUsage::STENCIL) {
        if device.ver() >= 12 {
            flags &= TilingFlags::Y0;
        } else {
            flags &= TilingFlags::W;
        }
    } else {
        flags -= TilingFlags::W;
    }

    if info.usage.intersects(SurfaceUsage::DEPTH) {
        if device.ver() >= 9 {
            flags &= TilingFlags::ANY_Y;
        } else {
            flags &= TilingFlags::Y0;
        }
    }

    if info.usage.is_display() {
        if device.ver() >= 9 {
            flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::Y0;
        } else {
            flags &= TilingFlags::LINEAR | TilingFlags::X;
        }
    }

    if layout.txc == Txc::Mcs {
        flags &= TilingFlags::Y0;
    }

    if info.samples > 1 {
        flags -= TilingFlags::LINEAR;
    }

    if info.dim == SurfaceDim::Dim1d {
        flags -= TilingFlags::STD_Y;
    }

    flags
}

fn filter_tiling_gfx125(info: &SurfaceCreateInfo, mut flags: TilingFlags) -> TilingFlags {
    let layout = info.format.layout();

    flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::TILE_4 | TilingFlags::TILE_64;

    if !(layout.bpb as u32).is_power_of_two() {
        flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::TILE_4;
    }

    if info.usage.is_depth_or_stencil() {
        flags &= TilingFlags::TILE_4 | TilingFlags::TILE_64;
    }

    if info.usage.is_display() {
        flags &= TilingFlags::LINEAR | TilingFlags::X | TilingFlags::TILE_4;
    }

    if layout.txc == Txc::Mcs {
        flags &= TilingFlags::TILE_4;
    }

    if info.samples > 1 {
        flags -= TilingFlags::LINEAR;
    }

    if info.dim == SurfaceDim::Dim1d {
        flags -= TilingFlags::TILE_64;
    }

    flags
}

/// Chooses how the samples of the surface are arranged.
pub(super) fn choose_msaa_layout(
    device: &Device,
    info: &SurfaceCreateInfo,
    tiling: Tiling,
) -> Result<MsaaLayout, Box<ValidationError>> {
    if info.samples == 1 {
        return Ok(MsaaLayout::None);
    }

    if !device.supported_sample_counts().contains_count(info.samples) {
        return Err(Box::new(ValidationError {
            context: "samples".into(),
            problem: format!(
                "{} samples are not supported on {}",
                info.samples,
                device.version(),
            )
            .into(),
        }));
    }

    // Mipmapped, 3D and linear multisampled surfaces do not exist on any generation.
    if info.dim != SurfaceDim::Dim2d {
        return Err(Box::new(ValidationError {
            context: "dim".into(),
            problem: "multisampled surfaces must be 2D".into(),
        }));
    }

    if tiling == Tiling::Linear {
        return Err(Box::new(ValidationError {
            context: "tiling_flags".into(),
            problem: "multisampled surfaces cannot be linear".into(),
        }));
    }

    if !info.format.supports_multisampling(device) {
        return Err(Box::new(ValidationError {
            context: "format".into(),
            problem: format!(
                "{} does not support multisampling on {}",
                info.format,
                device.version(),
            )
            .into(),
        }));
    }

    if device.ver() == 6 {
        // gfx6 has neither MCS nor multisampled arrays.
        if info.array_len > 1 {
            return Err(Box::new(ValidationError {
                context: "array_len".into(),
                problem: "multisampled array surfaces are not supported on gfx6".into(),
            }));
        }

        return Ok(MsaaLayout::Interleaved);
    }

    // Depth, stencil and HiZ surfaces are always interleaved. Color surfaces are always stored as
    // an array of samples, so that they can be compressed with MCS.
    if info.usage.is_depth_or_stencil() || info.usage.intersects(SurfaceUsage::HIZ) {
        Ok(MsaaLayout::Interleaved)
    } else {
        Ok(MsaaLayout::Array)
    }
}

/// Chooses the alignment of each subimage, in elements.
pub(super) fn choose_image_alignment_el(
    device: &Device,
    info: &SurfaceCreateInfo,
    tiling: Tiling,
    dim_layout: DimLayout,
    msaa_layout: MsaaLayout,
) -> Extent3D {
    let layout = info.format.layout();

    match layout.txc {
        Txc::Mcs => {
            return if device.verx10() >= 125 {
                Extent3D::new(128 * 8 / layout.bpb as u32, 4, 1)
            } else if device.ver() >= 8 {
                Extent3D::new(16, 4, 1)
            } else {
                Extent3D::new(4, 4, 1)
            };
        }
        Txc::Hiz => {
            debug_assert!(device.ver() >= 6);

            return if device.ver() == 6 {
                Extent3D::new(1, 1, 1)
            } else if device.ver() < 12 {
                Extent3D::new(2, 2, 1)
            } else {
                // HiZ data covers 16×16 samples of the main surface.
                Extent3D::new(16 / layout.bw as u32, 16 / layout.bh as u32, 1)
            };
        }
        _ => (),
    }

    if device.verx10() >= 125 {
        alignment_gfx125(info, tiling, dim_layout, msaa_layout)
    } else if device.ver() >= 12 {
        alignment_gfx12(device, info, tiling, dim_layout, msaa_layout)
    } else if device.ver() >= 9 {
        alignment_gfx9(device, info, tiling, dim_layout, msaa_layout)
    } else if device.ver() >= 8 {
        alignment_gfx8(device, info)
    } else if device.ver() >= 7 {
        alignment_gfx7(info)
    } else if device.ver() >= 6 {
        alignment_gfx6(info)
    } else {
        alignment_gfx4(info)
    }
}

fn alignment_gfx4(info: &SurfaceCreateInfo) -> Extent3D {
    if info.format.is_compressed() {
        Extent3D::new(1, 1, 1)
    } else {
        Extent3D::new(4, 2, 1)
    }
}

fn alignment_gfx6(info: &SurfaceCreateInfo) -> Extent3D {
    if info.format.is_compressed() {
        Extent3D::new(1, 1, 1)
    } else if info.usage.intersects(SurfaceUsage::STENCIL) {
        Extent3D::new(8, 8, 1)
    } else if info.usage.intersects(SurfaceUsage::DEPTH) {
        Extent3D::new(4, 4, 1)
    } else if info.samples > 1 {
        Extent3D::new(4, 4, 1)
    } else {
        Extent3D::new(4, 2, 1)
    }
}

fn alignment_gfx7(info: &SurfaceCreateInfo) -> Extent3D {
    if info.format.is_compressed() {
        return Extent3D::new(1, 1, 1);
    }

    if info.usage.intersects(SurfaceUsage::STENCIL) {
        return Extent3D::new(8, 8, 1);
    }

    if info.usage.intersects(SurfaceUsage::DEPTH) {
        return Extent3D::new(4, 4, 1);
    }

    // VALIGN_2 is not supported for render targets, except for 96 bpb formats, which cannot use
    // VALIGN_4.
    let render_target = info.usage.intersects(SurfaceUsage::RENDER_TARGET)
        && info.format.layout().bpb != 96;
    let valign = if info.samples > 1 || render_target {
        4
    } else {
        2
    };

    Extent3D::new(4, valign, 1)
}

fn alignment_gfx8(device: &Device, info: &SurfaceCreateInfo) -> Extent3D {
    let layout = info.format.layout();

    if layout.txc == Txc::Ccs {
        return Extent3D::new(1, 1, 1);
    }

    if info.usage.intersects(SurfaceUsage::STENCIL) {
        return Extent3D::new(8, 8, 1);
    }

    if info.usage.intersects(SurfaceUsage::DEPTH) {
        return if info.format == Format::R16_UNORM {
            Extent3D::new(8, 4, 1)
        } else {
            Extent3D::new(4, 4, 1)
        };
    }

    if info.format.is_compressed() {
        return Extent3D::new(4, 4, 1);
    }

    // Fast clears with CCS require HALIGN_16.
    let aux = !info.usage.intersects(SurfaceUsage::DISABLE_AUX);
    let halign = if device.ver() >= 9 {
        if aux
            && (info.format.supports_ccs_e(device)
                || (info.usage.intersects(SurfaceUsage::RENDER_TARGET)
                    && info.format.supports_ccs_d(device)))
        {
            16
        } else {
            4
        }
    } else if aux
        && info.usage.intersects(SurfaceUsage::RENDER_TARGET)
        && info.format.supports_ccs_d(device)
    {
        16
    } else {
        4
    };

    Extent3D::new(halign, 4, 1)
}

fn tile_alignment(info: &SurfaceCreateInfo, tiling: Tiling, msaa_layout: MsaaLayout) -> Extent3D {
    let tile = tiling
        .tile_info(
            info.dim,
            msaa_layout,
            info.format.layout().bpb as u32,
            info.samples,
        )
        .logical_extent_el;

    Extent3D::new(tile.width, tile.height, tile.depth)
}

fn alignment_gfx9(
    device: &Device,
    info: &SurfaceCreateInfo,
    tiling: Tiling,
    dim_layout: DimLayout,
    msaa_layout: MsaaLayout,
) -> Extent3D {
    // Subimages of the standard tilings start at tile boundaries.
    if tiling.is_std_y() {
        return tile_alignment(info, tiling, msaa_layout);
    }

    if dim_layout == DimLayout::Gfx9_1d {
        return Extent3D::new(64, 1, 1);
    }

    alignment_gfx8(device, info)
}

fn alignment_gfx12(
    device: &Device,
    info: &SurfaceCreateInfo,
    tiling: Tiling,
    dim_layout: DimLayout,
    msaa_layout: MsaaLayout,
) -> Extent3D {
    if tiling.is_std_y() || tiling == Tiling::Tile64 {
        return tile_alignment(info, tiling, msaa_layout);
    }

    if dim_layout == DimLayout::Gfx9_1d {
        return Extent3D::new(64, 1, 1);
    }

    if let Some(alignment) = depth_stencil_alignment_gfx12(info) {
        return alignment;
    }

    if info.format.layout().txc == Txc::Ccs {
        return Extent3D::new(1, 1, 1);
    }

    if info.format.is_compressed() {
        return Extent3D::new(4, 4, 1);
    }

    let halign = if !info.usage.intersects(SurfaceUsage::DISABLE_AUX)
        && info.format.supports_ccs_e(device)
    {
        16
    } else {
        4
    };

    Extent3D::new(halign, 4, 1)
}

fn alignment_gfx125(
    info: &SurfaceCreateInfo,
    tiling: Tiling,
    dim_layout: DimLayout,
    msaa_layout: MsaaLayout,
) -> Extent3D {
    if tiling == Tiling::Tile64 {
        return tile_alignment(info, tiling, msaa_layout);
    }

    if dim_layout == DimLayout::Gfx9_1d {
        return Extent3D::new(64, 1, 1);
    }

    if let Some(alignment) = depth_stencil_alignment_gfx12(info) {
        return alignment;
    }

    let layout = info.format.layout();

    if layout.txc == Txc::Ccs {
        return Extent3D::new(1, 1, 1);
    }

    if info.format.is_compressed() {
        return Extent3D::new(4, 4, 1);
    }

    // Color subimages are aligned to 128 bytes horizontally.
    let mut bpb = layout.bpb as u32;
    if !bpb.is_power_of_two() {
        bpb /= 3;
    }

    Extent3D::new(1024 / bpb, 4, 1)
}

fn depth_stencil_alignment_gfx12(info: &SurfaceCreateInfo) -> Option<Extent3D> {
    if info.usage.intersects(SurfaceUsage::DEPTH) {
        if info.format == Format::R16_UNORM {
            Some(Extent3D::new(8, 8, 1))
        } else {
            Some(Extent3D::new(8, 4, 1))
        }
    } else if info.usage.intersects(SurfaceUsage::STENCIL) {
        Some(Extent3D::new(16, 8, 1))
    } else {
        None
    }
}
