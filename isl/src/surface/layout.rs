// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Computes the physical layout of a surface from its description.

use super::{
    gfx, ArrayPitchSpan, DimLayout, MsaaLayout, Surface, SurfaceCreateInfo, SurfaceDim,
    SurfaceUsage,
};
use crate::{
    device::Device,
    extent::{align, align_div_npot, align_npot, align_u64, ffs, minify},
    format::Txc,
    tiling::{TileInfo, Tiling, TilingFlags},
    DeviceSize, Extent2D, Extent3D, Extent4D, ValidationError,
};
use tracing::{debug, trace};

pub(super) fn surface_layout(
    device: &Device,
    info: &SurfaceCreateInfo,
) -> Result<Surface, Box<ValidationError>> {
    let surface = compute_layout(device, info).map_err(|err| {
        debug!(
            extent = ?info.extent,
            dim = ?info.dim,
            samples = info.samples,
            levels = info.levels,
            array_len = info.array_len,
            row_pitch = info.row_pitch,
            format = %info.format,
            usage = ?info.usage,
            tiling_flags = ?info.tiling_flags,
            "surface layout failed: {}",
            err,
        );

        err
    })?;

    trace!(
        tiling = %surface.tiling,
        row_pitch = surface.row_pitch,
        array_pitch_el_rows = surface.array_pitch_el_rows,
        size = surface.size,
        alignment = surface.alignment,
        "laid out {} surface",
        info.format,
    );

    Ok(surface)
}

fn compute_layout(
    device: &Device,
    info: &SurfaceCreateInfo,
) -> Result<Surface, Box<ValidationError>> {
    let layout = info.format.layout();

    let tiling = choose_tiling(device, info)?;
    let dim_layout = choose_dim_layout(device, info.dim, tiling, info.usage);
    let msaa_layout = gfx::choose_msaa_layout(device, info, tiling)?;

    let tile_info = tiling.tile_info(info.dim, msaa_layout, layout.bpb as u32, info.samples);

    let image_alignment_el =
        gfx::choose_image_alignment_el(device, info, tiling, dim_layout, msaa_layout);
    let image_alignment_sa = Extent3D::new(
        image_alignment_el.width * layout.bw as u32,
        image_alignment_el.height * layout.bh as u32,
        image_alignment_el.depth * layout.bd as u32,
    );

    let phys_level0_sa = phys_level0_extent_sa(info, msaa_layout);
    let array_pitch_span = choose_array_pitch_span(device, info, dim_layout, &phys_level0_sa);
    let miptail_start_level = choose_miptail_start_level(device, info, &tile_info);

    let (array_pitch_el_rows, phys_total_el) = match dim_layout {
        DimLayout::Gfx9_1d => phys_total_extent_el_gfx9_1d(info, &image_alignment_sa, &phys_level0_sa),
        DimLayout::Gfx4_2d => phys_total_extent_el_gfx4_2d(
            device,
            info,
            &tile_info,
            &image_alignment_sa,
            &phys_level0_sa,
            array_pitch_span,
            miptail_start_level,
        ),
        DimLayout::Gfx4_3d => phys_total_extent_el_gfx4_3d(info, &image_alignment_sa, &phys_level0_sa),
        DimLayout::Gfx6StencilHiz => phys_total_extent_el_gfx6_stencil_hiz(
            info,
            &tile_info,
            &image_alignment_sa,
            &phys_level0_sa,
        ),
    };

    let row_pitch = row_pitch(device, info, &tile_info, dim_layout, &phys_total_el)?;
    let size = surface_size(device, info, &tile_info, &phys_total_el, array_pitch_el_rows, row_pitch)?;
    let alignment = base_alignment(device, info, &tile_info);

    Ok(Surface {
        dim: info.dim,
        dim_layout,
        msaa_layout,
        tiling,
        format: info.format,
        levels: info.levels,
        samples: info.samples,
        image_alignment_el,
        logical_level0_px: Extent4D::new(
            info.extent[0],
            info.extent[1],
            info.extent[2],
            info.array_len,
        ),
        phys_level0_sa,
        size,
        alignment,
        row_pitch,
        array_pitch_el_rows,
        array_pitch_span,
        miptail_start_level,
        usage: info.usage,
    })
}

fn choose_tiling(device: &Device, info: &SurfaceCreateInfo) -> Result<Tiling, Box<ValidationError>> {
    // The tilings of auxiliary surfaces are checked when the description is validated.
    if info.usage.intersects(SurfaceUsage::HIZ) {
        return Ok(Tiling::Hiz);
    }

    if info.usage.intersects(SurfaceUsage::CCS) {
        return Ok(if device.ver() >= 12 {
            Tiling::Gfx12Ccs
        } else {
            Tiling::Ccs
        });
    }

    let mut flags = gfx::filter_tiling(device, info, info.tiling_flags) & TilingFlags::ANY;

    // A requested row pitch must be a whole number of tiles. Prefer the tilings for which it is,
    // but keep the others if none is, so that the failure is reported against the pitch.
    if info.row_pitch != 0 {
        let bpb = info.format.layout().bpb as u32;
        let fitting = flags
            .iter()
            .filter(|&tiling| {
                tiling == Tiling::Linear
                    || info.row_pitch
                        % tiling
                            .tile_info(info.dim, MsaaLayout::None, bpb, 1)
                            .phys_extent
                            .width
                        == 0
            })
            .fold(TilingFlags::empty(), |acc, tiling| acc | tiling.flag());

        if !fitting.is_empty() {
            flags = fitting;
        }
    }

    let mut preferred: Vec<Tiling> = Vec::with_capacity(Tiling::COUNT + 4);

    if info.dim == SurfaceDim::Dim1d {
        preferred.push(Tiling::Linear);
    }

    // Sparse binding works in 64 KiB pages, which only the 64 KiB tilings map onto.
    if info.usage.intersects(SurfaceUsage::SPARSE) {
        preferred.extend([Tiling::Tile64, Tiling::IclYs, Tiling::SklYs]);
    }

    preferred.extend([
        Tiling::Y0,
        Tiling::Tile4,
        Tiling::SklYf,
        Tiling::IclYf,
        Tiling::SklYs,
        Tiling::IclYs,
        Tiling::Tile64,
        Tiling::X,
        Tiling::W,
        Tiling::Linear,
    ]);

    preferred
        .into_iter()
        .find(|&tiling| flags.contains_tiling(tiling))
        .ok_or_else(|| {
            Box::new(ValidationError {
                context: "tiling_flags".into(),
                problem: format!(
                    "none of the requested tilings is supported for this surface on {}",
                    device.version(),
                )
                .into(),
            })
        })
}

fn choose_dim_layout(
    device: &Device,
    dim: SurfaceDim,
    tiling: Tiling,
    usage: SurfaceUsage,
) -> DimLayout {
    if device.ver() == 6 && matches!(tiling, Tiling::W | Tiling::Hiz) {
        return DimLayout::Gfx6StencilHiz;
    }

    if device.ver() >= 9 {
        match dim {
            SurfaceDim::Dim1d if tiling == Tiling::Linear => DimLayout::Gfx9_1d,
            _ => DimLayout::Gfx4_2d,
        }
    } else {
        match dim {
            SurfaceDim::Dim1d | SurfaceDim::Dim2d => {
                if device.ver() == 4 && usage.intersects(SurfaceUsage::CUBE) {
                    DimLayout::Gfx4_3d
                } else {
                    DimLayout::Gfx4_2d
                }
            }
            SurfaceDim::Dim3d => DimLayout::Gfx4_3d,
        }
    }
}

/// Returns the size, in samples, of the area that one pixel covers in an interleaved
/// multisampled surface.
pub fn interleaved_msaa_px_size_sa(samples: u32) -> Extent2D {
    assert!(samples.is_power_of_two());

    Extent2D::new(1 << (ffs(samples) / 2), 1 << ((ffs(samples) - 1) / 2))
}

fn phys_level0_extent_sa(info: &SurfaceCreateInfo, msaa_layout: MsaaLayout) -> Extent4D {
    let [width, height, depth] = info.extent;

    match info.dim {
        SurfaceDim::Dim1d => Extent4D::new(width, 1, 1, info.array_len),
        SurfaceDim::Dim2d => match msaa_layout {
            MsaaLayout::None => Extent4D::new(width, height, 1, info.array_len),
            MsaaLayout::Array => Extent4D::new(width, height, 1, info.array_len * info.samples),
            MsaaLayout::Interleaved => {
                // Pixels are padded to an even size before being scaled up.
                let px_size_sa = interleaved_msaa_px_size_sa(info.samples);

                Extent4D::new(
                    align(width, 2) * px_size_sa.width,
                    align(height, 2) * px_size_sa.height,
                    1,
                    info.array_len,
                )
            }
        },
        SurfaceDim::Dim3d => Extent4D::new(width, height, depth, 1),
    }
}

fn choose_array_pitch_span(
    device: &Device,
    info: &SurfaceCreateInfo,
    dim_layout: DimLayout,
    phys_level0_sa: &Extent4D,
) -> ArrayPitchSpan {
    match dim_layout {
        DimLayout::Gfx9_1d | DimLayout::Gfx4_2d => {
            if device.ver() >= 8 {
                // QPitch is programmed explicitly, so layers can be packed tightly.
                ArrayPitchSpan::Compact
            } else if device.ver() == 7 {
                if phys_level0_sa.array_len == 1 {
                    ArrayPitchSpan::Compact
                } else if info.usage.is_depth_or_stencil()
                    || info.usage.intersects(SurfaceUsage::HIZ)
                {
                    ArrayPitchSpan::Full
                } else if info.levels == 1 {
                    ArrayPitchSpan::Compact
                } else {
                    ArrayPitchSpan::Full
                }
            } else if (device.ver() == 5 || device.ver() == 6)
                && device.use_separate_stencil()
                && info.usage.intersects(SurfaceUsage::STENCIL)
            {
                ArrayPitchSpan::Compact
            } else if phys_level0_sa.array_len == 1 {
                ArrayPitchSpan::Compact
            } else {
                ArrayPitchSpan::Full
            }
        }
        DimLayout::Gfx4_3d | DimLayout::Gfx6StencilHiz => ArrayPitchSpan::Compact,
    }
}

fn choose_miptail_start_level(device: &Device, info: &SurfaceCreateInfo, tile_info: &TileInfo) -> u32 {
    let layout = info.format.layout();

    if tile_info.max_miptail_levels == 0 {
        return info.levels;
    }

    // gfx12 cannot place YUV formats in a miptail.
    if device.ver() == 12 && info.format.is_yuv() {
        return info.levels;
    }

    debug_assert!(info.samples == 1);

    let min_miptail_start = info
        .levels
        .saturating_sub(tile_info.max_miptail_levels)
        .max(info.min_miptail_start_level);

    let level0_extent_el = Extent3D::new(
        align_div_npot(info.extent[0], layout.bw as u32),
        align_div_npot(info.extent[1], layout.bh as u32),
        align_div_npot(info.extent[2], layout.bd as u32),
    );

    // Level 0 of a miptail does not start at the origin of the tile. The largest level that fits
    // is the one that fits in the space to the right of (or below) that offset.
    let level0_offset_el =
        tile_info
            .tiling
            .miptail_level_offset_el(info.dim, layout.bpb as u32, 0);
    let tile = tile_info.logical_extent_el;
    let miptail_level0_extent_el = Extent3D::new(
        tile.width - level0_offset_el.x,
        tile.height - level0_offset_el.y,
        tile.depth - level0_offset_el.z,
    );

    (min_miptail_start..info.levels)
        .find(|&level| {
            minify(level0_extent_el.width, level) <= miptail_level0_extent_el.width
                && minify(level0_extent_el.height, level) <= miptail_level0_extent_el.height
                && minify(level0_extent_el.depth, level) <= miptail_level0_extent_el.depth
        })
        .unwrap_or(info.levels)
}

fn array_pitch_el_rows_gfx4_2d(
    device: &Device,
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
    array_pitch_span: ArrayPitchSpan,
    phys_slice0_sa: &Extent2D,
) -> u32 {
    let layout = info.format.layout();

    let pitch_sa_rows = match array_pitch_span {
        ArrayPitchSpan::Compact => align_npot(phys_slice0_sa.height, image_alignment_sa.height),
        ArrayPitchSpan::Full => {
            // h0 + h1 + 11 or 12 aligned rows, enough for any number of levels below level 1.
            let h0_sa = align_npot(phys_level0_sa.height, image_alignment_sa.height);
            let h1_sa = align_npot(minify(phys_level0_sa.height, 1), image_alignment_sa.height);
            let m = if device.ver() >= 7 { 12 } else { 11 };

            let mut pitch_sa_rows = h0_sa + h1_sa + m * image_alignment_sa.height;

            // Multisampled surfaces whose height is 1 modulo 4 need extra padding on gfx6.
            if device.ver() == 6 && info.samples > 1 && info.extent[1] % 4 == 1 {
                pitch_sa_rows += 4;
            }

            align_npot(pitch_sa_rows, layout.bh as u32)
        }
    };

    debug_assert!(pitch_sa_rows % layout.bh as u32 == 0);
    let mut pitch_el_rows = pitch_sa_rows / layout.bh as u32;

    // Before gfx12, each layer of a CCS must start on a 256 row boundary of the main surface.
    if (9..=11).contains(&device.ver()) && layout.txc == Txc::Ccs {
        debug_assert!(layout.bh == 4);
        pitch_el_rows = align(pitch_el_rows, 256 / 4);
    }

    // Slices of tiled 3D surfaces start on tile boundaries.
    if device.ver() >= 9 && info.dim == SurfaceDim::Dim3d && tile_info.tiling != Tiling::Linear {
        pitch_el_rows = align(pitch_el_rows, tile_info.logical_extent_el.height);
    }

    pitch_el_rows
}

fn phys_slice0_extent_sa_gfx4_2d(
    info: &SurfaceCreateInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
    miptail_start_level: u32,
) -> Extent2D {
    // A single level that is not in a miptail needs no padding.
    if info.levels == 1 && miptail_start_level > 0 {
        return Extent2D::new(phys_level0_sa.width, phys_level0_sa.height);
    }

    let mut slice_top_w = 0;
    let mut slice_bottom_w = 0;
    let mut slice_left_h = 0;
    let mut slice_right_h = 0;

    let w0 = phys_level0_sa.width;
    let h0 = phys_level0_sa.height;

    for level in 0..info.levels {
        let w = align_npot(minify(w0, level), image_alignment_sa.width);
        let h = align_npot(minify(h0, level), image_alignment_sa.height);

        match level {
            0 => {
                slice_top_w = w;
                slice_left_h = h;
                slice_right_h = h;
            }
            1 => {
                slice_bottom_w = w;
                slice_left_h += h;
            }
            2 => {
                slice_bottom_w += w;
                slice_right_h += h;
            }
            _ => slice_right_h += h,
        }

        // The miptail occupies a single tile, the size of the level it starts at.
        if level >= miptail_start_level {
            break;
        }
    }

    Extent2D::new(
        slice_top_w.max(slice_bottom_w),
        slice_left_h.max(slice_right_h),
    )
}

fn phys_total_extent_el_gfx4_2d(
    device: &Device,
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
    array_pitch_span: ArrayPitchSpan,
    miptail_start_level: u32,
) -> (u32, Extent4D) {
    let layout = info.format.layout();
    let (bw, bh, bd) = (layout.bw as u32, layout.bh as u32, layout.bd as u32);

    let phys_slice0_sa = phys_slice0_extent_sa_gfx4_2d(
        info,
        image_alignment_sa,
        phys_level0_sa,
        miptail_start_level,
    );
    let array_pitch_el_rows = array_pitch_el_rows_gfx4_2d(
        device,
        info,
        tile_info,
        image_alignment_sa,
        phys_level0_sa,
        array_pitch_span,
        &phys_slice0_sa,
    );

    let phys_total_el = if tile_info.tiling.is_std_y() || tile_info.tiling == Tiling::Tile64 {
        // Slices and layers are addressed by the tiling itself.
        Extent4D::new(
            align_div_npot(phys_slice0_sa.width, bw),
            align_div_npot(phys_slice0_sa.height, bh),
            align_div_npot(phys_level0_sa.depth, bd),
            phys_level0_sa.array_len,
        )
    } else {
        let array_len = phys_level0_sa.depth.max(phys_level0_sa.array_len);

        Extent4D::new(
            align_div_npot(phys_slice0_sa.width, bw),
            array_pitch_el_rows * (array_len - 1) + align_div_npot(phys_slice0_sa.height, bh),
            1,
            1,
        )
    };

    (array_pitch_el_rows, phys_total_el)
}

fn phys_total_extent_el_gfx4_3d(
    info: &SurfaceCreateInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
) -> (u32, Extent4D) {
    let layout = info.format.layout();
    debug_assert!(info.samples == 1);

    let mut total_w = 0;
    let mut total_h = 0;

    let w0 = phys_level0_sa.width;
    let h0 = phys_level0_sa.height;
    let d0 = phys_level0_sa.depth;
    let a0 = phys_level0_sa.array_len;

    for level in 0..info.levels {
        let level_w = align_npot(minify(w0, level), image_alignment_sa.width);
        let level_h = align_npot(minify(h0, level), image_alignment_sa.height);
        let level_d = if info.dim == SurfaceDim::Dim3d {
            minify(d0, level)
        } else {
            a0
        };

        let max_layers_horiz = level_d.min(1 << level);
        let max_layers_vert = align(level_d, 1 << level) >> level;

        total_w = total_w.max(level_w * max_layers_horiz);
        total_h += level_h * max_layers_vert;
    }

    let array_pitch_el_rows =
        align_npot(phys_level0_sa.height, image_alignment_sa.height) / layout.bh as u32;
    let phys_total_el = Extent4D::new(
        total_w / layout.bw as u32,
        total_h / layout.bh as u32,
        1,
        1,
    );

    (array_pitch_el_rows, phys_total_el)
}

fn phys_total_extent_el_gfx6_stencil_hiz(
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
) -> (u32, Extent4D) {
    let layout = info.format.layout();

    let tile_extent_sa = Extent2D::new(
        tile_info.logical_extent_el.width * layout.bw as u32,
        tile_info.logical_extent_el.height * layout.bh as u32,
    );
    debug_assert!(tile_extent_sa.width % image_alignment_sa.width == 0);
    debug_assert!(tile_extent_sa.height % image_alignment_sa.height == 0);

    let w0 = phys_level0_sa.width;
    let h0 = phys_level0_sa.height;

    // Every level holds all of the layers, at the height of level 0.
    let h = align(h0, image_alignment_sa.height) * phys_level0_sa.array_len;

    let mut total_top_w = 0;
    let mut total_bottom_w = 0;
    let mut total_h = 0;

    for level in 0..info.levels {
        let w = align(minify(w0, level), tile_extent_sa.width);
        let h = align(h, tile_extent_sa.height);

        match level {
            0 => {
                total_top_w = w;
                total_h = h;
            }
            1 => {
                total_bottom_w = w;
                total_h += h;
            }
            _ => total_bottom_w += w,
        }
    }

    let array_pitch_el_rows = align(h0, image_alignment_sa.height) / layout.bh as u32;
    let phys_total_el = Extent4D::new(
        total_top_w.max(total_bottom_w) / layout.bw as u32,
        total_h / layout.bh as u32,
        1,
        1,
    );

    (array_pitch_el_rows, phys_total_el)
}

fn phys_total_extent_el_gfx9_1d(
    info: &SurfaceCreateInfo,
    image_alignment_sa: &Extent3D,
    phys_level0_sa: &Extent4D,
) -> (u32, Extent4D) {
    let layout = info.format.layout();
    debug_assert!(phys_level0_sa.height == 1 && phys_level0_sa.depth == 1);

    let slice_w: u32 = (0..info.levels)
        .map(|level| align_npot(minify(phys_level0_sa.width, level), image_alignment_sa.width))
        .sum();

    (
        1,
        Extent4D::new(
            slice_w / layout.bw as u32,
            phys_level0_sa.array_len,
            1,
            1,
        ),
    )
}

fn row_pitch_alignment(device: &Device, info: &SurfaceCreateInfo, tile_info: &TileInfo) -> u32 {
    if tile_info.tiling != Tiling::Linear {
        // Lossless compression on gfx12 needs rows that are a multiple of 4 Y tiles wide.
        if device.ver() >= 12
            && info.format.supports_ccs_e(device)
            && tile_info.tiling != Tiling::X
            && !info.usage.intersects(SurfaceUsage::DISABLE_AUX)
            && info.row_pitch == 0
        {
            return align(tile_info.phys_extent.width, 512);
        }

        return tile_info.phys_extent.width;
    }

    let layout = info.format.layout();
    let bs = layout.bpb as u32 / 8;

    let mut alignment = if info.usage.intersects(SurfaceUsage::RENDER_TARGET) {
        if info.format.is_yuv() {
            2 * bs
        } else {
            bs
        }
    } else {
        1
    };

    if info.usage.is_display() {
        alignment = if info.row_pitch == 0 {
            align(alignment, 256)
        } else {
            align(alignment, 64)
        };
    }

    alignment
}

fn min_row_pitch(
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    phys_total_el: &Extent4D,
    alignment: u32,
) -> u32 {
    let bpb = info.format.layout().bpb as u32;

    if tile_info.tiling == Tiling::Linear {
        return align_npot(bpb / 8 * phys_total_el.width, alignment);
    }

    debug_assert!(bpb % tile_info.format_bpb == 0);
    debug_assert!(alignment >= tile_info.phys_extent.width);

    let tile_el_scale = bpb / tile_info.format_bpb;
    let total_w_tl = align_div_npot(
        phys_total_el.width * tile_el_scale,
        tile_info.logical_extent_el.width,
    );

    align(total_w_tl * tile_info.phys_extent.width, alignment)
}

fn pitch_in_range(n: u32, bits: u32) -> bool {
    bits != 0 && 1 <= n && n as u64 <= 1 << bits
}

fn row_pitch(
    device: &Device,
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    dim_layout: DimLayout,
    phys_total_el: &Extent4D,
) -> Result<u32, Box<ValidationError>> {
    let alignment = row_pitch_alignment(device, info, tile_info);
    let min_row_pitch = min_row_pitch(info, tile_info, phys_total_el, alignment);

    if info.row_pitch != 0 {
        if info.row_pitch < min_row_pitch {
            return Err(Box::new(ValidationError {
                context: "row_pitch".into(),
                problem: format!(
                    "is {} bytes, which is less than the minimum of {} bytes",
                    info.row_pitch, min_row_pitch,
                )
                .into(),
            }));
        }

        if info.row_pitch % alignment != 0 {
            return Err(Box::new(ValidationError {
                context: "row_pitch".into(),
                problem: format!(
                    "is {} bytes, which is not a multiple of the required alignment of {} bytes",
                    info.row_pitch, alignment,
                )
                .into(),
            }));
        }
    }

    let row_pitch = if info.row_pitch != 0 {
        info.row_pitch
    } else {
        min_row_pitch
    };

    if row_pitch == 0 {
        return Err(Box::new(ValidationError {
            context: "row_pitch".into(),
            problem: "the calculated row pitch is zero".into(),
        }));
    }

    if dim_layout == DimLayout::Gfx9_1d {
        return Ok(row_pitch);
    }

    // Widths of the pitch fields of the surface state and of the depth, stencil and HiZ buffer
    // packets, which store the pitch minus one.
    let surface_pitch_bits = if device.ver() >= 7 { 18 } else { 17 };
    let aux_pitch_bits = match device.ver() {
        9.. => 10,
        7..=8 => 9,
        _ => 0,
    };
    let row_pitch_tl = row_pitch / tile_info.phys_extent.width;

    let checks = [
        (
            SurfaceUsage::RENDER_TARGET | SurfaceUsage::TEXTURE | SurfaceUsage::STORAGE,
            row_pitch,
            surface_pitch_bits,
            "the surface state",
        ),
        (
            SurfaceUsage::CCS | SurfaceUsage::MCS,
            row_pitch_tl,
            aux_pitch_bits,
            "the auxiliary surface pitch",
        ),
        (SurfaceUsage::DEPTH, row_pitch, surface_pitch_bits, "the depth buffer"),
        (SurfaceUsage::HIZ, row_pitch, 17, "the HiZ buffer"),
        (SurfaceUsage::STENCIL, row_pitch, 17, "the stencil buffer"),
    ];

    for (usage, pitch, bits, field) in checks {
        if info.usage.intersects(usage) && !pitch_in_range(pitch, bits) {
            return Err(Box::new(ValidationError {
                context: "row_pitch".into(),
                problem: format!(
                    "the row pitch ({} bytes) cannot be expressed in {} on {}",
                    row_pitch,
                    field,
                    device.version(),
                )
                .into(),
            }));
        }
    }

    Ok(row_pitch)
}

fn surface_size(
    device: &Device,
    info: &SurfaceCreateInfo,
    tile_info: &TileInfo,
    phys_total_el: &Extent4D,
    array_pitch_el_rows: u32,
    row_pitch: u32,
) -> Result<DeviceSize, Box<ValidationError>> {
    let mut size = if tile_info.tiling == Tiling::Linear {
        debug_assert!(phys_total_el.depth == 1 && phys_total_el.array_len == 1);

        row_pitch as DeviceSize * phys_total_el.height as DeviceSize
    } else {
        debug_assert!(row_pitch % tile_info.phys_extent.width == 0);
        let tile = &tile_info.logical_extent_el;

        let (array_slices, array_pitch_tl_rows) = if phys_total_el.depth > 1 {
            debug_assert!(array_pitch_el_rows % tile.height == 0);
            (
                align_div_npot(phys_total_el.depth, tile.depth),
                array_pitch_el_rows / tile.height,
            )
        } else if phys_total_el.array_len > 1 {
            debug_assert!(array_pitch_el_rows % tile.height == 0);
            (
                align_div_npot(phys_total_el.array_len, tile.array_len),
                array_pitch_el_rows / tile.height,
            )
        } else {
            (1, 0)
        };

        let total_h_tl = (array_slices - 1) as DeviceSize * array_pitch_tl_rows as DeviceSize
            + align_div_npot(phys_total_el.height, tile.height) as DeviceSize;

        total_h_tl * tile_info.phys_extent.height as DeviceSize * row_pitch as DeviceSize
    };

    if info.usage.intersects(SurfaceUsage::SPARSE) {
        size = align_u64(size, 64 * 1024);
    }

    let max_size = device.max_surface_size();

    if size > max_size {
        return Err(Box::new(ValidationError {
            problem: format!(
                "the calculated size ({} bytes) exceeds the limit of {} bytes on {}",
                size,
                max_size,
                device.version(),
            )
            .into(),
            ..Default::default()
        }));
    }

    Ok(size)
}

fn base_alignment(device: &Device, info: &SurfaceCreateInfo, tile_info: &TileInfo) -> DeviceSize {
    let mut alignment: DeviceSize = if tile_info.tiling == Tiling::Linear {
        let mut alignment = info.min_alignment.max(1);

        if info.usage.intersects(SurfaceUsage::RENDER_TARGET) {
            let element_size = if info.format.is_yuv() {
                tile_info.format_bpb / 4
            } else {
                tile_info.format_bpb / 8
            };
            alignment = alignment.max(element_size);
        }

        let mut alignment = alignment.next_power_of_two() as DeviceSize;

        if info.usage.is_display() {
            alignment = alignment.max(64);
        }

        alignment
    } else {
        let tile_size = tile_info.size();
        debug_assert!(tile_size.is_power_of_two());

        let mut alignment = (info.min_alignment as DeviceSize).max(tile_size);

        if tile_info.tiling == Tiling::Gfx12Ccs {
            alignment = alignment.max(4096);
        }

        // Each 64 KiB (1 MiB on gfx12.5) of main surface maps to one aux-map entry.
        if device.has_aux_map()
            && (info.format.supports_ccs_d(device) || info.format.supports_ccs_e(device))
            && !info.usage.intersects(SurfaceUsage::DISABLE_AUX)
        {
            alignment = alignment.max(if device.verx10() >= 125 {
                1024 * 1024
            } else {
                64 * 1024
            });
        }

        alignment
    };

    if info.usage.intersects(SurfaceUsage::SPARSE) {
        alignment = alignment.max(64 * 1024);
    }

    alignment
}

#[cfg(test)]
mod tests {
    use super::interleaved_msaa_px_size_sa;
    use crate::{
        device::{Device, DeviceCreateInfo},
        format::Format,
        surface::{ArrayPitchSpan, DimLayout, MsaaLayout, Surface, SurfaceCreateInfo, SurfaceDim, SurfaceUsage},
        tiling::{Tiling, TilingFlags},
        Extent2D, Extent3D, Extent4D, Version,
    };
    use proptest::prelude::*;

    fn rgba8(extent: [u32; 3], usage: SurfaceUsage) -> SurfaceCreateInfo {
        SurfaceCreateInfo {
            format: Format::R8G8B8A8_UNORM,
            extent,
            usage,
            ..Default::default()
        }
    }

    #[test]
    fn interleaved_px_size() {
        assert_eq!(interleaved_msaa_px_size_sa(1), Extent2D::new(1, 1));
        assert_eq!(interleaved_msaa_px_size_sa(2), Extent2D::new(2, 1));
        assert_eq!(interleaved_msaa_px_size_sa(4), Extent2D::new(2, 2));
        assert_eq!(interleaved_msaa_px_size_sa(8), Extent2D::new(4, 2));
        assert_eq!(interleaved_msaa_px_size_sa(16), Extent2D::new(4, 4));
    }

    #[test]
    fn mipmapped_2d() {
        let device = gfx_device!(8);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 10,
                ..rgba8([512, 512, 1], SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX)
            },
        )
        .unwrap();

        assert_eq!(surface.tiling(), Tiling::Y0);
        assert_eq!(surface.image_alignment_el(), Extent3D::new(4, 4, 1));
        // Level 0 on top, level 1 below it, levels 2 and up stacked to the right of level 1.
        assert_eq!(surface.array_pitch_el_rows(), 772);
        assert_eq!(surface.row_pitch(), 2048);
        assert_eq!(surface.size(), 25 * 32 * 2048);
    }

    #[test]
    fn gfx4_3d_total_extent() {
        let device = gfx_device!(8);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim3d,
                levels: 9,
                ..rgba8([256, 256, 256], SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX)
            },
        )
        .unwrap();

        assert_eq!(surface.dim_layout(), DimLayout::Gfx4_3d);
        assert_eq!(surface.array_pitch_span(), ArrayPitchSpan::Compact);
        assert_eq!(surface.array_pitch_el_rows(), 256);
        assert_eq!(surface.row_pitch(), 1024);

        // 65536 + 8192 + 1024 + 128 + 16 + 8 + 4 + 4 + 4 rows of slices.
        let total_h: u64 = 74916;
        assert_eq!(surface.size(), total_h.div_ceil(32) * 32 * 1024);
    }

    #[test]
    fn gfx9_3d_uses_2d_layout() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim3d,
                ..rgba8([64, 40, 4], SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX)
            },
        )
        .unwrap();

        assert_eq!(surface.dim_layout(), DimLayout::Gfx4_2d);
        assert_eq!(surface.tiling(), Tiling::Y0);
        // 40 rows, aligned to the 32 row tile.
        assert_eq!(surface.array_pitch_el_rows(), 64);
        assert_eq!(surface.size(), 4 * 2 * 32 * 256);
    }

    #[test]
    fn gfx6_separate_stencil() {
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

        assert_eq!(surface.tiling(), Tiling::W);
        assert_eq!(surface.dim_layout(), DimLayout::Gfx6StencilHiz);
        assert_eq!(surface.image_alignment_el(), Extent3D::new(8, 8, 1));
        assert_eq!(surface.array_pitch_el_rows(), 64);
        assert_eq!(surface.row_pitch(), 256);
        assert_eq!(surface.size(), 4 * 32 * 256);
    }

    #[test]
    fn gfx9_1d() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim1d,
                levels: 3,
                array_len: 4,
                ..rgba8([100, 1, 1], SurfaceUsage::TEXTURE)
            },
        )
        .unwrap();

        assert_eq!(surface.tiling(), Tiling::Linear);
        assert_eq!(surface.dim_layout(), DimLayout::Gfx9_1d);
        assert_eq!(surface.array_pitch_el_rows(), 1);
        // Levels of 128, 64 and 64 aligned pixels side by side.
        assert_eq!(surface.row_pitch(), 256 * 4);
        assert_eq!(surface.size(), 256 * 4 * 4);
    }

    #[test]
    fn interleaved_depth() {
        let device = gfx_device!(7);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::R24_UNORM_X8_TYPELESS,
                extent: [100, 100, 1],
                samples: 4,
                usage: SurfaceUsage::DEPTH,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(surface.msaa_layout(), MsaaLayout::Interleaved);
        assert_eq!(surface.phys_level0_sa(), Extent4D::new(200, 200, 1, 1));
        assert_eq!(surface.logical_level0_px(), Extent4D::new(100, 100, 1, 1));
    }

    #[test]
    fn array_msaa_color() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                array_len: 2,
                samples: 4,
                ..rgba8([64, 64, 1], SurfaceUsage::RENDER_TARGET)
            },
        )
        .unwrap();

        assert_eq!(surface.msaa_layout(), MsaaLayout::Array);
        assert_eq!(surface.phys_level0_sa(), Extent4D::new(64, 64, 1, 8));
        assert_eq!(surface.array_pitch_el_rows(), 64);
        assert_eq!(surface.size(), 16 * 32 * 256);
    }

    #[test]
    fn msaa_rejections() {
        // No multisampling before gfx6, and only 4x on gfx6.
        assert!(Surface::new(
            &gfx_device!(5),
            SurfaceCreateInfo {
                samples: 4,
                ..rgba8([64, 64, 1], SurfaceUsage::RENDER_TARGET)
            },
        )
        .is_err());

        let err = Surface::new(
            &gfx_device!(6),
            SurfaceCreateInfo {
                samples: 8,
                ..rgba8([64, 64, 1], SurfaceUsage::RENDER_TARGET)
            },
        )
        .unwrap_err();
        assert_eq!(err.context, "create_info.samples");

        // Linear multisampled surfaces do not exist.
        let err = Surface::new(
            &gfx_device!(9),
            SurfaceCreateInfo {
                samples: 4,
                tiling_flags: TilingFlags::LINEAR,
                ..rgba8([64, 64, 1], SurfaceUsage::RENDER_TARGET)
            },
        )
        .unwrap_err();
        assert_eq!(err.context, "create_info.tiling_flags");
    }

    #[test]
    fn requested_row_pitch() {
        let device = gfx_device!(9);
        let texture = rgba8([100, 60, 1], SurfaceUsage::TEXTURE);

        let err = Surface::new(
            &device,
            SurfaceCreateInfo {
                row_pitch: 384,
                ..texture.clone()
            },
        )
        .unwrap_err();
        assert_eq!(err.context, "create_info.row_pitch");

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                row_pitch: 640,
                ..texture.clone()
            },
        )
        .unwrap();
        assert_eq!(surface.tiling(), Tiling::Y0);
        assert_eq!(surface.row_pitch(), 640);

        // Not a whole number of Y tiles, so the surface falls back to linear.
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                row_pitch: 600,
                ..texture.clone()
            },
        )
        .unwrap();
        assert_eq!(surface.tiling(), Tiling::Linear);
        assert_eq!(surface.row_pitch(), 600);

        let err = Surface::new(
            &device,
            SurfaceCreateInfo {
                row_pitch: 600,
                tiling_flags: TilingFlags::Y0,
                ..texture
            },
        )
        .unwrap_err();
        assert_eq!(err.context, "create_info.row_pitch");
    }

    #[test]
    fn size_limit() {
        let device = gfx_device!(8);
        let result = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::R32G32B32A32_FLOAT,
                extent: [16384, 16384, 1],
                usage: SurfaceUsage::TEXTURE,
                ..Default::default()
            },
        );
        assert!(result.is_err());

        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::R32G32B32A32_FLOAT,
                extent: [16384, 16384, 1],
                usage: SurfaceUsage::TEXTURE,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(surface.size(), 1 << 32);
    }

    #[test]
    fn sparse() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            rgba8([64, 64, 1], SurfaceUsage::TEXTURE | SurfaceUsage::SPARSE),
        )
        .unwrap();

        assert_eq!(surface.tiling(), Tiling::SklYs);
        assert_eq!(surface.image_alignment_el(), Extent3D::new(128, 128, 1));
        assert_eq!(surface.miptail_start_level(), 0);
        assert_eq!(surface.row_pitch(), 512);
        assert_eq!(surface.size(), 65536);
        assert_eq!(surface.alignment(), 65536);
    }

    #[test]
    fn miptail() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 9,
                tiling_flags: TilingFlags::SKL_YF,
                ..rgba8([256, 256, 1], SurfaceUsage::TEXTURE)
            },
        )
        .unwrap();

        // 32×32 element Yf tiles. Level 0 of the miptail sits 16 elements in, so the first level
        // that fits is 16×16, level 4.
        assert_eq!(surface.tiling(), Tiling::SklYf);
        assert_eq!(surface.miptail_start_level(), 4);

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 9,
                tiling_flags: TilingFlags::SKL_YF,
                min_miptail_start_level: 6,
                ..rgba8([256, 256, 1], SurfaceUsage::TEXTURE)
            },
        )
        .unwrap();
        assert_eq!(surface.miptail_start_level(), 6);
    }

    #[test]
    fn linear_display() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                tiling_flags: TilingFlags::LINEAR,
                ..rgba8(
                    [100, 10, 1],
                    SurfaceUsage::RENDER_TARGET | SurfaceUsage::DISPLAY,
                )
            },
        )
        .unwrap();

        assert_eq!(surface.row_pitch(), 512);
        assert_eq!(surface.alignment(), 64);
    }

    #[test]
    fn aux_map_alignment() {
        let device = Device::new(DeviceCreateInfo {
            version: Version::GFX12,
            has_aux_map: true,
            ..Default::default()
        })
        .unwrap();
        let texture = rgba8([64, 64, 1], SurfaceUsage::TEXTURE);

        let surface = Surface::new(&device, texture.clone()).unwrap();
        assert_eq!(surface.tiling(), Tiling::Y0);
        // Four Y tiles, so that the CCS of one row is a whole cache line.
        assert_eq!(surface.row_pitch(), 512);
        assert_eq!(surface.alignment(), 64 * 1024);

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                usage: SurfaceUsage::TEXTURE | SurfaceUsage::DISABLE_AUX,
                ..texture.clone()
            },
        )
        .unwrap();
        assert_eq!(surface.row_pitch(), 256);
        assert_eq!(surface.alignment(), 4096);

        let device = Device::new(DeviceCreateInfo {
            version: Version::GFX12_5,
            has_aux_map: true,
            ..Default::default()
        })
        .unwrap();
        let surface = Surface::new(&device, texture).unwrap();
        assert_eq!(surface.tiling(), Tiling::Tile4);
        assert_eq!(surface.alignment(), 1024 * 1024);
    }

    #[test]
    fn no_supported_tiling() {
        let err = Surface::new(
            &gfx_device!(8),
            SurfaceCreateInfo {
                tiling_flags: TilingFlags::TILE_4,
                ..rgba8([64, 64, 1], SurfaceUsage::TEXTURE)
            },
        )
        .unwrap_err();
        assert_eq!(err.context, "create_info.tiling_flags");
    }

    fn array_pitch(device: &Device, width: u32, height: u32) -> (u32, u32) {
        let surface = Surface::new(
            device,
            SurfaceCreateInfo {
                levels: 3,
                array_len: 4,
                ..rgba8([width, height, 1], SurfaceUsage::TEXTURE)
            },
        )
        .unwrap();

        let align_h = surface.image_alignment_sa().height;
        (surface.array_pitch_el_rows(), height.div_ceil(align_h) * align_h)
    }

    proptest! {
        #[test]
        fn array_pitch_is_monotonic(
            ver in prop_oneof![Just(7u16), Just(8), Just(9), Just(12)],
            width in 8u32..2048,
            height in 8u32..2048,
            dw in 0u32..256,
            dh in 0u32..256,
        ) {
            let device = gfx_device!(ver);

            let (pitch, aligned_height) = array_pitch(&device, width, height);
            prop_assert!(pitch >= aligned_height);

            let (larger_pitch, _) = array_pitch(&device, width + dw, height + dh);
            prop_assert!(larger_pitch >= pitch);
        }
    }
}
