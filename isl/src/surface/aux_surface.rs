// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Auxiliary surfaces: hierarchical depth (HiZ), multisample control (MCS) and color
//! compression control (CCS) surfaces, each derived from the main surface it describes.

use super::{MsaaLayout, Surface, SurfaceCreateInfo, SurfaceDim, SurfaceUsage};
use crate::{
    device::Device,
    format::Format,
    tiling::{Tiling, TilingFlags},
    ValidationError,
};

isl_enum! {
    /// The value of the surface format field of the depth buffer packet.
    DepthFormat = u32;

    /// 32-bit float depth with 8 bits of stencil and 24 unused bits. Combined depth-stencil
    /// before gfx7 only.
    D32FloatS8X24Uint = 0,

    D32Float = 1,

    /// 24-bit normalized depth with 8 bits of stencil. Combined depth-stencil before gfx7 only.
    D24UnormS8Uint = 2,

    D24UnormX8Uint = 3,

    D16Unorm = 5,
}

impl Surface {
    /// Lays out the HiZ surface of a depth surface.
    ///
    /// Before gfx9, the HiZ surface has the same number of samples as the depth surface. From
    /// gfx9 on, it compresses pixels rather than samples and is single-sampled.
    pub fn hiz_surface(&self, device: &Device) -> Result<Surface, Box<ValidationError>> {
        // Gfx5 HiZ has its own layout rules, which are not modelled.
        if device.ver() < 6 {
            return Err(Box::new(ValidationError {
                problem: format!("HiZ surfaces are not supported on {}", device.version()).into(),
                ..Default::default()
            }));
        }

        if !self.usage.intersects(SurfaceUsage::DEPTH) {
            return Err(Box::new(ValidationError {
                context: "self.usage()".into(),
                problem: "does not contain `SurfaceUsage::DEPTH`".into(),
            }));
        }

        // HiZ cannot be used with combined depth-stencil buffers.
        if self.usage.intersects(SurfaceUsage::STENCIL) {
            return Err(Box::new(ValidationError {
                context: "self.usage()".into(),
                problem: "contains `SurfaceUsage::STENCIL`".into(),
            }));
        }

        debug_assert!(matches!(
            self.msaa_layout,
            MsaaLayout::None | MsaaLayout::Interleaved,
        ));

        let format = if device.verx10() >= 125 {
            Format::GFX125_HIZ
        } else {
            Format::HIZ
        };

        Surface::new(
            device,
            SurfaceCreateInfo {
                dim: self.dim,
                format,
                extent: [
                    self.logical_level0_px.width,
                    self.logical_level0_px.height,
                    self.logical_level0_px.depth,
                ],
                levels: self.levels,
                array_len: self.logical_level0_px.array_len,
                samples: if device.ver() >= 9 { 1 } else { self.samples },
                usage: SurfaceUsage::HIZ,
                tiling_flags: TilingFlags::HIZ,
                ..Default::default()
            },
        )
    }

    /// Lays out the MCS surface of a multisampled color surface.
    pub fn mcs_surface(&self, device: &Device) -> Result<Surface, Box<ValidationError>> {
        if self.msaa_layout != MsaaLayout::Array {
            return Err(Box::new(ValidationError {
                context: "self.msaa_layout()".into(),
                problem: "is not `MsaaLayout::Array`".into(),
            }));
        }

        if device.ver() >= 12 && self.format == Format::R9G9B9E5_SHAREDEXP {
            return Err(Box::new(ValidationError {
                context: "self.format()".into(),
                problem: format!("cannot be compressed with MCS on {}", device.version()).into(),
            }));
        }

        debug_assert!(self.samples > 1);
        debug_assert!(self.dim == SurfaceDim::Dim2d && self.levels == 1);

        let format = match self.samples {
            2 => Format::MCS_2X,
            4 => Format::MCS_4X,
            8 => Format::MCS_8X,
            _ => Format::MCS_16X,
        };

        // MCS surfaces hold one entry per pixel, so they are single-sampled.
        Surface::new(
            device,
            SurfaceCreateInfo {
                format,
                extent: [
                    self.logical_level0_px.width,
                    self.logical_level0_px.height,
                    1,
                ],
                array_len: self.logical_level0_px.array_len,
                usage: SurfaceUsage::MCS,
                tiling_flags: TilingFlags::ANY,
                ..Default::default()
            },
        )
    }

    /// Returns whether the surface can be compressed or fast-cleared through a CCS.
    ///
    /// From gfx12 on, depth surfaces need their HiZ surface, and multisampled color surfaces their
    /// MCS surface, to be given as `hiz_or_mcs`.
    #[inline]
    pub fn supports_ccs(&self, device: &Device, hiz_or_mcs: Option<&Surface>) -> bool {
        self.validate_ccs(device, hiz_or_mcs).is_ok()
    }

    fn validate_ccs(
        &self,
        device: &Device,
        hiz_or_mcs: Option<&Surface>,
    ) -> Result<(), Box<ValidationError>> {
        let unsupported = |problem: &'static str| {
            Err(Box::new(ValidationError {
                problem: problem.into(),
                ..Default::default()
            }))
        };

        if self.usage.intersects(SurfaceUsage::DISABLE_AUX) {
            return unsupported("the surface was created with `SurfaceUsage::DISABLE_AUX`");
        }

        if !self.format.supports_ccs_d(device) && !self.format.supports_ccs_e(device) {
            return unsupported("the format of the surface cannot be used with a CCS");
        }

        if self.tiling == Tiling::Linear {
            return unsupported("linear surfaces cannot have a CCS");
        }

        // Miptail slots beyond 11 cannot be compressed.
        if self.miptail_start_level < self.levels {
            let miptail_levels = self.levels - self.miptail_start_level;

            if miptail_levels + self.tiling.miptail_base_row() > 11 {
                return unsupported("the miptail of the surface extends past slot 11");
            }

            if device.verx10() <= 120 && self.dim == SurfaceDim::Dim3d {
                return unsupported("3D surfaces with a miptail cannot have a CCS");
            }
        }

        if self.tiling.is_std_y() {
            return unsupported("surfaces with a standard Y tiling cannot have a CCS");
        }

        if device.ver() >= 12 {
            let aux_size = hiz_or_mcs.map_or(0, Surface::size);

            if self.usage.intersects(SurfaceUsage::STENCIL) {
                debug_assert!(aux_size == 0);

                if self.samples > 1 {
                    return unsupported("multisampled stencil surfaces cannot have a CCS");
                }
            } else if self.usage.intersects(SurfaceUsage::DEPTH) {
                if aux_size == 0 {
                    return unsupported("depth surfaces need a HiZ surface to have a CCS");
                }

                debug_assert!(hiz_or_mcs.is_some_and(|hiz| hiz.tiling == Tiling::Hiz));
            } else if self.samples > 1 {
                if aux_size == 0 {
                    return unsupported(
                        "multisampled color surfaces need an MCS surface to have a CCS",
                    );
                }

                debug_assert!(hiz_or_mcs.is_some_and(|mcs| mcs.format.is_mcs()));
            } else {
                debug_assert!(aux_size == 0);
            }

            if self.row_pitch % 512 != 0 {
                return unsupported("the row pitch of the surface is not a multiple of 512");
            }

            if self.dim == SurfaceDim::Dim3d {
                return unsupported("3D surfaces cannot have a CCS");
            }

            if !matches!(self.tiling, Tiling::Y0 | Tiling::Tile4 | Tiling::Tile64) {
                return unsupported("the tiling of the surface cannot be used with a CCS");
            }

            if self.samples == 1 && self.tiling == Tiling::Tile64 {
                return unsupported("single-sampled Tile64 surfaces cannot have a CCS");
            }
        } else {
            debug_assert!(hiz_or_mcs.map_or(0, Surface::size) == 0);

            if self.samples > 1 {
                return unsupported("multisampled surfaces cannot have a CCS");
            }

            if self.usage.is_depth_or_stencil() {
                return unsupported("depth and stencil surfaces cannot have a CCS");
            }

            if device.ver() <= 8 && self.dim != SurfaceDim::Dim2d {
                return unsupported("only 2D surfaces can have a CCS");
            }

            if device.ver() <= 7
                && (self.levels > 1 || self.logical_level0_px.array_len > 1)
            {
                return unsupported("mipmapped and array surfaces cannot have a CCS");
            }

            if device.ver() >= 9 && !self.tiling.is_any_y() {
                return unsupported("only Y-tiled surfaces can have a CCS");
            }
        }

        Ok(())
    }

    /// Lays out the CCS of the surface.
    ///
    /// From gfx12 on, the CCS is a scaled-down copy of the whole main surface viewed as a single
    /// 2D image, 1/256 of its size. Before gfx12, it mirrors the levels and layers of the main
    /// surface.
    ///
    /// `row_pitch` is the row pitch of the CCS, or zero to compute it.
    pub fn ccs_surface(
        &self,
        device: &Device,
        hiz_or_mcs: Option<&Surface>,
        row_pitch: u32,
    ) -> Result<Surface, Box<ValidationError>> {
        self.validate_ccs(device, hiz_or_mcs)?;

        let bpb = self.format.layout().bpb;

        if device.ver() >= 12 {
            let format = match bpb {
                8 => Format::GFX12_CCS_8BPP_Y0,
                16 => Format::GFX12_CCS_16BPP_Y0,
                32 => Format::GFX12_CCS_32BPP_Y0,
                64 => Format::GFX12_CCS_64BPP_Y0,
                128 => Format::GFX12_CCS_128BPP_Y0,
                _ => {
                    return Err(Box::new(ValidationError {
                        context: "self.format()".into(),
                        problem: "has no CCS format for its element size".into(),
                    }))
                }
            };

            let ccs = Surface::new(
                device,
                SurfaceCreateInfo {
                    format,
                    extent: [
                        self.row_pitch_el(),
                        (self.size / self.row_pitch as u64) as u32,
                        1,
                    ],
                    row_pitch,
                    usage: SurfaceUsage::CCS,
                    tiling_flags: TilingFlags::GFX12_CCS,
                    ..Default::default()
                },
            )?;
            debug_assert!(ccs.size == self.size / 256);

            return Ok(ccs);
        }

        let format = match (device.ver() >= 9, self.tiling, bpb) {
            (true, _, 32) => Format::GFX9_CCS_32BPP,
            (true, _, 64) => Format::GFX9_CCS_64BPP,
            (true, _, 128) => Format::GFX9_CCS_128BPP,
            (false, Tiling::Y0, 32) => Format::GFX7_CCS_32BPP_Y,
            (false, Tiling::Y0, 64) => Format::GFX7_CCS_64BPP_Y,
            (false, Tiling::Y0, 128) => Format::GFX7_CCS_128BPP_Y,
            (false, Tiling::X, 32) => Format::GFX7_CCS_32BPP_X,
            (false, Tiling::X, 64) => Format::GFX7_CCS_64BPP_X,
            (false, Tiling::X, 128) => Format::GFX7_CCS_128BPP_X,
            _ => {
                return Err(Box::new(ValidationError {
                    problem: format!(
                        "there is no CCS format for {} bit elements with {} tiling on {}",
                        bpb,
                        self.tiling,
                        device.version(),
                    )
                    .into(),
                    ..Default::default()
                }))
            }
        };

        Surface::new(
            device,
            SurfaceCreateInfo {
                dim: self.dim,
                format,
                extent: [
                    self.logical_level0_px.width,
                    self.logical_level0_px.height,
                    self.logical_level0_px.depth,
                ],
                levels: self.levels,
                array_len: self.logical_level0_px.array_len,
                row_pitch,
                usage: SurfaceUsage::CCS,
                tiling_flags: TilingFlags::CCS,
                ..Default::default()
            },
        )
    }

    /// Returns the format to program in the depth buffer packet for this depth surface, or `None`
    /// if the format of the surface cannot be used as a depth buffer on `device`.
    pub fn depth_format(&self, device: &Device) -> Option<DepthFormat> {
        if !self.usage.intersects(SurfaceUsage::DEPTH) {
            return None;
        }

        // Combined depth-stencil buffers do not exist from gfx7 on.
        let has_stencil = self.usage.intersects(SurfaceUsage::STENCIL);
        if has_stencil && device.ver() >= 7 {
            return None;
        }

        match self.format {
            Format::R32_FLOAT_X8X24_TYPELESS if device.ver() < 7 => {
                Some(DepthFormat::D32FloatS8X24Uint)
            }
            Format::R32_FLOAT if !has_stencil => Some(DepthFormat::D32Float),
            Format::R24_UNORM_X8_TYPELESS if has_stencil => Some(DepthFormat::D24UnormS8Uint),
            Format::R24_UNORM_X8_TYPELESS => Some(DepthFormat::D24UnormX8Uint),
            Format::R16_UNORM if !has_stencil => Some(DepthFormat::D16Unorm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DepthFormat;
    use crate::{
        device::{Device, DeviceCreateInfo},
        format::Format,
        surface::{DimLayout, MsaaLayout, Surface, SurfaceCreateInfo, SurfaceDim, SurfaceUsage},
        tiling::{Tiling, TilingFlags},
        Version,
    };

    fn depth(format: Format, extent: [u32; 2], samples: u32) -> SurfaceCreateInfo {
        SurfaceCreateInfo {
            format,
            extent: [extent[0], extent[1], 1],
            samples,
            usage: SurfaceUsage::DEPTH | SurfaceUsage::TEXTURE,
            ..Default::default()
        }
    }

    fn color(extent: [u32; 2], samples: u32) -> SurfaceCreateInfo {
        SurfaceCreateInfo {
            format: Format::R8G8B8A8_UNORM,
            extent: [extent[0], extent[1], 1],
            samples,
            usage: SurfaceUsage::RENDER_TARGET | SurfaceUsage::TEXTURE,
            ..Default::default()
        }
    }

    #[test]
    fn hiz() {
        let device = gfx_device!(8);
        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [256, 128], 4)).unwrap();
        assert_eq!(surface.msaa_layout(), MsaaLayout::Interleaved);

        let hiz = surface.hiz_surface(&device).unwrap();
        assert_eq!(hiz.format(), Format::HIZ);
        assert_eq!(hiz.tiling(), Tiling::Hiz);
        assert_eq!(hiz.samples(), 4);
        assert_eq!(hiz.logical_level0_px(), surface.logical_level0_px());

        // Single-sampled from gfx9 on.
        let device = gfx_device!(9);
        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [256, 128], 4)).unwrap();
        let hiz = surface.hiz_surface(&device).unwrap();
        assert_eq!(hiz.samples(), 1);

        let device = gfx_device!(12, 5);
        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [256, 128], 1)).unwrap();
        assert_eq!(surface.hiz_surface(&device).unwrap().format(), Format::GFX125_HIZ);
    }

    #[test]
    fn hiz_rejections() {
        let device = gfx_device!(9);
        let surface = Surface::new(&device, color([64, 64], 1)).unwrap();
        assert!(surface.hiz_surface(&device).is_err());

        let device = gfx_device!(5);
        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [64, 64], 1)).unwrap();
        assert!(surface.hiz_surface(&device).is_err());

        // Combined depth-stencil.
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                usage: SurfaceUsage::DEPTH | SurfaceUsage::STENCIL,
                ..depth(Format::R24_UNORM_X8_TYPELESS, [64, 64], 1)
            },
        )
        .unwrap();
        assert!(surface.hiz_surface(&device).is_err());

        let device = gfx_device!(6);
        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [64, 64], 1)).unwrap();
        let hiz = surface.hiz_surface(&device).unwrap();
        assert_eq!(hiz.tiling(), Tiling::Hiz);
        assert_eq!(hiz.dim_layout(), DimLayout::Gfx6StencilHiz);
    }

    #[test]
    fn mcs() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                array_len: 2,
                ..color([128, 64], 8)
            },
        )
        .unwrap();

        let mcs = surface.mcs_surface(&device).unwrap();
        assert_eq!(mcs.format(), Format::MCS_8X);
        assert_eq!(mcs.samples(), 1);
        assert_eq!(mcs.tiling(), Tiling::Y0);
        assert_eq!(mcs.logical_level0_px(), surface.logical_level0_px());

        let single_sampled = Surface::new(&device, color([128, 64], 1)).unwrap();
        assert!(single_sampled.mcs_surface(&device).is_err());

        let device = gfx_device!(12);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                format: Format::R9G9B9E5_SHAREDEXP,
                usage: SurfaceUsage::TEXTURE,
                ..color([64, 64], 4)
            },
        )
        .unwrap();
        assert!(surface.mcs_surface(&device).is_err());
    }

    #[test]
    fn gfx12_ccs_is_one_256th() {
        let device = gfx_device!(12);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 7,
                array_len: 3,
                ..color([100, 64], 1)
            },
        )
        .unwrap();
        assert_eq!(surface.row_pitch() % 512, 0);
        assert!(surface.supports_ccs(&device, None));

        let ccs = surface.ccs_surface(&device, None, 0).unwrap();
        assert_eq!(ccs.format(), Format::GFX12_CCS_32BPP_Y0);
        assert_eq!(ccs.tiling(), Tiling::Gfx12Ccs);
        assert_eq!(ccs.size(), surface.size() / 256);
        assert_eq!(ccs.alignment(), 4096);
    }

    #[test]
    fn gfx12_ccs_requirements() {
        let device = gfx_device!(12);

        let surface = Surface::new(&device, depth(Format::R32_FLOAT, [64, 64], 1)).unwrap();
        assert!(!surface.supports_ccs(&device, None));
        let hiz = surface.hiz_surface(&device).unwrap();
        assert!(surface.supports_ccs(&device, Some(&hiz)));

        let surface = Surface::new(&device, color([64, 64], 4)).unwrap();
        assert!(!surface.supports_ccs(&device, None));
        let mcs = surface.mcs_surface(&device).unwrap();
        assert!(surface.supports_ccs(&device, Some(&mcs)));

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                dim: SurfaceDim::Dim3d,
                extent: [64, 64, 4],
                ..color([64, 64], 1)
            },
        )
        .unwrap();
        assert!(!surface.supports_ccs(&device, None));

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                tiling_flags: TilingFlags::LINEAR,
                ..color([64, 64], 1)
            },
        )
        .unwrap();
        assert!(!surface.supports_ccs(&device, None));
        assert!(surface.ccs_surface(&device, None, 0).is_err());
    }

    #[test]
    fn legacy_ccs() {
        let device = gfx_device!(9);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 4,
                array_len: 2,
                ..color([256, 256], 1)
            },
        )
        .unwrap();

        let ccs = surface.ccs_surface(&device, None, 0).unwrap();
        assert_eq!(ccs.format(), Format::GFX9_CCS_32BPP);
        assert_eq!(ccs.tiling(), Tiling::Ccs);
        assert_eq!(ccs.levels(), 4);
        // Layers of a CCS start on a 64 row boundary.
        assert_eq!(ccs.array_pitch_el_rows() % 64, 0);

        // X tiling is not compressible from gfx9 on.
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                tiling_flags: TilingFlags::X,
                ..color([256, 256], 1)
            },
        )
        .unwrap();
        assert!(!surface.supports_ccs(&device, None));

        // Only single-level, single-layer surfaces before gfx8.
        let device = gfx_device!(7);
        let surface = Surface::new(&device, color([256, 256], 1)).unwrap();
        let ccs = surface.ccs_surface(&device, None, 0).unwrap();
        assert_eq!(ccs.format(), Format::GFX7_CCS_32BPP_Y);

        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                levels: 2,
                ..color([256, 256], 1)
            },
        )
        .unwrap();
        assert!(!surface.supports_ccs(&device, None));
    }

    #[test]
    fn disable_aux() {
        let device = Device::new(DeviceCreateInfo {
            version: Version::GFX12,
            has_aux_map: true,
            ..Default::default()
        })
        .unwrap();
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                usage: SurfaceUsage::RENDER_TARGET | SurfaceUsage::DISABLE_AUX,
                ..color([64, 64], 1)
            },
        )
        .unwrap();

        let err = surface.ccs_surface(&device, None, 0).unwrap_err();
        assert!(err.problem.contains("DISABLE_AUX"));
    }

    #[test]
    fn depth_formats() {
        let device = gfx_device!(9);
        let format_of = |format| {
            Surface::new(&device, depth(format, [16, 16], 1))
                .unwrap()
                .depth_format(&device)
        };

        assert_eq!(format_of(Format::R32_FLOAT), Some(DepthFormat::D32Float));
        assert_eq!(format_of(Format::R24_UNORM_X8_TYPELESS), Some(DepthFormat::D24UnormX8Uint));
        assert_eq!(format_of(Format::R16_UNORM), Some(DepthFormat::D16Unorm));
        assert_eq!(format_of(Format::R8G8B8A8_UNORM), None);
        assert_eq!(u32::from(DepthFormat::D16Unorm), 5);

        let device = gfx_device!(5);
        let surface = Surface::new(
            &device,
            SurfaceCreateInfo {
                usage: SurfaceUsage::DEPTH | SurfaceUsage::STENCIL,
                ..depth(Format::R24_UNORM_X8_TYPELESS, [16, 16], 1)
            },
        )
        .unwrap();
        assert_eq!(surface.depth_format(&device), Some(DepthFormat::D24UnormS8Uint));
    }
}
