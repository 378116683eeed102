// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Pixel formats understood by the surface layout engine.
//!
//! A format describes the memory layout of a single *block* of pixel data. For ordinary formats a
//! block is a single pixel, for block-compressed formats it is the compression block (4×4 for BC
//! and ETC formats, up to 12×12 for ASTC).
//!
//! The numeric value of every hardware format matches the value the hardware uses in its surface
//! state. The formats at the end of the list (`HIZ`, `MCS_*`, `*_CCS_*` and the 10 and 12 bit
//! planar formats) are internal: they never reach the hardware and only exist so that auxiliary
//! surfaces can be laid out with the same code as primary surfaces.
//!
//! # Format support
//!
//! Whether the hardware can sample from, render to, or compress a format depends on the hardware
//! generation. Each format stores, for each capability, the first generation that supports it. The
//! `supports_*` methods compare these against a [`Device`].

use crate::device::Device;
use std::fmt;

pub use self::{
    swizzle::{ChannelSelect, ColorValue, Swizzle},
    table::Format,
};

mod swizzle;
mod table;

/// The numeric encoding of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    /// The channel is not present.
    Void,
    Raw,
    Unorm,
    Snorm,
    Ufloat,
    Sfloat,
    Ufixed,
    Sfixed,
    Uint,
    Sint,
    Uscaled,
    Sscaled,
}

impl BaseType {
    /// Returns whether values of this type are read back as integers.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, BaseType::Uint | BaseType::Sint)
    }
}

/// How color values of a format are to be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colorspace {
    None,
    Linear,
    Srgb,
    Yuv,
}

/// The compression scheme of a format.
///
/// The last three variants tag the internal formats of auxiliary surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Txc {
    None,
    Dxt1,
    Dxt3,
    Dxt5,
    Fxt1,
    Rgtc1,
    Rgtc2,
    Bptc,
    Etc1,
    Etc2,
    Astc,
    Hiz,
    Mcs,
    Ccs,
}

/// Position and encoding of one channel inside a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelLayout {
    pub ty: BaseType,
    /// Bit at which the channel starts.
    pub start_bit: u8,
    /// Size in bits. Zero if the channel is absent.
    pub bits: u8,
}

impl ChannelLayout {
    const ABSENT: ChannelLayout = ChannelLayout {
        ty: BaseType::Void,
        start_bit: 0,
        bits: 0,
    };

    #[inline]
    pub const fn is_present(&self) -> bool {
        self.bits > 0
    }
}

/// The named channels of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatChannels {
    pub r: ChannelLayout,
    pub g: ChannelLayout,
    pub b: ChannelLayout,
    pub a: ChannelLayout,
    pub l: ChannelLayout,
    pub i: ChannelLayout,
    pub p: ChannelLayout,
}

impl FormatChannels {
    /// Returns the channels in the order red, green, blue, alpha, luminance, intensity, palette.
    #[inline]
    pub const fn array(&self) -> [ChannelLayout; 7] {
        [self.r, self.g, self.b, self.a, self.l, self.i, self.p]
    }
}

/// Describes the memory layout of a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatLayout {
    /// Bits per block.
    pub bpb: u16,
    /// Block width, in pixels.
    pub bw: u8,
    /// Block height, in pixels.
    pub bh: u8,
    /// Block depth, in pixels.
    pub bd: u8,
    pub channels: FormatChannels,
    pub colorspace: Colorspace,
    pub txc: Txc,
    // Next free bit while the table is being built.
    cursor: u8,
}

impl FormatLayout {
    /// Returns the type shared by every present channel, or `Void` if the channels disagree or if
    /// there are none.
    pub fn uniform_channel_type(&self) -> BaseType {
        let mut uniform = None;

        for channel in self.channels.array() {
            if !channel.is_present() {
                continue;
            }

            match uniform {
                None => uniform = Some(channel.ty),
                Some(ty) if ty == channel.ty => (),
                Some(_) => return BaseType::Void,
            }
        }

        uniform.unwrap_or(BaseType::Void)
    }

    /// Returns the number of channels with a nonzero size.
    pub fn num_channels(&self) -> u32 {
        self.channels
            .array()
            .iter()
            .filter(|channel| channel.is_present())
            .count() as u32
    }

    #[inline]
    pub const fn is_1x1x1(&self) -> bool {
        self.bw == 1 && self.bh == 1 && self.bd == 1
    }

    const fn new(bpb: u16, colorspace: Colorspace) -> Self {
        FormatLayout {
            bpb,
            bw: 1,
            bh: 1,
            bd: 1,
            channels: FormatChannels {
                r: ChannelLayout::ABSENT,
                g: ChannelLayout::ABSENT,
                b: ChannelLayout::ABSENT,
                a: ChannelLayout::ABSENT,
                l: ChannelLayout::ABSENT,
                i: ChannelLayout::ABSENT,
                p: ChannelLayout::ABSENT,
            },
            colorspace,
            txc: Txc::None,
            cursor: 0,
        }
    }

    const fn block(mut self, bw: u8, bh: u8, bd: u8, txc: Txc) -> Self {
        self.bw = bw;
        self.bh = bh;
        self.bd = bd;
        self.txc = txc;
        self
    }

    const fn next(&self, ty: BaseType, bits: u8) -> ChannelLayout {
        ChannelLayout {
            ty,
            start_bit: self.cursor,
            bits,
        }
    }

    const fn r(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.r = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn g(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.g = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn b(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.b = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn a(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.a = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn l(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.l = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn i(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.i = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    const fn p(mut self, ty: BaseType, bits: u8) -> Self {
        self.channels.p = self.next(ty, bits);
        self.cursor += bits;
        self
    }

    /// Skips unused bits.
    const fn x(mut self, bits: u8) -> Self {
        self.cursor += bits;
        self
    }
}

/// The first hardware generation, as returned by [`Device::verx10`], that supports each
/// capability of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatSupport {
    pub sampling: u16,
    pub filtering: u16,
    pub render: u16,
    pub alpha_blend: u16,
    pub typed_write: u16,
    pub typed_read: u16,
    /// Lossless color compression.
    pub ccs_e: u16,
}

impl FormatSupport {
    /// Value for capabilities that no generation has.
    pub const NEVER: u16 = u16::MAX;
}

impl Format {
    /// Returns whether the format is block-compressed, or is the format of an auxiliary surface.
    #[inline]
    pub fn is_compressed(self) -> bool {
        self.layout().txc != Txc::None
    }

    #[inline]
    pub fn is_hiz(self) -> bool {
        self.layout().txc == Txc::Hiz
    }

    #[inline]
    pub fn is_mcs(self) -> bool {
        self.layout().txc == Txc::Mcs
    }

    #[inline]
    pub fn is_ccs(self) -> bool {
        self.layout().txc == Txc::Ccs
    }

    #[inline]
    pub fn is_planar(self) -> bool {
        matches!(
            self,
            Format::PLANAR_420_8
                | Format::PLANAR_420_10
                | Format::PLANAR_420_12
                | Format::PLANAR_420_16
        )
    }

    #[inline]
    pub fn is_yuv(self) -> bool {
        self.layout().colorspace == Colorspace::Yuv
    }

    #[inline]
    pub fn is_srgb(self) -> bool {
        self.layout().colorspace == Colorspace::Srgb
    }

    /// Returns whether the red, green and blue channels are present and the alpha channel is not.
    pub fn is_rgb(self) -> bool {
        if self.is_yuv() {
            return false;
        }

        let channels = &self.layout().channels;
        channels.r.is_present()
            && channels.g.is_present()
            && channels.b.is_present()
            && !channels.a.is_present()
    }

    /// Returns whether any channel is read back as an integer.
    pub fn has_int_channel(self) -> bool {
        self.layout()
            .channels
            .array()
            .iter()
            .any(|channel| channel.ty.is_integer())
    }

    /// Returns whether the given channel (0 = red … 3 = alpha) has any bits.
    pub fn has_color_component(self, component: usize) -> bool {
        let channels = &self.layout().channels;
        let intensity = channels.i.is_present();
        let luminance = channels.l.is_present();

        match component {
            0 => channels.r.is_present() || intensity || luminance,
            1 => channels.g.is_present() || intensity || luminance,
            2 => channels.b.is_present() || intensity || luminance,
            3 => channels.a.is_present() || intensity,
            _ => false,
        }
    }

    pub fn supports_sampling(self, device: &Device) -> bool {
        device.verx10() >= self.support().sampling as u32
    }

    pub fn supports_filtering(self, device: &Device) -> bool {
        device.verx10() >= self.support().filtering as u32
    }

    pub fn supports_rendering(self, device: &Device) -> bool {
        device.verx10() >= self.support().render as u32
    }

    pub fn supports_alpha_blending(self, device: &Device) -> bool {
        device.verx10() >= self.support().alpha_blend as u32
    }

    pub fn supports_typed_writes(self, device: &Device) -> bool {
        device.verx10() >= self.support().typed_write as u32
    }

    pub fn supports_typed_reads(self, device: &Device) -> bool {
        device.verx10() >= self.support().typed_read as u32
    }

    /// Returns whether the format supports fast clears with CCS on its own, without lossless
    /// compression.
    pub fn supports_ccs_d(self, device: &Device) -> bool {
        // Fast-clear-only CCS was replaced by the fused design in gfx12.
        if !(7..=11).contains(&device.ver()) {
            return false;
        }

        if !self.supports_rendering(device) {
            return false;
        }

        matches!(self.layout().bpb, 32 | 64 | 128)
    }

    /// Returns whether the format supports lossless color compression.
    pub fn supports_ccs_e(self, device: &Device) -> bool {
        // Compression of this format is broken on every generation that has it.
        if self == Format::R11G11B10_FLOAT {
            return false;
        }

        device.verx10() >= self.support().ccs_e as u32
    }

    pub fn supports_multisampling(self, device: &Device) -> bool {
        // HiZ is sized for the single-sampled surface and then scaled.
        if self.is_hiz() {
            return true;
        }

        if device.ver() < 8 && self.layout().bpb > 64 {
            return false;
        }

        !self.is_compressed() && !self.is_yuv()
    }

    /// Returns the format with the same bit layout but a linear colorspace.
    pub fn srgb_to_linear(self) -> Format {
        match self {
            Format::R8G8B8A8_UNORM_SRGB => Format::R8G8B8A8_UNORM,
            Format::B8G8R8A8_UNORM_SRGB => Format::B8G8R8A8_UNORM,
            Format::R8G8B8X8_UNORM_SRGB => Format::R8G8B8X8_UNORM,
            Format::B8G8R8X8_UNORM_SRGB => Format::B8G8R8X8_UNORM,
            Format::R10G10B10A2_UNORM_SRGB => Format::R10G10B10A2_UNORM,
            Format::B10G10R10A2_UNORM_SRGB => Format::B10G10R10A2_UNORM,
            Format::B5G6R5_UNORM_SRGB => Format::B5G6R5_UNORM,
            Format::B5G5R5A1_UNORM_SRGB => Format::B5G5R5A1_UNORM,
            Format::B5G5R5X1_UNORM_SRGB => Format::B5G5R5X1_UNORM,
            Format::B4G4R4A4_UNORM_SRGB => Format::B4G4R4A4_UNORM,
            Format::L8A8_UNORM_SRGB => Format::L8A8_UNORM,
            Format::L8_UNORM_SRGB => Format::L8_UNORM,
            Format::R8G8B8_UNORM_SRGB => Format::R8G8B8_UNORM,
            Format::BC1_UNORM_SRGB => Format::BC1_UNORM,
            Format::BC2_UNORM_SRGB => Format::BC2_UNORM,
            Format::BC3_UNORM_SRGB => Format::BC3_UNORM,
            Format::BC7_UNORM_SRGB => Format::BC7_UNORM,
            Format::ETC2_SRGB8 => Format::ETC2_RGB8,
            Format::ETC2_SRGB8_PTA => Format::ETC2_RGB8_PTA,
            Format::ETC2_EAC_SRGB8_A8 => Format::ETC2_EAC_RGBA8,
            _ => self,
        }
    }

    /// Returns the format that a storage image of this format must be accessed with on `device`,
    /// or `None` if the format cannot be used for storage images at all.
    ///
    /// Formats without typed read support are accessed through an integer format of the same size
    /// and converted in the shader.
    pub fn lower_storage_image(self, device: &Device) -> Option<Format> {
        let ver = device.ver();
        let verx10 = device.verx10();

        let format = match self {
            Format::R32G32B32A32_UINT
            | Format::R32G32B32A32_SINT
            | Format::R32G32B32A32_FLOAT
            | Format::R32_UINT
            | Format::R32_SINT
            | Format::R32_FLOAT => self,

            Format::R16G16B16A16_UINT
            | Format::R16G16B16A16_SINT
            | Format::R16G16B16A16_FLOAT
            | Format::R32G32_UINT
            | Format::R32G32_SINT
            | Format::R32G32_FLOAT => {
                if verx10 >= 90 {
                    self
                } else if verx10 >= 75 {
                    Format::R16G16B16A16_UINT
                } else {
                    Format::R32G32_UINT
                }
            }

            Format::R8G8B8A8_UINT
            | Format::R8G8B8A8_SINT
            | Format::R16G16_UINT
            | Format::R16G16_SINT
            | Format::R16G16_FLOAT => {
                if ver >= 9 {
                    self
                } else {
                    Format::R32_UINT
                }
            }

            Format::R8G8_UINT | Format::R8G8_SINT | Format::R16_UINT | Format::R16_SINT
            | Format::R16_FLOAT => {
                if ver >= 9 {
                    self
                } else {
                    Format::R16_UINT
                }
            }

            Format::R8_UINT | Format::R8_SINT => self,

            Format::R10G10B10A2_UNORM | Format::R10G10B10A2_UINT | Format::R11G11B10_FLOAT => {
                Format::R32_UINT
            }

            Format::R16G16B16A16_UNORM | Format::R16G16B16A16_SNORM => {
                if ver >= 11 {
                    self
                } else if verx10 >= 75 {
                    Format::R16G16B16A16_UINT
                } else {
                    Format::R32G32_UINT
                }
            }

            Format::R8G8B8A8_UNORM
            | Format::R8G8B8A8_SNORM
            | Format::B8G8R8A8_UNORM
            | Format::R16G16_UNORM
            | Format::R16G16_SNORM => {
                if ver >= 11 {
                    self
                } else {
                    Format::R32_UINT
                }
            }

            Format::R8G8_UNORM | Format::R8G8_SNORM | Format::R16_UNORM | Format::R16_SNORM => {
                if ver >= 11 {
                    self
                } else {
                    Format::R16_UINT
                }
            }

            Format::R8_UNORM | Format::R8_SNORM => {
                if ver >= 11 {
                    self
                } else {
                    Format::R8_UINT
                }
            }

            _ => return None,
        };

        Some(format)
    }

    /// Returns the compression format field of an aux-map entry for this format.
    pub fn aux_map_encoding(self) -> Option<u8> {
        let encoding = match self {
            Format::R32G32B32A32_FLOAT
            | Format::R32G32B32A32_SINT
            | Format::R32G32B32A32_UINT
            | Format::R32G32B32X32_FLOAT => 0x2,
            Format::R16G16B16A16_UNORM
            | Format::R16G16B16A16_SNORM
            | Format::R16G16B16A16_SINT
            | Format::R16G16B16A16_UINT
            | Format::R16G16B16A16_FLOAT
            | Format::R16G16B16X16_FLOAT => 0x3,
            Format::R32G32_FLOAT | Format::R32G32_SINT | Format::R32G32_UINT => 0x4,
            Format::B8G8R8A8_UNORM
            | Format::B8G8R8X8_UNORM
            | Format::R8G8B8A8_UNORM
            | Format::R8G8B8A8_SNORM
            | Format::R8G8B8A8_SINT
            | Format::R8G8B8A8_UINT
            | Format::R8G8B8X8_UNORM => 0xA,
            Format::R10G10B10A2_UNORM | Format::R10G10B10A2_UINT | Format::B10G10R10A2_UNORM => {
                0x7
            }
            Format::R16G16_UNORM
            | Format::R16G16_SNORM
            | Format::R16G16_SINT
            | Format::R16G16_UINT
            | Format::R16G16_FLOAT => 0x6,
            Format::R32_SINT | Format::R32_UINT | Format::R32_FLOAT => 0x11,
            Format::R24_UNORM_X8_TYPELESS => 0x13,
            Format::B5G6R5_UNORM => 0x15,
            Format::B5G5R5A1_UNORM | Format::B5G5R5X1_UNORM | Format::B4G4R4A4_UNORM => 0x16,
            Format::R8G8_UNORM | Format::R8G8_SNORM | Format::R8G8_SINT | Format::R8G8_UINT => {
                0xB
            }
            Format::R16_UNORM
            | Format::R16_SNORM
            | Format::R16_SINT
            | Format::R16_UINT
            | Format::R16_FLOAT => 0xC,
            Format::R8_UNORM | Format::R8_SNORM | Format::R8_SINT | Format::R8_UINT
            | Format::A8_UNORM => 0xD,
            Format::R11G11B10_FLOAT => 0x5,
            Format::PLANAR_420_8 => 0xF,
            Format::PLANAR_420_10 => 0x7,
            Format::PLANAR_420_12 => 0x8,
            Format::PLANAR_420_16 => 0x8,
            Format::YCRCB_NORMAL | Format::YCRCB_SWAPUV | Format::YCRCB_SWAPUVY
            | Format::YCRCB_SWAPY => 0xA,
            _ => return None,
        };

        Some(encoding)
    }

    /// Returns the value of the render compression format field of a surface state for this
    /// format on gfx12.5 and newer.
    pub fn render_compression_format(self) -> Option<u8> {
        let encoding = match self {
            Format::R32G32B32A32_FLOAT
            | Format::R32G32B32A32_SINT
            | Format::R32G32B32A32_UINT
            | Format::R32G32B32X32_FLOAT => 0x0,
            Format::R16G16B16A16_UNORM
            | Format::R16G16B16A16_SNORM
            | Format::R16G16B16A16_SINT
            | Format::R16G16B16A16_UINT
            | Format::R16G16B16A16_FLOAT
            | Format::R16G16B16X16_FLOAT => 0x1,
            Format::R32G32_FLOAT | Format::R32G32_SINT | Format::R32G32_UINT => 0x2,
            Format::R10G10B10A2_UNORM | Format::R10G10B10A2_UINT | Format::B10G10R10A2_UNORM => {
                0x3
            }
            Format::R11G11B10_FLOAT => 0x4,
            Format::R16G16_UNORM
            | Format::R16G16_SNORM
            | Format::R16G16_SINT
            | Format::R16G16_UINT
            | Format::R16G16_FLOAT => 0x6,
            Format::B8G8R8A8_UNORM
            | Format::B8G8R8X8_UNORM
            | Format::R8G8B8A8_UNORM
            | Format::R8G8B8A8_SNORM
            | Format::R8G8B8A8_SINT
            | Format::R8G8B8A8_UINT
            | Format::R8G8B8X8_UNORM => 0x8,
            Format::R32_SINT | Format::R32_UINT | Format::R32_FLOAT => 0x9,
            Format::R24_UNORM_X8_TYPELESS => 0xA,
            Format::B5G6R5_UNORM
            | Format::B5G5R5A1_UNORM
            | Format::B5G5R5X1_UNORM
            | Format::B4G4R4A4_UNORM => 0xB,
            Format::R8G8_UNORM | Format::R8G8_SNORM | Format::R8G8_SINT | Format::R8G8_UINT => {
                0xC
            }
            Format::R16_UNORM
            | Format::R16_SNORM
            | Format::R16_SINT
            | Format::R16_UINT
            | Format::R16_FLOAT => 0xD,
            Format::R8_UNORM | Format::R8_SNORM | Format::R8_SINT | Format::R8_UINT
            | Format::A8_UNORM => 0xE,
            _ => return None,
        };

        Some(encoding)
    }
}

impl Default for Format {
    #[inline]
    fn default() -> Self {
        Format::UNSUPPORTED
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
