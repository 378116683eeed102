// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

use super::{BaseType::*, Colorspace, FormatLayout, FormatSupport, Txc};

/// Minimum generation for a capability. `Y` is every generation, `N` is none.
macro_rules! sf {
    (Y) => {
        0
    };
    (N) => {
        FormatSupport::NEVER
    };
    ($verx10:literal) => {
        $verx10
    };
}

macro_rules! formats {
    {
        $(
            $name:ident = $value:literal => $layout:expr,
                [$sampling:tt $filtering:tt $render:tt $alpha_blend:tt
                 $typed_write:tt $typed_read:tt $ccs_e:tt];
        )+
    } => {
        /// A pixel format.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum Format {
            $($name = $value,)+
        }

        impl Format {
            /// Every format, in increasing numeric order.
            #[allow(dead_code)]
            pub(crate) const ALL: &'static [Format] = &[$(Format::$name,)+];

            /// Returns the memory layout of a block of this format.
            pub fn layout(self) -> &'static FormatLayout {
                match self {
                    $(
                        Format::$name => {
                            const LAYOUT: FormatLayout = $layout;
                            &LAYOUT
                        }
                    )+
                }
            }

            /// Returns the first generation that supports each capability of this format.
            pub fn support(self) -> FormatSupport {
                match self {
                    $(
                        Format::$name => FormatSupport {
                            sampling: sf!($sampling),
                            filtering: sf!($filtering),
                            render: sf!($render),
                            alpha_blend: sf!($alpha_blend),
                            typed_write: sf!($typed_write),
                            typed_read: sf!($typed_read),
                            ccs_e: sf!($ccs_e),
                        },
                    )+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Format::$name => stringify!($name),)+
                }
            }
        }

        impl From<Format> for u16 {
            #[inline]
            fn from(val: Format) -> Self {
                val as u16
            }
        }

        impl TryFrom<u16> for Format {
            type Error = ();

            #[inline]
            fn try_from(val: u16) -> Result<Self, Self::Error> {
                match val {
                    $($value => Ok(Format::$name),)+
                    _ => Err(()),
                }
            }
        }
    };
}

const fn lin(bpb: u16) -> FormatLayout {
    FormatLayout::new(bpb, Colorspace::Linear)
}

const fn srgb(bpb: u16) -> FormatLayout {
    FormatLayout::new(bpb, Colorspace::Srgb)
}

const fn yuv(bpb: u16) -> FormatLayout {
    FormatLayout::new(bpb, Colorspace::Yuv)
}

const fn aux(bpb: u16, bw: u8, bh: u8, txc: Txc) -> FormatLayout {
    FormatLayout::new(bpb, Colorspace::None).block(bw, bh, 1, txc)
}

//                                                                          smp flt rt  ab  tw  tr  ccs_e
formats! {
    R32G32B32A32_FLOAT = 0 => lin(128).r(Sfloat, 32).g(Sfloat, 32).b(Sfloat, 32).a(Sfloat, 32),
        [Y 50 Y Y 70 90 90];
    R32G32B32A32_SINT = 1 => lin(128).r(Sint, 32).g(Sint, 32).b(Sint, 32).a(Sint, 32),
        [Y N Y N 70 90 90];
    R32G32B32A32_UINT = 2 => lin(128).r(Uint, 32).g(Uint, 32).b(Uint, 32).a(Uint, 32),
        [Y N Y N 70 90 90];
    R64G64_FLOAT = 5 => lin(128).r(Sfloat, 64).g(Sfloat, 64),
        [Y N N N N N N];
    R32G32B32X32_FLOAT = 6 => lin(128).r(Sfloat, 32).g(Sfloat, 32).b(Sfloat, 32).x(32),
        [Y 50 Y N N N 90];
    R32G32B32A32_SFIXED = 32 => lin(128).r(Sfixed, 32).g(Sfixed, 32).b(Sfixed, 32).a(Sfixed, 32),
        [N N N N N N N];
    R32G32B32_FLOAT = 64 => lin(96).r(Sfloat, 32).g(Sfloat, 32).b(Sfloat, 32),
        [Y 50 N N N N N];
    R32G32B32_SINT = 65 => lin(96).r(Sint, 32).g(Sint, 32).b(Sint, 32),
        [Y N N N N N N];
    R32G32B32_UINT = 66 => lin(96).r(Uint, 32).g(Uint, 32).b(Uint, 32),
        [Y N N N N N N];
    R16G16B16A16_UNORM = 128 => lin(64).r(Unorm, 16).g(Unorm, 16).b(Unorm, 16).a(Unorm, 16),
        [Y Y Y Y 110 110 90];
    R16G16B16A16_SNORM = 129 => lin(64).r(Snorm, 16).g(Snorm, 16).b(Snorm, 16).a(Snorm, 16),
        [Y Y 60 N 110 110 90];
    R16G16B16A16_SINT = 130 => lin(64).r(Sint, 16).g(Sint, 16).b(Sint, 16).a(Sint, 16),
        [Y N Y N 75 90 90];
    R16G16B16A16_UINT = 131 => lin(64).r(Uint, 16).g(Uint, 16).b(Uint, 16).a(Uint, 16),
        [Y N Y N 75 90 90];
    R16G16B16A16_FLOAT = 132 => lin(64).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16),
        [Y Y Y Y 75 90 90];
    R32G32_FLOAT = 133 => lin(64).r(Sfloat, 32).g(Sfloat, 32),
        [Y 50 Y Y 75 90 90];
    R32G32_SINT = 134 => lin(64).r(Sint, 32).g(Sint, 32),
        [Y N Y N 75 90 90];
    R32G32_UINT = 135 => lin(64).r(Uint, 32).g(Uint, 32),
        [Y N Y N 75 90 90];
    R32_FLOAT_X8X24_TYPELESS = 136 => lin(64).r(Sfloat, 32).x(32),
        [Y 50 N N N N N];
    X32_TYPELESS_G8X24_UINT = 137 => lin(64).x(32).g(Uint, 8).x(24),
        [Y N N N N N N];
    L32A32_FLOAT = 138 => lin(64).l(Sfloat, 32).a(Sfloat, 32),
        [Y 50 N N N N N];
    R64_FLOAT = 141 => lin(64).r(Sfloat, 64),
        [Y N N N N N N];
    R16G16B16X16_UNORM = 142 => lin(64).r(Unorm, 16).g(Unorm, 16).b(Unorm, 16).x(16),
        [Y Y N N N N N];
    R16G16B16X16_FLOAT = 143 => lin(64).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).x(16),
        [Y Y N N N N 90];
    B8G8R8A8_UNORM = 192 => lin(32).b(Unorm, 8).g(Unorm, 8).r(Unorm, 8).a(Unorm, 8),
        [Y Y Y Y 110 110 90];
    B8G8R8A8_UNORM_SRGB = 193 => srgb(32).b(Unorm, 8).g(Unorm, 8).r(Unorm, 8).a(Unorm, 8),
        [Y Y Y Y N N 100];
    R10G10B10A2_UNORM = 194 => lin(32).r(Unorm, 10).g(Unorm, 10).b(Unorm, 10).a(Unorm, 2),
        [Y Y Y Y 110 110 120];
    R10G10B10A2_UNORM_SRGB = 195 => srgb(32).r(Unorm, 10).g(Unorm, 10).b(Unorm, 10).a(Unorm, 2),
        [Y Y N N N N N];
    R10G10B10A2_UINT = 196 => lin(32).r(Uint, 10).g(Uint, 10).b(Uint, 10).a(Uint, 2),
        [Y N Y N 75 110 120];
    R8G8B8A8_UNORM = 199 => lin(32).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8),
        [Y Y Y Y 110 110 90];
    R8G8B8A8_UNORM_SRGB = 200 => srgb(32).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8),
        [Y Y Y Y N N 100];
    R8G8B8A8_SNORM = 201 => lin(32).r(Snorm, 8).g(Snorm, 8).b(Snorm, 8).a(Snorm, 8),
        [Y Y 60 N 110 110 90];
    R8G8B8A8_SINT = 202 => lin(32).r(Sint, 8).g(Sint, 8).b(Sint, 8).a(Sint, 8),
        [Y N Y N 75 90 90];
    R8G8B8A8_UINT = 203 => lin(32).r(Uint, 8).g(Uint, 8).b(Uint, 8).a(Uint, 8),
        [Y N Y N 75 90 90];
    R16G16_UNORM = 204 => lin(32).r(Unorm, 16).g(Unorm, 16),
        [Y Y Y Y 110 110 90];
    R16G16_SNORM = 205 => lin(32).r(Snorm, 16).g(Snorm, 16),
        [Y Y 60 N 110 110 90];
    R16G16_SINT = 206 => lin(32).r(Sint, 16).g(Sint, 16),
        [Y N Y N 75 90 90];
    R16G16_UINT = 207 => lin(32).r(Uint, 16).g(Uint, 16),
        [Y N Y N 75 90 90];
    R16G16_FLOAT = 208 => lin(32).r(Sfloat, 16).g(Sfloat, 16),
        [Y Y Y Y 75 90 90];
    B10G10R10A2_UNORM = 209 => lin(32).b(Unorm, 10).g(Unorm, 10).r(Unorm, 10).a(Unorm, 2),
        [Y Y Y Y 110 110 120];
    B10G10R10A2_UNORM_SRGB = 210 => srgb(32).b(Unorm, 10).g(Unorm, 10).r(Unorm, 10).a(Unorm, 2),
        [Y Y Y Y N N N];
    R11G11B10_FLOAT = 211 => lin(32).r(Ufloat, 11).g(Ufloat, 11).b(Ufloat, 10),
        [Y Y Y Y 75 110 N];
    R32_SINT = 214 => lin(32).r(Sint, 32),
        [Y N Y N Y 70 90];
    R32_UINT = 215 => lin(32).r(Uint, 32),
        [Y N Y N Y 70 90];
    R32_FLOAT = 216 => lin(32).r(Sfloat, 32),
        [Y 50 Y Y Y 70 90];
    R24_UNORM_X8_TYPELESS = 217 => lin(32).r(Unorm, 24).x(8),
        [Y Y N N N N 120];
    X24_TYPELESS_G8_UINT = 218 => lin(32).x(24).g(Uint, 8),
        [Y N N N N N N];
    L16A16_UNORM = 223 => lin(32).l(Unorm, 16).a(Unorm, 16),
        [Y Y N N N N N];
    I32_FLOAT = 227 => lin(32).i(Sfloat, 32),
        [Y 50 N N N N N];
    L32_FLOAT = 228 => lin(32).l(Sfloat, 32),
        [Y 50 N N N N N];
    A32_FLOAT = 229 => lin(32).a(Sfloat, 32),
        [Y 50 N N N N N];
    B8G8R8X8_UNORM = 233 => lin(32).b(Unorm, 8).g(Unorm, 8).r(Unorm, 8).x(8),
        [Y Y Y N N N 90];
    B8G8R8X8_UNORM_SRGB = 234 => srgb(32).b(Unorm, 8).g(Unorm, 8).r(Unorm, 8).x(8),
        [Y Y Y N N N 100];
    R8G8B8X8_UNORM = 235 => lin(32).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).x(8),
        [Y Y Y N N N 90];
    R8G8B8X8_UNORM_SRGB = 236 => srgb(32).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).x(8),
        [Y Y Y N N N 100];
    R9G9B9E5_SHAREDEXP = 237 => lin(32).r(Ufloat, 9).g(Ufloat, 9).b(Ufloat, 9).x(5),
        [Y Y N N N N N];
    B10G10R10X2_UNORM = 238 => lin(32).b(Unorm, 10).g(Unorm, 10).r(Unorm, 10).x(2),
        [Y Y N N N N N];
    L16A16_FLOAT = 240 => lin(32).l(Sfloat, 16).a(Sfloat, 16),
        [Y Y N N N N N];
    R8G8B8A8_SSCALED = 244 => lin(32).r(Sscaled, 8).g(Sscaled, 8).b(Sscaled, 8).a(Sscaled, 8),
        [N N N N N N N];
    R8G8B8A8_USCALED = 245 => lin(32).r(Uscaled, 8).g(Uscaled, 8).b(Uscaled, 8).a(Uscaled, 8),
        [N N N N N N N];
    B5G6R5_UNORM = 256 => lin(16).b(Unorm, 5).g(Unorm, 6).r(Unorm, 5),
        [Y Y Y Y N N 120];
    B5G6R5_UNORM_SRGB = 257 => srgb(16).b(Unorm, 5).g(Unorm, 6).r(Unorm, 5),
        [Y Y N N N N N];
    B5G5R5A1_UNORM = 258 => lin(16).b(Unorm, 5).g(Unorm, 5).r(Unorm, 5).a(Unorm, 1),
        [Y Y Y Y N N 120];
    B5G5R5A1_UNORM_SRGB = 259 => srgb(16).b(Unorm, 5).g(Unorm, 5).r(Unorm, 5).a(Unorm, 1),
        [Y Y N N N N N];
    B4G4R4A4_UNORM = 260 => lin(16).b(Unorm, 4).g(Unorm, 4).r(Unorm, 4).a(Unorm, 4),
        [Y Y Y Y N N 120];
    B4G4R4A4_UNORM_SRGB = 261 => srgb(16).b(Unorm, 4).g(Unorm, 4).r(Unorm, 4).a(Unorm, 4),
        [Y Y N N N N N];
    R8G8_UNORM = 262 => lin(16).r(Unorm, 8).g(Unorm, 8),
        [Y Y Y Y 110 110 120];
    R8G8_SNORM = 263 => lin(16).r(Snorm, 8).g(Snorm, 8),
        [Y Y 60 N 110 110 120];
    R8G8_SINT = 264 => lin(16).r(Sint, 8).g(Sint, 8),
        [Y N Y N 90 90 120];
    R8G8_UINT = 265 => lin(16).r(Uint, 8).g(Uint, 8),
        [Y N Y N 90 90 120];
    R16_UNORM = 266 => lin(16).r(Unorm, 16),
        [Y Y Y Y 110 110 120];
    R16_SNORM = 267 => lin(16).r(Snorm, 16),
        [Y Y 60 N 110 110 120];
    R16_SINT = 268 => lin(16).r(Sint, 16),
        [Y N Y N 90 90 120];
    R16_UINT = 269 => lin(16).r(Uint, 16),
        [Y N Y N 75 90 120];
    R16_FLOAT = 270 => lin(16).r(Sfloat, 16),
        [Y Y Y Y 90 90 120];
    A8P8_UNORM_PALETTE0 = 271 => lin(16).a(Unorm, 8).p(Unorm, 8),
        [Y Y N N N N N];
    L16_UNORM = 274 => lin(16).l(Unorm, 16),
        [Y Y N N N N N];
    A16_UNORM = 275 => lin(16).a(Unorm, 16),
        [Y Y N N N N N];
    L8A8_UNORM = 276 => lin(16).l(Unorm, 8).a(Unorm, 8),
        [Y Y N N N N N];
    L16_FLOAT = 278 => lin(16).l(Sfloat, 16),
        [Y Y N N N N N];
    A16_FLOAT = 279 => lin(16).a(Sfloat, 16),
        [Y Y N N N N N];
    L8A8_UNORM_SRGB = 280 => srgb(16).l(Unorm, 8).a(Unorm, 8),
        [Y Y N N N N N];
    B5G5R5X1_UNORM = 282 => lin(16).b(Unorm, 5).g(Unorm, 5).r(Unorm, 5).x(1),
        [Y Y Y N N N 120];
    B5G5R5X1_UNORM_SRGB = 283 => srgb(16).b(Unorm, 5).g(Unorm, 5).r(Unorm, 5).x(1),
        [Y Y Y N N N N];
    A1B5G5R5_UNORM = 292 => lin(16).a(Unorm, 1).b(Unorm, 5).g(Unorm, 5).r(Unorm, 5),
        [80 80 N N N N N];
    A4B4G4R4_UNORM = 293 => lin(16).a(Unorm, 4).b(Unorm, 4).g(Unorm, 4).r(Unorm, 4),
        [80 80 80 N N N N];
    L8A8_UINT = 294 => lin(16).l(Uint, 8).a(Uint, 8),
        [Y N N N N N N];
    L8A8_SINT = 295 => lin(16).l(Sint, 8).a(Sint, 8),
        [Y N N N N N N];
    R8_UNORM = 320 => lin(8).r(Unorm, 8),
        [Y Y Y Y 110 110 120];
    R8_SNORM = 321 => lin(8).r(Snorm, 8),
        [Y Y 60 N 110 110 120];
    R8_SINT = 322 => lin(8).r(Sint, 8),
        [Y N Y N 90 90 120];
    R8_UINT = 323 => lin(8).r(Uint, 8),
        [Y N Y N 75 90 120];
    A8_UNORM = 324 => lin(8).a(Unorm, 8),
        [Y Y Y Y N N 120];
    I8_UNORM = 325 => lin(8).i(Unorm, 8),
        [Y Y N N N N N];
    L8_UNORM = 326 => lin(8).l(Unorm, 8),
        [Y Y N N N N N];
    P8_UNORM_PALETTE0 = 331 => lin(8).p(Unorm, 8),
        [45 45 N N N N N];
    L8_UNORM_SRGB = 332 => srgb(8).l(Unorm, 8),
        [Y Y N N N N N];
    Y8_UNORM = 336 => yuv(8).g(Unorm, 8),
        [Y Y 120 N N N N];
    L8_UINT = 338 => lin(8).l(Uint, 8),
        [Y N N N N N N];
    L8_SINT = 339 => lin(8).l(Sint, 8),
        [Y N N N N N N];
    YCRCB_NORMAL = 386 => yuv(16).x(16),
        [Y Y N N N N N];
    YCRCB_SWAPUVY = 387 => yuv(16).x(16),
        [Y Y N N N N N];
    BC1_UNORM = 390 => lin(64).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt1),
        [Y Y N N N N N];
    BC2_UNORM = 391 => lin(128).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt3),
        [Y Y N N N N N];
    BC3_UNORM = 392 => lin(128).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt5),
        [Y Y N N N N N];
    BC4_UNORM = 393 => lin(64).r(Unorm, 8).block(4, 4, 1, Txc::Rgtc1),
        [Y Y N N N N N];
    BC5_UNORM = 394 => lin(128).r(Unorm, 8).g(Unorm, 8).block(4, 4, 1, Txc::Rgtc2),
        [Y Y N N N N N];
    BC1_UNORM_SRGB = 395 => srgb(64).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt1),
        [Y Y N N N N N];
    BC2_UNORM_SRGB = 396 => srgb(128).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt3),
        [Y Y N N N N N];
    BC3_UNORM_SRGB = 397 => srgb(128).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(4, 4, 1, Txc::Dxt5),
        [Y Y N N N N N];
    YCRCB_SWAPUV = 399 => yuv(16).x(16),
        [Y Y N N N N N];
    YCRCB_SWAPY = 400 => yuv(16).x(16),
        [Y Y N N N N N];
    FXT1 = 402 => lin(128).r(Unorm, 4).g(Unorm, 4).b(Unorm, 4).a(Unorm, 4).block(8, 4, 1, Txc::Fxt1),
        [Y Y N N N N N];
    R8G8B8_UNORM = 403 => lin(24).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8),
        [Y Y N N N N N];
    R8G8B8_SNORM = 404 => lin(24).r(Snorm, 8).g(Snorm, 8).b(Snorm, 8),
        [Y Y N N N N N];
    BC4_SNORM = 409 => lin(64).r(Snorm, 8).block(4, 4, 1, Txc::Rgtc1),
        [Y Y N N N N N];
    BC5_SNORM = 410 => lin(128).r(Snorm, 8).g(Snorm, 8).block(4, 4, 1, Txc::Rgtc2),
        [Y Y N N N N N];
    R16G16B16_FLOAT = 411 => lin(48).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16),
        [70 70 N N N N N];
    R16G16B16_UNORM = 412 => lin(48).r(Unorm, 16).g(Unorm, 16).b(Unorm, 16),
        [Y Y N N N N N];
    BC6H_SF16 = 417 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).block(4, 4, 1, Txc::Bptc),
        [70 70 N N N N N];
    BC7_UNORM = 418 => lin(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(4, 4, 1, Txc::Bptc),
        [70 70 N N N N N];
    BC7_UNORM_SRGB = 419 => srgb(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(4, 4, 1, Txc::Bptc),
        [70 70 N N N N N];
    BC6H_UF16 = 420 => lin(128).r(Ufloat, 16).g(Ufloat, 16).b(Ufloat, 16).block(4, 4, 1, Txc::Bptc),
        [70 70 N N N N N];
    PLANAR_420_8 = 421 => yuv(8).r(Unorm, 8),
        [80 80 N N N N N];
    PLANAR_420_16 = 422 => yuv(16).r(Unorm, 16),
        [120 120 N N N N N];
    R8G8B8_UNORM_SRGB = 424 => srgb(24).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8),
        [75 75 N N N N N];
    ETC1_RGB8 = 425 => lin(64).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).block(4, 4, 1, Txc::Etc1),
        [80 80 N N N N N];
    ETC2_RGB8 = 426 => lin(64).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    EAC_R11 = 427 => lin(64).r(Unorm, 11).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    EAC_RG11 = 428 => lin(128).r(Unorm, 11).g(Unorm, 11).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    EAC_SIGNED_R11 = 429 => lin(64).r(Snorm, 11).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    EAC_SIGNED_RG11 = 430 => lin(128).r(Snorm, 11).g(Snorm, 11).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    ETC2_SRGB8 = 431 => srgb(64).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    R16G16B16_UINT = 432 => lin(48).r(Uint, 16).g(Uint, 16).b(Uint, 16),
        [Y N N N N N N];
    R16G16B16_SINT = 433 => lin(48).r(Sint, 16).g(Sint, 16).b(Sint, 16),
        [Y N N N N N N];
    R32_SFIXED = 434 => lin(32).r(Sfixed, 32),
        [N N N N N N N];
    ETC2_RGB8_PTA = 448 => lin(64).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 1).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    ETC2_SRGB8_PTA = 449 => srgb(64).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 1).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    ETC2_EAC_RGBA8 = 450 => lin(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    ETC2_EAC_SRGB8_A8 = 451 => srgb(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(4, 4, 1, Txc::Etc2),
        [80 80 N N N N N];
    R8G8B8_UINT = 456 => lin(24).r(Uint, 8).g(Uint, 8).b(Uint, 8),
        [75 N N N N N N];
    R8G8B8_SINT = 457 => lin(24).r(Sint, 8).g(Sint, 8).b(Sint, 8),
        [75 N N N N N N];
    RAW = 511 => FormatLayout::new(0, Colorspace::None),
        [N N N N N N N];
    ASTC_LDR_2D_4X4_U8SRGB = 512 => srgb(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(4, 4, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_LDR_2D_8X8_U8SRGB = 548 => srgb(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(8, 8, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_LDR_2D_12X12_U8SRGB = 575 => srgb(128).r(Unorm, 8).g(Unorm, 8).b(Unorm, 8).a(Unorm, 8).block(12, 12, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_LDR_2D_4X4_FLT16 = 576 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(4, 4, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_LDR_2D_8X8_FLT16 = 612 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(8, 8, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_LDR_2D_12X12_FLT16 = 639 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(12, 12, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_HDR_2D_4X4_FLT16 = 832 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(4, 4, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_HDR_2D_8X8_FLT16 = 868 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(8, 8, 1, Txc::Astc),
        [90 90 N N N N N];
    ASTC_HDR_2D_12X12_FLT16 = 895 => lin(128).r(Sfloat, 16).g(Sfloat, 16).b(Sfloat, 16).a(Sfloat, 16).block(12, 12, 1, Txc::Astc),
        [90 90 N N N N N];

    PLANAR_420_10 = 896 => yuv(16).x(6).r(Unorm, 10),
        [120 120 N N N N N];
    PLANAR_420_12 = 897 => yuv(16).x(4).r(Unorm, 12),
        [120 120 N N N N N];

    HIZ = 898 => aux(128, 8, 4, Txc::Hiz),
        [N N N N N N N];
    GFX125_HIZ = 899 => aux(128, 16, 8, Txc::Hiz),
        [N N N N N N N];
    MCS_2X = 900 => aux(8, 1, 1, Txc::Mcs),
        [N N N N N N N];
    MCS_4X = 901 => aux(8, 1, 1, Txc::Mcs),
        [N N N N N N N];
    MCS_8X = 902 => aux(32, 1, 1, Txc::Mcs),
        [N N N N N N N];
    MCS_16X = 903 => aux(64, 1, 1, Txc::Mcs),
        [N N N N N N N];
    GFX7_CCS_32BPP_X = 904 => aux(1, 16, 2, Txc::Ccs),
        [N N N N N N N];
    GFX7_CCS_64BPP_X = 905 => aux(1, 8, 2, Txc::Ccs),
        [N N N N N N N];
    GFX7_CCS_128BPP_X = 906 => aux(1, 4, 2, Txc::Ccs),
        [N N N N N N N];
    GFX7_CCS_32BPP_Y = 907 => aux(1, 8, 4, Txc::Ccs),
        [N N N N N N N];
    GFX7_CCS_64BPP_Y = 908 => aux(1, 4, 4, Txc::Ccs),
        [N N N N N N N];
    GFX7_CCS_128BPP_Y = 909 => aux(1, 2, 4, Txc::Ccs),
        [N N N N N N N];
    GFX9_CCS_32BPP = 910 => aux(2, 8, 4, Txc::Ccs),
        [N N N N N N N];
    GFX9_CCS_64BPP = 911 => aux(2, 4, 4, Txc::Ccs),
        [N N N N N N N];
    GFX9_CCS_128BPP = 912 => aux(2, 2, 4, Txc::Ccs),
        [N N N N N N N];
    GFX12_CCS_8BPP_Y0 = 913 => aux(4, 32, 4, Txc::Ccs),
        [N N N N N N N];
    GFX12_CCS_16BPP_Y0 = 914 => aux(4, 16, 4, Txc::Ccs),
        [N N N N N N N];
    GFX12_CCS_32BPP_Y0 = 915 => aux(4, 8, 4, Txc::Ccs),
        [N N N N N N N];
    GFX12_CCS_64BPP_Y0 = 916 => aux(4, 4, 4, Txc::Ccs),
        [N N N N N N N];
    GFX12_CCS_128BPP_Y0 = 917 => aux(4, 2, 4, Txc::Ccs),
        [N N N N N N N];

    UNSUPPORTED = 0xFFFF => FormatLayout::new(0, Colorspace::None),
        [N N N N N N N];
}
