// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Channel swizzles and clear color values.

use super::Format;

isl_enum! {
    /// The source of one output channel of a swizzle.
    ///
    /// The values match the hardware's shader channel select encoding.
    ChannelSelect impl {
        /// Returns the index of the color channel that `self` reads, or `None` for the constant
        /// selects.
        #[inline]
        pub const fn channel_index(self) -> Option<usize> {
            match self {
                ChannelSelect::Zero | ChannelSelect::One => None,
                ChannelSelect::Red => Some(0),
                ChannelSelect::Green => Some(1),
                ChannelSelect::Blue => Some(2),
                ChannelSelect::Alpha => Some(3),
            }
        }

        const CHANNELS: [ChannelSelect; 4] = [
            ChannelSelect::Red,
            ChannelSelect::Green,
            ChannelSelect::Blue,
            ChannelSelect::Alpha,
        ];
    }
    = u8;

    Zero = 0,
    One = 1,
    Red = 4,
    Green = 5,
    Blue = 6,
    Alpha = 7,
}

/// Selects, for each output channel, which input channel or constant it takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swizzle {
    pub r: ChannelSelect,
    pub g: ChannelSelect,
    pub b: ChannelSelect,
    pub a: ChannelSelect,
}

impl Swizzle {
    /// Every channel reads itself.
    pub const IDENTITY: Swizzle = Swizzle {
        r: ChannelSelect::Red,
        g: ChannelSelect::Green,
        b: ChannelSelect::Blue,
        a: ChannelSelect::Alpha,
    };

    #[inline]
    const fn array(self) -> [ChannelSelect; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    const fn from_array([r, g, b, a]: [ChannelSelect; 4]) -> Swizzle {
        Swizzle { r, g, b, a }
    }

    /// Returns whether `self` is the identity.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Swizzle::IDENTITY
    }

    // What `channel` of `self`'s output ends up reading from `second`'s input.
    #[inline]
    fn select(channel: ChannelSelect, second: Swizzle) -> ChannelSelect {
        match channel.channel_index() {
            None => channel,
            Some(index) => second.array()[index],
        }
    }

    /// Returns the single swizzle that is equivalent to applying `self` and then `second`.
    ///
    /// A channel of `self` that reads a color channel is replaced by whatever `second` selects
    /// for that channel. Constant selects are kept.
    pub fn compose(self, second: Swizzle) -> Swizzle {
        Swizzle::from_array(self.array().map(|channel| Swizzle::select(channel, second)))
    }

    /// Returns the pseudo-inverse of `self`.
    ///
    /// Channels that `self` never reads become `Zero`. When `self` reads a channel more than
    /// once, the first output channel in RGBA order wins, as render target swizzles do on the
    /// hardware.
    pub fn invert(self) -> Swizzle {
        let mut channels = [ChannelSelect::Zero; 4];

        for (output, select) in self.array().into_iter().enumerate().rev() {
            if let Some(index) = select.channel_index() {
                channels[index] = ChannelSelect::CHANNELS[output];
            }
        }

        Swizzle::from_array(channels)
    }
}

impl Default for Swizzle {
    #[inline]
    fn default() -> Self {
        Swizzle::IDENTITY
    }
}

/// A color value, such as a clear color, as the raw bits of four 32-bit channels.
///
/// The channels are red, green, blue and alpha. Whether a channel holds a float or an integer
/// depends on the format it is used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorValue(pub [u32; 4]);

impl ColorValue {
    #[inline]
    pub fn from_f32(value: [f32; 4]) -> ColorValue {
        ColorValue(value.map(f32::to_bits))
    }

    #[inline]
    pub const fn from_u32(value: [u32; 4]) -> ColorValue {
        ColorValue(value)
    }

    #[inline]
    pub fn from_i32(value: [i32; 4]) -> ColorValue {
        ColorValue(value.map(|channel| channel as u32))
    }

    #[inline]
    pub fn as_f32(self) -> [f32; 4] {
        self.0.map(f32::from_bits)
    }

    // Present red, green, blue and alpha channels of `format`.
    fn present_channels(format: Format) -> [bool; 4] {
        let channels = format.layout().channels;

        [
            channels.r.is_present(),
            channels.g.is_present(),
            channels.b.is_present(),
            channels.a.is_present(),
        ]
    }

    /// Returns whether every channel that `format` stores is all zero bits.
    ///
    /// A float channel holding `-0.0` is not zero.
    pub fn is_zero(self, format: Format) -> bool {
        ColorValue::present_channels(format)
            .into_iter()
            .zip(self.0)
            .all(|(present, bits)| !present || bits == 0)
    }

    /// Returns whether every channel that `format` stores is zero or one.
    ///
    /// Channels are compared as integers if `format` has an integer channel, and as floats
    /// otherwise.
    pub fn is_zero_one(self, format: Format) -> bool {
        let present = ColorValue::present_channels(format);

        if format.has_int_channel() {
            present
                .into_iter()
                .zip(self.0)
                .all(|(present, value)| !present || value == 0 || value == 1)
        } else {
            present
                .into_iter()
                .zip(self.as_f32())
                .all(|(present, value)| !present || value == 0.0 || value == 1.0)
        }
    }

    /// Applies `swizzle` to `self`.
    ///
    /// A `One` select produces `1.0` if `is_float` is true, and the integer `1` otherwise.
    pub fn swizzle(self, swizzle: Swizzle, is_float: bool) -> ColorValue {
        let one = if is_float { 1.0f32.to_bits() } else { 1 };

        ColorValue(swizzle.array().map(|select| match select {
            ChannelSelect::Zero => 0,
            ChannelSelect::One => one,
            ChannelSelect::Red => self.0[0],
            ChannelSelect::Green => self.0[1],
            ChannelSelect::Blue => self.0[2],
            ChannelSelect::Alpha => self.0[3],
        }))
    }

    /// Undoes `swizzle`: each channel of `self` is written back to the channel it was read from.
    ///
    /// Channels that `swizzle` never reads are zero. When `swizzle` reads a channel more than
    /// once, the first output channel in RGBA order wins.
    pub fn swizzle_inv(self, swizzle: Swizzle) -> ColorValue {
        let mut value = [0; 4];

        for (output, select) in swizzle.array().into_iter().enumerate().rev() {
            if let Some(index) = select.channel_index() {
                value[index] = self.0[output];
            }
        }

        ColorValue(value)
    }
}
