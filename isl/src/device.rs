// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! The hardware a surface is laid out for.
//!
//! A `Device` is a small, immutable description of one hardware generation and of the few
//! platform properties that change how memory is addressed. It does not talk to any hardware.
//!
//! ```
//! use isl::device::{Device, DeviceCreateInfo};
//! use isl::Version;
//!
//! let device = Device::new(DeviceCreateInfo {
//!     version: Version::GFX12,
//!     has_aux_map: true,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert!(device.use_separate_stencil());
//! ```

use crate::{surface::SampleCounts, DeviceSize, ValidationError, Version};
use tracing::debug;

/// Describes one hardware generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    version: Version,
    has_bit6_swizzling: bool,
    has_aux_map: bool,
    use_separate_stencil: bool,
    supported_sample_counts: SampleCounts,
    max_buffer_size: DeviceSize,
}

impl Device {
    /// Creates a new `Device`.
    pub fn new(create_info: DeviceCreateInfo) -> Result<Device, Box<ValidationError>> {
        Self::validate_new(&create_info)?;

        Ok(Self::new_unchecked(create_info))
    }

    fn validate_new(create_info: &DeviceCreateInfo) -> Result<(), Box<ValidationError>> {
        create_info
            .validate()
            .map_err(|err| err.add_context("create_info"))?;

        Ok(())
    }

    #[inline]
    pub fn new_unchecked(create_info: DeviceCreateInfo) -> Device {
        let DeviceCreateInfo {
            version,
            has_bit6_swizzling,
            has_aux_map,
            _ne: _,
        } = create_info;

        let supported_sample_counts = match version.major {
            9.. => {
                SampleCounts::SAMPLE_1
                    | SampleCounts::SAMPLE_2
                    | SampleCounts::SAMPLE_4
                    | SampleCounts::SAMPLE_8
                    | SampleCounts::SAMPLE_16
            }
            8 => {
                SampleCounts::SAMPLE_1
                    | SampleCounts::SAMPLE_2
                    | SampleCounts::SAMPLE_4
                    | SampleCounts::SAMPLE_8
            }
            7 => SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4 | SampleCounts::SAMPLE_8,
            6 => SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
            _ => SampleCounts::SAMPLE_1,
        };

        // Limited by the width field of buffer surface states.
        let max_buffer_size = match version.major {
            9.. => 1 << 32,
            7..=8 => 1 << 30,
            _ => 1 << 27,
        };

        let device = Device {
            version,
            has_bit6_swizzling,
            has_aux_map,
            use_separate_stencil: version.major >= 6,
            supported_sample_counts,
            max_buffer_size,
        };

        debug!(
            version = %device.version,
            bit6_swizzling = device.has_bit6_swizzling,
            aux_map = device.has_aux_map,
            "created isl device"
        );

        device
    }

    /// Returns the hardware generation.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the major hardware generation number.
    #[inline]
    pub fn ver(&self) -> u32 {
        self.version.major as u32
    }

    /// Returns the hardware generation as a single number, ten times the decimal version.
    #[inline]
    pub fn verx10(&self) -> u32 {
        self.version.verx10()
    }

    /// Returns whether bit 6 of addresses is swizzled by the memory controller.
    #[inline]
    pub fn has_bit6_swizzling(&self) -> bool {
        self.has_bit6_swizzling
    }

    /// Returns whether compression metadata is located through the aux-map translation table
    /// rather than through an explicit auxiliary surface address.
    #[inline]
    pub fn has_aux_map(&self) -> bool {
        self.has_aux_map
    }

    /// Returns whether depth and stencil are stored in separate surfaces.
    #[inline]
    pub fn use_separate_stencil(&self) -> bool {
        self.use_separate_stencil
    }

    /// Returns the sample counts that multisampled surfaces may use.
    #[inline]
    pub fn supported_sample_counts(&self) -> SampleCounts {
        self.supported_sample_counts
    }

    /// Returns the largest buffer that a single surface state can describe.
    #[inline]
    pub fn max_buffer_size(&self) -> DeviceSize {
        self.max_buffer_size
    }

    /// Returns the largest size a surface may have.
    #[inline]
    pub(crate) fn max_surface_size(&self) -> DeviceSize {
        // Bounded by the address space reachable through page tables of each generation.
        match self.ver() {
            11.. => 1 << 44,
            9..=10 => 1 << 38,
            _ => 1 << 31,
        }
    }
}

/// Parameters to create a new `Device`.
#[derive(Clone, Debug)]
pub struct DeviceCreateInfo {
    /// The hardware generation.
    ///
    /// The default value is [`Version::GFX9`].
    pub version: Version,

    /// Whether the memory controller swizzles bit 6 of tiled addresses.
    ///
    /// Bit 6 swizzling does not exist on gfx8 and newer.
    ///
    /// The default value is `false`.
    pub has_bit6_swizzling: bool,

    /// Whether the platform locates compression metadata through an aux-map table.
    ///
    /// The default value is `false`.
    pub has_aux_map: bool,

    pub _ne: crate::NonExhaustive,
}

impl Default for DeviceCreateInfo {
    #[inline]
    fn default() -> Self {
        Self {
            version: Version::GFX9,
            has_bit6_swizzling: false,
            has_aux_map: false,
            _ne: crate::NonExhaustive(()),
        }
    }
}

impl DeviceCreateInfo {
    pub(crate) fn validate(&self) -> Result<(), Box<ValidationError>> {
        let &Self {
            version,
            has_bit6_swizzling,
            has_aux_map,
            _ne: _,
        } = self;

        if !matches!(
            version.verx10(),
            40 | 45 | 50 | 60 | 70 | 75 | 80 | 90 | 110 | 120 | 125 | 200
        ) {
            return Err(Box::new(ValidationError {
                context: "version".into(),
                problem: format!("{} is not a known hardware generation", version).into(),
            }));
        }

        if has_bit6_swizzling && version.major >= 8 {
            return Err(Box::new(ValidationError {
                context: "has_bit6_swizzling".into(),
                problem: "is `true`, but bit 6 swizzling does not exist on gfx8 and newer".into(),
            }));
        }

        if has_aux_map && version.major < 12 {
            return Err(Box::new(ValidationError {
                context: "has_aux_map".into(),
                problem: "is `true`, but the aux-map table only exists on gfx12 and newer".into(),
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Device, DeviceCreateInfo};
    use crate::{surface::SampleCounts, Version};

    #[test]
    fn sample_counts() {
        let device = gfx_device!(6);
        assert_eq!(
            device.supported_sample_counts(),
            SampleCounts::SAMPLE_1 | SampleCounts::SAMPLE_4,
        );

        let device = gfx_device!(9);
        assert!(device
            .supported_sample_counts()
            .contains(SampleCounts::SAMPLE_16));
    }

    #[test]
    fn separate_stencil() {
        assert!(!gfx_device!(5).use_separate_stencil());
        assert!(gfx_device!(6).use_separate_stencil());
    }

    #[test]
    fn unknown_generation() {
        let err = Device::new(DeviceCreateInfo {
            version: Version::new(10, 0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.context, "create_info.version");
    }

    #[test]
    fn bit6_swizzling_on_new_hardware() {
        assert!(Device::new(DeviceCreateInfo {
            version: Version::GFX8,
            has_bit6_swizzling: true,
            ..Default::default()
        })
        .is_err());

        assert!(Device::new(DeviceCreateInfo {
            version: Version::GFX7,
            has_bit6_swizzling: true,
            ..Default::default()
        })
        .is_ok());
    }
}
