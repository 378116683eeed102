// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

// The `Version` object is reexported from the crate root.

use std::cmp::Ordering;
use std::fmt;

/// Represents a graphics hardware generation.
///
/// Half-step generations such as Haswell (7.5) or Xe-HP (12.5) are expressed with the minor
/// number. Most layout rules only look at the major number; a few compare the combined value
/// returned by [`verx10`](Version::verx10).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    /// Major version number.
    pub major: u16,
    /// Minor version number.
    pub minor: u16,
}

impl fmt::Debug for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "gfx{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => (),
            o => return o,
        };

        self.minor.cmp(&other.minor)
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Self {
        Self::GFX9
    }
}

impl Version {
    pub const GFX4: Version = Version::new(4, 0);
    pub const G4X: Version = Version::new(4, 5);
    pub const GFX5: Version = Version::new(5, 0);
    pub const GFX6: Version = Version::new(6, 0);
    pub const GFX7: Version = Version::new(7, 0);
    pub const HASWELL: Version = Version::new(7, 5);
    pub const GFX8: Version = Version::new(8, 0);
    pub const GFX9: Version = Version::new(9, 0);
    pub const GFX11: Version = Version::new(11, 0);
    pub const GFX12: Version = Version::new(12, 0);
    pub const GFX12_5: Version = Version::new(12, 5);
    pub const GFX20: Version = Version::new(20, 0);

    #[inline]
    pub const fn new(major: u16, minor: u16) -> Version {
        Version { major, minor }
    }

    /// Returns the generation as a single number, ten times the decimal version.
    ///
    /// Haswell returns `75`, Xe-HP returns `125`.
    #[inline]
    pub const fn verx10(&self) -> u32 {
        self.major as u32 * 10 + self.minor as u32
    }

    /// Turns a combined number, as returned by [`verx10`](Version::verx10), back into a
    /// `Version`.
    #[inline]
    pub const fn from_verx10(value: u32) -> Version {
        Version {
            major: (value / 10) as u16,
            minor: (value % 10) as u16,
        }
    }
}
