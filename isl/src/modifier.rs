// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! DRM format modifiers describing the layout of buffers shared with other processes.

use crate::{aux_state::AuxState, tiling::Tiling};
use std::fmt;

const fn intel_mod(value: u64) -> u64 {
    (0x01 << 56) | (value & 0x00ff_ffff_ffff_ffff)
}

/// A DRM format modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrmModifier(pub u64);

impl DrmModifier {
    pub const LINEAR: Self = Self(0);
    pub const INVALID: Self = Self(0x00ff_ffff_ffff_ffff);

    pub const X_TILED: Self = Self(intel_mod(1));
    pub const Y_TILED: Self = Self(intel_mod(2));
    pub const Y_TILED_CCS: Self = Self(intel_mod(4));
    pub const Y_TILED_GEN12_RC_CCS: Self = Self(intel_mod(6));
    pub const Y_TILED_GEN12_MC_CCS: Self = Self(intel_mod(7));
    pub const Y_TILED_GEN12_RC_CCS_CC: Self = Self(intel_mod(8));
    pub const TILED_4: Self = Self(intel_mod(9));
    pub const TILED_4_DG2_RC_CCS: Self = Self(intel_mod(10));
    pub const TILED_4_DG2_MC_CCS: Self = Self(intel_mod(11));
    pub const TILED_4_DG2_RC_CCS_CC: Self = Self(intel_mod(12));
    pub const TILED_4_MTL_RC_CCS: Self = Self(intel_mod(13));
    pub const TILED_4_MTL_MC_CCS: Self = Self(intel_mod(14));
    pub const TILED_4_MTL_RC_CCS_CC: Self = Self(intel_mod(15));

    /// Returns the description of the modifier, or `None` if it is not a modifier that Intel
    /// hardware understands.
    pub fn info(self) -> Option<&'static DrmModifierInfo> {
        DRM_MODIFIERS.iter().find(|info| info.modifier == self)
    }

    /// Returns whether buffers with this modifier carry a compression surface.
    pub fn has_aux(self) -> bool {
        self.info().is_some_and(|info| {
            info.supports_render_compression || info.supports_media_compression
        })
    }

    /// Returns whether memory plane `plane` of a buffer with this modifier holds the clear color.
    pub fn plane_is_clear_color(self, plane: u32) -> bool {
        let Some(info) = self.info() else {
            return false;
        };

        let clear_color_plane = match self {
            Self::TILED_4_MTL_RC_CCS_CC | Self::Y_TILED_GEN12_RC_CCS_CC => Some(2),
            Self::TILED_4_DG2_RC_CCS_CC => Some(1),
            _ => None,
        };
        debug_assert_eq!(clear_color_plane.is_some(), info.supports_clear_color);

        clear_color_plane == Some(plane)
    }

    /// Returns the auxiliary state that a buffer imported with this modifier must be assumed to
    /// be in.
    ///
    /// The exporter may have left the auxiliary data in any state with valid auxiliary data. The
    /// returned state is the one from which every such state can be interpreted correctly.
    /// Modifiers without auxiliary data give `AuxState::AuxInvalid`.
    pub fn default_aux_state(self) -> AuxState {
        let Some(info) = self.info().filter(|_| self.has_aux()) else {
            return AuxState::AuxInvalid;
        };

        debug_assert_ne!(
            info.supports_render_compression,
            info.supports_media_compression,
        );

        if info.supports_clear_color {
            AuxState::CompressedClear
        } else {
            AuxState::CompressedNoClear
        }
    }
}

impl fmt::Display for DrmModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.info() {
            Some(info) => f.write_str(info.name),
            None => write!(f, "{:#018x}", self.0),
        }
    }
}

/// Description of a DRM format modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrmModifierInfo {
    pub modifier: DrmModifier,
    pub name: &'static str,

    /// The tiling of the main surface.
    pub tiling: Tiling,

    pub supports_render_compression: bool,
    pub supports_media_compression: bool,

    /// Whether the clear color is stored in a plane of its own.
    pub supports_clear_color: bool,
}

impl DrmModifierInfo {
    const fn new(modifier: DrmModifier, name: &'static str, tiling: Tiling) -> Self {
        DrmModifierInfo {
            modifier,
            name,
            tiling,
            supports_render_compression: false,
            supports_media_compression: false,
            supports_clear_color: false,
        }
    }

    const fn render(self) -> Self {
        DrmModifierInfo {
            supports_render_compression: true,
            ..self
        }
    }

    const fn media(self) -> Self {
        DrmModifierInfo {
            supports_media_compression: true,
            ..self
        }
    }

    const fn clear_color(self) -> Self {
        DrmModifierInfo {
            supports_clear_color: true,
            ..self
        }
    }
}

/// Every modifier that Intel hardware understands.
pub static DRM_MODIFIERS: &[DrmModifierInfo] = &[
    DrmModifierInfo::new(DrmModifier::LINEAR, "DRM_FORMAT_MOD_LINEAR", Tiling::Linear),
    DrmModifierInfo::new(DrmModifier::X_TILED, "I915_FORMAT_MOD_X_TILED", Tiling::X),
    DrmModifierInfo::new(DrmModifier::Y_TILED, "I915_FORMAT_MOD_Y_TILED", Tiling::Y0),
    DrmModifierInfo::new(DrmModifier::Y_TILED_CCS, "I915_FORMAT_MOD_Y_TILED_CCS", Tiling::Y0)
        .render(),
    DrmModifierInfo::new(
        DrmModifier::Y_TILED_GEN12_RC_CCS,
        "I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS",
        Tiling::Y0,
    )
    .render(),
    DrmModifierInfo::new(
        DrmModifier::Y_TILED_GEN12_MC_CCS,
        "I915_FORMAT_MOD_Y_TILED_GEN12_MC_CCS",
        Tiling::Y0,
    )
    .media(),
    DrmModifierInfo::new(
        DrmModifier::Y_TILED_GEN12_RC_CCS_CC,
        "I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS_CC",
        Tiling::Y0,
    )
    .render()
    .clear_color(),
    DrmModifierInfo::new(DrmModifier::TILED_4, "I915_FORMAT_MOD_4_TILED", Tiling::Tile4),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_DG2_RC_CCS,
        "I915_FORMAT_MOD_4_TILED_DG2_RC_CCS",
        Tiling::Tile4,
    )
    .render(),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_DG2_MC_CCS,
        "I915_FORMAT_MOD_4_TILED_DG2_MC_CCS",
        Tiling::Tile4,
    )
    .media(),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_DG2_RC_CCS_CC,
        "I915_FORMAT_MOD_4_TILED_DG2_RC_CCS_CC",
        Tiling::Tile4,
    )
    .render()
    .clear_color(),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_MTL_RC_CCS,
        "I915_FORMAT_MOD_4_TILED_MTL_RC_CCS",
        Tiling::Tile4,
    )
    .render(),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_MTL_MC_CCS,
        "I915_FORMAT_MOD_4_TILED_MTL_MC_CCS",
        Tiling::Tile4,
    )
    .media(),
    DrmModifierInfo::new(
        DrmModifier::TILED_4_MTL_RC_CCS_CC,
        "I915_FORMAT_MOD_4_TILED_MTL_RC_CCS_CC",
        Tiling::Tile4,
    )
    .render()
    .clear_color(),
];

#[cfg(test)]
mod tests {
    use super::{DrmModifier, DRM_MODIFIERS};
    use crate::{aux_state::AuxState, tiling::Tiling};

    #[test]
    fn lookup() {
        let info = DrmModifier::Y_TILED_GEN12_RC_CCS.info().unwrap();
        assert_eq!(info.tiling, Tiling::Y0);
        assert!(info.supports_render_compression);
        assert_eq!(DrmModifier::Y_TILED_GEN12_RC_CCS.0, 0x0100_0000_0000_0006);

        assert!(DrmModifier::INVALID.info().is_none());
        assert!(DrmModifier(0x0200_0000_0000_0001).info().is_none());
        assert_eq!(DrmModifier::X_TILED.to_string(), "I915_FORMAT_MOD_X_TILED");
        assert_eq!(DrmModifier::INVALID.to_string(), "0x00ffffffffffffff");

        for (i, info) in DRM_MODIFIERS.iter().enumerate() {
            assert!(DRM_MODIFIERS[i + 1..]
                .iter()
                .all(|other| other.modifier != info.modifier));
        }
    }

    #[test]
    fn clear_color_plane() {
        assert!(DrmModifier::Y_TILED_GEN12_RC_CCS_CC.plane_is_clear_color(2));
        assert!(!DrmModifier::Y_TILED_GEN12_RC_CCS_CC.plane_is_clear_color(1));
        assert!(DrmModifier::TILED_4_DG2_RC_CCS_CC.plane_is_clear_color(1));
        assert!(!DrmModifier::TILED_4_DG2_RC_CCS.plane_is_clear_color(1));
        assert!(!DrmModifier::INVALID.plane_is_clear_color(0));

        for info in DRM_MODIFIERS {
            let has_plane = (0..4).any(|plane| info.modifier.plane_is_clear_color(plane));
            assert_eq!(has_plane, info.supports_clear_color, "{}", info.name);
        }
    }

    #[test]
    fn default_aux_state() {
        assert_eq!(DrmModifier::LINEAR.default_aux_state(), AuxState::AuxInvalid);
        assert_eq!(DrmModifier::INVALID.default_aux_state(), AuxState::AuxInvalid);
        assert_eq!(
            DrmModifier::Y_TILED_CCS.default_aux_state(),
            AuxState::CompressedNoClear,
        );
        assert_eq!(
            DrmModifier::TILED_4_MTL_MC_CCS.default_aux_state(),
            AuxState::CompressedNoClear,
        );
        assert_eq!(
            DrmModifier::TILED_4_MTL_RC_CCS_CC.default_aux_state(),
            AuxState::CompressedClear,
        );
        assert!(!DrmModifier::TILED_4.has_aux());
        assert!(DrmModifier::TILED_4_DG2_MC_CCS.has_aux());
    }
}
