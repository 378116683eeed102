// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Surface layout and auxiliary compression tracking for Intel GPUs.
//!
//! # Brief summary
//!
//! - A [`Device`](crate::device::Device) describes the hardware generation that surfaces are laid
//!   out for. Every layout computation takes one, because alignment, tiling and pitch rules change
//!   from one generation to the next.
//!
//! - A [`Format`](crate::format::Format) identifies the memory layout of a single element. The
//!   [`FormatLayout`](crate::format::FormatLayout) of a format gives its block size, channels and
//!   compression class. [`Swizzle`](crate::format::Swizzle) and
//!   [`ColorValue`](crate::format::ColorValue) describe channel selects and clear colors.
//!
//! - A [`Tiling`](crate::tiling::Tiling) is a fixed rearrangement of memory addresses into tiles.
//!   [`Tiling::tile_info`](crate::tiling::Tiling::tile_info) returns the geometry of one tile for a
//!   given element size and sample count.
//!
//! - A [`Surface`](crate::surface::Surface) is created from a
//!   [`SurfaceCreateInfo`](crate::surface::SurfaceCreateInfo) and holds the complete physical layout
//!   of an image: tiling, row and array pitch, size, alignment and the level at which the miptail
//!   begins. Offsets of individual levels and layers are queried from it.
//!
//! - Auxiliary surfaces (HiZ, MCS and CCS) are derived from a primary surface with
//!   [`Surface::hiz_surface`](crate::surface::Surface::hiz_surface) and friends.
//!
//! - The [`aux_state`] module tracks the compression state of each slice of a surface and tells
//!   the caller which resolve or ambiguate operation must happen before an access.
//!
//! - The [`modifier`] module describes the DRM format modifiers of buffers shared with other
//!   processes, and the auxiliary state an imported buffer starts in.
//!
//! All computations are pure functions over immutable inputs. None of them touch shared mutable
//! state, so they can be called from any number of threads at once.

pub use crate::version::Version;
use std::{
    borrow::Cow,
    error::Error,
    fmt::{Debug, Display, Error as FmtError, Formatter},
};

#[macro_use]
mod tests;
#[macro_use]
mod macros;
pub mod aux_state;
pub mod device;
mod extent;
pub mod format;
pub mod modifier;
pub mod surface;
pub mod tiling;
mod version;

pub use crate::extent::{Extent2D, Extent3D, Extent4D, Offset3D, Offset4D};

/// Represents memory size and offset values on the device.
/// Analogous to the Rust `usize` type on the host.
pub type DeviceSize = u64;

/// The arguments or other context of a call to a layout function were not valid.
///
/// Failures of this kind are recoverable: the caller passed a description that cannot be laid out
/// on the target hardware, and may retry with a different one. Programming errors, such as asking
/// for an impossible auxiliary state transition, panic instead.
#[derive(Clone, Default)]
pub struct ValidationError {
    /// The context in which the problem exists.
    pub context: Cow<'static, str>,

    /// A description of the problem.
    pub problem: Cow<'static, str>,
}

impl ValidationError {
    pub(crate) fn add_context(mut self: Box<Self>, context: impl Into<Cow<'static, str>>) -> Box<Self> {
        if self.context.is_empty() {
            self.context = context.into();
        } else {
            self.context = format!("{}.{}", context.into(), self.context).into();
        }

        self
    }
}

impl Debug for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.context.is_empty() {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.context, self.problem)
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        Debug::fmt(self, f)
    }
}

impl Error for ValidationError {}

/// A helper type for non-exhaustive structs.
///
/// This type cannot be constructed outside this crate. Structures with a field of this type can
/// only be constructed by calling a constructor function or `Default::default()`. The effect is
/// similar to the standard Rust `#[non_exhaustive]` attribute, except that it does not prevent
/// update syntax from being used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] // add traits as needed
pub struct NonExhaustive(pub(crate) ());
