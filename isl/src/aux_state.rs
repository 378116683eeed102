// Copyright (c) 2026 The isl contributors
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>,
// at your option. All files in the project carrying such
// notice may not be copied, modified, or distributed except
// according to those terms.

//! Tracking the state of auxiliary compression data.
//!
//! Each slice (one mip level of one array layer) of a surface with an auxiliary surface is, at any
//! moment, in one of the [`AuxState`]s. Drawing with or without the auxiliary surface enabled, and
//! explicit operations such as resolves, move the slice from one state to another.
//!
//! The library does not store any state itself. The caller keeps one `AuxState` per slice and asks,
//! before each access, which [`AuxOp`] must be performed first:
//!
//! ```
//! use isl::aux_state::{AuxOp, AuxState, AuxUsage};
//!
//! let mut state = AuxState::Clear;
//!
//! // Sampling without fast clear support needs the clear color written out first.
//! let op = state.prepare_access(AuxUsage::CcsE, false);
//! assert_eq!(op, AuxOp::PartialResolve);
//!
//! state = state.transition_aux_op(AuxUsage::CcsE, op);
//! assert_eq!(state, AuxState::CompressedNoClear);
//! assert_eq!(state.prepare_access(AuxUsage::CcsE, false), AuxOp::None);
//! ```
//!
//! Not every state is reachable under every usage. Asking for a transition from a state that the
//! usage can never produce, or for an operation the usage does not support, is a bug in the caller
//! and panics.

use std::fmt;
use tracing::trace;

isl_enum! {
    /// The way an auxiliary surface is used to compress its primary surface.
    AuxUsage impl {
        /// Returns whether `self` uses a HiZ surface.
        #[inline]
        pub const fn is_hiz(self) -> bool {
            matches!(self, AuxUsage::Hiz | AuxUsage::HizCcsWt | AuxUsage::HizCcs)
        }

        /// Returns whether `self` uses an MCS surface.
        #[inline]
        pub const fn is_mcs(self) -> bool {
            matches!(self, AuxUsage::Mcs | AuxUsage::McsCcs)
        }

        /// Returns whether `self` uses a CCS surface, on its own or fused with HiZ or MCS.
        #[inline]
        pub const fn is_ccs(self) -> bool {
            matches!(
                self,
                AuxUsage::CcsD
                    | AuxUsage::CcsE
                    | AuxUsage::FcvCcsE
                    | AuxUsage::Mc
                    | AuxUsage::HizCcsWt
                    | AuxUsage::HizCcs
                    | AuxUsage::McsCcs
                    | AuxUsage::StcCcs
            )
        }

        /// Returns whether `self` is lossless single-sampled color compression.
        #[inline]
        pub const fn is_ccs_e(self) -> bool {
            matches!(self, AuxUsage::CcsE | AuxUsage::FcvCcsE)
        }

        /// Returns whether `self` supports fast clears.
        #[inline]
        pub const fn has_fast_clears(self) -> bool {
            self.info().fast_clear
        }

        /// Returns whether `self` supports real compression, beyond tracking the clear color.
        #[inline]
        pub const fn has_compression(self) -> bool {
            self.info().compressed
        }

        /// Returns the short name of the usage.
        pub const fn name(self) -> &'static str {
            match self {
                AuxUsage::None => "none",
                AuxUsage::Hiz => "hiz",
                AuxUsage::Mcs => "mcs",
                AuxUsage::CcsD => "ccs-d",
                AuxUsage::CcsE => "ccs-e",
                AuxUsage::FcvCcsE => "fcv-ccs-e",
                AuxUsage::Mc => "mc",
                AuxUsage::HizCcsWt => "hiz-ccs-wt",
                AuxUsage::HizCcs => "hiz-ccs",
                AuxUsage::McsCcs => "mcs-ccs",
                AuxUsage::StcCcs => "stc-ccs",
            }
        }

        const fn info(self) -> AuxUsageInfo {
            use WriteBehavior::*;

            //                                 write behavior      c      fc     pr     fra
            match self {
                AuxUsage::None =>     AuxUsageInfo::new(OnlyTouchMain,    false, false, false, false),
                AuxUsage::Hiz =>      AuxUsageInfo::new(Compress,         true,  true,  false, false),
                AuxUsage::HizCcs =>   AuxUsageInfo::new(Compress,         true,  true,  false, false),
                AuxUsage::HizCcsWt => AuxUsageInfo::new(Compress,         true,  true,  false, false),
                AuxUsage::Mcs =>      AuxUsageInfo::new(Compress,         true,  true,  true,  false),
                AuxUsage::McsCcs =>   AuxUsageInfo::new(Compress,         true,  true,  true,  false),
                AuxUsage::CcsE =>     AuxUsageInfo::new(Compress,         true,  true,  true,  true),
                AuxUsage::FcvCcsE =>  AuxUsageInfo::new(CompressClear,    true,  true,  true,  true),
                AuxUsage::CcsD =>     AuxUsageInfo::new(ResolveAmbiguate, false, true,  false, true),
                AuxUsage::Mc =>       AuxUsageInfo::new(ResolveAmbiguate, true,  false, false, true),
                AuxUsage::StcCcs =>   AuxUsageInfo::new(Compress,         true,  false, false, true),
            }
        }
    }
    = u8;

    /// No auxiliary surface is used.
    None = 0,

    /// Hierarchical depth compression.
    Hiz = 1,

    /// Multisampled color compression, mapping samples to planes.
    Mcs = 2,

    /// Single-sampled color compression that only tracks fast clears.
    CcsD = 3,

    /// Single-sampled lossless color compression.
    CcsE = 4,

    /// Lossless color compression where regular draws may also fast clear blocks.
    FcvCcsE = 5,

    /// Media compression, produced by the media engine.
    Mc = 6,

    /// Fused HiZ and CCS, with HiZ in write-through mode.
    ///
    /// The CCS-compressed main surface holds valid data at all times.
    HizCcsWt = 7,

    /// Fused HiZ and CCS with full HiZ compression.
    HizCcs = 8,

    /// Fused MCS and CCS, where each plane is CCS compressed.
    McsCcs = 9,

    /// Stencil compression.
    StcCcs = 10,
}

impl fmt::Display for AuxUsage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a draw through an auxiliary usage does to the auxiliary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WriteBehavior {
    /// Writes only touch the main surface.
    OnlyTouchMain,
    /// Writes are compressed.
    Compress,
    /// Writes are compressed or replaced with fast clears of the block.
    CompressClear,
    /// Writes go to the main surface, and full resolves leave nothing to ambiguate.
    ResolveAmbiguate,
}

#[derive(Clone, Copy, Debug)]
struct AuxUsageInfo {
    write_behavior: WriteBehavior,
    compressed: bool,
    fast_clear: bool,
    partial_resolve: bool,
    full_resolves_ambiguate: bool,
}

impl AuxUsageInfo {
    const fn new(
        write_behavior: WriteBehavior,
        compressed: bool,
        fast_clear: bool,
        partial_resolve: bool,
        full_resolves_ambiguate: bool,
    ) -> Self {
        AuxUsageInfo {
            write_behavior,
            compressed,
            fast_clear,
            partial_resolve,
            full_resolves_ambiguate,
        }
    }
}

isl_enum! {
    /// The state of the auxiliary data of one slice of a surface.
    AuxState impl {
        /// Returns whether the primary surface holds all the data in this state, so that it can be
        /// accessed with no auxiliary surface at all.
        #[inline]
        pub const fn has_valid_primary(self) -> bool {
            matches!(self, AuxState::Resolved | AuxState::PassThrough | AuxState::AuxInvalid)
        }

        /// Returns whether the auxiliary surface can be used in this state.
        #[inline]
        pub const fn has_valid_aux(self) -> bool {
            !matches!(self, AuxState::AuxInvalid)
        }

        /// Returns whether a slice compressed with `usage` can ever be in this state.
        pub const fn is_possible(self, usage: AuxUsage) -> bool {
            let info = usage.info();

            match self {
                AuxState::Clear | AuxState::PartialClear => info.fast_clear,
                AuxState::CompressedClear => info.fast_clear && info.compressed,
                AuxState::CompressedNoClear => info.compressed,
                AuxState::Resolved | AuxState::PassThrough | AuxState::AuxInvalid => true,
            }
        }

        /// Returns the operation that must be performed before the slice is accessed with `usage`.
        ///
        /// `fast_clear_supported` is whether the access can itself read the clear color. It may
        /// only be `true` if `usage` supports fast clears.
        ///
        /// `AuxUsage::None` may be passed for an access that ignores the auxiliary surface. The
        /// returned operation is then performed with the usage the surface was compressed with.
        ///
        /// # Panics
        ///
        /// - Panics if `self` is not possible under `usage`.
        /// - Panics if `fast_clear_supported` is `true` and `usage` has no fast clears.
        pub fn prepare_access(self, usage: AuxUsage, fast_clear_supported: bool) -> AuxOp {
            if usage != AuxUsage::None {
                assert!(
                    self.is_possible(usage.state_superset()),
                    "aux state {} is not possible with usage {}",
                    self,
                    usage,
                );
            }

            let info = usage.info();
            assert!(
                !fast_clear_supported || info.fast_clear,
                "usage {} does not support fast clears",
                usage,
            );

            let op = match self {
                AuxState::CompressedClear if !info.compressed => AuxOp::FullResolve,
                AuxState::Clear | AuxState::PartialClear | AuxState::CompressedClear => {
                    if fast_clear_supported {
                        AuxOp::None
                    } else if info.partial_resolve {
                        AuxOp::PartialResolve
                    } else {
                        AuxOp::FullResolve
                    }
                }
                AuxState::CompressedNoClear => {
                    if info.compressed {
                        AuxOp::None
                    } else {
                        AuxOp::FullResolve
                    }
                }
                AuxState::Resolved | AuxState::PassThrough => AuxOp::None,
                AuxState::AuxInvalid => {
                    if info.write_behavior == WriteBehavior::OnlyTouchMain {
                        AuxOp::None
                    } else {
                        AuxOp::Ambiguate
                    }
                }
            };

            if op != AuxOp::None {
                trace!(state = %self, %usage, %op, "access needs an aux operation");
            }

            op
        }

        /// Returns the state that results from performing `op` on a slice compressed with `usage`.
        ///
        /// # Panics
        ///
        /// - Panics if `self` is not possible under `usage`.
        /// - Panics if `usage` is `AuxUsage::None` and `op` is not `AuxOp::None`.
        /// - Panics if `op` is a fast clear or partial resolve and `usage` does not support it.
        /// - Panics if `op` is a resolve and `self` has no valid auxiliary data.
        pub fn transition_aux_op(self, usage: AuxUsage, op: AuxOp) -> AuxState {
            assert!(
                self.is_possible(usage.state_superset()),
                "aux state {} is not possible with usage {}",
                self,
                usage,
            );
            assert!(
                usage != AuxUsage::None || op == AuxOp::None,
                "aux operation {} needs an aux usage",
                op,
            );

            let info = usage.info();

            match op {
                AuxOp::None => self,
                AuxOp::FastClear => {
                    assert!(info.fast_clear, "usage {} does not support fast clears", usage);

                    AuxState::Clear
                }
                AuxOp::PartialResolve => {
                    assert!(
                        self.has_valid_aux(),
                        "cannot partially resolve from aux state {}",
                        self,
                    );
                    assert!(
                        info.partial_resolve,
                        "usage {} does not support partial resolves",
                        usage,
                    );

                    match self {
                        AuxState::Clear | AuxState::PartialClear | AuxState::CompressedClear => {
                            AuxState::CompressedNoClear
                        }
                        _ => self,
                    }
                }
                AuxOp::FullResolve => {
                    assert!(self.has_valid_aux(), "cannot resolve from aux state {}", self);

                    if info.full_resolves_ambiguate || self == AuxState::PassThrough {
                        AuxState::PassThrough
                    } else {
                        AuxState::Resolved
                    }
                }
                AuxOp::Ambiguate => AuxState::PassThrough,
            }
        }

        /// Returns the state that results from a draw through `usage`.
        ///
        /// `full_surface` is whether the draw covers the entire slice.
        ///
        /// # Panics
        ///
        /// - Panics if `usage` is `AuxUsage::None`, `full_surface` is `false` and `self` has no
        ///   valid primary data.
        /// - Panics if `usage` is not `AuxUsage::None` and `self` has no valid auxiliary data or
        ///   is not possible under `usage`.
        pub fn transition_write(self, usage: AuxUsage, full_surface: bool) -> AuxState {
            let info = usage.info();

            if info.write_behavior == WriteBehavior::OnlyTouchMain {
                assert!(
                    full_surface || self.has_valid_primary(),
                    "partial write without aux from aux state {}",
                    self,
                );

                return if self == AuxState::PassThrough {
                    AuxState::PassThrough
                } else {
                    AuxState::AuxInvalid
                };
            }

            assert!(self.has_valid_aux(), "cannot write with aux in aux state {}", self);
            assert!(
                self.is_possible(usage),
                "aux state {} is not possible with usage {}",
                self,
                usage,
            );

            if full_surface {
                return match info.write_behavior {
                    WriteBehavior::Compress => AuxState::CompressedNoClear,
                    WriteBehavior::CompressClear => AuxState::CompressedClear,
                    _ => AuxState::PassThrough,
                };
            }

            match self {
                AuxState::Clear | AuxState::PartialClear => {
                    if info.write_behavior == WriteBehavior::ResolveAmbiguate {
                        AuxState::PartialClear
                    } else {
                        AuxState::CompressedClear
                    }
                }
                AuxState::Resolved | AuxState::PassThrough | AuxState::CompressedNoClear => {
                    match info.write_behavior {
                        WriteBehavior::Compress => AuxState::CompressedNoClear,
                        WriteBehavior::CompressClear => AuxState::CompressedClear,
                        _ => self,
                    }
                }
                AuxState::CompressedClear | AuxState::AuxInvalid => self,
            }
        }

        /// Returns the short name of the state.
        pub const fn name(self) -> &'static str {
            match self {
                AuxState::Clear => "clear",
                AuxState::PartialClear => "partial-clear",
                AuxState::CompressedClear => "compressed-clear",
                AuxState::CompressedNoClear => "compressed-no-clear",
                AuxState::Resolved => "resolved",
                AuxState::PassThrough => "pass-through",
                AuxState::AuxInvalid => "aux-invalid",
            }
        }
    }
    = u8;

    /// Every block of the auxiliary surface holds the clear value.
    ///
    /// This is the state after a fast clear of the whole slice.
    Clear = 0,

    /// Some blocks hold the clear value, the rest are uncompressed data in the primary surface.
    PartialClear = 1,

    /// Blocks may be compressed or clear.
    CompressedClear = 2,

    /// Blocks may be compressed, but none of them refer to the clear color.
    CompressedNoClear = 3,

    /// The primary surface holds all the data, and the auxiliary surface agrees with it.
    ///
    /// Drawing with the auxiliary surface disabled in this state moves the slice to
    /// `AuxInvalid`.
    Resolved = 4,

    /// The primary surface holds all the data, and the auxiliary surface says to use it as is.
    PassThrough = 5,

    /// The primary surface holds all the data, and the auxiliary surface is garbage.
    ///
    /// The only way back to using the auxiliary surface is an ambiguate.
    AuxInvalid = 6,
}

impl fmt::Display for AuxState {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AuxUsage {
    // CCS_D surfaces may be accessed with CCS_E enabled, which leaves them in compressed states.
    const fn state_superset(self) -> AuxUsage {
        match self {
            AuxUsage::CcsD => AuxUsage::CcsE,
            _ => self,
        }
    }
}

isl_enum! {
    /// An explicit operation on the auxiliary data of a slice.
    AuxOp impl {
        /// Returns the short name of the operation.
        pub const fn name(self) -> &'static str {
            match self {
                AuxOp::None => "none",
                AuxOp::FastClear => "fast-clear",
                AuxOp::FullResolve => "full-resolve",
                AuxOp::PartialResolve => "partial-resolve",
                AuxOp::Ambiguate => "ambiguate",
            }
        }
    }
    = u8;

    /// Do nothing.
    None = 0,

    /// Write the clear value to every block of the auxiliary surface.
    FastClear = 1,

    /// Combine the auxiliary data with the primary surface and write the result to the primary
    /// surface.
    ///
    /// For some usages this also ambiguates, which takes the slice to `AuxState::PassThrough`.
    FullResolve = 2,

    /// Write the clear value into every block that is in the clear state. The slice stays
    /// compressed.
    PartialResolve = 3,

    /// Throw away the auxiliary data and replace it with the pass-through value.
    ///
    /// Data is lost if the primary surface does not hold all of it.
    Ambiguate = 4,
}

impl fmt::Display for AuxOp {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{AuxOp, AuxState, AuxUsage};

    fn op_is_legal(state: AuxState, usage: AuxUsage, op: AuxOp) -> bool {
        match op {
            AuxOp::None => true,
            _ if usage == AuxUsage::None => false,
            AuxOp::FastClear => usage.has_fast_clears(),
            AuxOp::PartialResolve => state.has_valid_aux() && usage.info().partial_resolve,
            AuxOp::FullResolve => state.has_valid_aux(),
            AuxOp::Ambiguate => true,
        }
    }

    #[test]
    fn usage_predicates() {
        assert!(AuxUsage::HizCcsWt.is_hiz());
        assert!(AuxUsage::HizCcsWt.is_ccs());
        assert!(AuxUsage::McsCcs.is_mcs());
        assert!(!AuxUsage::Mcs.is_ccs());
        assert!(AuxUsage::FcvCcsE.is_ccs_e());
        assert!(!AuxUsage::CcsD.is_ccs_e());
        assert!(!AuxUsage::CcsD.has_compression());
        assert!(!AuxUsage::Mc.has_fast_clears());

        for usage in AuxUsage::ALL {
            if usage == AuxUsage::None {
                assert!(!usage.is_hiz() && !usage.is_mcs() && !usage.is_ccs());
            } else {
                assert!(usage.is_hiz() || usage.is_mcs() || usage.is_ccs());
            }
        }
    }

    #[test]
    fn possible_states() {
        let ccs_d: Vec<_> = AuxState::ALL
            .into_iter()
            .filter(|state| state.is_possible(AuxUsage::CcsD))
            .collect();
        assert_eq!(
            ccs_d,
            [
                AuxState::Clear,
                AuxState::PartialClear,
                AuxState::Resolved,
                AuxState::PassThrough,
                AuxState::AuxInvalid,
            ],
        );

        assert!(!AuxState::Clear.is_possible(AuxUsage::Mc));
        assert!(AuxState::CompressedNoClear.is_possible(AuxUsage::Mc));
        assert!(AuxState::CompressedClear.is_possible(AuxUsage::Hiz));
        assert!(!AuxState::CompressedClear.is_possible(AuxUsage::StcCcs));
    }

    #[test]
    fn transitions_are_closed() {
        for usage in AuxUsage::ALL {
            for state in AuxState::ALL {
                if !state.is_possible(usage) {
                    continue;
                }

                for op in AuxOp::ALL {
                    if !op_is_legal(state, usage, op) {
                        continue;
                    }

                    let next = state.transition_aux_op(usage, op);
                    assert!(
                        next.is_possible(usage),
                        "{} on {} with {} gave {}",
                        op,
                        state,
                        usage,
                        next,
                    );
                }

                for full_surface in [false, true] {
                    let legal = if usage == AuxUsage::None {
                        full_surface || state.has_valid_primary()
                    } else {
                        state.has_valid_aux()
                    };

                    if !legal {
                        continue;
                    }

                    let next = state.transition_write(usage, full_surface);
                    assert!(
                        next.is_possible(usage),
                        "write ({}) on {} with {} gave {}",
                        full_surface,
                        state,
                        usage,
                        next,
                    );
                }
            }
        }
    }

    #[test]
    fn prepare_access_is_idempotent() {
        for usage in AuxUsage::ALL {
            if usage == AuxUsage::None {
                continue;
            }

            for state in AuxState::ALL {
                if !state.is_possible(usage.state_superset()) {
                    continue;
                }

                for fast_clear in [false, true] {
                    if fast_clear && !usage.has_fast_clears() {
                        continue;
                    }

                    let op = state.prepare_access(usage, fast_clear);
                    let next = state.transition_aux_op(usage, op);
                    assert_eq!(
                        next.prepare_access(usage, fast_clear),
                        AuxOp::None,
                        "{} then {} with {}",
                        state,
                        op,
                        usage,
                    );
                }
            }
        }
    }

    #[test]
    fn prepare_access() {
        assert_eq!(AuxState::Clear.prepare_access(AuxUsage::CcsE, true), AuxOp::None);
        assert_eq!(
            AuxState::Clear.prepare_access(AuxUsage::CcsE, false),
            AuxOp::PartialResolve,
        );
        assert_eq!(
            AuxState::PartialClear.prepare_access(AuxUsage::CcsD, false),
            AuxOp::FullResolve,
        );
        assert_eq!(
            AuxState::CompressedClear.prepare_access(AuxUsage::CcsD, true),
            AuxOp::FullResolve,
        );
        assert_eq!(
            AuxState::CompressedNoClear.prepare_access(AuxUsage::CcsD, false),
            AuxOp::FullResolve,
        );
        assert_eq!(
            AuxState::CompressedNoClear.prepare_access(AuxUsage::Hiz, false),
            AuxOp::None,
        );
        assert_eq!(AuxState::AuxInvalid.prepare_access(AuxUsage::Hiz, false), AuxOp::Ambiguate);
        assert_eq!(AuxState::Resolved.prepare_access(AuxUsage::Mcs, false), AuxOp::None);

        // Without aux, anything that the primary surface does not fully hold must be resolved.
        assert_eq!(AuxState::AuxInvalid.prepare_access(AuxUsage::None, false), AuxOp::None);
        assert_eq!(AuxState::PassThrough.prepare_access(AuxUsage::None, false), AuxOp::None);
        assert_eq!(AuxState::Clear.prepare_access(AuxUsage::None, false), AuxOp::FullResolve);
        assert_eq!(
            AuxState::CompressedNoClear.prepare_access(AuxUsage::None, false),
            AuxOp::FullResolve,
        );

        let resolved = AuxState::CompressedClear.transition_aux_op(AuxUsage::CcsE, AuxOp::FullResolve);
        assert_eq!(resolved, AuxState::PassThrough);
        assert_eq!(resolved.prepare_access(AuxUsage::None, false), AuxOp::None);
    }

    #[test]
    fn aux_ops() {
        assert_eq!(
            AuxState::PassThrough.transition_aux_op(AuxUsage::Hiz, AuxOp::FastClear),
            AuxState::Clear,
        );
        assert_eq!(
            AuxState::CompressedClear.transition_aux_op(AuxUsage::Hiz, AuxOp::FullResolve),
            AuxState::Resolved,
        );
        assert_eq!(
            AuxState::PassThrough.transition_aux_op(AuxUsage::Hiz, AuxOp::FullResolve),
            AuxState::PassThrough,
        );
        assert_eq!(
            AuxState::Clear.transition_aux_op(AuxUsage::CcsD, AuxOp::FullResolve),
            AuxState::PassThrough,
        );
        assert_eq!(
            AuxState::PartialClear.transition_aux_op(AuxUsage::Mcs, AuxOp::PartialResolve),
            AuxState::CompressedNoClear,
        );
        assert_eq!(
            AuxState::Resolved.transition_aux_op(AuxUsage::CcsE, AuxOp::PartialResolve),
            AuxState::Resolved,
        );
        assert_eq!(
            AuxState::AuxInvalid.transition_aux_op(AuxUsage::Hiz, AuxOp::Ambiguate),
            AuxState::PassThrough,
        );
        assert_eq!(
            AuxState::Clear.transition_aux_op(AuxUsage::CcsE, AuxOp::None),
            AuxState::Clear,
        );
    }

    #[test]
    fn writes() {
        // Full writes
        assert_eq!(
            AuxState::Clear.transition_write(AuxUsage::Hiz, true),
            AuxState::CompressedNoClear,
        );
        assert_eq!(
            AuxState::Resolved.transition_write(AuxUsage::FcvCcsE, true),
            AuxState::CompressedClear,
        );
        assert_eq!(
            AuxState::Clear.transition_write(AuxUsage::CcsD, true),
            AuxState::PassThrough,
        );

        // Partial writes
        assert_eq!(
            AuxState::Clear.transition_write(AuxUsage::CcsD, false),
            AuxState::PartialClear,
        );
        assert_eq!(
            AuxState::PartialClear.transition_write(AuxUsage::CcsE, false),
            AuxState::CompressedClear,
        );
        assert_eq!(
            AuxState::PassThrough.transition_write(AuxUsage::CcsE, false),
            AuxState::CompressedNoClear,
        );
        assert_eq!(
            AuxState::Resolved.transition_write(AuxUsage::FcvCcsE, false),
            AuxState::CompressedClear,
        );
        assert_eq!(
            AuxState::Resolved.transition_write(AuxUsage::CcsD, false),
            AuxState::Resolved,
        );
        assert_eq!(
            AuxState::CompressedClear.transition_write(AuxUsage::CcsE, false),
            AuxState::CompressedClear,
        );

        // Writes without aux
        assert_eq!(
            AuxState::PassThrough.transition_write(AuxUsage::None, false),
            AuxState::PassThrough,
        );
        assert_eq!(
            AuxState::Resolved.transition_write(AuxUsage::None, false),
            AuxState::AuxInvalid,
        );
        assert_eq!(
            AuxState::CompressedClear.transition_write(AuxUsage::None, true),
            AuxState::AuxInvalid,
        );
    }

    #[test]
    fn invalid_requests() {
        assert_should_panic!("is not possible with usage", {
            AuxState::Clear.prepare_access(AuxUsage::Mc, false);
        });
        assert_should_panic!("does not support fast clears", {
            AuxState::PassThrough.prepare_access(AuxUsage::StcCcs, true);
        });
        assert_should_panic!("does not support partial resolves", {
            AuxState::Clear.transition_aux_op(AuxUsage::Hiz, AuxOp::PartialResolve);
        });
        assert_should_panic!("cannot resolve", {
            AuxState::AuxInvalid.transition_aux_op(AuxUsage::Hiz, AuxOp::FullResolve);
        });
        assert_should_panic!("needs an aux usage", {
            AuxState::Resolved.transition_aux_op(AuxUsage::None, AuxOp::Ambiguate);
        });
        assert_should_panic!("partial write without aux", {
            AuxState::CompressedNoClear.transition_write(AuxUsage::None, false);
        });
        assert_should_panic!("cannot write with aux", {
            AuxState::AuxInvalid.transition_write(AuxUsage::CcsE, true);
        });
    }

    #[test]
    fn names() {
        assert_eq!(AuxOp::PartialResolve.to_string(), "partial-resolve");
        assert_eq!(AuxState::AuxInvalid.to_string(), "aux-invalid");
        assert_eq!(AuxUsage::FcvCcsE.to_string(), "fcv-ccs-e");
        assert_eq!(AuxOp::try_from(2u8), Ok(AuxOp::FullResolve));
        assert_eq!(AuxState::try_from(7u8), Err(()));
    }
}
