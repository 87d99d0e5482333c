// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::VisibilityState;

/// A callback slot a host can register on a tracked element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackKind {
    /// The element entered the viewpoint.
    InView,
    /// The element left the viewpoint (any edge).
    OffView,
    /// The element went past the top edge.
    OffTop,
    /// The element went past the right edge.
    OffRight,
    /// The element went past the bottom edge.
    OffBottom,
    /// The element went past the left edge.
    OffLeft,
    /// The element's top edge scrolled past the frame's top edge.
    AffixTop,
    /// The element's top edge scrolled back below the frame's top edge.
    OffAffixTop,
}

bitflags! {
    /// The set of callback slots a host has registered.
    ///
    /// Registration is a capability: a transition whose slot is not in this
    /// set neither fires nor updates the dispatch memory.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CallbackSet: u8 {
        /// [`CallbackKind::InView`] is registered.
        const IN_VIEW = 1 << 0;
        /// [`CallbackKind::OffView`] is registered.
        const OFF_VIEW = 1 << 1;
        /// [`CallbackKind::OffTop`] is registered.
        const OFF_TOP = 1 << 2;
        /// [`CallbackKind::OffRight`] is registered.
        const OFF_RIGHT = 1 << 3;
        /// [`CallbackKind::OffBottom`] is registered.
        const OFF_BOTTOM = 1 << 4;
        /// [`CallbackKind::OffLeft`] is registered.
        const OFF_LEFT = 1 << 5;
        /// [`CallbackKind::AffixTop`] is registered.
        const AFFIX_TOP = 1 << 6;
        /// [`CallbackKind::OffAffixTop`] is registered.
        const OFF_AFFIX_TOP = 1 << 7;
    }
}

impl CallbackKind {
    /// The [`CallbackSet`] bit corresponding to this kind.
    #[must_use]
    pub const fn bit(self) -> CallbackSet {
        match self {
            Self::InView => CallbackSet::IN_VIEW,
            Self::OffView => CallbackSet::OFF_VIEW,
            Self::OffTop => CallbackSet::OFF_TOP,
            Self::OffRight => CallbackSet::OFF_RIGHT,
            Self::OffBottom => CallbackSet::OFF_BOTTOM,
            Self::OffLeft => CallbackSet::OFF_LEFT,
            Self::AffixTop => CallbackSet::AFFIX_TOP,
            Self::OffAffixTop => CallbackSet::OFF_AFFIX_TOP,
        }
    }
}

/// Last-dispatched label on the main visibility axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainState {
    /// Nothing has been dispatched yet.
    #[default]
    Unset,
    /// `InView` was the last main-axis dispatch.
    InView,
    /// `OffView` was the last main-axis dispatch.
    OffView,
    /// `OffTop` was the last main-axis dispatch.
    OffTop,
    /// `OffRight` was the last main-axis dispatch.
    OffRight,
    /// `OffBottom` was the last main-axis dispatch.
    OffBottom,
    /// `OffLeft` was the last main-axis dispatch.
    OffLeft,
}

/// Last-dispatched label on the affix axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AffixState {
    /// Nothing has been dispatched yet.
    #[default]
    Unset,
    /// `AffixTop` was the last affix dispatch.
    AffixTop,
    /// `OffAffixTop` was the last affix dispatch.
    OffAffixTop,
}

/// Callback kinds fired by one evaluation, in firing order.
pub type Dispatches = SmallVec<[CallbackKind; 6]>;

/// Edge-triggered dispatch memory for one tracked element.
///
/// Both axes remember a single last-dispatched label. A transition fires only
/// when the freshly computed state differs from the remembered label and the
/// matching callback is registered, which makes dispatch edge-triggered: once
/// per entered state, not once per evaluation.
///
/// The main axis is one scalar even though four off-edge labels plus `OffView`
/// flow through it. When several off conditions hold at once, each registered
/// one fires in fixed order (`OffView`, then top, right, bottom, left) and
/// overwrites the label, so only the last fired label sticks. A host that
/// registers several off callbacks can therefore see repeat fires while the
/// element stays off. Single-off-callback hosts get strict once-per-state
/// dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchMemory {
    /// Last-dispatched main-axis label.
    pub main: MainState,
    /// Last-dispatched affix label.
    pub affix: AffixState,
}

impl DispatchMemory {
    /// Fresh memory with both axes unset, as at bind time.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            main: MainState::Unset,
            affix: AffixState::Unset,
        }
    }

    /// Advances the memory by one evaluation.
    ///
    /// Returns the callback kinds to invoke for this evaluation, in order. The
    /// caller maps them onto its registered callbacks; every returned kind is
    /// guaranteed to be in `registered`, and no kind appears twice.
    pub fn step(&mut self, state: &VisibilityState, registered: CallbackSet) -> Dispatches {
        let mut fired = Dispatches::new();
        let mut fire = |memory: &mut Self, kind: CallbackKind| {
            match kind {
                CallbackKind::InView => memory.main = MainState::InView,
                CallbackKind::OffView => memory.main = MainState::OffView,
                CallbackKind::OffTop => memory.main = MainState::OffTop,
                CallbackKind::OffRight => memory.main = MainState::OffRight,
                CallbackKind::OffBottom => memory.main = MainState::OffBottom,
                CallbackKind::OffLeft => memory.main = MainState::OffLeft,
                CallbackKind::AffixTop => memory.affix = AffixState::AffixTop,
                CallbackKind::OffAffixTop => memory.affix = AffixState::OffAffixTop,
            }
            fired.push(kind);
        };

        if state.in_viewpoint() {
            if registered.contains(CallbackSet::IN_VIEW) && self.main != MainState::InView {
                fire(self, CallbackKind::InView);
            }
        } else {
            if registered.contains(CallbackSet::OFF_VIEW) && self.main != MainState::OffView {
                fire(self, CallbackKind::OffView);
            }
            if state.off_top()
                && registered.contains(CallbackSet::OFF_TOP)
                && self.main != MainState::OffTop
            {
                fire(self, CallbackKind::OffTop);
            }
            if state.off_right()
                && registered.contains(CallbackSet::OFF_RIGHT)
                && self.main != MainState::OffRight
            {
                fire(self, CallbackKind::OffRight);
            }
            if state.off_bottom()
                && registered.contains(CallbackSet::OFF_BOTTOM)
                && self.main != MainState::OffBottom
            {
                fire(self, CallbackKind::OffBottom);
            }
            if state.off_left()
                && registered.contains(CallbackSet::OFF_LEFT)
                && self.main != MainState::OffLeft
            {
                fire(self, CallbackKind::OffLeft);
            }
        }

        if state.affix_top {
            if registered.contains(CallbackSet::AFFIX_TOP) && self.affix != AffixState::AffixTop {
                fire(self, CallbackKind::AffixTop);
            }
        } else if registered.contains(CallbackSet::OFF_AFFIX_TOP)
            && self.affix != AffixState::OffAffixTop
        {
            fire(self, CallbackKind::OffAffixTop);
        }

        fired
    }
}
