// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use sightline_viewpoint::{CallbackKind, CallbackSet, VisibilityState};

/// A registered visibility callback.
///
/// Callbacks receive the tracked element handle and the full freshly computed
/// [`VisibilityState`] for introspection.
pub type Callback<E> = Box<dyn FnMut(&E, &VisibilityState)>;

/// The optional-callback record of one tracked element.
///
/// Each slot corresponds to one [`CallbackKind`]; a slot being filled is what
/// makes the matching transition dispatchable. An empty record is not a valid
/// binding: `Binder::bind` rejects it.
///
/// Callback panics are not caught; they surface to whoever called `evaluate`.
pub struct Callbacks<E> {
    in_view: Option<Callback<E>>,
    off_view: Option<Callback<E>>,
    off_top: Option<Callback<E>>,
    off_right: Option<Callback<E>>,
    off_bottom: Option<Callback<E>>,
    off_left: Option<Callback<E>>,
    affix_top: Option<Callback<E>>,
    off_affix_top: Option<Callback<E>>,
}

impl<E> Callbacks<E> {
    /// An empty record with no slots filled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            in_view: None,
            off_view: None,
            off_top: None,
            off_right: None,
            off_bottom: None,
            off_left: None,
            affix_top: None,
            off_affix_top: None,
        }
    }

    /// Registers the `InView` callback.
    #[must_use]
    pub fn on_in_view(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.in_view = Some(Box::new(f));
        self
    }

    /// Registers the `OffView` callback.
    #[must_use]
    pub fn on_off_view(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_view = Some(Box::new(f));
        self
    }

    /// Registers the `OffTop` callback.
    #[must_use]
    pub fn on_off_top(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_top = Some(Box::new(f));
        self
    }

    /// Registers the `OffRight` callback.
    #[must_use]
    pub fn on_off_right(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_right = Some(Box::new(f));
        self
    }

    /// Registers the `OffBottom` callback.
    #[must_use]
    pub fn on_off_bottom(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_bottom = Some(Box::new(f));
        self
    }

    /// Registers the `OffLeft` callback.
    #[must_use]
    pub fn on_off_left(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_left = Some(Box::new(f));
        self
    }

    /// Registers the `AffixTop` callback.
    #[must_use]
    pub fn on_affix_top(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.affix_top = Some(Box::new(f));
        self
    }

    /// Registers the `OffAffixTop` callback.
    #[must_use]
    pub fn on_off_affix_top(mut self, f: impl FnMut(&E, &VisibilityState) + 'static) -> Self {
        self.off_affix_top = Some(Box::new(f));
        self
    }

    /// The capability set describing which slots are filled.
    #[must_use]
    pub fn registered(&self) -> CallbackSet {
        let mut set = CallbackSet::empty();
        set.set(CallbackSet::IN_VIEW, self.in_view.is_some());
        set.set(CallbackSet::OFF_VIEW, self.off_view.is_some());
        set.set(CallbackSet::OFF_TOP, self.off_top.is_some());
        set.set(CallbackSet::OFF_RIGHT, self.off_right.is_some());
        set.set(CallbackSet::OFF_BOTTOM, self.off_bottom.is_some());
        set.set(CallbackSet::OFF_LEFT, self.off_left.is_some());
        set.set(CallbackSet::AFFIX_TOP, self.affix_top.is_some());
        set.set(CallbackSet::OFF_AFFIX_TOP, self.off_affix_top.is_some());
        set
    }

    /// Invokes the callback in the given slot, if filled.
    pub(crate) fn invoke(&mut self, kind: CallbackKind, element: &E, state: &VisibilityState) {
        let slot = match kind {
            CallbackKind::InView => &mut self.in_view,
            CallbackKind::OffView => &mut self.off_view,
            CallbackKind::OffTop => &mut self.off_top,
            CallbackKind::OffRight => &mut self.off_right,
            CallbackKind::OffBottom => &mut self.off_bottom,
            CallbackKind::OffLeft => &mut self.off_left,
            CallbackKind::AffixTop => &mut self.affix_top,
            CallbackKind::OffAffixTop => &mut self.off_affix_top,
        };
        if let Some(f) = slot {
            f(element, state);
        }
    }
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("registered", &self.registered())
            .finish()
    }
}
