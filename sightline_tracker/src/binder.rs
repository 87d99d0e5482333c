// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::source::GeometrySource;
use crate::tracker::{Tracker, TrackerOptions};

/// Why a bind attempt was rejected.
///
/// A failed bind creates no instance and leaves the binder unchanged; it is
/// fatal to that attempt only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// No callback slot was filled; a tracker with nothing to dispatch is
    /// useless, so binding is refused instead of creating a dead instance.
    NoCallbacks,
    /// The configured observation frame did not resolve.
    FrameNotFound,
    /// A content pane was configured but did not resolve.
    ContentPaneNotFound,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCallbacks => write!(f, "no visibility callback registered"),
            Self::FrameNotFound => write!(f, "observation frame not found"),
            Self::ContentPaneNotFound => write!(f, "content pane not found"),
        }
    }
}

impl core::error::Error for BindError {}

/// Explicit registry of tracked elements.
///
/// The binder owns one [`Tracker`] per bound element, keyed by the element
/// handle. Binding an element that is already bound returns the existing
/// instance untouched, so hosts can call `bind` idempotently from setup code
/// that may run more than once.
pub struct Binder<G: GeometrySource>
where
    G::Element: Eq + Hash + Clone,
{
    instances: HashMap<G::Element, Tracker<G>>,
}

impl<G: GeometrySource> Binder<G>
where
    G::Element: Eq + Hash + Clone,
{
    /// An empty binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Binds an element, validating the configuration against the source.
    ///
    /// Validation happens synchronously at bind time:
    ///
    /// - at least one callback slot must be filled
    ///   ([`BindError::NoCallbacks`]),
    /// - the observation frame must resolve ([`BindError::FrameNotFound`]),
    /// - a configured content pane must resolve
    ///   ([`BindError::ContentPaneNotFound`]).
    ///
    /// If `element` is already bound, the existing tracker is returned and
    /// `options` is dropped: the first binding wins.
    pub fn bind(
        &mut self,
        element: G::Element,
        options: TrackerOptions<G>,
        source: &G,
    ) -> Result<&mut Tracker<G>, BindError> {
        match self.instances.entry(element) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                if options.callbacks.registered().is_empty() {
                    return Err(BindError::NoCallbacks);
                }
                if !source.frame_exists(options.frame.as_ref()) {
                    return Err(BindError::FrameNotFound);
                }
                if let Some(pane) = &options.content_pane {
                    if !source.pane_exists(pane) {
                        return Err(BindError::ContentPaneNotFound);
                    }
                }
                let element = entry.key().clone();
                Ok(entry.insert(Tracker::new(element, options)))
            }
        }
    }

    /// Whether an element is currently bound.
    #[must_use]
    pub fn is_bound(&self, element: &G::Element) -> bool {
        self.instances.contains_key(element)
    }

    /// The tracker bound to `element`, if any.
    #[must_use]
    pub fn get_mut(&mut self, element: &G::Element) -> Option<&mut Tracker<G>> {
        self.instances.get_mut(element)
    }

    /// Removes and returns the tracker bound to `element`.
    ///
    /// Its dispatch memory goes with it; re-binding later starts unset.
    pub fn unbind(&mut self, element: &G::Element) -> Option<Tracker<G>> {
        self.instances.remove(element)
    }

    /// Evaluates every enabled bound tracker once.
    ///
    /// Hosts typically call this on page-ready, then drive individual
    /// trackers (or this again) from debounced scroll and resize signals.
    pub fn evaluate_all(&mut self, source: &G) {
        for tracker in self.instances.values_mut() {
            tracker.evaluate(source);
        }
    }

    /// Number of bound elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no element is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<G: GeometrySource> Default for Binder<G>
where
    G::Element: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GeometrySource> fmt::Debug for Binder<G>
where
    G::Element: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("bound", &self.instances.len())
            .finish()
    }
}
