// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use sightline_viewpoint::{CallbackSet, DispatchMemory, EdgeOffsets, VisibilityState};

use crate::callbacks::Callbacks;
use crate::source::{GeometrySource, MeasureOrigin};

/// Default re-evaluation delay in milliseconds.
///
/// This is advisory: the tracker itself never waits. Hosts feed it into their
/// signal coalescing (see `sightline_debounce`).
pub const DEFAULT_DELAY_MS: u64 = 70;

/// Per-element configuration, immutable after bind.
pub struct TrackerOptions<G: GeometrySource> {
    /// The observation frame. `None` is the global viewport.
    pub frame: Option<G::FrameRef>,
    /// Optional content pane. When set, element positions are measured
    /// relative to the pane (the offset parent) instead of the document.
    pub content_pane: Option<G::FrameRef>,
    /// Per-edge detection thresholds.
    pub offsets: EdgeOffsets,
    /// Re-evaluation delay in milliseconds for the host's signal coalescing.
    pub delay: u64,
    /// The registered callbacks. At least one slot must be filled for a bind
    /// to succeed.
    pub callbacks: Callbacks<G::Element>,
}

impl<G: GeometrySource> TrackerOptions<G> {
    /// Options with the given callbacks and all other fields at their
    /// defaults: global viewport, no content pane, unset thresholds,
    /// [`DEFAULT_DELAY_MS`].
    #[must_use]
    pub fn new(callbacks: Callbacks<G::Element>) -> Self {
        Self {
            frame: None,
            content_pane: None,
            offsets: EdgeOffsets::UNSET,
            delay: DEFAULT_DELAY_MS,
            callbacks,
        }
    }
}

impl<G: GeometrySource> Default for TrackerOptions<G> {
    fn default() -> Self {
        Self::new(Callbacks::new())
    }
}

impl<G: GeometrySource> fmt::Debug for TrackerOptions<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("frame", &self.frame.is_some())
            .field("content_pane", &self.content_pane.is_some())
            .field("offsets", &self.offsets)
            .field("delay", &self.delay)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

/// One tracked element: its configuration, dispatch memory, and enable flag.
///
/// A tracker is the evaluation entry point the host's signal source drives.
/// Each [`evaluate`](Self::evaluate) call takes one geometry snapshot, runs
/// the edge predicates, and dispatches whatever transitions are newly true.
/// Evaluation is synchronous and atomic from the caller's perspective; the
/// tracker never blocks and never schedules anything itself.
pub struct Tracker<G: GeometrySource> {
    element: G::Element,
    frame: Option<G::FrameRef>,
    content_pane: Option<G::FrameRef>,
    offsets: EdgeOffsets,
    delay: u64,
    callbacks: Callbacks<G::Element>,
    registered: CallbackSet,
    memory: DispatchMemory,
    enabled: bool,
}

impl<G: GeometrySource> Tracker<G> {
    pub(crate) fn new(element: G::Element, options: TrackerOptions<G>) -> Self {
        let registered = options.callbacks.registered();
        Self {
            element,
            frame: options.frame,
            content_pane: options.content_pane,
            offsets: options.offsets,
            delay: options.delay,
            callbacks: options.callbacks,
            registered,
            memory: DispatchMemory::new(),
            enabled: true,
        }
    }

    /// Performs one full geometry, edge, state-machine pass.
    ///
    /// Returns the computed [`VisibilityState`], or `None` if the tracker is
    /// disabled (in which case nothing is measured and the dispatch memory is
    /// left untouched). Dispatch is edge-triggered: evaluating twice over
    /// unchanged geometry fires nothing the second time.
    ///
    /// Callback panics are not caught; they propagate to the caller.
    pub fn evaluate(&mut self, source: &G) -> Option<VisibilityState> {
        if !self.enabled {
            return None;
        }
        let origin = if self.content_pane.is_some() {
            MeasureOrigin::ContentPane
        } else {
            MeasureOrigin::Document
        };
        let snapshot = source.snapshot(self.frame.as_ref(), &self.element, origin);
        let state = VisibilityState::compute(&snapshot, &self.offsets);
        for kind in self.memory.step(&state, self.registered) {
            self.callbacks.invoke(kind, &self.element, &state);
        }
        Some(state)
    }

    /// Re-enables evaluation.
    ///
    /// The dispatch memory is whatever it was when the tracker was disabled,
    /// so the next evaluation dispatches relative to the last remembered
    /// state rather than starting over.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables evaluation: [`evaluate`](Self::evaluate) becomes a no-op.
    ///
    /// The dispatch memory is not reset.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether the tracker currently evaluates.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The tracked element handle.
    #[must_use]
    pub const fn element(&self) -> &G::Element {
        &self.element
    }

    /// The configured re-evaluation delay in milliseconds.
    #[must_use]
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// The registered-callback capability set.
    #[must_use]
    pub const fn registered(&self) -> CallbackSet {
        self.registered
    }

    /// The current dispatch memory, for inspection.
    #[must_use]
    pub const fn memory(&self) -> DispatchMemory {
        self.memory
    }
}

impl<G: GeometrySource> fmt::Debug for Tracker<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("registered", &self.registered)
            .field("memory", &self.memory)
            .field("enabled", &self.enabled)
            .field("delay", &self.delay)
            .field("offsets", &self.offsets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use kurbo::{Point, Size, Vec2};
    use sightline_viewpoint::{GeometrySnapshot, MainState};

    use super::{Tracker, TrackerOptions};
    use crate::callbacks::Callbacks;
    use crate::source::{GeometrySource, MeasureOrigin};

    /// Fixture source: one mutable snapshot, shared by every element.
    struct TestSource {
        snapshot: Cell<GeometrySnapshot>,
        last_origin: Cell<Option<MeasureOrigin>>,
    }

    impl TestSource {
        fn new() -> Self {
            Self {
                snapshot: Cell::new(GeometrySnapshot::new(
                    Size::new(800.0, 600.0),
                    Vec2::ZERO,
                    Size::new(100.0, 50.0),
                    Point::new(10.0, 100.0),
                )),
                last_origin: Cell::new(None),
            }
        }

        fn scroll_to(&self, y: f64) {
            let mut snap = self.snapshot.get();
            snap.scroll_offset = Vec2::new(snap.scroll_offset.x, y);
            self.snapshot.set(snap);
        }
    }

    impl GeometrySource for TestSource {
        type Element = u32;
        type FrameRef = &'static str;

        fn frame_exists(&self, _frame: Option<&&'static str>) -> bool {
            true
        }

        fn pane_exists(&self, _pane: &&'static str) -> bool {
            true
        }

        fn snapshot(
            &self,
            _frame: Option<&&'static str>,
            _element: &u32,
            origin: MeasureOrigin,
        ) -> GeometrySnapshot {
            self.last_origin.set(Some(origin));
            self.snapshot.get()
        }
    }

    #[test]
    fn disabled_tracker_measures_nothing_and_keeps_memory() {
        let source = TestSource::new();
        let callbacks = Callbacks::new().on_in_view(|_, _| {}).on_off_view(|_, _| {});
        let mut tracker = Tracker::new(1, TrackerOptions::<TestSource>::new(callbacks));

        // First pass: element is in view, memory records InView.
        assert!(tracker.evaluate(&source).is_some());
        assert_eq!(tracker.memory().main, MainState::InView);

        tracker.disable();
        source.scroll_to(10_000.0);
        assert_eq!(tracker.evaluate(&source), None);
        assert_eq!(tracker.memory().main, MainState::InView);

        // Re-enabled: dispatch compares against the remembered InView.
        tracker.enable();
        let state = tracker.evaluate(&source).unwrap();
        assert!(!state.in_viewpoint());
        assert_eq!(tracker.memory().main, MainState::OffView);
    }

    #[test]
    fn measurement_origin_follows_content_pane_config() {
        let source = TestSource::new();

        let callbacks = Callbacks::new().on_in_view(|_, _| {});
        let mut tracker = Tracker::new(1, TrackerOptions::<TestSource>::new(callbacks));
        tracker.evaluate(&source);
        assert_eq!(source.last_origin.get(), Some(MeasureOrigin::Document));

        let callbacks = Callbacks::new().on_in_view(|_, _| {});
        let mut options = TrackerOptions::<TestSource>::new(callbacks);
        options.frame = Some("#scroller");
        options.content_pane = Some("#pane");
        let mut tracker = Tracker::new(2, options);
        tracker.evaluate(&source);
        assert_eq!(source.last_origin.get(), Some(MeasureOrigin::ContentPane));
    }

    #[test]
    fn delay_defaults_to_70ms() {
        let options = TrackerOptions::<TestSource>::default();
        assert_eq!(options.delay, 70);
    }
}
