// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `sightline_tracker` crate: geometry source in,
//! callback dispatch out, across scroll sequences.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use sightline_tracker::{Binder, Callbacks, GeometrySource, MeasureOrigin, TrackerOptions};
use sightline_viewpoint::GeometrySnapshot;

/// A scriptable host: an 800x600 frame, scrollable on both axes, with one
/// element rectangle per element id.
struct Host {
    scroll: Cell<Vec2>,
    elements: RefCell<Vec<(u32, Point, Size)>>,
}

impl Host {
    fn new() -> Self {
        Self {
            scroll: Cell::new(Vec2::ZERO),
            elements: RefCell::new(Vec::new()),
        }
    }

    fn place(&self, id: u32, origin: Point, size: Size) {
        self.elements.borrow_mut().push((id, origin, size));
    }

    fn scroll_to(&self, x: f64, y: f64) {
        self.scroll.set(Vec2::new(x, y));
    }
}

impl GeometrySource for Host {
    type Element = u32;
    type FrameRef = &'static str;

    fn frame_exists(&self, frame: Option<&&'static str>) -> bool {
        frame.is_none() || frame == Some(&"#scroller")
    }

    fn pane_exists(&self, pane: &&'static str) -> bool {
        *pane == "#pane"
    }

    fn snapshot(
        &self,
        _frame: Option<&&'static str>,
        element: &u32,
        _origin: MeasureOrigin,
    ) -> GeometrySnapshot {
        let elements = self.elements.borrow();
        let (_, origin, size) = elements
            .iter()
            .find(|(id, _, _)| id == element)
            .copied()
            .expect("element placed in host");
        GeometrySnapshot::new(Size::new(800.0, 600.0), self.scroll.get(), size, origin)
    }
}

/// Shared fire counter for one callback slot.
fn counter() -> (
    Rc<Cell<u32>>,
    impl FnMut(&u32, &sightline_viewpoint::VisibilityState),
) {
    let count = Rc::new(Cell::new(0_u32));
    let inner = Rc::clone(&count);
    (
        count,
        move |_: &u32, _: &sightline_viewpoint::VisibilityState| inner.set(inner.get() + 1),
    )
}

#[test]
fn off_in_off_dispatches_each_transition_once() {
    let host = Host::new();
    host.place(1, Point::new(10.0, 700.0), Size::new(100.0, 50.0));

    let (in_count, on_in) = counter();
    let (off_count, on_off) = counter();
    let callbacks = Callbacks::new().on_in_view(on_in).on_off_view(on_off);

    let mut binder = Binder::<Host>::new();
    binder.bind(1, TrackerOptions::new(callbacks), &host).unwrap();

    // Page-ready pass: element below the fold.
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (0, 1));

    // Debounced scroll events while still off: nothing more fires.
    binder.evaluate_all(&host);
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (0, 1));

    // Scroll into view.
    host.scroll_to(0.0, 400.0);
    binder.evaluate_all(&host);
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 1));

    // And back out the top.
    host.scroll_to(0.0, 2000.0);
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 2));
}

#[test]
fn default_top_threshold_uses_element_height() {
    // Element height 50 at y=100: with no explicit threshold it goes off-top
    // exactly when scroll reaches 100 (bottom edge past the frame top).
    let host = Host::new();
    host.place(1, Point::new(0.0, 100.0), Size::new(100.0, 50.0));

    let (off_top_count, on_off_top) = counter();
    let callbacks = Callbacks::new().on_off_top(on_off_top);
    let mut binder = Binder::<Host>::new();
    binder.bind(1, TrackerOptions::new(callbacks), &host).unwrap();

    host.scroll_to(0.0, 99.0);
    binder.evaluate_all(&host);
    assert_eq!(off_top_count.get(), 0);

    host.scroll_to(0.0, 150.0);
    binder.evaluate_all(&host);
    assert_eq!(off_top_count.get(), 1);
}

#[test]
fn explicit_top_threshold_overrides_the_fallback() {
    let host = Host::new();
    host.place(1, Point::new(0.0, 100.0), Size::new(100.0, 50.0));

    let (off_top_count, on_off_top) = counter();
    let mut options = TrackerOptions::new(Callbacks::new().on_off_top(on_off_top));
    options.offsets.top = Some(200.0);
    let mut binder = Binder::<Host>::new();
    binder.bind(1, options, &host).unwrap();

    // Threshold larger than the element triggers off-top sooner: the
    // boundary sits at (100 + 50) - 200 = -50, so even scroll 0 is off.
    binder.evaluate_all(&host);
    assert_eq!(off_top_count.get(), 1);
}

#[test]
fn affix_fires_when_element_top_passes_frame_top() {
    let host = Host::new();
    host.place(1, Point::new(0.0, 300.0), Size::new(100.0, 50.0));

    let (affix_count, on_affix) = counter();
    let (off_affix_count, on_off_affix) = counter();
    let callbacks = Callbacks::new()
        .on_affix_top(on_affix)
        .on_off_affix_top(on_off_affix);
    let mut binder = Binder::<Host>::new();
    binder.bind(1, TrackerOptions::new(callbacks), &host).unwrap();

    host.scroll_to(0.0, 299.0);
    binder.evaluate_all(&host);
    assert_eq!((affix_count.get(), off_affix_count.get()), (0, 1));

    host.scroll_to(0.0, 300.0);
    binder.evaluate_all(&host);
    assert_eq!((affix_count.get(), off_affix_count.get()), (1, 1));

    // Holding the position dispatches nothing further.
    binder.evaluate_all(&host);
    assert_eq!((affix_count.get(), off_affix_count.get()), (1, 1));
}

#[test]
fn disable_freezes_dispatch_and_enable_resumes_from_remembered_state() {
    let host = Host::new();
    host.place(1, Point::new(10.0, 100.0), Size::new(100.0, 50.0));

    let (in_count, on_in) = counter();
    let (off_count, on_off) = counter();
    let callbacks = Callbacks::new().on_in_view(on_in).on_off_view(on_off);
    let mut binder = Binder::<Host>::new();
    binder.bind(1, TrackerOptions::new(callbacks), &host).unwrap();

    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 0));

    let tracker = binder.get_mut(&1).unwrap();
    tracker.disable();

    // Geometry changes while disabled; signals are dropped on the floor.
    host.scroll_to(0.0, 5000.0);
    binder.evaluate_all(&host);
    host.scroll_to(0.0, 0.0);
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 0));

    // Re-enabled with the element back in view: the remembered state is
    // still InView, so nothing re-fires.
    binder.get_mut(&1).unwrap().enable();
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 0));

    // The first actual transition after re-enabling dispatches normally.
    host.scroll_to(0.0, 5000.0);
    binder.evaluate_all(&host);
    assert_eq!((in_count.get(), off_count.get()), (1, 1));
}

#[test]
fn rebinding_keeps_the_first_instance_and_its_memory() {
    let host = Host::new();
    host.place(1, Point::new(10.0, 100.0), Size::new(100.0, 50.0));

    let (first_count, on_in_first) = counter();
    let (second_count, on_in_second) = counter();

    let mut binder = Binder::<Host>::new();
    binder
        .bind(1, TrackerOptions::new(Callbacks::new().on_in_view(on_in_first)), &host)
        .unwrap();
    binder.evaluate_all(&host);
    assert_eq!(first_count.get(), 1);

    // Second bind of the same element: ignored, first instance retained,
    // so its memory still says InView and nothing re-fires.
    binder
        .bind(1, TrackerOptions::new(Callbacks::new().on_in_view(on_in_second)), &host)
        .unwrap();
    assert_eq!(binder.len(), 1);
    binder.evaluate_all(&host);
    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 0);
}

#[test]
fn two_elements_track_independently() {
    let host = Host::new();
    host.place(1, Point::new(10.0, 100.0), Size::new(100.0, 50.0));
    host.place(2, Point::new(10.0, 5000.0), Size::new(100.0, 50.0));

    let (in_one, on_in_one) = counter();
    let (in_two, on_in_two) = counter();

    let mut binder = Binder::<Host>::new();
    binder
        .bind(1, TrackerOptions::new(Callbacks::new().on_in_view(on_in_one)), &host)
        .unwrap();
    binder
        .bind(2, TrackerOptions::new(Callbacks::new().on_in_view(on_in_two)), &host)
        .unwrap();

    binder.evaluate_all(&host);
    assert_eq!((in_one.get(), in_two.get()), (1, 0));

    host.scroll_to(0.0, 4800.0);
    binder.evaluate_all(&host);
    assert_eq!((in_one.get(), in_two.get()), (1, 1));
}

#[test]
fn callbacks_see_the_computed_state() {
    let host = Host::new();
    host.place(1, Point::new(10.0, 5000.0), Size::new(100.0, 50.0));

    let observed = Rc::new(Cell::new(false));
    let seen = Rc::clone(&observed);
    let callbacks = Callbacks::new().on_off_view(move |element: &u32, state| {
        assert_eq!(*element, 1);
        assert!(state.off_bottom());
        assert!(!state.in_viewpoint());
        seen.set(true);
    });

    let mut binder = Binder::<Host>::new();
    binder.bind(1, TrackerOptions::new(callbacks), &host).unwrap();
    binder.evaluate_all(&host);
    assert!(observed.get(), "off_view callback ran");
}
