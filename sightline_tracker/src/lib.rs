// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Tracker: tracked-element controllers and the binder registry.
//!
//! This crate is the plumbing around `sightline_viewpoint`'s pure visibility
//! state machine. It owns what the core deliberately does not:
//!
//! - [`GeometrySource`]: the measurement seam to the host (a DOM, a scene
//!   graph, a test fixture). Trackers ask it for one [`GeometrySnapshot`] per
//!   evaluation and for frame/pane resolution at bind time.
//! - [`Callbacks`]: the optional-callback record of one tracked element.
//!   A filled slot is a capability; an empty record cannot be bound.
//! - [`Tracker`]: one element's configuration, dispatch memory, and
//!   enable/disable flag, with [`Tracker::evaluate`] as the entry point a
//!   signal source drives.
//! - [`Binder`]: the explicit element-to-tracker registry with bind-time
//!   validation ([`BindError`]) and an idempotent re-bind guard.
//!
//! Scroll and resize coalescing is likewise out of scope here; see
//! `sightline_debounce` for the timestamp-driven utility hosts put between
//! raw signals and [`Tracker::evaluate`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size, Vec2};
//! use sightline_tracker::{Binder, Callbacks, GeometrySource, MeasureOrigin, TrackerOptions};
//! use sightline_viewpoint::GeometrySnapshot;
//!
//! // A toy host: one element, geometry controlled by the test.
//! struct Host {
//!     scroll_top: Cell<f64>,
//! }
//!
//! impl GeometrySource for Host {
//!     type Element = u32;
//!     type FrameRef = String;
//!
//!     fn frame_exists(&self, _frame: Option<&String>) -> bool {
//!         true
//!     }
//!     fn pane_exists(&self, _pane: &String) -> bool {
//!         true
//!     }
//!     fn snapshot(
//!         &self,
//!         _frame: Option<&String>,
//!         _element: &u32,
//!         _origin: MeasureOrigin,
//!     ) -> GeometrySnapshot {
//!         GeometrySnapshot::new(
//!             Size::new(800.0, 600.0),
//!             Vec2::new(0.0, self.scroll_top.get()),
//!             Size::new(100.0, 50.0),
//!             Point::new(10.0, 700.0),
//!         )
//!     }
//! }
//!
//! let host = Host {
//!     scroll_top: Cell::new(0.0),
//! };
//! let entered = Rc::new(Cell::new(0_u32));
//! let seen = Rc::clone(&entered);
//!
//! let mut binder = Binder::<Host>::new();
//! let callbacks = Callbacks::new().on_in_view(move |_element, _state| {
//!     seen.set(seen.get() + 1);
//! });
//! binder
//!     .bind(1, TrackerOptions::new(callbacks), &host)
//!     .unwrap();
//!
//! // Below the fold: nothing fires.
//! binder.get_mut(&1).unwrap().evaluate(&host);
//! assert_eq!(entered.get(), 0);
//!
//! // Scroll the element into the viewpoint: InView fires once, then stays
//! // quiet while the state holds.
//! host.scroll_top.set(400.0);
//! binder.get_mut(&1).unwrap().evaluate(&host);
//! binder.get_mut(&1).unwrap().evaluate(&host);
//! assert_eq!(entered.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc` (callback slots are boxed).

#![no_std]

extern crate alloc;

mod binder;
mod callbacks;
mod source;
mod tracker;

pub use binder::{BindError, Binder};
pub use callbacks::{Callback, Callbacks};
pub use source::{GeometrySource, MeasureOrigin};
pub use tracker::{DEFAULT_DELAY_MS, Tracker, TrackerOptions};

// Re-exported so hosts can name snapshot and state types without depending on
// the core crate directly.
pub use sightline_viewpoint::{
    CallbackKind, CallbackSet, DispatchMemory, EdgeFlags, EdgeOffsets, GeometrySnapshot,
    VisibilityState,
};
