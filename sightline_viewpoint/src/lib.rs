// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Viewpoint: the core visibility state machine.
//!
//! This crate computes, from raw geometry, whether a tracked element currently
//! intersects a "viewpoint" (an observation frame: the window or a designated
//! scrollable region), and decides which visibility callbacks should fire on
//! each evaluation so that every transition is dispatched exactly once. It is
//! the pure middle of a visibility tracker; hosts own measurement and event
//! plumbing.
//!
//! The core concepts are:
//!
//! - [`GeometrySnapshot`]: a capture of frame and element rectangles and
//!   scroll offsets at one evaluation instant.
//! - [`EdgeOffsets`]: per-edge detection thresholds, each either explicit or
//!   unset (unset means the element's own extent is the tolerance).
//! - [`VisibilityState`]: the edge predicates computed from one snapshot —
//!   which frame edges the element is past, whether it is in the viewpoint,
//!   and whether it is affixed to the frame top.
//! - [`DispatchMemory`]: the per-element edge-triggered dispatch state.
//!   [`DispatchMemory::step`] compares a fresh [`VisibilityState`] against the
//!   last-dispatched labels and returns the callbacks to invoke this pass.
//!
//! This crate deliberately does **not** measure anything, debounce anything,
//! or store callbacks. Host layers (for example `sightline_tracker`) are
//! responsible for:
//!
//! - Producing a [`GeometrySnapshot`] per evaluation from real geometry.
//! - Holding the registered callbacks and describing them as a
//!   [`CallbackSet`].
//! - Invoking the callbacks named by the returned [`Dispatches`] list.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use sightline_viewpoint::{
//!     CallbackKind, CallbackSet, DispatchMemory, EdgeOffsets, GeometrySnapshot, VisibilityState,
//! };
//!
//! let registered = CallbackSet::IN_VIEW | CallbackSet::OFF_VIEW;
//! let mut memory = DispatchMemory::new();
//! let offsets = EdgeOffsets::UNSET;
//!
//! // An element at y=700 in an unscrolled 800x600 frame is below the fold.
//! let snap = GeometrySnapshot::new(
//!     Size::new(800.0, 600.0),
//!     Vec2::ZERO,
//!     Size::new(100.0, 50.0),
//!     Point::new(10.0, 700.0),
//! );
//! let state = VisibilityState::compute(&snap, &offsets);
//! assert!(state.off_bottom());
//! assert_eq!(
//!     memory.step(&state, registered).as_slice(),
//!     &[CallbackKind::OffView]
//! );
//!
//! // Scrolling down 400px brings it into the viewpoint; InView fires once.
//! let snap = GeometrySnapshot::new(
//!     Size::new(800.0, 600.0),
//!     Vec2::new(0.0, 400.0),
//!     Size::new(100.0, 50.0),
//!     Point::new(10.0, 700.0),
//! );
//! let state = VisibilityState::compute(&snap, &offsets);
//! assert!(state.in_viewpoint());
//! assert_eq!(
//!     memory.step(&state, registered).as_slice(),
//!     &[CallbackKind::InView]
//! );
//!
//! // Re-evaluating unchanged geometry dispatches nothing.
//! assert!(memory.step(&state, registered).is_empty());
//! ```
//!
//! All geometry lives in a caller-chosen coordinate space (typically logical
//! pixels). Numeric edge cases (NaN, negative sizes) are not guarded; they
//! propagate through the comparisons arithmetically. This crate is `no_std`.

#![no_std]

mod dispatch;
mod edges;
mod offsets;
mod snapshot;

pub use dispatch::{AffixState, CallbackKind, CallbackSet, DispatchMemory, Dispatches, MainState};
pub use edges::{EdgeFlags, VisibilityState, affix_top, off_bottom, off_left, off_right, off_top};
pub use offsets::EdgeOffsets;
pub use snapshot::GeometrySnapshot;
