// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sightline_viewpoint::GeometrySnapshot;

/// Which origin element positions are measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasureOrigin {
    /// Element origin is relative to the document origin.
    #[default]
    Document,
    /// Element origin is relative to the configured content pane (the
    /// element's offset parent).
    ContentPane,
}

/// Host-side measurement interface.
///
/// A geometry source is the seam between a tracker and whatever actually owns
/// geometry: a DOM, a retained scene graph, a test fixture. Trackers never
/// measure anything themselves; each evaluation asks the source for one
/// [`GeometrySnapshot`] and works on the numbers it gets back.
///
/// `None` as a frame reference names the global viewport.
pub trait GeometrySource {
    /// Handle identifying a trackable element.
    type Element;
    /// Reference naming an observation frame or content pane, typically a
    /// selector or node handle.
    type FrameRef;

    /// Whether `frame` resolves to an observation frame.
    ///
    /// Called at bind time. `None` names the global viewport, which hosts
    /// normally always resolve.
    fn frame_exists(&self, frame: Option<&Self::FrameRef>) -> bool;

    /// Whether `pane` resolves to a content pane. Called at bind time for
    /// configurations that set one.
    fn pane_exists(&self, pane: &Self::FrameRef) -> bool;

    /// Measures the frame and the element at one instant.
    ///
    /// `origin` says what the element's origin should be measured against;
    /// it is [`MeasureOrigin::ContentPane`] exactly when the bound
    /// configuration carries a content pane.
    fn snapshot(
        &self,
        frame: Option<&Self::FrameRef>,
        element: &Self::Element,
        origin: MeasureOrigin,
    ) -> GeometrySnapshot;
}
