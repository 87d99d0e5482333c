// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Geometry captured at one evaluation instant.
///
/// A snapshot is a pure data record: the observation frame's size and scroll
/// offset plus the tracked element's size and origin, all resolved into plain
/// numbers by the host before evaluation. The element origin is measured
/// relative to either the document or a content pane; the snapshot itself does
/// not care which, it only carries the numbers.
///
/// Snapshots are produced once per evaluation and discarded afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Size of the observation frame.
    pub frame_size: Size,
    /// Scroll offset of the observation frame. `x` is the horizontal scroll
    /// position, `y` the vertical one.
    pub scroll_offset: Vec2,
    /// Size of the tracked element.
    pub element_size: Size,
    /// Origin (top-left corner) of the tracked element, relative to the
    /// measurement origin chosen by the host.
    pub element_origin: Point,
}

impl GeometrySnapshot {
    /// Creates a snapshot from frame and element measurements.
    #[must_use]
    pub const fn new(
        frame_size: Size,
        scroll_offset: Vec2,
        element_size: Size,
        element_origin: Point,
    ) -> Self {
        Self {
            frame_size,
            scroll_offset,
            element_size,
            element_origin,
        }
    }

    /// Vertical scroll position of the frame.
    #[must_use]
    pub const fn scroll_top(&self) -> f64 {
        self.scroll_offset.y
    }

    /// Horizontal scroll position of the frame.
    #[must_use]
    pub const fn scroll_left(&self) -> f64 {
        self.scroll_offset.x
    }

    /// The fold's horizontal coordinate: the right boundary of the currently
    /// scrolled frame, `frame width + horizontal scroll`.
    #[must_use]
    pub const fn fold_width(&self) -> f64 {
        self.frame_size.width + self.scroll_offset.x
    }

    /// The fold's vertical coordinate: the bottom boundary of the currently
    /// scrolled frame, `frame height + vertical scroll`.
    #[must_use]
    pub const fn fold_height(&self) -> f64 {
        self.frame_size.height + self.scroll_offset.y
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::GeometrySnapshot;

    #[test]
    fn fold_is_frame_extent_plus_scroll() {
        let snap = GeometrySnapshot::new(
            Size::new(800.0, 600.0),
            Vec2::new(30.0, 120.0),
            Size::new(100.0, 50.0),
            Point::new(10.0, 700.0),
        );
        assert_eq!(snap.fold_width(), 830.0);
        assert_eq!(snap.fold_height(), 720.0);
        assert_eq!(snap.scroll_top(), 120.0);
        assert_eq!(snap.scroll_left(), 30.0);
    }

    #[test]
    fn unscrolled_fold_equals_frame_size() {
        let snap = GeometrySnapshot::new(
            Size::new(1024.0, 768.0),
            Vec2::ZERO,
            Size::new(10.0, 10.0),
            Point::ORIGIN,
        );
        assert_eq!(snap.fold_width(), 1024.0);
        assert_eq!(snap.fold_height(), 768.0);
    }
}
