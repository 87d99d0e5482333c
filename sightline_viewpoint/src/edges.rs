// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

use crate::{EdgeOffsets, GeometrySnapshot};

bitflags! {
    /// Which frame edges the element is currently past.
    ///
    /// An empty set means the element intersects the viewpoint.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EdgeFlags: u8 {
        /// The element is past the frame's top edge.
        const OFF_TOP = 1 << 0;
        /// The element is past the frame's right edge (beyond the fold).
        const OFF_RIGHT = 1 << 1;
        /// The element is past the frame's bottom edge (below the fold).
        const OFF_BOTTOM = 1 << 2;
        /// The element is past the frame's left edge.
        const OFF_LEFT = 1 << 3;
    }
}

/// Whether the element is past the frame's top edge.
///
/// With `threshold` unset the element's height cancels out of the comparison:
/// the element counts as off as soon as the frame top reaches its top edge.
#[must_use]
pub fn off_top(snapshot: &GeometrySnapshot, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(snapshot.element_size.height);
    snapshot.scroll_top()
        >= (snapshot.element_origin.y + snapshot.element_size.height) - threshold
}

/// Whether the element is past the frame's right edge.
///
/// The unset fallback is the *negative* element width, which moves the
/// comparison to the element's right edge: off as soon as that edge reaches
/// the fold.
#[must_use]
pub fn off_right(snapshot: &GeometrySnapshot, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(-snapshot.element_size.width);
    snapshot.fold_width() <= snapshot.element_origin.x - threshold
}

/// Whether the element is past the frame's bottom edge.
///
/// The unset fallback is the *negative* element height, matching [`off_right`]
/// on the vertical axis.
#[must_use]
pub fn off_bottom(snapshot: &GeometrySnapshot, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(-snapshot.element_size.height);
    snapshot.fold_height() <= snapshot.element_origin.y - threshold
}

/// Whether the element is past the frame's left edge.
#[must_use]
pub fn off_left(snapshot: &GeometrySnapshot, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(snapshot.element_size.width);
    snapshot.scroll_left()
        >= (snapshot.element_origin.x + snapshot.element_size.width) - threshold
}

/// Whether the element's top edge has scrolled past the frame's top edge by at
/// least `threshold` (zero when unset).
#[must_use]
pub fn affix_top(snapshot: &GeometrySnapshot, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(0.0);
    snapshot.scroll_top() >= snapshot.element_origin.y - threshold
}

/// The visibility relationship computed from one [`GeometrySnapshot`].
///
/// This is a transient value: it is recomputed on every evaluation and only
/// the dispatch memory persists across evaluations. The four edge predicates
/// and the affix predicate are pure arithmetic over the snapshot; malformed
/// inputs (NaN, negative sizes) flow through the comparisons unguarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    /// Edges the element is currently past.
    pub edges: EdgeFlags,
    /// Whether the element's top edge has scrolled past the frame's top edge.
    pub affix_top: bool,
}

impl VisibilityState {
    /// Evaluates all edge predicates against a snapshot.
    #[must_use]
    pub fn compute(snapshot: &GeometrySnapshot, offsets: &EdgeOffsets) -> Self {
        let mut edges = EdgeFlags::empty();
        edges.set(EdgeFlags::OFF_TOP, off_top(snapshot, offsets.top));
        edges.set(EdgeFlags::OFF_RIGHT, off_right(snapshot, offsets.right));
        edges.set(EdgeFlags::OFF_BOTTOM, off_bottom(snapshot, offsets.bottom));
        edges.set(EdgeFlags::OFF_LEFT, off_left(snapshot, offsets.left));
        Self {
            edges,
            affix_top: affix_top(snapshot, offsets.affix_top),
        }
    }

    /// `true` iff no edge flag is set.
    #[must_use]
    pub const fn in_viewpoint(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the element is past the frame's top edge.
    #[must_use]
    pub const fn off_top(&self) -> bool {
        self.edges.contains(EdgeFlags::OFF_TOP)
    }

    /// Whether the element is past the frame's right edge.
    #[must_use]
    pub const fn off_right(&self) -> bool {
        self.edges.contains(EdgeFlags::OFF_RIGHT)
    }

    /// Whether the element is past the frame's bottom edge.
    #[must_use]
    pub const fn off_bottom(&self) -> bool {
        self.edges.contains(EdgeFlags::OFF_BOTTOM)
    }

    /// Whether the element is past the frame's left edge.
    #[must_use]
    pub const fn off_left(&self) -> bool {
        self.edges.contains(EdgeFlags::OFF_LEFT)
    }
}
