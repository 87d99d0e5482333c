// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Per-edge detection thresholds, in the frame's coordinate units.
///
/// Each main-axis threshold is optional. `None` selects the edge-specific
/// fallback: the element's own extent on that axis, negated for the far
/// (right/bottom) edges. The fallbacks fold the element's extent into the
/// comparison, placing the off boundary at the element's top/left edge for
/// the near edges and at its bottom/right edge for the far ones.
///
/// `affix_top` is the extra tolerance for the affix predicate and defaults to
/// zero: the element affixes the moment its top edge reaches the frame's top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Threshold for the top edge. Fallback: element height.
    pub top: Option<f64>,
    /// Threshold for the right edge. Fallback: negative element width.
    pub right: Option<f64>,
    /// Threshold for the bottom edge. Fallback: negative element height.
    pub bottom: Option<f64>,
    /// Threshold for the left edge. Fallback: element width.
    pub left: Option<f64>,
    /// Threshold for the affix-to-top predicate. Fallback: zero.
    pub affix_top: Option<f64>,
}

impl EdgeOffsets {
    /// All thresholds unset; every edge uses its fallback.
    pub const UNSET: Self = Self {
        top: None,
        right: None,
        bottom: None,
        left: None,
        affix_top: None,
    };

    /// Sets the same explicit threshold on all four main-axis edges.
    ///
    /// The affix threshold is left untouched.
    #[must_use]
    pub const fn with_uniform(mut self, threshold: f64) -> Self {
        self.top = Some(threshold);
        self.right = Some(threshold);
        self.bottom = Some(threshold);
        self.left = Some(threshold);
        self
    }
}
