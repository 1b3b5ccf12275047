// SPDX-License-Identifier: MPL-2.0

//! Geometry of the active item highlight.

use super::layout::ItemFrame;
use super::metrics::{HighlightStyle, LayoutMetrics};

/// Vertical placement rule of the highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalPlacement {
    /// Fixed height bar anchored to the bottom edge.
    Bottom { thickness: f32 },
    /// Inset from both the top and the bottom edge.
    Inset { inset: f32 },
}

/// Where the highlight sits, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightGeometry {
    pub width: f32,
    pub center_x: f32,
    pub placement: VerticalPlacement,
    pub corner_radius: f32,
}

/// Resolved highlight rectangle for a given strip height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HighlightGeometry {
    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    /// Distance kept from the bottom edge (and the top edge for segments).
    pub fn vertical_inset(&self) -> f32 {
        match self.placement {
            VerticalPlacement::Bottom { .. } => 0.0,
            VerticalPlacement::Inset { inset } => inset,
        }
    }

    pub fn rect(&self, strip_height: f32) -> HighlightRect {
        let (y, height) = match self.placement {
            VerticalPlacement::Bottom { thickness } => {
                let thickness = thickness.min(strip_height).max(0.0);
                (strip_height - thickness, thickness)
            }
            VerticalPlacement::Inset { inset } => {
                (inset, (strip_height - inset * 2.0).max(0.0))
            }
        };

        HighlightRect {
            x: self.left(),
            y,
            width: self.width.max(0.0),
            height,
        }
    }
}

/// Computes the highlight for the item at `active`.
///
/// Both styles span the item plus one item spacing. An underline under the
/// first or last item additionally grows by that side's content edge inset
/// and shifts by half of it toward the inside of the strip.
pub fn highlight_geometry(
    frames: &[ItemFrame],
    active: usize,
    metrics: &LayoutMetrics,
    style: HighlightStyle,
) -> Option<HighlightGeometry> {
    let frame = frames.get(active)?;
    let mut width = frame.width + metrics.item_spacing;
    let mut center_x = frame.center();

    let geometry = match style {
        HighlightStyle::Underline => {
            let insets = metrics.content_edge_insets;
            if active == 0 {
                width += insets.left;
                center_x += insets.left / 2.0;
            }
            if active + 1 == frames.len() {
                width += insets.right;
                center_x -= insets.right / 2.0;
            }

            HighlightGeometry {
                width,
                center_x,
                placement: VerticalPlacement::Bottom {
                    thickness: metrics.highlight_thickness,
                },
                corner_radius: 0.0,
            }
        }
        HighlightStyle::Segment => HighlightGeometry {
            width,
            center_x,
            placement: VerticalPlacement::Inset {
                inset: metrics.segment_vertical_inset,
            },
            corner_radius: metrics.segment_corner_radius,
        },
    };

    Some(geometry)
}

/// Returns the scroll offset that brings `frame`, padded by half the item
/// spacing on each side, into view while moving as little as possible.
pub fn reveal_offset(
    current_offset: f32,
    viewport_width: f32,
    content_width: f32,
    frame: &ItemFrame,
    spacing: f32,
) -> f32 {
    let max_offset = (content_width - viewport_width).max(0.0);
    let start = frame.x - spacing / 2.0;
    let end = frame.right() + spacing / 2.0;

    let offset = if start < current_offset {
        start
    } else if end > current_offset + viewport_width {
        end - viewport_width
    } else {
        current_offset
    };

    offset.clamp(0.0, max_offset)
}
