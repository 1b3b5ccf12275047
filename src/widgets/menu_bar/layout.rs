// SPDX-License-Identifier: MPL-2.0

//! Item placement for the menu strip.
//!
//! Layout runs in two passes: labels are measured at their natural width,
//! then spare viewport width is handed back to the items as padding. The
//! resulting frames are what the widget renders, so the highlight geometry
//! can be derived from them without asking the renderer.

use super::metrics::{Distribution, EdgeInsets, LayoutMetrics};

/// Differences below this are treated as rounding noise.
const EPSILON: f32 = 0.5;

/// Extra padding on each side of an item's label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemPadding {
    pub leading: f32,
    pub trailing: f32,
}

impl ItemPadding {
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }
}

/// Horizontal extent of an item in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemFrame {
    pub x: f32,
    pub width: f32,
}

impl ItemFrame {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripLayout {
    pub frames: Vec<ItemFrame>,
    pub paddings: Vec<ItemPadding>,
    /// Total width of the item row, edge insets included.
    pub content_width: f32,
    /// True when the row is wider than the viewport and must scroll.
    pub scrollable: bool,
}

impl StripLayout {
    pub fn compute(
        natural_widths: &[f32],
        viewport_width: f32,
        metrics: &LayoutMetrics,
        distribution: Distribution,
    ) -> Self {
        if natural_widths.is_empty() {
            return Self::default();
        }

        let viewport_width = sanitize(viewport_width);
        let spacing = metrics.item_spacing;
        let insets = metrics.content_edge_insets;

        let paddings = match distribution {
            Distribution::Proportional => {
                distribute_leftover(natural_widths, viewport_width, spacing, insets)
            }
            Distribution::Equal => equalize(natural_widths, viewport_width, spacing, insets),
        };

        let mut frames = Vec::with_capacity(natural_widths.len());
        let mut x = 0.0;
        for (natural, padding) in natural_widths.iter().zip(&paddings) {
            let width = natural + padding.horizontal();
            frames.push(ItemFrame { x, width });
            x += width + spacing;
        }

        let content_width = frames.last().map_or(0.0, ItemFrame::right);
        let scrollable = content_width > viewport_width + EPSILON;

        tracing::trace!(
            items = frames.len(),
            content_width,
            viewport_width,
            scrollable,
            "menu strip layout"
        );

        Self {
            frames,
            paddings,
            content_width,
            scrollable,
        }
    }

    pub fn frame(&self, index: usize) -> Option<&ItemFrame> {
        self.frames.get(index)
    }
}

/// Splits the leftover viewport width evenly across items as padding.
///
/// Each item gets `leftover / n / 2` on both sides. The first item also gets
/// the left edge inset and the last item the right one. When the items do not
/// fit, only the edge insets are applied and the strip scrolls.
pub fn distribute_leftover(
    natural_widths: &[f32],
    viewport_width: f32,
    spacing: f32,
    insets: EdgeInsets,
) -> Vec<ItemPadding> {
    let count = natural_widths.len();
    if count == 0 {
        return Vec::new();
    }

    let available = sanitize(viewport_width) - insets.horizontal();
    let leftover = available - natural_total(natural_widths, spacing);
    let delta = if leftover > 0.0 {
        leftover / count as f32 / 2.0
    } else {
        0.0
    };

    (0..count)
        .map(|index| with_edge_insets(index, count, delta, delta, insets))
        .collect()
}

/// Gives every item the same width: the widest label, or an equal share of
/// the viewport when that is larger.
///
/// Edge insets come out of the first and last items' own padding, so the
/// frames stay equal and only the labels inside them shift.
pub fn equalize(
    natural_widths: &[f32],
    viewport_width: f32,
    spacing: f32,
    insets: EdgeInsets,
) -> Vec<ItemPadding> {
    let count = natural_widths.len();
    if count == 0 {
        return Vec::new();
    }

    let gaps = spacing * (count - 1) as f32;
    let share = (sanitize(viewport_width) - gaps) / count as f32;
    let needed = natural_widths
        .iter()
        .enumerate()
        .map(|(index, natural)| {
            natural + with_edge_insets(index, count, 0.0, 0.0, insets).horizontal()
        })
        .fold(0.0_f32, f32::max);
    let target = needed.max(share);

    natural_widths
        .iter()
        .enumerate()
        .map(|(index, natural)| {
            let edge = with_edge_insets(index, count, 0.0, 0.0, insets);
            let half = (target - natural - edge.horizontal()) / 2.0;
            ItemPadding {
                leading: edge.leading + half,
                trailing: edge.trailing + half,
            }
        })
        .collect()
}

fn with_edge_insets(
    index: usize,
    count: usize,
    leading: f32,
    trailing: f32,
    insets: EdgeInsets,
) -> ItemPadding {
    let mut padding = ItemPadding { leading, trailing };
    if index == 0 {
        padding.leading += insets.left;
    }
    if index + 1 == count {
        padding.trailing += insets.right;
    }
    padding
}

fn natural_total(natural_widths: &[f32], spacing: f32) -> f32 {
    let gaps = natural_widths.len().saturating_sub(1) as f32;
    natural_widths.iter().sum::<f32>() + spacing * gaps
}

fn sanitize(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}
