// SPDX-License-Identifier: MPL-2.0

//! Layout metrics and style knobs of the menu bar.

use super::item::Decoration;
use cosmic::iced::Color;
use serde::{Deserialize, Serialize};

/// Extra horizontal padding reserved at both ends of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub left: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const NONE: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn symmetric(inset: f32) -> Self {
        Self::new(inset, inset)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

/// Shape of the active item highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HighlightStyle {
    /// Thin bar anchored to the bottom edge.
    #[default]
    Underline,
    /// Rounded rectangle behind the active label.
    Segment,
}

/// How spare width is shared between items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Items keep their natural width; leftover space is split evenly as padding.
    #[default]
    Proportional,
    /// Every item gets the same width.
    Equal,
}

/// Geometry and color configuration of the bar.
///
/// Mutate through the setters on [`MenuBarState`](super::MenuBarState) so the
/// derived layout follows every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub item_spacing: f32,
    pub content_edge_insets: EdgeInsets,
    pub highlight_thickness: f32,
    pub highlight_color: Color,
    pub border_thickness: f32,
    pub border_color: Color,
    pub segment_corner_radius: f32,
    pub segment_vertical_inset: f32,
    pub strip_height: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            item_spacing: 8.0,
            content_edge_insets: EdgeInsets::NONE,
            highlight_thickness: 8.0,
            highlight_color: Color::from_rgb(1.0, 0.0, 0.0),
            border_thickness: 0.5,
            border_color: Color::from_rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0),
            segment_corner_radius: 4.0,
            segment_vertical_inset: 4.0,
            strip_height: 44.0,
        }
    }
}

/// Natural size measurement for item labels.
///
/// Items are rendered at exactly the width computed from these metrics, so
/// the values only need to be generous enough for the font in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub average_advance: f32,
    /// Width multiplier applied to bold labels.
    pub bold_factor: f32,
    /// Padding on each side of the label.
    pub label_padding: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            average_advance: 0.6,
            bold_factor: 1.1,
            label_padding: 8.0,
        }
    }
}

impl TextMetrics {
    /// Returns the natural width of a label rendered with `decoration`.
    pub fn measure(&self, label: &str, decoration: &Decoration) -> f32 {
        let glyphs = label.chars().count() as f32;
        let mut text = glyphs * f32::from(decoration.font_size) * self.average_advance;
        if decoration.bold {
            text *= self.bold_factor;
        }
        text.ceil() + self.label_padding * 2.0
    }
}
