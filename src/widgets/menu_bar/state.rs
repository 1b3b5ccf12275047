// SPDX-License-Identifier: MPL-2.0

//! Selection state machine and derived layout of the menu bar.

use super::animation::{HIGHLIGHT_DURATION, Transition};
use super::delegate::MenuBarDelegate;
use super::error::Rejected;
use super::highlight::{HighlightGeometry, highlight_geometry, reveal_offset};
use super::item::{ItemId, MenuButton};
use super::layout::StripLayout;
use super::metrics::{Distribution, EdgeInsets, HighlightStyle, LayoutMetrics, TextMetrics};
use cosmic::iced::Color;
use cosmic::widget;
use std::time::Instant;

/// State for the menu bar widget.
///
/// This state is owned by the parent component and passed to the widget.
/// Every setter re-derives the layout and retargets the highlight right away.
#[derive(Debug, Clone)]
pub struct MenuBarState {
    items: Vec<MenuButton>,
    /// Bumped on every accepted item set so stale taps can be told apart.
    generation: u64,
    active: Option<usize>,
    metrics: LayoutMetrics,
    style: HighlightStyle,
    distribution: Distribution,
    text_metrics: TextMetrics,
    viewport_width: f32,
    layout: StripLayout,
    highlight: Option<Transition<HighlightGeometry>>,
    scroll: Transition<f32>,
    /// Last offset applied to or reported by the scrollable.
    scroll_offset: f32,
    scroll_pending: bool,
    scroll_id: widget::Id,
    /// Time of the last frame, used to sample transitions for drawing.
    clock: Instant,
}

impl Default for MenuBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBarState {
    /// Creates an empty menu bar with default metrics.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
            active: None,
            metrics: LayoutMetrics::default(),
            style: HighlightStyle::default(),
            distribution: Distribution::default(),
            text_metrics: TextMetrics::default(),
            viewport_width: 0.0,
            layout: StripLayout::default(),
            highlight: None,
            scroll: Transition::new(0.0, HIGHLIGHT_DURATION),
            scroll_offset: 0.0,
            scroll_pending: false,
            scroll_id: widget::Id::unique(),
            clock: Instant::now(),
        }
    }

    /// Replaces the menu items.
    ///
    /// An empty list is ignored. `default_active` falls back to 0 when out of
    /// range. Every new item is decorated once; the activation itself is not
    /// reported through `on_active_change`.
    pub fn set_items<I, S>(
        &mut self,
        labels: I,
        default_active: usize,
        delegate: Option<&mut dyn MenuBarDelegate>,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Err(rejected) = self.try_set_items(labels, default_active, delegate) {
            tracing::debug!(%rejected, "ignoring menu items");
        }
    }

    pub(crate) fn try_set_items<I, S>(
        &mut self,
        labels: I,
        default_active: usize,
        delegate: Option<&mut dyn MenuBarDelegate>,
    ) -> Result<(), Rejected>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Rejected::EmptyItems);
        }

        self.generation += 1;
        let generation = self.generation;
        let active = if default_active < labels.len() {
            default_active
        } else {
            0
        };

        self.items = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| MenuButton::new(generation, index, label))
            .collect();
        self.active = Some(active);
        self.mark_selected();

        tracing::debug!(items = self.items.len(), active, "menu items replaced");

        self.decorate_all(delegate);
        self.recompute_derived_geometry();
        Ok(())
    }

    /// Makes the item at `index` active.
    ///
    /// Ignored when `index` is out of range or already active. Otherwise the
    /// delegate hears about the change, the highlight moves, and every item
    /// is decorated again.
    pub fn set_active_index(&mut self, index: usize, delegate: Option<&mut dyn MenuBarDelegate>) {
        if let Err(rejected) = self.try_set_active_index(index, delegate) {
            tracing::debug!(%rejected, "ignoring menu activation");
        }
    }

    pub(crate) fn try_set_active_index(
        &mut self,
        index: usize,
        mut delegate: Option<&mut dyn MenuBarDelegate>,
    ) -> Result<(), Rejected> {
        let count = self.items.len();
        if index >= count {
            return Err(Rejected::OutOfRange { index, count });
        }
        if self.active == Some(index) {
            return Err(Rejected::AlreadyActive(index));
        }

        self.active = Some(index);
        self.mark_selected();
        tracing::debug!(index, "menu bar active item changed");

        if let Some(delegate) = delegate.as_deref_mut() {
            delegate.on_active_change(index);
        }

        let now = Instant::now();
        self.clock = now;
        self.update_active_menu_layout(now);

        self.decorate_all(delegate);
        // Decoration may change label widths, so measure again.
        if self.relayout() {
            self.update_active_menu_layout(now);
        }
        Ok(())
    }

    /// Handles a tap on a rendered item.
    pub fn tap(&mut self, id: ItemId, delegate: Option<&mut dyn MenuBarDelegate>) {
        if let Err(rejected) = self.try_tap(id, delegate) {
            tracing::debug!(%rejected, "ignoring menu tap");
        }
    }

    pub(crate) fn try_tap(
        &mut self,
        id: ItemId,
        delegate: Option<&mut dyn MenuBarDelegate>,
    ) -> Result<(), Rejected> {
        let index = self.resolve(id).ok_or(Rejected::UnknownItem(id))?;
        self.try_set_active_index(index, delegate)
    }

    /// Maps a tapped item to its index in the current item set.
    fn resolve(&self, id: ItemId) -> Option<usize> {
        (id.generation == self.generation && id.index < self.items.len()).then_some(id.index)
    }

    /// Returns the active index, or `None` while there are no items.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&MenuButton> {
        self.active.and_then(|index| self.items.get(index))
    }

    pub fn items(&self) -> &[MenuButton] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn style(&self) -> HighlightStyle {
        self.style
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Identifier of the scrollable hosting the items.
    pub fn scroll_id(&self) -> &widget::Id {
        &self.scroll_id
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Highlight as currently displayed.
    pub fn highlight(&self) -> Option<HighlightGeometry> {
        self.highlight
            .as_ref()
            .map(|transition| transition.value(self.clock))
    }

    /// Highlight once the running transition has finished.
    pub fn highlight_target(&self) -> Option<HighlightGeometry> {
        self.highlight.as_ref().map(Transition::target)
    }

    pub fn set_item_spacing(&mut self, spacing: f32) {
        self.metrics.item_spacing = spacing;
        self.recompute_derived_geometry();
    }

    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) {
        self.metrics.content_edge_insets = insets;
        self.recompute_derived_geometry();
    }

    pub fn set_highlight_thickness(&mut self, thickness: f32) {
        self.metrics.highlight_thickness = thickness;
        self.recompute_derived_geometry();
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.metrics.highlight_color = color;
    }

    pub fn set_border_thickness(&mut self, thickness: f32) {
        self.metrics.border_thickness = thickness;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.metrics.border_color = color;
    }

    pub fn set_segment_corner_radius(&mut self, radius: f32) {
        self.metrics.segment_corner_radius = radius;
        self.recompute_derived_geometry();
    }

    pub fn set_segment_vertical_inset(&mut self, inset: f32) {
        self.metrics.segment_vertical_inset = inset;
        self.recompute_derived_geometry();
    }

    pub fn set_strip_height(&mut self, height: f32) {
        self.metrics.strip_height = height;
        self.recompute_derived_geometry();
    }

    /// Switches the highlight shape. The selection is left untouched.
    pub fn set_style(&mut self, style: HighlightStyle) {
        self.style = style;
        self.recompute_derived_geometry();
    }

    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = distribution;
        self.recompute_derived_geometry();
    }

    pub fn set_text_metrics(&mut self, text_metrics: TextMetrics) {
        self.text_metrics = text_metrics;
        self.recompute_derived_geometry();
    }

    /// Sets the width available to the strip.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        self.recompute_derived_geometry();
    }

    /// Sets both the available width and the strip height.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width == self.viewport_width && height == self.metrics.strip_height {
            return;
        }
        self.viewport_width = width;
        self.metrics.strip_height = height;
        self.recompute_derived_geometry();
    }

    /// Runs a decoration pass over every item without changing the selection.
    ///
    /// Used when the delegate's styling rules change.
    pub fn redecorate(&mut self, delegate: &mut dyn MenuBarDelegate) {
        self.decorate_all(Some(delegate));
        if self.relayout() {
            let now = Instant::now();
            self.clock = now;
            self.update_active_menu_layout(now);
        }
    }

    /// Records an offset reported by the scrollable, e.g. after the user
    /// dragged the strip.
    pub fn sync_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
        if !self.scroll_pending {
            self.scroll.snap(offset);
        }
    }

    /// Returns true until `tick` has observed every transition settle.
    pub fn is_animating(&self) -> bool {
        self.scroll_pending
            || self
                .highlight
                .as_ref()
                .is_some_and(|transition| !transition.is_resting())
    }

    /// Advances transitions to `now`.
    ///
    /// Returns the scroll offset to apply for this frame, if the strip is
    /// scrolling an item into view.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.clock = now;
        if let Some(transition) = self.highlight.as_mut() {
            if !transition.is_resting() && !transition.is_animating(now) {
                let target = transition.target();
                transition.snap(target);
            }
        }

        if !self.scroll_pending {
            return None;
        }

        let offset = self.scroll.value(now);
        self.scroll_offset = offset;
        if !self.scroll.is_animating(now) {
            self.scroll_pending = false;
        }
        Some(offset)
    }

    /// Measures the items again and moves the highlight to match.
    fn recompute_derived_geometry(&mut self) {
        let now = Instant::now();
        self.clock = now;
        self.relayout();
        self.update_active_menu_layout(now);
    }

    /// Recomputes item frames, returning true if they changed.
    fn relayout(&mut self) -> bool {
        let natural_widths: Vec<f32> = self
            .items
            .iter()
            .map(|item| self.text_metrics.measure(item.label(), &item.decoration))
            .collect();

        let layout = StripLayout::compute(
            &natural_widths,
            self.viewport_width,
            &self.metrics,
            self.distribution,
        );
        let changed = layout != self.layout;
        self.layout = layout;
        changed
    }

    /// Retargets the highlight at the active item and scrolls it into view.
    fn update_active_menu_layout(&mut self, now: Instant) {
        let Some(active) = self.active else {
            return;
        };
        let Some(target) =
            highlight_geometry(&self.layout.frames, active, &self.metrics, self.style)
        else {
            return;
        };

        match self.highlight.as_mut() {
            Some(transition) => {
                if transition.target() != target {
                    transition.retarget(target, now);
                }
            }
            None => {
                // First placement grows out of the middle of the strip.
                let collapsed = HighlightGeometry {
                    width: 0.0,
                    center_x: self.viewport_width / 2.0,
                    ..target
                };
                let mut transition = Transition::new(collapsed, HIGHLIGHT_DURATION);
                transition.retarget(target, now);
                self.highlight = Some(transition);
            }
        }

        if let Some(frame) = self.layout.frame(active) {
            let offset = reveal_offset(
                self.scroll_offset,
                self.viewport_width,
                self.layout.content_width,
                frame,
                self.metrics.item_spacing,
            );
            let drifted = !self.scroll_pending && offset != self.scroll_offset;
            if offset != self.scroll.target() || drifted {
                if !self.scroll_pending {
                    self.scroll.snap(self.scroll_offset);
                }
                self.scroll.retarget(offset, now);
                self.scroll_pending = true;
            }
        }
    }

    fn mark_selected(&mut self) {
        for item in &mut self.items {
            let selected = self.active == Some(item.index());
            item.set_selected(selected);
        }
    }

    fn decorate_all(&mut self, delegate: Option<&mut dyn MenuBarDelegate>) {
        let Some(delegate) = delegate else {
            return;
        };
        for (index, item) in self.items.iter_mut().enumerate() {
            delegate.decorate(item, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::menu_bar::highlight::VerticalPlacement;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Change(usize),
        Decorate(usize),
    }

    /// Records callbacks and bolds the active item.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl MenuBarDelegate for Recorder {
        fn on_active_change(&mut self, index: usize) {
            self.calls.push(Call::Change(index));
        }

        fn decorate(&mut self, item: &mut MenuButton, index: usize) {
            item.decoration.bold = item.is_selected();
            self.calls.push(Call::Decorate(index));
        }
    }

    fn state_with(labels: &[&str], default_active: usize) -> MenuBarState {
        let mut state = MenuBarState::new();
        state.set_viewport_width(400.0);
        state.set_items(labels.iter().copied(), default_active, None);
        state
    }

    fn frame_width(state: &MenuBarState, index: usize) -> f32 {
        state.layout().frames[index].width
    }

    #[test]
    fn test_new_state() {
        let state = MenuBarState::new();

        assert_eq!(state.active_index(), None);
        assert_eq!(state.item_count(), 0);
        assert!(state.highlight().is_none());
        assert!(state.active_item().is_none());
    }

    #[test]
    fn test_set_items_decorates_without_change_event() {
        let mut state = MenuBarState::new();
        let mut recorder = Recorder::default();

        state.set_items(["A", "B", "C"], 1, Some(&mut recorder));

        assert_eq!(state.active_index(), Some(1));
        assert_eq!(
            recorder.calls,
            vec![Call::Decorate(0), Call::Decorate(1), Call::Decorate(2)]
        );
        assert_eq!(state.active_item().map(MenuButton::label), Some("B"));
        // Decoration already sees the chosen active item.
        assert!(state.items()[1].decoration.bold);
        assert!(!state.items()[0].is_selected());
    }

    #[test]
    fn test_set_items_out_of_range_default_falls_back_to_zero() {
        let state = state_with(&["A", "B", "C"], 7);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_set_items_empty_is_ignored() {
        let mut state = state_with(&["A", "B"], 1);
        let before: Vec<String> = state.items().iter().map(|i| i.label().to_string()).collect();

        assert_eq!(
            state.try_set_items(Vec::<String>::new(), 0, None),
            Err(Rejected::EmptyItems)
        );

        let after: Vec<String> = state.items().iter().map(|i| i.label().to_string()).collect();
        assert_eq!(before, after);
        assert_eq!(state.active_index(), Some(1));

        let mut empty = MenuBarState::new();
        empty.set_items(Vec::<String>::new(), 0, None);
        assert_eq!(empty.active_index(), None);
    }

    #[test]
    fn test_set_items_replaces_previous_set() {
        let mut state = state_with(&["A", "B", "C"], 2);
        state.set_items(["X", "Y"], 0, None);

        assert_eq!(state.item_count(), 2);
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.items()[1].label(), "Y");
        assert_eq!(state.items()[1].index(), 1);
    }

    #[test]
    fn test_set_active_index_notifies_then_decorates_all() {
        let mut state = state_with(&["A", "B", "C"], 0);
        let mut recorder = Recorder::default();

        state.set_active_index(2, Some(&mut recorder));

        assert_eq!(state.active_index(), Some(2));
        assert_eq!(
            recorder.calls,
            vec![
                Call::Change(2),
                Call::Decorate(0),
                Call::Decorate(1),
                Call::Decorate(2),
            ]
        );
        assert!(state.items()[2].decoration.bold);
        assert!(!state.items()[0].decoration.bold);
    }

    #[test]
    fn test_reselecting_active_index_is_silent() {
        let mut state = state_with(&["A", "B", "C"], 1);
        let mut recorder = Recorder::default();

        assert_eq!(
            state.try_set_active_index(1, Some(&mut recorder)),
            Err(Rejected::AlreadyActive(1))
        );
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_silent() {
        let mut state = state_with(&["A", "B", "C"], 1);
        let mut recorder = Recorder::default();

        assert_eq!(
            state.try_set_active_index(3, Some(&mut recorder)),
            Err(Rejected::OutOfRange { index: 3, count: 3 })
        );
        assert!(recorder.calls.is_empty());
        assert_eq!(state.active_index(), Some(1));
    }

    #[test]
    fn test_activation_without_delegate() {
        let mut state = state_with(&["A", "B", "C"], 0);
        state.set_active_index(1, None);
        assert_eq!(state.active_index(), Some(1));
    }

    #[test]
    fn test_tap_resolves_current_items_only() {
        let mut state = state_with(&["A", "B", "C"], 0);
        let stale = state.items()[2].id();
        state.set_items(["X", "Y", "Z"], 0, None);

        let mut recorder = Recorder::default();
        assert_eq!(
            state.try_tap(stale, Some(&mut recorder)),
            Err(Rejected::UnknownItem(stale))
        );
        assert!(recorder.calls.is_empty());

        let fresh = state.items()[2].id();
        state.tap(fresh, Some(&mut recorder));
        assert_eq!(state.active_index(), Some(2));
        assert_eq!(recorder.calls.first(), Some(&Call::Change(2)));
    }

    #[test]
    fn test_tap_on_empty_bar() {
        let mut state = MenuBarState::new();
        let id = ItemId {
            generation: 0,
            index: 0,
        };
        assert_eq!(state.try_tap(id, None), Err(Rejected::UnknownItem(id)));
    }

    #[test]
    fn test_underline_width_follows_active_item() {
        let mut state = state_with(&["One", "Two", "Three"], 1);
        state.set_content_edge_insets(EdgeInsets::symmetric(16.0));
        let spacing = state.metrics().item_spacing;

        let middle = state.highlight_target().expect("highlight placed");
        assert_eq!(middle.width, frame_width(&state, 1) + spacing);

        state.set_active_index(0, None);
        let first = state.highlight_target().expect("highlight placed");
        assert_eq!(first.width, frame_width(&state, 0) + spacing + 16.0);

        state.set_active_index(2, None);
        let last = state.highlight_target().expect("highlight placed");
        assert_eq!(last.width, frame_width(&state, 2) + spacing + 16.0);
    }

    #[test]
    fn test_style_switch_keeps_selection() {
        let mut state = state_with(&["A", "B", "C"], 0);
        state.set_content_edge_insets(EdgeInsets::new(16.0, 16.0));
        let underline = state.highlight_target().expect("highlight placed");
        assert_eq!(underline.corner_radius, 0.0);

        state.set_style(HighlightStyle::Segment);
        let segment = state.highlight_target().expect("highlight placed");

        assert_eq!(state.active_index(), Some(0));
        assert_eq!(segment.width, underline.width - 16.0);
        assert_eq!(segment.corner_radius, 4.0);
        assert_eq!(segment.placement, VerticalPlacement::Inset { inset: 4.0 });
    }

    #[test]
    fn test_bold_decoration_widens_item() {
        let mut state = state_with(&["Alpha", "Beta", "Gamma"], 0);
        state.set_viewport_width(10.0);
        let before = frame_width(&state, 2);

        let mut recorder = Recorder::default();
        state.set_active_index(2, Some(&mut recorder));

        assert!(frame_width(&state, 2) > before);
        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.width, frame_width(&state, 2) + 8.0);
    }

    #[test]
    fn test_metric_setters_rederive_geometry() {
        let mut state = state_with(&["A", "B", "C"], 1);

        state.set_item_spacing(20.0);
        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.width, frame_width(&state, 1) + 20.0);

        state.set_highlight_thickness(3.0);
        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.placement, VerticalPlacement::Bottom { thickness: 3.0 });

        state.set_style(HighlightStyle::Segment);
        state.set_segment_corner_radius(9.0);
        state.set_segment_vertical_inset(2.0);
        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.corner_radius, 9.0);
        assert_eq!(target.vertical_inset(), 2.0);
    }

    #[test]
    fn test_layout_fills_viewport_and_scrolls_when_needed() {
        let mut state = state_with(&["A", "B", "C"], 0);
        assert!(!state.layout().scrollable);
        assert!((state.layout().content_width - 400.0).abs() < 0.01);

        state.set_viewport_width(30.0);
        assert!(state.layout().scrollable);
    }

    #[test]
    fn test_highlight_settles_after_duration() {
        let mut state = state_with(&["A", "B", "C"], 0);
        state.set_active_index(2, None);

        assert!(state.is_animating());

        let later = Instant::now() + Duration::from_secs(1);
        state.tick(later);

        assert_eq!(state.highlight(), state.highlight_target());
        assert!(!state.is_animating());
    }

    #[test]
    fn test_highlight_keeps_animating_until_a_frame_lands_on_target() {
        let mut state = state_with(&["A", "B", "C"], 0);
        state.tick(Instant::now() + Duration::from_secs(1));

        // A frame sampled just before the end leaves the highlight short.
        let almost = Instant::now() + HIGHLIGHT_DURATION - Duration::from_millis(1);
        state.set_active_index(2, None);
        state.tick(almost);
        assert!(state.is_animating());

        let target = state.highlight_target().expect("highlight placed");
        state.tick(almost + Duration::from_secs(1));
        assert!(!state.is_animating());
        assert_eq!(state.highlight(), Some(target));
    }

    #[test]
    fn test_set_distribution_rederives_frames_and_highlight() {
        let mut state = state_with(&["A", "Longer", "C"], 2);
        state.set_content_edge_insets(EdgeInsets::symmetric(16.0));
        assert_ne!(frame_width(&state, 0), frame_width(&state, 1));

        state.set_distribution(Distribution::Equal);

        assert_eq!(state.distribution(), Distribution::Equal);
        let width = frame_width(&state, 0);
        for index in 1..3 {
            assert!((frame_width(&state, index) - width).abs() < 1e-3);
        }
        assert!((state.layout().content_width - 400.0).abs() < 0.01);

        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.width, frame_width(&state, 2) + 8.0 + 16.0);
    }

    #[test]
    fn test_text_metrics_and_strip_height_rederive_geometry() {
        let mut state = state_with(&["A", "B", "C"], 0);
        state.set_viewport_width(10.0);
        let before = frame_width(&state, 0);

        state.set_text_metrics(TextMetrics {
            label_padding: 20.0,
            ..TextMetrics::default()
        });
        assert!(frame_width(&state, 0) > before);
        let target = state.highlight_target().expect("highlight placed");
        assert_eq!(target.width, frame_width(&state, 0) + 8.0);

        state.set_viewport(400.0, 60.0);
        assert_eq!(state.viewport_width(), 400.0);
        assert_eq!(state.metrics().strip_height, 60.0);
        assert!(!state.layout().scrollable);

        state.set_strip_height(30.0);
        state.set_border_thickness(2.0);
        assert_eq!(state.metrics().strip_height, 30.0);
        assert_eq!(state.metrics().border_thickness, 2.0);
    }

    #[test]
    fn test_redecorate_keeps_selection_and_applies_new_styling() {
        let mut state = state_with(&["Alpha", "Beta", "Gamma"], 1);
        assert!(!state.items()[1].decoration.bold);
        let before = frame_width(&state, 1);

        let mut recorder = Recorder::default();
        state.redecorate(&mut recorder);

        assert_eq!(state.active_index(), Some(1));
        assert_eq!(
            recorder.calls,
            vec![Call::Decorate(0), Call::Decorate(1), Call::Decorate(2)]
        );
        assert!(state.items()[1].decoration.bold);
        assert!(frame_width(&state, 1) >= before);
    }

    #[test]
    fn test_scrolls_active_item_into_view() {
        let mut state = state_with(&["First", "Second", "Third", "Fourth"], 0);
        state.set_viewport_width(120.0);
        assert!(state.layout().scrollable);

        state.set_active_index(3, None);
        let later = Instant::now() + Duration::from_secs(1);
        let offset = state.tick(later).expect("scrolling toward the last item");

        // The last item sits at the end of the content, so the strip scrolls
        // as far as it can.
        let max = state.layout().content_width - 120.0;
        assert!((offset - max).abs() < 0.01);
        assert_eq!(state.scroll_offset(), offset);
        assert_eq!(state.tick(later), None);
    }

    #[test]
    fn test_user_scroll_is_recorded() {
        let mut state = state_with(&["First", "Second", "Third", "Fourth"], 0);
        state.set_viewport_width(120.0);
        state.tick(Instant::now() + Duration::from_secs(1));

        state.sync_scroll_offset(42.0);
        assert_eq!(state.scroll_offset(), 42.0);
        assert_eq!(state.tick(Instant::now() + Duration::from_secs(2)), None);
    }

    proptest! {
        #[test]
        fn prop_set_items_decorates_every_index(
            count in 1usize..12,
            default_active in 0usize..16,
        ) {
            let labels: Vec<String> = (0..count).map(|i| format!("Menu {i}")).collect();
            let mut state = MenuBarState::new();
            let mut recorder = Recorder::default();

            state.set_items(labels, default_active, Some(&mut recorder));

            let expected_active = if default_active < count { default_active } else { 0 };
            prop_assert_eq!(state.active_index(), Some(expected_active));
            let decorated: Vec<Call> = (0..count).map(Call::Decorate).collect();
            prop_assert_eq!(recorder.calls, decorated);
        }

        #[test]
        fn prop_activation_calls(
            count in 1usize..10,
            initial in 0usize..10,
            target in 0usize..20,
        ) {
            let labels: Vec<String> = (0..count).map(|i| format!("Item {i}")).collect();
            let mut state = MenuBarState::new();
            state.set_items(labels, initial, None);
            let before = state.active_index();

            let mut recorder = Recorder::default();
            state.set_active_index(target, Some(&mut recorder));

            if target < count && Some(target) != before {
                prop_assert_eq!(state.active_index(), Some(target));
                let mut expected = vec![Call::Change(target)];
                expected.extend((0..count).map(Call::Decorate));
                prop_assert_eq!(recorder.calls, expected);
            } else {
                prop_assert_eq!(state.active_index(), before);
                prop_assert!(recorder.calls.is_empty());
            }
        }
    }
}
