// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use minimap_map::Map;

/// Corner of the host map's chrome a widget is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CornerPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

/// Whether a container is currently rendered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// The container is laid out and visible.
    #[default]
    Shown,
    /// The container is removed from layout entirely.
    Hidden,
}

/// Headless stand-in for a widget's screen container.
///
/// Hosts that render read this state; the control only mutates it.
/// Scroll and click propagation start enabled and are switched off by
/// widgets that must not leak input into the map underneath them.
#[derive(Clone, Debug)]
pub struct Container {
    size: Size,
    display: Display,
    scroll_propagation: bool,
    click_propagation: bool,
}

impl Container {
    /// Creates a shown container of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            display: Display::Shown,
            scroll_propagation: true,
            click_propagation: true,
        }
    }

    /// The container's current size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes the container.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The container's current display state.
    #[must_use]
    pub fn display(&self) -> Display {
        self.display
    }

    /// Removes the container from layout.
    pub fn hide(&mut self) {
        self.display = Display::Hidden;
    }

    /// Puts the container back into layout.
    pub fn show(&mut self) {
        self.display = Display::Shown;
    }

    /// Stops scroll input from reaching whatever is underneath.
    pub fn disable_scroll_propagation(&mut self) {
        self.scroll_propagation = false;
    }

    /// Stops click input from reaching whatever is underneath.
    pub fn disable_click_propagation(&mut self) {
        self.click_propagation = false;
    }

    /// Whether scroll input propagates through the container.
    #[must_use]
    pub fn scroll_propagation(&self) -> bool {
        self.scroll_propagation
    }

    /// Whether click input propagates through the container.
    #[must_use]
    pub fn click_propagation(&self) -> bool {
        self.click_propagation
    }
}

/// A manual show/hide button on a widget container.
#[derive(Clone, Debug)]
pub struct ToggleButton {
    tooltip: String,
    minimized: bool,
}

impl ToggleButton {
    /// Creates a button in the restored state with the given tooltip.
    #[must_use]
    pub fn new(tooltip: String) -> Self {
        Self {
            tooltip,
            minimized: false,
        }
    }

    /// The button's natural size when it is the only visible chrome.
    #[must_use]
    pub fn natural_size() -> Size {
        Size::new(26.0, 26.0)
    }

    /// The current tooltip text.
    #[must_use]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Replaces the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: String) {
        self.tooltip = tooltip;
    }

    /// Whether the button is visually marked as minimized.
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Sets the visual minimized marker.
    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }
}

/// Attach/remove lifecycle for widgets anchored to a map's chrome.
///
/// Hosts drive widgets through this interface: query the anchor
/// corner, call [`Attachable::on_add`] when the widget joins a map,
/// and [`Attachable::on_remove`] when it leaves. Widgets gain the
/// positioned-chrome capability by implementing it, not by
/// inheriting a control base.
pub trait Attachable {
    /// Corner of the host map this widget is anchored to.
    fn position(&self) -> CornerPosition;

    /// Called when the widget is added to a map.
    fn on_add(&mut self, map: &Map);

    /// Called when the widget is removed from its map. Must be safe
    /// to call on a widget that never completed [`Attachable::on_add`].
    fn on_remove(&mut self);
}

#[cfg(test)]
mod tests {
    use super::{Container, Display, ToggleButton};
    use kurbo::Size;

    #[test]
    fn containers_start_shown_with_propagation_enabled() {
        let container = Container::new(Size::new(150.0, 150.0));
        assert_eq!(container.display(), Display::Shown);
        assert!(container.scroll_propagation());
        assert!(container.click_propagation());
    }

    #[test]
    fn hide_and_show_flip_display() {
        let mut container = Container::new(Size::new(150.0, 150.0));
        container.hide();
        assert_eq!(container.display(), Display::Hidden);
        container.show();
        assert_eq!(container.display(), Display::Shown);
    }

    #[test]
    fn toggle_button_tracks_tooltip_and_marker() {
        let mut button = ToggleButton::new("Hide Map".into());
        assert_eq!(button.tooltip(), "Hide Map");
        assert!(!button.is_minimized());

        button.set_tooltip("Show Map".into());
        button.set_minimized(true);
        assert_eq!(button.tooltip(), "Show Map");
        assert!(button.is_minimized());
    }
}
