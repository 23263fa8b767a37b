// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use minimap_geo::LatLngBounds;
use peniko::Color;

bitflags::bitflags! {
    /// User-interaction capabilities of a map viewport.
    ///
    /// A headless map does not process gestures itself; these flags
    /// record which gestures the host's input layer should honor.
    /// An overview viewport runs with [`InteractionFlags::empty`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InteractionFlags: u8 {
        /// Panning by pointer drag.
        const DRAGGING = 1 << 0;
        /// Zooming with the scroll wheel.
        const SCROLL_WHEEL_ZOOM = 1 << 1;
        /// Zooming by double click.
        const DOUBLE_CLICK_ZOOM = 1 << 2;
        /// Zooming to a dragged-out box.
        const BOX_ZOOM = 1 << 3;
        /// Pinch zooming on touch devices.
        const TOUCH_ZOOM = 1 << 4;
    }
}

/// Stroke style and interactivity for a [`Rectangle`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleOptions {
    /// Stroke color.
    pub color: Color,
    /// Stroke weight in pixels.
    pub weight: f64,
    /// Whether the shape reacts to pointer input.
    pub interactive: bool,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x29, 0xff, 0xde),
            weight: 2.0,
            interactive: false,
        }
    }
}

/// Identifies a rectangle added to a [`Map`](crate::Map).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RectangleId(pub(crate) u64);

/// A rectangle vector shape drawn on a map.
///
/// Its lifetime is bound to the owning map: destroying the map
/// destroys its rectangles.
#[derive(Clone, Debug)]
pub struct Rectangle {
    pub(crate) bounds: LatLngBounds,
    pub(crate) options: RectangleOptions,
}

impl Rectangle {
    /// The geographic bounds the rectangle covers.
    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        self.bounds
    }

    /// The rectangle's style options.
    #[must_use]
    pub fn options(&self) -> &RectangleOptions {
        &self.options
    }
}
