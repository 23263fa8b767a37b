// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use minimap_geo::LatLngBounds;
use minimap_map::RectangleOptions;

use crate::chrome::CornerPosition;

/// Configuration for a [`ThumbnailMap`](crate::ThumbnailMap) control.
///
/// All fields have working defaults; construct with struct-update
/// syntax:
///
/// ```
/// use minimap_control::ThumbnailMapOptions;
///
/// let options = ThumbnailMapOptions {
///     auto_toggle_display: true,
///     ..ThumbnailMapOptions::default()
/// };
/// assert_eq!(options.width, 150.0);
/// ```
///
/// `aiming_rect.interactive` is forced to `false` during control
/// construction, whatever value it holds here: the aiming rectangle
/// mirrors the primary viewport and must never swallow clicks meant
/// for the thumbnail map.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbnailMapOptions {
    /// Width in pixels of the restored container.
    pub width: f64,
    /// Height in pixels of the restored container.
    pub height: f64,
    /// Corner of the primary map's chrome to attach to.
    pub position: CornerPosition,
    /// Create a manual show/hide button instead of hiding the
    /// container outright when minimized.
    pub toggle_display: bool,
    /// Minimize/restore automatically from the geometric relationship
    /// between the two viewports.
    pub auto_toggle_display: bool,
    /// Explicit initial bounds for the thumbnail viewport; takes
    /// precedence over the layer's declared bounds when valid.
    pub thumbnail_bounds: Option<LatLngBounds>,
    /// Toggle-button tooltip while the control is restored.
    pub hide_text: String,
    /// Toggle-button tooltip while the control is minimized.
    pub show_text: String,
    /// Style options for the aiming rectangle.
    pub aiming_rect: RectangleOptions,
}

impl Default for ThumbnailMapOptions {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 150.0,
            position: CornerPosition::BottomRight,
            toggle_display: false,
            auto_toggle_display: false,
            thumbnail_bounds: None,
            hide_text: "Hide Map".into(),
            show_text: "Show Map".into(),
            aiming_rect: RectangleOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThumbnailMapOptions;
    use crate::chrome::CornerPosition;

    #[test]
    fn defaults_match_the_documented_contract() {
        let options = ThumbnailMapOptions::default();
        assert_eq!(options.width, 150.0);
        assert_eq!(options.height, 150.0);
        assert_eq!(options.position, CornerPosition::BottomRight);
        assert!(!options.toggle_display);
        assert!(!options.auto_toggle_display);
        assert!(options.thumbnail_bounds.is_none());
        assert_eq!(options.hide_text, "Hide Map");
        assert_eq!(options.show_text, "Show Map");
        assert!(!options.aiming_rect.interactive);
        assert_eq!(options.aiming_rect.weight, 2.0);
    }
}
