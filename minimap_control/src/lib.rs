// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap Control: an overview ("thumbnail") map control.
//!
//! ## Overview
//!
//! [`ThumbnailMap`] attaches to a primary [`Map`](minimap_map::Map)
//! and coordinates a second, smaller viewport of a supplied layer:
//!
//! - An **aiming rectangle** on the thumbnail viewport always shows
//!   the primary viewport's visible extent, updated synchronously on
//!   every move notification.
//! - **Clicking** the thumbnail pans the primary viewport to the
//!   clicked point, verbatim — no wraparound or clamping happens in
//!   this layer.
//! - A **visibility engine** minimizes and restores the control:
//!   manually via [`ThumbnailMap::toggle_map`] or the optional toggle
//!   button, or automatically (with
//!   [`auto_toggle_display`](ThumbnailMapOptions::auto_toggle_display))
//!   whenever the thumbnail view is redundant — fully contained in
//!   the primary view — or irrelevant — not overlapping it at all.
//!   A manual toggle permanently overrides the automatic policy.
//! - An **initial fit** picks the thumbnail's starting bounds from,
//!   in order: valid configured
//!   [`thumbnail_bounds`](ThumbnailMapOptions::thumbnail_bounds), the
//!   layer's declared bounds, the whole world.
//!
//! The control owns its thumbnail viewport and the subscriptions it
//! installs; [`ThumbnailMap::remove`] tears both down symmetrically,
//! so the bidirectional observer pair between the two viewports has a
//! provable lifetime.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use minimap_control::{ThumbnailMap, ThumbnailMapOptions};
//! use minimap_geo::{LatLng, LatLngBounds};
//! use minimap_map::{Layer, Map, MapOptions};
//!
//! let primary = Map::new(MapOptions {
//!     size: Size::new(800.0, 600.0),
//!     ..MapOptions::default()
//! });
//! primary.set_view(LatLng::new(0.0, 0.0), 4.0);
//!
//! let layer = Layer::with_bounds(LatLngBounds::new(
//!     LatLng::new(-60.0, -60.0),
//!     LatLng::new(60.0, 60.0),
//! ));
//! let mut control = ThumbnailMap::builder().layer(layer).build()?;
//! control.add_to(&primary);
//!
//! // The aiming rectangle tracks the primary viewport.
//! primary.pan_to(LatLng::new(10.0, 10.0));
//! let thumb = control.thumbnail_map().unwrap();
//! let rect = thumb.rectangle(control.aiming_rect().unwrap()).unwrap();
//! assert!(rect.bounds().approx_eq(&primary.bounds(), 1e-9));
//!
//! control.remove();
//! # Ok::<(), minimap_control::ControlError>(())
//! ```
//!
//! Rendering, tiling, gesture recognition, and actual DOM/window
//! chrome are out of scope; the [`Container`] and [`ToggleButton`]
//! types are headless state a rendering host reads.

mod chrome;
mod control;
mod error;
mod options;

pub use chrome::{Attachable, Container, CornerPosition, Display, ToggleButton};
pub use control::{ThumbnailMap, ThumbnailMapBuilder};
pub use error::ControlError;
pub use options::ThumbnailMapOptions;
