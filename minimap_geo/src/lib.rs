// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap Geo: geographic primitives for map coordination.
//!
//! This crate provides the two value types the rest of Minimap reasons
//! with: [`LatLng`], a point in latitude/longitude space, and
//! [`LatLngBounds`], an axis-aligned rectangle of such points.
//!
//! Bounds support the geometric relationships a viewport coordinator
//! needs — containment and intersection — and a validity notion that
//! makes those operations total: a zero-area or non-finite bounds value
//! contains nothing and intersects nothing, it never panics.
//!
//! ## Minimal example
//!
//! ```
//! use minimap_geo::{LatLng, LatLngBounds};
//!
//! let visible = LatLngBounds::new(LatLng::new(-10.0, -10.0), LatLng::new(10.0, 10.0));
//! let thumb = LatLngBounds::new(LatLng::new(-5.0, -5.0), LatLng::new(5.0, 5.0));
//!
//! assert!(visible.contains(&thumb));
//! assert!(visible.intersects(&thumb));
//! ```
//!
//! Coordinates are plain `f64` degrees. Values outside the usual
//! ±90/±180 ranges are allowed and pass through untouched; wraparound
//! normalization, if any, is the responsibility of the map engine.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod bounds;
mod latlng;

pub use bounds::LatLngBounds;
pub use latlng::LatLng;
