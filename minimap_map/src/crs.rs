// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::f64::consts::PI;

use kurbo::Point;
use minimap_geo::LatLng;

/// Latitude magnitude beyond which the spherical Mercator projection
/// degenerates; projection clamps to this value.
pub const MAX_MERCATOR_LAT: f64 = 85.05112878;

/// Coordinate reference system for a [`Map`](crate::Map).
///
/// A CRS maps geographic coordinates onto a flat world plane in
/// abstract world units; the viewport then scales world units to
/// pixels by `2^zoom`. Only the pieces of projection math needed for
/// bounds derivation live here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Crs {
    /// Spherical Mercator, the common web-map projection. Latitudes
    /// are clamped to ±[`MAX_MERCATOR_LAT`] when projecting.
    #[default]
    Mercator,
    /// An equirectangular plane: one world unit per degree on both
    /// axes, no clamping. Useful for flat/game maps and for tests
    /// with easily predictable numbers.
    Simple,
}

impl Crs {
    /// Pixels per world unit at the given zoom level.
    #[must_use]
    pub fn scale(self, zoom: f64) -> f64 {
        2.0_f64.powf(zoom)
    }

    /// Projects a geographic point onto the world plane.
    ///
    /// World `y` grows southward so that screen and world share an
    /// axis orientation.
    #[must_use]
    pub fn project(self, point: LatLng) -> Point {
        match self {
            Self::Simple => Point::new(point.lng, -point.lat),
            Self::Mercator => {
                let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
                let y = (180.0 / PI) * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
                Point::new(point.lng, -y)
            }
        }
    }

    /// Unprojects a world-plane point back to geographic coordinates.
    #[must_use]
    pub fn unproject(self, point: Point) -> LatLng {
        match self {
            Self::Simple => LatLng::new(-point.y, point.x),
            Self::Mercator => {
                let lat = (2.0 * (-point.y * PI / 180.0).exp().atan() - PI / 2.0).to_degrees();
                LatLng::new(lat, point.x)
            }
        }
    }
}
