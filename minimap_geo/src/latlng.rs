// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A geographic point in degrees of latitude and longitude.
///
/// No range normalization is performed: a longitude of `-182.0` is a
/// legitimate value and is carried through verbatim. Map engines that
/// wrap the antimeridian do so on their side of the contract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for LatLng {
    /// Converts from a `(lat, lng)` pair.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::LatLng;

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let p = LatLng::new(-182.0, 361.0);
        assert_eq!(p.lat, -182.0);
        assert_eq!(p.lng, 361.0);
        assert!(p.is_finite());
    }

    #[test]
    fn non_finite_coordinates_are_detected() {
        assert!(!LatLng::new(f64::NAN, 0.0).is_finite());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_finite());
    }
}
