// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::LatLng;

/// An axis-aligned rectangle in latitude/longitude space.
///
/// Bounds are stored as a south-west and a north-east corner. The
/// constructor normalizes any two corners, so callers do not need to
/// order them.
///
/// A bounds value may be *invalid*: zero-area, negative-area (only
/// possible via direct field manipulation of inputs such as NaN), or
/// non-finite. Invalid bounds are inert — they contain nothing and
/// intersect nothing — which keeps every geometric query total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    sw: LatLng,
    ne: LatLng,
}

impl LatLngBounds {
    /// The whole-world extent, `[[-90, -180], [90, 180]]`.
    pub const WORLD: Self = Self {
        sw: LatLng::new(-90.0, -180.0),
        ne: LatLng::new(90.0, 180.0),
    };

    /// Creates bounds from two opposite corners, in any order.
    #[must_use]
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            sw: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            ne: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// The south-west corner.
    #[must_use]
    pub fn south_west(&self) -> LatLng {
        self.sw
    }

    /// The north-east corner.
    #[must_use]
    pub fn north_east(&self) -> LatLng {
        self.ne
    }

    /// The southern latitude edge.
    #[must_use]
    pub fn south(&self) -> f64 {
        self.sw.lat
    }

    /// The western longitude edge.
    #[must_use]
    pub fn west(&self) -> f64 {
        self.sw.lng
    }

    /// The northern latitude edge.
    #[must_use]
    pub fn north(&self) -> f64 {
        self.ne.lat
    }

    /// The eastern longitude edge.
    #[must_use]
    pub fn east(&self) -> f64 {
        self.ne.lng
    }

    /// The center point of the bounds.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lng + self.ne.lng) / 2.0,
        )
    }

    /// The latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.ne.lat - self.sw.lat
    }

    /// The longitude extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.ne.lng - self.sw.lng
    }

    /// Returns `true` when the bounds are finite with a strictly
    /// positive extent on both axes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sw.is_finite()
            && self.ne.is_finite()
            && self.ne.lat > self.sw.lat
            && self.ne.lng > self.sw.lng
    }

    /// Returns `true` when `point` lies within these bounds, edges
    /// included. Always `false` for invalid bounds.
    #[must_use]
    pub fn contains_latlng(&self, point: LatLng) -> bool {
        self.is_valid()
            && point.is_finite()
            && point.lat >= self.sw.lat
            && point.lat <= self.ne.lat
            && point.lng >= self.sw.lng
            && point.lng <= self.ne.lng
    }

    /// Returns `true` when `other` lies entirely within these bounds,
    /// edges included. Always `false` when either operand is invalid.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && other.sw.lat >= self.sw.lat
            && other.sw.lng >= self.sw.lng
            && other.ne.lat <= self.ne.lat
            && other.ne.lng <= self.ne.lng
    }

    /// Returns `true` when `other` overlaps these bounds on both axes,
    /// touching edges included. Always `false` when either operand is
    /// invalid.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && other.sw.lat <= self.ne.lat
            && other.ne.lat >= self.sw.lat
            && other.sw.lng <= self.ne.lng
            && other.ne.lng >= self.sw.lng
    }

    /// Compares two bounds corner-by-corner within `margin` degrees.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, margin: f64) -> bool {
        (self.sw.lat - other.sw.lat).abs() <= margin
            && (self.sw.lng - other.sw.lng).abs() <= margin
            && (self.ne.lat - other.ne.lat).abs() <= margin
            && (self.ne.lng - other.ne.lng).abs() <= margin
    }
}

#[cfg(test)]
mod tests {
    use super::{LatLng, LatLngBounds};

    fn bounds(s: f64, w: f64, n: f64, e: f64) -> LatLngBounds {
        LatLngBounds::new(LatLng::new(s, w), LatLng::new(n, e))
    }

    #[test]
    fn corners_are_normalized() {
        let b = LatLngBounds::new(LatLng::new(10.0, 10.0), LatLng::new(5.0, 5.0));
        assert_eq!(b.south_west(), LatLng::new(5.0, 5.0));
        assert_eq!(b.north_east(), LatLng::new(10.0, 10.0));
        assert!(b.is_valid());
    }

    #[test]
    fn zero_area_bounds_are_invalid() {
        let degenerate = LatLngBounds::new(LatLng::new(3.0, 3.0), LatLng::new(3.0, 3.0));
        assert!(!degenerate.is_valid());
        assert!(!degenerate.contains(&degenerate));
        assert!(!degenerate.intersects(&degenerate));
        assert!(!LatLngBounds::WORLD.contains(&degenerate));
        assert!(!LatLngBounds::WORLD.intersects(&degenerate));
    }

    #[test]
    fn non_finite_bounds_are_invalid() {
        let nan = LatLngBounds::new(LatLng::new(f64::NAN, 0.0), LatLng::new(1.0, 1.0));
        assert!(!nan.is_valid());
        assert!(!nan.intersects(&LatLngBounds::WORLD));
    }

    #[test]
    fn containment_includes_edges() {
        let outer = bounds(-10.0, -10.0, 10.0, 10.0);
        assert!(outer.contains(&bounds(-10.0, -10.0, 10.0, 10.0)));
        assert!(outer.contains(&bounds(-5.0, -5.0, 5.0, 5.0)));
        assert!(!outer.contains(&bounds(-5.0, -5.0, 11.0, 5.0)));
    }

    #[test]
    fn intersection_cases() {
        let a = bounds(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&bounds(5.0, 5.0, 15.0, 15.0)));
        // Touching edges count as intersecting.
        assert!(a.intersects(&bounds(10.0, 10.0, 20.0, 20.0)));
        assert!(!a.intersects(&bounds(11.0, 11.0, 20.0, 20.0)));
        // Disjoint on one axis only is still disjoint.
        assert!(!a.intersects(&bounds(0.0, 11.0, 10.0, 20.0)));
    }

    #[test]
    fn center_and_spans() {
        let b = bounds(-25.0, -10.0, 5.0, 5.0);
        assert_eq!(b.center(), LatLng::new(-10.0, -2.5));
        assert_eq!(b.lat_span(), 30.0);
        assert_eq!(b.lng_span(), 15.0);
    }

    #[test]
    fn world_extent() {
        assert!(LatLngBounds::WORLD.is_valid());
        assert!(LatLngBounds::WORLD.contains(&bounds(-75.0, -75.0, 75.0, 75.0)));
    }

    #[test]
    fn approx_eq_within_margin() {
        let a = bounds(0.0, 0.0, 1.0, 1.0);
        let b = bounds(1e-10, 0.0, 1.0, 1.0 - 1e-10);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&bounds(0.1, 0.0, 1.0, 1.0), 1e-9));
    }
}
