// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use minimap_geo::LatLngBounds;

/// A content layer that can be added to one or more maps.
///
/// The model carries only what viewport coordination consumes: an
/// optional declared coverage region. Tile sources, styling, and
/// rendering belong to the engine, not here.
///
/// `Layer` is a cheap clonable handle; clones refer to the same layer,
/// and equality is handle identity.
#[derive(Clone, Debug)]
pub struct Layer {
    inner: Rc<LayerData>,
}

#[derive(Debug)]
struct LayerData {
    bounds: Option<LatLngBounds>,
}

impl Layer {
    /// Creates a layer with no declared coverage region.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LayerData { bounds: None }),
        }
    }

    /// Creates a layer that declares the region it covers.
    #[must_use]
    pub fn with_bounds(bounds: LatLngBounds) -> Self {
        Self {
            inner: Rc::new(LayerData {
                bounds: Some(bounds),
            }),
        }
    }

    /// The layer's declared coverage region, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.inner.bounds
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Layer {
    /// Handle identity: two clones of the same layer are equal,
    /// two independently created layers are not.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::Layer;
    use minimap_geo::{LatLng, LatLngBounds};

    #[test]
    fn equality_is_handle_identity() {
        let a = Layer::new();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Layer::new());
    }

    #[test]
    fn declared_bounds_are_reported() {
        let bounds = LatLngBounds::new(LatLng::new(-5.0, -5.0), LatLng::new(5.0, 5.0));
        assert_eq!(Layer::with_bounds(bounds).bounds(), Some(bounds));
        assert_eq!(Layer::new().bounds(), None);
    }
}
