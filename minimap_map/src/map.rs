// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Size, Vec2};
use minimap_geo::{LatLng, LatLngBounds};

use crate::crs::Crs;
use crate::events::{EventKinds, EventListener, MapEvent, SubscriptionId};
use crate::layer::Layer;
use crate::shape::{InteractionFlags, Rectangle, RectangleId, RectangleOptions};

/// Construction options for a [`Map`].
#[derive(Clone, Debug)]
pub struct MapOptions {
    /// Viewport size in pixels.
    pub size: Size,
    /// Coordinate reference system.
    pub crs: Crs,
    /// Gestures the host input layer should honor for this viewport.
    pub interaction: InteractionFlags,
    /// Whether attribution chrome is shown by the host.
    pub attribution_control: bool,
    /// Whether zoom-button chrome is shown by the host.
    pub zoom_control: bool,
    /// Whether the host re-measures the viewport on layout changes.
    pub track_resize: bool,
    /// Lowest zoom level the viewport accepts.
    pub min_zoom: f64,
    /// Highest zoom level the viewport accepts.
    pub max_zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            crs: Crs::default(),
            interaction: InteractionFlags::all(),
            attribution_control: true,
            zoom_control: true,
            track_resize: true,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }
}

struct MapState {
    options: MapOptions,
    size: Size,
    center: LatLng,
    zoom: f64,
    layers: Vec<Layer>,
    rectangles: Vec<(RectangleId, Rectangle)>,
    next_rectangle: u64,
    removed: bool,
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, EventKinds, EventListener)>>,
}

/// A headless map viewport.
///
/// `Map` is a cheap clonable handle; clones share state, mirroring how
/// a map object is shared between a host application and the controls
/// attached to it. All operations are total: calls on a
/// [removed](Map::remove) map are no-ops.
///
/// Mutating operations fire [`MapEvent::Move`] followed by
/// [`MapEvent::MoveEnd`]; size changes fire [`MapEvent::Resize`].
/// Listeners run synchronously in subscription order and may
/// re-entrantly mutate the map or the listener registry.
#[derive(Clone)]
pub struct Map {
    state: Rc<RefCell<MapState>>,
    listeners: Rc<ListenerRegistry>,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Map")
            .field("center", &state.center)
            .field("zoom", &state.zoom)
            .field("size", &state.size)
            .field("crs", &state.options.crs)
            .field("layers", &state.layers.len())
            .field("rectangles", &state.rectangles.len())
            .field("removed", &state.removed)
            .finish_non_exhaustive()
    }
}

impl Map {
    /// Creates a map viewport centered on `(0, 0)` at the minimum zoom.
    #[must_use]
    pub fn new(options: MapOptions) -> Self {
        let size = options.size;
        let zoom = options.min_zoom;
        Self {
            state: Rc::new(RefCell::new(MapState {
                options,
                size,
                center: LatLng::default(),
                zoom,
                layers: Vec::new(),
                rectangles: Vec::new(),
                next_rectangle: 0,
                removed: false,
            })),
            listeners: Rc::new(ListenerRegistry::default()),
        }
    }

    /// The map's coordinate reference system.
    #[must_use]
    pub fn crs(&self) -> Crs {
        self.state.borrow().options.crs
    }

    /// The gestures enabled for this viewport.
    #[must_use]
    pub fn interaction(&self) -> InteractionFlags {
        self.state.borrow().options.interaction
    }

    /// A copy of the options the map was created with.
    #[must_use]
    pub fn options(&self) -> MapOptions {
        self.state.borrow().options.clone()
    }

    /// The current viewport size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.state.borrow().size
    }

    /// The current center, exactly as last set — no wraparound.
    #[must_use]
    pub fn center(&self) -> LatLng {
        self.state.borrow().center
    }

    /// The current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.borrow().zoom
    }

    /// Whether [`Map::remove`] has been called.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.state.borrow().removed
    }

    /// The geographic bounds currently visible through the viewport.
    ///
    /// Derived from center, zoom, and size via the CRS. A zero-sized
    /// viewport yields zero-area (invalid) bounds.
    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        let state = self.state.borrow();
        let crs = state.options.crs;
        let scale = crs.scale(state.zoom);
        let center = crs.project(state.center);
        let half = Vec2::new(
            state.size.width / (2.0 * scale),
            state.size.height / (2.0 * scale),
        );
        LatLngBounds::new(crs.unproject(center - half), crs.unproject(center + half))
    }

    /// Sets the center and zoom in one step.
    ///
    /// The zoom is clamped into the configured range. Fires `Move`
    /// then `MoveEnd`.
    pub fn set_view(&self, center: LatLng, zoom: f64) {
        {
            let mut state = self.state.borrow_mut();
            if state.removed {
                return;
            }
            let clamped = zoom.clamp(state.options.min_zoom, state.options.max_zoom);
            state.center = center;
            state.zoom = clamped;
        }
        self.fire(&MapEvent::Move);
        self.fire(&MapEvent::MoveEnd);
    }

    /// Pans the center to the given point, keeping the current zoom.
    ///
    /// The point is taken verbatim; out-of-range longitudes are not
    /// wrapped.
    pub fn pan_to(&self, center: LatLng) {
        let zoom = self.zoom();
        self.set_view(center, zoom);
    }

    /// Pans the viewport by a pixel offset.
    pub fn pan_by(&self, offset: Vec2) {
        let (crs, zoom, center) = {
            let state = self.state.borrow();
            if state.removed {
                return;
            }
            (state.options.crs, state.zoom, state.center)
        };
        let scale = crs.scale(zoom);
        let moved = crs.unproject(crs.project(center) + offset / scale);
        self.set_view(moved, zoom);
    }

    /// Fits the viewport to the given bounds.
    ///
    /// Picks the largest integer zoom level at which the bounds fit
    /// entirely inside the viewport (clamped to the configured zoom
    /// range) and centers on them. Invalid bounds are a no-op.
    pub fn fit_bounds(&self, bounds: &LatLngBounds) {
        if !bounds.is_valid() {
            return;
        }
        let zoom = self.bounds_zoom(bounds);
        self.set_view(bounds.center(), zoom);
    }

    /// Fits the viewport to the whole world extent.
    pub fn fit_world(&self) {
        self.fit_bounds(&LatLngBounds::WORLD);
    }

    /// Largest integer zoom at which `bounds` fit inside the viewport.
    ///
    /// Falls back to the minimum zoom when the bounds do not fit at
    /// any level.
    #[must_use]
    pub fn bounds_zoom(&self, bounds: &LatLngBounds) -> f64 {
        let state = self.state.borrow();
        let crs = state.options.crs;
        let sw = crs.project(bounds.south_west());
        let ne = crs.project(bounds.north_east());
        let world = Size::new((ne.x - sw.x).abs(), (ne.y - sw.y).abs());

        let mut best = state.options.min_zoom;
        let mut zoom = state.options.min_zoom;
        while zoom <= state.options.max_zoom {
            let scale = crs.scale(zoom);
            if world.width * scale <= state.size.width && world.height * scale <= state.size.height
            {
                best = zoom;
            } else {
                break;
            }
            zoom += 1.0;
        }
        best
    }

    /// Resizes the viewport. Fires `Resize`.
    pub fn set_size(&self, size: Size) {
        {
            let mut state = self.state.borrow_mut();
            if state.removed {
                return;
            }
            state.size = size;
        }
        self.fire(&MapEvent::Resize);
    }

    /// Re-measures the viewport.
    ///
    /// The headless model holds its size authoritatively, so this only
    /// re-announces it; hosts embedding a real engine hook layout
    /// measurement here. Fires `Resize`.
    pub fn invalidate_size(&self) {
        if self.state.borrow().removed {
            return;
        }
        self.fire(&MapEvent::Resize);
    }

    /// Adds a layer to the map. Adding the same layer twice is a no-op.
    pub fn add_layer(&self, layer: &Layer) {
        let mut state = self.state.borrow_mut();
        if state.removed || state.layers.contains(layer) {
            return;
        }
        state.layers.push(layer.clone());
    }

    /// Removes a layer. Returns `true` when it was present.
    pub fn remove_layer(&self, layer: &Layer) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.layers.len();
        state.layers.retain(|l| l != layer);
        state.layers.len() != before
    }

    /// Whether the given layer is on this map.
    #[must_use]
    pub fn has_layer(&self, layer: &Layer) -> bool {
        self.state.borrow().layers.contains(layer)
    }

    /// Adds a rectangle shape and returns its id.
    pub fn add_rectangle(&self, bounds: LatLngBounds, options: RectangleOptions) -> RectangleId {
        let mut state = self.state.borrow_mut();
        let id = RectangleId(state.next_rectangle);
        state.next_rectangle += 1;
        if !state.removed {
            state.rectangles.push((id, Rectangle { bounds, options }));
        }
        id
    }

    /// Replaces a rectangle's bounds. Returns `false` for unknown ids.
    pub fn set_rectangle_bounds(&self, id: RectangleId, bounds: LatLngBounds) -> bool {
        let mut state = self.state.borrow_mut();
        match state.rectangles.iter_mut().find(|(rid, _)| *rid == id) {
            Some((_, rect)) => {
                rect.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// A snapshot of the rectangle with the given id, if it exists.
    #[must_use]
    pub fn rectangle(&self, id: RectangleId) -> Option<Rectangle> {
        self.state
            .borrow()
            .rectangles
            .iter()
            .find(|(rid, _)| *rid == id)
            .map(|(_, rect)| rect.clone())
    }

    /// Removes a rectangle. Returns `true` when it existed.
    pub fn remove_rectangle(&self, id: RectangleId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.rectangles.len();
        state.rectangles.retain(|(rid, _)| *rid != id);
        state.rectangles.len() != before
    }

    /// Subscribes a listener to the given event kinds.
    pub fn on(&self, kinds: EventKinds, listener: EventListener) -> SubscriptionId {
        let id = SubscriptionId(self.listeners.next_id.get());
        self.listeners.next_id.set(id.0 + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, kinds, listener));
        id
    }

    /// Removes a subscription. Returns `true` when it was registered.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut entries = self.listeners.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(sid, _, _)| *sid != id);
        entries.len() != before
    }

    /// Number of live subscriptions, for introspection and tests.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }

    /// Injects a pointer click at the given geographic point.
    ///
    /// The model performs no hit testing; input plumbing decides what
    /// was clicked and feeds it in here. Fires `Click`.
    pub fn fire_click(&self, point: LatLng) {
        if self.state.borrow().removed {
            return;
        }
        self.fire(&MapEvent::Click(point));
    }

    /// Destroys the map: drops layers, rectangles, and listeners, and
    /// turns every further operation into a no-op. Idempotent.
    pub fn remove(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.removed = true;
            state.layers.clear();
            state.rectangles.clear();
        }
        self.listeners.entries.borrow_mut().clear();
    }

    /// Dispatches to every listener subscribed to the event's kind.
    ///
    /// The registry is snapshotted first, so listeners may subscribe,
    /// unsubscribe, or mutate the map while the event is in flight.
    fn fire(&self, event: &MapEvent) {
        let kind = event.kind();
        let snapshot: Vec<EventListener> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .filter(|(_, kinds, _)| kinds.contains(kind))
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(self, event);
        }
    }
}
