// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap Map: a headless model of an addressable map viewport.
//!
//! ## Overview
//!
//! This crate models the capability the Minimap control consumes from a
//! map engine: a viewport with geographic [`bounds`](Map::bounds), a
//! zoom level, [fit-to-bounds](Map::fit_bounds) and pan operations, and
//! typed move/move-end/resize/click notifications with explicit
//! subscription handles.
//!
//! It does **not** render anything. There is no tile loading, no DOM,
//! and no hit testing — [`Map`] is a state machine over a center, a
//! zoom, and a pixel size, the same way a headless camera model tracks
//! pan and zoom without owning a scene graph. Hosts that do render are
//! expected to treat this state as authoritative and feed input back in
//! through operations such as [`Map::pan_by`] and [`Map::fire_click`].
//!
//! ## Sharing and events
//!
//! [`Map`] is a cheap clonable handle over interior state. Listeners
//! registered with [`Map::on`] fire synchronously, in subscription
//! order, and receive the map handle along with the event; the listener
//! list is snapshotted before dispatch so a handler may mutate the map
//! or the registry re-entrantly.
//!
//! ```
//! use kurbo::Size;
//! use minimap_geo::LatLng;
//! use minimap_map::{EventKinds, Map, MapOptions};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let map = Map::new(MapOptions {
//!     size: Size::new(800.0, 600.0),
//!     ..MapOptions::default()
//! });
//! map.set_view(LatLng::new(0.0, 0.0), 3.0);
//!
//! let moves = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&moves);
//! map.on(EventKinds::MOVE_END, Rc::new(move |_, _| seen.set(seen.get() + 1)));
//!
//! map.pan_to(LatLng::new(10.0, 20.0));
//! assert_eq!(moves.get(), 1);
//! assert_eq!(map.center(), LatLng::new(10.0, 20.0));
//! ```
//!
//! ## Coordinates
//!
//! Projection exists only to derive bounds and pixel offsets. The
//! stored center is authoritative and never round-tripped through the
//! projection, so out-of-range centers (for example longitude −182)
//! survive verbatim; wraparound is a host concern.

mod crs;
mod events;
mod layer;
mod map;
mod shape;

pub use crs::{Crs, MAX_MERCATOR_LAT};
pub use events::{EventKinds, EventListener, MapEvent, SubscriptionId};
pub use layer::Layer;
pub use map::{Map, MapOptions};
pub use shape::{InteractionFlags, Rectangle, RectangleId, RectangleOptions};

#[cfg(test)]
mod tests;
