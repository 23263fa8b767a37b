// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use minimap_geo::LatLng;

use crate::Map;

bitflags::bitflags! {
    /// Which notification kinds a subscription receives.
    ///
    /// Kinds may be combined, so one listener can serve several
    /// events — for example `MOVE_END | RESIZE` for a "viewport
    /// settled" handler.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EventKinds: u8 {
        /// Continuous movement; fires for every intermediate change.
        const MOVE = 1 << 0;
        /// Movement finished; the viewport has settled.
        const MOVE_END = 1 << 1;
        /// The viewport's pixel size changed or was re-measured.
        const RESIZE = 1 << 2;
        /// A pointer click, delivered with its geographic position.
        const CLICK = 1 << 3;
    }
}

/// A notification emitted by a [`Map`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    /// The viewport moved (center or zoom changed).
    Move,
    /// The viewport finished moving.
    MoveEnd,
    /// The viewport was resized or re-measured.
    Resize,
    /// The viewport was clicked at the given geographic point.
    Click(LatLng),
}

impl MapEvent {
    /// The subscription kind this event is delivered under.
    #[must_use]
    pub fn kind(&self) -> EventKinds {
        match self {
            Self::Move => EventKinds::MOVE,
            Self::MoveEnd => EventKinds::MOVE_END,
            Self::Resize => EventKinds::RESIZE,
            Self::Click(_) => EventKinds::CLICK,
        }
    }
}

/// Identifies one listener registration on one [`Map`].
///
/// Ids are never reused by the issuing map, so a stale id passed to
/// [`Map::off`] is simply reported as not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// A listener invoked synchronously when a subscribed event fires.
///
/// Listeners receive the emitting map, so they can read its state at
/// the moment of the event without capturing a second handle.
pub type EventListener = Rc<dyn Fn(&Map, &MapEvent)>;
