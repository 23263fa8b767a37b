// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Size, Vec2};
use minimap_geo::{LatLng, LatLngBounds};

use crate::{Crs, EventKinds, Layer, Map, MapEvent, MapOptions, RectangleOptions};

fn simple_map(width: f64, height: f64) -> Map {
    Map::new(MapOptions {
        size: Size::new(width, height),
        crs: Crs::Simple,
        ..MapOptions::default()
    })
}

fn bounds(s: f64, w: f64, n: f64, e: f64) -> LatLngBounds {
    LatLngBounds::new(LatLng::new(s, w), LatLng::new(n, e))
}

#[test]
fn bounds_derive_from_center_zoom_and_size() {
    let map = simple_map(100.0, 100.0);
    map.set_view(LatLng::new(0.0, 0.0), 1.0);

    // 100 px at scale 2 covers 50 world units, 25 on each side.
    assert!(map.bounds().approx_eq(&bounds(-25.0, -25.0, 25.0, 25.0), 1e-9));
}

#[test]
fn fit_bounds_picks_the_largest_integer_zoom_that_fits() {
    let map = simple_map(150.0, 150.0);

    // 30x15 degrees in 150 px: fits at zoom 2 (x4), not zoom 3 (x8).
    map.fit_bounds(&bounds(-25.0, -10.0, 5.0, 5.0));
    assert_eq!(map.zoom(), 2.0);
    assert!(map
        .bounds()
        .approx_eq(&bounds(-28.75, -21.25, 8.75, 16.25), 1e-9));

    // 10x10 degrees: fits at zoom 3 (x8 = 80 px), not zoom 4.
    map.fit_bounds(&bounds(-5.0, -5.0, 5.0, 5.0));
    assert_eq!(map.zoom(), 3.0);
    assert!(map
        .bounds()
        .approx_eq(&bounds(-9.375, -9.375, 9.375, 9.375), 1e-9));
}

#[test]
fn fit_world_clamps_to_minimum_zoom_when_nothing_fits() {
    let map = simple_map(150.0, 150.0);
    map.fit_world();

    // The 360-degree world cannot fit in 150 px even at zoom 0.
    assert_eq!(map.zoom(), 0.0);
    assert!(map.bounds().approx_eq(&bounds(-75.0, -75.0, 75.0, 75.0), 1e-9));
}

#[test]
fn fit_bounds_ignores_invalid_bounds() {
    let map = simple_map(100.0, 100.0);
    map.set_view(LatLng::new(3.0, 4.0), 2.0);
    map.fit_bounds(&bounds(1.0, 1.0, 1.0, 1.0));
    assert_eq!(map.center(), LatLng::new(3.0, 4.0));
    assert_eq!(map.zoom(), 2.0);
}

#[test]
fn pan_to_keeps_out_of_range_points_verbatim() {
    let map = simple_map(100.0, 100.0);
    map.set_view(LatLng::new(0.0, 0.0), 1.0);
    map.pan_to(LatLng::new(-182.0, -2.0));
    assert_eq!(map.center(), LatLng::new(-182.0, -2.0));
}

#[test]
fn pan_by_converts_pixels_to_degrees_at_the_current_zoom() {
    let map = simple_map(100.0, 100.0);
    map.set_view(LatLng::new(0.0, 0.0), 1.0);
    map.pan_by(Vec2::new(10.0, 10.0));

    // 10 px at scale 2 is 5 world units; world y grows southward.
    let center = map.center();
    assert!((center.lat - -5.0).abs() < 1e-9);
    assert!((center.lng - 5.0).abs() < 1e-9);
}

#[test]
fn a_pan_fires_one_move_and_one_move_end() {
    let map = simple_map(100.0, 100.0);
    let moves = Rc::new(Cell::new(0));
    let ends = Rc::new(Cell::new(0));

    let seen = Rc::clone(&moves);
    map.on(EventKinds::MOVE, Rc::new(move |_, _| seen.set(seen.get() + 1)));
    let seen = Rc::clone(&ends);
    map.on(EventKinds::MOVE_END, Rc::new(move |_, _| seen.set(seen.get() + 1)));

    map.pan_by(Vec2::new(10.0, 10.0));
    assert_eq!(moves.get(), 1);
    assert_eq!(ends.get(), 1);
}

#[test]
fn listeners_fire_in_subscription_order() {
    let map = simple_map(100.0, 100.0);
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        map.on(EventKinds::MOVE_END, Rc::new(move |_, _| order.borrow_mut().push(tag)));
    }

    map.pan_to(LatLng::new(1.0, 1.0));
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn listeners_observe_the_bounds_at_the_moment_of_the_event() {
    let map = simple_map(100.0, 100.0);
    let observed = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&observed);
    map.on(
        EventKinds::MOVE,
        Rc::new(move |map, _| *slot.borrow_mut() = Some(map.bounds())),
    );

    map.set_view(LatLng::new(0.0, 0.0), 1.0);
    let seen = observed.borrow().expect("move listener ran");
    assert!(seen.approx_eq(&map.bounds(), 1e-9));
}

#[test]
fn off_removes_exactly_the_given_subscription() {
    let map = simple_map(100.0, 100.0);
    let count = Rc::new(Cell::new(0));

    let seen = Rc::clone(&count);
    let keep = map.on(EventKinds::MOVE_END, Rc::new(move |_, _| seen.set(seen.get() + 1)));
    let drop_me = map.on(EventKinds::MOVE_END, Rc::new(|_, _| panic!("unsubscribed listener ran")));

    assert!(map.off(drop_me));
    assert!(!map.off(drop_me));
    map.pan_to(LatLng::new(1.0, 1.0));
    assert_eq!(count.get(), 1);

    assert!(map.off(keep));
    assert_eq!(map.listener_count(), 0);
}

#[test]
fn a_combined_subscription_serves_move_end_and_resize() {
    let map = simple_map(100.0, 100.0);
    let count = Rc::new(Cell::new(0));

    let seen = Rc::clone(&count);
    map.on(
        EventKinds::MOVE_END | EventKinds::RESIZE,
        Rc::new(move |_, _| seen.set(seen.get() + 1)),
    );

    map.pan_to(LatLng::new(1.0, 1.0));
    map.invalidate_size();
    assert_eq!(count.get(), 2);
}

#[test]
fn clicks_deliver_their_geographic_point() {
    let map = simple_map(100.0, 100.0);
    let clicked = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&clicked);
    map.on(
        EventKinds::CLICK,
        Rc::new(move |_, event| {
            if let MapEvent::Click(point) = event {
                *slot.borrow_mut() = Some(*point);
            }
        }),
    );

    map.fire_click(LatLng::new(2.0, -3.0));
    assert_eq!(*clicked.borrow(), Some(LatLng::new(2.0, -3.0)));
}

#[test]
fn layers_are_tracked_by_identity() {
    let map = simple_map(100.0, 100.0);
    let layer = Layer::new();

    map.add_layer(&layer);
    map.add_layer(&layer);
    assert!(map.has_layer(&layer));
    assert!(!map.has_layer(&Layer::new()));

    assert!(map.remove_layer(&layer));
    assert!(!map.remove_layer(&layer));
}

#[test]
fn rectangles_live_and_die_with_the_map() {
    let map = simple_map(100.0, 100.0);
    let id = map.add_rectangle(bounds(0.0, 0.0, 1.0, 1.0), RectangleOptions::default());

    assert!(map.set_rectangle_bounds(id, bounds(0.0, 0.0, 2.0, 2.0)));
    let rect = map.rectangle(id).expect("rectangle exists");
    assert_eq!(rect.bounds(), bounds(0.0, 0.0, 2.0, 2.0));

    map.remove();
    assert!(map.rectangle(id).is_none());
    assert!(!map.set_rectangle_bounds(id, bounds(0.0, 0.0, 1.0, 1.0)));
}

#[test]
fn removed_maps_are_inert() {
    let map = simple_map(100.0, 100.0);
    map.on(EventKinds::MOVE, Rc::new(|_, _| panic!("listener on a removed map ran")));

    map.remove();
    map.remove(); // idempotent
    assert!(map.is_removed());
    assert_eq!(map.listener_count(), 0);

    let center = map.center();
    map.pan_to(LatLng::new(5.0, 5.0));
    map.fire_click(LatLng::new(1.0, 1.0));
    assert_eq!(map.center(), center);
}

#[test]
fn zoom_is_clamped_into_the_configured_range() {
    let map = Map::new(MapOptions {
        size: Size::new(100.0, 100.0),
        crs: Crs::Simple,
        min_zoom: 1.0,
        max_zoom: 5.0,
        ..MapOptions::default()
    });
    map.set_view(LatLng::new(0.0, 0.0), 9.0);
    assert_eq!(map.zoom(), 5.0);
    map.set_view(LatLng::new(0.0, 0.0), 0.0);
    assert_eq!(map.zoom(), 1.0);
}
