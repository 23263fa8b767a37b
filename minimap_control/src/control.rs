// Copyright 2026 the Minimap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use minimap_geo::LatLngBounds;
use minimap_map::{
    EventKinds, InteractionFlags, Layer, Map, MapEvent, MapOptions, RectangleId, SubscriptionId,
};
use smallvec::SmallVec;

use crate::chrome::{Attachable, Container, CornerPosition, ToggleButton};
use crate::error::ControlError;
use crate::options::ThumbnailMapOptions;

/// An overview map control.
///
/// `ThumbnailMap` attaches to a primary map viewport and renders a
/// small secondary viewport of the supplied layer, with an aiming
/// rectangle tracking the primary's visible extent. Clicking the
/// thumbnail pans the primary there; the control minimizes and
/// restores itself manually or, with
/// [`auto_toggle_display`](ThumbnailMapOptions::auto_toggle_display),
/// automatically from the geometric relationship between the two
/// viewports.
///
/// ```
/// use minimap_control::{ThumbnailMap, ThumbnailMapOptions};
/// use minimap_map::{Layer, Map, MapOptions};
/// use kurbo::Size;
///
/// let primary = Map::new(MapOptions {
///     size: Size::new(800.0, 600.0),
///     ..MapOptions::default()
/// });
/// let mut control = ThumbnailMap::new(Layer::new(), ThumbnailMapOptions::default());
/// control.add_to(&primary);
/// assert!(!control.is_minimized());
/// control.remove();
/// ```
#[derive(Debug)]
pub struct ThumbnailMap {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug)]
struct Inner {
    layer: Layer,
    options: ThumbnailMapOptions,
    primary: Option<Map>,
    thumbnail: Option<Map>,
    aiming_rect: Option<RectangleId>,
    container: Container,
    toggle_button: Option<ToggleButton>,
    subscriptions: SmallVec<[(Map, SubscriptionId); 3]>,
    minimized: bool,
    user_toggled: bool,
}

/// Builds a [`ThumbnailMap`], surfacing the one configuration error.
///
/// The layer is the only required ingredient; [`build`](Self::build)
/// fails with [`ControlError::MissingLayer`] without it, leaving no
/// partial state behind.
#[derive(Debug, Default)]
pub struct ThumbnailMapBuilder {
    layer: Option<Layer>,
    options: ThumbnailMapOptions,
}

impl ThumbnailMapBuilder {
    /// Creates a builder with default options and no layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the layer shown in the thumbnail viewport.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Replaces the control options wholesale.
    #[must_use]
    pub fn options(mut self, options: ThumbnailMapOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the control.
    ///
    /// # Errors
    ///
    /// [`ControlError::MissingLayer`] when no layer was supplied.
    pub fn build(self) -> Result<ThumbnailMap, ControlError> {
        let layer = self.layer.ok_or(ControlError::MissingLayer)?;
        Ok(ThumbnailMap::new(layer, self.options))
    }
}

impl ThumbnailMap {
    /// Starts building a control.
    #[must_use]
    pub fn builder() -> ThumbnailMapBuilder {
        ThumbnailMapBuilder::new()
    }

    /// Creates a control showing `layer` in its thumbnail viewport.
    ///
    /// `aiming_rect.interactive` is forced to `false`, whatever the
    /// caller set.
    #[must_use]
    pub fn new(layer: Layer, mut options: ThumbnailMapOptions) -> Self {
        options.aiming_rect.interactive = false;
        let container = Container::new(Size::new(options.width, options.height));
        Self {
            inner: Rc::new(RefCell::new(Inner {
                layer,
                options,
                primary: None,
                thumbnail: None,
                aiming_rect: None,
                container,
                toggle_button: None,
                subscriptions: SmallVec::new(),
                minimized: false,
                user_toggled: false,
            })),
        }
    }

    /// Attaches the control to a primary map.
    ///
    /// Creates the thumbnail viewport (non-interactive, no chrome,
    /// CRS inherited from the primary), adds the layer and the aiming
    /// rectangle, installs the event subscriptions, resolves the
    /// initial fit, and applies the initial visibility decision. A
    /// control that was already attached is detached first.
    pub fn add_to(&mut self, primary: &Map) {
        self.remove();

        let thumbnail = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            inner.minimized = false;
            inner.user_toggled = false;

            let width = inner.options.width;
            let height = inner.options.height;
            let mut container = Container::new(Size::new(width, height));
            container.disable_scroll_propagation();
            container.disable_click_propagation();
            inner.container = container;

            inner.toggle_button = inner
                .options
                .toggle_display
                .then(|| ToggleButton::new(inner.options.hide_text.clone()));

            let thumbnail = Map::new(MapOptions {
                size: Size::new(width, height),
                crs: primary.crs(),
                interaction: InteractionFlags::empty(),
                attribution_control: false,
                zoom_control: false,
                track_resize: false,
                ..MapOptions::default()
            });
            thumbnail.add_layer(&inner.layer);
            let rect = thumbnail.add_rectangle(primary.bounds(), inner.options.aiming_rect.clone());

            inner.thumbnail = Some(thumbnail.clone());
            inner.aiming_rect = Some(rect);
            inner.primary = Some(primary.clone());
            thumbnail
        };

        let weak = Rc::downgrade(&self.inner);
        let on_move = primary.on(
            EventKinds::MOVE,
            Rc::new(move |map, _| {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow().update_aiming_rect(map);
                }
            }),
        );

        let weak = Rc::downgrade(&self.inner);
        let on_settle = primary.on(
            EventKinds::MOVE_END | EventKinds::RESIZE,
            Rc::new(move |map, _| {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    let target = inner.decide_minimized(map);
                    inner.set_display(target);
                    if !inner.minimized {
                        inner.update_aiming_rect(map);
                    }
                }
            }),
        );

        let primary_handle = primary.clone();
        let on_click = thumbnail.on(
            EventKinds::CLICK,
            Rc::new(move |_, event| {
                if let MapEvent::Click(point) = event {
                    primary_handle.pan_to(*point);
                }
            }),
        );

        let fit = {
            let mut inner = self.inner.borrow_mut();
            inner.subscriptions.push((primary.clone(), on_move));
            inner.subscriptions.push((primary.clone(), on_settle));
            inner.subscriptions.push((thumbnail.clone(), on_click));

            match inner.options.thumbnail_bounds {
                Some(bounds) if bounds.is_valid() => bounds,
                _ => inner.layer.bounds().unwrap_or(LatLngBounds::WORLD),
            }
        };

        thumbnail.fit_bounds(&fit);
        // The thumbnail was created before the host laid it out at
        // full size; re-measure before judging visibility.
        thumbnail.invalidate_size();

        let mut inner = self.inner.borrow_mut();
        let target = inner.decide_minimized(primary);
        inner.set_display(target);
    }

    /// Detaches the control from its primary map.
    ///
    /// Unsubscribes every notification binding it installed (both
    /// primary bindings and the thumbnail click binding) and destroys
    /// the thumbnail viewport. Idempotent, and safe on a control that
    /// never completed attachment.
    pub fn remove(&mut self) {
        let mut inner = self.inner.borrow_mut();
        for (map, id) in inner.subscriptions.drain(..) {
            map.off(id);
        }
        if let Some(thumbnail) = inner.thumbnail.take() {
            thumbnail.remove();
        }
        inner.aiming_rect = None;
        inner.primary = None;
    }

    /// A handle to the thumbnail viewport while attached.
    #[must_use]
    pub fn thumbnail_map(&self) -> Option<Map> {
        self.inner.borrow().thumbnail.clone()
    }

    /// The id of the aiming rectangle on the thumbnail viewport,
    /// while attached.
    #[must_use]
    pub fn aiming_rect(&self) -> Option<RectangleId> {
        self.inner.borrow().aiming_rect
    }

    /// Whether the control is currently minimized.
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.inner.borrow().minimized
    }

    /// Minimizes the control.
    ///
    /// With a toggle button, the container shrinks to the button's
    /// natural size and the tooltip switches to the configured show
    /// text; without one, the container is hidden outright. The side
    /// effects run even when already minimized.
    pub fn minimize(&mut self) {
        self.inner.borrow_mut().minimize();
    }

    /// Restores the control to its configured size, or shows the
    /// container again. The side effects run even when already
    /// restored.
    pub fn restore(&mut self) {
        self.inner.borrow_mut().restore();
    }

    /// Minimizes when restored, restores when minimized.
    pub fn toggle_map(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.minimized {
            inner.restore();
        } else {
            inner.minimize();
        }
    }

    /// Host-input entry point for the toggle button.
    ///
    /// Records the manual override — automatic visibility decisions
    /// stop applying from here on — and toggles. No-op when the
    /// control has no toggle button.
    pub fn press_toggle_button(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.toggle_button.is_none() {
            return;
        }
        inner.user_toggled = true;
        if inner.minimized {
            inner.restore();
        } else {
            inner.minimize();
        }
    }

    /// A snapshot of the control's container state.
    #[must_use]
    pub fn container(&self) -> Container {
        self.inner.borrow().container.clone()
    }

    /// A snapshot of the toggle button, when one was created.
    #[must_use]
    pub fn toggle_button(&self) -> Option<ToggleButton> {
        self.inner.borrow().toggle_button.clone()
    }

    /// A copy of the control's effective options.
    #[must_use]
    pub fn options(&self) -> ThumbnailMapOptions {
        self.inner.borrow().options.clone()
    }

    /// The layer shown in the thumbnail viewport.
    #[must_use]
    pub fn layer(&self) -> Layer {
        self.inner.borrow().layer.clone()
    }
}

impl Attachable for ThumbnailMap {
    fn position(&self) -> CornerPosition {
        self.inner.borrow().options.position
    }

    fn on_add(&mut self, map: &Map) {
        self.add_to(map);
    }

    fn on_remove(&mut self) {
        self.remove();
    }
}

impl Inner {
    /// Sets the aiming rectangle to the primary's bounds at this
    /// moment. Runs regardless of visibility; updating a hidden
    /// rectangle is harmless.
    fn update_aiming_rect(&self, primary: &Map) {
        if let (Some(thumbnail), Some(rect)) = (&self.thumbnail, self.aiming_rect) {
            thumbnail.set_rectangle_bounds(rect, primary.bounds());
        }
    }

    /// The visibility decision.
    ///
    /// A manual toggle always wins. Under the automatic policy the
    /// control hides when it is redundant (the primary already shows
    /// everything the thumbnail shows) or irrelevant (no overlap at
    /// all), and shows for the useful partial-overlap middle.
    fn decide_minimized(&self, primary: &Map) -> bool {
        if self.user_toggled {
            return self.minimized;
        }
        if self.options.auto_toggle_display {
            if let Some(thumbnail) = &self.thumbnail {
                let main = primary.bounds();
                let thumb = thumbnail.bounds();
                let contains_all = main.contains(&thumb);
                let contains_none = !main.intersects(&thumb);
                return contains_all || contains_none;
            }
        }
        self.minimized
    }

    /// Applies a decision, transitioning only when the state differs.
    fn set_display(&mut self, minimize: bool) {
        if minimize != self.minimized {
            if self.minimized {
                self.restore();
            } else {
                self.minimize();
            }
        }
    }

    fn minimize(&mut self) {
        if let Some(button) = &mut self.toggle_button {
            self.container.set_size(ToggleButton::natural_size());
            button.set_minimized(true);
            button.set_tooltip(self.options.show_text.clone());
        } else {
            self.container.hide();
        }
        self.minimized = true;
    }

    fn restore(&mut self) {
        if let Some(button) = &mut self.toggle_button {
            self.container
                .set_size(Size::new(self.options.width, self.options.height));
            button.set_minimized(false);
            button.set_tooltip(self.options.hide_text.clone());
        } else {
            self.container.show();
        }
        self.minimized = false;
    }
}
