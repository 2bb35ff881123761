//! Leptos Kebab Menus
//!
//! Exclusive dropdown menus for Leptos: at most one menu open per page,
//! closed by outside click or Escape, and repositioned on scroll/resize.
//! Panels use fixed positioning and flip above the trigger when the
//! viewport has no room below.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Menu identifier (usually the id of the row the menu belongs to)
pub type MenuId = u32;

/// Gap between trigger and panel
pub const PANEL_OFFSET_PX: f64 = 4.0;

/// Panel height assumed before the panel has been laid out
pub const ESTIMATED_PANEL_HEIGHT_PX: f64 = 200.0;

/// Open/closed state of every menu on a page.
///
/// Only one menu can be open, so the state is a single optional id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuRegistry {
    open: Option<MenuId>,
}

impl MenuRegistry {
    /// Close every other menu, then toggle `id`. Returns true if `id` is now open.
    pub fn toggle(&mut self, id: MenuId) -> bool {
        if self.open == Some(id) {
            self.open = None;
            false
        } else {
            self.open = Some(id);
            true
        }
    }

    /// Returns true if a menu was open
    pub fn close_all(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    /// Document-level click. `inside` is the menu whose trigger or panel
    /// contains the click target, if any.
    pub fn handle_document_click(&mut self, inside: Option<MenuId>) {
        match inside {
            Some(id) if self.open == Some(id) => {}
            _ => {
                self.close_all();
            }
        }
    }
}

/// Viewport-relative box, as returned by `getBoundingClientRect`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
            left: r.left(),
        }
    }
}

/// Fixed-position coordinates for a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

/// Place a panel relative to its trigger.
///
/// Below the trigger by default; above it only when the space below is
/// too small and the space above is large enough. The right edges are
/// aligned. A `panel_height` of zero means "not rendered yet".
pub fn place_panel(trigger: Rect, panel_width: f64, panel_height: f64, viewport_height: f64) -> Placement {
    let height = if panel_height > 0.0 { panel_height } else { ESTIMATED_PANEL_HEIGHT_PX };
    let space_below = viewport_height - trigger.bottom;
    let space_above = trigger.top;

    let top = if space_below < height && space_above > height {
        trigger.top - height - PANEL_OFFSET_PX
    } else {
        trigger.bottom + PANEL_OFFSET_PX
    };

    Placement {
        top,
        left: trigger.right - panel_width,
    }
}

/// Menu state signals shared by every menu on a page
#[derive(Clone, Copy)]
pub struct KebabSignals {
    pub registry: RwSignal<MenuRegistry>,
    /// Bumped on scroll/resize while a menu is open
    pub layout_tick: RwSignal<u32>,
}

impl KebabSignals {
    /// Tracked read, for use in views
    pub fn is_open(&self, id: MenuId) -> bool {
        self.registry.with(|r| r.is_open(id))
    }

    pub fn toggle(&self, id: MenuId) {
        self.registry.try_update(|r| r.toggle(id));
    }

    pub fn close_all(&self) {
        self.registry.try_update(|r| {
            r.close_all();
        });
    }
}

pub fn create_kebab_signals() -> KebabSignals {
    KebabSignals {
        registry: RwSignal::new(MenuRegistry::default()),
        layout_tick: RwSignal::new(0),
    }
}

/// Click handler for a menu's trigger button
pub fn make_on_trigger_click(kebab: KebabSignals, id: MenuId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        kebab.toggle(id);
    }
}

/// Click handler for a menu's panel; keeps the document listener from closing it
pub fn make_on_panel_click() -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    |ev: web_sys::MouseEvent| ev.stop_propagation()
}

/// Bind document click, Escape, scroll and resize listeners.
/// Call once per page.
pub fn bind_global_listeners(kebab: KebabSignals) {
    use wasm_bindgen::closure::Closure;

    let Some(win) = web_sys::window() else { return };

    // Trigger and panel clicks stop propagation, so anything reaching the
    // document is an outside click.
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        kebab.registry.try_update(|r| r.handle_document_click(None));
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            kebab.close_all();
        }
    });

    let on_layout = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let any_open = kebab
            .registry
            .try_with_untracked(|r| r.open_menu().is_some())
            .unwrap_or(false);
        if any_open {
            kebab.layout_tick.try_update(|t| *t = t.wrapping_add(1));
        }
    });

    if let Some(doc) = win.document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    // Capture phase so scrolling inside nested containers also repositions
    let _ = win.add_event_listener_with_callback_and_bool("scroll", on_layout.as_ref().unchecked_ref(), true);
    let _ = win.add_event_listener_with_callback("resize", on_layout.as_ref().unchecked_ref());

    on_click.forget();
    on_keydown.forget();
    on_layout.forget();
    log::debug!("[kebab] global listeners bound");
}

/// Measure trigger and panel and move the panel into place
pub fn position_panel(trigger: &web_sys::Element, panel: &web_sys::HtmlElement) {
    let Some(win) = web_sys::window() else { return };
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();

    let rect = Rect::from(&trigger.get_bounding_client_rect());
    let placement = place_panel(
        rect,
        f64::from(panel.offset_width()),
        f64::from(panel.offset_height()),
        viewport_height,
    );

    let style = panel.style();
    let _ = style.set_property("top", &format!("{}px", placement.top));
    let _ = style.set_property("left", &format!("{}px", placement.left));
}
