//! Main window: coloured background, control overlay, fullscreen and
//! persistence wiring.

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, Overlay};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgb;
use crate::config::AppConfig;
use crate::state::ColorState;
use crate::ui::ControlsPanel;

/// Build the main window around a fresh [`ColorState`] seeded from the
/// saved configuration.
pub fn build_window(app: &Application, config: Rc<RefCell<AppConfig>>) -> ApplicationWindow {
    let state = ColorState::new(config.borrow().colour());

    let window = ApplicationWindow::builder()
        .application(app)
        .title("hueboard")
        .default_width(config.borrow().window.width)
        .default_height(config.borrow().window.height)
        .build();

    // The selected colour fills the entire window; everything else is
    // overlaid on top of it.
    let background = DrawingArea::new();
    background.set_hexpand(true);
    background.set_vexpand(true);
    let state_draw = state.clone();
    background.set_draw_func(move |_, cr, width, height| {
        state_draw.rgb().apply_to_cairo(cr);
        cr.rectangle(0.0, 0.0, width as f64, height as f64);
        let _ = cr.fill();
    });

    let window_for_fullscreen = window.clone();
    let controls = ControlsPanel::new(&state, move || {
        window_for_fullscreen.fullscreen();
    });

    let overlay = Overlay::new();
    overlay.set_child(Some(&background));
    overlay.add_overlay(controls.widget());
    window.set_child(Some(&overlay));

    apply_contrast(&window, state.rgb());

    // Repaint, re-contrast, and persist on every colour change.
    let window_for_state = window.clone();
    let config_for_state = config.clone();
    state.subscribe(move |hsv, rgb| {
        background.queue_draw();
        apply_contrast(&window_for_state, rgb);

        config_for_state.borrow_mut().set_colour(hsv);
        if let Err(e) = config_for_state.borrow().save() {
            warn!("Failed to persist colour: {}", e);
        }
    });

    // Controls disappear while fullscreen, leaving only the colour.
    let controls_widget = controls.widget().clone();
    window.connect_fullscreened_notify(move |window| {
        controls_widget.set_visible(!window.is_fullscreen());
    });

    // Hiding the controls hides the fullscreen button with them, so
    // Escape is the way back out.
    let key_controller = gtk4::EventControllerKey::new();
    let window_for_key = window.clone();
    key_controller.connect_key_pressed(move |_, key, _code, _modifiers| {
        if key == gdk4::Key::Escape && window_for_key.is_fullscreen() {
            window_for_key.unfullscreen();
            return gtk4::glib::Propagation::Stop;
        }
        gtk4::glib::Propagation::Proceed
    });
    window.add_controller(key_controller);

    // Remember window geometry and mode for the next launch.
    let config_for_close = config.clone();
    window.connect_close_request(move |window| {
        {
            let mut cfg = config_for_close.borrow_mut();
            cfg.window.width = window.width();
            cfg.window.height = window.height();
            cfg.window.fullscreen_enabled = window.is_fullscreen();
        }
        if let Err(e) = config_for_close.borrow().save() {
            warn!("Failed to save configuration: {}", e);
        }
        gtk4::glib::Propagation::Proceed
    });

    window
}

fn apply_contrast(window: &ApplicationWindow, rgb: Rgb) {
    if rgb.is_dark() {
        window.add_css_class("on-dark");
        window.remove_css_class("on-light");
    } else {
        window.add_css_class("on-light");
        window.remove_css_class("on-dark");
    }
}
