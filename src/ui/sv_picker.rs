//! 2D saturation/value plane picker.

use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::color::Hsv;
use crate::gradient;
use crate::mapping;
use crate::ui::DragState;

const MARKER_RADIUS: f64 = 8.0;

/// Interactive saturation/value plane at the currently selected hue.
/// Emits (saturation, value) on every press and drag motion.
pub struct SvPicker {
    area: DrawingArea,
    colour: Rc<Cell<Hsv>>,
}

impl SvPicker {
    pub fn new(initial: Hsv, on_change: impl Fn(f64, f64) + 'static) -> Self {
        let area = DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);
        area.set_cursor_from_name(Some("crosshair"));

        let colour = Rc::new(Cell::new(initial));
        let raster: Rc<RefCell<Option<cairo::ImageSurface>>> =
            Rc::new(RefCell::new(None));
        // Hue the cached raster was rendered at. NAN forces the first build.
        let raster_hue = Rc::new(Cell::new(f64::NAN));

        let raster_resize = raster.clone();
        area.connect_resize(move |_, _, _| {
            raster_resize.borrow_mut().take();
        });

        let colour_draw = colour.clone();
        let raster_draw = raster.clone();
        let raster_hue_draw = raster_hue.clone();
        area.set_draw_func(move |_, cr, width, height| {
            let hsv = colour_draw.get();

            let stale = raster_draw.borrow().is_none() || raster_hue_draw.get() != hsv.h;
            if stale {
                *raster_draw.borrow_mut() =
                    gradient::sat_val_plane_surface(width, height, hsv.h);
                raster_hue_draw.set(hsv.h);
            }
            let Some(surface) = raster_draw.borrow().clone() else {
                return;
            };
            let _ = cr.set_source_surface(&surface, 0.0, 0.0);
            let _ = cr.paint();

            // Selection ring filled with the selected colour. The border
            // flips to white on the dark half of the plane.
            let (x, y) = mapping::sat_val_to_position(hsv.s, hsv.v, width, height);
            cr.arc(x, y, MARKER_RADIUS, 0.0, std::f64::consts::TAU);
            hsv.to_rgb().apply_to_cairo(cr);
            let _ = cr.fill_preserve();
            cr.set_line_width(2.0);
            if hsv.v > 0.5 {
                cr.set_source_rgba(0.0, 0.0, 0.0, 0.5);
            } else {
                cr.set_source_rgba(1.0, 1.0, 1.0, 0.5);
            }
            let _ = cr.stroke();
        });

        let on_change: Rc<dyn Fn(f64, f64)> = Rc::new(on_change);
        let drag_state = Rc::new(Cell::new(DragState::Idle));

        let gesture = GestureDrag::new();
        gesture.set_button(1);

        let drag_begin_state = drag_state.clone();
        let area_begin = area.clone();
        let on_change_begin = on_change.clone();
        gesture.connect_drag_begin(move |_, x, y| {
            drag_begin_state.set(DragState::Dragging);
            let (s, v) =
                mapping::position_to_sat_val(x, y, area_begin.width(), area_begin.height());
            on_change_begin(s, v);
        });

        let drag_update_state = drag_state.clone();
        let area_update = area.clone();
        let on_change_update = on_change.clone();
        gesture.connect_drag_update(move |gesture, offset_x, offset_y| {
            if drag_update_state.get() != DragState::Dragging {
                return;
            }
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let (s, v) = mapping::position_to_sat_val(
                start_x + offset_x,
                start_y + offset_y,
                area_update.width(),
                area_update.height(),
            );
            on_change_update(s, v);
        });

        let drag_end_state = drag_state.clone();
        gesture.connect_drag_end(move |_, _, _| {
            drag_end_state.set(DragState::Idle);
        });

        area.add_controller(gesture);

        Self { area, colour }
    }

    /// Update the displayed selection. A hue change makes the cached
    /// raster stale (the whole plane is hue-dependent) and the draw
    /// handler rebuilds it before the next paint; saturation and value
    /// changes only move the ring.
    pub fn set_colour(&self, hsv: Hsv) {
        if self.colour.get() == hsv {
            return;
        }
        self.colour.set(hsv);
        self.area.queue_draw();
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }
}
