//! 1D hue strip picker.

use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::color::hsv_to_rgb;
use crate::gradient;
use crate::mapping;
use crate::ui::DragState;

const STRIP_HEIGHT: i32 = 50;
const MARKER_WIDTH: f64 = 8.0;

/// Interactive hue strip: a full-saturation spectrum with a draggable
/// marker. Emits the new hue in [0, 1] on every press and drag motion.
pub struct HuePicker {
    area: DrawingArea,
    hue: Rc<Cell<f64>>,
}

impl HuePicker {
    pub fn new(initial_hue: f64, on_change: impl Fn(f64) + 'static) -> Self {
        let area = DrawingArea::new();
        area.set_content_height(STRIP_HEIGHT);
        area.set_hexpand(true);
        area.set_cursor_from_name(Some("pointer"));

        let hue = Rc::new(Cell::new(initial_hue));
        let raster: Rc<RefCell<Option<cairo::ImageSurface>>> =
            Rc::new(RefCell::new(None));

        // The spectrum depends only on the surface size, never on the
        // selected hue; a resize is the only thing that invalidates it.
        let raster_resize = raster.clone();
        area.connect_resize(move |_, _, _| {
            raster_resize.borrow_mut().take();
        });

        let hue_draw = hue.clone();
        let raster_draw = raster.clone();
        area.set_draw_func(move |_, cr, width, height| {
            if raster_draw.borrow().is_none() {
                *raster_draw.borrow_mut() = gradient::hue_strip_surface(width, height);
            }
            let Some(surface) = raster_draw.borrow().clone() else {
                return;
            };
            let _ = cr.set_source_surface(&surface, 0.0, 0.0);
            let _ = cr.paint();

            // Marker: a vertical bar at the hue position, filled with the
            // hue's own colour.
            let h = hue_draw.get();
            let x = mapping::fraction_to_position(h, width);
            let (r, g, b) = hsv_to_rgb(h, 1.0, 1.0);
            cr.rectangle(x - MARKER_WIDTH / 2.0, 0.0, MARKER_WIDTH, height as f64);
            cr.set_source_rgb(r, g, b);
            let _ = cr.fill_preserve();
            cr.set_line_width(1.5);
            cr.set_source_rgba(1.0, 1.0, 1.0, 0.6);
            let _ = cr.stroke();
        });

        let on_change: Rc<dyn Fn(f64)> = Rc::new(on_change);
        let drag_state = Rc::new(Cell::new(DragState::Idle));

        let gesture = GestureDrag::new();
        gesture.set_button(1);

        let drag_begin_state = drag_state.clone();
        let area_begin = area.clone();
        let on_change_begin = on_change.clone();
        gesture.connect_drag_begin(move |_, x, _| {
            drag_begin_state.set(DragState::Dragging);
            on_change_begin(mapping::position_to_fraction(x, area_begin.width()));
        });

        // The gesture grab keeps delivering offsets after the pointer
        // leaves the strip; the mapper clamps them back into [0, 1].
        let drag_update_state = drag_state.clone();
        let area_update = area.clone();
        let on_change_update = on_change.clone();
        gesture.connect_drag_update(move |gesture, offset_x, _| {
            if drag_update_state.get() != DragState::Dragging {
                return;
            }
            let Some((start_x, _)) = gesture.start_point() else {
                return;
            };
            on_change_update(mapping::position_to_fraction(
                start_x + offset_x,
                area_update.width(),
            ));
        });

        let drag_end_state = drag_state.clone();
        gesture.connect_drag_end(move |_, _, _| {
            drag_end_state.set(DragState::Idle);
        });

        area.add_controller(gesture);

        Self { area, hue }
    }

    /// Move the marker. Called by the state owner; the spectrum itself
    /// does not depend on the hue, so only a redraw is queued.
    pub fn set_hue(&self, hue: f64) {
        if self.hue.get() != hue {
            self.hue.set(hue);
            self.area.queue_draw();
        }
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }
}
