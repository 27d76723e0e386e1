//! Control panel: picker surfaces, numeric channel fields, preset
//! swatches, and the fullscreen button.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, DrawingArea, Label, Orientation, SpinButton};

use crate::color::{Hsv, Rgb};
use crate::state::ColorState;
use crate::ui::{HuePicker, SvPicker};

/// Channel fields display on a 0-255 scale, matching the usual 8-bit
/// notation, while the colour state stays normalised.
const CHANNEL_MAX: f64 = 255.0;

const PRESETS: [(&str, Hsv); 5] = [
    ("White", Hsv { h: 0.0, s: 0.0, v: 1.0 }),
    ("Red", Hsv { h: 0.0, s: 1.0, v: 1.0 }),
    ("Blue", Hsv { h: 2.0 / 3.0, s: 1.0, v: 1.0 }),
    ("Green", Hsv { h: 1.0 / 3.0, s: 1.0, v: 1.0 }),
    ("Black", Hsv { h: 0.0, s: 0.0, v: 0.0 }),
];

/// The full control surface laid over the coloured background. Hidden
/// while the window is fullscreen.
pub struct ControlsPanel {
    root: GtkBox,
}

impl ControlsPanel {
    pub fn new(state: &ColorState, on_fullscreen: impl Fn() + 'static) -> Self {
        let root = GtkBox::new(Orientation::Horizontal, 24);
        root.set_margin_start(20);
        root.set_margin_end(20);
        root.set_margin_top(20);
        root.set_margin_bottom(20);

        let initial = state.get();

        // === Picker surfaces ===
        let hue_state = state.clone();
        let hue_picker = HuePicker::new(initial.h, move |h| {
            let current = hue_state.get();
            hue_state.set(Hsv::new(h, current.s, current.v));
        });

        let sv_state = state.clone();
        let sv_picker = SvPicker::new(initial, move |s, v| {
            let current = sv_state.get();
            sv_state.set(Hsv::new(current.h, s, v));
        });
        sv_picker.widget().set_content_height(320);

        let picker_box = GtkBox::new(Orientation::Vertical, 0);
        picker_box.set_width_request(420);
        picker_box.set_valign(gtk4::Align::Center);
        picker_box.add_css_class("picker-card");
        picker_box.append(hue_picker.widget());
        picker_box.append(sv_picker.widget());
        root.append(&picker_box);

        // === Numeric channel fields ===
        let fields_box = GtkBox::new(Orientation::Vertical, 12);
        fields_box.set_valign(gtk4::Align::Center);
        fields_box.set_hexpand(true);

        let (hsv_row, h_spin, s_spin, v_spin) =
            channel_row("hsv", ["Hue", "Saturation", "Value"]);
        let (rgb_row, r_spin, g_spin, b_spin) = channel_row("rgb", ["Red", "Green", "Blue"]);
        fields_box.append(&hsv_row);
        fields_box.append(&rgb_row);

        set_channel_fields(&[&h_spin, &s_spin, &v_spin], initial.to_array());
        let rgb = initial.to_rgb();
        set_channel_fields(&[&r_spin, &g_spin, &b_spin], [rgb.r, rgb.g, rgb.b]);

        // Editing any HSV field replaces the triple directly.
        for spin in [&h_spin, &s_spin, &v_spin] {
            let state = state.clone();
            let (h, s, v) = (h_spin.clone(), s_spin.clone(), v_spin.clone());
            spin.connect_value_changed(move |_| {
                state.set(Hsv::new(
                    h.value() / CHANNEL_MAX,
                    s.value() / CHANNEL_MAX,
                    v.value() / CHANNEL_MAX,
                ));
            });
        }

        // Editing any RGB field converts the whole triple back to HSV,
        // which becomes the new canonical state.
        for spin in [&r_spin, &g_spin, &b_spin] {
            let state = state.clone();
            let (r, g, b) = (r_spin.clone(), g_spin.clone(), b_spin.clone());
            spin.connect_value_changed(move |_| {
                state.set_rgb(Rgb::new(
                    r.value() / CHANNEL_MAX,
                    g.value() / CHANNEL_MAX,
                    b.value() / CHANNEL_MAX,
                ));
            });
        }

        // === Preset swatches ===
        let swatch_row = GtkBox::new(Orientation::Horizontal, 10);
        swatch_row.set_halign(gtk4::Align::Center);
        for (title, preset) in PRESETS {
            let button = swatch_button(title, preset.to_rgb());
            let state = state.clone();
            button.connect_clicked(move |_| state.set(preset));
            swatch_row.append(&button);
        }

        let random_button = Button::with_label("?");
        random_button.set_size_request(40, 40);
        random_button.add_css_class("swatch");
        random_button.set_tooltip_text(Some("Random"));
        let random_state = state.clone();
        random_button.connect_clicked(move |_| random_state.set(Hsv::random()));
        swatch_row.append(&random_button);

        fields_box.append(&swatch_row);
        root.append(&fields_box);

        // === Fullscreen ===
        let fullscreen_button = Button::from_icon_name("view-fullscreen-symbolic");
        fullscreen_button.set_tooltip_text(Some("Fullscreen"));
        fullscreen_button.set_valign(gtk4::Align::Center);
        fullscreen_button.set_size_request(72, 72);
        fullscreen_button.add_css_class("swatch");
        fullscreen_button.connect_clicked(move |_| on_fullscreen());
        root.append(&fullscreen_button);

        // Reflect every accepted state change back into the widgets. The
        // state owner drops the echoes these set_value calls produce.
        state.subscribe(move |hsv, rgb| {
            hue_picker.set_hue(hsv.h);
            sv_picker.set_colour(hsv);
            set_channel_fields(&[&h_spin, &s_spin, &v_spin], hsv.to_array());
            set_channel_fields(&[&r_spin, &g_spin, &b_spin], [rgb.r, rgb.g, rgb.b]);
        });

        Self { root }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }
}

fn set_channel_fields(spins: &[&SpinButton; 3], fractions: [f64; 3]) {
    for (spin, fraction) in spins.iter().zip(fractions) {
        spin.set_value((fraction * CHANNEL_MAX).round());
    }
}

fn channel_row(
    title: &str,
    channel_names: [&str; 3],
) -> (GtkBox, SpinButton, SpinButton, SpinButton) {
    let row = GtkBox::new(Orientation::Horizontal, 10);
    let label = Label::new(Some(title));
    label.set_width_chars(4);
    row.append(&label);

    let make_spin = |name: &str| {
        // The declared range clamps typed entry; out-of-range input
        // never reaches the colour state.
        let spin = SpinButton::with_range(0.0, CHANNEL_MAX, 1.0);
        spin.set_digits(0);
        spin.set_tooltip_text(Some(name));
        spin.set_hexpand(true);
        spin
    };
    let [first, second, third] = channel_names.map(make_spin);
    row.append(&first);
    row.append(&second);
    row.append(&third);

    (row, first, second, third)
}

fn swatch_button(title: &str, colour: Rgb) -> Button {
    let button = Button::new();
    button.set_size_request(40, 40);
    button.add_css_class("swatch");
    button.set_tooltip_text(Some(title));

    let swatch = DrawingArea::new();
    swatch.set_content_width(24);
    swatch.set_content_height(24);
    swatch.set_draw_func(move |_, cr, width, height| {
        let radius = width.min(height) as f64 / 2.0;
        cr.arc(
            width as f64 / 2.0,
            height as f64 / 2.0,
            radius,
            0.0,
            std::f64::consts::TAU,
        );
        colour.apply_to_cairo(cr);
        let _ = cr.fill_preserve();
        cr.set_line_width(1.0);
        cr.set_source_rgba(0.0, 0.0, 0.0, 0.3);
        let _ = cr.stroke();
    });
    button.set_child(Some(&swatch));

    button
}
