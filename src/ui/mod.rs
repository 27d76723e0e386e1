//! GTK widgets and window composition.

mod controls;
mod hue_picker;
mod sv_picker;
mod window;

pub use controls::ControlsPanel;
pub use hue_picker::HuePicker;
pub use sv_picker::SvPicker;
pub use window::build_window;

/// Pointer interaction state shared by both picker surfaces.
///
/// A press moves a picker to `Dragging` and emits the pressed position
/// immediately, so a plain click jumps the selection; release returns to
/// `Idle`. Motion handlers only emit while `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragState {
    Idle,
    Dragging,
}
