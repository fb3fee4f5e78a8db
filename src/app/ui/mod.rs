pub mod form_panel;
pub mod result_panel;
pub mod status_bar;

pub use form_panel::render_form_panel;
pub use status_bar::render_status_bar;
