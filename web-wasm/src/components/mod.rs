pub mod header;
pub mod image_picker;
pub mod upload_button;
pub mod result_panel;
