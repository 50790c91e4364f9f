//! One renderer per screen region
//!
//! Each surface of the screen has its own renderer; `Display::render`
//! composes them in paint order.

pub mod dialog_renderer;
pub mod menu_renderer;
pub mod status_renderer;
pub mod text_renderer;
pub mod toolbar_renderer;

pub use dialog_renderer::DialogRenderer;
pub use menu_renderer::MenuRenderer;
pub use status_renderer::StatusRenderer;
pub use text_renderer::TextRenderer;
pub use toolbar_renderer::ToolbarRenderer;
