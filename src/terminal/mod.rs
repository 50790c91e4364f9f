pub mod capabilities;
pub mod color;
pub mod display;
pub mod event_handler;
pub mod events;
pub mod raw;
pub mod render;
pub mod renderers;
pub mod theme;
