//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Brand colors and text styling
//! - `tabs`: One renderer per page (home, roster, media, generic content)

pub mod input;
pub mod render;
pub mod styles;
pub mod tabs;
