//! UI components for the portfolio page

pub mod block_renderer;
pub mod header;
pub mod page;
pub mod theme;
