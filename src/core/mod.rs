//! Content, page model and the interactive state behind the page

pub mod config;
pub mod content;
pub mod markup;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod tracker;
