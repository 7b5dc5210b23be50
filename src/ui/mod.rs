//! Dashboard UI
//!
//! Layout declaration and HTML rendering for the single dashboard page.

mod layout;
mod page;

pub use layout::{Component, DropdownOption, Layout, LayoutError, LayoutSettings};
pub use page::{render_page, PageOptions};
