//! ==============================================================================
//! lib.rs - floating tab bar for leptos
//! ==============================================================================
//!
//! purpose:
//!     a floating tab bar widget bound to a closed enumeration of tab items.
//!     renders page content behind a tappable tab strip, switches the visible
//!     page on click, and highlights the active tab with its tint color and
//!     a glow.
//!
//! relationships:
//!     - item.rs: the contract a tab enumeration implements (title/icon/tint)
//!     - color.rs: tint color values
//!     - selection.rs: the single piece of mutable state (active index)
//!     - style.rs: inline styles derived from tint + active state
//!     - components/: the leptos view layer
//!
//! design rationale:
//!     the tab set is closed and known at definition time, so the view is
//!     generic over the enumeration rather than dynamically dispatched.
//!     pages are produced by a callback invoked exactly once per case, which
//!     makes a page/tab count mismatch unrepresentable.
//!
//! ==============================================================================

pub mod color;
pub mod components;
pub mod item;
pub mod selection;
mod style;

pub use color::Color;
pub use components::FloatingTabView;
pub use item::FloatingTabItem;
pub use selection::Selection;
