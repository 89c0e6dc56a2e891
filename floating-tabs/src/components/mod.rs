//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod tab_bar;
mod tab_view;

pub use tab_view::FloatingTabView;
