//! ==============================================================================
//! lib.rs - floating tabs demo
//! ==============================================================================
//!
//! purpose:
//!     leptos csr demo for the floating-tabs crate: four tabs ("One" through
//!     "Four") with distinct tints, each switching to its own content page.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - the tab enumeration lives here, the widget lives in floating-tabs
//!     - the host page loads an icon font so icon names resolve to glyphs
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use floating_tabs::{Color, FloatingTabItem, FloatingTabView};

mod pages;

use pages::{FourPage, OnePage, ThreePage, TwoPage};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("floating tabs demo starting");
    mount_to_body(App);
}

// ==============================================================================
// tab enumeration
// ==============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DemoTab {
    One,
    Two,
    Three,
    Four,
}

impl FloatingTabItem for DemoTab {
    const ALL: &'static [Self] = &[DemoTab::One, DemoTab::Two, DemoTab::Three, DemoTab::Four];

    fn title(&self) -> &'static str {
        match self {
            DemoTab::One => "One",
            DemoTab::Two => "Two",
            DemoTab::Three => "Three",
            DemoTab::Four => "Four",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            DemoTab::One => "counter_1",
            DemoTab::Two => "counter_2",
            DemoTab::Three => "counter_3",
            DemoTab::Four => "counter_4",
        }
    }

    fn tint_color(&self) -> Color {
        match self {
            DemoTab::One => Color::RED,
            DemoTab::Two => Color::BLUE,
            DemoTab::Three => Color::GREEN,
            DemoTab::Four => Color::YELLOW,
        }
    }
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    view! {
        <FloatingTabView<DemoTab> render_page=Callback::new(|tab: DemoTab| match tab {
            DemoTab::One => view! { <OnePage /> }.into_any(),
            DemoTab::Two => view! { <TwoPage /> }.into_any(),
            DemoTab::Three => view! { <ThreePage /> }.into_any(),
            DemoTab::Four => view! { <FourPage /> }.into_any(),
        }) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_tabs_order() {
        let titles: Vec<_> = DemoTab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_demo_tabs_unique() {
        let set: HashSet<_> = DemoTab::ALL.iter().collect();
        assert_eq!(set.len(), DemoTab::ALL.len());
    }

    #[test]
    fn test_demo_tints() {
        assert_eq!(DemoTab::One.tint_color(), Color::RED);
        assert_eq!(DemoTab::Four.tint_color(), Color::YELLOW);
    }
}
