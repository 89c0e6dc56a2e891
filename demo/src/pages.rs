//! Demo content pages, one per tab

use leptos::prelude::*;

#[component]
pub fn OnePage() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"One"</h2>
            <p>"First page. Tap the items in the floating bar to switch pages."</p>
        </div>
    }
}

#[component]
pub fn TwoPage() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Two"</h2>
            <p>"Second page. The active item takes its tint color and a glow."</p>
        </div>
    }
}

#[component]
pub fn ThreePage() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Three"</h2>
            <p>"Third page. Every page stays mounted, only one is displayed."</p>
        </div>
    }
}

#[component]
pub fn FourPage() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Four"</h2>
            <p>"Fourth page. Tapping the active item again changes nothing."</p>
        </div>
    }
}
