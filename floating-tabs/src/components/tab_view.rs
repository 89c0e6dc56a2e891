//! Floating tab view component

use leptos::prelude::*;

use crate::components::tab_bar::tab_bar;
use crate::item::FloatingTabItem;
use crate::selection::Selection;
use crate::style;

/// A content region with a floating tab strip over its bottom edge.
///
/// Generic over the tab enumeration: the bar is built once from
/// `Item::ALL`, and `render_page` is invoked once per case, in the same
/// order, so every tab has exactly one page. All pages stay mounted; the
/// selection toggles which one is displayed.
///
/// ```ignore
/// view! {
///     <FloatingTabView<Tab> render_page=Callback::new(|tab: Tab| match tab {
///         Tab::Home => view! { <HomePage /> }.into_any(),
///         Tab::Search => view! { <SearchPage /> }.into_any(),
///     }) />
/// }
/// ```
#[component]
pub fn FloatingTabView<Item>(
    /// produces the content page for one tab case
    render_page: Callback<Item, AnyView>,
) -> impl IntoView
where
    Item: FloatingTabItem,
{
    let selected = RwSignal::new(Selection::new(Item::ALL.len()));

    let pages = Item::ALL
        .iter()
        .copied()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div
                    class="floating-tab-page"
                    style=move || style::page_style(selected.get().is_active(index))
                >
                    {render_page.run(item)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="floating-tab-view" style=style::container_style()>
            <div class="floating-tab-content">{pages}</div>
            {tab_bar::<Item>(selected)}
        </div>
    }
}
