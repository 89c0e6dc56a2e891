//! Floating bar of tappable tab items

use leptos::prelude::*;

use crate::item::FloatingTabItem;
use crate::selection::Selection;
use crate::style;

/// the strip of buttons, one per case of `Item`, in `ALL` order
pub(crate) fn tab_bar<Item>(selected: RwSignal<Selection>) -> impl IntoView
where
    Item: FloatingTabItem,
{
    view! {
        <nav class="floating-tab-bar" style=style::bar_style()>
            {Item::ALL
                .iter()
                .copied()
                .enumerate()
                .map(|(index, item)| bar_item(item, index, selected))
                .collect_view()}
        </nav>
    }
}

/// one icon-over-title button. tapping it activates its index, the only
/// state write in the crate.
fn bar_item<Item>(item: Item, index: usize, selected: RwSignal<Selection>) -> impl IntoView
where
    Item: FloatingTabItem,
{
    let active = move || selected.get().is_active(index);

    view! {
        <button
            class=move || if active() { "floating-tab-item active" } else { "floating-tab-item" }
            style=move || style::item_style(item.tint_color(), active())
            on:click=move |_| {
                selected.update(|sel| sel.tap(index));
                log::trace!("tab '{}' selected", item.title());
            }
        >
            <span class="floating-tab-icon material-symbols-rounded" style=style::icon_style()>
                {item.icon_name()}
            </span>
            <span class="floating-tab-label" style=move || style::label_style(active())>
                {item.title()}
            </span>
        </button>
    }
}
