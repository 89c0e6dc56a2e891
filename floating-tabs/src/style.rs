//! Inline styles for the bar, its items and the content pages
//!
//! pure string builders so the active/inactive distinction stays testable
//! without a dom. geometry matches the look of the original floating bar:
//! a centered, rounded, translucent strip hovering over the content.

use crate::color::Color;

const BAR_HEIGHT_PX: u32 = 70;
const BAR_PADDING_PX: u32 = 15;
const BAR_CORNER_RADIUS_PX: u32 = 25;
const ITEM_WIDTH_PX: u32 = 60;
const ITEM_MARGIN_PX: f32 = 2.5;
const GLOW_RADIUS_PX: u32 = 25;
const ICON_WIDTH_PX: u32 = 20;
const ICON_HEIGHT_PX: u32 = 25;
const LABEL_SIZE_ACTIVE_PX: u32 = 14;
const LABEL_SIZE_PX: u32 = 13;

/// outer wrapper: content fills it, the bar floats above the bottom edge
pub(crate) fn container_style() -> &'static str {
    "position: relative; width: 100%; height: 100%;"
}

/// page wrapper: all pages stay mounted, only the active one is displayed
pub(crate) fn page_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

/// the floating strip itself
pub(crate) fn bar_style() -> String {
    format!(
        "position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); \
         display: flex; align-items: center; \
         height: {BAR_HEIGHT_PX}px; padding: 0 {BAR_PADDING_PX}px; \
         border-radius: {BAR_CORNER_RADIUS_PX}px; \
         background: rgba(250, 250, 250, 0.75); \
         backdrop-filter: blur(16px); -webkit-backdrop-filter: blur(16px); \
         box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);"
    )
}

/// one tappable item. inactive items keep the neutral foreground; the
/// active item takes its tint and a glow in the same tint.
pub(crate) fn item_style(tint: Color, active: bool) -> String {
    let color = if active {
        tint.css()
    } else {
        "inherit".to_string()
    };
    let glow = if active {
        format!(" filter: drop-shadow(0 0 {GLOW_RADIUS_PX}px {});", tint.css_alpha(0.9))
    } else {
        String::new()
    };
    format!(
        "display: flex; flex-direction: column; align-items: center; gap: 2px; \
         width: {ITEM_WIDTH_PX}px; margin: 0 {ITEM_MARGIN_PX}px; padding: 0; \
         border: none; background: none; cursor: pointer; \
         color: {color};{glow}"
    )
}

/// fixed icon box so items keep their width whatever the glyph
pub(crate) fn icon_style() -> String {
    format!(
        "width: {ICON_WIDTH_PX}px; height: {ICON_HEIGHT_PX}px; \
         display: flex; align-items: center; justify-content: center;"
    )
}

/// title under the icon: bolder and one point larger while active
pub(crate) fn label_style(active: bool) -> String {
    let (size, weight) = if active {
        (LABEL_SIZE_ACTIVE_PX, 700)
    } else {
        (LABEL_SIZE_PX, 400)
    };
    format!("font-size: {size}px; font-weight: {weight};")
}
