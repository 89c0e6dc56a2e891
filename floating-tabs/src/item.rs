//! ==============================================================================
//! item.rs - the tab item contract
//! ==============================================================================
//!
//! purpose:
//!     defines what a tab definition must supply: a stable, closed
//!     enumeration of cases plus a title, an icon name and a tint color for
//!     each case. the floating tab view is generic over this trait and reads
//!     [`FloatingTabItem::ALL`] once at construction to build its bar.
//!
//! ==============================================================================

use crate::color::Color;
use std::hash::Hash;

/// Contract for the enumeration driving a [`FloatingTabView`].
///
/// Implement this on a fieldless enum. `ALL` fixes the display order of the
/// bar, left to right; every case must appear exactly once. Icon names are
/// resolved by whatever ligature icon font the host page loads (material
/// symbols, for example), so they stay symbolic here.
///
/// [`FloatingTabView`]: crate::FloatingTabView
///
/// ```
/// use floating_tabs::{Color, FloatingTabItem};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// enum Tab {
///     Home,
///     Search,
/// }
///
/// impl FloatingTabItem for Tab {
///     const ALL: &'static [Self] = &[Tab::Home, Tab::Search];
///
///     fn title(&self) -> &'static str {
///         match self {
///             Tab::Home => "Home",
///             Tab::Search => "Search",
///         }
///     }
///
///     fn icon_name(&self) -> &'static str {
///         match self {
///             Tab::Home => "home",
///             Tab::Search => "search",
///         }
///     }
///
///     fn tint_color(&self) -> Color {
///         match self {
///             Tab::Home => Color::BLUE,
///             Tab::Search => Color::GREEN,
///         }
///     }
/// }
/// ```
pub trait FloatingTabItem: Copy + Eq + Hash + Send + Sync + 'static {
    /// every case, in bar display order. must not contain duplicates.
    const ALL: &'static [Self];

    /// display title shown under the icon
    fn title(&self) -> &'static str;

    /// symbolic icon name, resolved by the host page's icon font
    fn icon_name(&self) -> &'static str;

    /// tint applied to the item while it is active
    fn tint_color(&self) -> Color;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Fixture {
        One,
        Two,
        Three,
        Four,
    }

    impl FloatingTabItem for Fixture {
        const ALL: &'static [Self] = &[Fixture::One, Fixture::Two, Fixture::Three, Fixture::Four];

        fn title(&self) -> &'static str {
            match self {
                Fixture::One => "One",
                Fixture::Two => "Two",
                Fixture::Three => "Three",
                Fixture::Four => "Four",
            }
        }

        fn icon_name(&self) -> &'static str {
            match self {
                Fixture::One => "counter_1",
                Fixture::Two => "counter_2",
                Fixture::Three => "counter_3",
                Fixture::Four => "counter_4",
            }
        }

        fn tint_color(&self) -> Color {
            match self {
                Fixture::One => Color::RED,
                Fixture::Two => Color::BLUE,
                Fixture::Three => Color::GREEN,
                Fixture::Four => Color::YELLOW,
            }
        }
    }

    #[test]
    fn test_all_order_is_stable() {
        let titles: Vec<_> = Fixture::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_cases_are_unique() {
        let set: HashSet<_> = Fixture::ALL.iter().collect();
        assert_eq!(set.len(), Fixture::ALL.len());
    }

    #[test]
    fn test_per_case_fields() {
        assert_eq!(Fixture::Three.title(), "Three");
        assert_eq!(Fixture::Three.icon_name(), "counter_3");
        assert_eq!(Fixture::Three.tint_color(), Color::GREEN);
    }
}
