//! ==============================================================================
//! selection.rs - the active tab index
//! ==============================================================================
//!
//! purpose:
//!     the only mutable state in the crate: which tab is active, bounded by
//!     the number of tabs it was created for. the view keeps one of these in
//!     a signal and writes it exclusively from tab clicks.
//!
//! ==============================================================================

/// active-tab state for one floating tab view instance.
///
/// invariant: `index < count` whenever `count > 0`. a freshly constructed
/// selection starts at index 0. out-of-range taps are ignored rather than
/// trusted, so the invariant holds no matter what index a caller hands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    /// initial state for `count` tabs, with tab 0 active
    pub fn new(count: usize) -> Selection {
        Selection { index: 0, count }
    }

    /// zero-based index of the active tab
    pub fn index(&self) -> usize {
        self.index
    }

    /// number of tabs this selection is bounded by
    pub fn count(&self) -> usize {
        self.count
    }

    /// whether the tab at `index` is the active one
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// activate the tab at `index`. out-of-range indices leave the
    /// selection untouched.
    pub fn tap(&mut self, index: usize) {
        if index < self.count {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Selection::new(4).index(), 0);
    }

    #[test]
    fn test_tap_selects_index() {
        let mut sel = Selection::new(4);
        for i in 0..4 {
            sel.tap(i);
            assert_eq!(sel.index(), i);
        }
    }

    #[test]
    fn test_tap_active_is_idempotent() {
        let mut sel = Selection::new(4);
        sel.tap(2);
        let before = sel;
        sel.tap(2);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_out_of_range_tap_ignored() {
        let mut sel = Selection::new(4);
        sel.tap(2);
        sel.tap(4);
        sel.tap(usize::MAX);
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn test_single_tab_is_noop() {
        let mut sel = Selection::new(1);
        sel.tap(0);
        assert_eq!(sel.index(), 0);
        assert!(sel.is_active(0));
    }

    #[test]
    fn test_zero_tabs_stay_at_zero() {
        let mut sel = Selection::new(0);
        sel.tap(0);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut sel = Selection::new(5);
        for tapped in 0..5 {
            sel.tap(tapped);
            let active = (0..5).filter(|&i| sel.is_active(i)).count();
            assert_eq!(active, 1);
            assert!(sel.is_active(tapped));
        }
    }
}
