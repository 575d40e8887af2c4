//! SelectFilter widget: filterable multi-select checklist.
//!
//! Owns a set of options, their checked state, and a live text filter.
//! Selection is keyed by option *value*, never by row position or render
//! identity, which is what lets a refresh with a new option set preserve
//! the selections that survive it.

use std::collections::HashMap;

use bellboard_types::error::Result;
use bellboard_types::option::SelectOption;

use crate::context::DrawContext;
use crate::fuzzy::fuzzy_match;
use crate::input_field::InputField;
use crate::widget::Widget;

/// Placeholder row drawn when the option set is empty.
const NO_OPTIONS_TEXT: &str = "No options available.";

/// A filterable multi-select checklist.
///
/// Visibility is derived on read from the current filter; it is never
/// stored. A hidden option keeps whatever checked state it had, and the
/// bulk operations only touch visible rows.
pub struct SelectFilter {
    options: Vec<SelectOption>,
    /// Checked state keyed by option value. Invariant: holds exactly one
    /// entry per current option.
    checked: HashMap<String, bool>,
    /// The search box; its text *is* the filter state.
    pub search: InputField,
    collapsed: bool,
    pending_change: bool,
}

impl SelectFilter {
    /// Create a widget over an initial option set. `default_checked`
    /// applies to every initial option; refreshes never consult it.
    pub fn new(options: Vec<SelectOption>, default_checked: bool, default_hidden: bool) -> Self {
        let checked = options
            .iter()
            .map(|o| (o.value.clone(), default_checked))
            .collect();
        let mut search = InputField::new();
        search.placeholder = "Filter...".to_string();
        Self {
            options,
            checked,
            search,
            collapsed: default_hidden,
            pending_change: false,
        }
    }

    /// Replace the option set, preserving checked state for survivors.
    ///
    /// The new set starts all-unchecked; values that were checked before
    /// and still exist are re-checked. Newly introduced options are
    /// unchecked regardless of the construction-time default.
    pub fn refresh(&mut self, new_options: Vec<SelectOption>) {
        let survivors: Vec<String> = self.checked_values();

        self.checked = new_options
            .iter()
            .map(|o| (o.value.clone(), false))
            .collect();
        self.options = new_options;

        for value in survivors {
            if let Some(entry) = self.checked.get_mut(&value) {
                *entry = true;
            }
        }
    }

    /// Check every currently visible option. Hidden options are untouched.
    pub fn check_all_visible(&mut self) {
        self.set_visible(true);
    }

    /// Uncheck every currently visible option. Hidden options are untouched.
    pub fn check_none_visible(&mut self) {
        self.set_visible(false);
    }

    fn set_visible(&mut self, checked: bool) {
        let filter = self.search.text.clone();
        for opt in &self.options {
            if fuzzy_match(&filter, &opt.label) {
                self.checked.insert(opt.value.clone(), checked);
            }
        }
        // One notification for the whole bulk operation.
        if !self.options.is_empty() {
            self.pending_change = true;
        }
    }

    /// Set the live filter text.
    pub fn set_filter(&mut self, text: &str) {
        self.search.set_text(text);
    }

    /// Reset the filter, clearing the search box's displayed text too.
    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    /// Current filter text.
    pub fn filter(&self) -> &str {
        &self.search.text
    }

    /// Flip whether the option area is rendered. Selection is unaffected.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether an option passes the current filter.
    pub fn is_visible(&self, option: &SelectOption) -> bool {
        fuzzy_match(&self.search.text, &option.label)
    }

    /// Number of options passing the current filter.
    pub fn visible_count(&self) -> usize {
        self.options.iter().filter(|o| self.is_visible(o)).count()
    }

    /// Checked state of one value; unknown values read as unchecked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.get(value).copied().unwrap_or(false)
    }

    /// Set one option's checked state. Returns false if the value is not
    /// in the current option set.
    pub fn set_checked(&mut self, value: &str, checked: bool) -> bool {
        match self.checked.get_mut(value) {
            Some(entry) => {
                *entry = checked;
                self.pending_change = true;
                true
            },
            None => false,
        }
    }

    /// Checked values in option-set order, regardless of visibility.
    pub fn checked_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| self.is_checked(&o.value))
            .map(|o| o.value.clone())
            .collect()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Take the pending change notification, if any. Bulk operations and
    /// individual toggles raise it once; reading clears it.
    pub fn take_change(&mut self) -> bool {
        std::mem::take(&mut self.pending_change)
    }
}

impl Widget for SelectFilter {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        if self.collapsed {
            return (available_w, 0);
        }
        let rows = if self.options.is_empty() {
            1
        } else {
            self.visible_count() as u32
        };
        (available_w, rows.max(1) * ctx.theme.row_height)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, _w: u32, _h: u32) -> Result<()> {
        if self.collapsed {
            return Ok(());
        }

        if self.options.is_empty() {
            return ctx.label_styled(
                NO_OPTIONS_TEXT,
                x,
                y,
                ctx.theme.font_size_md,
                ctx.theme.text_disabled,
            );
        }

        let row_h = ctx.theme.row_height;
        let box_size = ctx.theme.checkbox_size;
        let mut row_y = y;
        for opt in &self.options {
            if !self.is_visible(opt) {
                continue;
            }

            // Checkbox glyph: outline, filled when checked.
            let box_y = row_y + ((row_h - box_size) / 2) as i32;
            ctx.backend
                .stroke_rect(x, box_y, box_size, box_size, 1, ctx.theme.border_subtle)?;
            if self.is_checked(&opt.value) {
                ctx.backend.fill_rect(
                    x + 2,
                    box_y + 2,
                    box_size.saturating_sub(4),
                    box_size.saturating_sub(4),
                    ctx.theme.accent,
                )?;
            }

            ctx.label(&opt.label, x + box_size as i32 + 6, row_y + 3)?;
            row_y += row_h as i32;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;
    use crate::theme::Theme;

    fn opts(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(v, l)| SelectOption::new(*v, *l))
            .collect()
    }

    #[test]
    fn new_applies_default_checked() {
        let w = SelectFilter::new(opts(&[("a", "Alpha"), ("b", "Beta")]), true, false);
        assert_eq!(w.checked_values(), vec!["a", "b"]);

        let w = SelectFilter::new(opts(&[("a", "Alpha")]), false, false);
        assert!(w.checked_values().is_empty());
    }

    #[test]
    fn new_honors_default_hidden() {
        let w = SelectFilter::new(vec![], false, true);
        assert!(w.is_collapsed());
        let w = SelectFilter::new(vec![], false, false);
        assert!(!w.is_collapsed());
    }

    #[test]
    fn refresh_preserves_survivors_by_value() {
        // Options a/b/c, check a and c, refresh to b/c: only c survives.
        let mut w = SelectFilter::new(
            opts(&[("a", "Alpha"), ("b", "Beta"), ("c", "Gamma")]),
            false,
            false,
        );
        w.set_checked("a", true);
        w.set_checked("c", true);

        w.refresh(opts(&[("b", "Beta"), ("c", "Gamma")]));
        assert_eq!(w.checked_values(), vec!["c"]);
    }

    #[test]
    fn refresh_is_intersection_of_selection_and_new_set() {
        let mut w = SelectFilter::new(
            opts(&[("1", "one"), ("2", "two"), ("3", "three"), ("4", "four")]),
            false,
            false,
        );
        w.set_checked("1", true);
        w.set_checked("3", true);
        w.set_checked("4", true);

        // New set reorders and drops "1".
        w.refresh(opts(&[("4", "four"), ("2", "two"), ("3", "three")]));
        // Order follows the new option set, not the old one.
        assert_eq!(w.checked_values(), vec!["4", "3"]);
    }

    #[test]
    fn refresh_new_options_start_unchecked_despite_default() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha")]), true, false);
        w.refresh(opts(&[("a", "Alpha"), ("z", "Zeta")]));
        // "a" survives checked, "z" is new and unchecked even though the
        // widget was constructed with default_checked = true.
        assert_eq!(w.checked_values(), vec!["a"]);
    }

    #[test]
    fn refresh_disjoint_set_drops_everything() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha"), ("b", "Beta")]), true, false);
        w.refresh(opts(&[("x", "Xi"), ("y", "Ypsilon")]));
        assert!(w.checked_values().is_empty());
    }

    #[test]
    fn refresh_drops_stale_selection_entries() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha")]), true, false);
        w.refresh(opts(&[("b", "Beta")]));
        // "a" is gone from the selection map entirely.
        assert!(!w.is_checked("a"));
        assert_eq!(w.checked.len(), 1);
    }

    #[test]
    fn check_all_visible_respects_filter() {
        let mut w = SelectFilter::new(
            opts(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]),
            false,
            false,
        );
        // "aa" subsequence-matches Alpha and Gamma but not Beta.
        w.set_filter("aa");
        w.check_all_visible();
        assert_eq!(w.checked_values(), vec!["a", "g"]);
    }

    #[test]
    fn check_none_visible_leaves_hidden_checked() {
        let mut w = SelectFilter::new(
            opts(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]),
            true,
            false,
        );
        w.set_filter("bet");
        w.check_none_visible();
        // Beta was visible and got unchecked; the hidden rows kept state.
        assert_eq!(w.checked_values(), vec!["a", "g"]);
    }

    #[test]
    fn bulk_ops_emit_one_change_notification() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha"), ("b", "Beta")]), false, false);
        assert!(!w.take_change());
        w.check_all_visible();
        assert!(w.take_change());
        // Reading consumed it.
        assert!(!w.take_change());
    }

    #[test]
    fn bulk_op_on_empty_set_emits_nothing() {
        let mut w = SelectFilter::new(vec![], false, false);
        w.check_all_visible();
        assert!(!w.take_change());
    }

    #[test]
    fn filter_does_not_alter_selection() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha"), ("b", "Beta")]), true, false);
        w.set_filter("alp");
        // Beta is hidden but still checked.
        assert_eq!(w.checked_values(), vec!["a", "b"]);
        assert_eq!(w.visible_count(), 1);
    }

    #[test]
    fn clear_filter_resets_search_text() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha")]), false, false);
        w.set_filter("alp");
        assert_eq!(w.search.text, "alp");
        w.clear_filter();
        assert_eq!(w.search.text, "");
        assert_eq!(w.search.cursor_pos, 0);
        assert_eq!(w.visible_count(), 1);
    }

    #[test]
    fn toggle_collapsed_keeps_selection() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha")]), true, false);
        w.toggle_collapsed();
        assert!(w.is_collapsed());
        assert_eq!(w.checked_values(), vec!["a"]);
        w.toggle_collapsed();
        assert!(!w.is_collapsed());
    }

    #[test]
    fn checked_values_on_empty_set_is_empty() {
        let w = SelectFilter::new(vec![], true, false);
        assert!(w.checked_values().is_empty());
    }

    #[test]
    fn set_checked_unknown_value_is_rejected() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha")]), false, false);
        assert!(!w.set_checked("nope", true));
        assert!(w.checked_values().is_empty());
    }

    // -- Draw tests using MockBackend --

    fn draw(w: &SelectFilter) -> MockBackend {
        let theme = Theme::dark();
        let mut backend = MockBackend::new();
        {
            let mut ctx = DrawContext::new(&mut backend, &theme);
            w.draw(&mut ctx, 0, 0, 200, 200).unwrap();
        }
        backend
    }

    #[test]
    fn draw_renders_visible_rows_only() {
        let mut w = SelectFilter::new(
            opts(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]),
            false,
            false,
        );
        w.set_filter("bet");
        let backend = draw(&w);
        assert!(backend.has_text("Beta"));
        assert!(!backend.has_text("Alpha"));
        assert!(!backend.has_text("Gamma"));
        // One checkbox outline per visible row.
        assert_eq!(backend.stroke_rect_count(), 1);
    }

    #[test]
    fn draw_checked_rows_fill_the_box() {
        let mut w = SelectFilter::new(opts(&[("a", "Alpha"), ("b", "Beta")]), false, false);
        w.set_checked("b", true);
        let backend = draw(&w);
        assert_eq!(backend.stroke_rect_count(), 2);
        assert_eq!(backend.fill_rect_count(), 1);
    }

    #[test]
    fn draw_empty_set_shows_placeholder() {
        let w = SelectFilter::new(vec![], false, false);
        let backend = draw(&w);
        assert!(backend.has_text("No options available."));
        assert_eq!(backend.stroke_rect_count(), 0);
    }

    #[test]
    fn draw_collapsed_renders_nothing() {
        let w = SelectFilter::new(opts(&[("a", "Alpha")]), true, true);
        let backend = draw(&w);
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn measure_counts_visible_rows() {
        let theme = Theme::dark();
        let mut backend = MockBackend::new();
        let ctx = DrawContext::new(&mut backend, &theme);

        let mut w = SelectFilter::new(
            opts(&[("a", "Alpha"), ("b", "Beta"), ("g", "Gamma")]),
            false,
            false,
        );
        let (_, h_all) = w.measure(&ctx, 200, 400);
        w.set_filter("bet");
        let (_, h_one) = w.measure(&ctx, 200, 400);
        assert!(h_all > h_one);

        w.toggle_collapsed();
        let (_, h_collapsed) = w.measure(&ctx, 200, 400);
        assert_eq!(h_collapsed, 0);
    }
}
