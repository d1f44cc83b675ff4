use serde::{Deserialize, Serialize};

use crate::filter::{FilterOptions, filter_with};
use crate::models::PersonRecord;

/// How the dropdown gets opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerMode {
    /// Typing opens the dropdown with matching candidates.
    #[default]
    TypeToOpen,
    /// Typing filters as above; a button additionally toggles the full pool.
    ButtonToggle,
}

/// Inputs driving the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    TextChanged(String),
    ToggleRequested,
    ArrowDown,
    ArrowUp,
    /// Enter on the focused row (`None` when nothing is focused) or a click on a row.
    CommitRequested(Option<usize>),
}

/// What a handled event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    FocusMoved(usize),
    Committed(String),
    Unchanged,
}

/// One rendered dropdown row: its ordinal, selectable value and highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRow<'a> {
    pub index: usize,
    pub value: String,
    pub avatar_url: &'a str,
    pub active: bool,
}

/// The interaction state machine behind the widget.
///
/// States are `Closed` and `Open(candidates, focus)`. While closed the
/// candidate list is empty and nothing is focused; while open the list is
/// non-empty and `focus` is `None` or a valid index into it.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    pool: Vec<PersonRecord>,
    pool_loaded: bool,
    value: String,
    candidates: Vec<PersonRecord>,
    focus: Option<usize>,
    open: bool,
    trigger: TriggerMode,
    filter: FilterOptions,
}

impl Autocomplete {
    pub fn new(trigger: TriggerMode, filter: FilterOptions) -> Self {
        Self {
            trigger,
            filter,
            ..Self::default()
        }
    }

    /// Install the fetched pool. Only the first call takes effect.
    pub fn load_pool(&mut self, pool: Vec<PersonRecord>) -> bool {
        if self.pool_loaded {
            tracing::debug!(ignored = pool.len(), "people pool already loaded");
            return false;
        }
        self.pool = pool;
        self.pool_loaded = true;
        true
    }

    pub fn handle(&mut self, event: DropdownEvent) -> Transition {
        match event {
            DropdownEvent::TextChanged(text) => self.text_changed(text),
            DropdownEvent::ToggleRequested => self.toggle(),
            DropdownEvent::ArrowDown => self.arrow_down(),
            DropdownEvent::ArrowUp => self.arrow_up(),
            DropdownEvent::CommitRequested(index) => match index {
                Some(i) => self.commit(i),
                None => Transition::Unchanged,
            },
        }
    }

    // ── Transitions ─────────────────────────────────

    pub fn text_changed(&mut self, text: impl Into<String>) -> Transition {
        self.value = text.into();
        self.focus = None;
        if self.value.is_empty() {
            return self.close();
        }
        let candidates = filter_with(&self.pool, &self.value, self.filter);
        self.show(candidates)
    }

    pub fn toggle(&mut self) -> Transition {
        if self.trigger != TriggerMode::ButtonToggle {
            tracing::debug!("toggle ignored in type-to-open mode");
            return Transition::Unchanged;
        }
        if self.open {
            self.close()
        } else {
            self.focus = None;
            self.show(self.pool.clone())
        }
    }

    pub fn arrow_down(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        let count = self.candidates.len();
        let next = match self.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.focus = Some(next);
        Transition::FocusMoved(next)
    }

    pub fn arrow_up(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        let count = self.candidates.len();
        let prev = match self.focus {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.focus = Some(prev);
        Transition::FocusMoved(prev)
    }

    /// Commit the focused row. No focus means no change.
    pub fn commit_focused(&mut self) -> Transition {
        match self.focus {
            Some(i) => self.commit(i),
            None => Transition::Unchanged,
        }
    }

    /// Commit the candidate at `index`. Out-of-range indices are ignored.
    pub fn commit(&mut self, index: usize) -> Transition {
        let Some(person) = self.candidates.get(index) else {
            return Transition::Unchanged;
        };
        let value = person.display_name();
        self.value = value.clone();
        self.close();
        Transition::Committed(value)
    }

    /// Close without committing; the typed value is kept.
    pub fn dismiss(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        self.close()
    }

    /// Programmatic write of the public value. An empty string forces the dropdown closed.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.value.is_empty() {
            self.close();
        }
    }

    fn show(&mut self, candidates: Vec<PersonRecord>) -> Transition {
        if candidates.is_empty() {
            return self.close();
        }
        self.candidates = candidates;
        self.open = true;
        Transition::Opened
    }

    fn close(&mut self) -> Transition {
        self.candidates.clear();
        self.focus = None;
        self.open = false;
        Transition::Closed
    }

    // ── Accessors ───────────────────────────────────

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn candidates(&self) -> &[PersonRecord] {
        &self.candidates
    }

    pub fn pool(&self) -> &[PersonRecord] {
        &self.pool
    }

    pub fn is_pool_loaded(&self) -> bool {
        self.pool_loaded
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn trigger(&self) -> TriggerMode {
        self.trigger
    }

    /// Rows to render, empty while closed.
    pub fn rows(&self) -> impl Iterator<Item = DropdownRow<'_>> {
        self.candidates
            .iter()
            .enumerate()
            .map(move |(index, person)| DropdownRow {
                index,
                value: person.display_name(),
                avatar_url: &person.avatar_url,
                active: self.focus == Some(index),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<PersonRecord> {
        vec![
            PersonRecord::new("Ada", "Lovelace"),
            PersonRecord::new("Alan", "Turing"),
            PersonRecord::new("Grace", "Hopper"),
        ]
    }

    fn machine(trigger: TriggerMode) -> Autocomplete {
        let mut ac = Autocomplete::new(trigger, FilterOptions::default());
        ac.load_pool(people());
        ac
    }

    #[test]
    fn starts_closed() {
        let ac = Autocomplete::default();
        assert!(!ac.is_open());
        assert_eq!(ac.focus_index(), None);
        assert!(ac.candidates().is_empty());
    }

    #[test]
    fn typing_then_arrow_then_enter_commits() {
        let mut ac = Autocomplete::new(TriggerMode::TypeToOpen, FilterOptions::default());
        ac.load_pool(vec![PersonRecord::new("Ada", "Lovelace"), PersonRecord::new("Alan", "Turing")]);

        assert_eq!(ac.text_changed("A"), Transition::Opened);
        assert_eq!(ac.candidates().len(), 2);
        assert_eq!(ac.arrow_down(), Transition::FocusMoved(0));
        assert_eq!(ac.commit_focused(), Transition::Committed("Ada Lovelace".to_string()));
        assert_eq!(ac.value(), "Ada Lovelace");
        assert!(!ac.is_open());
    }

    #[test]
    fn no_match_closes_even_with_text() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        assert_eq!(ac.text_changed("zz"), Transition::Closed);
        assert!(!ac.is_open());
        assert_eq!(ac.value(), "zz");
    }

    #[test]
    fn empty_text_closes() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        assert!(ac.is_open());
        assert_eq!(ac.text_changed(""), Transition::Closed);
        assert!(ac.candidates().is_empty());
    }

    #[test]
    fn text_change_resets_focus() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        ac.arrow_down();
        ac.arrow_down();
        ac.text_changed("al");
        assert_eq!(ac.focus_index(), None);
    }

    #[test]
    fn arrow_down_cycles_with_period_n() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        let n = ac.candidates().len();
        ac.arrow_down();
        let start = ac.focus_index();
        for _ in 0..n {
            ac.arrow_down();
        }
        assert_eq!(ac.focus_index(), start);
    }

    #[test]
    fn arrow_up_cycles_with_period_n() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        let n = ac.candidates().len();
        ac.arrow_up();
        let start = ac.focus_index();
        for _ in 0..n {
            ac.arrow_up();
        }
        assert_eq!(ac.focus_index(), start);
    }

    #[test]
    fn arrow_keys_wrap() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        let last = ac.candidates().len() - 1;

        assert_eq!(ac.arrow_up(), Transition::FocusMoved(last));
        assert_eq!(ac.arrow_down(), Transition::FocusMoved(0));
        assert_eq!(ac.arrow_up(), Transition::FocusMoved(last));
    }

    #[test]
    fn arrows_ignored_while_closed() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        assert_eq!(ac.arrow_down(), Transition::Unchanged);
        assert_eq!(ac.arrow_up(), Transition::Unchanged);
        assert_eq!(ac.focus_index(), None);
    }

    #[test]
    fn commit_without_focus_changes_nothing() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("gr");
        let before = (ac.value().to_string(), ac.candidates().to_vec(), ac.is_open());

        assert_eq!(ac.commit_focused(), Transition::Unchanged);
        assert_eq!(ac.handle(DropdownEvent::CommitRequested(None)), Transition::Unchanged);
        assert_eq!(
            (ac.value().to_string(), ac.candidates().to_vec(), ac.is_open()),
            before
        );
    }

    #[test]
    fn commit_out_of_range_is_noop() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        assert_eq!(ac.commit(99), Transition::Unchanged);
        assert!(ac.is_open());
    }

    #[test]
    fn click_commits_regardless_of_focus() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        ac.arrow_down();
        assert_eq!(
            ac.handle(DropdownEvent::CommitRequested(Some(1))),
            Transition::Committed("Alan Turing".to_string())
        );
        assert_eq!(ac.focus_index(), None);
    }

    #[test]
    fn toggle_opens_full_pool_in_button_mode() {
        let mut ac = machine(TriggerMode::ButtonToggle);
        assert_eq!(ac.toggle(), Transition::Opened);
        assert_eq!(ac.candidates().len(), 3);
        assert_eq!(ac.focus_index(), None);
        assert_eq!(ac.toggle(), Transition::Closed);
        assert!(!ac.is_open());
    }

    #[test]
    fn toggle_ignored_in_type_mode() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        assert_eq!(ac.toggle(), Transition::Unchanged);
        assert!(!ac.is_open());
    }

    #[test]
    fn toggle_with_empty_pool_stays_closed() {
        let mut ac = Autocomplete::new(TriggerMode::ButtonToggle, FilterOptions::default());
        assert_eq!(ac.toggle(), Transition::Closed);
        assert!(!ac.is_open());
    }

    #[test]
    fn empty_pool_never_opens() {
        let mut ac = Autocomplete::default();
        for q in ["a", "Ada", "x"] {
            assert_eq!(ac.text_changed(q), Transition::Closed);
            assert!(ac.candidates().is_empty());
        }
    }

    #[test]
    fn set_empty_value_forces_closed() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        ac.set_value("");
        assert!(!ac.is_open());
        assert_eq!(ac.value(), "");

        ac.text_changed("a");
        ac.set_value("Somebody");
        assert!(ac.is_open());
    }

    #[test]
    fn dismiss_keeps_value() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("tur");
        assert_eq!(ac.dismiss(), Transition::Closed);
        assert_eq!(ac.value(), "tur");
        assert_eq!(ac.dismiss(), Transition::Unchanged);
    }

    #[test]
    fn pool_loads_only_once() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        assert!(!ac.load_pool(vec![PersonRecord::new("Late", "Arrival")]));
        assert_eq!(ac.pool().len(), 3);
    }

    #[test]
    fn rows_expose_index_value_and_single_active() {
        let mut ac = machine(TriggerMode::TypeToOpen);
        ac.text_changed("a");
        assert!(ac.rows().all(|r| !r.active));

        ac.arrow_down();
        ac.arrow_down();
        let rows: Vec<_> = ac.rows().collect();
        assert_eq!(rows.iter().filter(|r| r.active).count(), 1);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].value, "Alan Turing");
        assert!(rows[1].active);
    }
}
