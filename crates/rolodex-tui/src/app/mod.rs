pub mod async_tasks;

use ratatui::layout::{Position, Rect};
use rolodex_core::{AppConfig, Autocomplete, DropdownEvent, PersonRecord, Transition, TriggerMode};

use crate::input::InputField;
use crate::theme::NordTheme;

/// Screen areas captured during the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub toggle: Option<Rect>,
    /// One entry per visible dropdown row: its area and candidate index.
    pub rows: Vec<(Rect, usize)>,
}

impl HitAreas {
    pub fn row_at(&self, pos: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, index)| *index)
    }

    pub fn on_toggle(&self, pos: Position) -> bool {
        self.toggle.is_some_and(|area| area.contains(pos))
    }

    pub fn on_input(&self, pos: Position) -> bool {
        self.input.contains(pos)
    }
}

/// Widget application state.
pub struct App {
    pub config: AppConfig,
    pub theme: NordTheme,
    pub autocomplete: Autocomplete,
    pub input: InputField,
    /// Input has focus (highlighted border).
    pub focused: bool,
    /// First candidate shown when the list is taller than the dropdown.
    pub scroll: usize,
    pub hits: HitAreas,
    pub should_quit: bool,
    /// Set by a commit, cleared by the next edit.
    committed: bool,
    /// Text was typed and not yet committed or overwritten.
    pending_edit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let autocomplete = Autocomplete::new(config.widget.trigger, config.widget.filter_options());
        Self {
            config,
            theme: NordTheme::default(),
            autocomplete,
            input: InputField::new(),
            focused: true,
            scroll: 0,
            hits: HitAreas::default(),
            should_quit: false,
            committed: false,
            pending_edit: false,
        }
    }

    pub fn on_people_loaded(&mut self, people: Vec<PersonRecord>) {
        if self.autocomplete.load_pool(people) && self.pending_edit {
            // text typed while the fetch was in flight
            let text = self.input.value.clone();
            self.dispatch(DropdownEvent::TextChanged(text));
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.autocomplete.is_pool_loaded()
    }

    /// Feed an event to the state machine and mirror the result into the view.
    pub fn dispatch(&mut self, event: DropdownEvent) -> Transition {
        let transition = self.autocomplete.handle(event);
        match &transition {
            Transition::Opened | Transition::Closed => self.scroll = 0,
            Transition::FocusMoved(_) => {}
            Transition::Committed(value) => {
                tracing::info!(value = %value, "selection committed");
                self.input.set(value.clone());
                self.committed = true;
                self.pending_edit = false;
                self.scroll = 0;
                self.focused = true;
            }
            Transition::Unchanged => {}
        }
        transition
    }

    /// The input text changed through editing.
    pub fn text_edited(&mut self) {
        self.committed = false;
        self.pending_edit = !self.input.value.is_empty();
        self.focused = true;
        let text = self.input.value.clone();
        self.dispatch(DropdownEvent::TextChanged(text));
    }

    /// Programmatic write of the public value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.input.set(value.clone());
        self.autocomplete.set_value(value);
        self.committed = false;
        self.pending_edit = false;
        if !self.autocomplete.is_open() {
            self.scroll = 0;
        }
    }

    pub fn value(&self) -> &str {
        self.autocomplete.value()
    }

    /// The committed selection, if the last change was a commit.
    pub fn selection(&self) -> Option<&str> {
        self.committed.then(|| self.autocomplete.value())
    }

    pub fn dismiss(&mut self) {
        if self.autocomplete.dismiss() == Transition::Closed {
            self.scroll = 0;
        }
    }

    pub fn has_toggle_button(&self) -> bool {
        self.autocomplete.trigger() == TriggerMode::ButtonToggle
    }

    /// Keep the focused row inside a window of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        let count = self.autocomplete.candidates().len();
        if height == 0 || count <= height {
            self.scroll = 0;
            return;
        }
        if let Some(focus) = self.autocomplete.focus_index() {
            if focus < self.scroll {
                self.scroll = focus;
            } else if focus >= self.scroll + height {
                self.scroll = focus + 1 - height;
            }
        }
        self.scroll = self.scroll.min(count - height);
    }
}
