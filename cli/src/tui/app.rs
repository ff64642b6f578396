use doctrack_core::{
    coerce_number, expand_field, parse_entry_args, parse_entry_date, ActivityType, EntryDraft,
    EntryView, FileLedgerRepository, LedgerService, ProgressReport, TypeSummary,
};
use ratatui::widgets::TableState;

pub enum InputMode {
    Normal,
    Adding,
}

/// Which pane owns navigation keys.
#[derive(PartialEq)]
pub enum Pane {
    Types,
    Entries,
}

pub struct App {
    pub service: LedgerService<FileLedgerRepository>,
    pub summaries: Vec<TypeSummary>,
    pub entries: Vec<EntryView>,
    pub report: ProgressReport,
    pub type_state: TableState,
    pub entry_state: TableState,
    pub focus: Pane,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(service: LedgerService<FileLedgerRepository>) -> App {
        let mut app = App {
            service,
            summaries: Vec::new(),
            entries: Vec::new(),
            report: doctrack_core::report(&doctrack_core::Ledger::new()),
            type_state: TableState::default(),
            entry_state: TableState::default(),
            focus: Pane::Types,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
        };
        app.type_state.select(Some(0));
        app.reload();
        app
    }

    pub fn selected_kind(&self) -> ActivityType {
        let index = self.type_state.selected().unwrap_or(0);
        ActivityType::ALL[index.min(ActivityType::ALL.len() - 1)]
    }

    /// Refresh every derived view from the service after a mutation or a
    /// selection change.
    pub fn reload(&mut self) {
        self.summaries = self.service.summaries();
        self.report = self.service.report();
        self.entries = self.service.entries(self.selected_kind());

        if self.entries.is_empty() {
            self.entry_state.select(None);
        } else {
            let i = self.entry_state.selected().unwrap_or(0);
            self.entry_state.select(Some(i.min(self.entries.len() - 1)));
        }
    }

    pub fn next(&mut self) {
        match self.focus {
            Pane::Types => {
                let i = match self.type_state.selected() {
                    Some(i) if i >= ActivityType::ALL.len() - 1 => 0,
                    Some(i) => i + 1,
                    None => 0,
                };
                self.type_state.select(Some(i));
                self.entry_state.select(None);
                self.reload();
            }
            Pane::Entries => {
                if self.entries.is_empty() {
                    return;
                }
                let i = match self.entry_state.selected() {
                    Some(i) if i >= self.entries.len() - 1 => 0,
                    Some(i) => i + 1,
                    None => 0,
                };
                self.entry_state.select(Some(i));
            }
        }
    }

    pub fn previous(&mut self) {
        match self.focus {
            Pane::Types => {
                let i = match self.type_state.selected() {
                    Some(0) | None => ActivityType::ALL.len() - 1,
                    Some(i) => i - 1,
                };
                self.type_state.select(Some(i));
                self.entry_state.select(None);
                self.reload();
            }
            Pane::Entries => {
                if self.entries.is_empty() {
                    return;
                }
                let i = match self.entry_state.selected() {
                    Some(0) | None => self.entries.len() - 1,
                    Some(i) => i - 1,
                };
                self.entry_state.select(Some(i));
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Types => {
                if self.entry_state.selected().is_none() && !self.entries.is_empty() {
                    self.entry_state.select(Some(0));
                }
                Pane::Entries
            }
            Pane::Entries => Pane::Types,
        };
    }

    pub fn delete_selected_entry(&mut self) {
        if self.focus != Pane::Entries {
            return;
        }
        if let Some(i) = self.entry_state.selected() {
            if let Some(view) = self.entries.get(i) {
                let kind = view.kind;
                let id = view.id;
                match self.service.remove_entry(kind, &id) {
                    Ok(true) => self.status = Some(format!("Deleted '{}'", view.title)),
                    Ok(false) => self.status = Some("Entry already gone".to_string()),
                    Err(e) => self.status = Some(format!("Save failed: {}", e)),
                }
            }
            self.reload();
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.status = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_add(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        let args: Vec<String> = self.input.split_whitespace().map(|s| s.to_string()).collect();
        let parsed = parse_entry_args(&args);
        let mut draft = EntryDraft {
            title: parsed.title,
            ..Default::default()
        };

        for (key, value) in parsed.fields {
            match expand_field(&key) {
                Ok("from") => draft.date_from = parse_entry_date(&value).ok(),
                Ok("to") => draft.date_to = parse_entry_date(&value).ok(),
                Ok("classroom") => draft.classroom_hours = coerce_number(&value),
                Ok("autonomous") => draft.autonomous_hours = coerce_number(&value),
                Ok("days") => draft.days = coerce_number(&value),
                _ => {}
            }
        }

        let kind = self.selected_kind();
        match self.service.add_entry(kind, draft) {
            Ok(Some(_)) => self.status = Some("Entry added".to_string()),
            Ok(None) => {
                self.status = Some("Skipped: title and from: date are required".to_string())
            }
            Err(e) => self.status = Some(format!("Save failed: {}", e)),
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
        self.reload();
    }
}
