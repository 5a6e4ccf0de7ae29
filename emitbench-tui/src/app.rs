//! Application state. Single owner, main thread only.
//!
//! Every interaction that touches the table, the selection or a toggle ends
//! in [`AppState::refresh`], which re-runs the render pass synchronously.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use emitbench_core::{render_pass, DashboardConfig, DashboardView, EmissionsTable, Selection, ViewToggles};

use crate::theme::Theme;

const ERROR_HISTORY_CAP: usize = 50;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Data,
    Benchmark,
    Trend,
    Help,
}

impl Panel {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Panel::Data => 0,
            Panel::Benchmark => 1,
            Panel::Trend => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Data),
            1 => Some(Panel::Benchmark),
            2 => Some(Panel::Trend),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Data => "Data",
            Panel::Benchmark => "Benchmark",
            Panel::Trend => "Trend",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Data)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Data)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Ingest,
    Config,
    Analysis,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Ingest => "DATA",
            ErrorCategory::Config => "CFG",
            ErrorCategory::Analysis => "CALC",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    OpenFile,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Loaded data
    pub config: DashboardConfig,
    pub table: Option<EmissionsTable>,
    pub source: Option<PathBuf>,
    pub companies: Vec<String>,
    pub years: Vec<i32>,
    pub company_idx: usize,
    pub year_idx: usize,

    // View
    pub toggles: ViewToggles,
    pub view: Option<DashboardView>,
    pub theme: Theme,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub path_input: String,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            active_panel: Panel::Data,
            running: true,
            config,
            table: None,
            source: None,
            companies: Vec::new(),
            years: Vec::new(),
            company_idx: 0,
            year_idx: 0,
            toggles: ViewToggles::default(),
            view: None,
            theme: Theme::default(),
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::Welcome,
            path_input: String::new(),
        }
    }

    /// Load (or replace) the table from `path`.
    ///
    /// On failure the previously loaded table stays in place.
    pub fn load_table(&mut self, path: PathBuf) {
        match EmissionsTable::load(&path, &self.config) {
            Ok(table) => {
                self.companies = table.companies();
                self.years = table.years();
                let preferred = table.default_company(self.config.default_company.as_deref());
                self.company_idx = preferred
                    .and_then(|c| self.companies.iter().position(|x| *x == c))
                    .unwrap_or(0);
                self.year_idx = 0;
                self.set_status(format!(
                    "Loaded {} rows: {} companies, {} years",
                    table.len(),
                    self.companies.len(),
                    self.years.len()
                ));
                tracing::info!(path = %path.display(), rows = table.len(), "table loaded");
                self.table = Some(table);
                self.source = Some(path);
                if self.overlay == Overlay::Welcome {
                    self.overlay = Overlay::None;
                }
                self.refresh();
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "ingestion failed");
                self.push_error(
                    ErrorCategory::Ingest,
                    format!("Error processing data: {err}"),
                    path.display().to_string(),
                );
            }
        }
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        match self.source.clone() {
            Some(path) => self.load_table(path),
            None => self.set_warning("No file loaded, press o to open one"),
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        let company = self.companies.get(self.company_idx)?;
        let year = self.years.get(self.year_idx)?;
        Some(Selection::new(company.clone(), *year))
    }

    /// Run one render pass over the current table, selection and toggles.
    pub fn refresh(&mut self) {
        let (Some(table), Some(selection)) = (self.table.as_ref(), self.selection()) else {
            self.view = None;
            return;
        };
        let view = render_pass(table, &selection, self.toggles);
        for err in view.errors() {
            if err.is_warning() {
                self.set_warning(err.to_string());
            } else {
                self.push_error(
                    ErrorCategory::Analysis,
                    err.to_string(),
                    format!("{} / {}", selection.company, selection.year),
                );
            }
        }
        self.view = Some(view);
    }

    pub fn next_company(&mut self) {
        if self.company_idx + 1 < self.companies.len() {
            self.company_idx += 1;
            self.refresh();
        }
    }

    pub fn prev_company(&mut self) {
        if self.company_idx > 0 {
            self.company_idx -= 1;
            self.refresh();
        }
    }

    pub fn next_year(&mut self) {
        if self.year_idx + 1 < self.years.len() {
            self.year_idx += 1;
            self.refresh();
        }
    }

    pub fn prev_year(&mut self) {
        if self.year_idx > 0 {
            self.year_idx -= 1;
            self.refresh();
        }
    }

    pub fn toggle_trend(&mut self) {
        self.toggles.show_trend = !self.toggles.show_trend;
        self.refresh();
    }

    pub fn toggle_also_current(&mut self) {
        self.toggles.also_show_current = !self.toggles.also_show_current;
        self.refresh();
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
