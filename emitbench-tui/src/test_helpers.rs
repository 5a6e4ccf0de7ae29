//! Shared fixtures for the TUI unit tests.

use std::path::{Path, PathBuf};

use emitbench_core::DashboardConfig;
use tempfile::TempDir;

use crate::app::AppState;

const FIXTURE: &str = include_str!("../../emitbench-core/tests/fixtures/petrochem_ghg.csv");

/// Write the petrochemical fixture into `dir` and return its path.
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("petrochem_ghg.csv");
    std::fs::write(&path, FIXTURE).unwrap();
    path
}

/// An app with the fixture loaded. Keep the `TempDir` alive for the test.
pub fn loaded_app() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());
    let mut app = AppState::new(DashboardConfig::default());
    app.load_table(path);
    (dir, app)
}

/// Flatten a rendered buffer into one string for `contains` checks.
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                content.push_str(cell.symbol());
            }
        }
        content.push('\n');
    }
    content
}
