//! EmitBench TUI: terminal dashboard for the emissions benchmark
//!
//! Panels:
//! 1. Data: file, company and year selectors, view toggles
//! 2. Benchmark: density chart with the company's position among its peers
//! 3. Trend: yearly history against the industry mean and change bars
//! 4. Help: key bindings and the error history

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
