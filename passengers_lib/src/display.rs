//! Display targets the loader writes to.
//!
//! Both traits take `&self`: an implementation is a handle onto display
//! state owned elsewhere (a page element, a terminal widget, a test
//! recorder), so the same handle can be shared with whoever shows it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::Error;
use crate::render::{rows_html, TableRow};

/// Something that can be shown while a load is in flight.
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// The body of the passenger table.
pub trait TableBody: Send + Sync {
    /// Removes every row.
    fn clear(&self);
    fn append_row(&self, row: TableRow);
    /// Snapshot of the current rows, top to bottom.
    fn rows(&self) -> Vec<TableRow>;

    /// Replaces the whole contents with a single row.
    fn replace_with(&self, row: TableRow) {
        self.clear();
        self.append_row(row);
    }
}

/// Indicator backed by a single flag. Starts hidden.
#[derive(Debug, Default)]
pub struct VisibilityFlag {
    visible: AtomicBool,
}

impl VisibilityFlag {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadingIndicator for VisibilityFlag {
    fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// In-memory `<tbody>` that can render itself as HTML.
#[derive(Debug, Default)]
pub struct HtmlTableBody {
    rows: Mutex<Vec<TableRow>>,
}

impl HtmlTableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inner HTML of the table body.
    pub fn inner_html(&self) -> Result<String, Error> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows_html(&rows)?)
    }
}

impl TableBody for HtmlTableBody {
    fn clear(&self) {
        self.rows.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn append_row(&self, row: TableRow) {
        self.rows
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(row);
    }

    fn rows(&self) -> Vec<TableRow> {
        self.rows.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
