//! The load-and-render cycle for the passenger table.
//!
//! One call to [`PassengerTableLoader::load_and_render`] walks
//! `Idle -> Loading -> Rendered | ErrorDisplayed`. Failures of any kind end
//! up as an error row in the table and a `tracing` error event; nothing is
//! returned as `Err`.
//!
//! Calls may overlap. Each call takes a generation number and only the
//! newest generation is allowed to touch the display once its response
//! arrives; older responses are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use passengers_api::types::ResponsePayload;
use passengers_api::{Client, Error as ApiError, DATA_PATH};

use crate::display::{LoadingIndicator, TableBody};
use crate::labels::Labels;
use crate::render::{error_row, passenger_rows, placeholder_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Rendered,
    ErrorDisplayed,
}

/// What a single `load_and_render` call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many passenger rows were rendered.
    Rendered(usize),
    /// The payload had no passengers; the placeholder row is shown.
    Empty,
    /// The error row is shown with this detail.
    Failed(String),
    /// A newer call started before this one's response arrived.
    Superseded,
}

/// Fetches passengers and renders them into the injected display targets.
pub struct PassengerTableLoader {
    client: Client,
    indicator: Arc<dyn LoadingIndicator>,
    table: Arc<dyn TableBody>,
    labels: Labels,
    generation: AtomicU64,
    state: Mutex<LoadState>,
}

impl PassengerTableLoader {
    pub fn new(
        client: Client,
        indicator: Arc<dyn LoadingIndicator>,
        table: Arc<dyn TableBody>,
        labels: Labels,
    ) -> Self {
        Self {
            client,
            indicator,
            table,
            labels,
            generation: AtomicU64::new(0),
            state: Mutex::new(LoadState::Idle),
        }
    }

    pub fn state(&self) -> LoadState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn set_state(&self, state: LoadState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Runs one full cycle: show the indicator, clear the table, fetch, then
    /// render rows, the placeholder, or an error row.
    ///
    /// The indicator is hidden as soon as response headers arrive, before the
    /// status is judged or the body is read. A non-success status is reported
    /// as such even when its body cannot be read.
    pub async fn load_and_render(&self) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_state(LoadState::Loading);
        self.indicator.show();
        self.table.clear();

        let fetched = self.client.fetch(DATA_PATH).await;
        if !self.is_current(generation) {
            return self.superseded(generation);
        }

        self.indicator.hide();
        let result = match fetched {
            Ok(response) => response.into_payload().await,
            Err(err) => Err(err),
        };
        // Reading the body yields too; a newer load may have started meanwhile.
        if !self.is_current(generation) {
            return self.superseded(generation);
        }

        match result {
            Ok(payload) => self.render_payload(&payload),
            Err(err) => self.render_error(&err),
        }
    }

    fn superseded(&self, generation: u64) -> LoadOutcome {
        tracing::debug!(
            "Dropping response for load #{}; a newer load is in flight",
            generation
        );
        LoadOutcome::Superseded
    }

    fn render_payload(&self, payload: &ResponsePayload) -> LoadOutcome {
        if let Some(message) = &payload.message {
            tracing::debug!("Service message: {}", message);
        }
        let outcome = if payload.is_empty() {
            self.table.append_row(placeholder_row(&self.labels));
            LoadOutcome::Empty
        } else {
            let rows = passenger_rows(payload.records(), &self.labels);
            let count = rows.len();
            for row in rows {
                self.table.append_row(row);
            }
            LoadOutcome::Rendered(count)
        };
        tracing::info!("Rendered passenger table: {:?}", outcome);
        self.set_state(LoadState::Rendered);
        outcome
    }

    fn render_error(&self, err: &ApiError) -> LoadOutcome {
        tracing::error!("Error fetching API data: {}", err);
        let detail = err.to_string();
        self.table.replace_with(error_row(&self.labels, &detail));
        self.set_state(LoadState::ErrorDisplayed);
        LoadOutcome::Failed(detail)
    }
}
