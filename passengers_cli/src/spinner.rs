//! Terminal loading indicator.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use passengers_lib::LoadingIndicator;

/// Spinner on stderr. Each `show` starts a fresh spinner; `hide` clears it.
#[derive(Default)]
pub struct Spinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadingIndicator for Spinner {
    fn show(&self) {
        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
            pb.set_style(style);
        }
        pb.set_message("loading passengers...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }

    fn hide(&self) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            pb.finish_and_clear();
        }
    }

    fn is_visible(&self) -> bool {
        self.bar.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_tracks_visibility() {
        let spinner = Spinner::new();
        assert!(!spinner.is_visible());
        spinner.show();
        spinner.show();
        assert!(spinner.is_visible());
        spinner.hide();
        assert!(!spinner.is_visible());
        spinner.hide();
    }
}
