//! Progress reporting while a lookup is pending

use callerid_application::LookupProgressNotifier;
use callerid_domain::LookupRequest;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown for the single in-flight lookup
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn describe(request: &LookupRequest) -> String {
        format!("{} ({})", request.phone_number, request.country_code)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for ProgressReporter {
    fn on_lookup_start(&self, request: &LookupRequest) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Looking up");
        pb.set_message(Self::describe(request));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_lookup_complete(&self, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "done".green()));
        } else {
            pb.finish_with_message(format!("{}", "failed".red()));
        }
    }
}

/// Line-based progress on stderr, for terminals that cannot draw a spinner
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(request: &LookupRequest) -> String {
        format!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::describe(request).bold()
        )
    }

    fn complete_line(success: bool) -> String {
        if success {
            format!("  {} found", "v".green())
        } else {
            format!("  {} failed", "x".red())
        }
    }
}

impl LookupProgressNotifier for SimpleProgress {
    fn on_lookup_start(&self, request: &LookupRequest) {
        eprintln!("{}", Self::start_line(request));
    }

    fn on_lookup_complete(&self, success: bool) {
        eprintln!("{}", Self::complete_line(success));
    }
}
