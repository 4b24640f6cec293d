use crate::processors::{SamplingEvent, SamplingObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(total: u64, message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self {
            progress_bar: None,
        }
    }

    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl SamplingObserver for ProgressReporter {
    fn on_sampling_event(&self, event: &SamplingEvent<'_>) {
        self.set_message(&format!(
            "{} / station {} ({}): {} at {}",
            event.river_name, event.station_code, event.site_name, event.date, event.time
        ));
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_accepts_sampling_events() {
        let progress = ProgressReporter::new(2, "Importing sheets...", true);
        progress.on_sampling_event(&SamplingEvent {
            river_name: "Drini",
            station_code: "D1",
            site_name: "Ura",
            date: "05.08.2013",
            time: "09:30",
            column: 4,
        });
        progress.increment(1);
        progress.finish_with_message("done");

        assert!(progress.progress_bar.is_none());
    }
}
