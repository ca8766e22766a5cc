/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};

/// Records durations of consecutive build phases.
pub struct StopWatch {
    last_instant: Instant,
    start: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl StopWatch {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            last_instant: now,
            start: now,
            phases: Vec::new(),
        }
    }

    /// Ends the current phase under `what` and starts the next one.
    pub fn record(&mut self, what: &'static str) {
        let now = Instant::now();
        self.phases.push((what, now - self.last_instant));
        self.last_instant = now;
    }

    pub fn phases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.phases.iter().map(|(what, _)| *what)
    }

    /// Report of all phases, one per line, followed by the total.
    pub fn report(&self) -> String {
        let width = self
            .phases
            .iter()
            .map(|(what, _)| what.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (what, duration) in &self.phases {
            let _ = writeln!(out, "{what:>width$}: {:>6}ms", duration.as_millis());
        }
        let _ = writeln!(out, "{:>width$}: {:>6}ms", "total", self.start.elapsed().as_millis());
        out
    }

    pub fn write_stats_to(&self, path: &Path) {
        std::fs::write(path, self.report())
            .unwrap_or_else(|e| panic!("failed to write codegen stats to {}: {e}", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::StopWatch;

    #[test]
    fn phases_are_reported_in_order() {
        let mut watch = StopWatch::start();
        watch.record("load_json");
        watch.record("generate_classes");

        assert_eq!(watch.phases().collect::<Vec<_>>(), vec!["load_json", "generate_classes"]);

        let report = watch.report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with("load_json:"));
        assert!(lines[2].trim_start().starts_with("total:"));
    }
}
