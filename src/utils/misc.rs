use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::config::LogLevel;

pub fn get_records_progress_style(label: Option<&str>) -> anyhow::Result<ProgressStyle> {
    Ok(ProgressStyle::with_template(&format!(
        "{}{{pos}}/{{len}} {{wide_bar}} [{{elapsed}}]",
        match label {
            Some(msg) => format!("{} ", msg.bold().cyan()),
            None => "".to_string(),
        }
    ))?)
}

enum Sink {
    Stdout,
    #[cfg(test)]
    Lines(Vec<String>),
}

/// prints per-record lines to stdout, above the progress bar while one is drawn
pub struct Reporter {
    pb: ProgressBar,
    log_level: LogLevel,
    sink: Sink,
}

impl Reporter {
    pub fn new(log_level: LogLevel) -> Self {
        Self {
            pb: ProgressBar::hidden(),
            log_level,
            sink: Sink::Stdout,
        }
    }

    /// keeps uncolored lines in memory instead of printing them
    #[cfg(test)]
    pub fn capturing(log_level: LogLevel) -> Self {
        Self {
            pb: ProgressBar::hidden(),
            log_level,
            sink: Sink::Lines(vec![]),
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Lines(lines) => lines.as_slice(),
            Sink::Stdout => &[],
        }
    }

    pub fn start(&mut self, label: &str, len: u64) -> anyhow::Result<()> {
        if self.log_level == LogLevel::Quiet || !matches!(self.sink, Sink::Stdout) {
            return Ok(());
        }

        // same stream as the record lines, so redirecting stdout takes both
        let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stdout());
        pb.set_style(get_records_progress_style(Some(label))?);
        self.pb = pb;

        Ok(())
    }

    pub fn tick(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    pub fn is_chatty(&self) -> bool {
        self.log_level == LogLevel::Chatty
    }

    pub fn success(&mut self, line: impl AsRef<str>) {
        if self.log_level != LogLevel::Quiet {
            self.println(line.as_ref(), Some(Color::Green));
        }
    }

    pub fn failure(&mut self, line: impl AsRef<str>) {
        self.println(line.as_ref(), Some(Color::Red));
    }

    pub fn info(&mut self, line: impl AsRef<str>) {
        if self.log_level != LogLevel::Quiet {
            self.println(line.as_ref(), None);
        }
    }

    /// the command's actual output, printed at every log level
    pub fn output(&mut self, line: impl AsRef<str>) {
        self.println(line.as_ref(), None);
    }

    fn println(&mut self, line: &str, color: Option<Color>) {
        match &mut self.sink {
            Sink::Stdout => {
                let line = match color {
                    Some(color) => line.color(color).to_string(),
                    None => line.to_string(),
                };
                match self.pb.is_hidden() {
                    true => println!("{line}"),
                    false => self.pb.println(line),
                }
            }
            #[cfg(test)]
            Sink::Lines(lines) => lines.push(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_keeps_failures_and_output_only() {
        let mut reporter = Reporter::capturing(LogLevel::Quiet);

        reporter.success("OK for name=a");
        reporter.info("Found 1 keys on the old server.");
        reporter.failure("Network error for name=b: refused");
        reporter.output("{}");

        assert_eq!(
            reporter.lines(),
            ["Network error for name=b: refused", "{}"]
        );
    }

    #[test]
    fn capturing_never_draws_a_bar() {
        let mut reporter = Reporter::capturing(LogLevel::Chatty);
        reporter.start("migrating", 3).unwrap();

        assert!(reporter.pb.is_hidden());
    }
}
