use crate::ansi::{clear_line, move_to_line_start, print_status};
use crate::error::{IoErr, Result};
use crate::linter::Diagnostic;
use nu_ansi_term::Color::{Blue, Green, Red};
use serde::Serialize;
use snafu::prelude::*;
use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

#[derive(Serialize)]
pub struct Summary {
    findings: HashMap<&'static str, usize>,
    total_passes: usize,
    total_fails: usize,
    faults: usize,
    #[serde(skip_serializing)]
    start_time: Instant,
    #[serde(skip_serializing)]
    end_time: Option<Instant>,
}

impl Summary {
    pub fn new(start_time: Instant) -> Self {
        Self {
            findings: HashMap::new(),
            total_passes: 0,
            total_fails: 0,
            faults: 0,
            start_time,
            end_time: None,
        }
    }

    pub fn add_report(&mut self, report: &Report) {
        if report.ok() {
            self.total_passes += 1;
        } else {
            self.total_fails += 1;
        }

        self.faults += report.faults.len();
        for diagnostic in &report.diagnostics {
            *self.findings.entry(diagnostic.checker).or_default() += 1;
        }
    }

    pub fn mark_ended(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn all_passed(&self) -> bool {
        self.total_fails == 0
    }
}

#[derive(Debug)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    pub faults: Vec<String>,
    pub path: String,
}

impl Report {
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty() && self.faults.is_empty()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    diagnostics: &'a HashMap<String, Vec<Diagnostic>>,
    faults: &'a HashMap<String, Vec<String>>,
    passes: &'a Vec<String>,
    summary: &'a Summary,
}

pub enum Message {
    Finished(Summary),
    SetStatus(String),
    Report(Report),
}

pub trait Reporter {
    fn on_tick(&mut self) -> Result<()>;
    fn on_message(&mut self, message: Message) -> Result<()>;
}

pub struct AnsiReporter {
    icons: std::iter::Cycle<std::array::IntoIter<char, 8>>,
    show_passes: bool,
    status: String,
}

impl AnsiReporter {
    pub fn new(show_passes: bool) -> Self {
        let icons = ['⣷', '⣯', '⣟', '⡿', '⢿', '⣻', '⣽', '⣾'].into_iter().cycle();
        let status = "Initializing...".to_string();

        Self {
            icons,
            show_passes,
            status,
        }
    }
}

impl Reporter for AnsiReporter {
    fn on_tick(&mut self) -> Result<()> {
        let message = format!(
            "{} >> {}",
            self.icons.next().unwrap(),
            Blue.paint(&self.status)
        );

        print_status(message).context(IoErr { path: "stdout" })
    }

    fn on_message(&mut self, message: Message) -> Result<()> {
        clear_line().context(IoErr { path: "stdout" })?;
        match message {
            Message::SetStatus(s) => self.status = s,
            Message::Report(report) => {
                move_to_line_start().context(IoErr { path: "stdout" })?;
                print_report(&report, self.show_passes);
            }
            Message::Finished(summary) => {
                clear_line().context(IoErr { path: "stdout" })?;
                println!();
                print_summary(&summary);
            }
        }

        Ok(())
    }
}

pub struct JsonReporter {
    diagnostics: HashMap<String, Vec<Diagnostic>>,
    faults: HashMap<String, Vec<String>>,
    passes: Vec<String>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self {
            diagnostics: HashMap::new(),
            faults: HashMap::new(),
            passes: Vec::new(),
        }
    }
}

impl Reporter for JsonReporter {
    fn on_tick(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Report(report) => {
                if report.ok() {
                    self.passes.push(report.path);
                } else {
                    if !report.diagnostics.is_empty() {
                        self.diagnostics
                            .insert(report.path.clone(), report.diagnostics);
                    }
                    if !report.faults.is_empty() {
                        self.faults.insert(report.path, report.faults);
                    }
                }
            }
            Message::Finished(summary) => {
                let report = JsonReport {
                    diagnostics: &self.diagnostics,
                    faults: &self.faults,
                    passes: &self.passes,
                    summary: &summary,
                };

                let serialized = serde_json::to_string(&report).unwrap();
                println!("{serialized}");
            }
            _ => {}
        }

        Ok(())
    }
}

pub struct Ui {
    channel: Receiver<Message>,
    reporter: Box<dyn Reporter>,
}

impl Ui {
    pub fn new(channel: Receiver<Message>, reporter: Box<dyn Reporter>) -> Self {
        Self { channel, reporter }
    }

    pub fn run(mut self) -> Result<()> {
        'outer: loop {
            while let Ok(message) = self.channel.try_recv() {
                let done = matches!(message, Message::Finished(_));
                self.reporter.on_message(message)?;

                if done {
                    break 'outer;
                }
            }

            self.reporter.on_tick()?;
            std::thread::sleep(Duration::from_millis(100));
        }

        Ok(())
    }
}

fn print_report(report: &Report, show_passes: bool) {
    if report.ok() {
        if show_passes {
            println!("{}", Green.paint(format!("✓ {}", report.path.as_str())));
        }
    } else {
        for diagnostic in &report.diagnostics {
            println!("{diagnostic}");
        }

        for fault in &report.faults {
            eprintln!("{}", Red.paint(fault.as_str()));
        }
    }
}

fn print_summary(summary: &Summary) {
    let duration = summary.end_time.unwrap().duration_since(summary.start_time);
    let duration = format_duration(&duration);

    if !summary.findings.is_empty() {
        let mut findings = summary.findings.iter().collect::<Vec<_>>();
        findings.sort();

        println!("{:20}Findings", "Checker");
        for (checker, count) in findings {
            println!("{:20}{}", checker, Red.paint(format!("{:6}", count)));
        }
        println!("----------------------------");
    }

    println!(
        "{} passed, {} failed ({} faults)",
        Green.paint(summary.total_passes.to_string()),
        Red.paint(summary.total_fails.to_string()),
        summary.faults,
    );
    println!(
        "Scanned {} files in {}",
        summary.total_passes + summary.total_fails,
        Blue.paint(duration)
    );
}

fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        let millis = duration.as_millis();
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn report(path: &str, diagnostics: Vec<Diagnostic>, faults: Vec<String>) -> Report {
        Report {
            diagnostics,
            faults,
            path: path.to_string(),
        }
    }

    fn finding(checker: &'static str) -> Diagnostic {
        Diagnostic {
            path: Path::new("x").to_path_buf(),
            line: 0,
            message: "m".to_string(),
            checker,
        }
    }

    #[test]
    fn summary_counts_findings_per_checker() {
        let mut summary = Summary::new(Instant::now());
        summary.add_report(&report("a.png", vec![finding("image-size")], vec![]));
        summary.add_report(&report(
            "b_c.png",
            vec![finding("image-size"), finding("media-name-format")],
            vec![],
        ));
        summary.add_report(&report("ok.gif", vec![], vec![]));

        assert_eq!(summary.findings.get("image-size"), Some(&2));
        assert_eq!(summary.findings.get("media-name-format"), Some(&1));
        assert_eq!(summary.total_passes, 1);
        assert_eq!(summary.total_fails, 2);
        assert!(!summary.all_passed());
    }

    #[test]
    fn faults_fail_a_file_without_findings() {
        let mut summary = Summary::new(Instant::now());
        summary.add_report(&report("bad.png", vec![], vec!["boom".to_string()]));

        assert_eq!(summary.total_fails, 1);
        assert_eq!(summary.faults, 1);
    }

    #[test]
    fn durations_format_like_a_stopwatch() {
        assert_eq!(format_duration(&Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_duration(&Duration::from_secs(90)), "1m 30s");
    }
}
