//! Best-effort extraction of structured workarounds from a free-text answer.
//!
//! Answers are expected to look like
//!
//! ```text
//! Workaround 1:
//! Problem Statement: ...
//! Root Cause: ...
//! Solution:
//! Step 1: ...
//! Step 2: ...
//! References:
//! https://...
//! ---
//! Workaround 2:
//! ...
//! ```
//!
//! Older answers used `Solution N: <title>` headings followed by `Step N:`
//! lines; those are still understood. Anything else is returned as
//! [`ParsedResponse::Unparsed`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Characters of the raw answer quoted in the synthetic error record.
pub const RAW_EXCERPT_CHARS: usize = 200;

static WORKAROUND_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Workaround \d+:").expect("valid heading pattern"));
static PROBLEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Problem Statement:\s*(.*?)(?:Root Cause:|Solution:|References:|---|$)").expect("valid pattern")
});
static ROOT_CAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Root Cause:\s*(.*?)(?:Solution:|References:|---|$)").expect("valid pattern")
});
static SOLUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Solution:\s*(.*?)(?:References:|---|$)").expect("valid pattern")
});
static REFERENCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)References:\s*(.*?)(?:---|$)").expect("valid pattern"));
static STEP_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Step \d+:").expect("valid step pattern"));
static LEGACY_SOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Solution\s+(\d+):\s*(.+)").expect("valid pattern"));
static LEGACY_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Step\s+(\d+):\s*(.+)").expect("valid pattern"));

/// One suggested way around the user's problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workaround {
    pub problem_statement: String,
    pub root_cause: String,
    pub steps: Vec<String>,
    pub references: Vec<String>,
}

/// Result of [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// At least one workaround was recognised.
    Structured(Vec<Workaround>),
    /// Nothing recognisable; the raw text is kept.
    Unparsed(String),
}

impl ParsedResponse {
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Records to display. An unparsed answer becomes a single synthetic
    /// "Error Parsing Response" record quoting the start of the raw text.
    #[must_use]
    pub fn records(&self) -> Vec<Workaround> {
        match self {
            Self::Structured(workarounds) => workarounds.clone(),
            Self::Unparsed(raw) => {
                let excerpt: String = raw.chars().take(RAW_EXCERPT_CHARS).collect();
                vec![Workaround {
                    problem_statement: "Error Parsing Response".to_string(),
                    root_cause: String::new(),
                    steps: vec![
                        "Step 1: The AI response couldn't be parsed correctly.".to_string(),
                        format!("Step 2: Raw response: {excerpt}..."),
                    ],
                    references: Vec::new(),
                }]
            }
        }
    }
}

/// Parses a free-text answer.
#[must_use]
pub fn parse(text: &str) -> ParsedResponse {
    let workarounds = parse_sections(text);
    if !workarounds.is_empty() {
        return ParsedResponse::Structured(workarounds);
    }
    if text.contains("Solution") {
        let legacy = parse_legacy(text);
        if !legacy.is_empty() {
            debug!(count = legacy.len(), "parsed answer in legacy solution format");
            return ParsedResponse::Structured(legacy);
        }
    }
    debug!("answer did not match any known format");
    ParsedResponse::Unparsed(text.to_string())
}

/// Slices `text` at every match start of `heading`, dropping the preamble.
fn split_at_headings<'a>(text: &'a str, heading: &Regex) -> Vec<&'a str> {
    let starts: Vec<usize> = heading.find_iter(text).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().trim().to_string())
}

fn parse_sections(text: &str) -> Vec<Workaround> {
    split_at_headings(text, &WORKAROUND_HEADING)
        .into_iter()
        .map(str::trim)
        .filter_map(|section| {
            let workaround = Workaround {
                problem_statement: capture(&PROBLEM, section).unwrap_or_default(),
                root_cause: capture(&ROOT_CAUSE, section).unwrap_or_default(),
                steps: capture(&SOLUTION, section)
                    .map(|solution| {
                        split_at_headings(&solution, &STEP_HEADING)
                            .into_iter()
                            .map(|step| step.trim().to_string())
                            .collect()
                    })
                    .unwrap_or_default(),
                references: capture(&REFERENCES, section)
                    .map(|refs| {
                        refs.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(ToString::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            };
            (!workaround.problem_statement.is_empty() || !workaround.steps.is_empty())
                .then_some(workaround)
        })
        .collect()
}

/// Line-oriented reader for `Solution N: <title>` / `Step N: <text>` answers.
#[derive(Default)]
struct LegacyReader {
    done: Vec<Workaround>,
    current: Option<Workaround>,
    step: String,
}

impl LegacyReader {
    fn flush_step(&mut self) {
        if let Some(current) = self.current.as_mut() {
            let step = std::mem::take(&mut self.step);
            let step = step.trim();
            if !step.is_empty() {
                current.steps.push(step.to_string());
            }
        }
    }

    fn flush_solution(&mut self) {
        self.flush_step();
        if let Some(finished) = self.current.take() {
            if !finished.steps.is_empty() {
                self.done.push(finished);
            }
        }
    }

    fn line(&mut self, line: &str) {
        if let Some(captures) = LEGACY_SOLUTION.captures(line) {
            self.flush_solution();
            self.current = Some(Workaround {
                problem_statement: captures[2].trim().to_string(),
                ..Workaround::default()
            });
        } else if self.current.is_some() {
            if let Some(captures) = LEGACY_STEP.captures(line) {
                self.flush_step();
                self.step = format!("Step {}: {}", &captures[1], captures[2].trim());
            } else if self.step.is_empty() {
                self.step = line.to_string();
            } else {
                self.step.push(' ');
                self.step.push_str(line);
            }
        }
    }

    fn finish(mut self) -> Vec<Workaround> {
        self.flush_solution();
        self.done
    }
}

fn parse_legacy(text: &str) -> Vec<Workaround> {
    let mut reader = LegacyReader::default();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .for_each(|line| reader.line(line));
    reader.finish()
}
