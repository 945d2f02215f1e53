//! Line-by-line ACL scanning with streaming output.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::matcher::Matcher;
use crate::options::SearchOptions;
use crate::resolve::ParsedLine;
use crate::section::SectionGate;
use crate::AddressSet;

/// Header of the trailing invalid-line report.
pub const INVALID_HEADER: &str = "Invalid ACLs";
/// Separator printed under [`INVALID_HEADER`].
pub const INVALID_SEPARATOR: &str = "------------";

/// What happened to a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Suppressed by the section gate
    Skipped,
    /// Not an ACL entry
    Unrecognized,
    /// Commented-out entry that was not searched
    Ignored,
    /// Entry whose fields failed to resolve
    Invalid,
    /// Entry searched without a match
    NoMatch,
    /// Entry printed as a match
    Matched,
}

/// Counters collected over a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub lines: usize,
    pub skipped: usize,
    pub classified: usize,
    pub matched: usize,
    pub invalid: usize,
}

/// Single-pass scanner over ACL configuration lines.
///
/// Matches are written to the output as they are found. Invalid lines are
/// collected and written as a report by [`Scanner::finish`].
pub struct Scanner<W: Write> {
    matcher: Matcher,
    gate: SectionGate,
    out: W,
    invalid: Vec<String>,
    summary: ScanSummary,
}

impl<W: Write> Scanner<W> {
    /// Create a scanner writing to `out`.
    pub fn new(targets: AddressSet, options: SearchOptions, out: W) -> Self {
        let gate = SectionGate::new(options.disable_flag.clone(), options.reenable_flag.clone());
        Self {
            matcher: Matcher::new(targets, options),
            gate,
            out,
            invalid: Vec::new(),
            summary: ScanSummary::default(),
        }
    }

    /// Process one line of input.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome> {
        let line = line.trim_end();
        self.summary.lines += 1;

        if !self.gate.admit(line) {
            self.summary.skipped += 1;
            return Ok(LineOutcome::Skipped);
        }

        let Some(parsed) = ParsedLine::parse(line) else {
            log::trace!("not an ACL entry: {:?}", line);
            return Ok(LineOutcome::Unrecognized);
        };

        if parsed.commented && !self.matcher.options().include_comments {
            return Ok(LineOutcome::Ignored);
        }
        self.summary.classified += 1;

        let Some(endpoints) = parsed.endpoints else {
            // Broken commented-out entries are dropped, never reported
            if parsed.commented {
                return Ok(LineOutcome::Ignored);
            }
            self.invalid.push(line.to_string());
            self.summary.invalid += 1;
            return Ok(LineOutcome::Invalid);
        };

        if !self.matcher.matches(&endpoints) {
            return Ok(LineOutcome::NoMatch);
        }

        writeln!(self.out, "{}", line)?;
        self.summary.matched += 1;
        Ok(LineOutcome::Matched)
    }

    /// Process every line from a reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than aborting the
    /// scan.
    pub fn scan<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Invalid lines seen so far, in input order.
    pub fn invalid_lines(&self) -> &[String] {
        &self.invalid
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Write the invalid-line report (unless the mode suppresses it) and
    /// flush the output.
    pub fn finish(&mut self) -> Result<ScanSummary> {
        if self.matcher.options().mode.reports_invalid() && !self.invalid.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "{}", INVALID_HEADER)?;
            writeln!(self.out, "{}", INVALID_SEPARATOR)?;
            for line in &self.invalid {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()?;

        let s = self.summary;
        log::info!(
            "scanned {} lines: {} entries, {} matched, {} invalid, {} skipped",
            s.lines,
            s.classified,
            s.matched,
            s.invalid,
            s.skipped
        );
        Ok(s)
    }

    /// Consume the scanner and return the output.
    pub fn into_inner(self) -> W {
        self.out
    }
}
