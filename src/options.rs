//! Search configuration types.

use std::fmt;

/// Which field of an ACL entry is compared against the targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Match on the source field
    Source,
    /// Match on the destination field
    #[default]
    Destination,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Source => "source",
            Direction::Destination => "destination",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output mode. The modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Print matching lines, then the invalid-line report
    #[default]
    Default,
    /// Print only the invalid-line report
    InvalidOnly,
    /// Print lines whose searched field is `any`, then the invalid-line report
    AnyOnly,
    /// Print matching lines without the invalid-line report
    Quiet,
}

impl Mode {
    /// Build the mode from the three exclusive switches.
    ///
    /// Returns `None` when more than one switch is set.
    pub fn from_flags(invalid: bool, any: bool, quiet: bool) -> Option<Self> {
        match (invalid, any, quiet) {
            (false, false, false) => Some(Mode::Default),
            (true, false, false) => Some(Mode::InvalidOnly),
            (false, true, false) => Some(Mode::AnyOnly),
            (false, false, true) => Some(Mode::Quiet),
            _ => None,
        }
    }

    /// Whether the invalid-line report is printed at the end.
    pub fn reports_invalid(&self) -> bool {
        !matches!(self, Mode::Quiet)
    }

    /// Whether the target addresses take part in matching.
    pub fn uses_targets(&self) -> bool {
        matches!(self, Mode::Default | Mode::Quiet)
    }
}

/// Options for a scan, fixed for its whole duration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub direction: Direction,
    /// Let `any` fields match every target
    pub verbose: bool,
    /// Also search commented-out entries
    pub include_comments: bool,
    pub mode: Mode,
    /// Lines containing this text suspend the search
    pub disable_flag: Option<String>,
    /// Lines containing this text resume the search
    pub reenable_flag: Option<String>,
}

impl SearchOptions {
    /// Create options with the defaults: destination search, default mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the section markers. Empty strings count as unset.
    pub fn with_section_flags(
        mut self,
        disable: Option<impl Into<String>>,
        reenable: Option<impl Into<String>>,
    ) -> Self {
        self.disable_flag = non_empty(disable);
        self.reenable_flag = non_empty(reenable);
        self
    }
}

fn non_empty(flag: Option<impl Into<String>>) -> Option<String> {
    flag.map(Into::into).filter(|s| !s.is_empty())
}
