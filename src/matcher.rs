//! Match policy for resolved ACL entries.

use crate::options::{Mode, SearchOptions};
use crate::resolve::Endpoints;
use crate::AddressSet;

/// Decides whether a resolved entry is reported.
///
/// # Examples
/// ```
/// use acl_searcher::{AddressSet, Matcher, ParsedLine, SearchOptions};
///
/// let targets = AddressSet::host("8.8.8.8".parse().unwrap());
/// let matcher = Matcher::new(targets, SearchOptions::new());
///
/// let line = ParsedLine::parse("deny ip 10.1.1.0 0.0.0.255 host 8.8.8.8").unwrap();
/// assert!(matcher.matches(line.endpoints.as_ref().unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    targets: AddressSet,
    options: SearchOptions,
}

impl Matcher {
    pub fn new(targets: AddressSet, options: SearchOptions) -> Self {
        Self { targets, options }
    }

    pub fn targets(&self) -> &AddressSet {
        &self.targets
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Check a resolved entry against the targets under the current mode.
    pub fn matches(&self, endpoints: &Endpoints) -> bool {
        let field = endpoints.select(self.options.direction);

        match self.options.mode {
            Mode::InvalidOnly => false,
            Mode::AnyOnly => field.is_universal(),
            Mode::Default | Mode::Quiet => {
                if field.is_universal() && !self.options.verbose {
                    return false;
                }
                self.targets.intersects(field)
            }
        }
    }
}
