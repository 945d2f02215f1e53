//! ACL Searcher - find router ACL entries that reference given addresses.
//!
//! This crate scans router access-control-list configuration text and
//! reports the entries whose source or destination covers a set of target
//! IPv4 addresses or networks. Entries with malformed addresses are
//! collected and listed separately.
//!
//! # Features
//!
//! - **Loose ACL grammar**: `permit`/`deny` lines with an optional
//!   `access-list <n>` prefix, commented-out (`!`) entries and port
//!   qualifiers between the address fields
//! - **Address fields**: `any`, `host a.b.c.d` and `a.b.c.d w.w.w.w`
//!   (wildcard or subnet mask)
//! - **Search modes**: destination or source search, `any`-only and
//!   invalid-only listings
//! - **Section skipping**: suspend the search between two marker strings
//!
//! # Quick Start
//!
//! ```
//! use acl_searcher::{parse_targets, Scanner, SearchOptions};
//!
//! let config = "\
//! access-list 101 permit tcp host 10.0.0.1 any eq 80
//! access-list 101 deny ip 10.1.1.0 0.0.0.255 host 8.8.8.8
//! access-list 101 permit ip host 999.999.999.999 any
//! ";
//!
//! let targets = parse_targets(["8.8.8.8"]).unwrap();
//! let mut scanner = Scanner::new(targets, SearchOptions::new(), Vec::new());
//! scanner.scan(config.as_bytes()).unwrap();
//! let summary = scanner.finish().unwrap();
//!
//! assert_eq!(summary.matched, 1);
//! assert_eq!(summary.invalid, 1);
//! ```
//!
//! # Matching Rules
//!
//! - By default the destination field is searched; `any` never counts as a
//!   match unless verbose matching is enabled.
//! - In `any`-only mode a line is printed when the searched field covers
//!   the whole address space, whatever the targets are.
//! - Invalid lines are never matched. Invalid commented-out lines are
//!   dropped silently.

mod address;
mod error;

pub mod entry;
pub mod matcher;
pub mod options;
pub mod resolve;
pub mod scanner;
pub mod section;
pub mod token;

// Re-export core types
pub use address::AddressSet;
pub use error::{Error, Result};

pub use entry::{AclEntry, Action, RawToken};
pub use matcher::Matcher;
pub use options::{Direction, Mode, SearchOptions};
pub use resolve::{parse_target, parse_targets, resolve_token, Endpoints, MaskKind, ParsedLine};
pub use scanner::{LineOutcome, ScanSummary, Scanner};
pub use section::{SectionGate, SectionState};
