//! ACL line classification.
//!
//! Recognized grammar (tokens are whitespace separated):
//!
//! ```text
//! ["!"] ["access-list" [<number>]] ("permit" | "deny") <protocol>
//!     <field> [<qualifier>] <field> [<ignored>...]
//!
//! field     := "any" | "host" <dotted> | <dotted> <dotted>
//! qualifier := ("eq" | "neq" | "gt" | "lt") <token> | "range" <token> <token>
//! ```
//!
//! `<dotted>` is any token made of digits and dots. Range checks on the
//! octets happen later, in [`crate::resolve`].

use std::fmt;

use crate::token::{is_dotted, Tokens};

/// Action keyword of an ACL entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Permit,
    Deny,
}

impl Action {
    /// Parse an action keyword (case-sensitive, as written in configs).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "permit" => Some(Action::Permit),
            "deny" => Some(Action::Deny),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Permit => "permit",
            Action::Deny => "deny",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw address field of an ACL entry, as written in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawToken<'a> {
    /// The `any` keyword
    Any,
    /// `host <address>`
    Host(&'a str),
    /// `<address> <wildcard-or-mask>`
    Network(&'a str, &'a str),
}

impl fmt::Display for RawToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::Any => write!(f, "any"),
            RawToken::Host(addr) => write!(f, "host {}", addr),
            RawToken::Network(addr, mask) => write!(f, "{} {}", addr, mask),
        }
    }
}

/// Structural match of an ACL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclEntry<'a> {
    /// Line started with a comment marker
    pub commented: bool,
    /// Number following `access-list`, if any
    pub list: Option<&'a str>,
    pub action: Action,
    /// Protocol token, not validated
    pub protocol: &'a str,
    pub source: RawToken<'a>,
    pub destination: RawToken<'a>,
}

impl<'a> AclEntry<'a> {
    /// Classify a line.
    ///
    /// Returns `None` when the line is not a permit/deny statement (or a
    /// commented-out one). That is not an error: such lines are skipped.
    pub fn classify(line: &'a str) -> Option<Self> {
        let mut tokens = Tokens::new(line);
        let commented = tokens.is_commented();

        let list = if tokens.eat("access-list") {
            tokens.next_if(|tok| tok.bytes().all(|b| b.is_ascii_digit()))
        } else {
            None
        };

        let action = tokens.next().and_then(Action::parse)?;
        let protocol = tokens.next()?;
        let source = parse_field(&mut tokens)?;
        skip_qualifier(&mut tokens)?;
        let destination = parse_field(&mut tokens)?;

        Some(Self {
            commented,
            list,
            action,
            protocol,
            source,
            destination,
        })
    }
}

fn parse_field<'a>(tokens: &mut Tokens<'a>) -> Option<RawToken<'a>> {
    match tokens.next()? {
        "any" => Some(RawToken::Any),
        "host" => tokens.next_if(is_dotted).map(RawToken::Host),
        addr if is_dotted(addr) => tokens
            .next_if(is_dotted)
            .map(|mask| RawToken::Network(addr, mask)),
        _ => None,
    }
}

/// Consume an optional port qualifier between the two address fields.
///
/// Fails only when a qualifier keyword is missing its operands.
fn skip_qualifier(tokens: &mut Tokens<'_>) -> Option<()> {
    let operands = match tokens.peek() {
        Some("eq" | "neq" | "gt" | "lt") => 1,
        Some("range") => 2,
        _ => return Some(()),
    };
    tokens.next();
    for _ in 0..operands {
        tokens.next()?;
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_any() {
        let entry = AclEntry::classify("permit ip any any").unwrap();
        assert!(!entry.commented);
        assert_eq!(entry.action, Action::Permit);
        assert_eq!(entry.protocol, "ip");
        assert_eq!(entry.source, RawToken::Any);
        assert_eq!(entry.destination, RawToken::Any);
    }

    #[test]
    fn test_host_and_network() {
        let entry = AclEntry::classify("deny ip 10.1.1.0 0.0.0.255 host 8.8.8.8").unwrap();
        assert_eq!(entry.action, Action::Deny);
        assert_eq!(entry.source, RawToken::Network("10.1.1.0", "0.0.0.255"));
        assert_eq!(entry.destination, RawToken::Host("8.8.8.8"));
    }

    #[test]
    fn test_access_list_prefix() {
        let entry =
            AclEntry::classify("access-list 101 permit tcp host 10.0.0.1 any eq 80").unwrap();
        assert_eq!(entry.list, Some("101"));
        assert_eq!(entry.protocol, "tcp");
        assert_eq!(entry.source, RawToken::Host("10.0.0.1"));
        assert_eq!(entry.destination, RawToken::Any);
    }

    #[test]
    fn test_commented_entry() {
        let entry = AclEntry::classify("! access-list 5 deny udp any host 1.2.3.4").unwrap();
        assert!(entry.commented);
        assert_eq!(entry.destination, RawToken::Host("1.2.3.4"));

        let entry = AclEntry::classify("!permit ip any any").unwrap();
        assert!(entry.commented);
    }

    #[test]
    fn test_source_port_qualifiers() {
        let entry = AclEntry::classify("permit tcp any eq 22 host 10.0.0.5").unwrap();
        assert_eq!(entry.destination, RawToken::Host("10.0.0.5"));

        let entry = AclEntry::classify("permit udp host 1.1.1.1 neq 53 any").unwrap();
        assert_eq!(entry.source, RawToken::Host("1.1.1.1"));
        assert_eq!(entry.destination, RawToken::Any);

        let entry =
            AclEntry::classify("permit tcp 10.0.0.0 0.0.0.255 range 1024 65535 any log").unwrap();
        assert_eq!(entry.destination, RawToken::Any);

        assert!(AclEntry::classify("permit tcp any range 1024").is_none());
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let entry = AclEntry::classify("permit tcp any host 10.0.0.1 eq 443 log").unwrap();
        assert_eq!(entry.destination, RawToken::Host("10.0.0.1"));
    }

    #[test]
    fn test_protocol_is_free_form() {
        let entry = AclEntry::classify("permit 47 any any").unwrap();
        assert_eq!(entry.protocol, "47");
        let entry = AclEntry::classify("deny esp any any").unwrap();
        assert_eq!(entry.protocol, "esp");
    }

    #[test]
    fn test_indented_entry() {
        let entry = AclEntry::classify("  permit ip any host 192.168.1.1").unwrap();
        assert_eq!(entry.destination, RawToken::Host("192.168.1.1"));
    }

    #[test]
    fn test_malformed_octets_still_classify() {
        let entry = AclEntry::classify("permit ip host 999.999.999.999 any").unwrap();
        assert_eq!(entry.source, RawToken::Host("999.999.999.999"));
    }

    #[test]
    fn test_any_is_exact_keyword() {
        assert!(AclEntry::classify("permit ip an any").is_none());
        assert!(AclEntry::classify("permit ip anyx any").is_none());
        assert!(AclEntry::classify("permit ip ANY any").is_none());
    }

    #[test]
    fn test_structural_mismatch() {
        assert!(AclEntry::classify("").is_none());
        assert!(AclEntry::classify("!").is_none());
        assert!(AclEntry::classify("interface GigabitEthernet0/1").is_none());
        assert!(AclEntry::classify("remark permit web traffic").is_none());
        assert!(AclEntry::classify("permit ip any").is_none());
        assert!(AclEntry::classify("permit ip host any any").is_none());
        assert!(AclEntry::classify("permit ip 10.0.0.0/8 any").is_none());
        assert!(AclEntry::classify("permit ip 10.0.0.0 any").is_none());
        assert!(AclEntry::classify("access-list 10 permit 10.0.0.0 0.0.0.255").is_none());
        assert!(AclEntry::classify("allow ip any any").is_none());
    }

    #[test]
    fn test_raw_token_display() {
        assert_eq!(RawToken::Any.to_string(), "any");
        assert_eq!(RawToken::Host("1.2.3.4").to_string(), "host 1.2.3.4");
        assert_eq!(
            RawToken::Network("10.0.0.0", "0.0.0.255").to_string(),
            "10.0.0.0 0.0.0.255"
        );
    }
}
