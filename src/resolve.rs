//! Address resolution for ACL fields and target arguments.

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

use crate::entry::{AclEntry, RawToken};
use crate::error::{Error, Result};
use crate::options::Direction;
use crate::AddressSet;

/// How an ambiguous dotted mask should be read first.
///
/// `0.0.0.0` and `255.255.255.255` are valid both as wildcard masks and as
/// subnet masks, with opposite meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// Set bits mark "don't care" positions (`0.0.0.255` is a /24)
    Wildcard,
    /// Set bits mark the network part (`255.255.255.0` is a /24)
    Netmask,
}

impl MaskKind {
    fn other(self) -> Self {
        match self {
            MaskKind::Wildcard => MaskKind::Netmask,
            MaskKind::Netmask => MaskKind::Wildcard,
        }
    }

    fn prefix_len(self, bits: u32) -> Option<u8> {
        match self {
            MaskKind::Wildcard if bits.trailing_ones() + bits.leading_zeros() == 32 => {
                Some((32 - bits.trailing_ones()) as u8)
            }
            MaskKind::Netmask if bits.leading_ones() + bits.trailing_zeros() == 32 => {
                Some(bits.leading_ones() as u8)
            }
            _ => None,
        }
    }
}

/// Convert a dotted mask into a prefix length.
///
/// The `preferred` reading is tried first. Returns `None` for masks with
/// non-contiguous bits.
pub fn mask_prefix(mask: Ipv4Addr, preferred: MaskKind) -> Option<u8> {
    let bits = u32::from(mask);
    preferred
        .prefix_len(bits)
        .or_else(|| preferred.other().prefix_len(bits))
}

/// Parse a dotted-quad IPv4 literal from an ACL field.
pub fn parse_ipv4(token: &str) -> Result<Ipv4Addr> {
    token
        .parse::<Ipv4Addr>()
        .map_err(|_| Error::address(token, "not a valid IPv4 address"))
}

/// Build the network for an `<address> <mask>` field pair.
pub fn parse_network(addr: &str, mask: &str) -> Result<Ipv4Net> {
    let base = parse_ipv4(addr)?;
    let mask_addr = parse_ipv4(mask)?;
    let prefix = mask_prefix(mask_addr, MaskKind::Wildcard)
        .ok_or_else(|| Error::address(mask, "mask bits are not contiguous"))?;
    Ipv4Net::new(base, prefix)
        .map(|net| net.trunc())
        .map_err(|e| Error::address(mask, e.to_string()))
}

/// Resolve a raw ACL field into an address set.
pub fn resolve_token(token: &RawToken<'_>) -> Result<AddressSet> {
    match *token {
        RawToken::Any => Ok(AddressSet::universal()),
        RawToken::Host(addr) => parse_ipv4(addr).map(AddressSet::host),
        RawToken::Network(addr, mask) => parse_network(addr, mask).map(AddressSet::from_net),
    }
}

/// Parse one caller-supplied target.
///
/// Accepts `a.b.c.d`, `a.b.c.d/len` and `a.b.c.d/m.m.m.m`.
pub fn parse_target(arg: &str) -> Result<AddressSet> {
    let arg = arg.trim();
    let invalid = || Error::InvalidTarget(arg.to_string());

    let Some((addr, suffix)) = arg.split_once('/') else {
        return arg
            .parse::<Ipv4Addr>()
            .map(AddressSet::host)
            .map_err(|_| invalid());
    };

    let base: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
    let prefix = if suffix.contains('.') {
        let mask: Ipv4Addr = suffix.parse().map_err(|_| invalid())?;
        mask_prefix(mask, MaskKind::Netmask).ok_or_else(invalid)?
    } else {
        suffix.parse::<u8>().map_err(|_| invalid())?
    };

    Ipv4Net::new(base, prefix)
        .map(AddressSet::from_net)
        .map_err(|_| invalid())
}

/// Parse and union every caller-supplied target.
pub fn parse_targets<I, S>(args: I) -> Result<AddressSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut nets = Vec::new();
    for arg in args {
        let set = parse_target(arg.as_ref())?;
        nets.extend_from_slice(set.networks());
    }
    Ok(AddressSet::from_nets(nets))
}

/// Resolved source and destination of an ACL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub source: AddressSet,
    pub destination: AddressSet,
}

impl Endpoints {
    /// Resolve both fields. A failure on either field fails the whole entry.
    pub fn resolve(entry: &AclEntry<'_>) -> Result<Self> {
        Ok(Self {
            source: resolve_token(&entry.source)?,
            destination: resolve_token(&entry.destination)?,
        })
    }

    /// The set searched in the given direction.
    pub fn select(&self, direction: Direction) -> &AddressSet {
        match direction {
            Direction::Source => &self.source,
            Direction::Destination => &self.destination,
        }
    }
}

/// An ACL line after classification and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Verbatim line text
    pub text: &'a str,
    pub commented: bool,
    /// `None` when a field failed to resolve
    pub endpoints: Option<Endpoints>,
}

impl<'a> ParsedLine<'a> {
    /// Classify and resolve a line.
    ///
    /// Returns `None` for lines that are not ACL entries at all.
    pub fn parse(text: &'a str) -> Option<Self> {
        let entry = AclEntry::classify(text)?;
        let endpoints = match Endpoints::resolve(&entry) {
            Ok(endpoints) => Some(endpoints),
            Err(e) => {
                log::debug!("invalid ACL line {:?}: {}", text, e);
                None
            }
        };

        Some(Self {
            text,
            commented: entry.commented,
            endpoints,
        })
    }

    /// Whether the line failed to resolve.
    pub fn is_invalid(&self) -> bool {
        self.endpoints.is_none()
    }
}
