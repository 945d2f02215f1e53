//! IPv4 address set implementation.

use ipnet::Ipv4Net;
use std::fmt;
use std::net::Ipv4Addr;

/// AddressSet is an immutable set of IPv4 addresses stored as CIDR blocks.
///
/// Networks are kept aggregated and sorted, so two sets covering the same
/// addresses compare equal no matter how they were built.
///
/// # Examples
/// ```
/// use acl_searcher::AddressSet;
///
/// let set = AddressSet::from_nets(["10.0.0.0/25".parse().unwrap(), "10.0.0.128/25".parse().unwrap()]);
/// assert_eq!(set, AddressSet::from_net("10.0.0.0/24".parse().unwrap()));
/// assert!(set.contains("10.0.0.77".parse().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AddressSet {
    nets: Vec<Ipv4Net>,
}

impl AddressSet {
    /// Create a set holding no addresses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The set of every IPv4 address (0.0.0.0/0).
    pub fn universal() -> Self {
        Self {
            nets: vec![Ipv4Net::default()],
        }
    }

    /// Create a set holding a single address.
    pub fn host(addr: Ipv4Addr) -> Self {
        Self {
            nets: vec![Ipv4Net::from(addr)],
        }
    }

    /// Create a set from one network. Host bits are dropped.
    pub fn from_net(net: Ipv4Net) -> Self {
        Self {
            nets: vec![net.trunc()],
        }
    }

    /// Create a set from any number of networks.
    pub fn from_nets<I: IntoIterator<Item = Ipv4Net>>(nets: I) -> Self {
        let nets: Vec<Ipv4Net> = nets.into_iter().collect();
        Self {
            nets: Ipv4Net::aggregate(&nets),
        }
    }

    /// Return a new set holding the addresses of both sets.
    pub fn union(&self, other: &AddressSet) -> AddressSet {
        Self::from_nets(self.nets.iter().chain(other.nets.iter()).copied())
    }

    /// Check whether the two sets share at least one address.
    pub fn intersects(&self, other: &AddressSet) -> bool {
        // CIDR blocks either nest or are disjoint
        self.nets
            .iter()
            .any(|a| other.nets.iter().any(|b| a.contains(b) || b.contains(a)))
    }

    /// Check whether an address is in the set.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.nets.iter().any(|net| net.contains(&addr))
    }

    /// Whether this set covers the whole IPv4 space.
    pub fn is_universal(&self) -> bool {
        self.nets.len() == 1 && self.nets[0].prefix_len() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// The aggregated networks making up this set.
    pub fn networks(&self) -> &[Ipv4Net] {
        &self.nets
    }
}

impl FromIterator<Ipv4Net> for AddressSet {
    fn from_iter<T: IntoIterator<Item = Ipv4Net>>(iter: T) -> Self {
        Self::from_nets(iter)
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nets: Vec<String> = self.nets.iter().map(|n| n.to_string()).collect();
        write!(f, "{{{}}}", nets.join(", "))
    }
}
