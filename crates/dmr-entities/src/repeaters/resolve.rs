use std::collections::HashSet;
use std::net::{IpAddr, ToSocketAddrs};

/// Hostname resolution seam, separated out so tests can stub the
/// system name service.
pub trait HostResolver {
    fn resolve(&mut self, host: &str) -> Option<IpAddr>;
}

/// Resolver backed by the system name service.
pub struct DnsResolver;

impl HostResolver for DnsResolver {
    fn resolve(&mut self, host: &str) -> Option<IpAddr> {
        // ToSocketAddrs wants a port; any value works for a plain lookup
        (host, 0).to_socket_addrs().ok()?.next().map(|sa| sa.ip())
    }
}

/// Resolve a comma-separated ignore list of hostnames to addresses.
/// Unresolvable entries are skipped, never fatal.
pub fn resolve_ignored_hosts(hosts_csv: &str, resolver: &mut dyn HostResolver) -> HashSet<IpAddr> {
    let mut ignored = HashSet::new();
    for host in hosts_csv.split(',').map(str::trim).filter(|h| !h.is_empty()) {
        match resolver.resolve(host) {
            Some(addr) => {
                ignored.insert(addr);
            }
            None => tracing::debug!("can't resolve hostname {}", host),
        }
    }
    ignored
}
