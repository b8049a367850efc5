pub mod events;
pub mod registry;
pub mod repeater;
pub mod resolve;

pub use events::RepeaterEvents;
pub use registry::{RegistryErr, RepeaterRegistry};
pub use repeater::{Repeater, RepeaterSlot};
pub use resolve::{DnsResolver, HostResolver, resolve_ignored_hosts};
