pub mod nameserver_lookup;
pub mod system_conf;

pub use nameserver_lookup::SystemNameserverLookup;
pub use system_conf::system_resolvers;
