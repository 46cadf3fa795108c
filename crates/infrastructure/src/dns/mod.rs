pub mod nameserver_client;
pub mod transport;
pub mod wire;

pub use nameserver_client::HickoryNameserverClient;
