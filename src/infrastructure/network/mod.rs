pub mod api_client;
pub mod prober;

pub use api_client::HttpApiTransport;
pub use prober::HttpConnectivityProbe;
