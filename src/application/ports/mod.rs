pub mod api_transport;
pub mod connectivity;
pub mod offline_store;

pub use api_transport::ApiTransport;
pub use connectivity::ConnectivityProbe;
pub use offline_store::OfflineStore;
