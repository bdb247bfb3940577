pub mod http_method;

pub use http_method::HttpMethod;
