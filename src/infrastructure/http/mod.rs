//! HTTP access to the Arena hypermedia API.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
