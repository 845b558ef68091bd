//! Record gateway for the creel fishing-log client.
//!
//! Defines the [`RecordGateway`](gateway::RecordGateway) seam the rest of
//! the client depends on, the [`GatewayError`](error::GatewayError)
//! taxonomy for everything that can go wrong on the wire, and the
//! [`reqwest`]-backed [`HttpRecordGateway`](http::HttpRecordGateway)
//! that talks to the fishing-log API with a bearer credential.

pub mod error;
pub mod gateway;
pub mod http;

pub use error::GatewayError;
pub use gateway::{RecordGateway, TokenProvider};
pub use http::HttpRecordGateway;
