//! Device service client for bellboard.
//!
//! The panel talks to the device through the [`DeviceService`] trait: a
//! JSON `get` and a fire-and-forget `post`. [`HttpDeviceClient`] implements
//! it with a minimal HTTP/1.1 exchange over `std::net::TcpStream`; tests
//! and the panel's own composition use in-memory implementations.

pub mod http;
pub mod service;
pub mod wire;

pub use http::HttpDeviceClient;
pub use service::DeviceService;
