//! Adapters layer: Concrete implementations of the ports.

pub mod http;

pub use http::HttpPredictor;
