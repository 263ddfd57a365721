//! Client side of the remote propagation service: wire codec, HTTP transport,
//! and the controller that drives one logical request at a time.

pub mod controller;
pub mod service;
pub mod wire;

mod error;

pub use controller::{RequestController, RequestState, StateChange, Subscription, Ticket};
pub use error::ServiceError;
pub use service::{ComputeService, HttpComputeService, ServiceSettings};
pub use wire::decode_response;
