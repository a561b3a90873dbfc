//! Typed model of the Alexa Skills Kit JSON envelopes.
//!
//! Only the parts of the wire format the skill reads or writes are modelled.
//! Unknown request fields are ignored on deserialization.

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;
