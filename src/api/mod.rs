pub mod endpoints;
pub mod response;
pub mod schemas;

pub use endpoints::{Endpoint, HttpMethod};
pub use response::{decode_response, encode_request};
