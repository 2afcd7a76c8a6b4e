//! Request descriptors: what to send and how to read the reply.
//!
//! # Design
//! An `ApiRequest` bundles the wire shape of one call (url, method,
//! headers, body) with the decoding of its success body into a typed
//! model. The client stays generic over descriptors, so adding an
//! endpoint never touches the pipeline.

use crate::error::ApiError;
use crate::http::{Headers, HttpMethod};

/// Describes one API call and how to decode its success body.
///
/// `decode` must be total over its byte input: malformed bodies return
/// `ApiError::Decode`, never panic. It runs only for 2xx responses that
/// carried a body.
pub trait ApiRequest {
    /// The typed model a successful call resolves to.
    type Model;

    fn url(&self) -> String;

    fn method(&self) -> HttpMethod;

    fn headers(&self) -> Option<&Headers> {
        None
    }

    fn body(&self) -> Option<&[u8]> {
        None
    }

    fn decode(&self, body: &[u8]) -> Result<Self::Model, ApiError>;
}
