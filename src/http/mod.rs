//! HTTP clients able to carry a send-raw request.
//!
//! The transport does not speak HTTP itself. It hands a [`SendRawRequest`] to
//! an [`HttpClient`], wrapped in [`PostOptions`] telling the client how to
//! encode it. Two client generations exist in the wild: newer ones take the
//! payload as form parameters, older ones as a single body parameter.
//! [`RequestEncoding`] captures which one a client is.

use crate::transport::mandrill::SendRawRequest;

#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub mod reqwest;

/// Blocking HTTP client used by the transport
pub trait HttpClient {
    /// Response produced by the client
    type Response;
    /// Error produced by the client
    type Error;

    /// Issues one POST request to `url`
    fn post(&self, url: &str, options: PostOptions<'_>) -> Result<Self::Response, Self::Error>;

    /// How this client wants payloads handed over
    fn encoding(&self) -> RequestEncoding {
        RequestEncoding::Form
    }
}

/// Request encoding convention of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestEncoding {
    /// Payload encoded as form fields
    #[default]
    Form,
    /// Payload passed as a single body parameter
    Body,
}

impl RequestEncoding {
    /// Encoding used by a client generation, given its major version
    ///
    /// Form parameters appeared with major version 6.
    pub fn from_major_version(major: u64) -> RequestEncoding {
        if major >= 6 {
            RequestEncoding::Form
        } else {
            RequestEncoding::Body
        }
    }

    /// Wraps `request` according to this encoding
    pub fn options(self, request: &SendRawRequest) -> PostOptions<'_> {
        match self {
            RequestEncoding::Form => PostOptions::FormParams(request),
            RequestEncoding::Body => PostOptions::Body(request),
        }
    }
}

/// Payload of a POST request, with its encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOptions<'a> {
    /// Send as `application/x-www-form-urlencoded` fields
    FormParams(&'a SendRawRequest),
    /// Send as a single body
    Body(&'a SendRawRequest),
}

impl<'a> PostOptions<'a> {
    /// The wrapped request
    pub fn request(&self) -> &'a SendRawRequest {
        match *self {
            PostOptions::FormParams(request) | PostOptions::Body(request) => request,
        }
    }

    /// Encoding selected for the request
    pub fn encoding(&self) -> RequestEncoding {
        match self {
            PostOptions::FormParams(_) => RequestEncoding::Form,
            PostOptions::Body(_) => RequestEncoding::Body,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{PostOptions, RequestEncoding};
    use crate::transport::mandrill::SendRawRequest;

    #[test]
    fn encoding_from_major_version() {
        assert_eq!(RequestEncoding::from_major_version(7), RequestEncoding::Form);
        assert_eq!(RequestEncoding::from_major_version(6), RequestEncoding::Form);
        assert_eq!(RequestEncoding::from_major_version(5), RequestEncoding::Body);
        assert_eq!(RequestEncoding::from_major_version(0), RequestEncoding::Body);
    }

    #[test]
    fn options_keep_request() {
        let request = SendRawRequest::new("key", vec!["a@domain.tld".to_owned()], "raw");

        let form = RequestEncoding::Form.options(&request);
        let body = RequestEncoding::Body.options(&request);

        assert!(matches!(form, PostOptions::FormParams(_)));
        assert!(matches!(body, PostOptions::Body(_)));
        assert_eq!(form.request(), body.request());
        assert_eq!(form.encoding(), RequestEncoding::Form);
        assert_eq!(body.encoding(), RequestEncoding::Body);
    }
}
