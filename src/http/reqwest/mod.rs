//! Blocking HTTP client built on `reqwest`.
//!
//! Form parameters are sent as `application/x-www-form-urlencoded`, a body
//! parameter as a JSON document. Non-success statuses are turned into errors
//! carrying the response text. Timeouts are set here, through
//! [`ReqwestClientBuilder::timeout`].
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use mandrill_transport::{http::reqwest::ReqwestClient, MandrillTransport, RequestEncoding};
//!
//! let client = ReqwestClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .encoding(RequestEncoding::Body)
//!     .build()
//!     .unwrap();
//! let transport = MandrillTransport::new(&client, "my-api-key");
//! assert_eq!(transport.encoding(), RequestEncoding::Body);
//! ```

use std::time::Duration;

use ::reqwest::{
    blocking::{Client, Response},
    header::CONTENT_TYPE,
};

use self::error::Error;
use super::{HttpClient, PostOptions, RequestEncoding};

pub mod error;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `HttpClient` over a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    encoding: RequestEncoding,
}

impl ReqwestClient {
    /// Creates a client with default settings
    pub fn new() -> Result<ReqwestClient, Error> {
        ReqwestClient::builder().build()
    }

    /// Creates a new client builder
    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::default()
    }

    /// Wraps an already configured `reqwest` client, using form parameters
    pub fn from_client(client: Client) -> ReqwestClient {
        ReqwestClient {
            client,
            encoding: RequestEncoding::Form,
        }
    }
}

impl HttpClient for ReqwestClient {
    type Response = Response;
    type Error = Error;

    fn post(&self, url: &str, options: PostOptions<'_>) -> Result<Response, Error> {
        let request = self.client.post(url);
        let request = match options {
            PostOptions::FormParams(payload) => {
                let body = serde_urlencoded::to_string(payload.form_fields())
                    .map_err(error::serialization)?;
                request
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body)
            }
            PostOptions::Body(payload) => request.json(payload),
        };

        let response = request.send().map_err(error::network)?;
        let status = response.status();

        #[cfg(feature = "tracing")]
        tracing::debug!("{} answered {}", url, status);

        if status.is_success() {
            Ok(response)
        } else {
            match response.text() {
                Ok(body) => Err(error::status(status, body)),
                Err(err) => Err(error::unreadable_status(status, err)),
            }
        }
    }

    fn encoding(&self) -> RequestEncoding {
        self.encoding
    }
}

/// Configures a [`ReqwestClient`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    encoding: RequestEncoding,
}

impl ReqwestClientBuilder {
    /// Total time allowed for one request, from connect to end of body
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` header value
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// How payloads are encoded
    pub fn encoding(mut self, encoding: RequestEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builds the client
    pub fn build(self) -> Result<ReqwestClient, Error> {
        let mut builder = Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestClient {
            client: builder.build().map_err(error::builder)?,
            encoding: self.encoding,
        })
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::ReqwestClient;
    use crate::http::{HttpClient, RequestEncoding};

    #[test]
    fn default_encoding_is_form() {
        let client = ReqwestClient::new().unwrap();
        assert_eq!(client.encoding(), RequestEncoding::Form);
    }

    #[test]
    fn builder_settings() {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .encoding(RequestEncoding::Body)
            .build()
            .unwrap();

        assert_eq!(client.encoding(), RequestEncoding::Body);
    }

    #[test]
    fn wraps_existing_client() {
        let client = ReqwestClient::from_client(::reqwest::blocking::Client::new());
        assert_eq!(client.encoding(), RequestEncoding::Form);
    }
}
