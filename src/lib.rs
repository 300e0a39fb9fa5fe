//! mandrill-transport delivers already composed email messages through
//! [Mandrill](https://mandrillapp.com)'s `messages/send-raw` API.
//!
//! The crate is thin glue: it reads the recipient groups of a message, builds
//! one send-raw request and hands it to an HTTP client you provide. Message
//! construction and HTTP transport stay with the libraries that own them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "reqwest")]
//! # {
//! use mandrill_transport::{MandrillTransport, RawEmail, ReqwestClient};
//!
//! let email = RawEmail::new("From: nobody@domain.tld\r\nTo: hei@domain.tld\r\n\r\nBe happy!")
//!     .add_to("hei@domain.tld", Some("Hei"))
//!     .add_bcc("archive@domain.tld", None);
//!
//! let client = ReqwestClient::new().unwrap();
//! let transport = MandrillTransport::new(&client, "my-api-key");
//! let result = transport.send(&email);
//! assert!(result.is_ok());
//! # }
//! ```
//!
//! ## Optional features
//!
//! * **reqwest**: blocking HTTP client built on `reqwest` (default)
//! * **rustls-tls**: TLS support for the reqwest client with the `rustls` crate (default)
//! * **native-tls**: TLS support for the reqwest client with the `native-tls` crate
//! * **lettre**: send `lettre::Message` values and use the transport as a `lettre::Transport`
//! * **tracing**: Logging using the `tracing` crate

#![doc(html_root_url = "https://docs.rs/mandrill-transport/0.1.0")]
#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    missing_debug_implementations,
    missing_docs
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod http;
pub mod message;
pub mod transport;

#[cfg(feature = "reqwest")]
pub use crate::http::reqwest::ReqwestClient;
pub use crate::{
    http::{HttpClient, PostOptions, RequestEncoding},
    message::{Email, RawEmail, Recipients},
    transport::mandrill::{MandrillTransport, SendRawRequest, MANDRILL_SEND_RAW_URL},
};

#[cfg(feature = "reqwest")]
pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
