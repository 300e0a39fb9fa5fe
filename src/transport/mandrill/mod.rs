//! The Mandrill transport sends each message with one call to the
//! `messages/send-raw` API.
//!
//! #### Mandrill Transport
//!
//! ```rust,no_run
//! # #[cfg(feature = "reqwest")]
//! # {
//! use mandrill_transport::{MandrillTransport, RawEmail, ReqwestClient};
//!
//! let email = RawEmail::new("From: nobody@domain.tld\r\nSubject: Happy new year\r\n\r\nBe happy!")
//!     .add_to("hei@domain.tld", Some("Hei"))
//!     .add_cc("yuin@domain.tld", None);
//!
//! let client = ReqwestClient::new().unwrap();
//! let mut transport = MandrillTransport::new(&client, "my-api-key");
//! assert_eq!(transport.send(&email).unwrap(), 2);
//!
//! transport.set_key("another-api-key");
//! # }
//! ```
//!
//! The request lists every `To`, `Cc` and `Bcc` address, in that order. The
//! provider still reads the `Cc` and `Bcc` headers present in the raw text.
//!
//! Nothing is retried and the response is not inspected: whatever the client
//! returns as an error comes back from [`MandrillTransport::send`] unchanged.

use crate::{
    http::{HttpClient, RequestEncoding},
    message::Email,
};

pub use self::request::SendRawRequest;

mod request;

/// Endpoint of the send-raw API
pub const MANDRILL_SEND_RAW_URL: &str = "https://mandrillapp.com/api/1.0/messages/send-raw.json";

/// Sends emails through the Mandrill send-raw API
///
/// The HTTP client is borrowed: the transport never closes or reconfigures it.
/// Changing the key needs `&mut self`, so it cannot race with a send on the
/// same transport. Concurrent sends through a shared reference are as safe as
/// the client is.
#[derive(Debug)]
pub struct MandrillTransport<'c, C> {
    client: &'c C,
    key: String,
    encoding: RequestEncoding,
}

impl<'c, C> MandrillTransport<'c, C>
where
    C: HttpClient,
{
    /// Creates a new transport posting through `client` with the given API key
    ///
    /// The request encoding is the one the client asks for.
    pub fn new<K: Into<String>>(client: &'c C, key: K) -> MandrillTransport<'c, C> {
        MandrillTransport {
            client,
            key: key.into(),
            encoding: client.encoding(),
        }
    }

    /// Forces the request encoding instead of the client's
    pub fn with_encoding(mut self, encoding: RequestEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Request encoding used by this transport
    pub fn encoding(&self) -> RequestEncoding {
        self.encoding
    }

    /// API key used by the transport
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sets the API key used by the transport
    pub fn set_key<K: Into<String>>(&mut self, key: K) {
        self.key = key.into();
    }

    /// Sends the email and returns the number of recipients
    ///
    /// The count is the sum of the `To`, `Cc` and `Bcc` group sizes. An address
    /// present in several groups is counted, and sent, once per group.
    pub fn send<M>(&self, email: &M) -> Result<usize, C::Error>
    where
        M: Email + ?Sized,
    {
        let request = self.request(recipients(email), email.raw_message().into_owned());
        self.post(&request)?;

        Ok(email.to().len() + email.cc().len() + email.bcc().len())
    }

    fn request(&self, to: Vec<String>, raw_message: String) -> SendRawRequest {
        SendRawRequest::new(self.key.clone(), to, raw_message)
    }

    fn post(&self, request: &SendRawRequest) -> Result<C::Response, C::Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            recipients = request.to.len(),
            encoding = ?self.encoding,
            "posting raw message to {}",
            MANDRILL_SEND_RAW_URL
        );

        self.client
            .post(MANDRILL_SEND_RAW_URL, self.encoding.options(request))
    }
}

/// Addresses the email is sent to: `To`, then `Cc`, then `Bcc`
///
/// Display names are dropped. Duplicates across groups are kept.
pub fn recipients<M>(email: &M) -> Vec<String>
where
    M: Email + ?Sized,
{
    let mut to = Vec::new();
    for group in [email.to(), email.cc(), email.bcc()] {
        to.extend(group.addresses().map(ToOwned::to_owned));
    }
    to
}

#[cfg(feature = "lettre")]
#[cfg_attr(docsrs, doc(cfg(feature = "lettre")))]
impl<C> ::lettre::Transport for MandrillTransport<'_, C>
where
    C: HttpClient,
{
    type Ok = usize;
    type Error = C::Error;

    fn send(&self, message: &::lettre::Message) -> Result<Self::Ok, Self::Error> {
        MandrillTransport::send(self, message)
    }

    /// Recipients are taken from the envelope, with no group information
    fn send_raw(
        &self,
        envelope: &::lettre::address::Envelope,
        email: &[u8],
    ) -> Result<Self::Ok, Self::Error> {
        let to: Vec<String> = envelope.to().iter().map(ToString::to_string).collect();
        let count = to.len();

        let request = self.request(to, String::from_utf8_lossy(email).into_owned());
        self.post(&request)?;

        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::{recipients, MandrillTransport, SendRawRequest};
    use crate::{
        http::{HttpClient, PostOptions, RequestEncoding},
        message::RawEmail,
    };

    #[derive(Debug, Default)]
    struct Recorder {
        requests: RefCell<Vec<(String, RequestEncoding, SendRawRequest)>>,
    }

    impl HttpClient for Recorder {
        type Response = ();
        type Error = ();

        fn post(&self, url: &str, options: PostOptions<'_>) -> Result<(), ()> {
            self.requests.borrow_mut().push((
                url.to_owned(),
                options.encoding(),
                options.request().clone(),
            ));
            Ok(())
        }
    }

    #[test]
    fn recipients_in_group_order() {
        let email = RawEmail::new("")
            .add_bcc("c@domain.tld", None)
            .add_cc("b@domain.tld", Some("B"))
            .add_to("a@domain.tld", Some("A"))
            .add_to("z@domain.tld", None);

        assert_eq!(
            recipients(&email),
            vec!["a@domain.tld", "z@domain.tld", "b@domain.tld", "c@domain.tld"]
        );
    }

    #[test]
    fn send_builds_request() {
        let client = Recorder::default();
        let transport = MandrillTransport::new(&client, "secret");
        let email = RawEmail::new("Subject: hi\r\n\r\nhello").add_to("a@domain.tld", None);

        assert_eq!(transport.send(&email), Ok(1));

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        let (url, encoding, request) = &requests[0];
        assert_eq!(url, super::MANDRILL_SEND_RAW_URL);
        assert_eq!(*encoding, RequestEncoding::Form);
        assert_eq!(
            *request,
            SendRawRequest::new("secret", vec!["a@domain.tld".to_owned()], "Subject: hi\r\n\r\nhello")
        );
    }

    #[test]
    fn encoding_override() {
        let client = Recorder::default();
        let transport =
            MandrillTransport::new(&client, "secret").with_encoding(RequestEncoding::Body);
        assert_eq!(transport.encoding(), RequestEncoding::Body);

        transport.send(&RawEmail::new("")).unwrap();
        assert_eq!(client.requests.borrow()[0].1, RequestEncoding::Body);
    }

    #[test]
    fn key_accessors() {
        let client = Recorder::default();
        let mut transport = MandrillTransport::new(&client, "first");
        assert_eq!(transport.key(), "first");

        transport.set_key("second");
        assert_eq!(transport.key(), "second");
        transport.set_key(String::new());
        assert_eq!(transport.key(), "");
    }
}
