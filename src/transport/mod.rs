//! ### Sending Messages
//!
//! The [`MandrillTransport`](mandrill::MandrillTransport) posts each message to
//! Mandrill's `messages/send-raw` endpoint through an [`HttpClient`](crate::HttpClient)
//! owned by the caller. The message goes out as already serialized text, so
//! any mail library able to format a message can feed it.
//!
//! With the `lettre` feature the transport also implements `lettre::Transport`
//! and sits next to lettre's own SMTP, sendmail and file transports.

pub mod mandrill;
