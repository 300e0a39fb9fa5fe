use serde::Serialize;

/// Body of a `messages/send-raw` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRawRequest {
    /// Mandrill API key
    pub key: String,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Full serialized message
    pub raw_message: String,
    /// Whether Mandrill queues the message instead of answering with its status
    #[serde(rename = "async")]
    pub r#async: bool,
}

impl SendRawRequest {
    /// Creates an asynchronous send-raw request
    pub fn new<K, R>(key: K, to: Vec<String>, raw_message: R) -> SendRawRequest
    where
        K: Into<String>,
        R: Into<String>,
    {
        SendRawRequest {
            key: key.into(),
            to,
            raw_message: raw_message.into(),
            r#async: true,
        }
    }

    /// Request as ordered form fields
    ///
    /// Arrays become indexed fields (`to[0]`, `to[1]`, ...) and booleans `1`
    /// or `0`, the way PHP-style form decoders expect them.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.to.len() + 3);
        fields.push(("key".to_owned(), self.key.clone()));
        fields.extend(
            self.to
                .iter()
                .enumerate()
                .map(|(i, address)| (format!("to[{i}]"), address.clone())),
        );
        fields.push(("raw_message".to_owned(), self.raw_message.clone()));
        fields.push((
            "async".to_owned(),
            if self.r#async { "1" } else { "0" }.to_owned(),
        ));
        fields
    }
}
