//! Messages handed to the transport.
//!
//! The transport never builds or parses emails. It only needs the three
//! recipient groups and the serialized text, which is what [`Email`] exposes.
//! [`RawEmail`] is a plain implementation for text produced elsewhere, and the
//! `lettre` feature implements [`Email`] for `lettre::Message`.

use std::{borrow::Cow, slice::Iter};

#[cfg(feature = "lettre")]
#[cfg_attr(docsrs, doc(cfg(feature = "lettre")))]
mod lettre;

/// Email as seen by a transport
pub trait Email {
    /// Addresses of the `To` header
    fn to(&self) -> Cow<'_, Recipients>;

    /// Addresses of the `Cc` header
    fn cc(&self) -> Cow<'_, Recipients>;

    /// Addresses of the `Bcc` header
    fn bcc(&self) -> Cow<'_, Recipients>;

    /// Full serialized message, headers and body
    fn raw_message(&self) -> Cow<'_, str>;
}

/// One recipient group: addresses mapped to optional display names
///
/// Addresses keep their insertion order. Inserting an address a second time
/// replaces its display name and leaves its position untouched, so a group
/// never holds the same address twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<(String, Option<String>)>);

impl Recipients {
    /// Creates an empty group
    pub fn new() -> Self {
        Recipients(Vec::new())
    }

    /// Adds `address`, or renames it if it is already present
    pub fn insert<A: Into<String>>(&mut self, address: A, name: Option<String>) {
        let address = address.into();
        match self.0.iter_mut().find(|(a, _)| *a == address) {
            Some(entry) => entry.1 = name,
            None => self.0.push((address, name)),
        }
    }

    /// Returns `true` if `address` is part of the group
    pub fn contains(&self, address: &str) -> bool {
        self.0.iter().any(|(a, _)| a == address)
    }

    /// Display name attached to `address`, if any
    pub fn name(&self, address: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(a, _)| a == address)
            .and_then(|(_, n)| n.as_deref())
    }

    /// Number of distinct addresses
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the group has no address
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Addresses in insertion order, without display names
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(a, _)| a.as_str())
    }

    /// Address and display name pairs in insertion order
    pub fn iter(&self) -> Iter<'_, (String, Option<String>)> {
        self.0.iter()
    }
}

impl<A: Into<String>> FromIterator<(A, Option<String>)> for Recipients {
    fn from_iter<T: IntoIterator<Item = (A, Option<String>)>>(iter: T) -> Self {
        let mut recipients = Recipients::new();
        recipients.extend(iter);
        recipients
    }
}

impl<A: Into<String>> Extend<(A, Option<String>)> for Recipients {
    fn extend<T: IntoIterator<Item = (A, Option<String>)>>(&mut self, iter: T) {
        for (address, name) in iter {
            self.insert(address, name);
        }
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a (String, Option<String>);
    type IntoIter = Iter<'a, (String, Option<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Already serialized email with its recipient groups
///
/// The text is sent as is. Recipient groups are not checked against the
/// headers found in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEmail {
    to: Recipients,
    cc: Recipients,
    bcc: Recipients,
    raw: String,
}

impl RawEmail {
    /// Creates an email from its serialized text, without recipients
    pub fn new<S: Into<String>>(raw: S) -> Self {
        RawEmail {
            raw: raw.into(),
            ..Default::default()
        }
    }

    /// Adds a `To` recipient
    pub fn add_to<A: Into<String>>(mut self, address: A, name: Option<&str>) -> Self {
        self.to.insert(address, name.map(ToOwned::to_owned));
        self
    }

    /// Adds a `Cc` recipient
    pub fn add_cc<A: Into<String>>(mut self, address: A, name: Option<&str>) -> Self {
        self.cc.insert(address, name.map(ToOwned::to_owned));
        self
    }

    /// Adds a `Bcc` recipient
    pub fn add_bcc<A: Into<String>>(mut self, address: A, name: Option<&str>) -> Self {
        self.bcc.insert(address, name.map(ToOwned::to_owned));
        self
    }
}

impl Email for RawEmail {
    fn to(&self) -> Cow<'_, Recipients> {
        Cow::Borrowed(&self.to)
    }

    fn cc(&self) -> Cow<'_, Recipients> {
        Cow::Borrowed(&self.cc)
    }

    fn bcc(&self) -> Cow<'_, Recipients> {
        Cow::Borrowed(&self.bcc)
    }

    fn raw_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.raw)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Email, RawEmail, Recipients};

    #[test]
    fn recipients_keep_insertion_order() {
        let recipients: Recipients = vec![
            ("c@domain.tld", None),
            ("a@domain.tld", Some("A".to_owned())),
            ("b@domain.tld", None),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            recipients.addresses().collect::<Vec<_>>(),
            vec!["c@domain.tld", "a@domain.tld", "b@domain.tld"]
        );
    }

    #[test]
    fn recipients_deduplicate_addresses() {
        let mut recipients = Recipients::new();
        recipients.insert("a@domain.tld", Some("First".to_owned()));
        recipients.insert("b@domain.tld", None);
        recipients.insert("a@domain.tld", Some("Second".to_owned()));

        assert_eq!(recipients.len(), 2);
        assert_eq!(
            recipients.addresses().collect::<Vec<_>>(),
            vec!["a@domain.tld", "b@domain.tld"]
        );
        assert_eq!(recipients.name("a@domain.tld"), Some("Second"));
        assert_eq!(recipients.name("b@domain.tld"), None);
        assert!(!recipients.contains("c@domain.tld"));
    }

    #[test]
    fn raw_email_groups() {
        let email = RawEmail::new("Subject: hi\r\n\r\nbody")
            .add_to("a@domain.tld", Some("A"))
            .add_cc("b@domain.tld", None)
            .add_bcc("c@domain.tld", None)
            .add_bcc("c@domain.tld", Some("C"));

        assert_eq!(email.to().addresses().collect::<Vec<_>>(), vec!["a@domain.tld"]);
        assert_eq!(email.cc().addresses().collect::<Vec<_>>(), vec!["b@domain.tld"]);
        assert_eq!(email.bcc().len(), 1);
        assert_eq!(email.bcc().name("c@domain.tld"), Some("C"));
        assert_eq!(email.raw_message(), "Subject: hi\r\n\r\nbody");
    }

    #[test]
    fn empty_raw_email() {
        let email = RawEmail::new("");
        assert!(email.to().is_empty());
        assert!(email.cc().is_empty());
        assert!(email.bcc().is_empty());
    }
}
