use std::borrow::Cow;

use ::lettre::{
    message::{
        header::{Bcc, Cc, Header, To},
        Mailboxes,
    },
    Message,
};

use super::{Email, Recipients};

fn recipients<H>(message: &Message) -> Recipients
where
    H: Header + Into<Mailboxes>,
{
    message
        .headers()
        .get::<H>()
        .map(|header| {
            let mailboxes: Mailboxes = header.into();
            mailboxes
                .into_iter()
                .map(|mailbox| (mailbox.email.to_string(), mailbox.name))
                .collect()
        })
        .unwrap_or_default()
}

/// Mailboxes listed in the header, duplicates included
fn mailbox_count<H>(message: &Message) -> usize
where
    H: Header + Into<Mailboxes>,
{
    message
        .headers()
        .get::<H>()
        .map(|header| {
            let mailboxes: Mailboxes = header.into();
            mailboxes.into_iter().count()
        })
        .unwrap_or(0)
}

/// Recipients come from the `To`, `Cc` and `Bcc` headers.
///
/// `Message` drops its `Bcc` header when built, unless `keep_bcc` was set.
/// Without the header, the blind recipients are the envelope addresses left
/// once the `To` and `Cc` mailboxes, which the envelope lists first, are
/// skipped.
impl Email for Message {
    fn to(&self) -> Cow<'_, Recipients> {
        Cow::Owned(recipients::<To>(self))
    }

    fn cc(&self) -> Cow<'_, Recipients> {
        Cow::Owned(recipients::<Cc>(self))
    }

    fn bcc(&self) -> Cow<'_, Recipients> {
        if self.headers().get::<Bcc>().is_some() {
            return Cow::Owned(recipients::<Bcc>(self));
        }

        let listed = mailbox_count::<To>(self) + mailbox_count::<Cc>(self);
        Cow::Owned(
            self.envelope()
                .to()
                .iter()
                .skip(listed)
                .map(|address| (address.to_string(), None))
                .collect(),
        )
    }

    fn raw_message(&self) -> Cow<'_, str> {
        Cow::Owned(String::from_utf8_lossy(&self.formatted()).into_owned())
    }
}
