//! A tagged view over the event payload a [Messaging] item carries, for
//! exhaustive matching.

use super::payload::{AccountLinking, Message, Messaging, Optin, Postback, Referral};
use tracing::debug;

/// The semantically-active payload of a single [Messaging] item.
///
/// The platform sends exactly one of these per event. An item carrying none,
/// or only a payload kind introduced after this was written, surfaces as
/// [Event::Unknown].
#[derive(Debug, PartialEq)]
pub enum Event<'a> {
    Message(&'a Message),
    Optin(&'a Optin),
    Postback(&'a Postback),
    AccountLinking(&'a AccountLinking),
    Referral(&'a Referral),
    Unknown,
}

/// Classify a [Messaging] item by the payload it carries.
///
/// Payload fields are inspected in declaration order, so should the platform
/// ever send more than one, the first present wins.
pub fn decode_event(messaging: &Messaging) -> Event<'_> {
    decode_message(messaging)
        .or_else(|| decode_optin(messaging))
        .or_else(|| decode_postback(messaging))
        .or_else(|| decode_account_linking(messaging))
        .or_else(|| decode_referral(messaging))
        .unwrap_or_else(|| {
            debug!("Messaging item carries no supported event payload");
            Event::Unknown
        })
}

fn decode_message(messaging: &Messaging) -> Option<Event<'_>> {
    messaging.message.as_ref().map(Event::Message)
}

fn decode_optin(messaging: &Messaging) -> Option<Event<'_>> {
    messaging.optin.as_ref().map(Event::Optin)
}

fn decode_postback(messaging: &Messaging) -> Option<Event<'_>> {
    messaging.postback.as_ref().map(Event::Postback)
}

fn decode_account_linking(messaging: &Messaging) -> Option<Event<'_>> {
    messaging.account_linking.as_ref().map(Event::AccountLinking)
}

fn decode_referral(messaging: &Messaging) -> Option<Event<'_>> {
    messaging.referral.as_ref().map(Event::Referral)
}
