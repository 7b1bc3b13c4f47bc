//! Flatten a decoded [Response] into simple lists, preserving entry order,
//! then messaging order, then item order.
//!
//! Messaging items missing the field being extracted contribute nothing, so
//! mixed payloads containing postbacks or optins are safe to pass without
//! filtering first.

use super::event::{decode_event, Event};
use super::payload::{Attachment, Response};

/// Every message text in the payload.
pub fn message_texts(response: &Response) -> Vec<&str> {
    response
        .entry
        .iter()
        .flat_map(|entry| &entry.messaging)
        .filter_map(|messaging| messaging.message.as_ref())
        .filter_map(|message| message.text.as_deref())
        .collect()
}

/// Every attachment across every message in the payload.
pub fn message_attachments(response: &Response) -> Vec<&Attachment> {
    response
        .entry
        .iter()
        .flat_map(|entry| &entry.messaging)
        .filter_map(|messaging| messaging.message.as_ref())
        .flat_map(|message| &message.attachments)
        .collect()
}

/// The sender id of every messaging item in the payload.
pub fn message_senders(response: &Response) -> Vec<&str> {
    response
        .entry
        .iter()
        .flat_map(|entry| &entry.messaging)
        .filter_map(|messaging| messaging.sender.as_ref())
        .filter_map(|sender| sender.id.as_deref())
        .collect()
}

/// Every messaging item in the payload, classified as per [decode_event].
pub fn events(response: &Response) -> Vec<Event<'_>> {
    response
        .entry
        .iter()
        .flat_map(|entry| &entry.messaging)
        .map(decode_event)
        .collect()
}
