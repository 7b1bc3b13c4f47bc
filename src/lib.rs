//! The winged herald of the gods.
//!
//! Hermes decodes the webhook payload a messaging platform POSTs to a
//! subscribed endpoint into a typed object graph, and offers accessors that
//! flatten the decoded tree into simple lists.
//!
//! The only platform currently supported is [Messenger][messenger]. Receiving
//! the request, verifying its signature, and responding to the platform are
//! the consumer's concern.

pub mod messenger;
