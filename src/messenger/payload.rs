//! Type definitions for the payload Messenger delivers in webhook requests,
//! and the decoding entry points.
//!
//! The platform sends partial payloads depending on the event type, so every
//! scalar field is optional and every collection defaults to empty, whether
//! its key is absent or explicitly null. Keys outside the schema are dropped.
//! The shapes follow the webhook reference:
//!
//! <https://developers.facebook.com/docs/messenger-platform/webhooks>

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull};

/// Decode a raw webhook request body.
///
/// Fails with [ParseError::MalformedJson] if `raw` is not syntactically valid
/// JSON, and with [ParseError::SchemaMismatch] if it is valid JSON whose
/// shape is incompatible with [Response]. Missing fields alone never fail
/// decoding.
pub fn parse(raw: &str) -> Result<Response, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode an already-parsed generic JSON value, for consumers whose server
/// layer has performed the syntactic parse itself.
pub fn from_value(value: Value) -> Result<Response, ParseError> {
    Ok(serde_json::from_value(value)?)
}

/// The envelope of one webhook request, batching one or more [Entry] items.
///
/// <https://developers.facebook.com/docs/messenger-platform/webhooks#event-notifications>
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The object type the subscription fired for; `"page"` for Messenger
    /// page subscriptions.
    pub object: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One event batch, scoped to a single page id and send time.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Option<String>,
    /// Epoch milliseconds at which the batch was sent.
    pub time: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub messaging: Vec<Messaging>,
}

/// One event within an [Entry], describing a single user interaction.
///
/// The platform sends only the payload field relevant to the event kind and
/// omits the rest, hence five independent options. [decode_event] offers the
/// same choice as a tagged union for exhaustive matching.
///
/// [decode_event]: super::event::decode_event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Messaging {
    pub sender: Option<User>,
    pub recipient: Option<User>,
    pub timestamp: Option<i64>,
    pub message: Option<Message>,
    pub optin: Option<Optin>,
    pub postback: Option<Postback>,
    pub account_linking: Option<AccountLinking>,
    pub referral: Option<Referral>,
}

/// A participant on either end of a [Messaging] event, carrying the
/// page-scoped id the platform assigns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
}

/// A received message, text and/or rich media.
///
/// <https://developers.facebook.com/docs/messenger-platform/reference/webhook-events/messages>
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub mid: Option<String>,
    pub seq: Option<i64>,
    pub text: Option<String>,
    /// Raw NLP annotations, present when built-in NLP is enabled for the
    /// page. Kept opaque; the shape depends on the configured model.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub nlp: Map<String, Value>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Quick replies offered alongside the message, on message echoes.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub quick_replies: Vec<QuickReply>,
    /// The quick reply the user tapped, on inbound messages.
    pub quick_reply: Option<QuickReply>,
}

/// Rich media attached to a [Message].
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// `"image"`, `"audio"`, `"video"`, `"file"`, and friends. Kept as a
    /// plain string so unrecognised kinds survive a round trip.
    #[serde(rename = "type")]
    pub typ: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// A predefined reply option presented as a button above the composer.
///
/// <https://developers.facebook.com/docs/messenger-platform/send-messages/quick-replies>
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickReply {
    pub content_type: Option<String>,
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Fired by the "Send to Messenger" plugin.
///
/// <https://developers.facebook.com/docs/messenger-platform/reference/webhook-events/messaging_optins>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Optin {
    /// The data-ref the developer attached to the plugin.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// Fired when a postback button, Get Started button, or persistent menu item
/// is tapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Postback {
    pub payload: Option<String>,
    /// Present when the tap also carries referral context, e.g. entry via an
    /// `m.me` link with the Get Started button.
    pub referral: Option<Referral>,
}

/// Fired during the account linking flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountLinking {
    pub authorization_code: Option<String>,
    pub status: Option<String>,
}

/// Where a conversation was entered from, e.g. an `m.me` link or an ad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub typ: Option<String>,
}
