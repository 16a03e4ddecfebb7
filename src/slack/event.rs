use serde::Deserialize;

/// Top-level envelope of a Slack Events API request.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Envelope {
    /// Endpoint verification handshake; Slack expects the challenge
    /// echoed back.
    UrlVerification { challenge: String },

    /// A workspace event wrapped in callback metadata.
    EventCallback { event: CallbackEvent },

    /// Envelope types we do not handle, acknowledged and dropped.
    #[serde(other)]
    Other,
}

/// The inner event of an `event_callback` envelope. Only `message` and
/// `app_mention` are acted on; everything else is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CallbackEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: Option<String>,
    text: Option<String>,
    user: Option<String>,
    app_id: Option<String>,
    bot_profile: Option<serde_json::Value>,
    message: Option<NestedMessage>,
}

/// Edited messages carry their text and author one level down.
#[derive(Debug, Deserialize)]
struct NestedMessage {
    text: Option<String>,
    user: Option<String>,
}

impl CallbackEvent {
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or_else(|| self.message.as_ref().and_then(|m| m.text.as_deref()))
    }

    pub fn user(&self) -> Option<&str> {
        self.user
            .as_deref()
            .or_else(|| self.message.as_ref().and_then(|m| m.user.as_deref()))
    }

    /// Bot-authored messages, including our own replies, carry an
    /// `app_id` or a `bot_profile`. Replying to those would loop.
    pub fn from_bot(&self) -> bool {
        self.app_id.is_some() || self.bot_profile.is_some()
    }
}
