use crate::eval;

use super::api::WebApi;
use super::event::CallbackEvent;

/// Work item for one inbound message: evaluate the arithmetic and
/// reply in-channel, mentioning the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CalculateAndSend {
    pub text: String,
    pub user: String,
    pub channel: String,
}

impl CalculateAndSend {
    /// Builds the job for a `message` or `app_mention` event. Bot
    /// messages (our own replies included) and events missing text,
    /// sender or channel produce no job.
    pub fn from_event(event: &CallbackEvent) -> Option<Self> {
        if !matches!(event.kind.as_str(), "message" | "app_mention") {
            return None;
        }
        if event.from_bot() {
            return None;
        }

        Some(Self {
            text: event.text()?.to_owned(),
            user: event.user()?.to_owned(),
            channel: event.channel.clone()?,
        })
    }

    /// Runs detached from the request cycle. Evaluation errors turn
    /// into a friendly reply; delivery failures are logged and
    /// swallowed so the server never dies over one message.
    pub async fn run(self, api: WebApi) {
        let message = reply(&self.user, &self.text);

        if let Err(why) = api.post_message(&self.channel, &message).await {
            log::warn!("calculate-and-send failed to deliver reply: {why}");
        }
    }
}

fn reply(user: &str, text: &str) -> String {
    match eval::evaluate(text) {
        Ok(evaluation) => format!(
            "<@{user}> {} = {}",
            evaluation.parsed_expression, evaluation.result
        ),
        Err(_) => format!("<@{user}> I could not understand the arithmetic expression"),
    }
}

#[cfg(test)]
mod test {
    use super::super::event::{CallbackEvent, Envelope};
    use super::{reply, CalculateAndSend};

    fn event(json: serde_json::Value) -> CallbackEvent {
        match serde_json::from_value(json).unwrap() {
            Envelope::EventCallback { event } => event,
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    fn callback(inner: serde_json::Value) -> serde_json::Value {
        serde_json::json!({"type": "event_callback", "event": inner})
    }

    #[test]
    fn builds_a_job_from_a_message_event() {
        let event = event(callback(serde_json::json!({
            "type": "message",
            "text": "1+2",
            "user": "U123",
            "channel": "C456"
        })));

        assert_eq!(
            CalculateAndSend::from_event(&event),
            Some(CalculateAndSend {
                text: "1+2".into(),
                user: "U123".into(),
                channel: "C456".into(),
            })
        );
    }

    #[test]
    fn builds_a_job_from_an_app_mention() {
        let event = event(callback(serde_json::json!({
            "type": "app_mention",
            "text": "<@UBOT> 2*3",
            "user": "U123",
            "channel": "C456"
        })));

        assert!(CalculateAndSend::from_event(&event).is_some());
    }

    #[test]
    fn ignores_other_event_kinds() {
        let event = event(callback(serde_json::json!({
            "type": "reaction_added",
            "user": "U123",
            "channel": "C456"
        })));

        assert_eq!(CalculateAndSend::from_event(&event), None);
    }

    #[test]
    fn ignores_bot_messages() {
        let event = event(callback(serde_json::json!({
            "type": "message",
            "text": "1 + 1 = 2",
            "user": "U123",
            "channel": "C456",
            "app_id": "A789"
        })));

        assert_eq!(CalculateAndSend::from_event(&event), None);
    }

    #[test]
    fn ignores_events_without_a_sender() {
        let event = event(callback(serde_json::json!({
            "type": "message",
            "text": "1+2",
            "channel": "C456"
        })));

        assert_eq!(CalculateAndSend::from_event(&event), None);
    }

    #[test]
    fn replies_with_the_parsed_expression_and_result() {
        assert_eq!(reply("U123", "what is 1+1?"), "<@U123> 1 + 1 = 2");
    }

    #[test]
    fn replies_with_an_apology_for_unparsable_text() {
        assert_eq!(
            reply("U123", "what is the meaning of life"),
            "<@U123> I could not understand the arithmetic expression"
        );
    }
}
