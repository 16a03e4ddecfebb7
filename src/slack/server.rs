use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{api::WebApi, event::Envelope, job::CalculateAndSend};

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub signing_secret: Arc<str>,
    pub api: WebApi,
}

/// Reads credentials from the environment and serves the webhook until
/// the process is stopped.
pub(crate) async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let signing_secret =
        env::var("SLACK_SIGNING_SECRET").context("SLACK_SIGNING_SECRET is not set")?;
    let bot_token = env::var("SLACK_BOT_TOKEN").context("SLACK_BOT_TOKEN is not set")?;

    let state = AppState {
        signing_secret: signing_secret.into(),
        api: WebApi::new(bot_token),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/slack/events/receive", post(receive))
        .with_state(state)
}

async fn receive(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    if !signature_valid(&state.signing_secret, &headers, &body) {
        log::debug!("rejected request with missing or invalid signature");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let envelope: Envelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(why) => {
            log::debug!("rejected undecodable event payload: {why}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match envelope {
        Envelope::UrlVerification { challenge } => {
            Json(serde_json::json!({ "challenge": challenge })).into_response()
        }
        Envelope::EventCallback { event } => {
            if let Some(job) = CalculateAndSend::from_event(&event) {
                log::info!("dispatching calculate-and-send for {}", job.channel);
                tokio::spawn(job.run(state.api.clone()));
            }
            StatusCode::OK.into_response()
        }
        Envelope::Other => StatusCode::OK.into_response(),
    }
}

/// Slack signs `v0:{timestamp}:{body}` with the app's signing secret
/// and sends the hex digest as `X-Slack-Signature`.
fn signature_valid(secret: &str, headers: &HeaderMap, body: &[u8]) -> bool {
    let timestamp = headers
        .get("x-slack-request-timestamp")
        .and_then(|v| v.to_str().ok());
    let signature = headers.get("x-slack-signature").and_then(|v| v.to_str().ok());

    match (timestamp, signature) {
        (Some(timestamp), Some(signature)) => {
            signature == expected_signature(secret, timestamp, body)
        }
        _ => false,
    }
}

pub(crate) fn expected_signature(secret: &str, timestamp: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);

    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}
