//! Mail relay used by the contact form.
//!
//! Client-side (`csr`): `EmailJsRelay` posts to the EmailJS REST endpoint via
//! `gloo-net`.
//! Headless, or when no relay credentials are configured: `SimulatedRelay`
//! acknowledges after a fixed delay, reproducing the page's demo behaviour.
//!
//! ERROR HANDLING
//! ==============
//! Relays resolve to `Result<(), String>`; the contact form turns failures
//! into a status message and a log line rather than propagating them.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::Serialize;

use crate::util::schedule::Scheduler;

/// Template variables filled into the outgoing email.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// One message for the relay, serialised in the EmailJS `send` body shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub auth_token: String,
    #[serde(rename = "template_params")]
    pub fields: TemplateParams,
}

pub trait MailRelay {
    /// Send `request`. Resolves once the relay acknowledged or refused it.
    fn send(&self, request: RelayRequest) -> LocalBoxFuture<'static, Result<(), String>>;
}

#[cfg(any(test, feature = "csr"))]
fn relay_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() { format!("relay responded {status}") } else { format!("relay responded {status}: {body}") }
}

/// Relay that accepts every message after `delay_ms`.
pub struct SimulatedRelay {
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
}

impl SimulatedRelay {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms }
    }
}

impl MailRelay for SimulatedRelay {
    fn send(&self, request: RelayRequest) -> LocalBoxFuture<'static, Result<(), String>> {
        log::info!("simulating relay of message from {}", request.fields.from_email);
        let delay = self.scheduler.sleep(self.delay_ms);
        Box::pin(async move {
            delay.await;
            Ok(())
        })
    }
}

/// EmailJS REST relay.
#[cfg(feature = "csr")]
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    endpoint: String,
}

#[cfg(feature = "csr")]
impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "csr")]
impl MailRelay for EmailJsRelay {
    fn send(&self, request: RelayRequest) -> LocalBoxFuture<'static, Result<(), String>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let resp = gloo_net::http::Request::post(&endpoint)
                .json(&request)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(relay_failed_message(resp.status(), &body));
            }
            Ok(())
        })
    }
}
