use futures::executor::block_on;

use super::*;
use crate::util::schedule::ImmediateScheduler;

fn request() -> RelayRequest {
    RelayRequest {
        service_id: "service_1".into(),
        template_id: "template_1".into(),
        auth_token: "public_key".into(),
        fields: TemplateParams {
            from_name: "Ada".into(),
            from_email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice site".into(),
        },
    }
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn request_serializes_in_emailjs_shape() {
    let json = serde_json::to_value(request()).expect("serializable");
    assert_eq!(json["service_id"], "service_1");
    assert_eq!(json["template_id"], "template_1");
    assert_eq!(json["user_id"], "public_key");
    assert_eq!(json["template_params"]["from_name"], "Ada");
    assert_eq!(json["template_params"]["from_email"], "ada@example.com");
    assert!(json.get("auth_token").is_none());
}

#[test]
fn relay_failed_message_includes_status_and_body() {
    assert_eq!(relay_failed_message(400, " The user ID is invalid "), "relay responded 400: The user ID is invalid");
    assert_eq!(relay_failed_message(503, ""), "relay responded 503");
}

// =============================================================
// SimulatedRelay
// =============================================================

#[test]
fn simulated_relay_acknowledges_after_delay() {
    let scheduler = Rc::new(ImmediateScheduler::new());
    let relay = SimulatedRelay::new(scheduler.clone(), 1500);
    assert_eq!(block_on(relay.send(request())), Ok(()));
    assert_eq!(scheduler.requested(), vec![1500]);
}
