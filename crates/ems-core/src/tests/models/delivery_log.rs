use crate::{DeliveryChannel, DeliveryLog};

use uuid::Uuid;

#[test]
fn test_for_user_sets_only_user_id() {
    let user_id = Uuid::new_v4();
    let log = DeliveryLog::for_user(user_id, DeliveryChannel::Email, "SENT".into());

    assert_eq!(log.user_id, Some(user_id));
    assert_eq!(log.team_id, None);
    assert_eq!(log.channel, DeliveryChannel::Email);
    assert_eq!(log.status, "SENT");
}

#[test]
fn test_for_team_sets_only_team_id() {
    let team_id = Uuid::new_v4();
    let log = DeliveryLog::for_team(team_id, DeliveryChannel::Webhook, "ATTEMPT_1".into());

    assert_eq!(log.user_id, None);
    assert_eq!(log.team_id, Some(team_id));
    assert_eq!(log.channel, DeliveryChannel::Webhook);
}

#[test]
fn test_builder_attaches_payload_and_error() {
    let log = DeliveryLog::for_team(Uuid::new_v4(), DeliveryChannel::Webhook, "FAILED_500".into())
        .with_payload("{}".into())
        .with_error("server error".into());

    assert_eq!(log.payload.as_deref(), Some("{}"));
    assert_eq!(log.error_message.as_deref(), Some("server error"));
}
