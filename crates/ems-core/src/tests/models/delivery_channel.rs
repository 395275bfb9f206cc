use crate::{CoreError, DeliveryChannel};

#[test]
fn test_channel_as_str() {
    assert_eq!(DeliveryChannel::Email.as_str(), "EMAIL");
    assert_eq!(DeliveryChannel::Webhook.as_str(), "WEBHOOK");
}

#[test]
fn test_channel_parse_round_trip() {
    assert_eq!(
        DeliveryChannel::parse("EMAIL").unwrap(),
        DeliveryChannel::Email
    );
    assert_eq!(
        DeliveryChannel::parse("WEBHOOK").unwrap(),
        DeliveryChannel::Webhook
    );
}

#[test]
fn test_channel_parse_rejects_unknown() {
    let result = DeliveryChannel::parse("SMS");

    assert!(matches!(
        result,
        Err(CoreError::InvalidDeliveryChannel { .. })
    ));
}
