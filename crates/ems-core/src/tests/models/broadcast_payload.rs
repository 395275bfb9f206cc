use crate::{BroadcastPayload, Notification};

use uuid::Uuid;

#[test]
fn test_payload_projects_notification_fields() {
    let notification = Notification::new(
        Uuid::new_v4(),
        "Deadline".to_string(),
        "Task is overdue".to_string(),
    );

    let payload = BroadcastPayload::from(&notification);

    assert_eq!(payload.id, notification.id);
    assert_eq!(payload.title, "Deadline");
    assert_eq!(payload.message, "Task is overdue");
    assert!(!payload.is_read);
}

#[test]
fn test_payload_renders_fixed_timezone_timestamp() {
    let notification = Notification::new(Uuid::new_v4(), "t".into(), "m".into());

    let payload = BroadcastPayload::from(&notification);

    assert!(payload.created_at.ends_with("UTC"));
    assert_eq!(
        payload.created_at,
        notification
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    );
}

#[test]
fn test_payload_json_round_trips_id() {
    let notification = Notification::new(Uuid::new_v4(), "t".into(), "m".into());
    let payload = BroadcastPayload::from(&notification);

    let json = payload.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        parsed["id"].as_str().unwrap(),
        notification.id.to_string()
    );
}
