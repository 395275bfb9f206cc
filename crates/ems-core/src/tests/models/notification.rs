use crate::Notification;

use uuid::Uuid;

#[test]
fn test_notification_new() {
    let user_id = Uuid::new_v4();
    let notification = Notification::new(
        user_id,
        "Task Assigned".to_string(),
        "You were assigned a task".to_string(),
    );

    assert_eq!(notification.user_id, user_id);
    assert_eq!(notification.title, "Task Assigned");
    assert_eq!(notification.message, "You were assigned a task");
    assert!(!notification.is_read);
}

#[test]
fn test_notification_ids_are_unique() {
    let user_id = Uuid::new_v4();
    let a = Notification::new(user_id, "a".into(), "a".into());
    let b = Notification::new(user_id, "b".into(), "b".into());

    assert_ne!(a.id, b.id);
}
