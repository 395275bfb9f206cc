pub mod mark_read_response;
pub mod notification_dto;
pub mod notification_list_response;
pub mod notifications;
