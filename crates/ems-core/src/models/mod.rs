pub mod broadcast_payload;
pub mod delivery_channel;
pub mod delivery_log;
pub mod notification;
pub mod recipient;
pub mod team;
