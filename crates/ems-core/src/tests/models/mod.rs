mod broadcast_payload;
mod delivery_channel;
mod delivery_log;
mod notification;
