pub fn config_loaded(path: &str, hunt: &str) -> String {
    format!("Loaded configuration from {path} (active hunt {hunt})")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as \"{user}\"")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn inbound(channel: &str, sender: &str, body: &str) -> String {
    format!("{channel}/{sender}: \"{body}\"")
}

pub fn route_failed(channel: &str, err: &str) -> String {
    format!("Failed to answer message in {channel}: {err}")
}
