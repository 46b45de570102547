//! Integration tests for scpcu-common crate.

use std::collections::HashMap;
use scpcu_common::{ChannelId, GuildId, ScpError, UserId};

#[test]
fn test_channel_id_display() {
    let channel_id = ChannelId(123456789);
    assert_eq!(format!("{}", channel_id), "123456789");
}

#[test]
fn test_user_id_display() {
    let user_id = UserId(987654321);
    assert_eq!(format!("{}", user_id), "987654321");
}

#[test]
fn test_guild_id_display() {
    let guild_id = GuildId(555);
    assert_eq!(format!("{}", guild_id), "555");
}

#[test]
fn test_ids_are_transparent_in_json() {
    let serialized = serde_json::to_string(&UserId(42)).unwrap();
    assert_eq!(serialized, "42");

    let deserialized: ChannelId = serde_json::from_str("7").unwrap();
    assert_eq!(deserialized, ChannelId(7));
}

#[test]
fn test_ids_usable_as_map_keys() {
    let mut names = HashMap::new();
    names.insert(UserId(1), "dr-bright");
    names.insert(UserId(2), "dr-clef");
    assert_eq!(names.get(&UserId(1)), Some(&"dr-bright"));
    assert_eq!(names.get(&UserId(3)), None);
}

#[test]
fn test_error_kinds() {
    let io: ScpError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
    assert!(io.is_io());

    let config = ScpError::Config("bad".into());
    assert!(!config.is_io());
    assert!(!config.is_serialization());
}
