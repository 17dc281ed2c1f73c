//! User records

use serde::{Deserialize, Serialize};

/// User as exchanged over the wire (mirrors the `user.UserInfo` protobuf message)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub nickname: String,
}

/// User as persisted by a [`UserStore`](super::UserStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub nickname: String,
    #[serde(rename = "faceURL", default)]
    pub face_url: String,
    /// Creation time in milliseconds since the Unix epoch
    #[serde(default)]
    pub create_time: i64,
}

impl User {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            ..Self::default()
        }
    }
}
