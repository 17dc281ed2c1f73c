//! Webhook payloads for the user-registration callbacks
//!
//! The server posts a request before and after users register; the
//! receiver answers with a [`CommonCallbackResp`], optionally rewriting the
//! users in the "before" case.

use serde::{Deserialize, Serialize};

use super::model::UserInfo;

pub const CALLBACK_BEFORE_USER_REGISTER_COMMAND: &str = "callbackBeforeUserRegisterCommand";
pub const CALLBACK_AFTER_USER_REGISTER_COMMAND: &str = "callbackAfterUserRegisterCommand";

/// Status fields shared by every callback response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonCallbackResp {
    pub action_code: i32,
    pub err_code: i32,
    pub err_msg: String,
    pub err_dlt: String,
    pub next_code: i32,
}

impl CommonCallbackResp {
    /// A response that lets the operation proceed
    pub fn ok() -> Self {
        Self::default()
    }

    /// True when the receiver reported neither an action nor an error
    pub fn is_continue(&self) -> bool {
        self.action_code == 0 && self.err_code == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackBeforeUserRegisterReq {
    pub callback_command: String,
    pub secret: String,
    pub users: Vec<UserInfo>,
}

impl CallbackBeforeUserRegisterReq {
    pub fn new(secret: impl Into<String>, users: Vec<UserInfo>) -> Self {
        Self {
            callback_command: CALLBACK_BEFORE_USER_REGISTER_COMMAND.to_string(),
            secret: secret.into(),
            users,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackBeforeUserRegisterResp {
    #[serde(flatten)]
    pub common: CommonCallbackResp,
    #[serde(default)]
    pub users: Vec<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackAfterUserRegisterReq {
    pub callback_command: String,
    pub secret: String,
    pub users: Vec<UserInfo>,
}

impl CallbackAfterUserRegisterReq {
    pub fn new(secret: impl Into<String>, users: Vec<UserInfo>) -> Self {
        Self {
            callback_command: CALLBACK_AFTER_USER_REGISTER_COMMAND.to_string(),
            secret: secret.into(),
            users,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAfterUserRegisterResp {
    #[serde(flatten)]
    pub common: CommonCallbackResp,
}
