//! User-service plumbing shared by the generated gRPC code
//!
//! This module contains:
//! - [`model`]: storage and wire representations of a user
//! - [`convert`]: storage-to-wire conversion
//! - [`store`]: the user data-access interface
//! - [`callback`]: user-registration webhook payloads

pub mod callback;
pub mod convert;
pub mod model;
pub mod store;

pub use callback::{
    CallbackAfterUserRegisterReq, CallbackAfterUserRegisterResp, CallbackBeforeUserRegisterReq,
    CallbackBeforeUserRegisterResp, CommonCallbackResp,
};
pub use convert::users_db_to_pb;
pub use model::{User, UserInfo};
pub use store::{MemoryUserStore, UserStore};
