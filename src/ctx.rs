//! Shared session state that the app should create at startup and
//! pass to the components that need the connected endpoints and the
//! logged in user

use crate::storage::{SessionStorage, USER_INFO_KEY};
use log::debug;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

/// Stock backend server address
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
/// Stock websocket server address
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8001";

/// Profile fields of the logged in user. The backend decides which
/// fields are present so no shape is enforced here
pub type UserInfo = Map<String, Value>;

/// Handle for the chat websocket once a connection has been
/// established. The connection lifecycle belongs to the signaling
/// layer, this crate only carries the slot
pub struct SocketHandle;

/// Shared session context
pub struct SessionContext {
    /// Base URL of the backend server
    pub backend_url: Url,
    /// URL of the websocket server
    pub ws_url: Url,
    /// Profile of the logged in user, empty mapping while logged out
    pub user_info: UserInfo,
    /// Socket for the active connection if one exists
    pub socket: Option<SocketHandle>,
    /// Session storage the user info is mirrored into
    storage: SessionStorage,
}

/// Errors that can occur while mirroring user info between the
/// context and session storage
#[derive(Debug, Error)]
pub enum UserInfoError {
    /// The user info mapping could not be serialized for storage
    #[error("Failed to serialize user info: {0}")]
    Serialize(serde_json::Error),
    /// The stored user info was not a valid JSON mapping
    #[error("Stored user info is invalid: {0}")]
    Restore(serde_json::Error),
}

impl SessionContext {
    /// Creates the session context for the provided endpoints,
    /// restoring the user info from `storage` when a previous login
    /// left a copy there
    ///
    /// ## Arguments
    /// * `backend_url` - Base URL of the backend server
    /// * `ws_url`      - URL of the websocket server
    /// * `storage`     - Session storage to mirror the user info into
    pub fn new(
        backend_url: Url,
        ws_url: Url,
        storage: SessionStorage,
    ) -> Result<Self, UserInfoError> {
        let user_info = match storage.get(USER_INFO_KEY) {
            Some(raw) => {
                let user_info = serde_json::from_str(&raw).map_err(UserInfoError::Restore)?;
                debug!("Restored user info from session storage");
                user_info
            }
            None => UserInfo::new(),
        };

        Ok(Self {
            backend_url,
            ws_url,
            user_info,
            socket: None,
            storage,
        })
    }

    /// Replaces the stored user info wholesale and mirrors the new
    /// value to session storage under [`USER_INFO_KEY`]. Memory and
    /// storage are left untouched when serialization fails
    ///
    /// ## Arguments
    /// * `user_info` - The profile fields of the logged in user
    pub fn set_user_info(&mut self, user_info: UserInfo) -> Result<(), UserInfoError> {
        let raw = serde_json::to_string(&user_info).map_err(UserInfoError::Serialize)?;
        self.storage.insert(USER_INFO_KEY, raw);
        self.user_info = user_info;
        Ok(())
    }

    /// Resets the user info to an empty mapping and removes the
    /// mirrored copy from session storage
    pub fn clear_user_info(&mut self) {
        debug!("Clearing user info");
        self.user_info = UserInfo::new();
        self.storage.remove(USER_INFO_KEY);
    }
}
