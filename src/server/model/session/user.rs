//! Signed in user of the session.
//!
//! Login happens outside Lootledger, the session only has to carry the user's ID. Login flows
//! store it either as a JSON number or as a numeric string, both are read back as an `i32`.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "lootledger:user:id";

/// User ID as stored by whichever login flow wrote the session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SessionUserId {
    Number(i32),
    Text(String),
}

impl SessionUserId {
    /// Signs `user_id` into the session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId::Number(user_id))
            .await?;

        Ok(())
    }

    /// Signed in user ID, `None` for anonymous sessions
    ///
    /// # Returns
    /// - `Ok(Some(id))` - A positive user ID is stored
    /// - `Ok(None)` - Nobody is signed in
    /// - `Err(Error::ParseError)` - The stored value isn't a positive integer
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        match session.get::<SessionUserId>(SESSION_USER_ID_KEY).await? {
            Some(stored) => stored.user_id().map(Some),
            None => Ok(None),
        }
    }

    fn user_id(&self) -> Result<i32, Error> {
        let user_id = match self {
            Self::Number(id) => *id,
            Self::Text(text) => text.trim().parse::<i32>().map_err(|e| {
                Error::ParseError(format!("session user id {:?}: {}", text, e))
            })?,
        };

        if user_id <= 0 {
            return Err(Error::ParseError(format!(
                "session user id must be positive, got {}",
                user_id
            )));
        }

        Ok(user_id)
    }
}
