use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_FLASH_KEY: &str = "lootledger:flash";

/// Status message shown once on the next rendered page
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub String);

impl SessionFlash {
    /// Store a flash message, replacing any message not yet shown
    pub async fn insert(session: &Session, message: impl Into<String>) -> Result<(), Error> {
        session
            .insert(SESSION_FLASH_KEY, SessionFlash(message.into()))
            .await?;

        Ok(())
    }

    /// Remove and return the pending flash message
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .map(|SessionFlash(message)| message))
    }
}
