use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use scrawl_storage::KeyValueStore;
use scrawl_types::SessionUser;

use crate::error::{AuthError, AuthResult};

/// Storage key the active session marker persists under.
pub const SESSION_KEY: &str = "session/current";

/// Key namespace for account records, one record per email.
const USERS_PREFIX: &str = "users/";

/// A stored account record.
///
/// The password lives here in plaintext and never leaves this crate; the
/// session marker carries only the public fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// The slice of this account that may be shown to the rest of the app.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser::new(&self.name, &self.email)
    }
}

/// Account registry and session handling over a key-value store.
pub struct Accounts {
    storage: Arc<dyn KeyValueStore>,
}

impl Accounts {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Register a new account and log it in.
    ///
    /// All three fields are required non-empty after trimming. An existing
    /// record for the email is rejected; nothing is written in the failure
    /// cases.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> AuthResult<SessionUser> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        if self.storage.contains(&user_key(email))? {
            return Err(AuthError::AccountExists);
        }

        let account = Account {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let record =
            serde_json::to_string(&account).map_err(|e| AuthError::Encode(e.to_string()))?;
        self.storage.set(&user_key(email), &record)?;

        let user = account.to_session_user();
        self.write_session(&user)?;

        info!(email = %user.email, "account created");
        Ok(user)
    }

    /// Log an existing account in.
    ///
    /// Unknown email and wrong password fail identically with
    /// [`AuthError::InvalidCredentials`].
    pub fn log_in(&self, email: &str, password: &str) -> AuthResult<SessionUser> {
        let email = email.trim();
        let password = password.trim();

        let Some(account) = self.load_account(email)? else {
            return Err(AuthError::InvalidCredentials);
        };
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = account.to_session_user();
        self.write_session(&user)?;

        info!(email = %user.email, "logged in");
        Ok(user)
    }

    /// The currently logged-in user, if any.
    ///
    /// A malformed session marker is treated as no session: it is logged
    /// and the next successful login overwrites it.
    pub fn current_session(&self) -> AuthResult<Option<SessionUser>> {
        let Some(raw) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "discarding malformed session marker");
                Ok(None)
            }
        }
    }

    /// Remove the session marker. Quiet no-op when nobody is logged in.
    pub fn log_out(&self) -> AuthResult<()> {
        let existed = self.storage.remove(SESSION_KEY)?;
        if existed {
            info!("logged out");
        } else {
            debug!("logout with no active session");
        }
        Ok(())
    }

    fn load_account(&self, email: &str) -> AuthResult<Option<Account>> {
        let Some(raw) = self.storage.get(&user_key(email))? else {
            return Ok(None);
        };

        let account = serde_json::from_str(&raw).map_err(|e| AuthError::CorruptAccount {
            email: email.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(account))
    }

    fn write_session(&self, user: &SessionUser) -> AuthResult<()> {
        let marker = serde_json::to_string(user).map_err(|e| AuthError::Encode(e.to_string()))?;
        self.storage.set(SESSION_KEY, &marker)?;
        Ok(())
    }
}

fn user_key(email: &str) -> String {
    format!("{USERS_PREFIX}{email}")
}

impl std::fmt::Debug for Accounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accounts").finish_non_exhaustive()
    }
}
