use serde::{Deserialize, Serialize};

/// The signed-in user, as persisted for the active session.
///
/// This is the public slice of an account record: the credential secret never
/// leaves the account store. A missing session simply means nobody is
/// signed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name shown on authored posts.
    pub name: String,

    /// Account identifier used to look the user up at sign-in.
    pub email: String,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// First character of the display name, as typed, for avatar badges.
    /// Falls back to `'?'` when the name is empty.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_the_first_character_as_typed() {
        let user = SessionUser::new("jane doe", "jane@example.com");
        assert_eq!(user.initial(), 'j');
    }

    #[test]
    fn initial_of_empty_name_is_question_mark() {
        let user = SessionUser::new("", "ghost@example.com");
        assert_eq!(user.initial(), '?');
    }

    #[test]
    fn serde_roundtrip() {
        let user = SessionUser::new("Sam", "sam@example.com");
        let json = serde_json::to_string(&user).unwrap();
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
