//! Login Session
//!
//! Read once from `localStorage` when the app mounts and passed down via
//! context; render code never reads storage directly.

const USER_ID_KEY: &str = "userID";
const TOKEN_KEY: &str = "accessToken";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<u64>,
    pub token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build from raw storage values; blank or non-numeric entries are ignored
    pub fn from_stored(user_id: Option<String>, token: Option<String>) -> Self {
        Self {
            user_id: user_id.and_then(|id| id.trim().parse().ok()),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let Some(storage) = storage else {
            log::debug!("[SESSION] localStorage unavailable, browsing anonymously");
            return Self::anonymous();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        Self::from_stored(read(USER_ID_KEY), read(TOKEN_KEY))
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }

    /// Whether the logged-in user is `owner_id`
    pub fn is_owner(&self, owner_id: Option<u64>) -> bool {
        self.is_logged_in() && owner_id.is_some() && self.user_id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        let session = Session::from_stored(Some("12".into()), Some("tok".into()));
        assert_eq!(session.user_id, Some(12));
        assert!(session.is_logged_in());

        let session = Session::from_stored(Some("abc".into()), Some("  ".into()));
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_is_owner() {
        let session = Session::from_stored(Some("12".into()), Some("tok".into()));
        assert!(session.is_owner(Some(12)));
        assert!(!session.is_owner(Some(13)));
        assert!(!session.is_owner(None));
        assert!(!Session::anonymous().is_owner(None));
    }
}
