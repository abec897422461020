//! Application Context
//!
//! Config and login session provided via Leptos Context API, so components
//! receive them explicitly instead of reading globals.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::session::Session;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ClientConfig>,
    session: StoredValue<Session>,
    /// Trigger to reload the sidebar lists - read
    pub sidebar_reload: ReadSignal<u32>,
    /// Trigger to reload the sidebar lists - write
    set_sidebar_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        let (sidebar_reload, set_sidebar_reload) = signal(0u32);
        Self {
            config: StoredValue::new(config),
            session: StoredValue::new(session),
            sidebar_reload,
            set_sidebar_reload,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.page_size)
    }

    /// API client carrying the session token
    pub fn client(&self) -> ApiClient {
        self.config
            .with_value(|config| self.session.with_value(|session| ApiClient::new(config, session)))
    }

    pub fn current_user_id(&self) -> Option<u64> {
        self.session.with_value(|s| s.user_id)
    }

    pub fn is_owner(&self, owner_id: Option<u64>) -> bool {
        self.session.with_value(|s| s.is_owner(owner_id))
    }

    /// Trigger a reload of the category and tag lists
    pub fn reload_sidebar(&self) {
        self.set_sidebar_reload.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
