use crate::{
    api::{Identity, Role},
    config,
    error::AppError,
    utils::storage::{BrowserStorage, KeyValueStore, MemoryStorage},
};
use leptos::*;
use std::rc::Rc;

/// Holds the signed-in identity and mirrors it into a persisted slot so a
/// reload restores the session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    key: Rc<str>,
    identity: RwSignal<Option<Identity>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self {
            storage,
            key: key.into(),
            identity: create_rw_signal(None),
        }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage), config::current().storage_key)
    }

    pub fn identity(&self) -> Signal<Option<Identity>> {
        self.identity.into()
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.get_untracked()
    }

    pub fn login(&self, email: &str, role: &str) -> Result<Identity, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        let role: Role = role.parse()?;
        let identity = Identity {
            email: email.to_string(),
            role,
        };

        match serde_json::to_string(&identity) {
            Ok(payload) => {
                if let Err(err) = self.storage.set(&self.key, &payload) {
                    log::warn!("session not persisted: {err}");
                }
            }
            Err(err) => log::warn!("session not serialized: {err}"),
        }
        log::info!("signed in as {} ({})", identity.email, identity.role);
        self.identity.set(Some(identity.clone()));
        Ok(identity)
    }

    pub fn restore(&self) -> Option<Identity> {
        let restored = match self.storage.get(&self.key) {
            Ok(Some(raw)) => match parse_identity(&raw) {
                Some(identity) => Some(identity),
                None => {
                    log::warn!("discarding malformed session payload");
                    self.clear_slot();
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("session slot unreadable: {err}");
                None
            }
        };
        if let Some(identity) = &restored {
            log::info!("restored session for {}", identity.email);
        }
        self.identity.set(restored.clone());
        restored
    }

    pub fn logout(&self) {
        self.clear_slot();
        self.identity.set(None);
        log::info!("signed out");
    }

    fn clear_slot(&self) {
        if let Err(err) = self.storage.remove(&self.key) {
            log::warn!("session slot not cleared: {err}");
        }
    }
}

fn parse_identity(raw: &str) -> Option<Identity> {
    let identity: Identity = serde_json::from_str(raw).ok()?;
    if identity.email.trim().is_empty() {
        return None;
    }
    Some(identity)
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] store: Option<SessionStore>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| {
        let store = SessionStore::browser();
        store.restore();
        store
    });
    provide_context(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        SessionStore::new(
            Rc::new(MemoryStorage::default()),
            config::current().storage_key,
        )
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    const KEY: &str = "smartAttendanceUser";

    fn store_over(storage: Rc<MemoryStorage>) -> SessionStore {
        SessionStore::new(storage, KEY)
    }

    #[test]
    fn login_then_restore_after_reload_yields_same_identity() {
        with_runtime(|| {
            let storage = Rc::new(MemoryStorage::default());
            let identity = store_over(storage.clone())
                .login("alice@school.edu", "student")
                .unwrap();

            // A fresh store over the same slot stands in for a page reload.
            let reloaded = store_over(storage);
            assert_eq!(reloaded.restore(), Some(identity.clone()));
            assert_eq!(reloaded.current(), Some(identity));
        });
    }

    #[test]
    fn login_rejects_empty_fields() {
        with_runtime(|| {
            let storage = Rc::new(MemoryStorage::default());
            let store = store_over(storage.clone());
            assert!(matches!(
                store.login("", "student"),
                Err(AppError::Validation(_))
            ));
            assert!(matches!(
                store.login("bob@school.edu", ""),
                Err(AppError::Validation(_))
            ));
            assert!(storage.is_empty());
            assert!(store.current().is_none());
        });
    }

    #[test]
    fn login_replaces_prior_identity() {
        with_runtime(|| {
            let storage = Rc::new(MemoryStorage::default());
            let store = store_over(storage.clone());
            store.login("alice@school.edu", "student").unwrap();
            store.login("prof@school.edu", "teacher").unwrap();
            let raw = storage.get(KEY).unwrap().unwrap();
            assert_eq!(raw, r#"{"email":"prof@school.edu","role":"teacher"}"#);
            assert_eq!(store.current().unwrap().role, Role::Teacher);
        });
    }

    #[test]
    fn malformed_payloads_restore_to_none_and_are_discarded() {
        let payloads = [
            "not json",
            "{",
            "null",
            "[]",
            r#"{"email":"a@b.c"}"#,
            r#"{"email":"a@b.c","role":"admin"}"#,
            r#"{"email":"","role":"student"}"#,
        ];
        with_runtime(|| {
            for payload in payloads {
                let storage = Rc::new(MemoryStorage::with_entry(KEY, payload));
                let store = store_over(storage.clone());
                assert_eq!(store.restore(), None, "payload {payload}");
                assert!(storage.is_empty(), "payload {payload} left in slot");
            }
        });
    }

    #[test]
    fn restore_with_empty_slot_is_none() {
        with_runtime(|| {
            let store = store_over(Rc::new(MemoryStorage::default()));
            assert_eq!(store.restore(), None);
        });
    }

    #[test]
    fn logout_clears_slot_and_identity() {
        with_runtime(|| {
            let storage = Rc::new(MemoryStorage::default());
            let store = store_over(storage.clone());
            store.login("alice@school.edu", "student").unwrap();
            store.logout();
            assert!(store.current().is_none());
            assert!(storage.is_empty());
            assert_eq!(store_over(storage).restore(), None);
        });
    }

    #[test]
    fn identity_signal_tracks_login() {
        with_runtime(|| {
            let store = store_over(Rc::new(MemoryStorage::default()));
            let identity = store.identity();
            assert!(identity.get().is_none());
            store.login("prof@school.edu", "teacher").unwrap();
            assert_eq!(identity.get().map(|i| i.role), Some(Role::Teacher));
        });
    }
}
