use crate::api::{LoginRequest, Role};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Student),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }
}

pub fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Signing In..."
    } else {
        "Sign In"
    }
}
