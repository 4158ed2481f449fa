use super::utils::LoginFormState;
use crate::{
    api::{auth, Identity, LoginRequest},
    components::notice::Notice,
    config,
    error::AppError,
    state::session::use_session,
    utils::lifecycle::ViewLifetime,
};
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub notice: RwSignal<Option<Notice>>,
    pub login_action: Action<LoginRequest, Result<Option<Identity>, AppError>>,
}

impl LoginViewModel {
    /// Validation failures are reported without dispatching, so the form can
    /// be corrected and resubmitted.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let request = self.form.to_request();
        if let Err(err) = auth::validate_login(&request) {
            self.notice.set(Some(err.into()));
            return;
        }
        self.notice.set(None);
        self.login_action.dispatch(request);
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let notice = create_rw_signal(None::<Notice>);
    let session = use_session();
    let lifetime = ViewLifetime::new();

    let login_action = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let session = session.clone();
        let lifetime = lifetime.clone();
        async move {
            auth::login(request, &session, config::current().login_delay_ms, &lifetime).await
        }
    });

    create_effect(move |_| match login_action.value().get() {
        Some(Ok(Some(identity))) => {
            log::debug!("login complete, opening {}", identity.role.home_path());
            form.password.set(String::new());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(identity.role.home_path());
            }
        }
        Some(Err(err)) => notice.set(Some(err.into())),
        _ => {}
    });

    LoginViewModel {
        form,
        notice,
        login_action,
    }
}
