use super::layout::LoadingSpinner;
use crate::{
    api::{Identity, Role},
    state::session::use_session,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
}

/// Role routes render only for a matching identity; anything else goes back
/// to `/`, which forwards signed-in users to their own dashboard.
pub fn route_decision(identity: Option<&Identity>, required: Role) -> RouteDecision {
    match identity {
        Some(identity) if identity.role == required => RouteDecision::Render,
        _ => RouteDecision::Redirect("/"),
    }
}

/// `/` shows the login form when signed out.
pub fn landing_decision(identity: Option<&Identity>) -> RouteDecision {
    match identity {
        Some(identity) => RouteDecision::Redirect(identity.role.home_path()),
        None => RouteDecision::Render,
    }
}

fn redirect(target: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let identity = use_session().identity();
    let decision = create_memo(move |_| route_decision(identity.get().as_ref(), role));
    create_effect(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            log::info!("redirecting away from {} route", role.as_str());
            redirect(target);
        }
    });
    view! {
        <Show when=move || decision.get() == RouteDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RedirectSignedIn(children: ChildrenFn) -> impl IntoView {
    let identity = use_session().identity();
    let decision = create_memo(move |_| landing_decision(identity.get().as_ref()));
    create_effect(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == RouteDecision::Render
            fallback=|| view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{student, teacher};
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn require_role_renders_children_for_matching_role() {
        let html = render_with_session(Some(teacher()), || {
            view! {
                <RequireRole role=Role::Teacher>
                    {|| view! { <div>"teacher-only"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("teacher-only"));
    }

    #[test]
    fn require_role_hides_children_for_other_role() {
        let html = render_with_session(Some(student()), || {
            view! {
                <RequireRole role=Role::Teacher>
                    {|| view! { <div>"teacher-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("teacher-only"));
    }

    #[test]
    fn require_role_hides_children_when_signed_out() {
        let html = render_with_session(None, || {
            view! {
                <RequireRole role=Role::Student>
                    {|| view! { <div>"student-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("student-only"));
    }

    #[test]
    fn landing_renders_children_only_when_signed_out() {
        let signed_out = render_with_session(None, || {
            view! { <RedirectSignedIn>{|| view! { <div>"login-form"</div> }}</RedirectSignedIn> }
        });
        assert!(signed_out.contains("login-form"));
        let signed_in = render_with_session(Some(student()), || {
            view! { <RedirectSignedIn>{|| view! { <div>"login-form"</div> }}</RedirectSignedIn> }
        });
        assert!(!signed_in.contains("login-form"));
    }
}
