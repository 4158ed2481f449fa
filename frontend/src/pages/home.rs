use crate::{components::guard::RedirectSignedIn, pages::login::LoginPanel};
use leptos::*;

/// Login form for visitors; signed-in users are forwarded to their dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RedirectSignedIn>
            {|| view! { <LoginPanel /> }}
        </RedirectSignedIn>
    }
}
