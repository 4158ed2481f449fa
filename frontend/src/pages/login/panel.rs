use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <LoginForm
            form=vm.form
            notice=vm.notice
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}
