use crate::{api::Role, state::session::use_session};
use leptos::*;

fn dashboard_label(role: Option<Role>) -> String {
    role.map(|role| format!("{} Dashboard", role.label()))
        .unwrap_or_default()
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let identity = session.identity();
    let (menu_open, set_menu_open) = create_signal(false);
    let role_label = move || dashboard_label(identity.get().map(|id| id.role));
    let email = move || identity.get().map(|id| id.email).unwrap_or_default();
    let on_logout = {
        let session = session.clone();
        move |_: ev::MouseEvent| {
            set_menu_open.set(false);
            session.logout();
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/");
            }
        }
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <div class="h-8 w-8 rounded-lg bg-action-primary-bg text-action-primary-text flex items-center justify-center font-bold">
                            "SA"
                        </div>
                        <div>
                            <h1 class="text-xl font-semibold text-fg">"Smart Attendance"</h1>
                            <p class="text-xs text-fg-muted">{role_label}</p>
                        </div>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-4">
                            <span class="text-sm text-fg-muted">{email}</span>
                            <button
                                on:click=on_logout.clone()
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign Out"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <p class="px-3 text-sm text-fg-muted">{email}</p>
                            <button
                                on:click=on_logout.clone()
                                class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign Out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

/// Greeting block shown at the top of both dashboards.
#[component]
pub fn WelcomeBanner(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            <p class="text-fg-muted">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
