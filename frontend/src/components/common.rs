use leptos::{ev::MouseEvent, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Outline => "border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover",
            ButtonVariant::Danger => "border border-border bg-surface-elevated text-status-error-text hover:bg-status-error-bg",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] button_type: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!(
                "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                variant.classes(),
                class
            )
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}", class)>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_use_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("text-status-error-text"));
        assert_ne!(ButtonVariant::Outline.classes(), ButtonVariant::Primary.classes());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_renders_spinner_and_disables() {
        let html = render_to_string(|| {
            view! { <Button loading=true>"Generating..."</Button> }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("disabled"));
        assert!(html.contains("Generating..."));
    }
}
