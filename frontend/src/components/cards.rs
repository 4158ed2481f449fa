use leptos::*;

#[component]
pub fn ProgressBar(percent: f32) -> impl IntoView {
    let width = percent.clamp(0.0, 100.0);
    view! {
        <div class="h-2 w-full overflow-hidden rounded-full bg-surface-muted">
            <div class="h-full rounded-full bg-action-primary-bg" style=format!("width: {width}%")></div>
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] caption: String,
    #[prop(optional, into)] value_class: String,
    #[prop(optional)] progress: Option<f32>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-2">
                <h3 class="text-sm font-medium text-fg-muted">{title}</h3>
                <div class=format!("text-2xl font-bold text-fg {}", value_class)>{value}</div>
                {progress.map(|percent| view! { <ProgressBar percent=percent /> })}
                <p class="text-xs text-fg-muted">{caption}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] actions: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg">
            <div class="px-4 py-5 sm:px-6 flex items-start justify-between gap-4 border-b border-border">
                <div>
                    <h3 class="text-lg leading-6 font-medium text-fg">{title}</h3>
                    {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
                </div>
                {actions}
            </div>
            <div class="px-4 py-5 sm:p-6">{children()}</div>
        </section>
    }
}
