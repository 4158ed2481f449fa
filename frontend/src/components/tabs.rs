use leptos::*;

/// A tab id paired with its visible label.
pub type TabSpec<T> = (T, &'static str);

#[component]
pub fn TabBar<T>(tabs: Vec<TabSpec<T>>, active: RwSignal<T>) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    view! {
        <div class="border-b border-border">
            <nav class="-mb-px flex flex-wrap gap-x-6" role="tablist">
                {tabs
                    .into_iter()
                    .map(|(id, label)| {
                        let selected = move || active.get() == id;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "whitespace-nowrap border-b-2 border-action-primary-bg py-3 px-1 text-sm font-medium text-fg"
                                    } else {
                                        "whitespace-nowrap border-b-2 border-transparent py-3 px-1 text-sm font-medium text-fg-muted hover:text-fg hover:border-border-strong"
                                    }
                                }
                                on:click=move |_| active.set(id)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
