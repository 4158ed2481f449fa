use crate::api::Identity;
use crate::test_support::helpers::provide_session;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    suppress_resource_load(false);
    html
}

/// Renders `view` with an in-memory session store in context.
pub fn render_with_session<F, N>(identity: Option<Identity>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_session(identity);
        view()
    })
}
