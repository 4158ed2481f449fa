use crate::components::layout::Layout;
use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::StudentPanel;

#[component]
pub fn StudentPage() -> impl IntoView {
    view! {
        <Layout>
            <StudentPanel />
        </Layout>
    }
}
