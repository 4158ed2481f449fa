use crate::components::layout::Layout;
use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::TeacherPanel;

#[component]
pub fn TeacherPage() -> impl IntoView {
    view! {
        <Layout>
            <TeacherPanel />
        </Layout>
    }
}
