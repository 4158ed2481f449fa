use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::Role,
    components::guard::RequireRole,
    pages::{home::HomePage, StudentPage, TeacherPage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/student", "/teacher"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/student", "/teacher"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Smart Attendance" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/student" view=ProtectedStudent/>
                    <Route path="/teacher" view=ProtectedTeacher/>
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedStudent() -> impl IntoView {
    view! { <RequireRole role=Role::Student>{|| view! { <StudentPage/> }}</RequireRole> }
}

#[component]
fn ProtectedTeacher() -> impl IntoView {
    view! { <RequireRole role=Role::Teacher>{|| view! { <TeacherPage/> }}</RequireRole> }
}
