use super::{
    components::{
        analytics::Analytics, generator::QrGenerator, live_attendance::LiveAttendance,
        stats::ClassStatsCards,
    },
    view_model::{use_generator_view_model, TeacherTab, TEACHER_TABS},
};
use crate::{
    api::fixtures,
    components::{layout::WelcomeBanner, notice::NoticeBanner, tabs::TabBar},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn TeacherPanel() -> impl IntoView {
    let name = use_session()
        .current()
        .map(|id| id.display_name().to_string())
        .unwrap_or_default();
    let active = create_rw_signal(TeacherTab::Generator);
    let generator = use_generator_view_model(name.clone());
    let notice = generator.notice;

    view! {
        <div class="space-y-6">
            <WelcomeBanner
                title=format!("Welcome, Professor {}!", name)
                subtitle="Manage your classes and track student attendance"
            />
            <ClassStatsCards stats=fixtures::class_stats() />
            <NoticeBanner notice=notice />
            <TabBar tabs=TEACHER_TABS.to_vec() active=active />
            {move || match active.get() {
                TeacherTab::Generator => view! { <QrGenerator vm=generator.clone() /> }.into_view(),
                TeacherTab::LiveAttendance => {
                    view! { <LiveAttendance roster=fixtures::live_roster() notice=notice /> }.into_view()
                }
                TeacherTab::Analytics => view! {
                    <Analytics
                        classes=fixtures::class_performance()
                        weekdays=fixtures::weekly_trends()
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::teacher;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn greets_teacher_and_opens_generator() {
        let html = render_with_session(Some(teacher()), || view! { <TeacherPanel /> });
        assert!(html.contains("Welcome, Professor prof!"));
        assert!(html.contains("Generate Class QR Code"));
        assert!(html.contains("Live Attendance"));
        assert!(html.contains("Analytics"));
    }
}
