use super::{
    components::{
        free_time::FreeTimeSuggestions, routine::DailyRoutine, scanner::ScannerCard,
        stats::StudentStatsCards, tasks::DailyTasks, timetable::Timetable,
    },
    view_model::{use_scanner_view_model, StudentTab, STUDENT_TABS},
};
use crate::{
    api::fixtures,
    components::{layout::WelcomeBanner, tabs::TabBar},
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn StudentPanel() -> impl IntoView {
    let identity = use_session().identity();
    let name = move || {
        identity
            .get()
            .map(|id| id.display_name().to_string())
            .unwrap_or_default()
    };
    let active = create_rw_signal(StudentTab::Timetable);

    view! {
        <div class="space-y-6">
            {move || view! {
                <WelcomeBanner
                    title=format!("Welcome back, {}!", name())
                    subtitle="Ready for another productive day of learning?"
                />
            }}
            <StudentStatsCards stats=fixtures::student_stats() />
            <TabBar tabs=STUDENT_TABS.to_vec() active=active />
            {move || match active.get() {
                StudentTab::Timetable => view! { <Timetable items=fixtures::today_schedule() /> }.into_view(),
                StudentTab::Scanner => view! { <ScannerCard vm=use_scanner_view_model() /> }.into_view(),
                StudentTab::Tasks => view! { <DailyTasks tasks=fixtures::daily_tasks() /> }.into_view(),
                StudentTab::FreeTime => {
                    view! { <FreeTimeSuggestions suggestions=fixtures::free_time_suggestions() /> }.into_view()
                }
                StudentTab::Routine => view! { <DailyRoutine items=fixtures::daily_routine() /> }.into_view(),
            }}
        </div>
    }
}
