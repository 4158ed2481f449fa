use crate::{api::StudentStats, components::cards::StatCard};
use leptos::*;

#[component]
pub fn StudentStatsCards(stats: StudentStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard
                title="Overall Attendance"
                value=format!("{}%", stats.overall_attendance)
                caption="Above average performance"
                value_class="text-status-success-text"
                progress=stats.overall_attendance as f32
            />
            <StatCard
                title="This Week"
                value=format!("{}%", stats.weekly_attendance)
                caption="Excellent weekly record"
                progress=stats.weekly_attendance as f32
            />
            <StatCard
                title="Daily Points"
                value=format!("{}/{}", stats.daily_points, stats.daily_goal)
                caption=format!("{} more points to daily goal", stats.points_remaining())
                progress=stats.points_percent() as f32
            />
        </div>
    }
}
