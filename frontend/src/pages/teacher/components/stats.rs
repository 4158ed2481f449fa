use crate::{api::ClassStats, components::cards::StatCard};
use leptos::*;

#[component]
pub fn ClassStatsCards(stats: ClassStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
            <StatCard
                title="Total Students"
                value=stats.total_students.to_string()
                caption="Across all classes"
            />
            <StatCard
                title="Present Today"
                value=stats.present_today.to_string()
                caption="On time arrival"
                value_class="text-status-success-text"
            />
            <StatCard
                title="Late Today"
                value=stats.late_today.to_string()
                caption="Need attention"
                value_class="text-status-warning-text"
            />
            <StatCard
                title="Attendance Rate"
                value=format!("{}%", stats.attendance_rate)
                caption="Above target"
                progress=stats.attendance_rate
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::fixtures;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_class_stats() {
        let html = render_to_string(|| view! { <ClassStatsCards stats=fixtures::class_stats() /> });
        assert!(html.contains("Total Students"));
        assert!(html.contains("87.5%"));
        assert!(html.contains("Need attention"));
    }
}
