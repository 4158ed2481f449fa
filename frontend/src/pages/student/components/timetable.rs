use crate::{
    api::{ScheduleItem, ScheduleStatus},
    components::{cards::Panel, common::Badge},
    utils::time::{long_date_label, today_local},
};
use leptos::*;

fn status_badge(status: ScheduleStatus) -> (&'static str, &'static str) {
    match status {
        ScheduleStatus::Present => ("present", "bg-status-success-bg text-status-success-text"),
        ScheduleStatus::Upcoming => ("upcoming", "bg-surface-muted text-fg-muted"),
    }
}

#[component]
pub fn Timetable(items: Vec<ScheduleItem>) -> impl IntoView {
    view! {
        <Panel title="Today's Schedule" description=long_date_label(today_local())>
            <ul class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| {
                        let (label, class) = status_badge(item.status);
                        view! {
                            <li class="flex items-center justify-between p-3 border border-border rounded-lg">
                                <div class="flex items-center gap-4">
                                    <span class="text-sm font-medium text-fg-muted min-w-[80px]">{item.time}</span>
                                    <div>
                                        <h4 class="font-medium text-fg">{item.subject}</h4>
                                        <p class="text-sm text-fg-muted">{item.room}</p>
                                    </div>
                                </div>
                                <Badge class=class>{label}</Badge>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Panel>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::fixtures;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_schedule_with_status() {
        let html = render_to_string(|| view! { <Timetable items=fixtures::today_schedule() /> });
        assert!(html.contains("Today&#x27;s Schedule"));
        assert!(html.contains("Chemistry"));
        assert!(html.contains("upcoming"));
        assert!(html.contains("present"));
    }
}
