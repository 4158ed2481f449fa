use crate::{
    api::{RoutineItem, RoutineKind},
    components::{cards::Panel, common::Badge},
};
use leptos::*;

fn kind_class(kind: RoutineKind) -> &'static str {
    match kind {
        RoutineKind::Academic => "bg-action-primary-bg text-action-primary-text",
        RoutineKind::Personal => "bg-status-success-bg text-status-success-text",
        RoutineKind::Travel => "bg-status-warning-bg text-status-warning-text",
    }
}

#[component]
pub fn DailyRoutine(items: Vec<RoutineItem>) -> impl IntoView {
    view! {
        <Panel
            title="Daily Routine"
            description="Your personal schedule for academic and daily activities"
        >
            <ul class="space-y-3">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li class="flex items-center gap-4 p-3 border border-border rounded-lg">
                            <span class="text-sm font-medium text-fg-muted min-w-[120px]">{item.time}</span>
                            <span class="flex-1 font-medium text-fg">{item.activity}</span>
                            <Badge class=kind_class(item.kind)>{item.kind.as_str()}</Badge>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Panel>
    }
}
