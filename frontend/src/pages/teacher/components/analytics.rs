use crate::{
    api::RateEntry,
    components::cards::{Panel, ProgressBar},
};
use leptos::*;

#[component]
fn RateList(entries: Vec<RateEntry>) -> impl IntoView {
    view! {
        <ul class="space-y-4">
            {entries
                .into_iter()
                .map(|entry| view! {
                    <li class="space-y-2">
                        <div class="flex items-center justify-between">
                            <span class="font-medium text-fg">{entry.label}</span>
                            <span class="text-sm text-fg-muted">{format!("{}%", entry.percent)}</span>
                        </div>
                        <ProgressBar percent=entry.percent as f32 />
                        {entry.detail.map(|detail| view! {
                            <div class="text-xs text-fg-muted">{detail}</div>
                        })}
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Analytics(classes: Vec<RateEntry>, weekdays: Vec<RateEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Panel title="Class Performance" description="Attendance statistics by class">
                <RateList entries=classes />
            </Panel>
            <Panel title="Weekly Trends" description="Attendance patterns over the week">
                <RateList entries=weekdays />
            </Panel>
        </div>
    }
}
