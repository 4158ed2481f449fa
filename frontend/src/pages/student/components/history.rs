use crate::{
    components::{cards::Panel, common::Badge, empty_state::EmptyState},
    state::attendance::AttendanceState,
};
use leptos::*;

#[component]
pub fn AttendanceHistory(#[prop(into)] attendance: Signal<AttendanceState>) -> impl IntoView {
    let records = move || attendance.with(|state| state.log.records().to_vec());
    view! {
        <Panel title="Recent Attendance" description="Your attendance history for this week">
            <Show
                when=move || attendance.with(|state| !state.log.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No attendance records yet"
                        description="Scan a QR code to get started!"
                    />
                }
            >
                <ul class="space-y-3">
                    {move || records()
                        .into_iter()
                        .map(|record| view! {
                            <li class="flex items-center justify-between p-3 border border-border rounded-lg">
                                <div>
                                    <h4 class="font-medium text-fg">{record.subject}</h4>
                                    <p class="text-sm text-fg-muted">{format!("{} at {}", record.date, record.time)}</p>
                                </div>
                                <Badge class=record.status.badge_class()>{record.status.as_str()}</Badge>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Show>
        </Panel>
    }
}
