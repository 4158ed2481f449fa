use crate::{
    api::{AttendanceStatus, StudentRosterEntry},
    components::{
        cards::Panel,
        common::{Badge, Button, ButtonVariant},
        notice::Notice,
    },
    pages::teacher::{utils::ROSTER_CLASS, view_model::export_roster},
};
use leptos::*;

fn status_marker(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "text-status-success-text",
        AttendanceStatus::Late => "text-status-warning-text",
        AttendanceStatus::Absent => "text-status-error-text",
    }
}

#[component]
pub fn LiveAttendance(
    roster: Vec<StudentRosterEntry>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let rows = roster.clone();
    let on_export = Callback::new(move |_: ev::MouseEvent| {
        notice.set(Some(export_roster(&roster)));
    });
    let actions = view! {
        <Button variant=ButtonVariant::Outline on_click=on_export>"Export"</Button>
    }
    .into_view();

    view! {
        <Panel
            title=format!("Live Attendance - {ROSTER_CLASS}")
            description="Real-time attendance tracking for today's session"
            actions=actions
        >
            <ul class="space-y-4">
                {rows
                    .into_iter()
                    .map(|student| view! {
                        <li class="flex items-center justify-between p-4 border border-border rounded-lg">
                            <div class="flex items-center gap-4">
                                <span class=format!("text-lg {}", status_marker(student.status))>"●"</span>
                                <div>
                                    <h4 class="font-medium text-fg">{student.name}</h4>
                                    <p class="text-sm text-fg-muted">{student.email}</p>
                                </div>
                            </div>
                            <div class="flex items-center gap-3">
                                <span class="text-sm text-fg-muted min-w-[60px]">
                                    {student.time.unwrap_or_else(|| "-".into())}
                                </span>
                                <Badge class=student.status.badge_class()>
                                    {student.status.as_str().to_ascii_lowercase()}
                                </Badge>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Panel>
    }
}
