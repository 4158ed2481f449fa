use super::history::AttendanceHistory;
use crate::{
    components::{
        cards::Panel,
        common::{Button, ButtonVariant},
        notice::NoticeBanner,
    },
    pages::student::view_model::{scan_preview, ScannerViewModel, SCANNER_VIDEO_ID},
    qr::decoder::CaptureSource,
};
use leptos::*;

#[component]
pub fn ScannerCard<S>(vm: ScannerViewModel<S>) -> impl IntoView
where
    S: CaptureSource + 'static,
{
    let scanning = vm.scanning;
    let attendance = vm.attendance;
    let last_scan = move || attendance.with(|state| state.last_scan.clone());
    let on_start = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.start())
    };
    let on_stop = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.stop())
    };

    view! {
        <div class="space-y-4">
            <NoticeBanner notice=vm.notice />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Panel title="QR Code Scanner" description="Scan your class QR code to mark attendance">
                    <div class="space-y-4">
                        <video
                            id=SCANNER_VIDEO_ID
                            class=move || {
                                if scanning.get() {
                                    "w-full block border border-border rounded-lg overflow-hidden"
                                } else {
                                    "hidden"
                                }
                            }
                            muted=true
                            playsinline=true
                        ></video>
                        <Show
                            when=move || scanning.get()
                            fallback=move || view! {
                                <div class="text-center p-8 border-2 border-dashed border-border rounded-lg">
                                    <p class="text-fg-muted mb-4">"Ready to scan QR code for attendance"</p>
                                    <Button on_click=on_start>"Start Scanning"</Button>
                                </div>
                            }
                        >
                            <div class="text-center">
                                <Button variant=ButtonVariant::Outline on_click=on_stop>"Stop Scanning"</Button>
                                <p class="text-sm text-fg-muted mt-2">"Point your camera at the QR code"</p>
                            </div>
                        </Show>
                        {move || last_scan().map(|text| view! {
                            <div class="p-4 bg-status-success-bg border border-status-success-border rounded-lg">
                                <p class="font-medium text-status-success-text mb-1">"Scan Successful"</p>
                                <p class="text-sm text-fg-muted break-all">
                                    {format!("Last scanned: {}", scan_preview(&text))}
                                </p>
                            </div>
                        })}
                    </div>
                </Panel>
                <AttendanceHistory attendance=attendance />
            </div>
        </div>
    }
}
