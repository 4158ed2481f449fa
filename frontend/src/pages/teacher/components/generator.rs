use crate::{
    components::{
        cards::Panel,
        common::{Badge, Button, ButtonVariant},
        empty_state::EmptyState,
    },
    pages::teacher::view_model::{GenerateKind, GeneratorViewModel},
};
use leptos::*;
use web_sys::HtmlSelectElement;

#[component]
fn ClassDetails(vm: GeneratorViewModel) -> impl IntoView {
    let state = vm.state;
    move || {
        state.with(|s| {
            s.selected.clone().map(|class| {
                let active = s.session_active;
                let badge_class = if active {
                    "bg-status-success-bg text-status-success-text"
                } else {
                    "bg-surface-muted text-fg-muted"
                };
                view! {
                    <div class="p-4 bg-surface-muted rounded-lg space-y-3">
                        <h4 class="font-medium text-fg">{class.name}</h4>
                        <dl class="grid grid-cols-2 gap-4 text-sm">
                            <div>
                                <dt class="text-fg-muted">"Room:"</dt>
                                <dd class="font-medium text-fg">{class.room}</dd>
                            </div>
                            <div>
                                <dt class="text-fg-muted">"Time:"</dt>
                                <dd class="font-medium text-fg">{class.time}</dd>
                            </div>
                            <div>
                                <dt class="text-fg-muted">"Students:"</dt>
                                <dd class="font-medium text-fg">{class.student_count}</dd>
                            </div>
                            <div>
                                <dt class="text-fg-muted">"Status:"</dt>
                                <dd>
                                    <Badge class=badge_class>
                                        {if active { "Active" } else { "Inactive" }}
                                    </Badge>
                                </dd>
                            </div>
                        </dl>
                    </div>
                }
            })
        })
    }
}

#[component]
pub fn QrGenerator(vm: GeneratorViewModel) -> impl IntoView {
    let state = vm.state;
    let generating = Signal::derive(move || state.with(|s| s.generating));
    let can_generate = Signal::derive(move || state.with(|s| s.can_generate()));
    let session_active = move || state.with(|s| s.session_active);

    let on_generate = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.generate(GenerateKind::New))
    };
    let on_refresh = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.generate(GenerateKind::Refresh))
    };
    let on_end = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.end_session())
    };
    let on_download = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.download())
    };
    let on_select = {
        let vm = vm.clone();
        move |ev: web_sys::Event| {
            let target = event_target::<HtmlSelectElement>(&ev);
            vm.select_by_id(&target.value());
        }
    };

    let options = vm
        .classes
        .iter()
        .map(|class| {
            view! {
                <option value=class.id.to_string()>
                    {format!("{} ({} • {})", class.name, class.time, class.room)}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Panel
                title="Generate Class QR Code"
                description="Create QR codes for your classes to enable student attendance marking"
            >
                <div class="space-y-6">
                    <div class="space-y-2">
                        <label for="class-select" class="text-sm font-medium text-fg">"Select Class"</label>
                        <select
                            id="class-select"
                            class="block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 sm:text-sm"
                            on:change=on_select
                        >
                            <option value="" selected=true>"Choose a class to generate QR code"</option>
                            {options}
                        </select>
                    </div>

                    <ClassDetails vm=vm.clone() />

                    <div class="flex flex-col gap-2">
                        <Button
                            on_click=on_generate
                            disabled=Signal::derive(move || !can_generate.get())
                            loading=generating
                        >
                            {move || if generating.get() { "Generating..." } else { "Generate QR Code" }}
                        </Button>
                        <Show when=session_active>
                            <div class="flex gap-2">
                                <Button variant=ButtonVariant::Outline class="flex-1" on_click=on_refresh>
                                    "Refresh"
                                </Button>
                                <Button variant=ButtonVariant::Danger class="flex-1" on_click=on_end>
                                    "End Session"
                                </Button>
                            </div>
                        </Show>
                    </div>
                </div>
            </Panel>

            <Panel title="QR Code Display" description="Students scan this code to mark their attendance">
                {move || match state.with(|s| s.image.clone()) {
                    Some(image) => view! {
                        <div class="text-center space-y-4">
                            <div class="p-6 bg-white rounded-lg inline-block shadow-inner">
                                <img
                                    src=image.data_url.clone()
                                    alt="Attendance QR Code"
                                    width=image.size_px
                                    height=image.size_px
                                    class="mx-auto"
                                />
                            </div>
                            <div class="space-y-2">
                                <h4 class="font-medium text-fg">{image.token.subject.clone()}</h4>
                                <p class="text-sm text-fg-muted">{format!("{} • {}", image.token.room, image.token.timestamp_iso)}</p>
                                <Show when=session_active>
                                    <Badge class="bg-status-success-bg text-status-success-text">"Live Session Active"</Badge>
                                </Show>
                            </div>
                            <div class="flex gap-2">
                                <Button variant=ButtonVariant::Outline class="flex-1" on_click=on_download>
                                    "Download"
                                </Button>
                                <Button variant=ButtonVariant::Outline class="flex-1" on_click=on_refresh>
                                    "New Code"
                                </Button>
                            </div>
                            <p class="text-xs text-fg-muted">
                                "Students: Open your app and scan this code to mark attendance"
                            </p>
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <EmptyState
                            title="No QR code generated yet"
                            description="Select a class and click \"Generate QR Code\" to start"
                        />
                    }
                    .into_view(),
                }}
            </Panel>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::teacher::view_model::{use_generator_view_model, GeneratorState};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_generator_lists_classes() {
        let html = render_to_string(|| {
            let vm = use_generator_view_model("prof".into());
            view! { <QrGenerator vm=vm /> }
        });
        assert!(html.contains("Choose a class to generate QR code"));
        assert!(html.contains("Advanced Physics"));
        assert!(html.contains("No QR code generated yet"));
        assert!(!html.contains("End Session"));
    }

    #[test]
    fn active_session_shows_image_and_controls() {
        let html = render_to_string(|| {
            let vm = use_generator_view_model("prof".into());
            vm.select_by_id("1");
            let class = vm.state.try_update(GeneratorState::begin).flatten().unwrap();
            vm.complete(GenerateKind::New, &class);
            view! { <QrGenerator vm=vm /> }
        });
        assert!(html.contains("data:image/png;base64,"));
        assert!(html.contains("Live Session Active"));
        assert!(html.contains("End Session"));
        assert!(html.contains("New Code"));
        assert!(html.contains("Active"));
    }
}
