use crate::{
    api::Role,
    components::{
        common::{Button, ButtonVariant},
        notice::{Notice, NoticeBanner},
    },
    pages::login::utils::{submit_label, LoginFormState},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
fn RoleOption(form: LoginFormState, role: Role, #[prop(into)] hint: String) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 rounded-md border border-border px-3 py-2 cursor-pointer hover:bg-action-ghost-bg-hover">
            <input
                type="radio"
                name="role"
                value=role.as_str()
                prop:checked=move || form.role.get() == role
                on:change=move |_| form.role.set(role)
            />
            <div>
                <p class="text-sm font-medium text-fg">{role.label()}</p>
                <p class="text-xs text-fg-muted">{hint}</p>
            </div>
        </label>
    }
}

#[component]
pub fn LoginForm(
    form: LoginFormState,
    notice: RwSignal<Option<Notice>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated shadow rounded-lg p-8">
                <div>
                    <h2 class="mt-2 text-center text-3xl font-extrabold text-fg">
                        "Smart Attendance"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Sign in to your account to continue"
                    </p>
                </div>
                <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 sm:text-sm"
                                placeholder="Enter your email"
                                prop:value=form.email
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 sm:text-sm"
                                placeholder="Enter your password"
                                prop:value=form.password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.password.set(target.value());
                                }
                            />
                        </div>
                        <fieldset class="space-y-2">
                            <legend class="block text-sm font-medium text-fg">"I am a"</legend>
                            <RoleOption form=form role=Role::Student hint="Scan codes to mark attendance" />
                            <RoleOption form=form role=Role::Teacher hint="Generate codes and track classes" />
                        </fieldset>
                    </div>

                    <NoticeBanner notice=notice />

                    <Button
                        button_type="submit"
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=pending
                    >
                        {move || submit_label(pending.get())}
                    </Button>
                </form>
            </div>
        </div>
    }
}
