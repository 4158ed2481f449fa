use crate::error::AppError;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner message; replaces toast popups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    fn classes(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            NoticeKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }
}

impl From<&AppError> for Notice {
    fn from(error: &AppError) -> Self {
        Notice::error(error.title(), error.to_string())
    }
}

impl From<AppError> for Notice {
    fn from(error: AppError) -> Self {
        Notice::from(&error)
    }
}

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|current| {
            let classes = current.classes();
            view! {
                <div role="status" class=format!("border px-4 py-3 rounded mb-4 {}", classes)>
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="font-semibold">{current.title}</p>
                            <p class="text-sm mt-1">{current.description}</p>
                        </div>
                        <button
                            type="button"
                            class="text-sm font-medium opacity-75 hover:opacity-100"
                            aria-label="Dismiss"
                            on:click=move |_| notice.set(None)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
