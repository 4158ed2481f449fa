use super::utils::{export_filename, roster_csv, ROSTER_CLASS};
use crate::{
    api::{fixtures, ClassDescriptor, StudentRosterEntry},
    components::notice::Notice,
    config,
    error::AppError,
    qr::{QrEncoder, QrImage},
    utils::{lifecycle::ViewLifetime, time::today_local, trigger_csv_download, trigger_download},
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherTab {
    Generator,
    LiveAttendance,
    Analytics,
}

pub const TEACHER_TABS: [(TeacherTab, &str); 3] = [
    (TeacherTab::Generator, "QR Generator"),
    (TeacherTab::LiveAttendance, "Live Attendance"),
    (TeacherTab::Analytics, "Analytics"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    New,
    Refresh,
}

/// QR generator panel state. A session is active exactly while an image is
/// shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorState {
    pub selected: Option<ClassDescriptor>,
    pub image: Option<QrImage>,
    pub session_active: bool,
    pub generating: bool,
}

impl GeneratorState {
    pub fn select(&mut self, class: Option<ClassDescriptor>) {
        self.selected = class;
    }

    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.generating
    }

    /// Marks an encode as in flight and hands back the class to encode.
    pub fn begin(&mut self) -> Option<ClassDescriptor> {
        if !self.can_generate() {
            return None;
        }
        self.generating = true;
        self.selected.clone()
    }

    pub fn finish(&mut self, kind: GenerateKind, result: Result<QrImage, AppError>) -> Notice {
        self.generating = false;
        match result {
            Ok(image) => {
                let subject = image.token.subject.clone();
                self.image = Some(image);
                self.session_active = true;
                match kind {
                    GenerateKind::New => Notice::success(
                        "QR Code Generated!",
                        format!("Students can now scan to mark attendance for {subject}"),
                    ),
                    GenerateKind::Refresh => {
                        Notice::success("QR Code Refreshed", "A new session has been created")
                    }
                }
            }
            Err(err) => Notice::error(
                err.title(),
                format!("Failed to generate QR code. Please try again. ({err})"),
            ),
        }
    }

    pub fn end_session(&mut self) -> Notice {
        self.session_active = false;
        self.image = None;
        Notice::success(
            "Session Ended",
            "Students can no longer mark attendance with this QR code",
        )
    }
}

#[derive(Clone)]
pub struct GeneratorViewModel {
    pub classes: Vec<ClassDescriptor>,
    pub state: RwSignal<GeneratorState>,
    pub notice: RwSignal<Option<Notice>>,
    encoder: QrEncoder,
    teacher: String,
    lifetime: ViewLifetime,
}

impl GeneratorViewModel {
    pub fn new(classes: Vec<ClassDescriptor>, teacher: String, encoder: QrEncoder) -> Self {
        Self {
            classes,
            state: create_rw_signal(GeneratorState::default()),
            notice: create_rw_signal(None),
            encoder,
            teacher,
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn select_by_id(&self, raw_id: &str) {
        let class = raw_id
            .parse::<u32>()
            .ok()
            .and_then(|id| self.classes.iter().find(|c| c.id == id).cloned());
        self.state.update(|state| state.select(class));
    }

    /// Yields once before encoding so the pending state can render.
    pub fn generate(&self, kind: GenerateKind) {
        let Some(class) = self.state.try_update(GeneratorState::begin).flatten() else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            vm.complete(kind, &class);
        });
    }

    /// Encodes `class` and applies the result unless the view is gone.
    pub fn complete(&self, kind: GenerateKind, class: &ClassDescriptor) {
        let result = self.encoder.encode(class, &self.teacher);
        if !self.lifetime.is_alive() {
            log::debug!("discarding attendance code generated after teardown");
            return;
        }
        let notice = self
            .state
            .try_update(|state| state.finish(kind, result))
            .unwrap_or_else(|| Notice::error("Error", "Generator is no longer available"));
        self.notice.set(Some(notice));
    }

    pub fn end_session(&self) {
        if let Some(notice) = self.state.try_update(GeneratorState::end_session) {
            log::info!("attendance session ended");
            self.notice.set(Some(notice));
        }
    }

    pub fn download(&self) {
        let Some(image) = self.state.with_untracked(|state| state.image.clone()) else {
            return;
        };
        let notice = match trigger_download(&image.download_name(), &image.data_url) {
            Ok(()) => Notice::success("Download Started", "QR code image has been downloaded"),
            Err(err) => Notice::from(err),
        };
        self.notice.set(Some(notice));
    }
}

pub fn use_generator_view_model(teacher: String) -> GeneratorViewModel {
    GeneratorViewModel::new(
        fixtures::teacher_classes(),
        teacher,
        QrEncoder::new(config::current().qr),
    )
}

pub fn export_roster(roster: &[StudentRosterEntry]) -> Notice {
    let filename = export_filename(ROSTER_CLASS, today_local());
    match trigger_csv_download(&filename, &roster_csv(roster)) {
        Ok(()) => {
            log::info!("exported {} roster rows", roster.len());
            Notice::success(
                "Export Complete",
                "Attendance report has been downloaded successfully",
            )
        }
        Err(err) => {
            log::error!("roster export failed: {err}");
            Notice::from(err)
        }
    }
}
