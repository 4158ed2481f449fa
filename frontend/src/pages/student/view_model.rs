use crate::{
    components::notice::Notice,
    qr::{
        decoder::{CaptureSource, QrScanner},
        BrowserCameraSource,
    },
    state::attendance::{record_scan, use_attendance, AttendanceState, RecordOutcome},
    utils::{lifecycle::ViewLifetime, time::now_utc},
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

pub const SCANNER_VIDEO_ID: &str = "qr-reader-video";
const SCAN_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentTab {
    Timetable,
    Scanner,
    Tasks,
    FreeTime,
    Routine,
}

pub const STUDENT_TABS: [(StudentTab, &str); 5] = [
    (StudentTab::Timetable, "Timetable"),
    (StudentTab::Scanner, "QR Scanner"),
    (StudentTab::Tasks, "Daily Tasks"),
    (StudentTab::FreeTime, "Free Time"),
    (StudentTab::Routine, "Routine"),
];

pub fn scan_preview(text: &str) -> String {
    let head: String = text.chars().take(SCAN_PREVIEW_CHARS).collect();
    format!("{head}...")
}

pub fn scan_notice(outcome: &RecordOutcome) -> Notice {
    Notice::success(
        "Attendance Marked!",
        format!("Successfully marked present for {}", outcome.record().subject),
    )
}

/// Binds one decoder to the attendance history shown next to it.
pub struct ScannerViewModel<S>
where
    S: CaptureSource + 'static,
{
    source: Rc<S>,
    scanner: QrScanner<S::Device>,
    pub scanning: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    pub attendance: ReadSignal<AttendanceState>,
    set_attendance: WriteSignal<AttendanceState>,
    frame_interval_ms: u32,
    attempt: Rc<Cell<u64>>,
    lifetime: ViewLifetime,
}

impl<S: CaptureSource + 'static> Clone for ScannerViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            scanner: self.scanner.clone(),
            scanning: self.scanning,
            notice: self.notice,
            attendance: self.attendance,
            set_attendance: self.set_attendance,
            frame_interval_ms: self.frame_interval_ms,
            attempt: Rc::clone(&self.attempt),
            lifetime: self.lifetime.clone(),
        }
    }
}

impl<S: CaptureSource + 'static> ScannerViewModel<S> {
    /// The camera is released when the owning scope is cleaned up.
    pub fn new(source: S, frame_interval_ms: u32) -> Self {
        Self::with_attendance(source, frame_interval_ms, use_attendance())
    }

    pub fn with_attendance(
        source: S,
        frame_interval_ms: u32,
        (attendance, set_attendance): (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>),
    ) -> Self {
        let scanner = QrScanner::new();
        {
            let scanner = scanner.clone();
            on_cleanup(move || scanner.stop());
        }
        Self {
            source: Rc::new(source),
            scanner,
            scanning: create_rw_signal(false),
            notice: create_rw_signal(None),
            attendance,
            set_attendance,
            frame_interval_ms,
            attempt: Rc::new(Cell::new(0)),
            lifetime: ViewLifetime::new(),
        }
    }

    pub fn start(&self) {
        let vm = self.clone();
        spawn_local(async move {
            vm.scan_once().await;
        });
    }

    fn next_attempt(&self) -> u64 {
        let attempt = self.attempt.get() + 1;
        self.attempt.set(attempt);
        attempt
    }

    /// A scan may touch view state only while the view is alive and no
    /// later start or stop has replaced it.
    fn owns_view(&self, attempt: u64) -> bool {
        self.lifetime.is_alive() && self.attempt.get() == attempt
    }

    /// Acquires the camera, waits for the first decodable frame and records
    /// it. Returns `None` when stopped, denied, superseded, or the view went
    /// away.
    pub async fn scan_once(&self) -> Option<RecordOutcome> {
        if self.scanning.get_untracked() {
            return None;
        }
        let attempt = self.next_attempt();
        self.scanning.set(true);
        self.notice.set(None);

        let cycle = match self.scanner.start(self.source.as_ref()).await {
            Ok(cycle) => cycle,
            Err(err) => {
                if self.owns_view(attempt) {
                    self.scanning.set(false);
                    self.notice.set(Some(err.into()));
                }
                return None;
            }
        };

        let interval = self.frame_interval_ms;
        let decoded = self
            .scanner
            .run(cycle, || TimeoutFuture::new(interval))
            .await;
        if !self.owns_view(attempt) {
            log::debug!("scan attempt {attempt} ended after it was superseded");
            return None;
        }
        self.scanning.set(false);

        let outcome = record_scan(self.set_attendance, decoded?, now_utc())?;
        self.notice.set(Some(scan_notice(&outcome)));
        Some(outcome)
    }

    pub fn stop(&self) {
        self.next_attempt();
        self.scanner.stop();
        self.scanning.set(false);
    }

    pub fn holds_camera(&self) -> bool {
        self.scanner.holds_device()
    }
}

pub fn use_scanner_view_model() -> ScannerViewModel<BrowserCameraSource> {
    let cfg = crate::config::current();
    ScannerViewModel::new(
        BrowserCameraSource::new(SCANNER_VIDEO_ID, cfg.scanner.detection_box_px),
        cfg.scanner.frame_interval_ms(),
    )
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::error::AppError;
    use crate::qr::decoder::{CaptureDevice, LumaFrame};
    use crate::test_support::{frames::rendered_token, helpers::maths_class};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::task::{spawn_local, LocalSet};

    struct StillCamera {
        frame: Option<LumaFrame>,
        releases: Rc<Cell<u32>>,
    }

    impl CaptureDevice for StillCamera {
        fn grab_frame(&mut self) -> Result<Option<LumaFrame>, AppError> {
            Ok(self.frame.clone())
        }

        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    struct StillSource {
        frame: Option<LumaFrame>,
        deny: bool,
        releases: Rc<Cell<u32>>,
    }

    #[async_trait(?Send)]
    impl CaptureSource for StillSource {
        type Device = StillCamera;

        async fn acquire(&self) -> Result<StillCamera, AppError> {
            if self.deny {
                return Err(AppError::device("Permission denied"));
            }
            Ok(StillCamera {
                frame: self.frame.clone(),
                releases: Rc::clone(&self.releases),
            })
        }
    }

    /// Holds each `acquire` until its gate opens, one gate per call.
    struct GatedSource {
        gates: Rc<RefCell<VecDeque<Rc<Cell<bool>>>>>,
        frame: LumaFrame,
        releases: Rc<Cell<u32>>,
    }

    #[async_trait(?Send)]
    impl CaptureSource for GatedSource {
        type Device = StillCamera;

        async fn acquire(&self) -> Result<StillCamera, AppError> {
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                while !gate.get() {
                    tokio::task::yield_now().await;
                }
            }
            Ok(StillCamera {
                frame: Some(self.frame.clone()),
                releases: Rc::clone(&self.releases),
            })
        }
    }

    fn gated(gates: &[Rc<Cell<bool>>], releases: &Rc<Cell<u32>>) -> GatedSource {
        GatedSource {
            gates: Rc::new(RefCell::new(gates.iter().cloned().collect())),
            frame: rendered_token(&maths_class()).0,
            releases: Rc::clone(releases),
        }
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn restarted_scan_is_not_reset_by_the_stopped_one() {
        let runtime = create_runtime();
        let local = LocalSet::new();
        local
            .run_until(async {
                let first_gate = Rc::new(Cell::new(false));
                let second_gate = Rc::new(Cell::new(false));
                let releases = Rc::new(Cell::new(0));
                let vm = ScannerViewModel::new(
                    gated(&[first_gate.clone(), second_gate.clone()], &releases),
                    100,
                );

                let first = spawn_local({
                    let vm = vm.clone();
                    async move { vm.scan_once().await }
                });
                settle().await;
                assert!(vm.scanning.get_untracked());
                vm.stop();

                let second = spawn_local({
                    let vm = vm.clone();
                    async move { vm.scan_once().await }
                });
                settle().await;
                assert!(vm.scanning.get_untracked());

                first_gate.set(true);
                assert!(first.await.unwrap().is_none());
                assert_eq!(releases.get(), 1);
                assert!(vm.scanning.get_untracked());
                assert!(vm.notice.get_untracked().is_none());

                // a click while the restarted scan is acquiring is ignored
                assert!(vm.scan_once().await.is_none());
                assert!(vm.notice.get_untracked().is_none());

                second_gate.set(true);
                let outcome = second.await.unwrap().expect("restarted scan records");
                assert_eq!(outcome.record().subject, "Mathematics 101");
                assert!(!vm.scanning.get_untracked());
                assert!(!vm.holds_camera());
                assert_eq!(releases.get(), 2);
                assert_eq!(vm.attendance.get_untracked().log.len(), 4);
            })
            .await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn disposing_the_view_releases_camera_and_skips_recording() {
        let runtime = create_runtime();
        let local = LocalSet::new();
        local
            .run_until(async {
                let gate = Rc::new(Cell::new(false));
                let releases = Rc::new(Cell::new(0));
                let attendance = use_attendance();
                let (history, _) = attendance;

                let mount = as_child_of_current_owner({
                    let gate = gate.clone();
                    let releases = Rc::clone(&releases);
                    move |_: ()| {
                        let vm = ScannerViewModel::with_attendance(
                            gated(&[gate.clone()], &releases),
                            100,
                            attendance,
                        );
                        spawn_local(async move { vm.scan_once().await })
                    }
                });
                let (scan, disposer) = mount(());
                settle().await;

                drop(disposer);
                gate.set(true);
                assert!(scan.await.unwrap().is_none());
                assert_eq!(releases.get(), 1);

                let state = history.get_untracked();
                assert_eq!(state.log.len(), 3);
                assert!(state.last_scan.is_none());
            })
            .await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn scan_records_subject_and_releases_camera() {
        let runtime = create_runtime();
        let (frame, payload) = rendered_token(&maths_class());
        let releases = Rc::new(Cell::new(0));
        let vm = ScannerViewModel::new(
            StillSource {
                frame: Some(frame),
                deny: false,
                releases: Rc::clone(&releases),
            },
            100,
        );

        let outcome = vm.scan_once().await.expect("code decoded");
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.record().subject, "Mathematics 101");

        let state = vm.attendance.get_untracked();
        assert_eq!(state.log.len(), 4);
        assert_eq!(state.log.records()[0].subject, "Mathematics 101");
        assert_eq!(state.last_scan.as_deref(), Some(payload.as_str()));
        assert!(!vm.scanning.get_untracked());
        assert!(!vm.holds_camera());
        assert_eq!(releases.get(), 1);
        assert_eq!(
            vm.notice.get_untracked().map(|n| n.description),
            Some("Successfully marked present for Mathematics 101".to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn denied_camera_surfaces_notice_without_recording() {
        let runtime = create_runtime();
        let vm = ScannerViewModel::new(
            StillSource {
                frame: None,
                deny: true,
                releases: Rc::new(Cell::new(0)),
            },
            100,
        );

        assert!(vm.scan_once().await.is_none());
        assert!(!vm.scanning.get_untracked());
        assert_eq!(vm.attendance.get_untracked().log.len(), 3);
        let notice = vm.notice.get_untracked().expect("error notice");
        assert_eq!(notice.title, "Camera Unavailable");
        runtime.dispose();
    }

    #[tokio::test]
    async fn stop_before_start_leaves_no_camera() {
        let runtime = create_runtime();
        let vm = ScannerViewModel::new(
            StillSource {
                frame: None,
                deny: false,
                releases: Rc::new(Cell::new(0)),
            },
            100,
        );
        vm.stop();
        vm.stop();
        assert!(!vm.holds_camera());
        assert!(!vm.scanning.get_untracked());
        runtime.dispose();
    }
}
