use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    qr::ScannedToken,
    utils::time::local_clock_label,
};
use chrono::{DateTime, Utc};
use leptos::*;

pub const FALLBACK_SUBJECT: &str = "Demo Class";

/// Which path produced the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Verified(AttendanceRecord),
    /// The scan did not carry a usable token; a demo record was written
    /// anyway.
    Fallback(AttendanceRecord),
}

impl RecordOutcome {
    pub fn record(&self) -> &AttendanceRecord {
        match self {
            RecordOutcome::Verified(record) | RecordOutcome::Fallback(record) => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RecordOutcome::Fallback(_))
    }
}

/// Newest-first attendance history for the current view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn demo() -> Self {
        let row = |subject: &str, time: &str, date: &str| AttendanceRecord {
            subject: subject.into(),
            time: time.into(),
            date: date.into(),
            status: AttendanceStatus::Present,
        };
        Self::new(vec![
            row("Mathematics", "9:00 AM", "Today"),
            row("Physics", "10:30 AM", "Today"),
            row("English", "2:00 PM", "Yesterday"),
        ])
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records a scan. Unparseable text is never rejected: it becomes a
    /// `Demo Class` record and the outcome is marked as a fallback.
    pub fn record(&mut self, decoded_text: &str, now: DateTime<Utc>) -> RecordOutcome {
        let time = local_clock_label(now);
        let outcome = match ScannedToken::parse(decoded_text) {
            Some(token) => RecordOutcome::Verified(AttendanceRecord {
                subject: token.subject,
                time,
                date: "Today".into(),
                status: AttendanceStatus::Present,
            }),
            None => {
                log::warn!("scan did not contain a session token, recording fallback");
                RecordOutcome::Fallback(AttendanceRecord {
                    subject: FALLBACK_SUBJECT.into(),
                    time,
                    date: "Today".into(),
                    status: AttendanceStatus::Present,
                })
            }
        };
        self.records.insert(0, outcome.record().clone());
        outcome
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub log: AttendanceLog,
    pub last_scan: Option<String>,
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    create_signal(AttendanceState {
        log: AttendanceLog::demo(),
        last_scan: None,
    })
}

pub fn record_scan(
    set_attendance_state: WriteSignal<AttendanceState>,
    decoded_text: String,
    now: DateTime<Utc>,
) -> Option<RecordOutcome> {
    let mut outcome = None;
    set_attendance_state.update(|state| {
        outcome = Some(state.log.record(&decoded_text, now));
        state.last_scan = Some(decoded_text);
    });
    outcome
}
