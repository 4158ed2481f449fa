use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Teacher => "/teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "" => Err(AppError::validation("Please select a role")),
            other => Err(AppError::validation(format!("Unknown role: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// Local part of the email, used as a display name.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub id: u32,
    pub name: String,
    pub room: String,
    pub time: String,
    #[serde(rename = "students")]
    pub student_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "bg-status-success-bg text-status-success-text",
            AttendanceStatus::Late => "bg-status-warning-bg text-status-warning-text",
            AttendanceStatus::Absent => "bg-status-error-bg text-status-error-text",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub subject: String,
    pub time: String,
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRosterEntry {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: AttendanceStatus,
    /// `None` for absent students.
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub total_students: u32,
    pub present_today: u32,
    pub late_today: u32,
    pub absent_today: u32,
    pub attendance_rate: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentStats {
    pub overall_attendance: u32,
    pub weekly_attendance: u32,
    pub daily_points: u32,
    pub daily_goal: u32,
}

impl StudentStats {
    pub fn points_percent(&self) -> u32 {
        if self.daily_goal == 0 {
            return 0;
        }
        self.daily_points * 100 / self.daily_goal
    }

    pub fn points_remaining(&self) -> u32 {
        self.daily_goal.saturating_sub(self.daily_points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Present,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub time: String,
    pub subject: String,
    pub room: String,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTask {
    pub subject: String,
    pub task: String,
    pub difficulty: Difficulty,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTimeSuggestion {
    pub activity: String,
    pub description: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    Academic,
    Personal,
    Travel,
}

impl RoutineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineKind::Academic => "academic",
            RoutineKind::Personal => "personal",
            RoutineKind::Travel => "travel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineItem {
    pub time: String,
    pub activity: String,
    pub kind: RoutineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateEntry {
    pub label: String,
    pub detail: Option<String>,
    pub percent: u32,
}
