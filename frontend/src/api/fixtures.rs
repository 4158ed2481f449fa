//! Reference data served in place of a roster backend.

use super::types::*;

fn s(value: &str) -> String {
    value.to_string()
}

pub fn teacher_classes() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor {
            id: 1,
            name: s("Mathematics 101"),
            room: s("Room 101"),
            time: s("9:00 AM"),
            student_count: 32,
        },
        ClassDescriptor {
            id: 2,
            name: s("Advanced Physics"),
            room: s("Lab 1"),
            time: s("10:30 AM"),
            student_count: 28,
        },
        ClassDescriptor {
            id: 3,
            name: s("Calculus II"),
            room: s("Room 205"),
            time: s("2:00 PM"),
            student_count: 24,
        },
    ]
}

pub fn class_stats() -> ClassStats {
    ClassStats {
        total_students: 32,
        present_today: 28,
        late_today: 3,
        absent_today: 1,
        attendance_rate: 87.5,
    }
}

pub fn live_roster() -> Vec<StudentRosterEntry> {
    use AttendanceStatus::*;
    [
        (1, "Alice Johnson", "alice@school.edu", Present, Some("9:00 AM")),
        (2, "Bob Smith", "bob@school.edu", Present, Some("9:02 AM")),
        (3, "Carol Davis", "carol@school.edu", Late, Some("9:15 AM")),
        (4, "David Wilson", "david@school.edu", Present, Some("8:58 AM")),
        (5, "Emma Brown", "emma@school.edu", Absent, None),
        (6, "Frank Miller", "frank@school.edu", Present, Some("9:01 AM")),
        (7, "Grace Lee", "grace@school.edu", Late, Some("9:12 AM")),
        (8, "Henry Taylor", "henry@school.edu", Present, Some("8:59 AM")),
    ]
    .into_iter()
    .map(|(id, name, email, status, time)| StudentRosterEntry {
        id,
        name: s(name),
        email: s(email),
        status,
        time: time.map(s),
    })
    .collect()
}

pub fn class_performance() -> Vec<RateEntry> {
    teacher_classes()
        .into_iter()
        .zip([91, 84, 88])
        .map(|(class, percent)| RateEntry {
            label: class.name,
            detail: Some(format!(
                "{} students • {} • {}",
                class.student_count, class.time, class.room
            )),
            percent,
        })
        .collect()
}

pub fn weekly_trends() -> Vec<RateEntry> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .into_iter()
        .zip([94, 89, 92, 87, 90])
        .map(|(day, percent)| RateEntry {
            label: s(day),
            detail: None,
            percent,
        })
        .collect()
}

pub fn student_stats() -> StudentStats {
    StudentStats {
        overall_attendance: 87,
        weekly_attendance: 92,
        daily_points: 45,
        daily_goal: 65,
    }
}

pub fn today_schedule() -> Vec<ScheduleItem> {
    use ScheduleStatus::*;
    [
        ("9:00 AM", "Mathematics", "Room 101", Present),
        ("10:30 AM", "Physics", "Lab 1", Present),
        ("12:00 PM", "English", "Room 205", Upcoming),
        ("2:00 PM", "Chemistry", "Lab 2", Upcoming),
    ]
    .into_iter()
    .map(|(time, subject, room, status)| ScheduleItem {
        time: s(time),
        subject: s(subject),
        room: s(room),
        status,
    })
    .collect()
}

pub fn daily_tasks() -> Vec<DailyTask> {
    use Difficulty::*;
    [
        ("Math", "Complete quadratic equations worksheet", Medium, 15),
        (
            "Physics",
            "Review Newton's laws and complete practice problems",
            Hard,
            20,
        ),
        ("English", "Read Chapter 5 of assigned novel", Easy, 10),
    ]
    .into_iter()
    .map(|(subject, task, difficulty, points)| DailyTask {
        subject: s(subject),
        task: s(task),
        difficulty,
        points,
    })
    .collect()
}

pub fn free_time_suggestions() -> Vec<FreeTimeSuggestion> {
    [
        ("Study Group", "Join math study group in Library", "3:00 PM"),
        ("Lab Practice", "Open physics lab for experiments", "4:00 PM"),
        ("Career Workshop", "STEM career guidance session", "5:00 PM"),
    ]
    .into_iter()
    .map(|(activity, description, time)| FreeTimeSuggestion {
        activity: s(activity),
        description: s(description),
        time: s(time),
    })
    .collect()
}

pub fn daily_routine() -> Vec<RoutineItem> {
    use RoutineKind::*;
    [
        ("6:30 AM", "Morning Exercise", Personal),
        ("7:30 AM", "Breakfast & Preparation", Personal),
        ("8:30 AM", "School Commute", Travel),
        ("9:00 AM - 3:00 PM", "Class Schedule", Academic),
        ("3:30 PM", "Lunch Break", Personal),
        ("4:00 PM", "Study Session", Academic),
        ("6:00 PM", "Sports/Recreation", Personal),
        ("8:00 PM", "Dinner & Family Time", Personal),
    ]
    .into_iter()
    .map(|(time, activity, kind)| RoutineItem {
        time: s(time),
        activity: s(activity),
        kind,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn class_ids_are_unique() {
        let classes = teacher_classes();
        let ids: HashSet<_> = classes.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), classes.len());
    }

    #[test]
    fn only_absent_students_lack_a_time() {
        for entry in live_roster() {
            assert_eq!(
                entry.time.is_none(),
                entry.status == AttendanceStatus::Absent,
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn class_performance_covers_every_class() {
        let rows = class_performance();
        assert_eq!(rows.len(), teacher_classes().len());
        assert_eq!(
            rows[0].detail.as_deref(),
            Some("32 students • 9:00 AM • Room 101")
        );
    }
}
