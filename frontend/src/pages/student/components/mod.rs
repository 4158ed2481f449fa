pub mod free_time;
pub mod history;
pub mod routine;
pub mod scanner;
pub mod stats;
pub mod tasks;
pub mod timetable;
