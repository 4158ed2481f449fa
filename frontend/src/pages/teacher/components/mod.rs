pub mod analytics;
pub mod generator;
pub mod live_attendance;
pub mod stats;
