pub mod attendance;
pub mod session;
