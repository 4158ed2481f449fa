pub mod home;
pub mod login;
pub mod student;
pub mod teacher;

pub use home::*;
pub use student::StudentPage;
pub use teacher::TeacherPage;
