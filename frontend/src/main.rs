fn main() {
    smart_attendance_frontend::mount();
}
