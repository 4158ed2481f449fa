pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod qr;
pub mod router;
pub mod state;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Browser entry point. The app mounts once the runtime config has loaded,
/// so the session slot and QR settings come from it.
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::AppConfig::default().log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting Smart Attendance frontend");

    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::set_max_level(cfg.log_level().to_level_filter());
        log::info!("runtime config initialised");
        router::mount_app();
    });
}
