use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::AppError;

const WINDOW_CONFIG_KEY: &str = "__SMART_ATTENDANCE_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrRenderConfig {
    pub size_px: u32,
    pub margin_modules: u32,
    pub dark_color: String,
    pub light_color: String,
    pub error_correction: ErrorCorrection,
}

impl Default for QrRenderConfig {
    fn default() -> Self {
        Self {
            size_px: 300,
            margin_modules: 2,
            dark_color: "#1e40af".into(),
            light_color: "#ffffff".into(),
            error_correction: ErrorCorrection::M,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub fps: u32,
    pub detection_box_px: u32,
}

impl ScannerConfig {
    pub fn frame_interval_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            detection_box_px: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key: String,
    pub login_delay_ms: u32,
    pub log_level: String,
    pub qr: QrRenderConfig,
    pub scanner: ScannerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "smartAttendanceUser".into(),
            login_delay_ms: 1000,
            log_level: "info".into(),
            qr: QrRenderConfig::default(),
            scanner: ScannerConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Returns the loaded config, or the defaults before `init` has finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    serde_json::from_str(raw).context("invalid config payload")
}

fn snapshot_from_window() -> anyhow::Result<Option<AppConfig>> {
    // Optional global: window.__SMART_ATTENDANCE_CONFIG = { login_delay_ms: 500, ... }
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let any = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into())
        .map_err(|_| anyhow!("window config lookup failed"))?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(&any)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or_else(|| anyhow!("window config is not serializable"))?;
    parse_config(&raw).map(Some)
}

async fn fetch_runtime_config() -> anyhow::Result<AppConfig> {
    let origin = web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .location()
        .origin()
        .map_err(|_| anyhow!("no origin"))?;
    let resp = reqwest::get(format!("{origin}/config.json"))
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json returned {}", resp.status()));
    }
    let body = resp.text().await.context("config.json body")?;
    parse_config(&body)
}

async fn load() -> Result<AppConfig, AppError> {
    match snapshot_from_window() {
        Ok(Some(cfg)) => return Ok(cfg),
        Ok(None) => {}
        Err(err) => log::warn!("ignoring window config: {err:#}"),
    }
    fetch_runtime_config()
        .await
        .map_err(|err| AppError::config(format!("{err:#}")))
}

pub async fn init() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let cfg = load().await.unwrap_or_else(|err| {
        log::warn!("{}: {err}; using defaults", err.title());
        AppConfig::default()
    });
    APP_CONFIG.get_or_init(|| cfg).clone()
}
