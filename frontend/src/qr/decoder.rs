use async_trait::async_trait;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::error::AppError;

/// 8-bit greyscale frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LumaFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Converts canvas `ImageData` (RGBA, alpha ignored) to greyscale.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| {
                let luma = 299 * px[0] as u32 + 587 * px[1] as u32 + 114 * px[2] as u32;
                (luma / 1000) as u8
            })
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Centred square of at most `size` pixels inside a `width` x `height`
/// frame, as `(x, y, side)`.
pub fn detection_window(width: u32, height: u32, size: u32) -> (u32, u32, u32) {
    let side = size.min(width).min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Locates and decodes the first readable QR symbol in the frame.
pub fn decode_frame(frame: &LumaFrame) -> Option<String> {
    if frame.width == 0 || frame.height == 0 {
        return None;
    }
    let width = frame.width as usize;
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, frame.height as usize, |x, y| {
            frame.pixels[y * width + x]
        });
    prepared
        .detect_grids()
        .into_iter()
        .find_map(|grid| grid.decode().ok().map(|(_meta, content)| content))
}

#[async_trait(?Send)]
pub trait CaptureSource {
    type Device: CaptureDevice + 'static;

    async fn acquire(&self) -> Result<Self::Device, AppError>;
}

pub trait CaptureDevice {
    /// `Ok(None)` when no frame is available yet.
    fn grab_frame(&mut self) -> Result<Option<LumaFrame>, AppError>;
    fn release(&mut self);
}

/// Owns an acquired device and releases it exactly once, on `release` or
/// on drop.
pub struct DeviceGuard<D: CaptureDevice> {
    device: Option<D>,
}

impl<D: CaptureDevice> DeviceGuard<D> {
    pub fn new(device: D) -> Self {
        Self {
            device: Some(device),
        }
    }

    pub fn device_mut(&mut self) -> Option<&mut D> {
        self.device.as_mut()
    }

    pub fn is_held(&self) -> bool {
        self.device.is_some()
    }

    pub fn release(&mut self) {
        if let Some(mut device) = self.device.take() {
            device.release();
        }
    }
}

impl<D: CaptureDevice> Drop for DeviceGuard<D> {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Capturing,
    Decoded,
    Stopped,
}

/// Identifies the capture cycle opened by one `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCycle(u64);

struct ScannerInner<D: CaptureDevice> {
    state: ScanState,
    device: Option<DeviceGuard<D>>,
    cycle: u64,
}

/// Drives one capture device through `start` / `run` / `stop` cycles.
/// Each `start` acts on at most one decoded code.
pub struct QrScanner<D: CaptureDevice> {
    inner: Rc<RefCell<ScannerInner<D>>>,
}

impl<D: CaptureDevice> Clone for QrScanner<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: CaptureDevice> Default for QrScanner<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: CaptureDevice> QrScanner<D> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScannerInner {
                state: ScanState::Idle,
                device: None,
                cycle: 0,
            })),
        }
    }

    pub fn state(&self) -> ScanState {
        self.inner.borrow().state
    }

    pub fn is_capturing(&self) -> bool {
        self.state() == ScanState::Capturing
    }

    pub fn holds_device(&self) -> bool {
        self.inner
            .borrow()
            .device
            .as_ref()
            .map(DeviceGuard::is_held)
            .unwrap_or(false)
    }

    /// Whether `cycle` is still the latest one and has not been stopped.
    pub fn is_current(&self, cycle: ScanCycle) -> bool {
        let inner = self.inner.borrow();
        inner.cycle == cycle.0 && inner.state == ScanState::Capturing
    }

    pub async fn start<S>(&self, source: &S) -> Result<ScanCycle, AppError>
    where
        S: CaptureSource<Device = D> + ?Sized,
    {
        let (cycle, previous) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == ScanState::Capturing {
                return Err(AppError::device("Scanner is already running"));
            }
            let previous = inner.state;
            inner.state = ScanState::Capturing;
            inner.cycle += 1;
            (inner.cycle, previous)
        };

        match source.acquire().await {
            Ok(device) => {
                let guard = DeviceGuard::new(device);
                let mut inner = self.inner.borrow_mut();
                if inner.cycle != cycle || inner.state != ScanState::Capturing {
                    // stopped while the camera was being acquired; `guard`
                    // releases it on the way out
                    log::debug!("capture cycle {cycle} cancelled during acquisition");
                    return Ok(ScanCycle(cycle));
                }
                inner.device = Some(guard);
                log::info!("camera acquired");
                Ok(ScanCycle(cycle))
            }
            Err(err) => {
                let mut inner = self.inner.borrow_mut();
                if inner.cycle == cycle && inner.state == ScanState::Capturing {
                    inner.state = previous;
                }
                log::warn!("camera unavailable: {err}");
                Err(err)
            }
        }
    }

    /// Samples one frame per `tick` until a code decodes or `cycle` is
    /// stopped or superseded. Returns the decoded text, leaving the scanner
    /// `Stopped` with the device released.
    pub async fn run<F, Fut>(&self, cycle: ScanCycle, mut tick: F) -> Option<String>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let ScanCycle(cycle) = cycle;
        loop {
            let decoded = {
                let mut inner = self.inner.borrow_mut();
                if inner.cycle != cycle || inner.state != ScanState::Capturing {
                    return None;
                }
                let device = inner.device.as_mut()?.device_mut()?;
                match device.grab_frame() {
                    Ok(Some(frame)) => decode_frame(&frame),
                    Ok(None) => None,
                    Err(err) => {
                        log::debug!("frame skipped: {err}");
                        None
                    }
                }
            };

            if let Some(text) = decoded {
                let guard = {
                    let mut inner = self.inner.borrow_mut();
                    inner.state = ScanState::Decoded;
                    log::info!("attendance code decoded");
                    inner.device.take()
                };
                drop(guard);
                self.inner.borrow_mut().state = ScanState::Stopped;
                return Some(text);
            }

            log::trace!("no code in frame");
            tick().await;
        }
    }

    pub fn stop(&self) {
        let guard = {
            let mut inner = self.inner.borrow_mut();
            if matches!(inner.state, ScanState::Capturing | ScanState::Decoded) {
                inner.state = ScanState::Stopped;
            }
            inner.device.take()
        };
        if guard.is_some() {
            log::info!("camera released");
        }
        drop(guard);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{frames::rendered_token, helpers::maths_class};
    use std::cell::Cell;
    use std::collections::VecDeque;

    fn token_frame() -> (LumaFrame, String) {
        rendered_token(&maths_class())
    }

    fn blank_frame() -> LumaFrame {
        LumaFrame::new(64, 64, vec![255; 64 * 64]).unwrap()
    }

    struct FakeCamera {
        frames: VecDeque<Result<Option<LumaFrame>, AppError>>,
        releases: Rc<Cell<u32>>,
    }

    impl CaptureDevice for FakeCamera {
        fn grab_frame(&mut self) -> Result<Option<LumaFrame>, AppError> {
            self.frames.pop_front().unwrap_or(Ok(None))
        }

        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSource {
        frames: RefCell<Vec<Result<Option<LumaFrame>, AppError>>>,
        releases: Rc<Cell<u32>>,
        deny: bool,
        during_acquire: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl FakeSource {
        fn with_frames(frames: Vec<Result<Option<LumaFrame>, AppError>>) -> Self {
            Self {
                frames: RefCell::new(frames),
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl CaptureSource for FakeSource {
        type Device = FakeCamera;

        async fn acquire(&self) -> Result<FakeCamera, AppError> {
            if self.deny {
                return Err(AppError::device("Permission denied"));
            }
            if let Some(hook) = self.during_acquire.borrow_mut().take() {
                hook();
            }
            Ok(FakeCamera {
                frames: self.frames.borrow_mut().drain(..).collect(),
                releases: Rc::clone(&self.releases),
            })
        }
    }

    #[test]
    fn decodes_rendered_attendance_code() {
        let (frame, payload) = token_frame();
        assert_eq!(decode_frame(&frame), Some(payload));
    }

    #[test]
    fn frame_without_code_is_empty_result() {
        assert_eq!(decode_frame(&blank_frame()), None);
        assert_eq!(decode_frame(&LumaFrame::new(0, 0, vec![]).unwrap()), None);
    }

    #[test]
    fn rgba_conversion_weights_channels() {
        let rgba = [255, 255, 255, 255, 0, 0, 0, 255, 255, 0, 0, 0];
        let frame = LumaFrame::from_rgba(3, 1, &rgba).unwrap();
        assert_eq!(frame.pixel(0, 0), 255);
        assert_eq!(frame.pixel(1, 0), 0);
        assert_eq!(frame.pixel(2, 0), 76);
        assert!(LumaFrame::from_rgba(2, 2, &rgba).is_none());
    }

    #[test]
    fn detection_window_is_centred_and_clamped() {
        assert_eq!(detection_window(640, 480, 250), (195, 115, 250));
        assert_eq!(detection_window(200, 100, 250), (50, 0, 100));
    }

    #[tokio::test]
    async fn first_decode_stops_and_releases() {
        let (frame, payload) = token_frame();
        let source = FakeSource::with_frames(vec![
            Ok(None),
            Ok(Some(blank_frame())),
            Err(AppError::device("video not ready")),
            Ok(Some(frame.clone())),
            Ok(Some(frame)),
        ]);
        let scanner = QrScanner::new();
        let cycle = scanner.start(&source).await.unwrap();
        assert_eq!(scanner.state(), ScanState::Capturing);
        assert!(scanner.holds_device());

        let ticks = Cell::new(0);
        let text = scanner
            .run(cycle, || {
                ticks.set(ticks.get() + 1);
                async {}
            })
            .await;
        assert_eq!(text, Some(payload));
        assert_eq!(ticks.get(), 3);
        assert_eq!(scanner.state(), ScanState::Stopped);
        assert!(!scanner.holds_device());
        assert_eq!(source.releases.get(), 1);

        // at most one decode per start
        assert_eq!(scanner.run(cycle, || async {}).await, None);
    }

    #[tokio::test]
    async fn device_error_is_surfaced_and_state_restored() {
        let source = FakeSource {
            deny: true,
            ..FakeSource::default()
        };
        let scanner: QrScanner<FakeCamera> = QrScanner::new();
        let err = scanner.start(&source).await.unwrap_err();
        assert!(matches!(err, AppError::Device(_)));
        assert_eq!(scanner.state(), ScanState::Idle);
        assert!(!scanner.holds_device());
    }

    #[tokio::test]
    async fn stop_twice_is_idempotent_and_releases_once() {
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        scanner.start(&source).await.unwrap();
        scanner.stop();
        scanner.stop();
        assert_eq!(scanner.state(), ScanState::Stopped);
        assert!(!scanner.holds_device());
        assert_eq!(source.releases.get(), 1);
    }

    #[test]
    fn stop_from_idle_is_a_no_op() {
        let scanner: QrScanner<FakeCamera> = QrScanner::new();
        scanner.stop();
        assert_eq!(scanner.state(), ScanState::Idle);
    }

    #[tokio::test]
    async fn stop_during_run_ends_loop() {
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        let cycle = scanner.start(&source).await.unwrap();
        let handle = scanner.clone();
        let text = scanner
            .run(cycle, move || {
                handle.stop();
                async {}
            })
            .await;
        assert_eq!(text, None);
        assert_eq!(source.releases.get(), 1);
    }

    #[tokio::test]
    async fn stop_during_acquisition_releases_late_device() {
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        let handle = scanner.clone();
        *source.during_acquire.borrow_mut() = Some(Box::new(move || handle.stop()));
        let cycle = scanner.start(&source).await.unwrap();
        assert!(!scanner.is_current(cycle));
        assert_eq!(scanner.state(), ScanState::Stopped);
        assert!(!scanner.holds_device());
        assert_eq!(source.releases.get(), 1);
    }

    #[tokio::test]
    async fn second_start_while_capturing_is_rejected() {
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        scanner.start(&source).await.unwrap();
        assert!(scanner.start(&source).await.is_err());
        assert_eq!(scanner.state(), ScanState::Capturing);
        scanner.stop();
    }

    #[tokio::test]
    async fn restart_after_stop_opens_new_cycle() {
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        scanner.start(&source).await.unwrap();
        scanner.stop();
        scanner.start(&source).await.unwrap();
        assert!(scanner.is_capturing());
        scanner.stop();
        assert_eq!(source.releases.get(), 2);
    }

    #[tokio::test]
    async fn superseded_cycle_does_not_drive_the_new_one() {
        let (frame, payload) = token_frame();
        let source = FakeSource::default();
        let scanner = QrScanner::new();
        let first = scanner.start(&source).await.unwrap();
        scanner.stop();

        *source.frames.borrow_mut() = vec![Ok(Some(frame))];
        let second = scanner.start(&source).await.unwrap();
        assert_ne!(first, second);
        assert!(!scanner.is_current(first));
        assert!(scanner.is_current(second));

        assert_eq!(scanner.run(first, || async {}).await, None);
        assert!(scanner.holds_device());
        assert_eq!(scanner.state(), ScanState::Capturing);

        assert_eq!(scanner.run(second, || async {}).await, Some(payload));
        assert_eq!(source.releases.get(), 2);
    }

    #[tokio::test]
    async fn dropping_scanner_releases_device() {
        let source = FakeSource::default();
        {
            let scanner = QrScanner::new();
            scanner.start(&source).await.unwrap();
            assert_eq!(source.releases.get(), 0);
        }
        assert_eq!(source.releases.get(), 1);
    }
}
