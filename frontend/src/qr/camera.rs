use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use super::decoder::{detection_window, CaptureDevice, CaptureSource, LumaFrame};
use crate::error::AppError;

fn js_device_error(context: &str, err: JsValue) -> AppError {
    let detail = js_sys::Reflect::get(&err, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    AppError::device(format!("{context}: {detail}"))
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Rear camera streamed into the `<video>` element with `video_id`.
#[derive(Debug, Clone)]
pub struct BrowserCameraSource {
    pub video_id: String,
    pub detection_box: u32,
}

pub struct BrowserCamera {
    stream: MediaStream,
    video: HtmlVideoElement,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    detection_box: u32,
    released: bool,
}

impl BrowserCameraSource {
    pub fn new(video_id: impl Into<String>, detection_box: u32) -> Self {
        Self {
            video_id: video_id.into(),
            detection_box,
        }
    }

    async fn request_stream(&self) -> Result<MediaStream, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::device("No window object"))?;
        let media = window
            .navigator()
            .media_devices()
            .map_err(|_| AppError::device("Camera access is not supported in this browser"))?;

        let video = js_sys::Object::new();
        js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into())
            .map_err(|err| js_device_error("Invalid camera constraints", err))?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);
        constraints.set_audio(&JsValue::FALSE);

        let promise = media
            .get_user_media_with_constraints(&constraints)
            .map_err(|err| js_device_error("Camera request failed", err))?;
        JsFuture::from(promise)
            .await
            .map_err(|err| js_device_error("Camera permission denied", err))?
            .dyn_into::<MediaStream>()
            .map_err(|_| AppError::device("Camera returned no stream"))
    }

    async fn attach(&self, stream: &MediaStream) -> Result<BrowserCamera, AppError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::device("No document"))?;
        let video = document
            .get_element_by_id(&self.video_id)
            .ok_or_else(|| AppError::device("Scanner view is not mounted"))?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| AppError::device("Scanner element is not a video"))?;
        video.set_muted(true);
        let _ = video.set_attribute("playsinline", "true");
        video.set_src_object(Some(stream));
        let play = video
            .play()
            .map_err(|err| js_device_error("Camera preview failed", err))?;
        JsFuture::from(play)
            .await
            .map_err(|err| js_device_error("Camera preview failed", err))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|err| js_device_error("Canvas unavailable", err))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::device("Canvas unavailable"))?;
        let context = canvas
            .get_context("2d")
            .map_err(|err| js_device_error("Canvas unavailable", err))?
            .ok_or_else(|| AppError::device("Canvas unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::device("Canvas unavailable"))?;

        Ok(BrowserCamera {
            stream: stream.clone(),
            video,
            canvas,
            context,
            detection_box: self.detection_box,
            released: false,
        })
    }
}

#[async_trait(?Send)]
impl CaptureSource for BrowserCameraSource {
    type Device = BrowserCamera;

    async fn acquire(&self) -> Result<BrowserCamera, AppError> {
        let stream = self.request_stream().await?;
        match self.attach(&stream).await {
            Ok(camera) => Ok(camera),
            Err(err) => {
                stop_tracks(&stream);
                Err(err)
            }
        }
    }
}

impl CaptureDevice for BrowserCamera {
    fn grab_frame(&mut self) -> Result<Option<LumaFrame>, AppError> {
        let (width, height) = (self.video.video_width(), self.video.video_height());
        if width == 0 || height == 0 {
            return Ok(None);
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.context
            .draw_image_with_html_video_element(&self.video, 0.0, 0.0)
            .map_err(|err| js_device_error("Frame capture failed", err))?;

        let (x, y, side) = detection_window(width, height, self.detection_box);
        let data = self
            .context
            .get_image_data(x as f64, y as f64, side as f64, side as f64)
            .map_err(|err| js_device_error("Frame read failed", err))?;
        Ok(LumaFrame::from_rgba(side, side, &data.data().0))
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        stop_tracks(&self.stream);
        self.video.set_src_object(None);
        log::debug!("camera tracks stopped");
    }
}
