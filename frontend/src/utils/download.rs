use wasm_bindgen::JsCast;

use crate::error::AppError;

/// Clicks a hidden anchor pointing at `href` so the browser saves it as
/// `filename`.
pub fn trigger_download(filename: &str, href: &str) -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::download("No document"))?;
    let element = document
        .create_element("a")
        .map_err(|_| AppError::download("Failed to create link"))?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| AppError::download("Failed to cast anchor"))?;
    a.set_href(href);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| AppError::download("No body"))?
        .append_child(&a)
        .map_err(|_| AppError::download("Append failed"))?;
    a.click();
    a.remove();
    Ok(())
}

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), AppError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&array, &options)
        .map_err(|_| AppError::download("Failed to create blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| AppError::download("Failed to create object URL"))?;
    let result = trigger_download(filename, &url);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}
