//! Browser delivery of finished exports: file download, clipboard, print.
//!
//! Only the csr build touches the DOM. Failures come back as strings for the
//! caller to log or surface.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use std::time::Duration;

/// Delay between writing the print document and opening the print dialog.
pub const PRINT_DELAY: Duration = Duration::from_millis(250);

/// Window event after which the print window closes itself.
pub const AFTER_PRINT_EVENT: &str = "afterprint";

/// Save `doc` through a temporary object URL and a synthetic link click.
///
/// # Errors
///
/// Returns an error string if the blob, URL, or link cannot be created.
#[cfg(feature = "csr")]
pub fn download(doc: &transcript::ExportDocument) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(&doc.body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(doc.media_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "could not create blob".to_owned())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "could not create object url".to_owned())?;

    let link = document
        .create_element("a")
        .map_err(|_| "could not create link".to_owned())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "link is not an anchor".to_owned())?;
    link.set_href(&url);
    link.set_download(&doc.file_name);
    link.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("downloaded {} ({} bytes)", doc.file_name, doc.body.len());
    Ok(())
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if the browser rejects the write.
#[cfg(feature = "csr")]
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| "clipboard write rejected".to_owned()))
}

/// Open a blank window, write `html` into it, then open its print dialog.
///
/// The window closes once the dialog is dismissed.
///
/// # Errors
///
/// Returns an error string if the window is blocked or cannot be written.
#[cfg(feature = "csr")]
pub fn print_html(html: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|_| "could not open print window".to_owned())?
        .ok_or("print window was blocked")?;
    let document = print_window.document().ok_or("print window has no document")?;

    let chunks = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html));
    document.write(&chunks).map_err(|_| "could not write print document".to_owned())?;
    document.close().map_err(|_| "could not close print document".to_owned())?;

    let closing = print_window.clone();
    let on_after_print = wasm_bindgen::closure::Closure::once_into_js(move || {
        if closing.close().is_err() {
            log::warn!("print window failed to close");
        }
    });
    if print_window
        .add_event_listener_with_callback(AFTER_PRINT_EVENT, on_after_print.unchecked_ref())
        .is_err()
    {
        log::warn!("print window will stay open after printing");
    }

    #[allow(clippy::cast_possible_truncation)]
    let delay_ms = PRINT_DELAY.as_millis() as u32;
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if print_window.print().is_err() {
            log::warn!("print dialog failed to open");
        }
    })
    .forget();
    Ok(())
}

/// Blocking browser alert.
#[cfg(feature = "csr")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
