use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `bytes` to the user as a file download.
///
/// Builds a Blob, wraps it in a temporary object URL and clicks a synthetic
/// anchor; the URL is revoked immediately after. Any failure is reported to
/// the caller instead of panicking so the widget can show a notice.
pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window available")?;
    let document = window.document().ok_or("no document available")?;
    let body = document.body().ok_or("document has no body")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("building blob", e))?;

    let url =
        Url::create_object_url_with_blob(&blob).map_err(|e| js_error("creating object url", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("creating anchor", e))?
        .dyn_into()
        .map_err(|_| "anchor element had an unexpected type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| js_error("attaching anchor", e))?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).map_err(|e| js_error("revoking object url", e))?;
    Ok(())
}

fn js_error(context: &str, value: JsValue) -> String {
    format!("{}: {:?}", context, value)
}
