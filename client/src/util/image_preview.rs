//! Local file reads feeding the image preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place the view touches the browser file API. A picked
//! file is read into a data URL through `FileReader`; the reader's
//! `loadend` callback is bridged into a future so callers can `spawn_local`
//! the read and write the payload when it resolves. SSR builds compile the
//! pure helpers only.

#[cfg(test)]
#[path = "image_preview_test.rs"]
mod image_preview_test;

use leptos::prelude::*;

/// `accept` filter for the hidden file input.
pub const ACCEPT: &str = "image/*";

/// Reasons a preview read produced no payload. Logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("file reader could not be created")]
    ReaderUnavailable,

    #[error("file read could not be started")]
    ReadStart,

    #[error("file read finished without a data URL")]
    NoPayload,

    #[error("file read callback was dropped before firing")]
    Dropped,
}

/// First entry of a file selection; `None` when the picker was cancelled.
pub fn first_selected<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

/// Map the raw reader outcome to a payload.
pub fn payload_from_result(result: Option<String>) -> Result<String, PreviewError> {
    result.ok_or(PreviewError::NoPayload)
}

/// Click the hidden file input. No-op until the input is mounted.
pub fn open_picker(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            el.click();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}

/// First file selected in a file input.
#[cfg(feature = "hydrate")]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    let files = input.files()?;
    first_selected((0..files.length()).filter_map(|i| files.get(i)))
}

/// Read `file` into a data URL without blocking the event loop.
///
/// # Errors
///
/// Returns a [`PreviewError`] if the reader cannot be created or started,
/// or if it finishes without a string result.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, PreviewError> {
    use wasm_bindgen::{JsCast, closure::Closure};

    let reader = web_sys::FileReader::new().map_err(|_| PreviewError::ReaderUnavailable)?;
    let (tx, rx) = futures::channel::oneshot::channel::<Option<String>>();

    let reader_for_cb = reader.clone();
    let on_load_end = Closure::once(move || {
        let result = reader_for_cb.result().ok().and_then(|value| value.as_string());
        let _ = tx.send(result);
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));

    if reader.read_as_data_url(file).is_err() {
        reader.set_onloadend(None);
        return Err(PreviewError::ReadStart);
    }

    // `on_load_end` must outlive the read; it is dropped after the await.
    let outcome = rx.await;
    reader.set_onloadend(None);
    drop(on_load_end);

    match outcome {
        Ok(result) => payload_from_result(result),
        Err(_) => Err(PreviewError::Dropped),
    }
}
