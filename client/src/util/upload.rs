//! File picking for the upload controls.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub use transcript::ingest::{ACCEPTED_EXTENSIONS, is_accepted};

/// Value for a file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Drain the files picked in a file input, keeping the accepted ones.
///
/// The input's value is reset so picking the same file again fires `change`.
#[cfg(feature = "csr")]
pub fn take_selected_files(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    use wasm_bindgen::JsCast;

    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let mut files = Vec::new();
    if let Some(list) = input.files() {
        for i in 0..list.length() {
            let Some(file) = list.get(i) else { continue };
            if is_accepted(&file.name()) {
                files.push(file);
            } else {
                log::warn!("skipping unsupported file {}", file.name());
            }
        }
    }
    input.set_value("");
    files
}

/// Sources-panel entry describing an uploaded browser file.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn source_doc(file: &web_sys::File) -> crate::state::sources::SourceDoc {
    crate::state::sources::SourceDoc::new(file.name(), file.size() as u64, file.type_())
}
