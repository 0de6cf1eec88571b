//! Leptos FileDrop Utilities
//!
//! HTML5 file drag-and-drop and file-picker helpers for Leptos.
//! Handlers call `preventDefault` so the browser neither refuses the drop
//! nor navigates to the dropped file.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, HtmlInputElement};

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag is hovering over the zone
    pub drag_active_read: ReadSignal<bool>,
    pub drag_active_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (drag_active_read, drag_active_write) = signal(false);
    FileDropSignals {
        drag_active_read,
        drag_active_write,
    }
}

/// Create dragover handler: allows the drop and lights the zone
pub fn make_on_dragover(zone: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if !zone.drag_active_read.get_untracked() {
            zone.drag_active_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(zone: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        zone.drag_active_write.set(false);
    }
}

/// Create drop handler, passing the first dropped file on
pub fn make_on_drop<F>(zone: FileDropSignals, on_file: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(File) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        zone.drag_active_write.set(false);
        if let Some(file) = first_dropped_file(&ev) {
            on_file(file);
        }
    }
}

pub fn first_dropped_file(ev: &DragEvent) -> Option<File> {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .and_then(|files| files.get(0))
}

/// First file chosen in an `<input type="file">` change event
pub fn first_selected_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Forget the picker's selection so choosing the same file fires `change` again
pub fn clear_file_input(input: &HtmlInputElement) {
    input.set_value("");
}

/// Read a file into a `data:` URL
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(js_error)?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| "reader result was not a string".to_string())
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
