//! Upload Area Component
//!
//! Click-to-browse and drag-and-drop target for a single image.

use leptos::prelude::*;
use leptos_filedrop::*;
use web_sys::File;

use crate::context::use_app_context;

#[component]
pub fn UploadArea(
    /// Called with the picked or dropped file
    on_file: impl Fn(File) + Copy + 'static,
    /// Hidden while a preview is showing
    hidden: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let zone = create_file_drop_signals();
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Browsers keep the picker's selection across form resets
    Effect::new(move |_| {
        let _ = ctx.upload_reset.get();
        if let Some(input) = file_input.get_untracked() {
            clear_file_input(&input);
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let file = first_selected_file(&ev);
        if let Some(input) = file_input.get_untracked() {
            clear_file_input(&input);
        }
        if let Some(file) = file {
            on_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            id="upload-area"
            class=move || if zone.drag_active_read.get() { "upload-area drag-over" } else { "upload-area" }
            style:display=move || if hidden.get() { "none" } else { "flex" }
            on:click=open_picker
            on:dragover=make_on_dragover(zone)
            on:dragleave=make_on_dragleave(zone)
            on:drop=make_on_drop(zone, on_file)
        >
            <div class="upload-icon">"📷"</div>
            <p class="upload-text">"Drag & drop a photo here"</p>
            <p class="upload-subtext">"or click to browse"</p>
            <input
                type="file"
                id="file-input"
                class="file-input"
                accept="image/*"
                node_ref=file_input
                on:change=on_change
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            />
        </div>
    }
}
