//! Upload Screen Component
//!
//! Owns the pending image for one visit to the screen and hands it to
//! the item form explicitly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wardrobe_core::intake;
use wardrobe_core::{IntakeError, IntakeSequence, PendingUpload, Screen, WardrobeError};

use crate::components::{ItemForm, ScreenSection, UploadArea};
use crate::context::use_app_context;
use crate::notify;

#[component]
pub fn UploadScreen() -> impl IntoView {
    let ctx = use_app_context();
    let pending = RwSignal::new(None::<PendingUpload>);
    let intake = StoredValue::new(IntakeSequence::new());

    // Entering the screen starts from a clean slate
    Effect::new(move |_| {
        let reset = ctx.upload_reset.get();
        intake.with_value(IntakeSequence::cancel);
        pending.set(None);
        log::debug!("[UPLOAD] Cleared, reset={}", reset);
    });

    let on_file = move |file: web_sys::File| {
        let name = file.name();
        let mime = file.type_();
        let ticket = match intake.with_value(|seq| intake::start(seq, &name, &mime)) {
            Ok(ticket) => ticket,
            Err(err) => {
                log::warn!("[UPLOAD] {}", err);
                notify::alert_error(&WardrobeError::from(err));
                return;
            }
        };

        log::debug!("[UPLOAD] Reading {} ({})", name, mime);
        spawn_local(async move {
            let result = match leptos_filedrop::read_as_data_url(&file).await {
                Ok(data) => PendingUpload::new(name, data),
                Err(reason) => Err(IntakeError::Unreadable { name, reason }),
            };
            match intake.with_value(|seq| seq.settle(ticket, result)) {
                Some(Ok(upload)) => {
                    log::info!("[UPLOAD] Previewing {}", upload.name);
                    pending.set(Some(upload));
                }
                Some(Err(err)) => {
                    log::error!("[UPLOAD] {}", err);
                    notify::alert_error(&WardrobeError::from(err));
                }
                None => {}
            }
        });
    };

    let has_pending = move || pending.with(|p| p.is_some());

    let discard = move |_| {
        intake.with_value(IntakeSequence::cancel);
        pending.set(None);
    };

    view! {
        <ScreenSection screen=Screen::Upload>
            <h2>"Add an Item"</h2>
            <UploadArea on_file=on_file hidden=Signal::derive(has_pending) />
            <div
                id="preview-container"
                class=move || if has_pending() { "preview-container" } else { "preview-container hidden" }
            >
                <img
                    id="preview-image"
                    class="preview-image"
                    alt="Preview"
                    src=move || pending.with(|p| p.as_ref().map(|u| u.data.clone()).unwrap_or_default())
                />
                <p class="preview-name">
                    {move || pending.with(|p| p.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                </p>
                <button type="button" class="btn btn-link" on:click=discard>
                    "Choose another photo"
                </button>
            </div>
            <ItemForm pending=pending />
        </ScreenSection>
    }
}
