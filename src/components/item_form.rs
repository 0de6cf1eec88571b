//! Item Form Component
//!
//! Metadata form for the pending image. Saving appends to the stored
//! wardrobe and lands on the wardrobe screen.

use leptos::prelude::*;
use wardrobe_core::config::ALERT_ITEM_ADDED;
use wardrobe_core::domain::{CATEGORIES, COLOR_SUGGESTIONS, SEASONS};
use wardrobe_core::{ItemDraft, PendingUpload, Screen};

use crate::components::OptionSelect;
use crate::context::{use_app_context, use_config};
use crate::{notify, storage};

#[component]
pub fn ItemForm(pending: RwSignal<Option<PendingUpload>>) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();

    let (category, set_category) = signal(String::new());
    let (color, set_color) = signal(String::new());
    let (season, set_season) = signal(String::new());
    let (style_tags, set_style_tags) = signal(String::new());

    // Reset fields whenever the upload screen is entered
    Effect::new(move |_| {
        let _ = ctx.upload_reset.get();
        let ItemDraft { category, color, season, style_tags } = ItemDraft::default();
        set_category.set(category);
        set_color.set(color);
        set_season.set(season);
        set_style_tags.set(style_tags);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            category: category.get_untracked(),
            color: color.get_untracked(),
            season: season.get_untracked(),
            style_tags: style_tags.get_untracked(),
        };

        match storage::add_item(&config, draft, pending.get_untracked()) {
            Ok(item) => {
                log::info!("[FORM] Saved item {}", item.id);
                pending.set(None);
                notify::alert(ALERT_ITEM_ADDED);
                ctx.go_to(Screen::Wardrobe);
            }
            Err(err) => {
                log::warn!("[FORM] Not saved: {}", err);
                notify::alert_error(&err);
            }
        }
    };

    let has_pending = move || pending.with(|p| p.is_some());

    view! {
        <form
            id="metadata-form"
            class=move || if has_pending() { "metadata-form" } else { "metadata-form hidden" }
            on:submit=on_submit
        >
            <div class="form-group">
                <label for="category">"Category"</label>
                <OptionSelect
                    id="category"
                    options=CATEGORIES
                    placeholder="Select a category"
                    required=true
                    value=category
                    on_change=move |v: String| set_category.set(v)
                />
            </div>

            <div class="form-group">
                <label for="color">"Color"</label>
                <input
                    type="text"
                    id="color"
                    name="color"
                    list="color-suggestions"
                    placeholder="e.g. navy"
                    required=true
                    prop:value=move || color.get()
                    on:input=move |ev| set_color.set(event_target_value(&ev))
                />
                <datalist id="color-suggestions">
                    {COLOR_SUGGESTIONS.iter().map(|c| view! { <option value=*c /> }).collect_view()}
                </datalist>
            </div>

            <div class="form-group">
                <label for="season">"Season"</label>
                <OptionSelect
                    id="season"
                    options=SEASONS
                    value=season
                    on_change=move |v: String| set_season.set(v)
                />
            </div>

            <div class="form-group">
                <label for="style-tags">"Style tags"</label>
                <input
                    type="text"
                    id="style-tags"
                    name="style-tags"
                    placeholder="casual, summer, work"
                    prop:value=move || style_tags.get()
                    on:input=move |ev| set_style_tags.set(event_target_value(&ev))
                />
                <p class="form-hint">"Separate tags with commas"</p>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || !has_pending()>
                "Save to Wardrobe"
            </button>
        </form>
    }
}
