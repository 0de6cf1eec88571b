//! Option Select Component
//!
//! Reusable `<select>` over a fixed (value, label) option list.

use leptos::prelude::*;

/// Select bound to a string signal
#[component]
pub fn OptionSelect(
    #[prop(into)] id: String,
    options: &'static [(&'static str, &'static str)],
    /// Leading empty option shown when nothing is chosen
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    value: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id=id.clone()
            name=id
            required=required
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="">{text}</option> })}
            {options.iter().map(|(val, label)| {
                let val = *val;
                view! {
                    <option value=val selected=move || value.get() == val>
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
