//! Log Panel Component
//!
//! Collapsible view of the logger's recent lines, snapshotted when opened.

use leptos::prelude::*;

use crate::context::use_log_history;

#[component]
pub fn LogPanel() -> impl IntoView {
    let history = use_log_history();
    let (open, set_open) = signal(false);
    let lines = RwSignal::new(Vec::<String>::new());

    let refresh = move || lines.set(history.recent());

    let toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|v| *v = !*v);
    };

    view! {
        <section class="log-panel">
            <button type="button" class="btn btn-link" on:click=toggle>
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-panel-body">
                    <button type="button" class="btn btn-link" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
                    <Show
                        when=move || lines.with(|l| !l.is_empty())
                        fallback=|| view! { <p class="log-empty">"Nothing logged yet"</p> }
                    >
                        <pre class="log-lines">
                            {move || lines.with(|l| l.join("\n"))}
                        </pre>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
