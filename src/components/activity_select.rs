//! Activity selector for the signup form.

use leptos::prelude::*;

use crate::state::board::BoardState;

/// Placeholder option label; its value is the empty string.
pub const PLACEHOLDER_LABEL: &str = "-- Select an activity --";

/// `<select>` bound to `BoardState::selected_key`, listing activities by name.
#[component]
pub fn ActivitySelect() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let options = Memo::new(move |_| board.with(|s| s.options.clone()));
    let selected = Memo::new(move |_| board.with(|s| s.selected_key.clone()));

    view! {
        <select
            id="activity"
            prop:value=move || selected.get()
            on:change=move |ev| {
                let key = event_target_value(&ev);
                board.update(|s| s.selected_key = key);
            }
        >
            <option value="">{PLACEHOLDER_LABEL}</option>
            {move || {
                let current = selected.get_untracked();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let is_selected = option.key == current;
                        view! {
                            <option value=option.key selected=is_selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
