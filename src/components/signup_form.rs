//! Signup form: email input, activity selector, submit button.
//!
//! Inputs are bound to `BoardState` so a successful signup can clear the
//! email field from `ActivityBoard` without touching the DOM.

use leptos::prelude::*;

use crate::components::activity_select::ActivitySelect;
use crate::state::board::BoardState;

/// `on_submit` receives the raw `(activity_key, email)`; validation happens
/// downstream so blank fields still produce a notice.
#[component]
pub fn SignupForm(on_submit: Callback<(String, String)>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = board.with_untracked(|s| (s.selected_key.clone(), s.email.clone()));
        on_submit.run(fields);
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || board.with(|s| s.email.clone())
                    on:input=move |ev| {
                        let email = event_target_value(&ev);
                        board.update(|s| s.email = email);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <ActivitySelect/>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
