//! Participant roster inside an activity card.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::board::ParticipantView;

/// Roster rows with avatar initials and an unregister button per email.
///
/// `on_unregister` receives `(activity_key, email)`.
#[component]
pub fn ParticipantList(
    activity_key: String,
    participants: Vec<ParticipantView>,
    on_unregister: Callback<(String, String)>,
) -> impl IntoView {
    if participants.is_empty() {
        return view! { <p class="info participants-empty">"No participants yet"</p> }.into_any();
    }

    let rows = participants
        .into_iter()
        .map(|participant| {
            let ParticipantView { email, initials } = participant;
            let label = format!("Unregister {email}");
            let target = (activity_key.clone(), email.clone());
            view! {
                <li class="participant-item">
                    <span class="participant-avatar" title=email.clone()>{initials}</span>
                    <span class="participant-email">{email}</span>
                    <button
                        class="unregister-btn"
                        type="button"
                        title="Unregister"
                        aria-label=label
                        on:click=move |_| on_unregister.run(target.clone())
                    >
                        "🗑️"
                    </button>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="participants-list">{rows}</ul> }.into_any()
}
