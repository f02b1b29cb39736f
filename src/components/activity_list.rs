//! Activity card grid with loading, empty, and error placeholders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `BoardState` from context. Cards are memoized so typing in the
//! signup form does not rebuild the grid.

#[cfg(test)]
#[path = "activity_list_test.rs"]
mod activity_list_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::state::board::{BoardState, LoadStatus};

pub const LOAD_FAILED_MESSAGE: &str = "Unable to load activities. Try again later.";
const LOADING_MESSAGE: &str = "Loading activities...";
const EMPTY_MESSAGE: &str = "No activities available.";

/// Placeholder to show instead of cards, as `(css class, text)`.
pub fn list_placeholder(status: LoadStatus, has_cards: bool) -> Option<(&'static str, &'static str)> {
    match status {
        LoadStatus::Failed => Some(("error", LOAD_FAILED_MESSAGE)),
        _ if has_cards => None,
        LoadStatus::Idle | LoadStatus::Loading => Some(("info", LOADING_MESSAGE)),
        LoadStatus::Loaded => Some(("info", EMPTY_MESSAGE)),
    }
}

#[component]
pub fn ActivityList(on_unregister: Callback<(String, String)>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let status = Memo::new(move |_| board.with(|s| s.status));
    let cards = Memo::new(move |_| board.with(BoardState::cards));

    view! {
        <div id="activities-list">
            {move || {
                let cards = cards.get();
                match list_placeholder(status.get(), !cards.is_empty()) {
                    Some((class, text)) => view! { <p class=class>{text}</p> }.into_any(),
                    None => {
                        cards
                            .into_iter()
                            .map(|card| view! { <ActivityCard card=card on_unregister=on_unregister/> })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
