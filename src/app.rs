//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::{APP_TITLE, AppConfig, STYLESHEET_HREF};
use crate::pages::board::BoardPage;
use crate::state::board::BoardState;

/// Root application component.
///
/// Provides configuration and the board state signal, then renders the board.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::from_document());
    provide_context(RwSignal::new(BoardState::default()));

    view! {
        <Stylesheet id="activity-board" href=STYLESHEET_HREF/>
        <Title text=APP_TITLE/>
        <BoardPage/>
    }
}
