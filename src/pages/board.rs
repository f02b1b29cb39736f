//! Activity board page: card grid, signup form, status banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `ActivityBoard` for its lifetime. Components report
//! user intent through callbacks; the page turns each into one async board
//! operation on the UI event loop and kicks off the initial load on mount.

use leptos::prelude::*;

use crate::board::ActivityBoard;
use crate::components::activity_list::ActivityList;
use crate::components::notice_banner::NoticeBanner;
use crate::components::signup_form::SignupForm;
use crate::config::{APP_TITLE, AppConfig};
use crate::net::api::HttpActivityApi;
use crate::state::board::BoardState;

/// The board as wired in the browser: HTTP API, signal-backed state.
pub type BrowserBoard = ActivityBoard<HttpActivityApi, RwSignal<BoardState>>;

#[component]
pub fn BoardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<AppConfig>();
    let board: BrowserBoard = ActivityBoard::new(HttpActivityApi::new(config.api_base), state);

    #[cfg(feature = "csr")]
    {
        let board = board.clone();
        leptos::task::spawn_local(async move { board.load().await });
    }

    let on_signup = Callback::new({
        let board = board.clone();
        move |(activity_key, email): (String, String)| {
            #[cfg(feature = "csr")]
            {
                let board = board.clone();
                leptos::task::spawn_local(async move { board.signup(&activity_key, &email).await });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&board, activity_key, email);
            }
        }
    });

    let on_unregister = Callback::new({
        let board = board.clone();
        move |(activity_key, email): (String, String)| {
            #[cfg(feature = "csr")]
            {
                let board = board.clone();
                leptos::task::spawn_local(async move { board.unregister(&activity_key, &email).await });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&board, activity_key, email);
            }
        }
    });

    let on_notice_expire = Callback::new(move |seq: u64| board.dismiss_notice(seq));

    view! {
        <main class="activity-board">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>{APP_TITLE}</h2>
            </header>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_unregister=on_unregister/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm on_submit=on_signup/>
                <NoticeBanner on_expire=on_notice_expire/>
            </section>
        </main>
    }
}
