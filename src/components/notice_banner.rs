//! Transient status banner under the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows `BoardState::notice` and arms one hide timer per notice. The timer
//! reports the notice's sequence back through `on_expire`, which only hides
//! it if nothing newer has replaced it.

use leptos::prelude::*;

use crate::state::board::BoardState;
#[cfg(feature = "csr")]
use crate::state::notice::NOTICE_VISIBLE_MS;

/// Banner for the current notice; hidden when there is none.
#[component]
pub fn NoticeBanner(on_expire: Callback<u64>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let notice = Memo::new(move |_| board.with(|s| s.notice.current().cloned()));

    #[cfg(feature = "csr")]
    {
        let notice_seq = Memo::new(move |_| notice.get().map(|n| n.seq));
        Effect::new(move || {
            let Some(seq) = notice_seq.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_VISIBLE_MS))).await;
                on_expire.run(seq);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_expire;
    }

    view! {
        <div
            id="message"
            class=move || notice.get().map_or("message hidden", |n| n.kind.css_class())
            role="status"
        >
            {move || notice.get().map(|n| n.text).unwrap_or_default()}
        </div>
    }
}
