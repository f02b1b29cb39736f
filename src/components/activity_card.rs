//! Card for a single activity.
//!
//! DESIGN
//! ======
//! Takes a fully derived `ActivityCardView` so the card never reaches back
//! into the catalog; a reload simply rebuilds every card.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::components::participant_list::ParticipantList;
use crate::state::board::ActivityCardView;

/// Human-readable remaining capacity.
pub fn spots_left_label(spots: u32) -> String {
    match spots {
        0 => "Full".to_owned(),
        1 => "1 spot left".to_owned(),
        n => format!("{n} spots left"),
    }
}

pub fn participants_heading(count: usize) -> String {
    format!("Participants ({count})")
}

#[component]
pub fn ActivityCard(card: ActivityCardView, on_unregister: Callback<(String, String)>) -> impl IntoView {
    let heading = participants_heading(card.participant_count());
    let ActivityCardView { key, name, description, schedule, participants, spots_left } = card;

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            {description.map(|text| view! { <p>{text}</p> })}
            {schedule.map(|text| {
                view! {
                    <p>
                        <strong>"Schedule: "</strong>
                        {text}
                    </p>
                }
            })}
            {spots_left.map(|spots| {
                view! {
                    <p class="spots-left">
                        <strong>"Availability: "</strong>
                        {spots_left_label(spots)}
                    </p>
                }
            })}
            <div class="participants-section">
                <h5>{heading}</h5>
                <ParticipantList activity_key=key participants=participants on_unregister=on_unregister/>
            </div>
        </div>
    }
}
