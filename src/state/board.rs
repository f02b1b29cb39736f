//! Activity-board snapshot state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the last catalog fetched from the server plus the form inputs and
//! notice shown next to it. Each successful load replaces the catalog
//! wholesale; nothing is merged or cached between loads.
//!
//! DESIGN
//! ======
//! Card and selector rows are derived from the catalog on read, so display
//! order (by name) never depends on server key order.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::{RwSignal, Update};

use super::notice::NoticeState;
use crate::net::types::{Activity, ActivityCatalog};
use crate::util::initials::participant_initials;

/// Catalog fetch lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight. Any previous catalog stays visible.
    Loading,
    /// The catalog reflects the most recent fetch.
    Loaded,
    /// The most recent fetch failed; the catalog was cleared.
    Failed,
}

/// One entry in the activity selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityOption {
    pub key: String,
    pub label: String,
}

/// A participant row with its avatar label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantView {
    pub email: String,
    pub initials: String,
}

/// Everything an activity card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub participants: Vec<ParticipantView>,
    pub spots_left: Option<u32>,
}

impl ActivityCardView {
    fn from_activity(key: &str, activity: &Activity) -> Self {
        Self {
            key: key.to_owned(),
            name: activity.display_name(key).to_owned(),
            description: activity.description().map(str::to_owned),
            schedule: activity.schedule().map(str::to_owned),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantView { email: email.clone(), initials: participant_initials(email) })
                .collect(),
            spots_left: activity.spots_left(),
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// State behind the activity board page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub status: LoadStatus,
    /// Last successfully fetched catalog. `None` before the first load and
    /// after a failed one.
    pub catalog: Option<ActivityCatalog>,
    /// Selector entries from the last successful load.
    pub options: Vec<ActivityOption>,
    /// Selected activity key; empty means the placeholder.
    pub selected_key: String,
    /// Email input contents.
    pub email: String,
    pub notice: NoticeState,
}

impl BoardState {
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace the snapshot with a freshly fetched catalog.
    pub fn apply_catalog(&mut self, catalog: ActivityCatalog) {
        self.options = activity_options(&catalog);
        if !catalog.contains_key(&self.selected_key) {
            self.selected_key.clear();
        }
        self.catalog = Some(catalog);
        self.status = LoadStatus::Loaded;
    }

    /// Drop the snapshot after a failed fetch. Selector entries are kept.
    pub fn fail_load(&mut self) {
        self.catalog = None;
        self.status = LoadStatus::Failed;
    }

    /// Cards for the current snapshot, in display order.
    pub fn cards(&self) -> Vec<ActivityCardView> {
        self.catalog.as_ref().map(activity_cards).unwrap_or_default()
    }
}

/// Catalog entries sorted by display name, ties broken by key.
pub fn ordered_entries(catalog: &ActivityCatalog) -> Vec<(&str, &Activity)> {
    let mut entries: Vec<(&str, &Activity)> = catalog.iter().map(|(k, a)| (k.as_str(), a)).collect();
    entries.sort_by(|(ka, a), (kb, b)| a.display_name(ka).cmp(b.display_name(kb)).then_with(|| ka.cmp(kb)));
    entries
}

pub fn activity_cards(catalog: &ActivityCatalog) -> Vec<ActivityCardView> {
    ordered_entries(catalog)
        .into_iter()
        .map(|(key, activity)| ActivityCardView::from_activity(key, activity))
        .collect()
}

pub fn activity_options(catalog: &ActivityCatalog) -> Vec<ActivityOption> {
    ordered_entries(catalog)
        .into_iter()
        .map(|(key, activity)| ActivityOption { key: key.to_owned(), label: activity.display_name(key).to_owned() })
        .collect()
}

/// Where `ActivityBoard` keeps its `BoardState`.
///
/// Implementations must not hold a borrow across calls; the board writes
/// between network awaits.
pub trait BoardStore: Clone {
    fn update_state(&self, f: impl FnOnce(&mut BoardState));
}

impl BoardStore for RwSignal<BoardState> {
    fn update_state(&self, f: impl FnOnce(&mut BoardState)) {
        self.update(f);
    }
}
