use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Activity, ActivityCatalog, SignupReceipt};
use crate::state::board::{BoardState, LoadStatus};

// =============================================================
// Test doubles
// =============================================================

#[derive(Clone, Default)]
struct LocalStore(Rc<RefCell<BoardState>>);

impl LocalStore {
    fn snapshot(&self) -> BoardState {
        self.0.borrow().clone()
    }
}

impl BoardStore for LocalStore {
    fn update_state(&self, f: impl FnOnce(&mut BoardState)) {
        f(&mut self.0.borrow_mut());
    }
}

/// In-memory server that enforces the same roster rules as the real API.
#[derive(Clone, Default)]
struct FakeApi {
    catalog: Rc<RefCell<ActivityCatalog>>,
    fetch_calls: Rc<Cell<usize>>,
    signup_calls: Rc<Cell<usize>>,
    unregister_calls: Rc<Cell<usize>>,
    offline: Rc<Cell<bool>>,
    blank_receipt: Rc<Cell<bool>>,
}

impl FakeApi {
    fn with_catalog(catalog: ActivityCatalog) -> Self {
        let api = Self::default();
        *api.catalog.borrow_mut() = catalog;
        api
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.get() {
            return Err(ApiError::Transport("Failed to fetch".to_owned()));
        }
        Ok(())
    }
}

fn not_found(detail: &str) -> ApiError {
    ApiError::Status { status: 404, detail: Some(detail.to_owned()) }
}

impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.check_online()?;
        Ok(self.catalog.borrow().clone())
    }

    async fn signup(&self, activity_key: &str, email: &str) -> Result<SignupReceipt, ApiError> {
        self.signup_calls.set(self.signup_calls.get() + 1);
        self.check_online()?;
        let mut catalog = self.catalog.borrow_mut();
        let activity = catalog.get_mut(activity_key).ok_or_else(|| not_found("Activity not found"))?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(ApiError::Status { status: 400, detail: Some("Already registered".to_owned()) });
        }
        activity.participants.push(email.to_owned());
        if self.blank_receipt.get() {
            return Ok(SignupReceipt { message: Some("  ".to_owned()) });
        }
        Ok(SignupReceipt { message: Some(format!("Signed up {email} for {activity_key}")) })
    }

    async fn unregister(&self, activity_key: &str, email: &str) -> Result<(), ApiError> {
        self.unregister_calls.set(self.unregister_calls.get() + 1);
        self.check_online()?;
        let mut catalog = self.catalog.borrow_mut();
        let activity = catalog.get_mut(activity_key).ok_or_else(|| not_found("Activity not found"))?;
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        if activity.participants.len() == before {
            return Err(not_found("Participant not found"));
        }
        Ok(())
    }
}

fn catalog() -> ActivityCatalog {
    ActivityCatalog::from([
        (
            "Chess Club".to_owned(),
            Activity {
                name: Some("Chess Club".to_owned()),
                max_participants: Some(12),
                participants: vec!["michael@x.com".to_owned(), "daniel@x.com".to_owned()],
                ..Activity::default()
            },
        ),
        (
            "Basketball Team".to_owned(),
            Activity { name: Some("Basketball Team".to_owned()), ..Activity::default() },
        ),
    ])
}

fn board_with(api: &FakeApi) -> (ActivityBoard<FakeApi, LocalStore>, LocalStore) {
    let store = LocalStore::default();
    (ActivityBoard::new(api.clone(), store.clone()), store)
}

fn notice_text(store: &LocalStore) -> Option<String> {
    store.snapshot().notice.current().map(|n| n.text.clone())
}

fn notice_seq(store: &LocalStore) -> u64 {
    store.snapshot().notice.current().unwrap().seq
}

fn participants(state: &BoardState, key: &str) -> Option<Vec<String>> {
    state.catalog.as_ref()?.get(key).map(|a| a.participants.clone())
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn validate_signup_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_signup("Chess Club", "  a@x.com "),
        Ok(SignupRequest { activity_key: "Chess Club".to_owned(), email: "a@x.com".to_owned() })
    );
    assert_eq!(validate_signup("   ", "a@x.com"), Err("Please choose an activity."));
    assert_eq!(validate_signup("", "a@x.com"), Err("Please choose an activity."));
    assert_eq!(validate_signup("Chess Club", "   "), Err("Please enter an email."));
    assert_eq!(validate_signup("", ""), Err("Please choose an activity."));
}

// =============================================================
// load
// =============================================================

#[test]
fn load_populates_cards_and_options() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.load());

    let state = store.snapshot();
    assert_eq!(state.status, LoadStatus::Loaded);
    let keys: Vec<String> = state.cards().into_iter().map(|c| c.key).collect();
    assert_eq!(keys, vec!["Basketball Team", "Chess Club"]);
    assert_eq!(state.options.len(), 2);
    assert_eq!(api.fetch_calls.get(), 1);
}

#[test]
fn load_failure_clears_cards_and_does_not_retry() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.load());

    api.offline.set(true);
    block_on(board.load());

    let state = store.snapshot();
    assert_eq!(state.status, LoadStatus::Failed);
    assert!(state.cards().is_empty());
    assert_eq!(state.options.len(), 2);
    assert_eq!(api.fetch_calls.get(), 2);
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_with_empty_email_makes_no_network_call() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.signup("Chess Club", "   "));

    assert_eq!(api.signup_calls.get(), 0);
    assert_eq!(api.fetch_calls.get(), 0);
    assert_eq!(notice_text(&store).as_deref(), Some("Please enter an email."));
}

#[test]
fn signup_without_activity_makes_no_network_call() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.signup("", "a@x.com"));

    assert_eq!(api.signup_calls.get(), 0);
    assert_eq!(notice_text(&store).as_deref(), Some("Please choose an activity."));
}

#[test]
fn successful_signup_reloads_once_and_clears_email() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    store.update_state(|s| s.email = "emma@x.com".to_owned());

    block_on(board.signup("Basketball Team", "emma@x.com"));

    let state = store.snapshot();
    assert_eq!(api.signup_calls.get(), 1);
    assert_eq!(api.fetch_calls.get(), 1);
    assert!(state.email.is_empty());
    assert_eq!(participants(&state, "Basketball Team"), Some(vec!["emma@x.com".to_owned()]));
    let notice = state.notice.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Signed up emma@x.com for Basketball Team");
}

#[test]
fn signup_sends_trimmed_email() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.signup("Basketball Team", "  emma@x.com  "));

    assert_eq!(participants(&store.snapshot(), "Basketball Team"), Some(vec!["emma@x.com".to_owned()]));
}

#[test]
fn signup_sends_activity_key_unaltered() {
    let mut padded = catalog();
    padded.insert(" Drama ".to_owned(), Activity::default());
    let api = FakeApi::with_catalog(padded);
    let (board, store) = board_with(&api);
    block_on(board.signup(" Drama ", "emma@x.com"));

    assert_eq!(participants(&store.snapshot(), " Drama "), Some(vec!["emma@x.com".to_owned()]));
    assert_eq!(notice_text(&store).as_deref(), Some("Signed up emma@x.com for  Drama "));
}

#[test]
fn signup_with_blank_server_message_uses_default_notice() {
    let api = FakeApi::with_catalog(catalog());
    api.blank_receipt.set(true);
    let (board, store) = board_with(&api);
    block_on(board.signup("Basketball Team", "emma@x.com"));

    assert_eq!(notice_text(&store).as_deref(), Some("Signed up successfully!"));
}

#[test]
fn failed_signup_shows_server_detail_and_keeps_email() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    store.update_state(|s| s.email = "michael@x.com".to_owned());

    block_on(board.signup("Chess Club", "michael@x.com"));

    let state = store.snapshot();
    assert_eq!(api.fetch_calls.get(), 0);
    assert_eq!(state.email, "michael@x.com");
    let notice = state.notice.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("Already registered"));
}

#[test]
fn signup_transport_failure_uses_generic_notice() {
    let api = FakeApi::with_catalog(catalog());
    api.offline.set(true);
    let (board, store) = board_with(&api);
    block_on(board.signup("Chess Club", "new@x.com"));

    assert_eq!(notice_text(&store).as_deref(), Some("Signup failed"));
    assert_eq!(api.fetch_calls.get(), 0);
}

// =============================================================
// unregister
// =============================================================

#[test]
fn unregister_removes_participant_from_next_render() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.load());

    block_on(board.unregister("Chess Club", "michael@x.com"));

    let state = store.snapshot();
    assert_eq!(api.fetch_calls.get(), 2);
    let chess = state.cards().into_iter().find(|c| c.key == "Chess Club").unwrap();
    let emails: Vec<String> = chess.participants.into_iter().map(|p| p.email).collect();
    assert_eq!(emails, vec!["daniel@x.com"]);
    assert_eq!(chess.spots_left, Some(11));
    assert_eq!(
        state.notice.current().map(|n| n.text.as_str()),
        Some("Unregistered michael@x.com from Chess Club")
    );
}

#[test]
fn failed_unregister_shows_detail_without_reload() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);
    block_on(board.unregister("Chess Club", "nobody@x.com"));

    assert_eq!(api.unregister_calls.get(), 1);
    assert_eq!(api.fetch_calls.get(), 0);
    let state = store.snapshot();
    let notice = state.notice.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Participant not found");
}

#[test]
fn unregister_transport_failure_uses_generic_notice() {
    let api = FakeApi::with_catalog(catalog());
    api.offline.set(true);
    let (board, store) = board_with(&api);
    block_on(board.unregister("Chess Club", "michael@x.com"));

    assert_eq!(notice_text(&store).as_deref(), Some("Unregister failed"));
}

// =============================================================
// notices
// =============================================================

#[test]
fn later_notice_replaces_earlier_and_survives_its_dismissal() {
    let api = FakeApi::with_catalog(catalog());
    let (board, store) = board_with(&api);

    block_on(board.signup("", "a@x.com"));
    let first = notice_seq(&store);
    block_on(board.signup("Chess Club", ""));

    board.dismiss_notice(first);
    assert_eq!(notice_text(&store).as_deref(), Some("Please enter an email."));

    let second = notice_seq(&store);
    board.dismiss_notice(second);
    assert!(notice_text(&store).is_none());
}
