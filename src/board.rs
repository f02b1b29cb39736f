//! Activity board orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ActivityBoard` sits between the page and the REST API. It owns no data of
//! its own: the snapshot lives in a `BoardStore` (a signal in the browser) so
//! every write re-renders the views that read it.
//!
//! ERROR HANDLING
//! ==============
//! Transport, HTTP and validation failures all end the operation and surface
//! as a notice. A failed mutation never reloads; a successful one always does.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::api::ActivityApi;
use crate::state::board::BoardStore;
use crate::state::notice::NoticeKind;

const SIGNUP_SUCCEEDED: &str = "Signed up successfully!";
const SIGNUP_FAILED: &str = "Signup failed";
const UNREGISTER_FAILED: &str = "Unregister failed";
const CHOOSE_ACTIVITY: &str = "Please choose an activity.";
const ENTER_EMAIL: &str = "Please enter an email.";

/// A signup that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity_key: String,
    pub email: String,
}

/// Check signup inputs before any network call. The activity is checked
/// first and must not be blank; it is passed through as given since it comes
/// from the selector. The email is trimmed and must be non-empty.
///
/// # Errors
///
/// Returns the validation message to show when a field is blank.
pub fn validate_signup(activity_key: &str, email: &str) -> Result<SignupRequest, &'static str> {
    if activity_key.trim().is_empty() {
        return Err(CHOOSE_ACTIVITY);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(ENTER_EMAIL);
    }
    Ok(SignupRequest { activity_key: activity_key.to_owned(), email: email.to_owned() })
}

pub fn unregistered_message(activity_key: &str, email: &str) -> String {
    format!("Unregistered {email} from {activity_key}")
}

/// View-model for the activity board.
///
/// Cloning is cheap in the browser (a `String` base URL and a `Copy` signal),
/// so event handlers each take their own copy into `spawn_local`.
#[derive(Clone, Debug)]
pub struct ActivityBoard<A, S> {
    api: A,
    store: S,
}

impl<A, S> ActivityBoard<A, S>
where
    A: ActivityApi,
    S: BoardStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Fetch the catalog and replace the snapshot with it.
    pub async fn load(&self) {
        self.store.update_state(|s| s.begin_load());
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                log::debug!("loaded {} activities", catalog.len());
                self.store.update_state(|s| s.apply_catalog(catalog));
            }
            Err(e) => {
                log::warn!("activity load failed: {e}");
                self.store.update_state(|s| s.fail_load());
            }
        }
    }

    /// Sign `email` up for `activity_key`, then reload on success.
    pub async fn signup(&self, activity_key: &str, email: &str) {
        let request = match validate_signup(activity_key, email) {
            Ok(request) => request,
            Err(message) => {
                self.notify(message, NoticeKind::Error);
                return;
            }
        };

        match self.api.signup(&request.activity_key, &request.email).await {
            Ok(receipt) => {
                let message = receipt
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SIGNUP_SUCCEEDED.to_owned());
                self.store.update_state(|s| {
                    s.email.clear();
                    s.notice.show(message, NoticeKind::Success);
                });
                self.load().await;
            }
            Err(e) => {
                log::warn!("signup failed for {}: {e}", request.activity_key);
                self.notify(&e.notice_text(SIGNUP_FAILED), NoticeKind::Error);
            }
        }
    }

    /// Remove `email` from `activity_key`, then reload on success.
    pub async fn unregister(&self, activity_key: &str, email: &str) {
        match self.api.unregister(activity_key, email).await {
            Ok(()) => {
                self.notify(&unregistered_message(activity_key, email), NoticeKind::Success);
                self.load().await;
            }
            Err(e) => {
                log::warn!("unregister failed for {activity_key}: {e}");
                self.notify(&e.notice_text(UNREGISTER_FAILED), NoticeKind::Error);
            }
        }
    }

    /// Hide the notice with sequence `seq` if it is still showing.
    pub fn dismiss_notice(&self, seq: u64) {
        self.store.update_state(|s| {
            s.notice.dismiss(seq);
        });
    }

    fn notify(&self, text: &str, kind: NoticeKind) {
        self.store.update_state(|s| {
            s.notice.show(text, kind);
        });
    }
}
