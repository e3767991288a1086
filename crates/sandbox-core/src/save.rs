//! Profile Save Driver
//!
//! Runs a save through its simulated latency. The store is only touched
//! synchronously at the start and at the end, never across the wait.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::profile::{ProfileError, ProfileStore};

/// Simulated latency of a profile save
pub const SAVE_LATENCY: Duration = Duration::from_millis(1000);

/// Somewhere a `ProfileStore` lives: a `RefCell` natively, a reactive store in the UI.
pub trait ProfileCell {
    /// Run `f` against the store. `None` if the store is gone.
    fn update_profile<R>(&self, f: impl FnOnce(&mut ProfileStore) -> R) -> Option<R>;
}

impl ProfileCell for RefCell<ProfileStore> {
    fn update_profile<R>(&self, f: impl FnOnce(&mut ProfileStore) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// How a call to [`save`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The captured draft is now the committed record
    Committed,
    /// Another save was still pending; this request did nothing
    AlreadyPending,
    /// The profile was not being edited
    NotEditing,
    /// The store went away before the save could start or finish
    Detached,
}

/// Save the current draft: start, wait `latency` using `wait`, then commit.
///
/// `wait` is the platform timer, e.g. `tokio::time::sleep` or
/// `gloo_timers::future::sleep`.
pub async fn save<C, W, F>(cell: &C, latency: Duration, wait: W) -> SaveOutcome
where
    C: ProfileCell,
    W: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let ticket = match cell.update_profile(ProfileStore::start_save) {
        None => return SaveOutcome::Detached,
        Some(Err(ProfileError::SaveInProgress)) => {
            tracing::debug!("[save] ignored, save already pending");
            return SaveOutcome::AlreadyPending;
        }
        Some(Err(_)) => return SaveOutcome::NotEditing,
        Some(Ok(ticket)) => ticket,
    };

    wait(latency).await;

    match cell.update_profile(|store| store.finish_save(ticket)) {
        Some(true) => SaveOutcome::Committed,
        Some(false) => SaveOutcome::NotEditing,
        None => SaveOutcome::Detached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EditState, ProfileField};
    use tokio::time::{sleep, Instant};

    fn editing_cell() -> RefCell<ProfileStore> {
        let mut store = ProfileStore::default();
        store.begin_edit();
        RefCell::new(store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_commits_after_latency() {
        let cell = editing_cell();
        cell.borrow_mut().update_field(ProfileField::Name, "Jane").unwrap();

        let started = Instant::now();
        let outcome = save(&cell, SAVE_LATENCY, sleep).await;

        assert_eq!(outcome, SaveOutcome::Committed);
        assert!(started.elapsed() >= SAVE_LATENCY);
        let store = cell.borrow();
        assert_eq!(store.state(), EditState::Viewing);
        assert_eq!(store.committed().name, "Jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_committed_before_latency() {
        let cell = editing_cell();
        cell.borrow_mut().update_field(ProfileField::Name, "Jane").unwrap();

        let (outcome, mid_save) = tokio::join!(save(&cell, SAVE_LATENCY, sleep), async {
            sleep(SAVE_LATENCY / 2).await;
            let store = cell.borrow();
            (store.state(), store.committed().name.clone())
        });

        assert_eq!(mid_save, (EditState::Saving, "John Doe".to_string()));
        assert_eq!(outcome, SaveOutcome::Committed);
        assert_eq!(cell.borrow().committed().name, "Jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_save_is_ignored() {
        let cell = editing_cell();
        cell.borrow_mut().update_field(ProfileField::Bio, "first draft").unwrap();

        let (first, second) = tokio::join!(save(&cell, SAVE_LATENCY, sleep), async {
            sleep(Duration::from_millis(10)).await;
            save(&cell, SAVE_LATENCY, sleep).await
        });

        assert_eq!(first, SaveOutcome::Committed);
        assert_eq!(second, SaveOutcome::AlreadyPending);
        assert_eq!(cell.borrow().committed().bio, "first draft");
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_when_viewing() {
        let cell = RefCell::new(ProfileStore::default());
        let outcome = save(&cell, SAVE_LATENCY, sleep).await;
        assert_eq!(outcome, SaveOutcome::NotEditing);
        assert_eq!(*cell.borrow(), ProfileStore::default());
    }

    struct Gone;

    impl ProfileCell for Gone {
        fn update_profile<R>(&self, _f: impl FnOnce(&mut ProfileStore) -> R) -> Option<R> {
            None
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_on_detached_store() {
        assert_eq!(save(&Gone, SAVE_LATENCY, sleep).await, SaveOutcome::Detached);
    }
}
