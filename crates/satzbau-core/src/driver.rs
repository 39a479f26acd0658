//! Async flows tying [`ExercisePage`] to an [`ExerciseApi`].
//!
//! The page is borrowed only around the synchronous begin/complete steps,
//! never across an `.await`, so UI callbacks can read it while a request is
//! in flight.

use std::cell::RefCell;

use crate::api::ExerciseApi;
use crate::page::{ExercisePage, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response changed the page.
    Applied,
    /// A newer request superseded this one, or the page was retired.
    Stale,
    /// Nothing was sent.
    Skipped,
}

impl Completion {
    fn from_applied(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Stale
        }
    }

    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Fetches a fresh exercise (initial mount).
pub async fn load<A: ExerciseApi>(page: &RefCell<ExercisePage>, api: &A) -> Completion {
    let ticket = page.borrow_mut().begin_load();
    settle_load(page, api, ticket).await
}

/// Clears the verdict and fetches a fresh exercise (retry / try another).
pub async fn reset<A: ExerciseApi>(page: &RefCell<ExercisePage>, api: &A) -> Completion {
    let ticket = page.borrow_mut().reset();
    settle_load(page, api, ticket).await
}

/// Submits `words` for checking. Skipped unless an exercise is displayed.
pub async fn check<A: ExerciseApi>(
    page: &RefCell<ExercisePage>,
    api: &A,
    words: Vec<String>,
) -> Completion {
    let Some(ticket) = page.borrow_mut().begin_check() else {
        return Completion::Skipped;
    };
    settle_check(page, api, ticket, &words).await
}

/// Second half of a load whose ticket the caller already took, so it could
/// render the loading state before spawning.
pub async fn settle_load<A: ExerciseApi>(
    page: &RefCell<ExercisePage>,
    api: &A,
    ticket: Ticket,
) -> Completion {
    let result = api.fetch_sentence().await;
    Completion::from_applied(page.borrow_mut().complete_load(ticket, result))
}

pub async fn settle_check<A: ExerciseApi>(
    page: &RefCell<ExercisePage>,
    api: &A,
    ticket: Ticket,
    words: &[String],
) -> Completion {
    let result = api.check_sentence(words).await;
    Completion::from_applied(page.borrow_mut().complete_check(ticket, result))
}
