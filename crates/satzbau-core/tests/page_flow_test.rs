use std::cell::RefCell;
use std::time::Duration;

use satzbau_core::driver::{self, Completion};
use satzbau_core::page::{
    CHECK_FAILED_MESSAGE, INCORRECT_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_MESSAGE,
    NEXT_EXERCISE_LABEL, RESET_LABEL, RETRY_LABEL,
};
use satzbau_core::{
    ApiConfig, DragEnd, ExercisePage, HttpExerciseApi, PageView, SentenceArranger,
    SentenceExercise, TokenId, Verdict,
};

mod common;

use common::{answer_key, spawn_backend, unavailable, words, BackendMode, ScriptedApi, KAFKA};

fn test_exercise() -> SentenceExercise {
    SentenceExercise::new(
        "This is a test sentence.",
        words(&["This", "is", "a", "test", "sentence."]),
    )
}

fn content_words(view: &PageView) -> Vec<String> {
    match view {
        PageView::Content { words, .. } => words.clone(),
        other => panic!("expected content, got {other:?}"),
    }
}

async fn loaded_page(api: &ScriptedApi) -> RefCell<ExercisePage> {
    let page = RefCell::new(ExercisePage::new());
    api.respond_sentence(Ok(test_exercise()));
    assert_eq!(driver::load(&page, api).await, Completion::Applied);
    page
}

#[tokio::test]
async fn test_mount_shows_only_loading_until_settled() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();
    let gate = api.gate_sentence();

    let observe = async {
        tokio::task::yield_now().await;
        let seen = page.borrow().view();
        let _ = gate.send(Ok(test_exercise()));
        seen
    };
    let (completion, seen) = tokio::join!(driver::load(&page, &api), observe);

    assert_eq!(
        seen,
        PageView::Loading {
            message: LOADING_MESSAGE
        }
    );
    assert_eq!(completion, Completion::Applied);
    assert!(matches!(page.borrow().view(), PageView::Content { .. }));
}

#[tokio::test]
async fn test_load_shows_sentence_and_seeds_arranger() {
    let api = ScriptedApi::new();
    let page = loaded_page(&api).await;

    let view = page.borrow().view();
    match &view {
        PageView::Content {
            sentence, verdict, ..
        } => {
            assert_eq!(sentence, "This is a test sentence.");
            assert!(verdict.is_none());
        }
        other => panic!("expected content, got {other:?}"),
    }

    let arranger = SentenceArranger::new(&content_words(&view));
    let texts: Vec<&str> = arranger.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["This", "is", "a", "test", "sentence."]);
}

#[tokio::test]
async fn test_incorrect_check_keeps_tokens() {
    let api = ScriptedApi::new();
    let page = loaded_page(&api).await;
    let mut arranger = SentenceArranger::new(&content_words(&page.borrow().view()));

    arranger.drag_end(DragEnd {
        active: TokenId(0),
        over: Some(TokenId(1)),
    });
    arranger.drag_end(DragEnd {
        active: TokenId(4),
        over: Some(TokenId(3)),
    });
    let submitted = arranger.submit();
    assert_eq!(submitted, words(&["is", "This", "a", "sentence.", "test"]));

    api.respond_check(Ok(false));
    assert_eq!(
        driver::check(&page, &api, submitted.clone()).await,
        Completion::Applied
    );

    assert_eq!(api.submitted(), vec![submitted.clone()]);
    match page.borrow().view() {
        PageView::Content {
            words: shown,
            verdict,
            ..
        } => {
            let panel = verdict.expect("verdict panel");
            assert!(!panel.correct);
            assert_eq!(panel.message, INCORRECT_MESSAGE);
            assert_eq!(panel.action_label, RESET_LABEL);
            assert_eq!(shown.len(), 5);
        }
        other => panic!("expected content, got {other:?}"),
    }
    assert_eq!(arranger.submit(), submitted);
}

#[tokio::test]
async fn test_correct_check_offers_another_exercise() {
    let api = ScriptedApi::new();
    let page = loaded_page(&api).await;

    api.respond_check(Ok(true));
    driver::check(&page, &api, test_exercise().words).await;

    assert_eq!(page.borrow().verdict(), Verdict::Correct);
    match page.borrow().view() {
        PageView::Content { verdict, .. } => {
            let panel = verdict.expect("verdict panel");
            assert!(panel.correct);
            assert_eq!(panel.action_label, NEXT_EXERCISE_LABEL);
        }
        other => panic!("expected content, got {other:?}"),
    };
}

#[tokio::test]
async fn test_load_failure_shows_retry() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();
    api.respond_sentence(Err(unavailable()));

    driver::load(&page, &api).await;

    assert_eq!(
        page.borrow().view(),
        PageView::Failed {
            message: LOAD_FAILED_MESSAGE,
            retry_label: RETRY_LABEL,
        }
    );
}

#[tokio::test]
async fn test_retry_after_failure_and_reset_after_verdict() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();
    api.respond_sentence(Err(unavailable()));
    driver::load(&page, &api).await;

    api.respond_sentence(Ok(test_exercise()));
    assert_eq!(driver::reset(&page, &api).await, Completion::Applied);
    assert!(matches!(page.borrow().view(), PageView::Content { .. }));

    api.respond_check(Ok(false));
    driver::check(&page, &api, test_exercise().words).await;
    assert_eq!(page.borrow().verdict(), Verdict::Incorrect);

    let gate = api.gate_sentence();
    let observe = async {
        tokio::task::yield_now().await;
        let loading = page.borrow().is_loading();
        let _ = gate.send(Ok(test_exercise()));
        loading
    };
    let (_, was_loading) = tokio::join!(driver::reset(&page, &api), observe);

    assert!(was_loading);
    assert_eq!(page.borrow().verdict(), Verdict::Unknown);
    match page.borrow().view() {
        PageView::Content {
            verdict,
            generation,
            ..
        } => {
            assert!(verdict.is_none());
            assert_eq!(generation, 2);
        }
        other => panic!("expected content, got {other:?}"),
    };
}

#[tokio::test]
async fn test_check_failure_keeps_content() {
    let api = ScriptedApi::new();
    let page = loaded_page(&api).await;

    api.respond_check(Err(unavailable()));
    driver::check(&page, &api, test_exercise().words).await;

    match page.borrow().view() {
        PageView::Content {
            sentence, notice, ..
        } => {
            assert_eq!(sentence, "This is a test sentence.");
            assert_eq!(notice, Some(CHECK_FAILED_MESSAGE));
        }
        other => panic!("expected content, got {other:?}"),
    };
}

#[tokio::test]
async fn test_stale_load_never_overwrites_newer() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();
    let older_gate = api.gate_sentence();
    let newer_gate = api.gate_sentence();
    let newer = SentenceExercise::new("Neu ist besser.", words(&["besser", "Neu", "ist"]));

    let release = async {
        tokio::task::yield_now().await;
        let _ = newer_gate.send(Ok(newer.clone()));
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        let _ = older_gate.send(Ok(test_exercise()));
    };
    let (older, latest, _) = tokio::join!(
        driver::load(&page, &api),
        driver::reset(&page, &api),
        release
    );

    assert_eq!(older, Completion::Stale);
    assert_eq!(latest, Completion::Applied);
    assert_eq!(page.borrow().exercise(), Some(&newer));
}

#[tokio::test]
async fn test_stale_check_after_reset_is_dropped() {
    let api = ScriptedApi::new();
    let page = loaded_page(&api).await;
    let check_gate = api.gate_check();
    let load_gate = api.gate_sentence();

    let release = async {
        tokio::task::yield_now().await;
        let _ = load_gate.send(Err(unavailable()));
        tokio::task::yield_now().await;
        let _ = check_gate.send(Ok(true));
    };
    let (checked, reloaded, _) = tokio::join!(
        driver::check(&page, &api, test_exercise().words),
        driver::reset(&page, &api),
        release
    );

    assert_eq!(checked, Completion::Stale);
    assert_eq!(reloaded, Completion::Applied);
    assert_eq!(page.borrow().verdict(), Verdict::Unknown);
    assert!(matches!(page.borrow().view(), PageView::Failed { .. }));
}

#[tokio::test]
async fn test_retired_page_ignores_late_response() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();
    let gate = api.gate_sentence();

    let unmount = async {
        tokio::task::yield_now().await;
        page.borrow_mut().retire();
        let _ = gate.send(Ok(test_exercise()));
    };
    let (completion, _) = tokio::join!(driver::load(&page, &api), unmount);

    assert_eq!(completion, Completion::Stale);
    assert!(page.borrow().is_loading());
}

#[tokio::test]
async fn test_check_is_skipped_while_loading() {
    let page = RefCell::new(ExercisePage::new());
    let api = ScriptedApi::new();

    assert_eq!(
        driver::check(&page, &api, words(&["a"])).await,
        Completion::Skipped
    );
    assert!(api.submitted().is_empty());
}

#[tokio::test]
async fn test_full_round_trip_against_http_backend() {
    let base_url = spawn_backend(BackendMode::Healthy).await;
    let api = HttpExerciseApi::new(
        ApiConfig::with_base_url(&base_url).with_timeout(Duration::from_secs(5)),
    );
    let page = RefCell::new(ExercisePage::new());

    assert!(driver::load(&page, &api).await.is_applied());
    let view = page.borrow().view();
    match &view {
        PageView::Content { sentence, .. } => assert_eq!(sentence, KAFKA),
        other => panic!("expected content, got {other:?}"),
    }

    let mut arranger = SentenceArranger::new(&content_words(&view));
    driver::check(&page, &api, arranger.submit()).await;
    assert_eq!(page.borrow().verdict(), Verdict::Incorrect);

    // Backend delivers the words reversed; rebuild reading order one drop at a time.
    let key = answer_key();
    for (target, word) in key.iter().enumerate() {
        let tokens = arranger.tokens();
        let active = tokens
            .iter()
            .skip(target)
            .find(|token| &token.text == word)
            .map(|token| token.id)
            .expect("word present");
        let over = tokens[target].id;
        arranger.drag_end(DragEnd {
            active,
            over: Some(over),
        });
    }
    assert_eq!(arranger.submit(), key);

    driver::check(&page, &api, arranger.submit()).await;
    assert_eq!(page.borrow().verdict(), Verdict::Correct);
}
