use std::cell::RefCell;
use std::rc::Rc;

use satzbau_core::driver;
use satzbau_core::page::ExercisePage as PageState;
use satzbau_core::{HttpExerciseApi, PageView, VerdictPanel};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::sentence_arranger::SentenceArranger;

pub const TITLE: &str = "German Sentence Builder";
pub const SENTENCE_HEADING: &str = "Original Sentence:";
pub const ARRANGE_HEADING: &str = "Arrange the words to form the correct sentence:";
pub const FOOTER: &str = "German Learning App - Built with Rust and Yew";

const CORRECT_STYLE: &str = "background-color: #dcfce7; color: #15803d;";
const INCORRECT_STYLE: &str = "background-color: #fee2e2; color: #b91c1c;";

#[derive(Properties, PartialEq)]
pub struct ExerciseViewProps {
    pub view: PageView,
    pub on_check: Callback<Vec<String>>,
    pub on_reset: Callback<()>,
}

fn verdict_panel(panel: &VerdictPanel, on_reset: &Callback<()>) -> Html {
    let (class, style) = if panel.correct {
        ("verdict-correct", CORRECT_STYLE)
    } else {
        ("verdict-incorrect", INCORRECT_STYLE)
    };
    html! {
        <div class={classes!("verdict", class)} {style} role="status">
            <p class="verdict-message">{ panel.message }</p>
            <button type="button" class="verdict-action" onclick={on_reset.reform(|_: MouseEvent| ())}>
                { panel.action_label }
            </button>
        </div>
    }
}

/// Renders exactly one of loading indicator, error panel or content.
#[function_component(ExerciseView)]
pub fn exercise_view(props: &ExerciseViewProps) -> Html {
    match &props.view {
        PageView::Loading { message } => html! {
            <p class="loading">{ *message }</p>
        },
        PageView::Failed {
            message,
            retry_label,
        } => html! {
            <div class="error-panel" role="alert">
                <p>{ *message }</p>
                <button type="button" class="retry-button" onclick={props.on_reset.reform(|_: MouseEvent| ())}>
                    { *retry_label }
                </button>
            </div>
        },
        PageView::Content {
            sentence,
            words,
            generation,
            notice,
            verdict,
        } => html! {
            <>
                <section class="original-sentence">
                    <h2>{ SENTENCE_HEADING }</h2>
                    <p class="sentence">{ sentence.clone() }</p>
                </section>
                <section class="arrangement">
                    <h2>{ ARRANGE_HEADING }</h2>
                    <SentenceArranger
                        key={generation.to_string()}
                        words={words.clone()}
                        on_submit={props.on_check.clone()}
                    />
                    if let Some(notice) = notice {
                        <p class="check-notice" role="alert">{ *notice }</p>
                    }
                    if let Some(panel) = verdict {
                        { verdict_panel(panel, &props.on_reset) }
                    }
                </section>
            </>
        },
    }
}

/// The whole exercise: owns the page state machine and the backend client.
#[function_component(ExercisePage)]
pub fn exercise_page() -> Html {
    let page: Rc<RefCell<PageState>> = use_mut_ref(PageState::new);
    let api = use_memo((), |_| HttpExerciseApi::from_env());
    let redraw = use_force_update();

    {
        let page = page.clone();
        let api = api.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let task_page = page.clone();
            spawn_local(async move {
                if driver::load(&task_page, &*api).await.is_applied() {
                    redraw.force_update();
                }
            });
            move || page.borrow_mut().retire()
        });
    }

    let on_check = {
        let page = page.clone();
        let api = api.clone();
        let redraw = redraw.clone();
        Callback::from(move |words: Vec<String>| {
            let Some(ticket) = page.borrow_mut().begin_check() else {
                return;
            };
            let page = page.clone();
            let api = api.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                if driver::settle_check(&page, &*api, ticket, &words)
                    .await
                    .is_applied()
                {
                    redraw.force_update();
                }
            });
        })
    };

    let on_reset = {
        let page = page.clone();
        let api = api.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let ticket = page.borrow_mut().reset();
            redraw.force_update();
            let page = page.clone();
            let api = api.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                if driver::settle_load(&page, &*api, ticket).await.is_applied() {
                    redraw.force_update();
                }
            });
        })
    };

    let view = page.borrow().view();

    html! {
        <div class="exercise-app">
            <main class="exercise">
                <h1>{ TITLE }</h1>
                <ExerciseView {view} {on_check} {on_reset} />
            </main>
            <footer class="exercise-footer">
                <p>{ FOOTER }</p>
            </footer>
        </div>
    }
}
