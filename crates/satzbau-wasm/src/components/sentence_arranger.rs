use satzbau_core::arranger::SentenceArranger as ArrangerState;
use satzbau_core::{KeyCommand, Slot, TokenId};
use tracing::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::word_token::WordToken;
use crate::layout::{measure_slots, point_of};

pub const CHECK_LABEL: &str = "Check Sentence";

#[derive(Properties, PartialEq)]
pub struct SentenceArrangerProps {
    pub words: Vec<String>,
    pub on_submit: Callback<Vec<String>>,
}

/// Reorderable word list for one exercise. The parent remounts it (new key)
/// whenever a new exercise arrives; `words` is only read on mount.
#[function_component(SentenceArranger)]
pub fn sentence_arranger(props: &SentenceArrangerProps) -> Html {
    let state = {
        let words = props.words.clone();
        use_mut_ref(move || ArrangerState::new(&words))
    };
    let slots = use_mut_ref(Vec::<Slot>::new);
    let list_ref = use_node_ref();
    let redraw = use_force_update();

    let on_pointer_down = {
        let state = state.clone();
        let slots = slots.clone();
        let list_ref = list_ref.clone();
        Callback::from(move |(id, event): (TokenId, PointerEvent)| {
            if event.button() != 0 {
                return;
            }
            let measured = measure_slots(&list_ref);
            let Some(rect) = measured.iter().find(|slot| slot.id == id).map(|slot| slot.rect)
            else {
                return;
            };
            if let Some(list) = list_ref.cast::<Element>() {
                if let Err(err) = list.set_pointer_capture(event.pointer_id()) {
                    warn!(error = ?err, "pointer capture failed");
                }
            }
            *slots.borrow_mut() = measured;
            state.borrow_mut().pointer_down(id, point_of(&event), rect);
        })
    };

    let onpointermove = {
        let state = state.clone();
        let slots = slots.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: PointerEvent| {
            let moved = state
                .borrow_mut()
                .pointer_move(point_of(&event), &slots.borrow());
            if moved {
                redraw.force_update();
            }
        })
    };

    let onpointerup = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            let mut arranger = state.borrow_mut();
            if !arranger.is_pointer_tracking() {
                return;
            }
            arranger.pointer_up();
            drop(arranger);
            redraw.force_update();
        })
    };

    // Fires for pointercancel and for lost capture; after a normal pointerup
    // the sensor is already idle.
    let on_pointer_lost = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            if state.borrow_mut().pointer_lost() {
                redraw.force_update();
            }
        })
    };

    let on_key = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, event): (TokenId, KeyboardEvent)| {
            let Some(command) = KeyCommand::from_key(&event.key()) else {
                return;
            };
            if state.borrow_mut().key(id, command) {
                event.prevent_default();
                redraw.force_update();
            }
        })
    };

    let on_blur = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: TokenId| {
            if state.borrow_mut().blur() {
                redraw.force_update();
            }
        })
    };

    let on_check = {
        let state = state.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(state.borrow().submit()))
    };

    let arranger = state.borrow();
    let tokens: Html = arranger
        .tokens()
        .iter()
        .map(|token| {
            html! {
                <WordToken
                    key={token.id.to_string()}
                    id={token.id}
                    text={AttrValue::from(token.text.clone())}
                    visual={arranger.visual(token.id)}
                    on_pointer_down={on_pointer_down.clone()}
                    on_key={on_key.clone()}
                    on_blur={on_blur.clone()}
                />
            }
        })
        .collect();

    html! {
        <div class="sentence-arranger">
            <div
                class="word-list"
                ref={list_ref}
                {onpointermove}
                {onpointerup}
                onpointercancel={on_pointer_lost.clone()}
                onlostpointercapture={on_pointer_lost}
            >
                { tokens }
            </div>
            <button type="button" class="check-button" onclick={on_check}>
                { CHECK_LABEL }
            </button>
        </div>
    }
}
