use satzbau_core::{TokenId, TokenVisual};
use yew::prelude::*;

use crate::layout::TOKEN_ID_ATTR;

const REST_BACKGROUND: &str = "white";
const DRAG_BACKGROUND: &str = "#e2e8f0";
const TRANSITION: &str = "transform 200ms ease";

#[derive(Properties, PartialEq)]
pub struct WordTokenProps {
    pub id: TokenId,
    pub text: AttrValue,
    #[prop_or_default]
    pub visual: TokenVisual,
    #[prop_or_default]
    pub on_pointer_down: Callback<(TokenId, PointerEvent)>,
    #[prop_or_default]
    pub on_key: Callback<(TokenId, KeyboardEvent)>,
    #[prop_or_default]
    pub on_blur: Callback<TokenId>,
}

/// Inline style for a token in the given drag state.
pub fn token_style(visual: &TokenVisual) -> String {
    let mut style = format!(
        "background-color: {}; z-index: {};",
        if visual.dragging {
            DRAG_BACKGROUND
        } else {
            REST_BACKGROUND
        },
        if visual.dragging { 1 } else { 0 },
    );
    match visual.translation {
        Some(offset) => style.push_str(&format!(
            " transform: translate3d({}px, {}px, 0);",
            offset.x, offset.y
        )),
        None => {
            style.push_str(" transition: ");
            style.push_str(TRANSITION);
            style.push(';');
        }
    }
    style
}

#[function_component(WordToken)]
pub fn word_token(props: &WordTokenProps) -> Html {
    let id = props.id;
    let visual = props.visual;

    let onpointerdown = {
        let on_pointer_down = props.on_pointer_down.clone();
        Callback::from(move |event: PointerEvent| on_pointer_down.emit((id, event)))
    };
    let onkeydown = {
        let on_key = props.on_key.clone();
        Callback::from(move |event: KeyboardEvent| on_key.emit((id, event)))
    };
    let onblur = props.on_blur.reform(move |_: FocusEvent| id);

    let class = classes!(
        "word-token",
        visual.dragging.then_some("word-token--dragging"),
        visual.over.then_some("word-token--over"),
    );

    html! {
        <div
            {class}
            style={token_style(&visual)}
            role="button"
            tabindex="0"
            aria-pressed={visual.dragging.to_string()}
            data-token-id={id.to_string()}
            {onpointerdown}
            {onkeydown}
            {onblur}
        >
            { props.text.clone() }
        </div>
    }
}
