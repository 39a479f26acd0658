pub mod exercise_page;
pub mod sentence_arranger;
pub mod word_token;

pub use exercise_page::{ExercisePage, ExerciseView};
pub use sentence_arranger::SentenceArranger;
pub use word_token::WordToken;

/// Renders a component to an HTML string on the current thread.
#[cfg(test)]
pub(crate) async fn render_to_string<C>(props: C::Properties) -> String
where
    C: yew::BaseComponent,
{
    tokio::task::LocalSet::new()
        .run_until(async move {
            yew::LocalServerRenderer::<C>::with_props(props)
                .hydratable(false)
                .render()
                .await
        })
        .await
}
