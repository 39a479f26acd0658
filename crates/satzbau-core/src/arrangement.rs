use crate::sensor::DragEnd;
use crate::token::{tokenize, TokenId, WordToken};

/// Moves the element at `from` so that it ends up at index `to`, shifting the
/// elements in between by one. Every other element keeps its relative order.
///
/// Returns `false` and leaves `items` untouched when either index is out of
/// bounds or `from == to`.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// The user's working order of the tokens of one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arrangement {
    tokens: Vec<WordToken>,
}

impl Arrangement {
    pub fn from_words(words: &[String]) -> Self {
        Self {
            tokens: tokenize(words),
        }
    }

    pub fn tokens(&self) -> &[WordToken] {
        &self.tokens
    }

    pub fn ids(&self) -> Vec<TokenId> {
        self.tokens.iter().map(|token| token.id).collect()
    }

    pub fn index_of(&self, id: TokenId) -> Option<usize> {
        self.tokens.iter().position(|token| token.id == id)
    }

    /// Applies a finished drag. Dropping outside any slot or back onto the
    /// dragged token is a no-op; unknown ids are ignored.
    pub fn apply_drop(&mut self, end: DragEnd) -> bool {
        let Some(over) = end.over else {
            return false;
        };
        if over == end.active {
            return false;
        }
        match (self.index_of(end.active), self.index_of(over)) {
            (Some(from), Some(to)) => move_item(&mut self.tokens, from, to),
            _ => false,
        }
    }

    /// Current order as plain words, exactly as shown.
    pub fn words(&self) -> Vec<String> {
        self.tokens.iter().map(|token| token.text.clone()).collect()
    }
}
