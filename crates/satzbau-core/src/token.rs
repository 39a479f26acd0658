use std::fmt;

/// Synthetic token identity: the slot the word occupied when the exercise
/// was loaded. Two identical words therefore stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u32);

impl TokenId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Parses the value written into a `data-token-id` attribute.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().map(Self)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub id: TokenId,
    pub text: String,
}

impl WordToken {
    pub fn new(id: TokenId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Pairs every word with its original slot index.
pub fn tokenize(words: &[String]) -> Vec<WordToken> {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| WordToken::new(TokenId(index as u32), word.clone()))
        .collect()
}
