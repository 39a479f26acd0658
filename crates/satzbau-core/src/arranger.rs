use tracing::debug;

use crate::arrangement::Arrangement;
use crate::geometry::{Point, Rect, Slot};
use crate::sensor::{DragEnd, KeyCommand, KeyOutcome, KeyboardSensor, PointerSensor};
use crate::token::{TokenId, WordToken};

/// How one token should look right now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TokenVisual {
    /// Picked up by pointer or keyboard.
    pub dragging: bool,
    /// Current drop target of the active gesture.
    pub over: bool,
    /// Offset from the resting position while following the pointer.
    pub translation: Option<Point>,
}

/// Working arrangement of one exercise and the sensors that reorder it.
///
/// Both input paths end in [`SentenceArranger::drag_end`], which is the only
/// place the order changes.
#[derive(Debug, Clone)]
pub struct SentenceArranger {
    arrangement: Arrangement,
    pointer: PointerSensor,
    keyboard: KeyboardSensor,
}

impl SentenceArranger {
    pub fn new(words: &[String]) -> Self {
        Self {
            arrangement: Arrangement::from_words(words),
            pointer: PointerSensor::default(),
            keyboard: KeyboardSensor::new(),
        }
    }

    pub fn tokens(&self) -> &[WordToken] {
        self.arrangement.tokens()
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Applies a finished gesture. Returns whether the order changed.
    pub fn drag_end(&mut self, end: DragEnd) -> bool {
        let changed = self.arrangement.apply_drop(end);
        debug!(
            active = %end.active,
            over = ?end.over.map(|id| id.as_u32()),
            changed,
            "drag ended"
        );
        changed
    }

    pub fn pointer_down(&mut self, id: TokenId, at: Point, rect: Rect) {
        if self.arrangement.index_of(id).is_none() {
            return;
        }
        self.keyboard.reset();
        self.pointer.press(id, at, rect);
    }

    /// Returns `true` when tokens need re-rendering.
    pub fn pointer_move(&mut self, at: Point, slots: &[Slot]) -> bool {
        self.pointer.motion(at, slots)
    }

    /// Returns `true` when the order changed.
    pub fn pointer_up(&mut self) -> bool {
        match self.pointer.release() {
            Some(end) => self.drag_end(end),
            None => false,
        }
    }

    pub fn pointer_cancel(&mut self) {
        if let Some(end) = self.pointer.cancel() {
            self.drag_end(end);
        }
    }

    /// Ends a gesture whose pointer went away (cancelled or capture lost).
    /// Returns `true` when one was in progress.
    pub fn pointer_lost(&mut self) -> bool {
        if !self.pointer.is_tracking() {
            return false;
        }
        self.pointer_cancel();
        true
    }

    pub fn is_pointer_tracking(&self) -> bool {
        self.pointer.is_tracking()
    }

    /// Returns `true` when tokens need re-rendering.
    pub fn key(&mut self, focused: TokenId, command: KeyCommand) -> bool {
        if self.pointer.active().is_some() {
            return false;
        }
        let order = self.arrangement.ids();
        match self.keyboard.handle(focused, command, &order) {
            KeyOutcome::Ignored => false,
            KeyOutcome::PickedUp | KeyOutcome::Stepped { .. } | KeyOutcome::Cancelled => true,
            KeyOutcome::Dropped(end) => {
                self.drag_end(end);
                true
            }
        }
    }

    /// Abandons any keyboard pick-up, e.g. when focus leaves the list.
    pub fn blur(&mut self) -> bool {
        let held = self.keyboard.active().is_some();
        self.keyboard.reset();
        held
    }

    pub fn visual(&self, id: TokenId) -> TokenVisual {
        if let Some(active) = self.pointer.active() {
            return TokenVisual {
                dragging: active == id,
                over: self.pointer.over() == Some(id) && active != id,
                translation: if active == id {
                    self.pointer.translation()
                } else {
                    None
                },
            };
        }
        if let Some(active) = self.keyboard.active() {
            let over = self.keyboard.over(&self.arrangement.ids());
            return TokenVisual {
                dragging: active == id,
                over: over == Some(id) && active != id,
                translation: None,
            };
        }
        TokenVisual::default()
    }

    /// Reports the current order verbatim; the arrangement is left as is.
    pub fn submit(&self) -> Vec<String> {
        self.arrangement.words()
    }
}
