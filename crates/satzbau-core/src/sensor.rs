use crate::collision::closest_center;
use crate::geometry::{Point, Rect, Slot};
use crate::token::TokenId;

/// Pointer travel (CSS px) required before a press turns into a drag.
pub const POINTER_ACTIVATION_DISTANCE: f64 = 8.0;

/// Outcome of a finished drag gesture, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: TokenId,
    pub over: Option<TokenId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerPhase {
    Idle,
    Pending {
        active: TokenId,
        origin: Point,
        rect: Rect,
    },
    Dragging {
        active: TokenId,
        origin: Point,
        rect: Rect,
        current: Point,
        over: Option<TokenId>,
    },
}

/// Mouse/touch/pen sensor with a distance activation constraint, so that a
/// click on a token never reorders anything.
#[derive(Debug, Clone)]
pub struct PointerSensor {
    phase: PointerPhase,
    activation_distance: f64,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(POINTER_ACTIVATION_DISTANCE)
    }
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            phase: PointerPhase::Idle,
            activation_distance: activation_distance.max(0.0),
        }
    }

    /// Records a press on `active`, whose slot currently occupies `rect`.
    /// A press while another gesture is tracked restarts tracking.
    pub fn press(&mut self, active: TokenId, origin: Point, rect: Rect) {
        self.phase = PointerPhase::Pending {
            active,
            origin,
            rect,
        };
    }

    /// Feeds a pointer position. Returns `true` when the visible drag state
    /// changed (activation, movement while dragging, or a new drop target).
    pub fn motion(&mut self, point: Point, slots: &[Slot]) -> bool {
        match self.phase {
            PointerPhase::Idle => false,
            PointerPhase::Pending {
                active,
                origin,
                rect,
            } => {
                if point.distance_to(origin) <= self.activation_distance {
                    return false;
                }
                let over = closest_center(rect.translated(point.delta_from(origin)), slots);
                self.phase = PointerPhase::Dragging {
                    active,
                    origin,
                    rect,
                    current: point,
                    over,
                };
                true
            }
            PointerPhase::Dragging {
                active,
                origin,
                rect,
                ..
            } => {
                let over = closest_center(rect.translated(point.delta_from(origin)), slots);
                self.phase = PointerPhase::Dragging {
                    active,
                    origin,
                    rect,
                    current: point,
                    over,
                };
                true
            }
        }
    }

    /// Ends the gesture. A press that never crossed the activation distance
    /// was a tap and yields nothing.
    pub fn release(&mut self) -> Option<DragEnd> {
        let phase = std::mem::replace(&mut self.phase, PointerPhase::Idle);
        match phase {
            PointerPhase::Dragging { active, over, .. } => Some(DragEnd { active, over }),
            _ => None,
        }
    }

    /// Aborts the gesture without a drop target.
    pub fn cancel(&mut self) -> Option<DragEnd> {
        let phase = std::mem::replace(&mut self.phase, PointerPhase::Idle);
        match phase {
            PointerPhase::Dragging { active, .. } => Some(DragEnd { active, over: None }),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.phase, PointerPhase::Idle)
    }

    /// The token being dragged, once the gesture is activated.
    pub fn active(&self) -> Option<TokenId> {
        match self.phase {
            PointerPhase::Dragging { active, .. } => Some(active),
            _ => None,
        }
    }

    pub fn over(&self) -> Option<TokenId> {
        match self.phase {
            PointerPhase::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Offset of the dragged token from its resting place.
    pub fn translation(&self) -> Option<Point> {
        match self.phase {
            PointerPhase::Dragging {
                origin, current, ..
            } => Some(current.delta_from(origin)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

/// Discrete keyboard commands understood by the keyboard sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Space or Enter: pick up the focused token, or drop the held one.
    Toggle,
    Step(StepDirection),
    Cancel,
}

impl KeyCommand {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" | "Enter" => Some(Self::Toggle),
            "ArrowLeft" | "ArrowUp" => Some(Self::Step(StepDirection::Backward)),
            "ArrowRight" | "ArrowDown" => Some(Self::Step(StepDirection::Forward)),
            "Escape" | "Esc" => Some(Self::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    PickedUp,
    Stepped { over: TokenId },
    Dropped(DragEnd),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyboardPhase {
    Idle,
    Holding { active: TokenId, over_index: usize },
}

/// Keyboard sensor: pick up, step the prospective slot left or right, drop.
#[derive(Debug, Clone)]
pub struct KeyboardSensor {
    phase: KeyboardPhase,
}

impl Default for KeyboardSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSensor {
    pub fn new() -> Self {
        Self {
            phase: KeyboardPhase::Idle,
        }
    }

    /// Handles `command` issued on the focused token, given the current order.
    pub fn handle(&mut self, focused: TokenId, command: KeyCommand, order: &[TokenId]) -> KeyOutcome {
        match (self.phase, command) {
            (KeyboardPhase::Idle, KeyCommand::Toggle) => {
                let Some(index) = order.iter().position(|id| *id == focused) else {
                    return KeyOutcome::Ignored;
                };
                self.phase = KeyboardPhase::Holding {
                    active: focused,
                    over_index: index,
                };
                KeyOutcome::PickedUp
            }
            (KeyboardPhase::Idle, _) => KeyOutcome::Ignored,
            (KeyboardPhase::Holding { active, over_index }, KeyCommand::Step(direction)) => {
                if order.is_empty() {
                    return KeyOutcome::Ignored;
                }
                let last = order.len() - 1;
                let next = match direction {
                    StepDirection::Backward => over_index.saturating_sub(1),
                    StepDirection::Forward => over_index + 1,
                }
                .min(last);
                self.phase = KeyboardPhase::Holding {
                    active,
                    over_index: next,
                };
                KeyOutcome::Stepped { over: order[next] }
            }
            (KeyboardPhase::Holding { active, over_index }, KeyCommand::Toggle) => {
                self.phase = KeyboardPhase::Idle;
                KeyOutcome::Dropped(DragEnd {
                    active,
                    over: order.get(over_index).copied(),
                })
            }
            (KeyboardPhase::Holding { .. }, KeyCommand::Cancel) => {
                self.phase = KeyboardPhase::Idle;
                KeyOutcome::Cancelled
            }
        }
    }

    /// Drops a held token without a target (focus loss, remount).
    pub fn reset(&mut self) {
        self.phase = KeyboardPhase::Idle;
    }

    pub fn active(&self) -> Option<TokenId> {
        match self.phase {
            KeyboardPhase::Holding { active, .. } => Some(active),
            KeyboardPhase::Idle => None,
        }
    }

    pub fn over(&self, order: &[TokenId]) -> Option<TokenId> {
        match self.phase {
            KeyboardPhase::Holding { over_index, .. } => order.get(over_index).copied(),
            KeyboardPhase::Idle => None,
        }
    }
}
