use crate::geometry::{Rect, Slot};
use crate::token::TokenId;

/// Picks the slot whose centre is nearest to the centre of `dragged`.
///
/// The dragged token's own slot is a candidate too, so releasing a token near
/// where it started resolves to itself. Ties go to the earlier slot.
pub fn closest_center(dragged: Rect, slots: &[Slot]) -> Option<TokenId> {
    let center = dragged.center();
    let mut best: Option<(TokenId, f64)> = None;

    for slot in slots {
        let distance = slot.rect.center().distance_to(center);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((slot.id, distance)),
        }
    }

    best.map(|(id, _)| id)
}
