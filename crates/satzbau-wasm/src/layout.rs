use satzbau_core::{Point, Rect, Slot, TokenId};
use web_sys::{Element, MouseEvent};
use yew::NodeRef;

/// Attribute carrying the token id on every rendered token.
pub const TOKEN_ID_ATTR: &str = "data-token-id";

pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn point_of(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Measures every token slot inside `list`. Taken when a press starts, before
/// any transform is applied, so the rects are resting positions.
pub fn measure_slots(list: &NodeRef) -> Vec<Slot> {
    let Some(element) = list.cast::<Element>() else {
        return Vec::new();
    };
    let children = element.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| {
            let id = child
                .get_attribute(TOKEN_ID_ATTR)
                .and_then(|raw| TokenId::parse(&raw))?;
            Some(Slot::new(id, rect_of(&child)))
        })
        .collect()
}
