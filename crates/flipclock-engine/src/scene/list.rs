use crate::coords::Rect;

use super::{DrawCmd, Layer};

/// A single draw item: layer + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Items are kept in insertion order; [`iter_in_paint_order`] regroups them
/// back-to-front by [`Layer`], keeping insertion order within each layer.
/// That regrouping is what lets the flip flap be pushed after the cards yet
/// still paint behind them during the second half of a transition.
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a scissor rect. Clips are intersected with the current
/// parent, so nested regions (flip-card halves inside a tile) work correctly.
///
/// [`iter_in_paint_order`]: Self::iter_in_paint_order
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command onto the given layer.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        self.items.push(DrawItem {
            layer,
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
        self.sorted_dirty = true;
    }

    /// Begins a scissor region. All draw commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with `pop_clip`.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // Intersect with the parent; if no overlap, produce a zero-area rect so
            // the renderer skips those draw calls.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable sort over ascending indices keeps insertion order within a layer.
        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].layer);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn solid(list: &mut DrawList, layer: Layer, tag: f32) {
        list.push_solid_rect(
            layer,
            Rect::new(tag, 0.0, 1.0, 1.0),
            Color::from_straight(1.0, 1.0, 1.0, 1.0),
        );
    }

    fn paint_order_tags(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                _ => unreachable!(),
            })
            .collect()
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn paint_order_groups_by_layer_back_to_front() {
        let mut list = DrawList::new();
        solid(&mut list, Layer::Chrome, 0.0);
        solid(&mut list, Layer::Cards, 1.0);
        solid(&mut list, Layer::FlapFront, 2.0);

        assert_eq!(paint_order_tags(&mut list), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn insertion_order_is_kept_within_a_layer() {
        let mut list = DrawList::new();
        solid(&mut list, Layer::Cards, 0.0);
        solid(&mut list, Layer::Cards, 1.0);
        solid(&mut list, Layer::Cards, 2.0);

        assert_eq!(paint_order_tags(&mut list), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn behind_layer_paints_first_despite_late_insertion() {
        // The flap is always pushed after the cards; past the halfway point
        // it lands on FlapBehind and must still end up underneath.
        let mut list = DrawList::new();
        solid(&mut list, Layer::Cards, 0.0);
        solid(&mut list, Layer::Cards, 1.0);
        solid(&mut list, Layer::FlapBehind, 2.0);

        assert_eq!(paint_order_tags(&mut list), vec![2.0, 0.0, 1.0]);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn items_inherit_active_clip() {
        let mut list = DrawList::new();
        let clip = Rect::new(0.0, 0.0, 50.0, 25.0);
        list.push_clip(clip);
        solid(&mut list, Layer::Cards, 0.0);
        list.pop_clip();
        solid(&mut list, Layer::Cards, 1.0);

        assert_eq!(list.items()[0].clip_rect, Some(clip));
        assert_eq!(list.items()[1].clip_rect, None);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        solid(&mut list, Layer::Cards, 0.0);
        list.pop_clip();
        list.pop_clip();

        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn disjoint_nested_clip_collapses_to_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));
        solid(&mut list, Layer::Cards, 0.0);

        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        solid(&mut list, Layer::Chrome, 0.0);
        list.clear();
        solid(&mut list, Layer::Cards, 0.0);

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].layer, Layer::Cards);
        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(paint_order_tags(&mut list), vec![0.0]);
    }
}
