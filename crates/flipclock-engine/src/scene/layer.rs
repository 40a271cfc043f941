/// Paint layer of a draw item.
///
/// The clock face has a fixed stacking scheme rather than arbitrary z
/// values: almost everything sits on [`Cards`](Self::Cards), and the
/// animating flap hops between the two flap layers at the halfway point of
/// a transition (its backface must hide behind the static card once it
/// folds past edge-on). Within one layer, items paint in insertion order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Layer {
    /// Flap folding away from the viewer, tucked behind the card stack.
    FlapBehind,
    /// Card halves, glyphs, separator dots. The default.
    #[default]
    Cards,
    /// Flap folding toward the viewer, covering the static card.
    FlapFront,
    /// Topmost face chrome: the fold hairline.
    Chrome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_order_back_to_front() {
        assert!(Layer::FlapBehind < Layer::Cards);
        assert!(Layer::Cards < Layer::FlapFront);
        assert!(Layer::FlapFront < Layer::Chrome);
    }

    #[test]
    fn default_layer_is_cards() {
        assert_eq!(Layer::default(), Layer::Cards);
    }
}
