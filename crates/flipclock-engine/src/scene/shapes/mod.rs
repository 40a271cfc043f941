pub mod circle;
pub mod glyph;
pub mod rect;
pub mod rounded_rect;

pub use circle::CircleCmd;
pub use glyph::GlyphCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
