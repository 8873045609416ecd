//! Gallery block types.

use std::fmt;
use std::str::FromStr;

/// Items at the head of a gallery that load with high priority.
pub const PRIORITY_ITEMS: usize = 5;

/// Shape of a gallery block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// One full-width item.
    Single,
    /// Two items side by side.
    Double,
    /// Three items side by side.
    Triple,
    /// One half-width portrait item.
    Tall,
}

impl BlockKind {
    /// Rotation the planner cycles through.
    pub const CYCLE: [BlockKind; 4] = [Self::Single, Self::Double, Self::Triple, Self::Tall];

    /// Number of items the block holds.
    pub fn slot_count(self) -> usize {
        match self {
            Self::Single | Self::Tall => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Intrinsic size and placeholder aspect used when rendering an item.
    pub fn render_hint(self) -> RenderHint {
        match self {
            Self::Single => RenderHint::new(1200, 1200, (4, 3)),
            Self::Double => RenderHint::new(800, 1200, (4, 3)),
            Self::Triple => RenderHint::new(600, 1200, (4, 3)),
            Self::Tall => RenderHint::new(800, 1600, (2, 3)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Tall => "tall",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown block kind '{}'", s))
    }
}

/// Rendering hints for items in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHint {
    pub width: u32,
    pub height: u32,
    /// Placeholder aspect ratio as `(width, height)`.
    pub aspect: (u32, u32),
}

impl RenderHint {
    const fn new(width: u32, height: u32, aspect: (u32, u32)) -> Self {
        Self {
            width,
            height,
            aspect,
        }
    }
}

/// An input item and its position in the original list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem<T> {
    pub index: usize,
    pub value: T,
}

impl<T> GalleryItem<T> {
    /// Whether the item is near enough the top to load eagerly.
    pub fn is_priority(&self) -> bool {
        self.index < PRIORITY_ITEMS
    }
}

/// A group of consecutive items rendered with one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBlock<T> {
    pub kind: BlockKind,
    pub items: Vec<GalleryItem<T>>,
}

impl<T> GalleryBlock<T> {
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_counts() {
        let slots: Vec<usize> = BlockKind::CYCLE.iter().map(|k| k.slot_count()).collect();
        assert_eq!(slots, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_render_hints() {
        assert_eq!(BlockKind::Single.render_hint().width, 1200);
        assert_eq!(BlockKind::Triple.render_hint().width, 600);
        assert_eq!(BlockKind::Tall.render_hint().height, 1600);
        assert_eq!(BlockKind::Tall.render_hint().aspect, (2, 3));
        assert_eq!(BlockKind::Double.render_hint().aspect, (4, 3));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("tall".parse::<BlockKind>(), Ok(BlockKind::Tall));
        assert!("quad".parse::<BlockKind>().is_err());
    }
}
