//! Block layout for galleries.

use super::block::{BlockKind, GalleryBlock, GalleryItem};

/// Consecutive blocks emitted before the pattern selector advances.
const BLOCKS_PER_PATTERN: usize = 4;

/// Pattern for the block at position `emitted`.
///
/// Each pattern repeats for four blocks before the next one takes over,
/// giving a sixteen-block super-cycle.
pub fn pattern_for(emitted: usize) -> BlockKind {
    BlockKind::CYCLE[(emitted / BLOCKS_PER_PATTERN) % BlockKind::CYCLE.len()]
}

/// Partitions `items` into layout blocks.
///
/// Pure and deterministic in the input length. Concatenating the blocks'
/// items in order gives back `items` exactly. When fewer items remain than
/// a `double` or `triple` needs, a `single` is emitted instead.
pub fn plan_blocks<T: Clone>(items: &[T]) -> Vec<GalleryBlock<T>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while cursor < items.len() {
        let pattern = pattern_for(blocks.len());
        let remaining = items.len() - cursor;
        let kind = if pattern.slot_count() <= remaining {
            pattern
        } else {
            BlockKind::Single
        };

        let end = cursor + kind.slot_count();
        let block_items = items[cursor..end]
            .iter()
            .enumerate()
            .map(|(offset, value)| GalleryItem {
                index: cursor + offset,
                value: value.clone(),
            })
            .collect();

        blocks.push(GalleryBlock {
            kind,
            items: block_items,
        });
        cursor = end;
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shape<T>(blocks: &[GalleryBlock<T>]) -> Vec<(BlockKind, Vec<usize>)> {
        blocks
            .iter()
            .map(|b| (b.kind, b.indices().collect()))
            .collect()
    }

    #[test]
    fn test_empty_gallery() {
        assert!(plan_blocks::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_single_item_gallery() {
        let blocks = plan_blocks(&["only"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Single);
        assert_eq!(
            blocks[0].items,
            vec![GalleryItem {
                index: 0,
                value: "only"
            }]
        );
    }

    #[test]
    fn test_pattern_cadence() {
        let kinds: Vec<BlockKind> = (0..17).map(pattern_for).collect();
        assert_eq!(&kinds[0..4], &[BlockKind::Single; 4]);
        assert_eq!(&kinds[4..8], &[BlockKind::Double; 4]);
        assert_eq!(&kinds[8..12], &[BlockKind::Triple; 4]);
        assert_eq!(&kinds[12..16], &[BlockKind::Tall; 4]);
        assert_eq!(kinds[16], BlockKind::Single);
    }

    #[test]
    fn test_eleven_items() {
        let items: Vec<usize> = (0..11).collect();
        let blocks = plan_blocks(&items);

        use BlockKind::*;
        assert_eq!(
            shape(&blocks),
            vec![
                (Single, vec![0]),
                (Single, vec![1]),
                (Single, vec![2]),
                (Single, vec![3]),
                (Double, vec![4, 5]),
                (Double, vec![6, 7]),
                (Double, vec![8, 9]),
                // Double selected with one item left
                (Single, vec![10]),
            ]
        );
    }

    #[test]
    fn test_triple_falls_back_with_two_left() {
        // 4 singles + 4 doubles = 12 items, then triples start.
        let items: Vec<usize> = (0..14).collect();
        let blocks = plan_blocks(&items);

        use BlockKind::*;
        let tail: Vec<_> = shape(&blocks).into_iter().skip(8).collect();
        assert_eq!(tail, vec![(Single, vec![12]), (Single, vec![13])]);
    }

    #[test]
    fn test_full_super_cycle() {
        let items: Vec<usize> = (0..28).collect();
        let blocks = plan_blocks(&items);

        assert_eq!(blocks.len(), 16);
        assert!(blocks[12..].iter().all(|b| b.kind == BlockKind::Tall));
        assert_eq!(blocks[15].items[0].index, 27);
    }

    proptest! {
        #[test]
        fn prop_partition_is_lossless(len in 0usize..200) {
            let items: Vec<usize> = (0..len).map(|i| i * 7).collect();
            let blocks = plan_blocks(&items);

            let flattened: Vec<usize> = blocks
                .iter()
                .flat_map(|b| b.items.iter().map(|i| i.value))
                .collect();
            prop_assert_eq!(&flattened, &items);

            for block in &blocks {
                prop_assert_eq!(block.items.len(), block.kind.slot_count());
            }
        }

        #[test]
        fn prop_layout_depends_only_on_length(len in 0usize..64) {
            let numbers: Vec<usize> = (0..len).collect();
            let words: Vec<String> = (0..len).map(|i| format!("img-{}", i)).collect();

            let a: Vec<_> = shape(&plan_blocks(&numbers));
            let b: Vec<_> = shape(&plan_blocks(&words));
            prop_assert_eq!(a, b);
        }
    }
}
