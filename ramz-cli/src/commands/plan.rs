//! Gallery block plan command.

use ramz::gallery::{plan_blocks, GalleryBlock};

use crate::error::CliError;

/// Print the block layout for a gallery of `count` items.
pub fn run(count: usize) -> Result<(), CliError> {
    let items: Vec<usize> = (0..count).collect();
    let blocks = plan_blocks(&items);

    println!("Gallery of {} item(s): {} block(s)", count, blocks.len());
    if blocks.is_empty() {
        return Ok(());
    }
    println!();

    for (position, block) in blocks.iter().enumerate() {
        println!("{}", format_block(position, block));
    }

    Ok(())
}

fn format_block(position: usize, block: &GalleryBlock<usize>) -> String {
    let hint = block.kind.render_hint();
    let indices: Vec<String> = block.indices().map(|i| i.to_string()).collect();
    let priority = if block.items.iter().any(|item| item.is_priority()) {
        " priority"
    } else {
        ""
    };

    format!(
        "  #{:<3} {:<7} [{}]  {}x{} {}:{}{}",
        position,
        block.kind.name(),
        indices.join(", "),
        hint.width,
        hint.height,
        hint.aspect.0,
        hint.aspect.1,
        priority
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_block() {
        let blocks = plan_blocks(&(0..7).collect::<Vec<_>>());

        assert_eq!(
            format_block(0, &blocks[0]),
            "  #0   single  [0]  1200x1200 4:3 priority"
        );
        assert_eq!(
            format_block(4, &blocks[4]),
            "  #4   double  [4, 5]  800x1200 4:3 priority"
        );
        assert_eq!(
            format_block(5, &blocks[5]),
            "  #5   single  [6]  1200x1200 4:3"
        );
    }

    #[test]
    fn test_empty_plan() {
        assert!(run(0).is_ok());
    }
}
