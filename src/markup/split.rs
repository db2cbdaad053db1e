use crate::markup::block::{Block, is_heading_line};

/// Content partitioned around the first non-heading, non-blank line.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TitleBody {
    /// Leading heading-1/heading-2/blank lines.
    pub title: String,
    /// Everything from the first other line onward, blank lines included.
    pub body: String,
}

/// Split `content` into its leading title lines and the body that follows.
///
/// Lines are rejoined with `\n`, so `title + "\n" + body == content` whenever both halves are
/// non-empty, and splitting the title again yields an empty body.
pub fn split_title_body(content: &str) -> TitleBody {
    let lines: Vec<&str> = content.split('\n').collect();
    let cut = lines
        .iter()
        .position(|line| !(is_heading_line(line) || line.trim().is_empty()))
        .unwrap_or(lines.len());

    TitleBody {
        title: lines[..cut].join("\n"),
        body: lines[cut..].join("\n"),
    }
}

/// Number of leading blocks that [`split_title_body`] would place in the title.
pub fn title_block_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .position(|b| !(b.is_heading() || *b == Block::Spacer))
        .unwrap_or(blocks.len())
}

#[cfg(test)]
#[path = "../../tests/unit/markup/split.rs"]
mod tests;
