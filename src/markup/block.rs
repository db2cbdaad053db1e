use crate::markup::inline::{InlineRun, parse_inline};

/// One line of slide content, classified.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    /// `# title`
    Heading1 { runs: Vec<InlineRun> },
    /// `## subtitle`
    Heading2 { runs: Vec<InlineRun> },
    /// `- item`
    Bullet { runs: Vec<InlineRun> },
    /// `7. item`; `number` is kept verbatim, never renumbered.
    Numbered { number: String, runs: Vec<InlineRun> },
    /// Blank line; vertical space only.
    Spacer,
    /// Anything else.
    Paragraph { runs: Vec<InlineRun> },
}

impl Block {
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading1 { .. } | Block::Heading2 { .. })
    }

    /// Inline runs of the block; empty for spacers.
    pub fn runs(&self) -> &[InlineRun] {
        match self {
            Block::Heading1 { runs }
            | Block::Heading2 { runs }
            | Block::Bullet { runs }
            | Block::Numbered { runs, .. }
            | Block::Paragraph { runs } => runs,
            Block::Spacer => &[],
        }
    }
}

/// Classify every line of `content` into a [`Block`].
///
/// This is line-oriented, not CommonMark: one block per `\n`-separated line, and headings
/// must start at column 0 while list markers may be indented.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    content.split('\n').map(parse_line).collect()
}

pub(crate) fn parse_line(raw: &str) -> Block {
    let line = raw.strip_suffix('\r').unwrap_or(raw);

    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading1 {
            runs: parse_inline(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading2 {
            runs: parse_inline(rest),
        };
    }

    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return Block::Bullet {
            runs: parse_inline(rest),
        };
    }
    if let Some((number, rest)) = split_numbered(trimmed) {
        return Block::Numbered {
            number: number.to_string(),
            runs: parse_inline(rest),
        };
    }
    if trimmed.is_empty() {
        return Block::Spacer;
    }

    Block::Paragraph {
        runs: parse_inline(line),
    }
}

/// Kind of line, without parsing its inline content.
pub(crate) fn is_heading_line(raw: &str) -> bool {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    line.starts_with("# ") || line.starts_with("## ")
}

// `^\d+\. ` -> (digits, remainder)
fn split_numbered(trimmed: &str) -> Option<(&str, &str)> {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix(". ")?;
    Some((&trimmed[..digits], rest))
}

#[cfg(test)]
#[path = "../../tests/unit/markup/block.rs"]
mod tests;
