/// Style of an inline run, before any theme is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// Unstyled text.
    Plain,
    /// `**bold**`
    Strong,
    /// `*italic*`
    Emphasis,
    /// `~~strikethrough~~`
    Strike,
    /// `__highlight__`; a highlight or an underline depending on the template.
    Mark,
}

/// A contiguous piece of a line with a single style.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct InlineRun {
    pub text: String,
    pub style: RunStyle,
}

impl InlineRun {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }
}

// Tried in this order at every scan position; `**` must precede `*`.
const MARKERS: [(&str, RunStyle); 4] = [
    ("**", RunStyle::Strong),
    ("~~", RunStyle::Strike),
    ("__", RunStyle::Mark),
    ("*", RunStyle::Emphasis),
];

/// Split one line into styled runs.
///
/// Tokens do not nest: a token's content runs to the nearest matching closing marker and is
/// taken literally. Openers without a closing marker are plain text. Empty tokens (`****`)
/// produce empty styled runs.
pub fn parse_inline(line: &str) -> Vec<InlineRun> {
    let mut out = Vec::<InlineRun>::new();
    let mut plain = String::new();
    let mut i = 0usize;

    while i < line.len() {
        let rest = &line[i..];
        let token = MARKERS.iter().find_map(|&(marker, style)| {
            let body = rest.strip_prefix(marker)?;
            let end = body.find(marker)?;
            Some((marker, style, &body[..end]))
        });

        match token {
            Some((marker, style, content)) => {
                if !plain.is_empty() {
                    out.push(InlineRun::plain(std::mem::take(&mut plain)));
                }
                out.push(InlineRun::new(content, style));
                i += marker.len() * 2 + content.len();
            }
            None => {
                let ch = rest.chars().next().unwrap_or_default();
                plain.push(ch);
                i += ch.len_utf8().max(1);
            }
        }
    }

    if !plain.is_empty() {
        out.push(InlineRun::plain(plain));
    }
    out
}

/// Concatenated text of a run list with all markup removed.
pub fn runs_text(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/inline.rs"]
mod tests;
