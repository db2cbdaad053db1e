use super::*;
use crate::markup::inline::RunStyle;

fn plain(s: &str) -> Vec<InlineRun> {
    vec![InlineRun::plain(s)]
}

#[test]
fn classifies_each_line_in_order() {
    let blocks = parse_blocks("# Title\n## Sub\n- one\n  - two\n3. three\n\nBody **x**");
    assert_eq!(
        blocks,
        vec![
            Block::Heading1 {
                runs: plain("Title")
            },
            Block::Heading2 { runs: plain("Sub") },
            Block::Bullet { runs: plain("one") },
            Block::Bullet { runs: plain("two") },
            Block::Numbered {
                number: "3".to_string(),
                runs: plain("three"),
            },
            Block::Spacer,
            Block::Paragraph {
                runs: vec![
                    InlineRun::plain("Body "),
                    InlineRun::new("x", RunStyle::Strong),
                ],
            },
        ]
    );
}

#[test]
fn numbered_items_keep_user_numbers() {
    let blocks = parse_blocks("5. Fifth item");
    assert_eq!(
        blocks,
        vec![Block::Numbered {
            number: "5".to_string(),
            runs: plain("Fifth item"),
        }]
    );

    let blocks = parse_blocks("12. a\n1. b");
    let numbers: Vec<_> = blocks
        .iter()
        .map(|b| match b {
            Block::Numbered { number, .. } => number.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(numbers, vec!["12", "1"]);
}

#[test]
fn near_misses_are_paragraphs() {
    for line in ["#Title", "### Deep", "-dash", "5.No space", "5) item", " # indented"] {
        assert!(
            matches!(parse_line(line), Block::Paragraph { .. }),
            "{line:?} should be a paragraph"
        );
    }
}

#[test]
fn paragraphs_keep_leading_whitespace() {
    assert_eq!(
        parse_line("   indented"),
        Block::Paragraph {
            runs: plain("   indented")
        }
    );
}

#[test]
fn crlf_and_whitespace_only_lines() {
    let blocks = parse_blocks("# A\r\n \t\r\nb");
    assert_eq!(blocks[0], Block::Heading1 { runs: plain("A") });
    assert_eq!(blocks[1], Block::Spacer);
    assert_eq!(blocks[2], Block::Paragraph { runs: plain("b") });
}

#[test]
fn empty_content_is_one_spacer() {
    assert_eq!(parse_blocks(""), vec![Block::Spacer]);
}
