use super::*;

#[test]
fn bold_and_italic_keep_order_and_whitespace() {
    let runs = parse_inline("**bold** and *italic*");
    assert_eq!(
        runs,
        vec![
            InlineRun::new("bold", RunStyle::Strong),
            InlineRun::plain(" and "),
            InlineRun::new("italic", RunStyle::Emphasis),
        ]
    );
}

#[test]
fn strike_and_mark_tokens() {
    let runs = parse_inline("a ~~gone~~ b __hot__");
    assert_eq!(
        runs,
        vec![
            InlineRun::plain("a "),
            InlineRun::new("gone", RunStyle::Strike),
            InlineRun::plain(" b "),
            InlineRun::new("hot", RunStyle::Mark),
        ]
    );
}

#[test]
fn unmatched_delimiters_are_literal() {
    assert_eq!(parse_inline("2 * 3 = 6"), vec![InlineRun::plain("2 * 3 = 6")]);
    assert_eq!(parse_inline("~~open"), vec![InlineRun::plain("~~open")]);
    assert_eq!(parse_inline("snake__case"), vec![InlineRun::plain("snake__case")]);
}

#[test]
fn tokens_do_not_nest_and_close_non_greedily() {
    let runs = parse_inline("**a *b* c** d");
    assert_eq!(
        runs,
        vec![
            InlineRun::new("a *b* c", RunStyle::Strong),
            InlineRun::plain(" d"),
        ]
    );

    let runs = parse_inline("*x* y *z*");
    assert_eq!(
        runs,
        vec![
            InlineRun::new("x", RunStyle::Emphasis),
            InlineRun::plain(" y "),
            InlineRun::new("z", RunStyle::Emphasis),
        ]
    );
}

#[test]
fn empty_tokens_become_empty_styled_runs() {
    assert_eq!(parse_inline("****"), vec![InlineRun::new("", RunStyle::Strong)]);
    assert_eq!(parse_inline("**"), vec![InlineRun::new("", RunStyle::Emphasis)]);
}

#[test]
fn multibyte_text_survives() {
    let runs = parse_inline("café **naïve** ✓");
    assert_eq!(runs_text(&runs), "café naïve ✓");
    assert_eq!(runs[1], InlineRun::new("naïve", RunStyle::Strong));
}

#[test]
fn empty_line_has_no_runs() {
    assert!(parse_inline("").is_empty());
}
