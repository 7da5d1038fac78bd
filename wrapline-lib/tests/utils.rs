use wrapline_lib::{center, dedent, indent};

#[test]
fn test_dedent_common_prefix() {
    assert_eq!(dedent("  a\n    b\n  c\n"), "a\n  b\nc\n");
}

#[test]
fn test_dedent_ignores_blank_lines() {
    assert_eq!(dedent("    a\n  \n    b"), "a\n\nb");
}

#[test]
fn test_dedent_no_common_margin() {
    assert_eq!(dedent("a\n  b"), "a\n  b");
    assert_eq!(dedent("\ta\n  b"), "\ta\n  b");
}

#[test]
fn test_dedent_mixed_tabs_and_spaces() {
    assert_eq!(dedent("\t  a\n\t b"), " a\nb");
}

#[test]
fn test_dedent_empty() {
    assert_eq!(dedent(""), "");
    assert_eq!(dedent("   "), "");
}

#[test]
fn test_indent_skips_blank_lines() {
    assert_eq!(indent("a\n\n  \nb", "  ", None), "  a\n\n  \n  b");
}

#[test]
fn test_indent_with_predicate() {
    let odd = |line: &str| line.len() % 2 == 1;
    assert_eq!(indent("a\nbb\nccc", "> ", Some(&odd)), "> a\nbb\n> ccc");
}

#[test]
fn test_indent_predicate_cannot_select_blank_lines() {
    let all = |_: &str| true;
    assert_eq!(indent("a\n \nb", "#", Some(&all)), "#a\n \n#b");
}

#[test]
fn test_dedent_undoes_indent() {
    let text = "first line\n  nested\n\nlast";
    assert_eq!(dedent(&indent(text, "    ", None)), text);
}

#[test]
fn test_center_pads_both_sides() {
    assert_eq!(center("ab", '*', 6), "**ab**");
    assert_eq!(center("ab", '*', 7), "**ab***");
    assert_eq!(center("", '-', 3), "---");
}

#[test]
fn test_center_wide_text_unchanged() {
    assert_eq!(center("hello", ' ', 5), "hello");
    assert_eq!(center("hello", ' ', 2), "hello");
}

#[test]
fn test_center_counts_runes() {
    let centered = center("日本", '·', 5);
    assert_eq!(centered, "·日本··");
    assert_eq!(centered.chars().count(), 5);
}
