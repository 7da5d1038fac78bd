//! Line utilities that work outside the wrapping loop.

use crate::text::{is_blank, leading_whitespace, rune_len};

/// Removes the leading whitespace shared by every non-blank line.
///
/// Blank lines do not take part in finding the margin and come out empty.
///
/// ```
/// assert_eq!(wrapline_lib::dedent("  a\n    b\n  c\n"), "a\n  b\nc\n");
/// ```
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n').filter(|line| !is_blank(line)) {
        let lead = leading_whitespace(line);
        margin = Some(match margin {
            None => lead,
            Some(current) => common_prefix(current, lead),
        });
    }
    let margin = margin.unwrap_or_default();

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for ((i, x), y) in a.char_indices().zip(b.chars()) {
        if x != y {
            break;
        }
        end = i + x.len_utf8();
    }
    &a[..end]
}

/// Prepends `prefix` to every non-blank line accepted by `predicate`.
///
/// Without a predicate every non-blank line is indented.
///
/// ```
/// use wrapline_lib::indent;
///
/// assert_eq!(indent("a\n\nb", "> ", None), "> a\n\n> b");
/// assert_eq!(indent("a\nb", "> ", Some(&|line: &str| line == "b")), "a\n> b");
/// ```
pub fn indent(text: &str, prefix: &str, predicate: Option<&dyn Fn(&str) -> bool>) -> String {
    text.split('\n')
        .map(|line| {
            let selected = !is_blank(line) && predicate.is_none_or(|accept| accept(line));
            if selected {
                format!("{prefix}{line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads `text` on both sides with `pad` up to `width` runes.
///
/// When the padding is odd the extra character goes on the right. Text at
/// least `width` runes long is returned unchanged.
pub fn center(text: &str, pad: char, width: usize) -> String {
    let len = rune_len(text);
    if len >= width {
        return text.to_string();
    }

    let total = width - len;
    let left = total / 2;
    let right = total - left;

    let mut out = String::with_capacity(text.len() + total * pad.len_utf8());
    out.extend(std::iter::repeat_n(pad, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(pad, right));
    out
}
