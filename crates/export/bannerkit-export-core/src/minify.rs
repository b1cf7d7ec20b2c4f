#![allow(dead_code)]
//! Static-document minifier.
//!
//! Section-aware text transform: the document is split into html chunks,
//! `<style>` bodies, and `<script>` bodies, each tightened with its own
//! rules. Idempotent: `minify(minify(x)) == minify(x)`, and no transform
//! changes rendered semantics (time units keep their suffix; only length
//! zeros collapse to bare `0`).

/// Attribute values made of these characters only may drop their quotes.
const SAFE_ATTR_CHARS: &str = "-_.";
/// Operator characters that never need adjacent whitespace in JS.
const JS_OPS: &str = "{}()[];,=:<>!?&|+-*/%";
/// Punctuation that never needs adjacent whitespace in CSS.
const CSS_OPS: &str = "{}:;,";
/// Length units whose zero values collapse to bare `0`. Time units and `%`
/// are deliberately absent: `0s`/`0ms` are not valid as bare `0` in
/// shorthands, and `0%` is not interchangeable with `0` (keyframe selectors
/// must stay percentages).
const ZERO_UNITS: [&str; 14] = [
    "vmin", "vmax", "rem", "px", "em", "pt", "pc", "in", "cm", "mm", "ex", "ch", "vw", "vh",
];

/// Minify a complete document string.
pub fn minify(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let style_at = lower[pos..].find("<style").map(|i| pos + i);
        let script_at = lower[pos..].find("<script").map(|i| pos + i);
        let (start, close_tag, is_style) = match (style_at, script_at) {
            (Some(a), Some(b)) if a < b => (a, "</style>", true),
            (Some(a), None) => (a, "</style>", true),
            (_, Some(b)) => (b, "</script>", false),
            (None, None) => {
                push_chunk(&mut out, &minify_html(&input[pos..]));
                break;
            }
        };

        push_chunk(&mut out, &minify_html(&input[pos..start]));
        let tag_end = match lower[start..].find('>') {
            Some(i) => start + i,
            None => {
                push_chunk(&mut out, &minify_html(&input[start..]));
                break;
            }
        };
        push_chunk(&mut out, &minify_html(&input[start..=tag_end]));

        let body_start = tag_end + 1;
        match lower[body_start..].find(close_tag) {
            Some(i) => {
                let body = &input[body_start..body_start + i];
                if is_style {
                    out.push_str(&minify_css(body));
                } else {
                    out.push_str(&minify_js(body));
                }
                out.push_str(close_tag);
                pos = body_start + i + close_tag.len();
            }
            None => {
                // Unterminated section; treat the remainder as its body.
                let body = &input[body_start..];
                if is_style {
                    out.push_str(&minify_css(body));
                } else {
                    out.push_str(&minify_js(body));
                }
                break;
            }
        }
    }

    out
}

fn push_chunk(out: &mut String, chunk: &str) {
    out.push_str(chunk);
}

/// Collapse any whitespace run to one space.
fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

fn strip_delimited(s: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        match rest[start + open.len()..].find(close) {
            Some(end) => rest = &rest[start + open.len() + end + close.len()..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Drop whitespace adjacent to any character in `ops`; collapse the rest to
/// single spaces.
fn tighten(s: &str, ops: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            let prev_is_op = out.chars().last().map(|p| ops.contains(p)).unwrap_or(true);
            if !prev_is_op && !ops.contains(c) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

fn minify_html(s: &str) -> String {
    let s = strip_delimited(s, "<!--", "-->");
    let s = collapse_ws(&s);
    let s = s.replace("> <", "><");
    unquote_attrs(&s).trim().to_string()
}

fn is_safe_attr_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || SAFE_ATTR_CHARS.contains(c)
}

/// Drop quotes from `="value"` when the value uses only the safe set.
fn unquote_attrs(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '=' && i + 1 < chars.len() && chars[i + 1] == '"' {
            if let Some(rel_end) = chars[i + 2..].iter().position(|&c| c == '"') {
                let value: String = chars[i + 2..i + 2 + rel_end].iter().collect();
                if !value.is_empty() && value.chars().all(is_safe_attr_char) {
                    out.push('=');
                    out.push_str(&value);
                    i += 2 + rel_end + 1;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// CSS
// ---------------------------------------------------------------------------

fn minify_css(s: &str) -> String {
    let s = strip_delimited(s, "/*", "*/");
    let s = collapse_ws(&s);
    let mut s = tighten(&s, CSS_OPS);
    while s.contains(";}") {
        s = s.replace(";}", "}");
    }
    let s = collapse_zero_units(&s);
    let s = compress_hex_colors(&s);
    strip_leading_zeros(&s).trim().to_string()
}

fn is_css_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '.' || c == '#' || c == '-'),
    }
}

/// `0px` (and friends) -> `0`, for length units only.
fn collapse_zero_units(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '0' && is_css_boundary(out.chars().last()) {
            let rest: String = chars[i + 1..].iter().collect();
            if let Some(unit) = ZERO_UNITS.iter().find(|u| rest.starts_with(**u)) {
                let after = chars.get(i + 1 + unit.len()).copied();
                let terminated = match after {
                    None => true,
                    Some(c) => !(c.is_ascii_alphanumeric() || c == '.' || c == '%'),
                };
                if terminated {
                    out.push('0');
                    i += 1 + unit.len();
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// `#aabbcc` -> `#abc` when each channel doubles.
fn compress_hex_colors(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '#' && i + 6 < chars.len() + 1 {
            let hex: Vec<char> = chars[i + 1..].iter().take(6).copied().collect();
            let next = chars.get(i + 7).copied();
            let all_hex = hex.len() == 6 && hex.iter().all(|c| c.is_ascii_hexdigit());
            let boundary = next.map(|c| !c.is_ascii_hexdigit()).unwrap_or(true);
            if all_hex && boundary && hex[0] == hex[1] && hex[2] == hex[3] && hex[4] == hex[5] {
                out.push('#');
                out.push(hex[0]);
                out.push(hex[2]);
                out.push(hex[4]);
                i += 7;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// `0.5` -> `.5` when the zero is not part of a larger number.
fn strip_leading_zeros(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '0'
            && chars.get(i + 1) == Some(&'.')
            && chars.get(i + 2).map(|c| c.is_ascii_digit()).unwrap_or(false)
            && is_css_boundary(out.chars().last())
        {
            i += 1; // drop the zero, keep the dot and digits
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// JS
// ---------------------------------------------------------------------------

/// Strip comments, collapse whitespace, and tighten spacing around
/// operators, all while leaving string literal contents untouched.
fn minify_js(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    let mut in_str: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(quote) = in_str {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == quote {
                in_str = None;
            }
            i += 1;
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            pending_space = true;
            continue;
        }
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
                i += 1;
            }
            i = (i + 2).min(chars.len());
            pending_space = true;
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            i += 1;
            continue;
        }

        if pending_space {
            let prev_is_op = out
                .chars()
                .last()
                .map(|p| JS_OPS.contains(p))
                .unwrap_or(true);
            if !prev_is_op && !JS_OPS.contains(c) {
                out.push(' ');
            }
            pending_space = false;
        }
        if c == '"' || c == '\'' {
            in_str = Some(c);
        }
        out.push(c);
        i += 1;
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_zero_units_keep_time_suffix() {
        assert_eq!(
            minify_css("a { margin: 0px; transition: all 0ms; }"),
            "a{margin:0;transition:all 0ms}"
        );
    }

    #[test]
    fn css_hex_and_leading_zero() {
        assert_eq!(
            minify_css("a { color: #ffcc00; opacity: 0.5; }"),
            "a{color:#fc0;opacity:.5}"
        );
    }

    #[test]
    fn js_comments_respect_strings() {
        assert_eq!(
            minify_js("var u = \"https://x\"; // note\nvar b = 1;"),
            "var u=\"https://x\";var b=1;"
        );
    }
}
