// src/core/html.rs
//! Escaping and tiny element helpers for emitted markup. Everything that
//! originates in the data files goes through [`esc`] before it reaches a
//! page; the builders here exist so call sites cannot forget that.

/// Escape text for use in HTML content or attribute values.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<a href=...>` with escaped href and label.
pub fn a(href: &str, label: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, esc(href), esc(label))
}

/// `<img>` with escaped src and alt.
pub fn img(src: &str, alt: &str) -> String {
    format!(r#"<img src="{}" alt="{}">"#, esc(src), esc(alt))
}

/// Decorative icon span; `name` must be a known icon key, not user data.
pub fn icon(name: &str) -> String {
    format!(r#"<span class="icon icon-{name}" aria-hidden="true"></span>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esc_covers_the_five_specials() {
        assert_eq!(esc(r#"<b>"a" & 'b'</b>"#), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn anchors_escape_both_sides() {
        assert_eq!(
            a("/x?a=1&b=2", "A & B"),
            r#"<a href="/x?a=1&amp;b=2">A &amp; B</a>"#
        );
    }

    #[test]
    fn icons_carry_the_key() {
        assert_eq!(icon("globe"), r#"<span class="icon icon-globe" aria-hidden="true"></span>"#);
    }
}
