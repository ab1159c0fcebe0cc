/// The substitution point in a format template.
///
/// The first occurrence is replaced by the rendered duration. `%%` renders a literal `%`.
pub const PLACEHOLDER: &str = "%s";

/// Substitutes `value` into the first placeholder of `template`.
///
/// Placeholders after the first are left verbatim. A `%` that starts neither `%s` nor `%%`
/// is copied as-is. If the template has no placeholder at all, `value` is returned alone.
pub(crate) fn substitute(template: &str, value: &str) -> String {
    let mut result = String::with_capacity(template.len().saturating_add(value.len()));
    let mut substituted = false;
    let mut rest = template;

    while let Some((before, after)) = rest.split_once('%') {
        result.push_str(before);

        if let Some(tail) = after.strip_prefix('%') {
            result.push('%');
            rest = tail;
        } else if let Some(tail) = after.strip_prefix('s').filter(|_| !substituted) {
            result.push_str(value);
            substituted = true;
            rest = tail;
        } else {
            result.push('%');
            rest = after;
        }
    }

    if !substituted {
        return value.to_owned();
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn bare_placeholder() {
        assert_eq!(substitute(PLACEHOLDER, "1.50 s"), "1.50 s");
    }

    #[test]
    fn placeholder_inside_text() {
        assert_eq!(substitute("took %s", "500 ns"), "took 500 ns");
        assert_eq!(substitute("%s elapsed", "500 ns"), "500 ns elapsed");
        assert_eq!(substitute("a = %s!", "1.00 ms"), "a = 1.00 ms!");
    }

    #[test]
    fn no_placeholder_returns_value_alone() {
        assert_eq!(substitute("nothing to see", "1.00 ms"), "1.00 ms");
        assert_eq!(substitute("", "1.00 ms"), "1.00 ms");
        assert_eq!(substitute("100%%", "1.00 ms"), "1.00 ms");
    }

    #[test]
    fn only_first_placeholder_is_substituted() {
        assert_eq!(substitute("%s and %s", "1 ns"), "1 ns and %s");
    }

    #[test]
    fn escaped_percent() {
        assert_eq!(substitute("100%% of %s", "2 ns"), "100% of 2 ns");
        assert_eq!(substitute("%%s is %s", "2 ns"), "%s is 2 ns");
    }

    #[test]
    fn stray_percent_is_literal() {
        assert_eq!(substitute("50% in %s", "3 ns"), "50% in 3 ns");
        assert_eq!(substitute("%s %", "3 ns"), "3 ns %");
        assert_eq!(substitute("%d %s", "3 ns"), "%d 3 ns");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(substitute("größe: %s ✓", "4.00 μs"), "größe: 4.00 μs ✓");
    }
}
