use regex::RegexBuilder;

/// Host-style glob: `*` matches any run, `?` one character, everything else
/// literally. The whole text must match.
pub fn glob_matches(pattern: &str, text: &str, case_insensitive: bool) -> bool {
    let mut expr = String::with_capacity(pattern.len() + 2);
    expr.push('^');
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            c => expr.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    expr.push('$');

    match RegexBuilder::new(&expr)
        .case_insensitive(case_insensitive)
        .build()
    {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::warn!("Ignoring unusable pattern '{pattern}': {e}");
            false
        }
    }
}
