use regex::Regex;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""[^"]+"|[^\s"]+"#).expect("internal error - the token pattern must compile")
    })
}

/// Split a single command line into tokens.
///
/// A token is either a double-quoted segment (the quotes are stripped) or a run of non-whitespace, non-quote characters.
pub(crate) fn split_command_line(line: &str) -> Vec<String> {
    token_pattern()
        .find_iter(line)
        .map(|found| {
            let token = found.as_str();

            match token
                .strip_prefix('"')
                .and_then(|inner| inner.strip_suffix('"'))
            {
                Some(inner) => inner.to_string(),
                None => token.to_string(),
            }
        })
        .collect()
}

/// Expand the `--name=value` and `-x=value` syntax into separate tokens.
///
/// Only tokens starting with `-` are split, and only at the first `=`.
/// An empty value (ex: `--name=`) is dropped.
pub(crate) fn expand_equal_syntax<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token: &str = token.as_ref();

        match token.strip_prefix('-').and_then(|_| token.split_once('=')) {
            Some((name, value)) => {
                expanded.push(name.to_string());

                if !value.is_empty() {
                    expanded.push(value.to_string());
                }
            }
            None => expanded.push(token.to_string()),
        }
    }

    expanded
}
