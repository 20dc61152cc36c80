use crate::compat::String;

/// Prefixes that mark an input as a relative reference when no base is given.
const RELATIVE_PREFIXES: [&str; 3] = ["/", "./", "../"];

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Whether `input` starts with `/`, `./` or `../`
pub fn is_relative_reference(input: &str) -> bool {
    RELATIVE_PREFIXES
        .iter()
        .any(|prefix| input.starts_with(prefix))
}

/// Split leading `./` and `../` segments off a relative reference.
/// Returns (`dot_prefix`, `rest`) where `rest` keeps the slash that ended
/// the prefix, e.g. `"../../a"` gives `("../..", "/a")`.
pub fn split_dot_prefix(input: &str) -> (&str, &str) {
    let mut end = 0;
    loop {
        let rest = &input[end..];
        if rest.starts_with("./") {
            end += 2;
        } else if rest.starts_with("../") {
            end += 3;
        } else {
            break;
        }
    }
    if end == 0 {
        ("", input)
    } else {
        input.split_at(end - 1)
    }
}

/// Split on the first `?`.
/// Returns (`before_query`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a fragment used for hash routing (`#/path?query`) into its route
/// path and route query. The leading `#` is optional.
pub fn split_hash_route(hash: &str) -> (&str, Option<&str>) {
    split_query(hash.strip_prefix('#').unwrap_or(hash))
}

/// Join a route path and a route query back into a fragment body.
/// The `?` is only written when the query is non-empty.
pub fn join_hash_route(path: &str, query: &str) -> String {
    let mut fragment = String::with_capacity(path.len() + query.len() + 1);
    fragment.push_str(path);
    if !query.is_empty() {
        fragment.push('?');
        fragment.push_str(query);
    }
    fragment
}

/// Combined trim and remove tabs/newlines in single pass.
/// Removes leading/trailing C0 controls+space and internal tabs/newlines,
/// the same cleanup the URL parser applies to its input.
pub fn clean_tabs_and_newlines(input: &str) -> String {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if !has_tabs_or_newline(trimmed) {
        return String::from(trimmed);
    }

    trimmed
        .chars()
        .filter(|&c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}
