use crate::compat::{Cow, String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// application/x-www-form-urlencoded percent-encode set, minus space.
/// Everything except ASCII alphanumerics and `*-._` is encoded; space is
/// left alone here because the form serializer writes it as `+`.
/// <https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set>
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Form-urlencode one name or value into `buffer`, writing space as `+`.
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, FORM_SET) {
        if memchr::memchr(b' ', chunk.as_bytes()).is_some() {
            buffer.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode one form-urlencoded name or value.
/// `+` becomes space, malformed escapes are kept literally and invalid UTF-8
/// is replaced with U+FFFD.
pub fn form_decode(input: &str) -> String {
    let bytes: Cow<'_, [u8]> = if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(
            input
                .bytes()
                .map(|b| if b == b'+' { b' ' } else { b })
                .collect::<Vec<u8>>(),
        )
    } else {
        Cow::Borrowed(input.as_bytes())
    };
    percent_decode(&bytes).decode_utf8_lossy().into_owned()
}
