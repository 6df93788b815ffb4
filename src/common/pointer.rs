/// Escape a single JSON Pointer reference token (RFC 6901).
///
/// `~` becomes `~0` and `/` becomes `~1`; the order matters so that an
/// escaped `/` is not escaped twice.
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// `pointer` extended by one (escaped) reference token. The root is `""`.
pub fn push_token(pointer: &str, token: &str) -> String {
    format!("{}/{}", pointer, escape_token(token))
}

/// The `$id` generated for the schema at `pointer`, e.g.
/// `/properties/a/properties/name` gives `#properties/a/properties/name`.
pub fn generated_id(pointer: &str) -> String {
    format!("#{}", pointer.strip_prefix('/').unwrap_or(pointer))
}
