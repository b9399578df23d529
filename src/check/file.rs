//! File extension check

/// True if the extension of `filename` is one of `accepted`.
///
/// The extension is taken from the last path segment, starting at its last
/// `.` and including the dot (`"archive.tar.gz"` has extension `".gz"`). A
/// name without a dot has an empty extension. Comparison is case-sensitive,
/// and accepted extensions are written with their leading dot.
///
/// # Example
///
/// ```rust
/// use tollgate::check::file_is_valid_extension;
///
/// assert!(file_is_valid_extension("example.jpg", &[".jpg", ".png"]));
/// assert!(!file_is_valid_extension("example.jpg", &[".doc", ".pdf"]));
/// ```
pub fn file_is_valid_extension<S: AsRef<str>>(filename: &str, accepted: &[S]) -> bool {
    let extension = extension_of(filename);
    accepted.iter().any(|candidate| candidate.as_ref() == extension)
}

fn extension_of(filename: &str) -> &str {
    let name = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    match name.rfind('.') {
        Some(dot) => &name[dot..],
        None => "",
    }
}
