//! Path and string helpers shared by the actions

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use shellexpand::tilde;

/// Derives the temporary sibling of `file` used for in-place transforms
///
/// The infix goes in front of the final extension: `p1.tiff` becomes
/// `p1.bookworm.tiff`. A name made only of leading dots and an extension,
/// such as `.pdf`, becomes `.bookworm.pdf`. A name without any extension
/// is treated as all extension, so `page` becomes `.bookworm.page`.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use bookworm::utils::temp_file_name;
///
/// assert_eq!(
///     temp_file_name(Path::new("scans/p1.tiff"), ".bookworm."),
///     PathBuf::from("scans/p1.bookworm.tiff")
/// );
/// ```
pub fn temp_file_name(file: &Path, infix: &str) -> PathBuf {
    let name = file.file_name().unwrap_or_default();
    let Some(name) = name.to_str() else {
        return file.with_file_name(raw_temp_file_name(name, infix));
    };

    let dots = name.len() - name.trim_start_matches('.').len();
    let (leading, rest) = name.split_at(dots);

    let temp_name = match rest.rfind('.') {
        Some(index) => format!("{leading}{}{infix}{}", &rest[..index], &rest[index + 1..]),
        // `.pdf`: the leading dot belongs to the infix
        None if dots > 0 => format!("{}{infix}{rest}", &leading[1..]),
        None => format!("{infix}{rest}"),
    };

    file.with_file_name(temp_name)
}

/// Same split for names that are not valid UTF-8, keeping their bytes intact
fn raw_temp_file_name(name: &OsStr, infix: &str) -> OsString {
    let name = Path::new(name);
    let mut temp_name = OsString::new();

    match (name.file_stem(), name.extension()) {
        (Some(stem), Some(extension)) => {
            temp_name.push(stem);
            temp_name.push(infix);
            temp_name.push(extension);
        }
        (stem, _) => {
            temp_name.push(infix);
            temp_name.push(stem.unwrap_or_default());
        }
    }

    temp_name
}

/// Joins the reserved subdirectory onto `directory`
pub fn temp_directory(directory: &Path, subdirectory: &str) -> PathBuf {
    directory.join(subdirectory)
}

/// Encloses `s` in exactly one pair of double quotes
///
/// Quotes already present at either end are kept rather than doubled, so
/// quoting is idempotent.
///
/// # Examples
/// ```
/// use bookworm::utils::quote;
///
/// assert_eq!(quote("my scans/p1.tiff"), "\"my scans/p1.tiff\"");
/// assert_eq!(quote(&quote("p1.tiff")), quote("p1.tiff"));
/// ```
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    if !s.starts_with('"') {
        quoted.push('"');
    }
    quoted.push_str(s);
    if !s.ends_with('"') {
        quoted.push('"');
    }
    quoted
}

/// Expands a leading `~` in a user supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(tilde(raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFIX: &str = ".bookworm.";

    #[test]
    fn test_temp_file_name() {
        assert_eq!(
            temp_file_name(Path::new("p1.tiff"), INFIX),
            PathBuf::from("p1.bookworm.tiff")
        );
        assert_eq!(
            temp_file_name(Path::new("/book/scans/p1.tiff"), INFIX),
            PathBuf::from("/book/scans/p1.bookworm.tiff")
        );
        assert_eq!(
            temp_file_name(Path::new("archive.tar.gz"), INFIX),
            PathBuf::from("archive.tar.bookworm.gz")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_temp_file_name_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let file = Path::new("scans").join(OsStr::from_bytes(b"p\xff.tiff"));

        assert_eq!(
            temp_file_name(&file, INFIX),
            Path::new("scans").join(OsStr::from_bytes(b"p\xff.bookworm.tiff"))
        );
    }

    #[test]
    fn test_temp_file_name_without_base_name() {
        assert_eq!(
            temp_file_name(Path::new(".pdf"), INFIX),
            PathBuf::from(".bookworm.pdf")
        );
        assert_eq!(
            temp_file_name(Path::new("book/.djvu"), INFIX),
            PathBuf::from("book/.bookworm.djvu")
        );
    }

    #[test]
    fn test_temp_file_name_dotfile_with_extension() {
        assert_eq!(
            temp_file_name(Path::new(".cover.tiff"), INFIX),
            PathBuf::from(".cover.bookworm.tiff")
        );
    }

    #[test]
    fn test_temp_file_name_without_extension() {
        assert_eq!(
            temp_file_name(Path::new("page"), INFIX),
            PathBuf::from(".bookworm.page")
        );
    }

    #[test]
    fn test_temp_directory() {
        assert_eq!(
            temp_directory(Path::new("/foo/bar/baz/quux/"), "__bookworm__"),
            PathBuf::from("/foo/bar/baz/quux/__bookworm__")
        );
        assert_eq!(
            temp_directory(Path::new(""), "__bookworm__"),
            PathBuf::from("__bookworm__")
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("foo bar baz quux!"), "\"foo bar baz quux!\"");
        assert_eq!(quote("\"foo bar baz quux!\""), "\"foo bar baz quux!\"");
        assert_eq!(quote("\"foo bar baz quux!"), "\"foo bar baz quux!\"");
        assert_eq!(quote("foo bar baz quux!\""), "\"foo bar baz quux!\"");
    }

    #[test]
    fn test_expand_path_keeps_plain_paths() {
        assert_eq!(expand_path("scans/p1.tiff"), PathBuf::from("scans/p1.tiff"));
    }
}
