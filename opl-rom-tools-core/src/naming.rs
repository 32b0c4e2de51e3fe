//! File name policy for renamed disc images.

/// Titles longer than this many characters are truncated or flagged.
pub const MAX_TITLE_LEN: usize = 32;

/// Extension of the disc images handled by the renamer.
pub const DISC_IMAGE_EXTENSION: &str = "iso";

/// Characters that most file systems reject in a name.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Which characters a sanitized title may keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharsetPolicy {
    /// Remove only reserved file-system punctuation (`<>:"/\|?*`).
    #[default]
    Permissive,
    /// Keep only ASCII alphanumerics, `_`, `-`, `[`, `]`, `(`, `)` and space.
    Strict,
}

/// How the serial and title are combined into a file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingScheme {
    /// `"{title}.iso"`
    #[default]
    Title,
    /// `"{raw_serial}.{title}.iso"`, the layout older OPL versions expect.
    SerialTitle,
}

/// Remove the characters the policy does not allow.
///
/// Never fails; the result is empty when every character was removed.
pub fn sanitize(title: &str, policy: CharsetPolicy) -> String {
    match policy {
        CharsetPolicy::Permissive => title
            .chars()
            .filter(|c| !RESERVED_CHARS.contains(c))
            .collect(),
        CharsetPolicy::Strict => title.chars().filter(|&c| is_strict_char(c)).collect(),
    }
}

fn is_strict_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '[' | ']' | '(' | ')' | ' ')
}

/// A composed target name plus what happened to the title on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOutcome {
    /// Final file name, including the extension.
    pub file_name: String,
    /// The title was cut to [`MAX_TITLE_LEN`] characters.
    pub truncated: bool,
    /// The title is longer than [`MAX_TITLE_LEN`] and was kept as is.
    pub over_length: bool,
}

/// Compose the target file name for a disc image.
///
/// `sanitized_title` is expected to have gone through [`sanitize`] already.
pub fn build_name(
    raw_serial: &str,
    sanitized_title: &str,
    scheme: NamingScheme,
    truncate: bool,
) -> NameOutcome {
    let too_long = sanitized_title.chars().count() > MAX_TITLE_LEN;
    let title = if too_long && truncate {
        truncate_chars(sanitized_title, MAX_TITLE_LEN)
    } else {
        sanitized_title
    };

    let file_name = match scheme {
        NamingScheme::Title => format!("{}.{}", title, DISC_IMAGE_EXTENSION),
        NamingScheme::SerialTitle => {
            format!("{}.{}.{}", raw_serial, title, DISC_IMAGE_EXTENSION)
        }
    };

    NameOutcome {
        file_name,
        truncated: too_long && truncate,
        over_length: too_long && !truncate,
    }
}

/// First `max` characters of `s`, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
