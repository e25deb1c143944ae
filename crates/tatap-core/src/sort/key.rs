//! Stem/extension split of a filename.

/// A borrowed view of a filename split at its effective dot.
///
/// The effective dot is the last `.` that is not part of the leading run of
/// dots. `.bashrc` and `...` therefore have no extension: the whole name is
/// the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameKey<'a> {
    /// Everything before the effective dot.
    pub stem: &'a str,
    /// Everything after the effective dot. `None` when there is no effective
    /// dot; `Some("")` for a trailing dot such as `"notes."`.
    pub extension: Option<&'a str>,
    /// Byte offset of the effective dot, or the name length when absent.
    pub dot: usize,
}

impl<'a> FilenameKey<'a> {
    /// Split `name` at its effective dot.
    pub fn parse(name: &'a str) -> Self {
        let dot = effective_dot(name);
        let extension = if dot < name.len() {
            Some(&name[dot + 1..])
        } else {
            None
        };
        Self {
            stem: &name[..dot],
            extension,
            dot,
        }
    }

    /// `true` when the name has an effective dot (possibly with an empty
    /// extension after it).
    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }
}

/// Byte offset of the effective dot in `name`, or `name.len()` if none.
pub fn effective_dot(name: &str) -> usize {
    let bytes = name.as_bytes();
    let leading = bytes.iter().take_while(|&&b| b == b'.').count();

    bytes
        .iter()
        .enumerate()
        .skip(leading + 1)
        .rev()
        .find(|(_, &b)| b == b'.')
        .map_or(bytes.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_dot() {
        let key = FilenameKey::parse("archive.tar.gz");
        assert_eq!(key.stem, "archive.tar");
        assert_eq!(key.extension, Some("gz"));
        assert_eq!(key.dot, 11);
    }

    #[test]
    fn no_dot_is_all_stem() {
        let key = FilenameKey::parse("Makefile");
        assert_eq!(key.stem, "Makefile");
        assert_eq!(key.extension, None);
        assert_eq!(key.dot, 8);
        assert!(!key.has_extension());
    }

    /// Hidden files keep their leading dot in the stem.
    #[test]
    fn leading_dot_is_not_an_extension() {
        let key = FilenameKey::parse(".bashrc");
        assert_eq!(key.stem, ".bashrc");
        assert_eq!(key.extension, None);
    }

    #[test]
    fn hidden_file_with_extension() {
        let key = FilenameKey::parse("..config.toml");
        assert_eq!(key.stem, "..config");
        assert_eq!(key.extension, Some("toml"));
    }

    #[test]
    fn pure_dot_names_have_no_extension() {
        for name in [".", "..", "..."] {
            let key = FilenameKey::parse(name);
            assert_eq!(key.stem, name, "stem of {name:?}");
            assert_eq!(key.extension, None, "extension of {name:?}");
            assert_eq!(key.dot, name.len());
        }
    }

    #[test]
    fn trailing_dot_gives_empty_extension() {
        let key = FilenameKey::parse("notes.");
        assert_eq!(key.stem, "notes");
        assert_eq!(key.extension, Some(""));
        assert!(key.has_extension());
    }

    #[test]
    fn empty_name() {
        let key = FilenameKey::parse("");
        assert_eq!(key.stem, "");
        assert_eq!(key.extension, None);
        assert_eq!(key.dot, 0);
    }

    #[test]
    fn multibyte_names_split_on_byte_offsets() {
        let key = FilenameKey::parse("résumé.pdf");
        assert_eq!(key.stem, "résumé");
        assert_eq!(key.extension, Some("pdf"));
    }
}
