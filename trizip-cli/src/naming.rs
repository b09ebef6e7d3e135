//! Output file naming.
//!
//! A compressed file keeps its original name recoverable without any header
//! field: the extension dot becomes `_`, a `Y`/`N` marker records whether
//! there was an extension, and a method tag is appended.
//!
//! ```text
//! report.txt  --huffman-->  report_txtY_huf.opt_huf
//! Makefile    --lzw------>  MakefileN_lzw.opt_lzw
//! ```

use crate::commands::Method;
use thiserror::Error;

/// A name that cannot be mapped back to its original.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// The name does not end with the tag of the requested method.
    #[error("'{name}' does not end with the {method} tag '{tag}'")]
    MissingTag {
        /// Offending file name.
        name: String,
        /// Method whose tag was expected.
        method: Method,
        /// Expected suffix.
        tag: &'static str,
    },
    /// The character before the tag is not `Y` or `N`.
    #[error("'{name}' has no Y/N extension marker before its tag")]
    MissingMarker {
        /// Offending file name.
        name: String,
    },
    /// No method tag matches the name.
    #[error("cannot infer the method of '{name}'; pass --method")]
    UnknownMethod {
        /// Offending file name.
        name: String,
    },
}

/// Name of the compressed form of `name`.
pub fn compressed_name(name: &str, method: Method) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => format!("{stem}_{ext}Y{}", method.tag()),
        // A trailing dot is an empty extension.
        Some((stem, _)) => format!("{stem}N{}", method.tag()),
        None => format!("{name}N{}", method.tag()),
    }
}

/// Original name of a file produced by [`compressed_name`].
pub fn decompressed_name(name: &str, method: Method) -> Result<String, NamingError> {
    let tag = method.tag();
    let marked = name
        .strip_suffix(tag)
        .ok_or_else(|| NamingError::MissingTag {
            name: name.to_string(),
            method,
            tag,
        })?;

    if let Some(stem) = marked.strip_suffix('N') {
        return Ok(stem.to_string());
    }
    let base = marked
        .strip_suffix('Y')
        .ok_or_else(|| NamingError::MissingMarker {
            name: name.to_string(),
        })?;

    Ok(match base.rsplit_once('_') {
        Some((stem, ext)) => format!("{stem}.{ext}"),
        None => base.to_string(),
    })
}

/// Method whose tag ends `name`.
pub fn detect_method(name: &str) -> Result<Method, NamingError> {
    Method::ALL
        .into_iter()
        .find(|method| name.ends_with(method.tag()))
        .ok_or_else(|| NamingError::UnknownMethod {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_name_with_extension() {
        assert_eq!(
            compressed_name("report.txt", Method::Huffman),
            "report_txtY_huf.opt_huf"
        );
        assert_eq!(
            compressed_name("archive.tar.gz", Method::Rle),
            "archive.tar_gzY_rle.opt_rle"
        );
    }

    #[test]
    fn test_compressed_name_without_extension() {
        assert_eq!(compressed_name("Makefile", Method::Lzw), "MakefileN_lzw.opt_lzw");
        assert_eq!(compressed_name("odd.", Method::Lzw), "oddN_lzw.opt_lzw");
    }

    #[test]
    fn test_names_roundtrip() {
        for name in ["report.txt", "archive.tar.gz", "Makefile", "my_notes.md", ".bashrc"] {
            for method in Method::ALL {
                let packed = compressed_name(name, method);
                assert_eq!(detect_method(&packed).unwrap(), method);
                assert_eq!(decompressed_name(&packed, method).unwrap(), name);
            }
        }
    }

    #[test]
    fn test_wrong_tag() {
        let err = decompressed_name("report_txtY_huf.opt_huf", Method::Lzw).unwrap_err();
        assert!(matches!(err, NamingError::MissingTag { .. }));
    }

    #[test]
    fn test_missing_marker() {
        let err = decompressed_name("report_huf.opt_huf", Method::Huffman).unwrap_err();
        assert!(matches!(err, NamingError::MissingMarker { .. }));
    }

    #[test]
    fn test_unknown_method() {
        assert!(matches!(
            detect_method("plain.txt").unwrap_err(),
            NamingError::UnknownMethod { .. }
        ));
    }
}
