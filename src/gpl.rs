//! GIMP palette (.gpl) reader.
//!
//! The format is line-oriented text:
//!
//! ```text
//! GIMP Palette
//! Name: Oil 6
//! Columns: 3
//! # by GrafxKid
//! # see https://lospec.com/palette-list/oil-6
//! 251 245 239 paper
//! 198 159 165
//! ```
//!
//! `#` lines accumulate into the palette comment; entry lines are three
//! 0-255 channel values followed by an optional label.

use std::path::Path;

use crate::error::{Result, SwatchbookError};
use crate::palette::{Palette, PaletteColor, PaletteEntry};

const MAGIC: &str = "GIMP Palette";

/// Read and parse a palette file.
pub fn read_palette(path: &Path) -> Result<Palette> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text, path)
}

/// Parse palette text. `path` is used for error messages and as the
/// fallback name when the file has no `Name:` header.
pub fn parse_str(text: &str, path: &Path) -> Result<Palette> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut name: Option<String> = None;
    let mut comment_lines: Vec<String> = Vec::new();
    let mut entries: Vec<PaletteEntry> = Vec::new();
    let mut saw_magic = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !saw_magic {
            if !line.starts_with(MAGIC) {
                return Err(parse_error(path, line_no, format!("expected '{MAGIC}' header")));
            }
            saw_magic = true;
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            let rest = rest.trim();
            if !rest.is_empty() {
                comment_lines.push(rest.to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("Name:") {
            let rest = rest.trim();
            if !rest.is_empty() {
                name = Some(rest.to_string());
            }
            continue;
        }

        // Column count is a layout hint for grid editors; irrelevant here.
        if line.strip_prefix("Columns:").is_some() {
            continue;
        }

        entries.push(parse_entry(line, path, line_no)?);
    }

    if !saw_magic {
        return Err(parse_error(path, 1, format!("expected '{MAGIC}' header")));
    }

    Ok(Palette {
        name: name.unwrap_or_else(|| file_stem(path)),
        comment: comment_lines.join("\n"),
        entries,
    })
}

fn parse_entry(line: &str, path: &Path, line_no: usize) -> Result<PaletteEntry> {
    let mut tokens = line.split_whitespace();
    let mut channel = |label: &str| -> Result<u8> {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(path, line_no, "expected 3 channel values".to_string()))?;
        token.parse::<u8>().map_err(|_| {
            parse_error(path, line_no, format!("invalid {label} channel value '{token}'"))
        })
    };

    let r = channel("red")?;
    let g = channel("green")?;
    let b = channel("blue")?;
    let label: Vec<&str> = tokens.collect();

    let color = PaletteColor::rgb(r, g, b);
    Ok(if label.is_empty() {
        PaletteEntry::new(color)
    } else {
        PaletteEntry::labeled(color, label.join(" "))
    })
}

fn parse_error(path: &Path, line: usize, message: String) -> SwatchbookError {
    SwatchbookError::PaletteParse {
        path: path.display().to_string(),
        line,
        message,
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<Palette> {
        parse_str(text, &PathBuf::from("testdata/sample.gpl"))
    }

    #[test]
    fn test_parses_complete_file() {
        let palette = parse(
            "GIMP Palette\n\
             Name: Oil 6\n\
             Columns: 3\n\
             # by GrafxKid\n\
             # see https://lospec.com/palette-list/oil-6\n\
             251 245 239 paper\n\
             198 159 165\n",
        )
        .unwrap();

        assert_eq!(palette.name, "Oil 6");
        assert_eq!(
            palette.comment,
            "by GrafxKid\nsee https://lospec.com/palette-list/oil-6"
        );
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entries[0].color, PaletteColor::rgb(251, 245, 239));
        assert_eq!(palette.entries[0].label.as_deref(), Some("paper"));
        assert_eq!(palette.entries[1].label, None);
    }

    #[test]
    fn test_name_falls_back_to_file_stem() {
        let palette = parse("GIMP Palette\n0 0 0\n").unwrap();
        assert_eq!(palette.name, "sample");
    }

    #[test]
    fn test_zero_entry_palette_is_valid() {
        let palette = parse("GIMP Palette\nName: Empty\n").unwrap();
        assert!(palette.is_empty());
        assert!(!palette.has_comment());
    }

    #[test]
    fn test_multi_word_label_is_preserved() {
        let palette = parse("GIMP Palette\n12 34 56 deep sea blue\n").unwrap();
        assert_eq!(palette.entries[0].label.as_deref(), Some("deep sea blue"));
    }

    #[test]
    fn test_missing_magic_is_an_error() {
        let err = parse("JASC-PAL\n0100\n").unwrap_err();
        assert!(err.to_string().contains("GIMP Palette"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        assert!(parse("").is_err());
    }

    #[test]
    fn test_bad_channel_reports_line_number() {
        let err = parse("GIMP Palette\n0 0 0\n0 300 0\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(":3:"), "unexpected message: {msg}");
        assert!(msg.contains("300"));
    }

    #[test]
    fn test_short_entry_line_is_an_error() {
        let err = parse("GIMP Palette\n10 20\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 channel values"));
    }

    #[test]
    fn test_bom_is_tolerated() {
        let palette = parse("\u{feff}GIMP Palette\n1 2 3\n").unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_blank_comment_lines_are_skipped() {
        let palette = parse("GIMP Palette\n#\n# real note\n#\n0 0 0\n").unwrap();
        assert_eq!(palette.comment, "real note");
    }
}
