//! Link list resource: one `url,label` pair per line, no header.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub label: String,
}

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("link list {0:?} not found")]
    NotFound(PathBuf),
    #[error("line {line}: expected `url,label`")]
    MalformedRow { line: usize },
    #[error("reading link list: {0}")]
    Io(#[from] std::io::Error),
}

pub fn load_links(path: &Path) -> Result<Vec<LinkEntry>, LinkError> {
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LinkError::NotFound(path.to_path_buf()),
        _ => LinkError::Io(e),
    })?;
    parse_links(&data)
}

/// Fields past the second are ignored. Line numbers in errors are 1-based.
pub fn parse_links(data: &str) -> Result<Vec<LinkEntry>, LinkError> {
    let mut entries = Vec::new();
    for (i, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        match (fields.next(), fields.next()) {
            (Some(url), Some(label)) => entries.push(LinkEntry {
                url: url.trim().to_string(),
                label: label.trim().to_string(),
            }),
            _ => return Err(LinkError::MalformedRow { line: i + 1 }),
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_label() {
        let links = parse_links("https://example.com, Example\nhttps://docs.rs,Docs,extra\n").unwrap();
        assert_eq!(
            links,
            vec![
                LinkEntry {
                    url: "https://example.com".into(),
                    label: "Example".into()
                },
                LinkEntry {
                    url: "https://docs.rs".into(),
                    label: "Docs".into()
                },
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let links = parse_links("\r\na,b\r\n   \r\nc,d\r\n").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].label, "d");
    }

    #[test]
    fn single_field_row_is_malformed() {
        let err = parse_links("a,b\n\njust-a-url\n").unwrap_err();
        assert!(matches!(err, LinkError::MalformedRow { line: 3 }));
    }

    #[test]
    fn empty_file_gives_no_links() {
        assert!(parse_links("").unwrap().is_empty());
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = std::env::temp_dir().join(format!("meshgen-links-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("links.csv");
        std::fs::write(&path, "https://example.com,Home\n").unwrap();

        let links = load_links(&path).unwrap();
        assert_eq!(links[0].label, "Home");

        let missing = load_links(&dir.join("nope.csv")).unwrap_err();
        assert!(matches!(missing, LinkError::NotFound(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
