//! Single-pass manifest reader.

use super::line::{classify, ManifestLine};
use std::io::{self, BufRead};

/// A manifest line that survives filtering (blank and comment lines are dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestItem {
    /// Download target, trimmed. `line_no` is 1-based.
    Url { line_no: usize, url: String },
    /// Line that is neither blank, comment nor URL; reported and not downloaded.
    Invalid { line_no: usize, text: String },
}

/// Iterator over the relevant lines of a manifest stream.
///
/// Reads lazily, one line per `next()`. Bytes that are not valid UTF-8 are
/// replaced rather than treated as errors. After an I/O error the iterator is
/// fused and yields `None`.
pub struct ManifestReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> ManifestReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ManifestReader<R> {
    type Item = io::Result<ManifestItem>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_no += 1;
                    let text = String::from_utf8_lossy(&self.buf);
                    match classify(&text) {
                        ManifestLine::Blank | ManifestLine::Comment => continue,
                        ManifestLine::Url(url) => {
                            return Some(Ok(ManifestItem::Url {
                                line_no: self.line_no,
                                url: url.to_string(),
                            }))
                        }
                        ManifestLine::Invalid(text) => {
                            return Some(Ok(ManifestItem::Invalid {
                                line_no: self.line_no,
                                text: text.to_string(),
                            }))
                        }
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn items(text: &str) -> Vec<ManifestItem> {
        ManifestReader::new(Cursor::new(text.as_bytes().to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let got = items("# header\n\n   \nhttps://example.org/file1.jar\n#https://example.org/x.jar\n");
        assert_eq!(
            got,
            vec![ManifestItem::Url {
                line_no: 4,
                url: "https://example.org/file1.jar".to_string()
            }]
        );
    }

    #[test]
    fn keeps_order_and_reports_invalid_lines() {
        let got = items("https://example.org/a.jar\nnot-a-url\r\nhttp://example.org/b.jar?v=2");
        assert_eq!(
            got,
            vec![
                ManifestItem::Url {
                    line_no: 1,
                    url: "https://example.org/a.jar".to_string()
                },
                ManifestItem::Invalid {
                    line_no: 2,
                    text: "not-a-url".to_string()
                },
                ManifestItem::Url {
                    line_no: 3,
                    url: "http://example.org/b.jar?v=2".to_string()
                },
            ]
        );
    }

    #[test]
    fn non_utf8_bytes_do_not_abort() {
        let mut data = b"\xff\xfe garbage\n".to_vec();
        data.extend_from_slice(b"https://example.org/ok.jar\n");
        let got = items_bytes(data);
        assert_eq!(got.len(), 2);
        assert!(matches!(got[0], ManifestItem::Invalid { line_no: 1, .. }));
        assert_eq!(
            got[1],
            ManifestItem::Url {
                line_no: 2,
                url: "https://example.org/ok.jar".to_string()
            }
        );
    }

    fn items_bytes(data: Vec<u8>) -> Vec<ManifestItem> {
        ManifestReader::new(Cursor::new(data))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn io_error_is_yielded_once_then_fused() {
        let mut reader = ManifestReader::new(io::BufReader::new(FailingReader));
        assert!(matches!(reader.next(), Some(Err(_))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn property_output_never_contains_blank_or_comment() {
        let lines = [
            "",
            "#",
            "# https://example.org/c.jar",
            "https://example.org/1.jar",
            "  ",
            "junk",
            "http://example.org/2.jar",
            "\t#x",
        ];
        let text = lines.join("\n");
        let urls: Vec<String> = items(&text)
            .into_iter()
            .filter_map(|item| match item {
                ManifestItem::Url { url, .. } => Some(url),
                ManifestItem::Invalid { .. } => None,
            })
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.org/1.jar".to_string(),
                "http://example.org/2.jar".to_string()
            ]
        );
        assert!(urls.iter().all(|u| !u.is_empty() && !u.starts_with('#')));
    }
}
