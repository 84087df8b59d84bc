//! The setlist text the catalog is parsed from.
//!
//! A corpus is a run of blocks. Each block opens with a header line that
//! starts with one of the corpus' section markers, followed by one song per
//! line. Blank lines carry no meaning.

/// The setlist shipped with the site.
pub const EMBEDDED_SETLIST: &str = include_str!("../data/setlist.txt");

/// Header markers used by [`EMBEDDED_SETLIST`]. Standards and Instrumentals
/// share the saxophone, Party Music and Special Dances share the popper.
pub const EMBEDDED_MARKERS: &[&str] = &["🎉", "🎸", "🎶", "🎷", "🌴", "💖", "🤠"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    markers: Vec<String>,
}

/// One header-delimited block, borrowed from the corpus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub header: &'a str,
    pub lines: Vec<&'a str>,
}

impl Corpus {
    pub fn new<S, I, M>(text: S, markers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            text: text.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn embedded() -> Self {
        Self::new(EMBEDDED_SETLIST, EMBEDDED_MARKERS.iter().copied())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    fn is_header(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.markers.iter().any(|m| !m.is_empty() && line.starts_with(m.as_str()))
    }

    /// Split the text into blocks.
    ///
    /// Text before the first marker forms its own block whose first
    /// non-blank line serves as the header. Lines are trimmed and blank
    /// lines dropped.
    pub fn blocks(&self) -> Vec<Block<'_>> {
        let mut blocks: Vec<Block<'_>> = Vec::new();
        let mut current: Option<Block<'_>> = None;

        for raw in self.text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if self.is_header(line) {
                blocks.extend(current.take());
                current = Some(Block {
                    header: line,
                    lines: Vec::new(),
                });
                continue;
            }

            match current.as_mut() {
                Some(block) => block.lines.push(line),
                None => {
                    current = Some(Block {
                        header: line,
                        lines: Vec::new(),
                    })
                }
            }
        }

        blocks.extend(current);
        blocks
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_has_nine_blocks() {
        let corpus = Corpus::embedded();
        let blocks = corpus.blocks();
        assert_eq!(blocks.len(), 9);
        assert!(blocks[0].header.contains("Party Music / Top 40"));
        assert!(blocks[8].header.contains("Special Dances"));
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let corpus = Corpus::new("# One\n\nA - B\n\n\n# Two\nC - D\n", ["#"]);
        let blocks = corpus.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header, "# One");
        assert_eq!(blocks[0].lines, vec!["A - B"]);
        assert_eq!(blocks[1].lines, vec!["C - D"]);
    }

    #[test]
    fn test_preamble_becomes_block() {
        let corpus = Corpus::new("Loose header\nA - B\n# Real\nC - D", ["#"]);
        let blocks = corpus.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header, "Loose header");
        assert_eq!(blocks[0].lines, vec!["A - B"]);
    }

    #[test]
    fn test_header_only_block() {
        let corpus = Corpus::new("# Empty\n# Full\nA - B", ["#"]);
        let blocks = corpus.blocks();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].lines.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(Corpus::new("", ["#"]).blocks().is_empty());
        assert!(Corpus::new("\n  \n", ["#"]).blocks().is_empty());
    }
}
