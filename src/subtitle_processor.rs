use std::fmt::{self, Write as _};
use log::debug;

use crate::errors::SubtitleError;

// @module: Subtitle reading and writing

// @const: Byte-order mark some caption generators prepend to the file
const UTF8_BOM: char = '\u{feff}';

// @struct: Single caption cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionBlock {
    // @field: Index as read from the source, never written back
    pub sequence_number: i64,

    // @field: Raw "start --> end" line, passed through untouched
    pub timing: String,

    // @field: Display text, trimmed and never blank
    pub lines: Vec<String>,
}

impl CaptionBlock {
    /// Creates an empty block with the given index and timing line
    pub fn new(sequence_number: i64, timing: impl Into<String>) -> Self {
        CaptionBlock {
            sequence_number,
            timing: timing.into(),
            lines: Vec::new(),
        }
    }

    /// Creates a block with text lines - used by tests and benchmarks
    pub fn with_lines<I, S>(sequence_number: i64, timing: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CaptionBlock {
            sequence_number,
            timing: timing.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// First display line, if any
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Last display line, if any
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// All caption blocks of one subtitle file, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionFile {
    /// List of caption blocks
    pub blocks: Vec<CaptionBlock>,
}

impl CaptionFile {
    pub fn new(blocks: Vec<CaptionBlock>) -> Self {
        CaptionFile { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of display lines across all blocks
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|block| block.lines.len()).sum()
    }

    /// Parse SRT text into caption blocks.
    ///
    /// Each block is read in three steps: the next non-blank line must be an
    /// integer index, the line right after it is kept verbatim as the timing
    /// line, and text lines follow until a blank line. The first text line is
    /// always consumed even when blank, so a block cannot end before it has
    /// started. Blank lines are never stored and text lines are trimmed.
    ///
    /// A non-integer index rejects the whole file. Input that ends in the middle
    /// of a block yields that block with whatever was read.
    pub fn parse_srt_string(content: &str) -> Result<Self, SubtitleError> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let mut lines = content.lines().enumerate().map(|(idx, line)| (idx + 1, line));
        let mut blocks = Vec::new();

        loop {
            // Index line
            let Some((line_number, raw_index)) = lines.by_ref().find(|(_, line)| !line.trim().is_empty()) else {
                break;
            };
            let index_text = raw_index.trim();
            let sequence_number = index_text.parse::<i64>().map_err(|_| SubtitleError::MalformedIndex {
                line_number,
                content: index_text.to_string(),
            })?;

            // Timing line
            let Some((_, timing)) = lines.next() else {
                debug!("Input ended after index {} without a timing line", sequence_number);
                blocks.push(CaptionBlock::new(sequence_number, String::new()));
                break;
            };
            let mut block = CaptionBlock::new(sequence_number, timing);

            // Text lines
            let mut first = true;
            for (_, text) in lines.by_ref() {
                let text = text.trim();
                if text.is_empty() {
                    if first {
                        first = false;
                        continue;
                    }
                    break;
                }
                first = false;
                block.lines.push(text.to_string());
            }

            blocks.push(block);
        }

        Ok(CaptionFile { blocks })
    }

    /// Render the blocks back to SRT text, numbering them from `first_index`.
    ///
    /// The source indices are discarded. Blocks are separated by one blank line
    /// and no blank line follows the last block.
    pub fn to_srt_string(&self, first_index: usize) -> String {
        let mut output = String::new();
        for (position, block) in self.blocks.iter().enumerate() {
            if position > 0 {
                output.push('\n');
            }
            // Writing to a String cannot fail
            let _ = writeln!(output, "{}", first_index + position);
            let _ = writeln!(output, "{}", block.timing);
            for line in &block.lines {
                let _ = writeln!(output, "{}", line);
            }
        }
        output
    }
}

impl fmt::Display for CaptionFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_srt_string(0))
    }
}
