/*!
 * Removal of rolling-caption overlap lines.
 *
 * Auto-generated captions often repeat the last line of a cue as the first
 * line of the next one. Cleaning runs in two separate passes over the block
 * vector:
 *
 * 1. Walking backward from the last block to the second, drop the first line
 *    of a block when it equals the last line of the block before it. Walking
 *    backward keeps every predecessor unmodified at the time it is compared.
 * 2. Walking forward, drop every block that no longer has any lines.
 */

use log::debug;

use crate::subtitle_processor::{CaptionBlock, CaptionFile};

/// Counters describing what a cleaning run removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Overlap lines stripped in the first pass
    pub lines_removed: usize,
    /// Empty blocks dropped in the second pass
    pub blocks_removed: usize,
}

/// Pass 1: strip leading lines that repeat the predecessor's last line.
///
/// Returns the number of lines removed. At most one line is removed per block.
pub fn strip_overlap_lines(blocks: &mut [CaptionBlock]) -> usize {
    let mut removed = 0;
    for i in (1..blocks.len()).rev() {
        let (head, tail) = blocks.split_at_mut(i);
        let previous = &head[i - 1];
        let current = &mut tail[0];

        let is_overlap = match (current.first_line(), previous.last_line()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        };
        if is_overlap {
            debug!("Block {} repeats previous line {:?}", current.sequence_number, previous.last_line().unwrap_or_default());
            current.lines.remove(0);
            removed += 1;
        }
    }
    removed
}

/// Pass 2: keep only blocks that still have text, preserving order.
///
/// Returns the kept blocks and the number dropped.
pub fn drop_empty_blocks(blocks: Vec<CaptionBlock>) -> (Vec<CaptionBlock>, usize) {
    let before = blocks.len();
    let kept: Vec<CaptionBlock> = blocks.into_iter().filter(|block| !block.is_empty()).collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Run both passes over a parsed file.
pub fn remove_overlaps(file: CaptionFile) -> (CaptionFile, DedupStats) {
    let mut blocks = file.blocks;
    let lines_removed = strip_overlap_lines(&mut blocks);
    let (blocks, blocks_removed) = drop_empty_blocks(blocks);

    (
        CaptionFile::new(blocks),
        DedupStats {
            lines_removed,
            blocks_removed,
        },
    )
}
