//! Line ranges carrying the mirrored-text tint.
//!
//! Chiasmation appends whole lines, so marks are tracked per line rather
//! than per byte. Ranges are adjusted as lines are inserted and removed so
//! the tint stays on the text it was applied to.

use std::ops::Range;

/// A set of half-open line ranges.
#[derive(Debug, Clone, Default)]
pub struct LineMarks {
    ranges: Vec<Range<usize>>,
}

impl LineMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a range of lines. Empty ranges are ignored.
    pub fn mark(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.ranges.push(range);
        }
    }

    /// Whether a line is inside any marked range.
    pub fn is_marked(&self, line: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// A line was inserted at `at`. Ranges after it shift down; a range the
    /// insertion lands strictly inside grows to keep covering its text.
    pub fn adjust_for_insert(&mut self, at: usize) {
        for range in &mut self.ranges {
            if at <= range.start {
                range.start += 1;
                range.end += 1;
            } else if at < range.end {
                range.end += 1;
            }
        }
    }

    /// The line at `at` was removed. Ranges after it shift up; a range
    /// containing it shrinks, and collapsed ranges are dropped.
    pub fn adjust_for_remove(&mut self, at: usize) {
        for range in &mut self.ranges {
            if at < range.start {
                range.start -= 1;
                range.end -= 1;
            } else if at < range.end {
                range.end -= 1;
            }
        }
        self.ranges.retain(|r| !r.is_empty());
    }
}
