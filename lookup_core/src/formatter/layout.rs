//! Budgeted assembly of answer blocks.
//!
//! An answer is a list of blocks separated by blank lines. Fixed blocks are
//! kept whole; the single elastic block gets whatever budget the fixed ones
//! leave. When even the fixed blocks overflow, whole trailing lines are
//! dropped (never the first block) until the elastic block has room. A
//! section label goes together with its last line.

use super::markup::{char_len, clip};

/// Below this, the elastic block is considered crowded out.
const MIN_ELASTIC: usize = 80;

const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone)]
enum Block {
    /// With `labelled`, the first line heads the rest and never stands alone.
    Fixed { lines: Vec<String>, labelled: bool },
    Elastic { text: String, cap: usize },
}

impl Block {
    fn is_empty(&self) -> bool {
        match self {
            Block::Fixed { lines, .. } => lines.is_empty(),
            Block::Elastic { text, .. } => text.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Layout {
    blocks: Vec<Block>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block of lines kept whole. Empty lines are skipped.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = non_blank(lines);
        self.blocks.push(Block::Fixed {
            lines,
            labelled: false,
        });
        self
    }

    /// A `label` line followed by `lines`. Skipped when `lines` is empty.
    pub fn section<I, S>(mut self, label: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = non_blank(lines);
        if !body.is_empty() {
            let lines = std::iter::once(label.into()).chain(body).collect();
            self.blocks.push(Block::Fixed {
                lines,
                labelled: true,
            });
        }
        self
    }

    pub fn line(self, line: impl Into<String>) -> Self {
        self.lines([line.into()])
    }

    /// The elastic block, clipped to `cap` or the remaining budget.
    pub fn elastic(mut self, text: impl Into<String>, cap: usize) -> Self {
        let text = text.into().trim().to_string();
        self.blocks.push(Block::Elastic { text, cap });
        self
    }

    fn fixed_len(&self) -> usize {
        let separators = self.blocks.len().saturating_sub(1) * BLOCK_SEPARATOR.len();
        let fixed: usize = self
            .blocks
            .iter()
            .map(|b| match b {
                Block::Fixed { lines, .. } => {
                    lines.iter().map(|l| char_len(l)).sum::<usize>() + lines.len().saturating_sub(1)
                }
                Block::Elastic { .. } => 0,
            })
            .sum();
        separators + fixed
    }

    /// Characters the elastic block would like to occupy.
    fn elastic_want(&self) -> Option<usize> {
        self.blocks.iter().find_map(|b| match b {
            Block::Elastic { text, cap } => Some(char_len(text).min(*cap)),
            Block::Fixed { .. } => None,
        })
    }

    fn fits(&self, max: usize) -> bool {
        let fixed = self.fixed_len();
        match self.elastic_want() {
            Some(want) => fixed <= max && max - fixed >= want.min(MIN_ELASTIC),
            None => fixed <= max,
        }
    }

    /// Drop the last line of the last fixed block after the first one.
    fn drop_trailing_line(&mut self) -> bool {
        let Some(idx) = self
            .blocks
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, b)| matches!(b, Block::Fixed { .. }))
            .map(|(i, _)| i)
        else {
            return false;
        };

        if let Block::Fixed { lines, labelled } = &mut self.blocks[idx] {
            lines.pop();
            let headless = *labelled && lines.len() <= 1;
            if lines.is_empty() || headless {
                self.blocks.remove(idx);
            }
        }
        true
    }

    /// Assemble into at most `max` characters.
    pub fn render(mut self, max: usize) -> String {
        self.blocks.retain(|b| !b.is_empty());
        while !self.fits(max) && self.drop_trailing_line() {}

        let budget = max.saturating_sub(self.fixed_len());
        let parts: Vec<String> = self
            .blocks
            .into_iter()
            .map(|b| match b {
                Block::Fixed { lines, .. } => lines.join("\n"),
                Block::Elastic { text, cap } => clip(&text, cap.min(budget)),
            })
            .filter(|p| !p.is_empty())
            .collect();

        // only reachable when the first block alone is longer than `max`
        clip(&parts.join(BLOCK_SEPARATOR), max)
    }
}

fn non_blank<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines
        .into_iter()
        .map(Into::into)
        .filter(|l: &String| !l.trim().is_empty())
        .collect()
}
