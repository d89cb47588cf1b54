//! The paginated index cursor.
//!
//! A small explicit state machine that hands out grid coordinates for a
//! stream of header and entry blocks. One consumer owns one cursor and
//! calls it in order — header, then that group's entries, groups in
//! sorted order. Rows are absolute sheet rows; a page is a
//! `page_height`-row vertical slice, filled column-group by column-group
//! before the next page opens.

use std::fmt;

use rollbook_core::Student;

use crate::config::{LayoutConfig, ENTRY_ROWS, GROUP_WIDTH, HEADER_ROWS};
use crate::error::LayoutError;
use crate::group::LetterGroup;

/// A position in the index grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub page: usize,
    /// Column-group index on the page.
    pub group: usize,
    /// Absolute row on the sheet.
    pub row: usize,
}

impl GridPosition {
    /// Physical sheet column of one of the group's sub-columns
    /// (0 = label, 1 = value, 2 = tag).
    pub fn column(&self, sub: usize) -> usize {
        self.group * GROUP_WIDTH + sub
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}g{}r{}", self.page, self.group, self.row)
    }
}

/// Where a letter header lands, plus its row span for cell merging.
#[derive(Debug, Clone, Copy)]
pub struct HeaderPosition {
    pub anchor: GridPosition,
    pub rows: usize,
}

/// Where one index entry lands. Three sub-column slots via
/// [`GridPosition::column`].
#[derive(Debug, Clone, Copy)]
pub struct EntryPosition {
    pub cell: GridPosition,
}

#[derive(Debug)]
pub struct PageCursor {
    cfg: LayoutConfig,
    page: usize,
    group: usize,
    row: usize,
    /// Whether the current page's first column-group opened with a header.
    /// Later column-groups on the page shift their start down one row to
    /// match, whatever the first column opened with.
    page_led_with_header: bool,
    opened: bool,
}

impl PageCursor {
    pub fn new(cfg: LayoutConfig) -> Result<Self, LayoutError> {
        cfg.validate()?;
        let row = cfg.first_page_offset;
        Ok(Self {
            cfg,
            page: 0,
            group: 0,
            row,
            page_led_with_header: false,
            opened: false,
        })
    }

    /// Allocate a 3-row letter-header block.
    pub fn next_header(&mut self) -> HeaderPosition {
        let buffer = self.cfg.header_buffer;
        let start = self.cfg.header_start;
        HeaderPosition {
            anchor: self.allocate(HEADER_ROWS, buffer, start, true),
            rows: HEADER_ROWS,
        }
    }

    /// Allocate a 1-row entry block.
    pub fn next_entry(&mut self) -> EntryPosition {
        let buffer = self.cfg.entry_buffer;
        let start = self.cfg.entry_start;
        EntryPosition {
            cell: self.allocate(ENTRY_ROWS, buffer, start, false),
        }
    }

    /// Pages touched so far (the current page index plus one).
    pub fn pages(&self) -> usize {
        self.page + 1
    }

    fn allocate(&mut self, rows: usize, buffer: usize, start: usize, is_header: bool) -> GridPosition {
        if !self.opened {
            // The very first block opens page 0.
            self.page_led_with_header = is_header;
            self.opened = true;
        }

        let page_end = (self.page + 1) * self.cfg.page_height;
        if self.row < page_end - buffer {
            // Fits in the current column.
        } else if self.group + 1 < self.cfg.column_groups {
            // Wrap to the next column-group on the same page.
            self.group += 1;
            self.row = self.page_base() + start + usize::from(self.page_led_with_header);
        } else {
            // Page full: open the next one.
            self.page += 1;
            self.group = 0;
            self.row = self.page_base() + start;
            self.page_led_with_header = is_header;
        }

        let position = GridPosition { page: self.page, group: self.group, row: self.row };
        self.row += rows;
        position
    }

    fn page_base(&self) -> usize {
        let base = self.page * self.cfg.page_height;
        if self.page == 0 {
            base + self.cfg.first_page_offset
        } else {
            base
        }
    }
}

/// A letter group with every block placed.
#[derive(Debug)]
pub struct PlacedGroup {
    pub letter: char,
    pub header: HeaderPosition,
    pub entries: Vec<PlacedEntry>,
}

#[derive(Debug)]
pub struct PlacedEntry {
    pub student: Student,
    pub position: EntryPosition,
}

/// Drive one cursor over the grouped sequence in the required order.
/// Returns the placements plus nothing else — rendering is the caller's
/// job.
pub fn lay_out(
    groups: impl IntoIterator<Item = LetterGroup>,
    cfg: &LayoutConfig,
) -> Result<Vec<PlacedGroup>, LayoutError> {
    let mut cursor = PageCursor::new(cfg.clone())?;
    let mut placed = Vec::new();
    for group in groups {
        let header = cursor.next_header();
        let entries = group
            .students
            .into_iter()
            .map(|student| PlacedEntry { student, position: cursor.next_entry() })
            .collect();
        placed.push(PlacedGroup { letter: group.letter, header, entries });
    }
    Ok(placed)
}
