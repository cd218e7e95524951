use crate::error::{GsheetError, Result};
use std::fmt;
use std::str::FromStr;

/// A spreadsheet column, 1-based (`A` = 1, `Z` = 26, `AA` = 27)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u32);

impl Column {
    pub const A: Column = Column(1);
    pub const B: Column = Column(2);
    pub const G: Column = Column(7);

    /// Create a column from its 1-based index
    pub fn new(index: u32) -> Result<Self> {
        if index == 0 {
            return Err(GsheetError::InvalidColumn(
                "column index is 1-based, got 0".to_string(),
            ));
        }
        Ok(Column(index))
    }

    /// Parse column letters such as "G" or "AB" (case-insensitive)
    pub fn from_letters(letters: &str) -> Result<Self> {
        let letters = letters.trim();
        if letters.is_empty() {
            return Err(GsheetError::InvalidColumn("empty column letters".to_string()));
        }

        let mut index: u32 = 0;
        for ch in letters.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(GsheetError::InvalidColumn(format!(
                    "'{}' contains non-letter '{}'",
                    letters, ch
                )));
            }
            let digit = (ch.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
            index = index
                .checked_mul(26)
                .and_then(|i| i.checked_add(digit))
                .ok_or_else(|| {
                    GsheetError::InvalidColumn(format!("'{}' is out of range", letters))
                })?;
        }

        Ok(Column(index))
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// Render the column as letters (bijective base 26)
    pub fn letters(self) -> String {
        let mut out = Vec::new();
        let mut n = self.0;
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        out.iter().rev().collect()
    }

    /// The column `n` places to the right
    pub fn offset(self, n: u32) -> Result<Column> {
        self.0.checked_add(n).map(Column).ok_or_else(|| {
            GsheetError::InvalidColumn(format!("{} + {} is out of range", self, n))
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

impl FromStr for Column {
    type Err = GsheetError;

    fn from_str(s: &str) -> Result<Self> {
        Column::from_letters(s)
    }
}

/// A single cell, 1-based like spreadsheet A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub column: Column,
    pub row: u32,
}

impl CellRef {
    pub fn new(column: Column, row: u32) -> Result<Self> {
        if row == 0 {
            return Err(GsheetError::InvalidCell(format!(
                "row is 1-based, got 0 in column {}",
                column
            )));
        }
        Ok(CellRef { column, row })
    }

    /// The cell `n` columns to the right on the same row
    pub fn right(self, n: u32) -> Result<CellRef> {
        Ok(CellRef {
            column: self.column.offset(n)?,
            row: self.row,
        })
    }

    /// The cell `n` rows further down in the same column
    pub fn down(self, n: u32) -> Result<CellRef> {
        let row = self.row.checked_add(n).ok_or_else(|| {
            GsheetError::InvalidCell(format!("{} + {} rows is out of range", self, n))
        })?;
        Ok(CellRef {
            column: self.column,
            row,
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellRef {
    type Err = GsheetError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| GsheetError::InvalidCell(format!("'{}' has no row number", s)))?;
        let (letters, digits) = s.split_at(split);
        let column = Column::from_letters(letters)
            .map_err(|e| GsheetError::InvalidCell(format!("'{}': {}", s, e)))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| GsheetError::InvalidCell(format!("'{}' has an invalid row number", s)))?;
        CellRef::new(column, row)
    }
}

/// A rectangular block of cells given by its top-left and bottom-right corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn single(cell: CellRef) -> Self {
        CellRange {
            start: cell,
            end: cell,
        }
    }

    /// A block anchored at `anchor` spanning `width` columns and `height` rows
    ///
    /// Fails when either dimension is zero or the block runs past the last
    /// addressable row or column.
    pub fn from_anchor(anchor: CellRef, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GsheetError::InvalidCell(format!(
                "block at {} must be at least 1x1, got {}x{}",
                anchor, width, height
            )));
        }
        Ok(CellRange {
            start: anchor,
            end: anchor.right(width - 1)?.down(height - 1)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.end.column.index() - self.start.column.index() + 1
    }

    pub fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// A1 address qualified with the tab: `Sheet1!G19:H68`, or `Sheet1!B4`
    /// for a single cell
    pub fn to_a1(&self, tab_id: &str) -> String {
        if self.start == self.end {
            format!("{}!{}", tab_id, self.start)
        } else {
            format!("{}!{}:{}", tab_id, self.start, self.end)
        }
    }
}

/// Render hours as user-facing text with exactly two decimals
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        let cases = [
            (1, "A"),
            (7, "G"),
            (26, "Z"),
            (27, "AA"),
            (52, "AZ"),
            (53, "BA"),
            (702, "ZZ"),
            (703, "AAA"),
        ];
        for (index, letters) in cases {
            let col = Column::new(index).unwrap();
            assert_eq!(col.letters(), letters);
            assert_eq!(Column::from_letters(letters).unwrap(), col);
        }
    }

    #[test]
    fn test_column_offset_past_z() {
        // Single-letter arithmetic would produce '[' here
        let z: Column = "Z".parse().unwrap();
        assert_eq!(z.offset(1).unwrap().letters(), "AA");
        assert_eq!(Column::from_letters("az").unwrap().offset(1).unwrap().letters(), "BA");
    }

    #[test]
    fn test_offsets_past_the_last_index_fail() {
        let last = Column::new(u32::MAX).unwrap();
        assert!(matches!(last.offset(1), Err(GsheetError::InvalidColumn(_))));

        let bottom = CellRef::new(Column::G, u32::MAX).unwrap();
        assert!(matches!(bottom.down(1), Err(GsheetError::InvalidCell(_))));
        assert!(matches!(
            CellRange::from_anchor(bottom, 2, 2),
            Err(GsheetError::InvalidCell(_))
        ));
        // A single row at the very bottom is still addressable
        assert!(CellRange::from_anchor(bottom, 2, 1).is_ok());
    }

    #[test]
    fn test_invalid_columns() {
        assert!(Column::from_letters("").is_err());
        assert!(Column::from_letters("G7").is_err());
        assert!(Column::new(0).is_err());
    }

    #[test]
    fn test_cell_ref_parsing() {
        let cell: CellRef = "B1".parse().unwrap();
        assert_eq!(cell, CellRef::new(Column::B, 1).unwrap());

        let cell: CellRef = "ab12".parse().unwrap();
        assert_eq!(cell.to_string(), "AB12");

        assert!("B".parse::<CellRef>().is_err());
        assert!("12".parse::<CellRef>().is_err());
        assert!("B0".parse::<CellRef>().is_err());
    }

    #[test]
    fn test_range_addressing() {
        let anchor = CellRef::new(Column::G, 19).unwrap();
        let range = CellRange::from_anchor(anchor, 2, 50).unwrap();
        assert_eq!(range.to_a1("Report"), "Report!G19:H68");
        assert_eq!(range.width(), 2);
        assert_eq!(range.height(), 50);

        let lane = CellRange::from_anchor(CellRef::new(Column::A, 4).unwrap(), 1, 10).unwrap();
        assert_eq!(lane.to_a1("Lanes"), "Lanes!A4:A13");

        let cell = CellRange::single(CellRef::new(Column::B, 4).unwrap());
        assert_eq!(cell.to_a1("Lanes"), "Lanes!B4");

        assert!(matches!(
            CellRange::from_anchor(anchor, 2, 0),
            Err(GsheetError::InvalidCell(_))
        ));
    }

    #[test]
    fn test_range_crossing_z() {
        let anchor = CellRef::new(Column::from_letters("Z").unwrap(), 3).unwrap();
        let range = CellRange::from_anchor(anchor, 2, 2).unwrap();
        assert_eq!(range.to_a1("T"), "T!Z3:AA4");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(12.5), "12.50");
        assert_eq!(format_hours(0.0), "0.00");
        assert_eq!(format_hours(3.0), "3.00");
        assert_eq!(format_hours(1.234), "1.23");
    }
}
