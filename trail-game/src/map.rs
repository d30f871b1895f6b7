//! Trail map: a fixed square grid where only the wagon's row carries meaning.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::{
    MAP_FILL_SYMBOL, MAP_SIZE, MAP_WAGON_COLUMN, MAP_WAGON_SYMBOL, RIVER_ROWS, SHOP_ROWS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("invalid location: row {row}, column {col} (grid is {size}x{size})")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("the trail only runs one way: cannot move from row {from} back to row {to}")]
    Backwards { from: usize, to: usize },
}

/// Named stops along the trail, keyed by map row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    FortBoise,
    River,
    TheDalles,
    FortWallaWalla,
    OregonCity,
}

impl Landmark {
    /// Landmark sitting on `row`, if any.
    #[must_use]
    pub fn at_row(row: usize) -> Option<Self> {
        match row {
            0 => Some(Self::FortBoise),
            4 => Some(Self::TheDalles),
            8 => Some(Self::FortWallaWalla),
            r if r + 1 == MAP_SIZE => Some(Self::OregonCity),
            r if RIVER_ROWS.contains(&r) => Some(Self::River),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FortBoise => "Fort Boise",
            Self::River => "River",
            Self::TheDalles => "The Dalles",
            Self::FortWallaWalla => "Fort Walla Walla",
            Self::OregonCity => "Oregon City",
        }
    }

    #[must_use]
    pub const fn has_shop(self) -> bool {
        matches!(self, Self::FortBoise | Self::TheDalles | Self::FortWallaWalla)
    }
}

/// Square grid of display symbols with a single wagon marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailMap {
    grid: Vec<Vec<String>>,
    fill: String,
    wagon: String,
    row: usize,
    col: usize,
}

impl TrailMap {
    /// Build a `size`x`size` grid with the wagon at the top-left.
    #[must_use]
    pub fn new(size: usize, fill: &str, wagon: &str) -> Self {
        let size = size.max(1);
        let mut grid = vec![vec![fill.to_string(); size]; size];
        if let Some(cell) = grid.first_mut().and_then(|row| row.first_mut()) {
            *cell = wagon.to_string();
        }
        Self {
            grid,
            fill: fill.to_string(),
            wagon: wagon.to_string(),
            row: 0,
            col: 0,
        }
    }

    /// The trail as the journey starts: 10x10 mountains, wagon at row 0 column 5.
    #[must_use]
    pub fn trail() -> Self {
        let mut map = Self::new(MAP_SIZE, MAP_FILL_SYMBOL, MAP_WAGON_SYMBOL);
        // Column 5 is always inside a MAP_SIZE grid.
        let _ = map.place_wagon(0, MAP_WAGON_COLUMN);
        map
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn last_row(&self) -> usize {
        self.size().saturating_sub(1)
    }

    #[must_use]
    pub fn at_final_row(&self) -> bool {
        self.row >= self.last_row()
    }

    #[must_use]
    pub fn landmark(&self) -> Option<Landmark> {
        Landmark::at_row(self.row)
    }

    #[must_use]
    pub fn shop_open(&self) -> bool {
        SHOP_ROWS.contains(&self.row)
    }

    /// Symbol drawn at a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] for coordinates outside the grid.
    pub fn symbol(&self, row: usize, col: usize) -> Result<&str, MapError> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .ok_or(MapError::OutOfBounds {
                row,
                col,
                size: self.size(),
            })
    }

    /// Put a decoration on a cell without moving the wagon.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] for coordinates outside the grid.
    pub fn mark(&mut self, row: usize, col: usize, symbol: &str) -> Result<(), MapError> {
        let size = self.size();
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(MapError::OutOfBounds { row, col, size })?;
        *cell = symbol.to_string();
        Ok(())
    }

    /// Place the wagon, clearing its previous cell. Rows may only increase.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] for coordinates outside the grid and
    /// [`MapError::Backwards`] when `row` is behind the wagon.
    pub fn place_wagon(&mut self, row: usize, col: usize) -> Result<(), MapError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(MapError::OutOfBounds { row, col, size });
        }
        if row < self.row {
            return Err(MapError::Backwards {
                from: self.row,
                to: row,
            });
        }
        let fill = self.fill.clone();
        self.mark(self.row, self.col, &fill)?;
        self.row = row;
        self.col = col;
        let wagon = self.wagon.clone();
        self.mark(row, col, &wagon)
    }

    /// Move one row down the trail. Returns `false` when already at the end.
    pub fn advance(&mut self) -> bool {
        if self.at_final_row() {
            return false;
        }
        self.place_wagon(self.row + 1, self.col).is_ok()
    }
}

impl Default for TrailMap {
    fn default() -> Self {
        Self::trail()
    }
}

impl fmt::Display for TrailMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cells) in self.grid.iter().enumerate() {
            write!(f, "{idx}")?;
            for cell in cells {
                f.write_str(cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_starts_at_fort_boise_in_column_five() {
        let map = TrailMap::trail();
        assert_eq!(map.row(), 0);
        assert_eq!(map.column(), MAP_WAGON_COLUMN);
        assert_eq!(map.symbol(0, 5).unwrap(), MAP_WAGON_SYMBOL);
        assert_eq!(map.symbol(0, 0).unwrap(), MAP_FILL_SYMBOL);
        assert_eq!(map.landmark(), Some(Landmark::FortBoise));
        assert!(map.shop_open());
    }

    #[test]
    fn advance_moves_marker_and_saturates() {
        let mut map = TrailMap::trail();
        assert!(map.advance());
        assert_eq!(map.row(), 1);
        assert_eq!(map.symbol(0, 5).unwrap(), MAP_FILL_SYMBOL);
        assert_eq!(map.symbol(1, 5).unwrap(), MAP_WAGON_SYMBOL);
        for _ in 0..20 {
            map.advance();
        }
        assert_eq!(map.row(), 9);
        assert!(map.at_final_row());
        assert!(!map.advance());
    }

    #[test]
    fn out_of_bounds_and_backwards_moves_are_rejected() {
        let mut map = TrailMap::trail();
        assert_eq!(
            map.place_wagon(10, 5),
            Err(MapError::OutOfBounds {
                row: 10,
                col: 5,
                size: 10
            })
        );
        map.place_wagon(4, 5).unwrap();
        assert_eq!(
            map.place_wagon(3, 5),
            Err(MapError::Backwards { from: 4, to: 3 })
        );
        assert_eq!(map.row(), 4);
        assert!(map.symbol(0, 10).is_err());
    }

    #[test]
    fn landmarks_follow_the_route() {
        assert_eq!(Landmark::at_row(2), Some(Landmark::River));
        assert_eq!(Landmark::at_row(6), Some(Landmark::River));
        assert_eq!(Landmark::at_row(4), Some(Landmark::TheDalles));
        assert_eq!(Landmark::at_row(8), Some(Landmark::FortWallaWalla));
        assert_eq!(Landmark::at_row(9), Some(Landmark::OregonCity));
        assert_eq!(Landmark::at_row(5), None);
        assert!(!Landmark::River.has_shop());
    }

    #[test]
    fn render_numbers_each_row() {
        let map = TrailMap::trail();
        let rendered = map.to_string();
        assert_eq!(rendered.lines().count(), 10);
        assert!(rendered.lines().next().unwrap().starts_with('0'));
        assert!(rendered.lines().last().unwrap().starts_with('9'));
    }
}
