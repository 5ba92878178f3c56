//! Catalog module - polyomino shapes and their rotation layouts
//!
//! A catalog is an ordered list of piece types. Each entry has one or more
//! rotation layouts written as character masks (`'X'` filled, anything else
//! empty) and an opaque color pair. Board cells store catalog indices.
//!
//! Layouts are parsed once, at construction; the placement hot path only
//! walks the precomputed `(row_offset, column_offset)` list.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Color, PolyominoColors, ShapeIndex, FILLED_MARKER, MAX_LAYOUT_CELLS};

/// Offset of a filled sub-cell relative to the layout's top-left origin
pub type CellOffset = (i32, i32);

/// One orientation of a piece: its filled sub-cells in scan order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    cells: ArrayVec<CellOffset, MAX_LAYOUT_CELLS>,
    height: usize,
    width: usize,
}

impl Layout {
    /// Parse a character mask. Rows may differ in width.
    ///
    /// Returns the number of filled cells as the error when it exceeds
    /// [`MAX_LAYOUT_CELLS`].
    fn parse<S: AsRef<str>>(mask: &[S]) -> std::result::Result<Self, usize> {
        let mut cells = ArrayVec::new();
        let mut width = 0;
        let mut overflow = 0;

        for (r, line) in mask.iter().enumerate() {
            let line = line.as_ref();
            width = width.max(line.chars().count());
            for (c, ch) in line.chars().enumerate() {
                if ch != FILLED_MARKER {
                    continue;
                }
                if cells.try_push((r as i32, c as i32)).is_err() {
                    overflow += 1;
                }
            }
        }

        if overflow > 0 {
            return Err(MAX_LAYOUT_CELLS + overflow);
        }

        Ok(Self {
            cells,
            height: mask.len(),
            width,
        })
    }

    /// Filled sub-cells, top to bottom, left to right
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render back to a rectangular mask using `'X'` and `'.'`
    pub fn to_mask(&self) -> Vec<String> {
        let mut rows = vec![vec!['.'; self.width]; self.height];
        for &(r, c) in &self.cells {
            rows[r as usize][c as usize] = FILLED_MARKER;
        }
        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

/// Serialized form of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyominoDef {
    /// Rotation layouts as character masks
    pub blocks: Vec<Vec<String>>,
    pub colors: PolyominoColors,
}

impl PolyominoDef {
    pub fn new(blocks: &[&[&str]], colors: PolyominoColors) -> Self {
        Self {
            blocks: blocks
                .iter()
                .map(|mask| mask.iter().map(|row| row.to_string()).collect())
                .collect(),
            colors,
        }
    }
}

/// An immutable piece type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyomino {
    layouts: Vec<Layout>,
    colors: PolyominoColors,
}

impl Polyomino {
    fn from_def(entry: usize, def: &PolyominoDef) -> Result<Self> {
        if def.blocks.is_empty() {
            return Err(Error::NoRotations { entry });
        }

        let mut layouts = Vec::with_capacity(def.blocks.len());
        for (rotation, mask) in def.blocks.iter().enumerate() {
            let layout = Layout::parse(mask.as_slice()).map_err(|cells| Error::LayoutTooLarge {
                entry,
                rotation,
                cells,
                max: MAX_LAYOUT_CELLS,
            })?;
            if layout.cells().is_empty() {
                return Err(Error::EmptyLayout { entry, rotation });
            }
            layouts.push(layout);
        }

        Ok(Self {
            layouts,
            colors: def.colors,
        })
    }

    /// Number of distinct rotation states (1, 2 or 4 for tetrominoes)
    pub fn rotation_count(&self) -> usize {
        self.layouts.len()
    }

    /// Reduce any orientation to a valid layout index (floor modulo)
    pub fn normalize_orientation(&self, orientation: i32) -> usize {
        orientation.rem_euclid(self.layouts.len() as i32) as usize
    }

    /// Layout for an orientation, wrapping in both directions
    pub fn layout(&self, orientation: i32) -> &Layout {
        &self.layouts[self.normalize_orientation(orientation)]
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn colors(&self) -> PolyominoColors {
        self.colors
    }

    pub fn to_def(&self) -> PolyominoDef {
        PolyominoDef {
            blocks: self.layouts.iter().map(Layout::to_mask).collect(),
            colors: self.colors,
        }
    }
}

/// Ordered, read-only set of piece types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Catalog {
    entries: Vec<Polyomino>,
}

impl Catalog {
    /// Build a catalog, validating every entry
    pub fn new(defs: &[PolyominoDef]) -> Result<Self> {
        if defs.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let entries = defs
            .iter()
            .enumerate()
            .map(|(entry, def)| Polyomino::from_def(entry, def))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{ "blocks": [[...]], "colors": {...} }` entries
    pub fn from_json(json: &str) -> Result<Self> {
        let defs: Vec<PolyominoDef> = serde_json::from_str(json)?;
        Self::new(&defs)
    }

    /// Serialize back to the JSON form accepted by [`Catalog::from_json`]
    pub fn to_json(&self) -> Result<String> {
        let defs: Vec<PolyominoDef> = self.entries.iter().map(Polyomino::to_def).collect();
        Ok(serde_json::to_string(&defs)?)
    }

    /// The standard seven tetrominoes: I, O, T, J, L, S, Z (indices 0-6)
    pub fn tetrominoes() -> Self {
        let defs: Vec<PolyominoDef> = TETROMINOES
            .iter()
            .map(|&(blocks, fill)| {
                PolyominoDef::new(blocks, PolyominoColors::new(Color::Wine, fill))
            })
            .collect();
        Self::new(&defs).expect("standard tetromino table is well-formed")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: ShapeIndex) -> Option<&Polyomino> {
        self.entries.get(index)
    }

    /// Entry lookup for indices known to be valid.
    ///
    /// # Panics
    ///
    /// Panics on an unknown index; board cells and active pieces must only
    /// ever reference existing entries.
    pub fn entry(&self, index: ShapeIndex) -> &Polyomino {
        match self.entries.get(index) {
            Some(entry) => entry,
            None => panic!(
                "catalog index {} out of range (catalog has {} entries)",
                index,
                self.entries.len()
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polyomino> {
        self.entries.iter()
    }

    /// Fill color of whatever occupies a board cell
    pub fn fill_color(&self, index: ShapeIndex) -> Option<Color> {
        self.get(index).map(|p| p.colors.fill_color)
    }
}

/// Catalog indices of the standard set
pub mod tetromino {
    use crate::types::ShapeIndex;

    pub const I: ShapeIndex = 0;
    pub const O: ShapeIndex = 1;
    pub const T: ShapeIndex = 2;
    pub const J: ShapeIndex = 3;
    pub const L: ShapeIndex = 4;
    pub const S: ShapeIndex = 5;
    pub const Z: ShapeIndex = 6;
}

type ShapeTable = [(&'static [&'static [&'static str]], Color); 7];

const TETROMINOES: ShapeTable = [
    // I
    (&[&["XXXX"], &["X", "X", "X", "X"]], Color::LightBlue),
    // O
    (&[&["XX", "XX"]], Color::Yellow),
    // T
    (
        &[
            &["XXX", ".X."],
            &[".X", "XX", ".X"],
            &[".X.", "XXX"],
            &["X.", "XX", "X."],
        ],
        Color::Purple,
    ),
    // J
    (
        &[
            &[".X", ".X", "XX"],
            &["X..", "XXX"],
            &["XX", "X.", "X."],
            &["XXX", "..X"],
        ],
        Color::Aqua,
    ),
    // L
    (
        &[
            &["X.", "X.", "XX"],
            &["XXX", "X.."],
            &["XX", ".X", ".X"],
            &["..X", "XXX"],
        ],
        Color::Orange,
    ),
    // S
    (&[&[".XX", "XX."], &["X.", "XX", ".X"]], Color::BrightGreen),
    // Z
    (&[&["XX.", ".XX"], &[".X", "XX", "X."]], Color::Red),
];
