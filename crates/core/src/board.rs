//! Board module - owns the grid of fields
//!
//! The board is a `width x height` grid stored as one flat buffer in row-major
//! order (`y * width + x`). Coordinates: x grows left to right, y grows from row 0
//! (drawn last) to row `height - 1` (drawn first).
//!
//! Bounds are checked by [`Board::contains`] / [`Board::get`]. The plain accessors
//! ([`Board::field`], [`Board::claim`], [`Board::set_area`]) expect coordinates the
//! caller already validated.

use arrayvec::ArrayVec;

use crate::error::GameError;
use crate::types::PlayerId;

/// Orthogonal offsets in neighbour order: left, right, down, up
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Coordinates of a field
pub type Pos = (u32, u32);

/// A single field: who owns it and which of the owner's areas it belongs to.
///
/// A field is claimed at most once. Its area id may be rewritten later when
/// areas merge, but the owner never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field {
    owner: Option<PlayerId>,
    area: u32,
}

impl Field {
    /// An unclaimed field
    pub const EMPTY: Field = Field {
        owner: None,
        area: 0,
    };

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Area id, meaningful only for claimed fields
    pub fn area(&self) -> u32 {
        self.area
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    #[inline(always)]
    pub fn is_owned_by(&self, owner: Option<PlayerId>) -> bool {
        self.owner == owner
    }
}

/// The game board using flat buffer storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    /// Row-major fields (y * width + x)
    fields: Vec<Field>,
}

impl Board {
    /// Create an empty board.
    ///
    /// The buffer is reserved fallibly so that an oversized board reports
    /// [`GameError::OutOfMemory`] instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        let len = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| GameError::OutOfMemory)?;

        let mut fields = Vec::new();
        fields
            .try_reserve_exact(len)
            .map_err(|_| GameError::OutOfMemory)?;
        fields.resize(len, Field::EMPTY);

        Ok(Self {
            width,
            height,
            fields,
        })
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside board");
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if (x, y) lies on the board
    #[inline(always)]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Get field at (x, y), None if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Field> {
        if self.contains(x, y) {
            Some(self.fields[self.index(x, y)])
        } else {
            None
        }
    }

    /// Field at a position the caller already validated
    #[inline(always)]
    pub fn field(&self, x: u32, y: u32) -> Field {
        self.fields[self.index(x, y)]
    }

    /// Hand an unclaimed field to `owner` under area id `area`
    pub fn claim(&mut self, x: u32, y: u32, owner: PlayerId, area: u32) {
        let idx = self.index(x, y);
        debug_assert!(!self.fields[idx].is_claimed(), "field claimed twice");
        self.fields[idx] = Field {
            owner: Some(owner),
            area,
        };
    }

    /// Rewrite the area id of a claimed field
    pub fn set_area(&mut self, x: u32, y: u32, area: u32) {
        let idx = self.index(x, y);
        self.fields[idx].area = area;
    }

    /// Step from (x, y) by (dx, dy), None if that leaves the board
    #[inline(always)]
    pub fn offset(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<Pos> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.contains(nx, ny).then_some((nx, ny))
    }

    /// On-board orthogonal neighbours in left, right, down, up order
    pub fn neighbors(&self, x: u32, y: u32) -> ArrayVec<Pos, 4> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dx, dy)| self.offset(x, y, dx, dy))
            .collect()
    }

    /// Row `y` as a slice, left to right
    pub fn row(&self, y: u32) -> &[Field] {
        let start = (y as usize) * (self.width as usize);
        &self.fields[start..start + self.width as usize]
    }

    /// Get a reference to the internal field buffer
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
