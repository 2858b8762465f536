//! Square maze grid and the small geometry types shared across the engine.

/// Binary cell state. `Passage` is walkable, `Wall` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Passage,
}

/// Zero-indexed grid coordinate; `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position offset by `steps` cells in `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// Single-cell step, the unit of player movement.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// The four cardinal movement directions. Diagonals are not a thing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit delta as `(dx, dy)`; `y` grows downward.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Square grid of cells with odd side length, stored row-major.
///
/// Indexed access (`cell`, `carve`) panics on out-of-range coordinates;
/// callers that may hold unvalidated positions go through [`Grid::contains`]
/// or [`Grid::is_open`] first.
#[derive(Debug, Clone)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid of the given side length.
    #[must_use]
    pub fn new(size: i32) -> Self {
        debug_assert!(size > 0, "grid side length must be positive");
        let len = usize::try_from(size * size).unwrap_or(0);
        Self {
            size,
            cells: vec![Cell::Wall; len],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// The unique center cell; exists because the side length is odd.
    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Whether `pos` lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Whether `pos` lies strictly inside the border ring.
    #[must_use]
    pub const fn interior_contains(&self, pos: Position) -> bool {
        pos.x > 0 && pos.x < self.size - 1 && pos.y > 0 && pos.y < self.size - 1
    }

    /// In-bounds and walkable; the move-legality predicate.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.contains(pos) && self.cell(pos) == Cell::Passage
    }

    /// Cell state at `pos`.
    ///
    /// # Panics
    /// Panics when `pos` is out of range; that is a caller bug, not a
    /// recoverable condition.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        assert!(self.contains(pos), "grid access out of range: {pos:?}");
        self.cells[self.index(pos)]
    }

    /// Convert `pos` to `Passage`.
    ///
    /// # Panics
    /// Panics when `pos` is out of range.
    pub fn carve(&mut self, pos: Position) {
        assert!(self.contains(pos), "grid carve out of range: {pos:?}");
        let idx = self.index(pos);
        self.cells[idx] = Cell::Passage;
    }

    /// Iterate every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Number of `Passage` cells.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Passage).count()
    }

    fn index(&self, pos: Position) -> usize {
        usize::try_from(pos.y * self.size + pos.x).expect("position validated by contains")
    }
}
