//! The mesh grid: vertex storage and the operations that reshape it.

use crate::aspect::AspectRatio;
use crate::color::{Hsb, Rgba8Color};
use crate::config::MeshConfiguration;
use crate::error::{MeshError, MeshResult};
use crate::generator::MeshGenerator;
use crate::geometry::{clamp_unit, normalize_in_frame};
use crate::grid::{EdgeAxis, GridIndex, GridLocation};
use crate::interpolate::{blerp, lerp};
use crate::preset::MeshPreset;
use crate::vertex::MeshVertex;
use kurbo::{Point, Size};
use peniko::Color;
use serde::Serialize;

/// Smallest number of rows or columns a grid can be reduced to.
const MIN_LINES: usize = 2;

/// Blend weights applied to the two vertices that meet at a removal seam.
const SEAM_BLEND: (f64, f64) = (0.25, 0.75);

/// Which outer vertices are pinned while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexLocks {
    /// Edge vertices can only slide along their edge.
    pub edges: bool,
    /// Corner vertices cannot move.
    pub corners: bool,
}

/// Resolve where a dragged vertex ends up.
///
/// `target` is clamped to the unit square. A locked corner stays at
/// `current`; a locked vertical edge only takes the target's y and a locked
/// horizontal edge only its x. Everything else moves freely. A NaN target
/// leaves the vertex where it is.
pub fn constrain_drag(location: GridLocation, locks: VertexLocks, current: Point, target: Point) -> Point {
    if target.is_nan() {
        return current;
    }
    let target = clamp_unit(target);
    match location {
        GridLocation::Corner if locks.corners => current,
        GridLocation::Edge(EdgeAxis::Vertical) if locks.edges => Point::new(current.x, target.y),
        GridLocation::Edge(EdgeAxis::Horizontal) if locks.edges => Point::new(target.x, current.y),
        _ => target,
    }
}

/// The arrays a mesh gradient renderer consumes, in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshPayload {
    /// Vertices per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    pub points: Vec<[f32; 2]>,
    pub colors: Vec<Rgba8Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Columns,
    Rows,
}

/// A `rows x columns` grid of colored vertices driving a mesh gradient.
///
/// Vertices live in a flat row-major vector and are only mutated through the
/// grid, so the shape always matches `rows * columns` and positions always
/// stay inside the unit square.
#[derive(Debug, Clone)]
pub struct MeshGrid {
    index: GridIndex,
    vertices: Vec<MeshVertex>,
    /// Whether edge vertices are restricted to their edge while dragging.
    pub edges_locked: bool,
    /// Whether corner vertices are pinned.
    pub corners_locked: bool,
    pub aspect_ratio: AspectRatio,
}

impl Default for MeshGrid {
    fn default() -> Self {
        Self::from_preset(&MeshPreset::rainbow())
    }
}

impl MeshGrid {
    /// Create a rainbow grid with the given dimensions.
    pub fn new(columns: usize, rows: usize) -> MeshResult<Self> {
        Ok(Self::from_generator(&MeshGenerator::rainbow(columns, rows)?))
    }

    pub fn from_generator(generator: &MeshGenerator) -> Self {
        Self {
            index: generator.index(),
            vertices: generator.generate(),
            edges_locked: false,
            corners_locked: false,
            aspect_ratio: AspectRatio::default(),
        }
    }

    pub fn from_preset(preset: &MeshPreset) -> Self {
        Self::from_generator(&preset.generator)
    }

    /// Build a grid honoring a validated configuration.
    pub fn from_configuration(config: &MeshConfiguration) -> MeshResult<Self> {
        config.validate()?;
        let preset = MeshPreset::from_id(config.preset)?;
        let mut grid = Self::from_preset(&preset);
        grid.edges_locked = config.edges_locked;
        grid.corners_locked = config.corners_locked;
        grid.aspect_ratio = config.aspect_ratio.clone();
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.index.columns
    }

    pub fn rows(&self) -> usize {
        self.index.rows
    }

    pub fn index(&self) -> GridIndex {
        self.index
    }

    pub fn locks(&self) -> VertexLocks {
        VertexLocks {
            edges: self.edges_locked,
            corners: self.corners_locked,
        }
    }

    /// Replace the whole grid with a fresh copy of `preset`.
    ///
    /// Vertex edits are discarded; lock flags and aspect ratio are kept.
    pub fn update(&mut self, preset: &MeshPreset) {
        self.index = preset.generator.index();
        self.vertices = preset.generator.generate();
        log::debug!(
            "Mesh reset to preset {} ({}x{})",
            preset.label,
            self.index.columns,
            self.index.rows
        );
    }

    // --- Read-only views ---

    /// Vertices in row-major order.
    pub fn flattened_vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Iterate over the rows of the grid.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[MeshVertex]> {
        self.vertices.chunks(self.index.columns)
    }

    pub fn vertex(&self, row: usize, column: usize) -> Option<&MeshVertex> {
        if self.index.contains(row, column) {
            self.vertices.get(self.index.flat_index(row, column))
        } else {
            None
        }
    }

    /// Vertex positions as single-precision pairs.
    pub fn vertices(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(MeshVertex::point_f32).collect()
    }

    /// Display colors in the same order as [`MeshGrid::vertices`].
    pub fn colors(&self) -> Vec<Color> {
        self.vertices.iter().map(MeshVertex::display_color).collect()
    }

    /// Everything the renderer needs for one frame.
    pub fn payload(&self) -> MeshPayload {
        MeshPayload {
            width: self.index.columns,
            height: self.index.rows,
            points: self.vertices(),
            colors: self.vertices.iter().map(|v| Rgba8Color::from(v.color)).collect(),
        }
    }

    // --- Vertex edits ---

    fn checked_index(&self, row: usize, column: usize) -> MeshResult<usize> {
        if self.index.contains(row, column) {
            Ok(self.index.flat_index(row, column))
        } else {
            Err(MeshError::VertexOutOfRange { row, column })
        }
    }

    /// Move a vertex towards a normalized target, honoring the lock flags.
    ///
    /// Returns whether the vertex moved.
    pub fn update_vertex(&mut self, row: usize, column: usize, target: Point) -> MeshResult<bool> {
        let flat = self.checked_index(row, column)?;
        let locks = self.locks();
        let vertex = &mut self.vertices[flat];
        let position = constrain_drag(vertex.location, locks, vertex.position, target);
        let moved = position != vertex.position;
        vertex.position = position;
        Ok(moved)
    }

    /// Move a vertex to a view-space location inside a frame of size `frame`.
    pub fn drag_vertex(&mut self, row: usize, column: usize, location: Point, frame: Size) -> MeshResult<bool> {
        self.update_vertex(row, column, normalize_in_frame(location, frame))
    }

    pub fn set_vertex_color(&mut self, row: usize, column: usize, color: Hsb) -> MeshResult<()> {
        let flat = self.checked_index(row, column)?;
        self.vertices[flat].color = color;
        Ok(())
    }

    // --- Structural edits ---

    /// Insert a column in the middle of the grid.
    pub fn add_column(&mut self) {
        self.insert_column(self.index.columns / 2);
    }

    /// Insert a column at `index`, between columns `index - 1` and `index`.
    pub fn add_column_at(&mut self, index: usize) -> MeshResult<()> {
        let columns = self.index.columns;
        if index == 0 || index >= columns {
            return Err(MeshError::InsertionOutOfRange { index, len: columns });
        }
        self.insert_column(index);
        Ok(())
    }

    fn insert_column(&mut self, index: usize) {
        let next = GridIndex {
            columns: self.index.columns + 1,
            rows: self.index.rows,
        };
        let mut staged = Vec::with_capacity(next.len());
        for line in self.rows_iter() {
            let (left, right) = (&line[index - 1], &line[index]);
            staged.extend_from_slice(&line[..index]);
            staged.push(blerp(left, right, left, right, 0.5, 0.5));
            staged.extend_from_slice(&line[index..]);
        }
        self.commit(next, staged, Axis::Columns);
        log::debug!("Inserted column at {}, grid is now {}x{}", index, next.columns, next.rows);
    }

    /// Remove the middle column.
    pub fn remove_column(&mut self) -> bool {
        match self.remove_column_at(self.index.columns / 2) {
            Ok(removed) => removed,
            Err(e) => {
                log::warn!("Ignoring column removal: {}", e);
                false
            }
        }
    }

    /// Remove the column at `index`.
    ///
    /// Returns `Ok(false)` without touching the grid when it only has two
    /// columns. The first column cannot be removed through this path:
    /// `index` must be in `1..columns`, anything else is rejected.
    pub fn remove_column_at(&mut self, index: usize) -> MeshResult<bool> {
        let columns = self.index.columns;
        if columns <= MIN_LINES {
            log::warn!("Ignoring column removal: grid already has {} columns", columns);
            return Ok(false);
        }
        if index == 0 || index >= columns {
            return Err(MeshError::ColumnNotRemovable { index, columns });
        }

        let next = GridIndex {
            columns: columns - 1,
            rows: self.index.rows,
        };
        let staged: Vec<MeshVertex> = self
            .rows_iter()
            .flat_map(|line| {
                line.iter()
                    .enumerate()
                    .filter(move |(column, _)| *column != index)
                    .map(|(_, vertex)| *vertex)
            })
            .collect();
        self.commit(next, staged, Axis::Columns);

        if index < next.columns {
            for row in 0..next.rows {
                self.blend_seam(next.flat_index(row, index - 1), next.flat_index(row, index));
            }
        }
        log::debug!("Removed column {}, grid is now {}x{}", index, next.columns, next.rows);
        Ok(true)
    }

    /// Insert a row in the middle of the grid.
    pub fn add_row(&mut self) {
        self.insert_row(self.index.rows / 2);
    }

    /// Insert a row at `index`, between rows `index - 1` and `index`.
    pub fn add_row_at(&mut self, index: usize) -> MeshResult<()> {
        let rows = self.index.rows;
        if index == 0 || index >= rows {
            return Err(MeshError::InsertionOutOfRange { index, len: rows });
        }
        self.insert_row(index);
        Ok(())
    }

    fn insert_row(&mut self, index: usize) {
        let columns = self.index.columns;
        let next = GridIndex {
            columns,
            rows: self.index.rows + 1,
        };
        let split = index * columns;
        let (above, below) = self.vertices.split_at(split);
        let above_line = &above[split - columns..];
        let below_line = &below[..columns];

        let mut staged = Vec::with_capacity(next.len());
        staged.extend_from_slice(above);
        staged.extend(
            above_line
                .iter()
                .zip(below_line)
                .map(|(up, down)| blerp(up, down, up, down, 0.5, 0.5)),
        );
        staged.extend_from_slice(below);
        self.commit(next, staged, Axis::Rows);
        log::debug!("Inserted row at {}, grid is now {}x{}", index, next.columns, next.rows);
    }

    /// Remove the middle row.
    pub fn remove_row(&mut self) -> bool {
        self.remove_row_at(self.index.rows / 2)
    }

    /// Remove the row at `index`.
    ///
    /// Returns `false` without touching the grid when it only has two rows or
    /// `index` is out of range.
    pub fn remove_row_at(&mut self, index: usize) -> bool {
        let rows = self.index.rows;
        if rows <= MIN_LINES {
            log::warn!("Ignoring row removal: grid already has {} rows", rows);
            return false;
        }
        if index >= rows {
            log::warn!("Ignoring row removal: row {} is out of range (0..{})", index, rows);
            return false;
        }

        let columns = self.index.columns;
        let next = GridIndex {
            columns,
            rows: rows - 1,
        };
        let staged: Vec<MeshVertex> = self
            .rows_iter()
            .enumerate()
            .filter(|(row, _)| *row != index)
            .flat_map(|(_, line)| line.iter().copied())
            .collect();
        self.commit(next, staged, Axis::Rows);

        if index > 0 && index < rows - 1 {
            for column in 0..columns {
                self.blend_seam(next.flat_index(index - 1, column), next.flat_index(index, column));
            }
        }
        log::debug!("Removed row {}, grid is now {}x{}", index, next.columns, next.rows);
        true
    }

    /// Swap in a staged vertex vector and re-space it along `axis`.
    fn commit(&mut self, index: GridIndex, staged: Vec<MeshVertex>, axis: Axis) {
        debug_assert_eq!(staged.len(), index.len());
        self.index = index;
        self.vertices = staged;
        self.respace(axis);
    }

    /// Evenly space positions along `axis` and reclassify every vertex.
    ///
    /// The other coordinate is left as the user placed it.
    fn respace(&mut self, axis: Axis) {
        let index = self.index;
        for (flat, vertex) in self.vertices.iter_mut().enumerate() {
            let (row, column) = index.coordinates(flat);
            let even = index.position(row, column);
            match axis {
                Axis::Columns => vertex.position.x = even.x,
                Axis::Rows => vertex.position.y = even.y,
            }
            vertex.location = index.location(row, column);
        }
    }

    /// Soften the hard edge left between two vertices that became neighbours.
    fn blend_seam(&mut self, first: usize, second: usize) {
        let (a, b) = (self.vertices[first].color, self.vertices[second].color);
        let (near, far) = SEAM_BLEND;
        self.vertices[first].color = lerp(&a, &b, near);
        self.vertices[second].color = lerp(&a, &b, far);
    }
}
