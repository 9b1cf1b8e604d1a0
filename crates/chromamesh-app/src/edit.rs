//! Edits the host can replay against a mesh.

use chromamesh_core::{Hsb, MeshGrid, MeshResult};
use kurbo::Point;
use std::str::FromStr;

/// A single user edit, parsed from a command-line token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshEdit {
    AddColumn,
    RemoveColumn,
    AddRow,
    RemoveRow,
    /// Drag a vertex to a normalized position: `move:ROW,COL,X,Y`.
    Move { row: usize, column: usize, to: Point },
    /// Recolor a vertex: `color:ROW,COL,HUE,SAT,BRI`.
    Recolor { row: usize, column: usize, color: Hsb },
}

impl MeshEdit {
    /// Parse a token; `None` when it is not an edit.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+col" => return Some(MeshEdit::AddColumn),
            "-col" => return Some(MeshEdit::RemoveColumn),
            "+row" => return Some(MeshEdit::AddRow),
            "-row" => return Some(MeshEdit::RemoveRow),
            _ => {}
        }

        let (name, args) = token.split_once(':')?;
        let values: Vec<&str> = args.split(',').map(str::trim).collect();
        match (name, values.as_slice()) {
            ("move", [row, column, x, y]) => Some(MeshEdit::Move {
                row: row.parse().ok()?,
                column: column.parse().ok()?,
                to: Point::new(x.parse().ok()?, y.parse().ok()?),
            }),
            ("color", [row, column, hue, saturation, brightness]) => Some(MeshEdit::Recolor {
                row: row.parse().ok()?,
                column: column.parse().ok()?,
                color: Hsb::new(
                    hue.parse().ok()?,
                    saturation.parse::<f64>().ok()?.clamp(0.0, 1.0),
                    brightness.parse::<f64>().ok()?.clamp(0.0, 1.0),
                ),
            }),
            _ => None,
        }
    }

    /// Apply the edit. Returns whether the grid changed.
    pub fn apply(&self, grid: &mut MeshGrid) -> MeshResult<bool> {
        match *self {
            MeshEdit::AddColumn => {
                grid.add_column();
                Ok(true)
            }
            MeshEdit::RemoveColumn => Ok(grid.remove_column()),
            MeshEdit::AddRow => {
                grid.add_row();
                Ok(true)
            }
            MeshEdit::RemoveRow => Ok(grid.remove_row()),
            MeshEdit::Move { row, column, to } => grid.update_vertex(row, column, to),
            MeshEdit::Recolor { row, column, color } => {
                grid.set_vertex_color(row, column, color)?;
                Ok(true)
            }
        }
    }
}

impl FromStr for MeshEdit {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        MeshEdit::parse(token).ok_or_else(|| {
            format!("'{token}' is not one of +col, -col, +row, -row, move:ROW,COL,X,Y, color:ROW,COL,HUE,SAT,BRI")
        })
    }
}
