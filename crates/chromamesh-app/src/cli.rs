//! Command-line arguments.

use crate::edit::MeshEdit;
use clap::Parser;
use std::path::PathBuf;

/// Build a mesh gradient, replay edits on it and print the render payload as JSON
#[derive(Parser, Debug)]
#[command(name = "chromamesh", version, about, long_about = None)]
pub struct Cli {
    /// Mesh configuration file (JSON); the rainbow preset is used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Edits applied in order: +col, -col, +row, -row,
    /// move:ROW,COL,X,Y or color:ROW,COL,HUE,SAT,BRI
    #[arg(value_name = "EDIT", allow_hyphen_values = true)]
    pub edits: Vec<MeshEdit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use kurbo::Point;

    #[test]
    fn test_parse_config_and_edits() {
        let cli = Cli::try_parse_from([
            "chromamesh",
            "--config",
            "mesh.json",
            "+col",
            "-row",
            "move:1,1,0.2,0.8",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("mesh.json")));
        assert_eq!(
            cli.edits,
            vec![
                MeshEdit::AddColumn,
                MeshEdit::RemoveRow,
                MeshEdit::Move { row: 1, column: 1, to: Point::new(0.2, 0.8) },
            ]
        );
    }

    #[test]
    fn test_leading_removal_edit() {
        let cli = Cli::try_parse_from(["chromamesh", "-col", "-row"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.edits, vec![MeshEdit::RemoveColumn, MeshEdit::RemoveRow]);
    }

    #[test]
    fn test_unknown_edit_is_rejected() {
        let err = Cli::try_parse_from(["chromamesh", "+col", "sideways"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_help_lists_edit_syntax() {
        let err = Cli::try_parse_from(["chromamesh", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let help = err.to_string();
        assert!(help.contains("--config"));
        assert!(help.contains("color:ROW,COL,HUE,SAT,BRI"));
    }
}
