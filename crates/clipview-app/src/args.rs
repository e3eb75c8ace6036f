//! Command-line argument definitions for clipview.

use clap::{ArgAction, Parser, ValueEnum};
use clipview_core::shape::CornerRadii;
use std::path::PathBuf;

/// Render an image clipped to a circle, rounded rectangle, triangle or SVG path.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct ClipArgs {
    /// Image to clip (PNG, JPEG or WebP).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the clipped PNG.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Clip shape. Defaults to the attribute file's shape, then to a circle.
    #[arg(short, long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Uniform corner radius for `--shape rounded`.
    #[arg(long, conflicts_with = "corners")]
    pub radius: Option<f64>,

    /// Per-corner radii for `--shape rounded`, as `TL,TR,BL,BR`.
    #[arg(long, value_parser = parse_corners)]
    pub corners: Option<CornerRadii>,

    /// SVG path data for `--shape path`, e.g. `M0,0 L100,0 L50,80 Z`.
    #[arg(long)]
    pub path: Option<String>,

    /// Optional view attributes JSON.
    #[arg(long)]
    pub attributes: Option<PathBuf>,

    /// Disable edge anti-aliasing.
    #[arg(long = "no-anti-alias", action = ArgAction::SetTrue)]
    pub no_anti_alias: bool,

    /// Log at debug level.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Shapes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Circle,
    Rounded,
    Triangle,
    Path,
}

fn parse_corners(value: &str) -> Result<CornerRadii, String> {
    let radii = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid radius '{}': {}", part.trim(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match radii.as_slice() {
        [tl, tr, bl, br] => Ok(CornerRadii::per_corner(*tl, *tr, *bl, *br)),
        _ => Err(format!("expected 4 comma-separated radii, got {}", radii.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = ClipArgs::try_parse_from(["clipview", "-i", "in.png", "-o", "out.png"]).unwrap();
        assert_eq!(args.width, 256);
        assert_eq!(args.height, 256);
        assert!(args.shape.is_none());
        assert!(!args.no_anti_alias);
    }

    #[test]
    fn test_corners() {
        let args = ClipArgs::try_parse_from([
            "clipview", "-i", "a.png", "-o", "b.png", "--shape", "rounded", "--corners", "1, 2,3,4",
        ])
        .unwrap();
        assert_eq!(args.shape, Some(ShapeArg::Rounded));
        assert_eq!(args.corners, Some(CornerRadii::per_corner(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_corners("1,2,3").is_err());
        assert!(parse_corners("1,2,x,4").is_err());
        assert!(
            ClipArgs::try_parse_from(["clipview", "-i", "a", "-o", "b", "--width", "0"]).is_err()
        );
        assert!(
            ClipArgs::try_parse_from([
                "clipview", "-i", "a", "-o", "b", "--radius", "3", "--corners", "1,1,1,1",
            ])
            .is_err()
        );
    }
}
