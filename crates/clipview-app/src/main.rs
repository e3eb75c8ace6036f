//! clipview: render an image clipped to a shape and write it as PNG.

mod args;

use anyhow::{Context, Result, anyhow, bail, ensure};
use args::{ClipArgs, ShapeArg};
use clap::Parser;
use clipview_core::attributes::ViewAttributes;
use clipview_core::source::{ImageDecoder, ResourceId};
use clipview_render::{AssetDecoder, ClipImageView, PixmapSurface, RenderOutcome};
use kurbo::BezPath;
use log::LevelFilter;
use std::fs;

/// Resource id the input file is registered under.
const INPUT: ResourceId = ResourceId(1);

/// Corner radius used for `--shape rounded` without `--radius` or `--corners`.
const DEFAULT_CORNER_RADIUS: f64 = 16.0;

fn main() {
    let args = ClipArgs::parse();
    init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_filter: LevelFilter) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter.as_str()),
    )
    .try_init();
}

fn run(args: &ClipArgs) -> Result<()> {
    let mut attributes = match &args.attributes {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading attributes from {}", path.display()))?;
            ViewAttributes::from_json(&json)?
        }
        None => ViewAttributes::default(),
    };
    if args.no_anti_alias {
        attributes.anti_alias = false;
    }

    let mut decoder = AssetDecoder::new();
    decoder.load_file(INPUT, &args.input)?;
    let native = decoder.read_size(INPUT)?;
    log::info!(
        "Loaded {} ({}x{})",
        args.input.display(),
        native.width,
        native.height
    );

    let mut view = ClipImageView::with_attributes(decoder, attributes);
    apply_shape(&mut view, args)?;
    view.set_image_source(INPUT);

    let mut surface = PixmapSurface::new(args.width, args.height)?;
    let width = i32::try_from(args.width).context("width out of range")?;
    let height = i32::try_from(args.height).context("height out of range")?;
    match view.render(width, height, &mut surface) {
        RenderOutcome::Drawn => {}
        RenderOutcome::Skipped(reason) => bail!("nothing drawn: {:?}", reason),
    }

    surface.save_png(&args.output)?;
    if let Some(decoded) = view.decoded_image() {
        log::info!(
            "Wrote {} ({}x{}, image decoded at 1/{})",
            args.output.display(),
            args.width,
            args.height,
            decoded.sample_size()
        );
    }
    Ok(())
}

fn apply_shape(view: &mut ClipImageView<AssetDecoder>, args: &ClipArgs) -> Result<()> {
    match args.shape {
        Some(ShapeArg::Circle) => view.select_circle(),
        Some(ShapeArg::Rounded) => match (args.corners, args.radius) {
            (Some(c), _) => {
                view.select_rounded_corners(c.top_left, c.top_right, c.bottom_left, c.bottom_right)
            }
            (None, Some(radius)) => view.select_rounded_rect(radius),
            (None, None) => view.select_rounded_rect(DEFAULT_CORNER_RADIUS),
        },
        Some(ShapeArg::Triangle) => view.select_triangle(),
        Some(ShapeArg::Path) => {
            let svg = args
                .path
                .as_deref()
                .context("--shape path requires --path")?;
            let path = BezPath::from_svg(svg).map_err(|e| anyhow!("invalid SVG path: {}", e))?;
            ensure!(view.select_custom_path(path), "custom path has nothing to draw");
        }
        None => {
            if view.shape().is_none() {
                view.select_circle();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn write_input(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("input.png");
        RgbaImage::from_pixel(32, 32, Rgba([0, 200, 0, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn parse(extra: &[&str], input: &Path, output: &Path) -> ClipArgs {
        let mut argv = vec![
            "clipview".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        ClipArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_circle_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        run(&parse(&["--width", "40", "--height", "20"], &input, &output)).unwrap();

        let rendered = image::open(&output).unwrap().to_rgba8();
        assert_eq!(rendered.dimensions(), (40, 20));
        assert_eq!(rendered.get_pixel(20, 10).0, [0, 200, 0, 255]);
        assert_eq!(rendered.get_pixel(1, 1).0[3], 0);
    }

    #[test]
    fn test_attribute_file_selects_shape() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");
        let attrs = dir.path().join("attrs.json");
        fs::write(&attrs, r#"{"shape": 3, "anti_alias": false}"#).unwrap();

        let attrs_arg = attrs.display().to_string();
        run(&parse(&["--attributes", &attrs_arg, "--width", "100", "--height", "60"], &input, &output))
            .unwrap();

        let rendered = image::open(&output).unwrap().to_rgba8();
        assert_eq!(rendered.get_pixel(50, 55).0[3], 255);
        assert_eq!(rendered.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn test_svg_path_shape() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        run(&parse(
            &["--shape", "path", "--path", "M0,0 L20,0 L20,20 L0,20 Z", "--width", "40", "--height", "40"],
            &input,
            &output,
        ))
        .unwrap();

        let rendered = image::open(&output).unwrap().to_rgba8();
        assert_eq!(rendered.get_pixel(10, 10).0[3], 255);
        assert_eq!(rendered.get_pixel(30, 30).0[3], 0);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.png");

        assert!(run(&parse(&["--shape", "path"], &input, &output)).is_err());
        assert!(run(&parse(&["--shape", "path", "--path", "M5,5"], &input, &output)).is_err());
        assert!(run(&parse(&[], &dir.path().join("missing.png"), &output)).is_err());

        let garbage = dir.path().join("garbage.png");
        fs::write(&garbage, b"not an image").unwrap();
        assert!(run(&parse(&[], &garbage, &output)).is_err());
    }
}
