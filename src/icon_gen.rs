use crate::manifest_json;
use crate::Args;
use anyhow::{Context, Result};
use image::{ImageError, ImageOutputFormat, Rgba, RgbaImage};
use std::{
    fs::{self, File},
    path::Path,
    str::FromStr,
};

/// Sizes generated when no `--sizes` override is given.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Icons smaller than this get the plain gradient with no flower overlay.
const FLOWER_MIN_SIZE: u32 = 32;

const DEFAULT_GRADIENT_START: Rgba<u8> = Rgba([102, 126, 234, 255]);
const DEFAULT_GRADIENT_END: Rgba<u8> = Rgba([118, 75, 162, 255]);
const PETAL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);
const FLOWER_CENTER_COLOR: Rgba<u8> = Rgba([255, 255, 140, 255]);

pub fn generate_icons(args: &Args) -> Result<()> {
    fs::create_dir_all(&args.output).context("Can't create output directory")?;

    let sizes = args
        .sizes
        .clone()
        .unwrap_or_else(|| DEFAULT_SIZES.to_vec());

    if args.placeholders_only {
        write_missing_codec_placeholders(&sizes, &args.output)?;
    } else {
        match render_all(&sizes, args) {
            Ok(()) => println!("All icons created successfully!"),
            Err(err) if is_missing_codec(&err) => {
                write_missing_codec_placeholders(&sizes, &args.output)?;
            }
            Err(err) => {
                println!("Error creating icons: {err:#}");
                println!("Creating text placeholders instead...");
                write_simple_placeholders(&sizes, &args.output)?;
            }
        }
    }

    if args.manifest {
        manifest_json::write_icons_json(&args.output, &sizes)?;
    }

    Ok(())
}

fn render_all(sizes: &[u32], args: &Args) -> Result<()> {
    let start = parse_color(&args.from, DEFAULT_GRADIENT_START);
    let end = parse_color(&args.to, DEFAULT_GRADIENT_END);

    for &size in sizes {
        let filename = icon_filename(size);
        let icon = render_icon(size, start, end);
        save_png(&icon, &args.output.join(&filename))?;
        println!("Created {filename} ({size}x{size})");
    }

    Ok(())
}

/// Render one icon: vertical gradient rows, plus the flower overlay on
/// sizes large enough for it to be legible.
pub fn render_icon(size: u32, start: Rgba<u8>, end: Rgba<u8>) -> RgbaImage {
    let mut icon = RgbaImage::new(size, size);

    for y in 0..size {
        let ratio = y as f32 / size as f32;
        let color = Rgba([
            lerp_channel(start[0], end[0], ratio),
            lerp_channel(start[1], end[1], ratio),
            lerp_channel(start[2], end[2], ratio),
            255,
        ]);
        for x in 0..size {
            icon.put_pixel(x, y, color);
        }
    }

    if size >= FLOWER_MIN_SIZE {
        draw_flower(&mut icon, size);
    }

    icon
}

// Truncating interpolation; the `as` cast rounds toward zero.
fn lerp_channel(start: u8, end: u8, ratio: f32) -> u8 {
    (start as f32 + (end as f32 - start as f32) * ratio) as u8
}

/// Eight semi-transparent petals placed radially around the center, then an
/// opaque pale-yellow center disc drawn last so it always sits on top.
fn draw_flower(icon: &mut RgbaImage, size: u32) {
    let center = (size / 2) as i32;
    let petal_radius = (size / 8) as i32;
    let placement_radius = (size / 4) as i32;

    for angle in (0..360).step_by(45) {
        let theta = (angle as f32).to_radians();
        let x = center + (placement_radius as f32 * theta.cos()) as i32;
        let y = center + (placement_radius as f32 * theta.sin()) as i32;
        draw_disc(icon, x, y, petal_radius, PETAL_COLOR);
    }

    draw_disc(icon, center, center, petal_radius, FLOWER_CENTER_COLOR);
}

/// Draw a filled disc, overwriting existing pixels (last drawn wins).
fn draw_disc(icon: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    let (width, height) = icon.dimensions();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && x < width as i32 && y < height as i32 {
                icon.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn parse_color(value: &str, default: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(value)
        .map(|color| {
            Rgba([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
                255,
            ])
        })
        .unwrap_or(default)
}

fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path).context("Failed to create PNG file")?;
    icon.write_to(&mut file, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}

pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// True when the error chain bottoms out in the image crate reporting an
/// unsupported format, i.e. the PNG codec was compiled out.
fn is_missing_codec(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ImageError>(),
            Some(ImageError::Unsupported(_))
        )
    })
}

fn write_missing_codec_placeholders(sizes: &[u32], out_dir: &Path) -> Result<()> {
    println!("PNG encoding not available. Creating placeholder files instead...");

    for &size in sizes {
        let filename = icon_filename(size);
        let contents = format!(
            "# Placeholder for {size}x{size} icon\n# Replace this with an actual PNG icon file\n"
        );
        fs::write(out_dir.join(&filename), contents)
            .with_context(|| format!("Failed to write placeholder {filename}"))?;
        println!("Created placeholder {filename}");
    }

    println!();
    println!("To create real icons, rebuild with the image crate's PNG codec enabled:");
    println!("    cargo build --features image/png");
    Ok(())
}

fn write_simple_placeholders(sizes: &[u32], out_dir: &Path) -> Result<()> {
    for &size in sizes {
        let filename = icon_filename(size);
        fs::write(
            out_dir.join(&filename),
            format!("Placeholder for {size}x{size} icon file"),
        )
        .with_context(|| format!("Failed to write placeholder {filename}"))?;
        println!("Created placeholder {filename}");
    }
    Ok(())
}
