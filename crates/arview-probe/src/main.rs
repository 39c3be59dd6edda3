use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};

use arview_utils::coords::{screen_to_camera, CameraMapRequest, PixelSize, ScaledVideo, ScreenSpan};
use arview_utils::logging::{init_logging, LoggingConfig};
use arview_utils::math::ortho_matrix;

/// Inspect screen-to-camera mapping and projection matrices without a device.
#[derive(Debug, Parser)]
#[command(name = "arview-probe", version)]
struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Map a screen point (and optional extent) onto the camera image.
    Map {
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dx: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dy: i32,
        /// Screen size as WIDTHxHEIGHT.
        #[arg(long, value_parser = parse_size)]
        screen: PixelSize,
        /// Camera image size as WIDTHxHEIGHT (landscape).
        #[arg(long, value_parser = parse_size)]
        camera: PixelSize,
        /// Display rotation in quarter turns (0-3).
        #[arg(long, default_value_t = 0)]
        display_rotation: i32,
        /// Camera sensor orientation in degrees.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        camera_rotation: i32,
    },
    /// Print an orthographic projection matrix.
    Ortho {
        #[arg(allow_negative_numbers = true)]
        left: f32,
        #[arg(allow_negative_numbers = true)]
        right: f32,
        #[arg(allow_negative_numbers = true)]
        bottom: f32,
        #[arg(allow_negative_numbers = true)]
        top: f32,
        #[arg(allow_negative_numbers = true)]
        near: f32,
        #[arg(allow_negative_numbers = true)]
        far: f32,
    },
}

fn parse_size(s: &str) -> Result<PixelSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let width = w.trim().parse::<i32>().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let height = h.trim().parse::<i32>().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok(PixelSize::new(width, height))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    match cli.command {
        Command::Map { x, y, dx, dy, screen, camera, display_rotation, camera_rotation } => {
            ensure!(!screen.is_empty(), "screen size must be positive, got {}x{}", screen.width, screen.height);
            ensure!(!camera.is_empty(), "camera size must be positive, got {}x{}", camera.width, camera.height);
            if !camera.is_landscape() {
                log::warn!("camera size {}x{} is not landscape", camera.width, camera.height);
            }

            let request = CameraMapRequest::new(ScreenSpan::new(x, y, dx, dy), screen, camera)
                .rotations(display_rotation, camera_rotation);
            let rotation = request.corrected_rotation();
            let (_, oriented) = rotation.apply(request.span, screen);
            let scaled = ScaledVideo::fit(camera, oriented);
            log::info!(
                "corrected rotation {}°, fit {:?}, scaled video {}x{}",
                rotation.degrees(),
                scaled.fit,
                scaled.width,
                scaled.height
            );

            let out = screen_to_camera(&request);
            println!("camera x  = {}", fmt_field(out.x));
            println!("camera y  = {}", fmt_field(out.y));
            println!("camera dx = {}", fmt_field(out.dx));
            println!("camera dy = {}", fmt_field(out.dy));
        }
        Command::Ortho { left, right, bottom, top, near, far } => {
            let m = ortho_matrix(left, right, bottom, top, near, far);
            if !m.is_finite() {
                log::warn!("degenerate bounds produced non-finite entries");
            }
            // Rows of a column-major matrix.
            for row in 0..4 {
                println!(
                    "[{:>10.6} {:>10.6} {:>10.6} {:>10.6}]",
                    m.get(row, 0),
                    m.get(row, 1),
                    m.get(row, 2),
                    m.get(row, 3)
                );
            }
        }
    }

    Ok(())
}

fn fmt_field(v: Option<i32>) -> String {
    v.map_or_else(|| "-".to_owned(), |v| v.to_string())
}
