//! The generation loop: one annotated JPEG per tick.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::context::ServiceContext;
use crate::error::GenError;
use crate::output::{ensure_output_dir, image_path, save_jpeg};
use crate::render::render_test_image;

/// Printed when an unbounded run is interrupted.
pub const STOPPED_MESSAGE: &str = "\nImage generation stopped by user.";

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of images written.
    pub created: u64,
    /// Whether the run ended because of an interrupt.
    pub interrupted: bool,
}

/// Render the image for `index` and write it into `output_dir`.
///
/// The directory must already exist. Returns the path written.
///
/// # Errors
///
/// Returns an error if encoding or writing the file fails.
pub fn create_image(
    ctx: &ServiceContext,
    output_dir: &Path,
    index: u64,
    quality: u8,
) -> Result<PathBuf, GenError> {
    let img = render_test_image(index, ctx.clock.now());
    let path = image_path(output_dir, index);
    save_jpeg(&img, quality, &path)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Generate images according to `config`.
///
/// With a count, indices `0..count` are written with a pause between
/// consecutive images and none after the last; `shutdown` is never polled.
/// Without a count, images are written and paused after until `shutdown`
/// resolves. `shutdown` is polled once before the first image, then only
/// between images.
///
/// # Errors
///
/// Returns the first filesystem or encoding error; nothing is retried.
pub async fn run<F>(
    ctx: &ServiceContext,
    config: &RunConfig,
    shutdown: F,
) -> Result<RunSummary, GenError>
where
    F: Future<Output = ()>,
{
    ensure_output_dir(&config.output_dir)?;
    log::debug!(
        "Generating into {} every {:?} (count: {:?}, quality: {})",
        config.output_dir.display(),
        config.interval,
        config.count,
        config.quality
    );

    match config.count {
        Some(count) => run_bounded(ctx, config, count).await,
        None => run_unbounded(ctx, config, shutdown).await,
    }
}

async fn run_bounded(
    ctx: &ServiceContext,
    config: &RunConfig,
    count: u32,
) -> Result<RunSummary, GenError> {
    for i in 0..count {
        create_image(ctx, &config.output_dir, u64::from(i), config.quality)?;
        println!("Created image {}/{count}", i + 1);
        if i + 1 < count {
            ctx.clock.pause(config.interval).await;
        }
    }
    Ok(RunSummary { created: u64::from(count), interrupted: false })
}

async fn run_unbounded<F>(
    ctx: &ServiceContext,
    config: &RunConfig,
    shutdown: F,
) -> Result<RunSummary, GenError>
where
    F: Future<Output = ()>,
{
    let mut shutdown = std::pin::pin!(shutdown);

    // Polling once here installs any signal listener before a file is written.
    tokio::select! {
        biased;
        () = &mut shutdown => {
            log::info!("Interrupt received before the first image");
            println!("{STOPPED_MESSAGE}");
            return Ok(RunSummary { created: 0, interrupted: true });
        }
        () = std::future::ready(()) => {}
    }

    let mut created: u64 = 0;
    loop {
        create_image(ctx, &config.output_dir, created, config.quality)?;
        created += 1;
        println!("Created image {created}");

        tokio::select! {
            biased;
            () = &mut shutdown => {
                log::info!("Interrupt received after {created} images");
                println!("{STOPPED_MESSAGE}");
                return Ok(RunSummary { created, interrupted: true });
            }
            () = ctx.clock.pause(config.interval) => {}
        }
    }
}
