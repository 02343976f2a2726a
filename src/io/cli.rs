//! Command-line interface for batch revealing PNG files as cube mosaics

use crate::algorithm::clock::Easing;
use crate::algorithm::engine::{EngineConfig, MosaicEngine};
use crate::algorithm::moves::{AnimationShape, Timing};
use crate::io::configuration::{
    DEFAULT_MOVE_DURATION_MS, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEFAULT_TOTAL_DURATION_MS,
    FRAME_INTERVAL_MS, INTER_MOVE_DELAY_MS, OUTPUT_SUFFIX, PREROLL_MOVES, ROUND_TRIP_TOLERANCE,
    SCRAMBLED_SUFFIX,
};
use crate::io::error::{MosaicError, Result};
use crate::io::image::{QuantizedMosaic, export_view_as_png, load_mosaic};
use crate::io::progress::ProgressManager;
use crate::io::render::render_front_view;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cubemosaic")]
#[command(
    author,
    version,
    about = "Turn images into cube mosaics revealed by a scramble-then-solve animation"
)]
/// Command-line arguments for the mosaic tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible scrambles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Spatial function shaping how long each cube scrambles
    #[arg(long, value_enum, default_value_t = AnimationShape::Wave)]
    pub shape: AnimationShape,

    /// Easing applied to each quarter turn
    #[arg(long, value_enum, default_value_t = Easing::SmoothStep)]
    pub easing: Easing,

    /// Total reveal duration in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_DURATION_MS)]
    pub duration: u32,

    /// Duration of one quarter turn in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_MOVE_DURATION_MS)]
    pub move_duration: u32,

    /// Tile edge length in source pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Also export the pre-rolled (scrambled) view
    #[arg(long)]
    pub scrambled: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration selected by the arguments
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            shape: self.shape,
            timing: Timing {
                total_duration_ms: self.duration,
                move_duration_ms: self.move_duration,
                inter_move_delay_ms: INTER_MOVE_DELAY_MS,
            },
            preroll_moves: PREROLL_MOVES,
            easing: self.easing,
        }
    }
}

/// Upper bound on frames needed for every cube to finish
///
/// Each move waits out the inter-move delay and its own duration, plus one
/// frame for the completing tick.
pub fn frame_budget(timing: &Timing, longest_sequence: usize) -> usize {
    let per_move = (timing.inter_move_delay_ms + timing.move_duration_ms)
        .div_ceil(FRAME_INTERVAL_MS) as usize
        + 2;
    longest_sequence * per_move + 1
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_generated(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    // Outputs of earlier runs sit next to their inputs
    fn is_generated(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(SCRAMBLED_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let QuantizedMosaic { faces, layout, .. } = load_mosaic(input_path, self.cli.tile_size)?;
        let config = self.cli.engine_config();

        let mut engine = MosaicEngine::seeded(config, self.cli.seed);
        engine.initialize(&faces, layout)?;

        let (columns, rows) = (layout.columns(), layout.rows());
        if self.cli.scrambled {
            let view = render_front_view(engine.store(), columns, rows)?;
            export_view_as_png(
                &view,
                layout.tile_size,
                &Self::get_scrambled_path(input_path),
            )?;
        }

        let (_, total_moves) = engine.progress();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, total_moves);
        }

        let longest = (0..engine.cube_count())
            .filter_map(|cube| engine.params(cube).map(|params| params.moves_length()))
            .max()
            .unwrap_or(0);
        let budget = frame_budget(&config.timing, longest);

        let mut frames = 0;
        while !engine.is_finished() {
            if frames >= budget {
                return Err(MosaicError::RevealStalled { frames });
            }
            engine.advance(f64::from(FRAME_INTERVAL_MS))?;
            frames += 1;

            if let Some(ref mut pm) = self.progress_manager {
                pm.update_moves(index, engine.progress().0);
            }
        }
        log::debug!(
            "{}: revealed in {frames} frames, events {:?}",
            input_path.display(),
            engine.drain_events()
        );

        let drift = engine.max_drift();
        if drift > ROUND_TRIP_TOLERANCE {
            return Err(MosaicError::RoundTripDrift {
                drift,
                tolerance: ROUND_TRIP_TOLERANCE,
            });
        }

        let view = render_front_view(engine.store(), columns, rows)?;
        export_view_as_png(&view, layout.tile_size, &Self::get_output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }

    /// Path of the revealed mosaic written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::with_suffix(input_path, OUTPUT_SUFFIX)
    }

    /// Path of the scrambled snapshot written for `input_path`
    pub fn get_scrambled_path(input_path: &Path) -> PathBuf {
        Self::with_suffix(input_path, SCRAMBLED_SUFFIX)
    }
}
