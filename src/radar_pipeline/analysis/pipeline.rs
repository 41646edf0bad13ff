use std::path::Path;

use chrono::Local;
use image::{DynamicImage, RgbImage};
use tracing::{info, info_span, instrument};

use crate::radar_pipeline::{
    analysis::types::{CoverageAnalysis, CoverageReport},
    classify::{HsvImage, apply_mask, band_masks, combine_masks, count_foreground},
    common::{
        error::{CoverageError, Result},
        timing::PipelineTimings,
    },
    config::RadarConfig,
    coverage::coverage_percentage,
    output::{JpegFileWriter, OutputWriter, annotate, timestamped_paths, write_all},
    region::crop,
    source::{FileRadarSource, HttpRadarSource, RadarImageSource, decode_radar_image},
};

pub struct CoveragePipeline<S: RadarImageSource, W: OutputWriter> {
    source: S,
    writer: W,
    config: RadarConfig,
}

impl CoveragePipeline<HttpRadarSource, JpegFileWriter> {
    /// Pipeline fetching `config.source_url` over HTTP.
    pub fn new(config: RadarConfig) -> Result<Self> {
        let source = HttpRadarSource::new(config.source_url.clone(), config.request_timeout())?;
        Self::with_custom(source, JpegFileWriter, config)
    }
}

impl CoveragePipeline<FileRadarSource, JpegFileWriter> {
    /// Pipeline reading a saved radar image instead of fetching one.
    pub fn from_file<P: AsRef<Path>>(config: RadarConfig, path: P) -> Result<Self> {
        Self::with_custom(FileRadarSource::new(path), JpegFileWriter, config)
    }
}

fn rgb_view(image: &DynamicImage) -> Result<&RgbImage> {
    image.as_rgb8().ok_or_else(|| {
        CoverageError::ColorSpace(format!(
            "expected 3-channel 8-bit image, got {:?}",
            image.color()
        ))
    })
}

impl<S: RadarImageSource, W: OutputWriter> CoveragePipeline<S, W> {
    pub fn with_custom(source: S, writer: W, config: RadarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            writer,
            config,
        })
    }

    /// Classifies `image` and measures coverage inside the configured region.
    pub fn analyze(&self, image: &DynamicImage) -> Result<CoverageAnalysis> {
        self.analyze_timed(image, &mut PipelineTimings::new())
    }

    fn analyze_timed(
        &self,
        image: &DynamicImage,
        timings: &mut PipelineTimings,
    ) -> Result<CoverageAnalysis> {
        let combined_mask = {
            let hsv = {
                let _span = info_span!("convert_hsv").entered();
                timings.time("convert_hsv", || {
                    HsvImage::from_dynamic(image, self.config.hue_scale)
                })?
            };

            let masks = {
                let _span = info_span!("classify_bands", bands = self.config.bands.len()).entered();
                timings.time("classify_bands", || band_masks(&hsv, &self.config.bands))
            };

            let _span = info_span!("combine_masks").entered();
            timings.time("combine_masks", || combine_masks(&masks))?
        };

        let segmented = {
            let _span = info_span!("apply_mask").entered();
            let rgb = rgb_view(image)?;
            timings.time("apply_mask", || apply_mask(rgb, &combined_mask))?
        };

        let (region_mask, region_segmented) = {
            let _span = info_span!("crop_region", roi = %self.config.roi).entered();
            timings.time("crop_region", || -> Result<_> {
                Ok((
                    crop(&combined_mask, &self.config.roi)?,
                    crop(&segmented, &self.config.roi)?,
                ))
            })?
        };

        let coverage = {
            let _span = info_span!("compute_coverage").entered();
            timings.time("compute_coverage", || coverage_percentage(&region_mask))?
        };

        let foreground_pixels = count_foreground(&region_mask);
        let region_pixels = u64::from(region_mask.width()) * u64::from(region_mask.height());
        info!(
            width = region_mask.width(),
            height = region_mask.height(),
            foreground_pixels,
            coverage,
            "Coverage computed"
        );

        Ok(CoverageAnalysis {
            coverage,
            foreground_pixels,
            region_pixels,
            combined_mask,
            segmented,
            region_mask,
            region_segmented,
        })
    }

    fn prepare_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            CoverageError::Write(format!("{}: {}", self.config.output_dir.display(), e))
        })
    }

    /// Fetches one radar image, measures it, and writes the annotated outputs.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn run(&self) -> Result<CoverageReport> {
        let mut timings = PipelineTimings::new();
        info!("Starting radar coverage run");

        timings.time("prepare_output_dir", || self.prepare_output_dir())?;

        let image = {
            let bytes = {
                let _span = info_span!("fetch").entered();
                timings.time("fetch", || self.source.fetch())?
            };
            let _span = info_span!("decode", bytes = bytes.len()).entered();
            timings.time("decode", || decode_radar_image(&bytes))?
        };

        let analysis = self.analyze_timed(&image, &mut timings)?;
        let rgb = rgb_view(&image)?;

        let annotated = {
            let _span = info_span!("annotate").entered();
            timings.time("annotate", || {
                annotate(rgb, &self.config.roi, analysis.coverage)
            })
        };

        let mut outputs = vec![(&annotated, self.config.preview_path.clone())];
        if self.config.save_images {
            let paths = timestamped_paths(&self.config.output_dir, &Local::now().naive_local());
            outputs.push((&annotated, paths.radar));
            outputs.push((&analysis.segmented, paths.segmented));
        }

        let outcome = {
            let _span = info_span!("write_outputs", files = outputs.len()).entered();
            timings.time("write_outputs", || {
                write_all(&self.writer, &outputs, self.config.jpeg_quality)
            })
        };

        info!(
            written = outcome.written.len(),
            failed = outcome.failed.len(),
            "Run complete"
        );

        Ok(CoverageReport {
            coverage: analysis.coverage,
            image_width: rgb.width(),
            image_height: rgb.height(),
            foreground_pixels: analysis.foreground_pixels,
            region_pixels: analysis.region_pixels,
            written: outcome.written,
            failed_writes: outcome.failed,
            timings,
        })
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RadarConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
