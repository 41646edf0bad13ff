use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};
use radar_coverage_rs::radar_pipeline::{
    CoveragePipeline, HsvImage, HueScale, JpegFileWriter, RadarConfig, RegionOfInterest,
    classify::band_masks, source::FileRadarSource,
};

/// Synthetic radar frame: diagonal bands of legend colors over black.
fn generate_mock_radar(width: u32, height: u32) -> DynamicImage {
    let palette = [
        Rgb([0, 0, 0]),
        Rgb([75, 177, 54]),
        Rgb([255, 128, 0]),
        Rgb([170, 0, 255]),
        Rgb([0, 0, 0]),
    ];
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        palette[((x + y) / 7) as usize % palette.len()]
    }))
}

fn pipeline_for(width: u32, height: u32) -> CoveragePipeline<FileRadarSource, JpegFileWriter> {
    let config = RadarConfig::builder()
        .roi(RegionOfInterest::new(width / 4, height / 4, width * 3 / 4, height * 3 / 4))
        .save_images(false)
        .build();
    CoveragePipeline::from_file(config, "unused.jpg").expect("default bands are valid")
}

fn benchmark_analysis_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_by_size");

    let sizes = vec![
        (320, 240, "320x240"),
        (800, 600, "800x600"),
        (1600, 1200, "1600x1200"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_radar(width, height);
        let pipeline = pipeline_for(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| pipeline.analyze(black_box(image)).map(|a| a.coverage));
        });
    }

    group.finish();
}

fn benchmark_classification_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification_stages");
    let image = generate_mock_radar(800, 600);
    let rgb = image.to_rgb8();
    let bands = RadarConfig::default().bands;

    group.bench_function("convert_hsv", |b| {
        b.iter(|| HsvImage::from_rgb(black_box(&rgb), HueScale::Half));
    });

    let hsv = HsvImage::from_rgb(&rgb, HueScale::Half);
    group.bench_function("band_masks", |b| {
        b.iter(|| band_masks(black_box(&hsv), &bands));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analysis_sizes,
    benchmark_classification_stages
);
criterion_main!(benches);
