use refugee_charts::models::{Breakpoint, YearDomain};
use refugee_charts::viz::{self, ChartConfig, ChartStyle, Ink, RecordingSurface};
use std::fs;
use std::path::PathBuf;

fn sample_series() -> Vec<f64> {
    (0..40).map(|i| (i as f64) * 150_000.0).collect()
}

fn config<'a>(data: &'a [f64], ticks: &'a [f64], width: f64) -> ChartConfig<'a> {
    ChartConfig {
        width,
        data,
        aspect_ratio: 5.0,
        max: 12.0,
        y_ticks: ticks,
        years: YearDomain::new(1975, 2014),
        breakpoint: Breakpoint::classify(width),
    }
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("refugee_charts_{}.svg", name));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
    fs::remove_file(&path).ok();
}

#[test]
fn svg_files_render_for_both_breakpoints() {
    let data = sample_series();
    let desktop_ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
    let mobile_ticks = [0.0, 6.0, 12.0];
    for (i, &(width, ticks)) in [(1000.0, &desktop_ticks[..]), (480.0, &mobile_ticks[..])]
        .iter()
        .enumerate()
    {
        write_and_check(
            |p| {
                let cfg = config(&data, ticks, width);
                let svg = viz::render_svg(&cfg, &ChartStyle::default()).unwrap();
                fs::write(p, svg).unwrap();
            },
            &format!("bp{}", i),
        );
    }
}

#[test]
fn svg_dimensions_follow_width_and_aspect() {
    let data = sample_series();
    let ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
    let cfg = config(&data, &ticks, 1000.0);
    let svg = viz::render_svg(&cfg, &ChartStyle::default()).unwrap();
    assert!(svg.contains("width=\"1000\""));
    // ceil(1000 / 5) = 200
    assert!(svg.contains("height=\"200\""));
}

#[test]
fn recording_surface_sees_a_bar_per_year_and_all_ticks() {
    let data = sample_series();
    let ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
    let cfg = config(&data, &ticks, 1000.0);
    let mut rec = RecordingSurface::new();
    viz::render_column_chart(&cfg, &mut rec).unwrap();

    assert_eq!(rec.rects(Ink::Bar).len(), 40);
    // one x tick mark per year + the baseline, plus y axis line and 5 ticks
    assert_eq!(rec.lines(Ink::Axis).len(), 40 + 1 + 1 + 5);
    assert_eq!(rec.lines(Ink::Grid).len(), 5);
    // decimated x labels: 1975, 1980, ..., 2010 -> 8, plus 5 y labels
    assert_eq!(rec.labels().len(), 8 + 5);
    assert!(rec.labels().contains(&"1975"));
    assert!(rec.labels().contains(&"12"));
}

#[test]
fn mobile_layout_abbreviates_year_labels() {
    let data = sample_series();
    let ticks = [0.0, 6.0, 12.0];
    let cfg = config(&data, &ticks, 480.0);
    let mut rec = RecordingSurface::new();
    viz::render_column_chart(&cfg, &mut rec).unwrap();
    assert!(rec.labels().contains(&"'75"));
    assert!(rec.labels().contains(&"'05"));
    assert!(!rec.labels().contains(&"1975"));
}
