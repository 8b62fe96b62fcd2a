use glidepath::geometry::path::{point_on_path, total_length};
use glidepath::model::{PathSegment, Point};
use std::time::Instant;

fn build_path(segments_target: usize) -> Vec<PathSegment> {
    // Alternate the three segment kinds across a horizontal band.
    let mut segs = Vec::with_capacity(segments_target);
    for i in 0..segments_target {
        let x = i as f32 * 24.0;
        match i % 3 {
            0 => segs.push(PathSegment::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x + 24.0, 12.0),
            }),
            1 => segs.push(PathSegment::Quadratic {
                from: Point::new(x, 12.0),
                ctrl: Point::new(x + 12.0, -16.0),
                to: Point::new(x + 24.0, 0.0),
            }),
            _ => segs.push(PathSegment::Arc {
                center: Point::new(x + 12.0, 0.0),
                radius: 12.0,
                start_angle: std::f32::consts::PI,
                end_angle: 0.0,
            }),
        }
    }
    segs
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut segments = 300usize;
    let mut samples = 100_000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--segments=") { if let Ok(v) = val.parse() { segments = v; } }
        else if let Some(val) = a.strip_prefix("--samples=") { if let Ok(v) = val.parse() { samples = v; } }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }

    let path = build_path(segments);
    let total = total_length(&path);

    let mut times_ms: Vec<f64> = Vec::with_capacity(samples);
    let mut acc = 0.0f32;
    let start_all = Instant::now();
    for i in 0..samples {
        let t = (i as f32 * 0.618_034) % 1.0;
        let start = Instant::now();
        if let Some(p) = point_on_path(&path, t) {
            acc += p.x + p.y;
        }
        times_ms.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    let wall_ms = start_all.elapsed().as_secs_f64() * 1000.0;

    times_ms.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let p50 = percentile(&times_ms, 0.50);
    let p99 = percentile(&times_ms, 0.99);
    println!(
        "segments={} total_len={:.1} samples={} wall_ms={:.2} p50_ms={:.5} p99_ms={:.5} (acc={:.1})",
        segments, total, samples, wall_ms, p50, p99, acc
    );

    if let Some(budget) = assert_ms {
        if p99 > budget {
            eprintln!("p99 {:.5}ms exceeds budget {:.5}ms", p99, budget);
            std::process::exit(1);
        }
    }
}
