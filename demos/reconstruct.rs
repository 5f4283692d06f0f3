//! Reconstructs a small drawing and prints what was found.
//!
//! Usage:
//! ```text
//! cargo run --example reconstruct
//! RUST_LOG=wiregraph=debug cargo run --example reconstruct
//! ```

use wiregraph::{BuildPolygons, ReconstructOptions, Segment, WiregraphError};

fn main() -> Result<(), WiregraphError> {
    // Default: WARN for everything, INFO for wiregraph.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wiregraph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // A unit square drawn out of order, an L-shaped path and one stray segment.
    let segments = vec![
        Segment::from_coords([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        Segment::from_coords([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        Segment::from_coords([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
        Segment::from_coords([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
        Segment::from_coords([3.0, 0.0, 0.0], [3.0, 2.0, 0.0]),
        Segment::from_coords([3.0, 2.0, 0.0], [5.0, 2.0, 0.0]),
        Segment::from_coords([7.0, 0.0, 0.0], [8.0, 1.0, 0.0]),
    ];

    let result = BuildPolygons::new(segments)
        .with_options(ReconstructOptions::new().with_tolerance(1e-6))
        .execute()?;

    for (i, polygon) in result.polygons.iter().enumerate() {
        println!(
            "polygon {i}: {} vertices, area {:.3}, segments {:?}",
            polygon.shape.vertices().len(),
            polygon.shape.signed_area().abs(),
            polygon.segments
        );
    }
    for (i, polyline) in result.polylines.iter().enumerate() {
        println!(
            "polyline {i}: length {:.3}, segments {:?}",
            polyline.shape.length(),
            polyline.segments
        );
    }
    for segment in &result.isolated {
        println!("isolated: {:?} -> {:?}", segment.shape.start, segment.shape.end);
    }
    Ok(())
}
