use anyhow::Result;
use polyprism::{Field, GravityConfig, Point, Polygon, Prism, Vertex, gravitational_field};
use serde::Serialize;

#[derive(Serialize)]
struct Sample {
    point: Point,
    gz_mgal: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 200 m x 200 m block buried between 100 m and 300 m
    let poly = Polygon::new(vec![
        Vertex::new(-100., -100.),
        Vertex::new(-100., 100.),
        Vertex::new(100., 100.),
        Vertex::new(100., -100.),
        Vertex::new(-100., -100.),
    ])?;
    let prism = Prism::new(poly, 100., 300., 2670.);
    println!("{:.1}", prism.polygon);

    // Profile along x at the surface
    let points: Vec<Point> = (-10..=10)
        .map(|i| Point::new(50. * i as f64, 0., 0.))
        .collect();
    let gz = gravitational_field(&points, &[prism], Field::Gz, &GravityConfig::default());

    let samples: Vec<Sample> = points
        .into_iter()
        .zip(gz)
        .map(|(point, gz_mgal)| Sample { point, gz_mgal })
        .collect();
    log::info!("Computed {} samples", samples.len());
    println!("{}", serde_json::to_string_pretty(&samples)?);

    Ok(())
}
