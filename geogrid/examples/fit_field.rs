//! Lays a grid over the annotations of a GeoJSON file and prints their shapes on it.
//!
//! Run with `cargo run --example fit_field [path/to/file.geojson]`. Without a path the bundled test fields are used.
//! Set `RUST_LOG=debug` to see how the grid is fitted.

use geogrid::geojson::read_rings;
use geogrid::{CellSize, FieldGrid, GeoGridError, LocalPoint};

const DEFAULT_FIELDS: &str = include_str!("../test-data/three_fields.geojson");

fn main() -> Result<(), GeoGridError> {
    env_logger::init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|err| GeoGridError::Conversion(format!("cannot read {path}: {err}")))?,
        None => DEFAULT_FIELDS.to_string(),
    };

    let rings = read_rings(&text)?;
    let grid = FieldGrid::fit(&rings, CellSize::square(2.5, 10.0))?;

    println!("bearing:  {}", grid.bearing());
    println!("size:     {}", grid.size());
    println!("top left: {}", grid.top_left());

    for ring in rings.iter().filter(|r| r.is_usable()) {
        let shape = grid.polygon_shape(ring, None);
        let vertices: Vec<String> = shape.points().iter().map(LocalPoint::to_string).collect();
        println!("{}: {}", ring.label().unwrap_or("<unnamed>"), vertices.join(" "));
    }

    Ok(())
}
