use nearhash::{GeoHash, GeoHashError, nearby_geohashes};

fn main() -> Result<(), GeoHashError> {
    let origin = (48.669, 22.445);

    let hash = GeoHash::encode(&origin, 8)?;
    println!("Geohash: {}", hash);
    println!("Bottom left: {}", hash.position());
    println!("WKT: {}", hash.to_wkt());

    let cells = nearby_geohashes(&origin, 25.0, 5)?;
    println!("Cells within 25 km: {}", cells.len());
    for cell in &cells {
        println!("  {}", cell);
    }

    Ok(())
}
