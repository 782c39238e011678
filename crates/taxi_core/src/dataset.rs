//! Reading and writing parks as JSON.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::TaxiPark;

pub fn read_park<R: Read>(reader: R) -> Result<TaxiPark> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_park<W: Write>(writer: W, park: &TaxiPark) -> Result<()> {
    serde_json::to_writer_pretty(writer, park)?;
    Ok(())
}

pub fn load_park_json<P: AsRef<Path>>(path: P) -> Result<TaxiPark> {
    let path = path.as_ref();
    let park = read_park(BufReader::new(File::open(path)?))?;
    info!(
        path = %path.display(),
        drivers = park.all_drivers.len(),
        passengers = park.all_passengers.len(),
        trips = park.trips.len(),
        "loaded park"
    );
    Ok(park)
}

pub fn save_park_json<P: AsRef<Path>>(park: &TaxiPark, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_park(&mut writer, park)?;
    writer.flush()?;
    info!(path = %path.display(), trips = park.trips.len(), "saved park");
    Ok(())
}
