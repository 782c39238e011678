use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::Result;
use crate::model::Trip;

pub(crate) fn export_trips_parquet_impl(trips: &[Trip], file: std::fs::File) -> Result<()> {
    let batch = build_record_batch(trips)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn trips_schema() -> Schema {
    Schema::new(vec![
        Field::new("driver", DataType::Utf8, false),
        Field::new("passengers", DataType::Utf8, false),
        Field::new("passenger_count", DataType::UInt32, false),
        Field::new("duration", DataType::UInt32, false),
        Field::new("cost", DataType::Float64, false),
        Field::new("discount", DataType::Float64, true),
        Field::new("discounted", DataType::Boolean, false),
    ])
}

fn build_record_batch(trips: &[Trip]) -> std::result::Result<RecordBatch, arrow::error::ArrowError> {
    let mut drivers = Vec::with_capacity(trips.len());
    let mut passengers = Vec::with_capacity(trips.len());
    let mut passenger_counts = Vec::with_capacity(trips.len());
    let mut durations = Vec::with_capacity(trips.len());
    let mut costs = Vec::with_capacity(trips.len());
    let mut discounts = Vec::with_capacity(trips.len());
    let mut discounted = Vec::with_capacity(trips.len());

    for trip in trips {
        drivers.push(trip.driver.name.clone());
        passengers.push(
            trip.passengers
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        );
        passenger_counts.push(trip.passengers.len() as u32);
        durations.push(trip.duration);
        costs.push(trip.cost);
        discounts.push(trip.discount);
        discounted.push(trip.is_discounted());
    }

    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(drivers)),
        Arc::new(StringArray::from(passengers)),
        Arc::new(UInt32Array::from(passenger_counts)),
        Arc::new(UInt32Array::from(durations)),
        Arc::new(Float64Array::from(costs)),
        Arc::new(Float64Array::from(discounts)),
        Arc::new(BooleanArray::from(discounted)),
    ];

    RecordBatch::try_new(Arc::new(trips_schema()), arrays)
}
