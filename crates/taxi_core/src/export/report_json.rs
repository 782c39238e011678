use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::report::ParkReport;

pub(crate) fn export_report_json_impl(report: &ParkReport, file: std::fs::File) -> Result<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}
