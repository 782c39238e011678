use crate::error::Result;
use crate::queries::DriverIncome;

pub(crate) fn export_driver_income_csv_impl(
    incomes: &[DriverIncome],
    file: std::fs::File,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["driver", "income", "share_pct"])?;
    for income in incomes {
        wtr.write_record([
            income.driver.name.as_str(),
            &income.income.to_string(),
            &income.share_pct.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
