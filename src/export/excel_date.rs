use chrono::NaiveDate;

/// Excel number format applied to date cells.
pub(crate) const EXCEL_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Interpret a `YYYY-MM-DD` cell as an Excel serial date.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

/// Calendar date of an Excel serial; any time-of-day fraction is dropped.
pub(crate) fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    excel_epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}
