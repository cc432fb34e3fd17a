use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `date` shifted by `days`; falls back to `date` unchanged if it does
/// not parse as YYYY-MM-DD.
pub fn plus_days(date: &str, days: i64) -> String {
    match parse_date(date) {
        Some(d) => (d + Duration::days(days)).format("%Y-%m-%d").to_string(),
        None => date.to_string(),
    }
}

/// Strip a time part from an ISO datetime ("2025-10-01T09:30:00.000+0000"
/// → "2025-10-01"). Returns the input untouched when no time is present.
pub fn strip_time(s: &str) -> &str {
    s.split(['T', ' ']).next().unwrap_or(s)
}

/// Convert an Excel serial day number to a date. Serial 1 = 1899-12-31
/// (the epoch itself sits on 1899-12-30, Lotus leap-year bug included).
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Normalize a spreadsheet date cell: empty → None, Excel serial number
/// → ISO date, anything else parsed as YYYY-MM-DD (time part dropped).
pub fn normalize_spreadsheet_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(serial) = value.parse::<f64>() {
        return excel_serial_to_date(serial).map(|d| d.format("%Y-%m-%d").to_string());
    }

    parse_date(strip_time(value)).map(|d| d.format("%Y-%m-%d").to_string())
}
