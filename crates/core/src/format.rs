//! Display formatting helpers
//!
//! Currency and dates keep the product's pt-BR conventions
//! (`R$ 8.000,00`, dd/mm/yyyy); labels elsewhere are English.

use chrono::NaiveDate;

/// Thousands grouping with `.` separators: `8000` -> `8.000`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// BRL currency: `8000` -> `R$ 8.000,00`
pub fn format_currency(value: u64) -> String {
    format!("R$ {},00", format_number(value))
}

/// A monthly rate: `8000` -> `R$ 8.000,00/month`
pub fn format_price(price: u32) -> String {
    format!("{}/month", format_currency(u64::from(price)))
}

/// dd/mm/yyyy
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}
