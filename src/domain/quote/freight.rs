//! Indicative pricing shown next to every quote form.

use serde::Serialize;

/// Base price per kilogram in rupees, before tax.
pub const BASE_RATE_PER_KG: f64 = 40.0;

pub const GST_RATE: f64 = 0.05;

/// Quantities listed in the price table on city pages.
pub const FREIGHT_LADDER_KG: [u32; 5] = [50, 100, 250, 500, 1000];

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FreightEstimate {
    pub quantity_kg: u32,
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

impl FreightEstimate {
    pub fn for_quantity(quantity_kg: u32) -> Self {
        let subtotal = f64::from(quantity_kg) * BASE_RATE_PER_KG;
        let gst = subtotal * GST_RATE;
        Self {
            quantity_kg,
            subtotal,
            gst,
            total: subtotal + gst,
        }
    }

    /// Pre-filled chat message asking for a quote at this quantity.
    pub fn quote_message(&self, city: &str, state: &str) -> String {
        format!(
            "Hi, I need a quote for {}kg of bulk CTC tea for {city}, {state}. Expected amount: ₹{}",
            self.quantity_kg,
            format_inr(self.total)
        )
    }
}

/// Formats a rupee amount with Indian digit grouping (`1,05,000`).
///
/// Amounts are rounded to paise; a zero fractional part is omitted.
pub fn format_inr(amount: f64) -> String {
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = (paise / 100).to_string();
    let fraction = paise % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        let (head, last_three) = rupees.split_at(rupees.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{last_three}", groups.join(","))
    };

    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped}.{}", f / 10),
        f => format!("{sign}{grouped}.{f:02}"),
    }
}
