//! Stat Card Component
//!
//! Displays one aggregate dashboard metric.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Metric label
    label: &'static str,
    /// Icon shown next to the label
    icon: &'static str,
    /// Formatted value, `"—"` while the region is absent
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}

/// Dollar amount with thousands separators; whole amounts drop the cents.
pub fn format_money(value: f64) -> String {
    // Round once to integer cents so a fraction like .999 carries into the dollars
    let total_cents = (value.abs() * 100.0).round() as u64;
    let cents = total_cents % 100;
    let whole = group_thousands(total_cents / 100);
    let sign = if value < 0.0 { "-" } else { "" };
    if cents == 0 {
        format!("{}${}", sign, whole)
    } else {
        format!("{}${}.{:02}", sign, whole, cents)
    }
}

/// Plain count with thousands separators
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(9.99), "$9.99");
        assert_eq!(format_money(1250.5), "$1,250.50");
        assert_eq!(format_money(1_000_000.0), "$1,000,000");
    }

    #[test]
    fn money_rounding_carries_into_dollars() {
        assert_eq!(format_money(9.999), "$10");
        assert_eq!(format_money(0.995), "$1");
        assert_eq!(format_money(1999.999), "$2,000");
        assert_eq!(format_money(9.994), "$9.99");
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
