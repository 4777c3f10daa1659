//! Business Modules
//!
//! Static per-module configuration and row projection. The five business
//! domains form a closed enum; each carries a `'static` descriptor with the
//! backend endpoint, the key holding the record array, and the table columns.
//! Unknown identifiers only exist at the string boundary (`Module::from_slug`).

use serde_json::Value;

/// The five business modules served by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    Crm,
    Inventory,
    Accounting,
    Hr,
    Sales,
}

/// Static rendering configuration for one module.
#[derive(Debug)]
pub struct ModuleDescriptor {
    /// Full title shown above the table
    pub title: &'static str,
    /// Endpoint suffix under `/api/{slug}/`
    pub endpoint: &'static str,
    /// Key holding the record array in the response payload
    pub records_key: &'static str,
    /// Ordered column headers
    pub columns: &'static [&'static str],
}

static CRM: ModuleDescriptor = ModuleDescriptor {
    title: "Customer Relationship Management",
    endpoint: "leads",
    records_key: "leads",
    columns: &["ID", "Name", "Email", "Company", "Status", "Created"],
};

static INVENTORY: ModuleDescriptor = ModuleDescriptor {
    title: "Inventory Management",
    endpoint: "products",
    records_key: "products",
    columns: &["SKU", "Name", "Type", "Price", "Stock", "Status"],
};

static ACCOUNTING: ModuleDescriptor = ModuleDescriptor {
    title: "Accounting & Finance",
    endpoint: "invoices",
    records_key: "invoices",
    columns: &["Invoice #", "Customer", "Amount", "Status", "Due Date"],
};

static HR: ModuleDescriptor = ModuleDescriptor {
    title: "Human Resources",
    endpoint: "employees",
    records_key: "employees",
    columns: &["ID", "Name", "Email", "Department", "Hire Date", "Status"],
};

static SALES: ModuleDescriptor = ModuleDescriptor {
    title: "Sales Management",
    endpoint: "orders",
    records_key: "orders",
    columns: &["Order #", "Customer", "Amount", "Status", "Order Date"],
};

impl Module {
    /// All modules in navigation order
    pub const ALL: [Module; 5] = [
        Module::Crm,
        Module::Inventory,
        Module::Accounting,
        Module::Hr,
        Module::Sales,
    ];

    /// URL path segment for this module
    pub fn slug(self) -> &'static str {
        match self {
            Module::Crm => "crm",
            Module::Inventory => "inventory",
            Module::Accounting => "accounting",
            Module::Hr => "hr",
            Module::Sales => "sales",
        }
    }

    /// Short label for navigation and page titles
    pub fn label(self) -> &'static str {
        match self {
            Module::Crm => "CRM",
            Module::Inventory => "Inventory",
            Module::Accounting => "Accounting",
            Module::Hr => "HR",
            Module::Sales => "Sales",
        }
    }

    /// Icon shown next to the navigation label
    pub fn icon(self) -> &'static str {
        match self {
            Module::Crm => "🤝",
            Module::Inventory => "📦",
            Module::Accounting => "💰",
            Module::Hr => "👥",
            Module::Sales => "🛒",
        }
    }

    /// Parse a free-form identifier (e.g. from a URL fragment).
    ///
    /// Returns `None` for anything outside the five known modules; callers
    /// render a "configuration not found" placeholder and skip the fetch.
    pub fn from_slug(slug: &str) -> Option<Module> {
        Module::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// Rendering configuration for this module
    pub fn descriptor(self) -> &'static ModuleDescriptor {
        match self {
            Module::Crm => &CRM,
            Module::Inventory => &INVENTORY,
            Module::Accounting => &ACCOUNTING,
            Module::Hr => &HR,
            Module::Sales => &SALES,
        }
    }
}

/// Visual category for status-like values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Danger,
    Warning,
    Info,
    Success,
    Primary,
    Neutral,
}

impl StatusTone {
    /// Badge styling for this tone
    pub fn badge_class(self) -> &'static str {
        match self {
            StatusTone::Danger => "bg-red-600 text-white",
            StatusTone::Warning => "bg-yellow-600 text-white",
            StatusTone::Info => "bg-cyan-600 text-white",
            StatusTone::Success => "bg-green-600 text-white",
            StatusTone::Primary => "bg-blue-600 text-white",
            StatusTone::Neutral => "bg-gray-600 text-gray-200",
        }
    }
}

/// Fixed status-to-tone lookup. Unrecognized statuses map to `Neutral`.
pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "new" => StatusTone::Danger,
        "contacted" | "pending" => StatusTone::Warning,
        "qualified" | "confirmed" => StatusTone::Info,
        "converted" | "active" | "completed" | "paid" => StatusTone::Success,
        "draft" => StatusTone::Neutral,
        "sent" => StatusTone::Primary,
        _ => StatusTone::Neutral,
    }
}

/// One rendered table cell
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Badge { label: String, tone: StatusTone },
}

impl Cell {
    fn text(value: impl Into<String>) -> Cell {
        Cell::Text(value.into())
    }

    fn badge(label: impl Into<String>, tone: StatusTone) -> Cell {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }
}

/// Project one backend record into an ordered row of cells.
///
/// Pure with respect to the record: absent optional fields become `"-"`,
/// statuses are badged through the fixed tone table, amounts get a `$` prefix
/// and dates are reformatted for display.
pub fn project_row(module: Module, record: &Value) -> Vec<Cell> {
    match module {
        Module::Crm => vec![
            text_cell(record, "id"),
            Cell::Text(person_name(record)),
            text_cell(record, "email"),
            text_cell(record, "company"),
            status_cell(record),
            date_cell(record, "created_at"),
        ],
        Module::Inventory => vec![
            text_cell(record, "sku"),
            text_cell(record, "name"),
            text_cell(record, "type"),
            amount_cell(record, "selling_price"),
            text_cell(record, "current_stock"),
            active_cell(record),
        ],
        Module::Accounting => vec![
            text_cell(record, "invoice_number"),
            text_cell(record, "customer_id"),
            amount_cell(record, "total_amount"),
            status_cell(record),
            date_cell(record, "due_date"),
        ],
        Module::Hr => vec![
            text_cell(record, "employee_id"),
            Cell::Text(person_name(record)),
            text_cell(record, "email"),
            text_cell(record, "department_id"),
            date_cell(record, "hire_date"),
            status_cell(record),
        ],
        Module::Sales => vec![
            text_cell(record, "order_number"),
            text_cell(record, "customer_id"),
            amount_cell(record, "total_amount"),
            status_cell(record),
            date_cell(record, "order_date"),
        ],
    }
}

/// Render a scalar field as display text, `"-"` when absent
fn display_value(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn text_cell(record: &Value, key: &str) -> Cell {
    Cell::text(display_value(record, key).unwrap_or_else(|| "-".to_string()))
}

/// `$`-prefixed amount, `"-"` when absent. The JSON number is rendered as-is
/// so `9.99` stays `$9.99` and `10` stays `$10`.
fn amount_cell(record: &Value, key: &str) -> Cell {
    let label = match record.get(key) {
        Some(Value::Number(n)) => format!("${}", n),
        Some(Value::String(s)) if !s.is_empty() => format!("${}", s),
        _ => "-".to_string(),
    };
    Cell::Text(label)
}

fn date_cell(record: &Value, key: &str) -> Cell {
    let label = match record.get(key) {
        Some(Value::String(s)) => format_date(s),
        _ => "-".to_string(),
    };
    Cell::Text(label)
}

fn status_cell(record: &Value) -> Cell {
    match record.get("status").and_then(Value::as_str) {
        Some(status) => Cell::badge(status, status_tone(status)),
        None => Cell::badge("-", StatusTone::Neutral),
    }
}

fn active_cell(record: &Value) -> Cell {
    if record.get("is_active").and_then(Value::as_bool).unwrap_or(false) {
        Cell::badge("Active", StatusTone::Success)
    } else {
        Cell::badge("Inactive", StatusTone::Neutral)
    }
}

/// First and last name joined, `"-"` when both are missing
fn person_name(record: &Value) -> String {
    let first = record.get("first_name").and_then(Value::as_str);
    let last = record.get("last_name").and_then(Value::as_str);
    match (first, last) {
        (Some(f), Some(l)) => format!("{} {}", f, l),
        (Some(f), None) => f.to_string(),
        (None, Some(l)) => l.to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Reformat a backend date string for display.
///
/// Accepts RFC 3339, naive ISO date-times and plain dates. Anything else is
/// passed through unchanged; empty input shows as `"-"`.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slugs_round_trip() {
        for module in Module::ALL {
            assert_eq!(Module::from_slug(module.slug()), Some(module));
        }
    }

    #[test]
    fn unknown_slug_has_no_descriptor() {
        assert_eq!(Module::from_slug("payroll"), None);
        assert_eq!(Module::from_slug(""), None);
        assert_eq!(Module::from_slug("CRM"), None);
    }

    #[test]
    fn endpoints_match_backend_contract() {
        assert_eq!(Module::Crm.descriptor().endpoint, "leads");
        assert_eq!(Module::Inventory.descriptor().endpoint, "products");
        assert_eq!(Module::Accounting.descriptor().endpoint, "invoices");
        assert_eq!(Module::Hr.descriptor().endpoint, "employees");
        assert_eq!(Module::Sales.descriptor().endpoint, "orders");
    }

    #[test]
    fn inventory_projection() {
        let record = json!({
            "sku": "A1",
            "name": "Widget",
            "type": "good",
            "selling_price": 9.99,
            "current_stock": 5,
            "is_active": true,
        });

        let row = project_row(Module::Inventory, &record);
        assert_eq!(
            row,
            vec![
                Cell::Text("A1".into()),
                Cell::Text("Widget".into()),
                Cell::Text("good".into()),
                Cell::Text("$9.99".into()),
                Cell::Text("5".into()),
                Cell::Badge {
                    label: "Active".into(),
                    tone: StatusTone::Success,
                },
            ]
        );
    }

    #[test]
    fn unknown_status_is_neutral() {
        let record = json!({
            "id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "status": "unknown_status",
        });

        let row = project_row(Module::Crm, &record);
        assert_eq!(
            row[4],
            Cell::Badge {
                label: "unknown_status".into(),
                tone: StatusTone::Neutral,
            }
        );
    }

    #[test]
    fn absent_optional_fields_become_dash() {
        let record = json!({
            "id": 3,
            "first_name": "Grace",
            "last_name": "Hopper",
            "status": "new",
        });

        let row = project_row(Module::Crm, &record);
        assert_eq!(row[0], Cell::Text("3".into()));
        assert_eq!(row[1], Cell::Text("Grace Hopper".into()));
        assert_eq!(row[2], Cell::Text("-".into()));
        assert_eq!(row[3], Cell::Text("-".into()));
        assert_eq!(row[5], Cell::Text("-".into()));
    }

    #[test]
    fn absent_amount_becomes_dash() {
        let record = json!({ "invoice_number": "INV-1", "status": "paid" });
        let row = project_row(Module::Accounting, &record);
        assert_eq!(row[2], Cell::Text("-".into()));
    }

    #[test]
    fn whole_amounts_keep_json_rendering() {
        let record = json!({ "order_number": "SO-9", "total_amount": 10 });
        let row = project_row(Module::Sales, &record);
        assert_eq!(row[2], Cell::Text("$10".into()));
    }

    #[test]
    fn inactive_product_is_neutral() {
        let record = json!({ "sku": "B2", "name": "Gadget", "is_active": false });
        let row = project_row(Module::Inventory, &record);
        assert_eq!(
            row[5],
            Cell::Badge {
                label: "Inactive".into(),
                tone: StatusTone::Neutral,
            }
        );
    }

    #[test]
    fn row_widths_match_columns() {
        let record = json!({});
        for module in Module::ALL {
            assert_eq!(
                project_row(module, &record).len(),
                module.descriptor().columns.len(),
                "{:?}",
                module
            );
        }
    }

    #[test]
    fn status_tones() {
        assert_eq!(status_tone("new"), StatusTone::Danger);
        assert_eq!(status_tone("pending"), StatusTone::Warning);
        assert_eq!(status_tone("confirmed"), StatusTone::Info);
        assert_eq!(status_tone("paid"), StatusTone::Success);
        assert_eq!(status_tone("sent"), StatusTone::Primary);
        assert_eq!(status_tone("draft"), StatusTone::Neutral);
        assert_eq!(status_tone("anything else"), StatusTone::Neutral);
    }

    #[test]
    fn date_formats() {
        assert_eq!(format_date("2024-01-05T12:30:00"), "Jan 05, 2024");
        assert_eq!(format_date("2024-01-05T12:30:00Z"), "Jan 05, 2024");
        assert_eq!(format_date("2024-01-05"), "Jan 05, 2024");
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
