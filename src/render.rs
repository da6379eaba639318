// src/render.rs
//! Plain-text rendering of a report, for terminals and chat front-ends.
use crate::report::{DeliveryReport, ProgressEntry, RouteEntry};

/// One status or route line, before formatting.
struct Details<'a> {
    place: &'a str,
    courier: &'a str,
    description: &'a str,
    created_at: &'a str,
}

impl<'a> From<&'a ProgressEntry> for Details<'a> {
    fn from(e: &'a ProgressEntry) -> Self {
        Details {
            place: &e.city,
            courier: &e.courier,
            description: &e.description,
            created_at: &e.created_at,
        }
    }
}

impl<'a> From<&'a RouteEntry> for Details<'a> {
    fn from(e: &'a RouteEntry) -> Self {
        Details {
            place: &e.route,
            courier: &e.courier,
            description: &e.description,
            created_at: &e.created_at,
        }
    }
}

/// `→ place (courier). description. created at`. Place and date are left out
/// when empty; the description segment is always there.
fn details_line(d: Details<'_>) -> String {
    let place = (!d.place.is_empty()).then(|| {
        let courier = if d.courier.is_empty() { "N/A" } else { d.courier };
        format!("{} ({courier})", d.place)
    });
    let created_at = (!d.created_at.is_empty()).then_some(d.created_at);

    let parts: Vec<&str> = [place.as_deref(), Some(d.description), created_at]
        .into_iter()
        .flatten()
        .collect();

    join!("→ ", &parts.join(". "))
}

/// Human-readable report for order `trace_id`.
pub fn render_text(trace_id: &str, report: &DeliveryReport) -> String {
    if report.is_empty() {
        return format!("No tracking report found for order #{trace_id}.\n");
    }

    let mut out = s!();
    out.push_str(&format!("Items: {}\n\n", report.items.join(", ")));

    out.push_str("Status updates:\n");
    for entry in &report.progress {
        out.push_str(&details_line(entry.into()));
        out.push('\n');
    }

    out.push_str("\nRoute details:\n");
    for entry in &report.routes {
        out.push_str(&details_line(entry.into()));
        out.push('\n');
    }

    out.push_str(&format!("\nTracking report for order #{trace_id}.\n"));
    out
}
