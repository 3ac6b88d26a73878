//! Directive reporter - output formatting
//!
//! Supports multiple output formats:
//! - Text (one line per route)
//! - JSON
//! - Table

use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

use crate::config::OutputFormat;
use crate::route::{Route, RouteDirective};

/// One converted route
#[derive(Debug, Clone)]
pub struct DirectiveRow {
    /// What the route was resolved from (notation or command name)
    pub label: String,
    pub route: Route,
    pub directive: RouteDirective,
}

impl DirectiveRow {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        let directive = route.to_directive();
        Self {
            label: label.into(),
            route,
            directive,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "label": self.label,
            "route": self.route,
            "fanout": if self.route.is_multi_node() { "multi" } else { "single" },
            "directive": self.directive,
        })
    }
}

/// Directive reporter
pub struct DirectiveReporter {
    format: OutputFormat,
}

impl DirectiveReporter {
    /// Create new reporter with specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render rows in the configured format
    pub fn render(&self, rows: &[DirectiveRow]) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(rows)),
            OutputFormat::Json => self.render_json(rows),
            OutputFormat::Table => Ok(self.render_table(rows)),
        }
    }

    /// Print rows to stdout
    pub fn report(&self, rows: &[DirectiveRow]) -> serde_json::Result<()> {
        println!("{}", self.render(rows)?);
        Ok(())
    }

    fn render_text(&self, rows: &[DirectiveRow]) -> String {
        rows.iter()
            .map(|row| format!("{} -> {}", row.label, row.directive))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self, rows: &[DirectiveRow]) -> serde_json::Result<String> {
        let json: Vec<serde_json::Value> = rows.iter().map(DirectiveRow::to_json).collect();
        serde_json::to_string_pretty(&json)
    }

    fn render_table(&self, rows: &[DirectiveRow]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Input", "Route Type", "Code", "Fanout", "Payload"]);

        for row in rows {
            let route_type = row.directive.route_type();
            let fanout = if row.route.is_multi_node() { "multi" } else { "single" };
            let payload = row
                .directive
                .payload()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());

            builder.push_record([
                row.label.clone(),
                route_type.to_string(),
                (route_type as u32).to_string(),
                fanout.to_string(),
                payload,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::sharp())
            .with(Modify::new(Columns::single(2)).with(Alignment::right()));
        table.to_string()
    }
}
