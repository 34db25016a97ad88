//! Display information sheets

use serde::Serialize;

use super::vehicle::VehicleIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// Ordered label/value rows describing a vehicle. Identity comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InfoSheet {
    rows: Vec<InfoRow>,
}

impl InfoSheet {
    pub fn for_identity(identity: &VehicleIdentity) -> Self {
        let mut sheet = Self::default();
        sheet.push("Vehicle", identity.describe());
        sheet
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(InfoRow {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn rows(&self) -> &[InfoRow] {
        &self.rows
    }

    /// First value recorded under `label`
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.label == label)
    }
}

impl std::fmt::Display for InfoSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0) + 1;
        for row in &self.rows {
            writeln!(f, "{:<width$} {}", format!("{}:", row.label), row.value, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_row_first() {
        let mut sheet = InfoSheet::for_identity(&VehicleIdentity::new("Toyota", "Camry", 2022));
        sheet.push("Mileage", "15000");
        assert_eq!(sheet.position("Vehicle"), Some(0));
        assert_eq!(sheet.get("Mileage"), Some("15000"));
        assert_eq!(sheet.get("Range"), None);
    }

    #[test]
    fn test_display_aligns_labels() {
        let mut sheet = InfoSheet::for_identity(&VehicleIdentity::new("Toyota", "Camry", 2022));
        sheet.push("Efficiency", "28.50 MPG");
        let text = sheet.to_string();
        assert_eq!(text, "Vehicle:    2022 Toyota Camry\nEfficiency: 28.50 MPG\n");
    }
}
