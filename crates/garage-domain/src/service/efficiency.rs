//! Fleet efficiency ranking service

use garage_types::VehicleKind;
use serde::Serialize;

use crate::model::Vehicle;

/// Efficiency of one vehicle in a fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyRow {
    pub vehicle: String,
    pub kind: VehicleKind,
    pub efficiency: f64,
}

/// Rank vehicles by efficiency, best first. Ties keep fleet order.
pub fn rank_by_efficiency<V: Vehicle>(vehicles: &[V]) -> Vec<EfficiencyRow> {
    let mut rows: Vec<EfficiencyRow> = vehicles
        .iter()
        .map(|v| EfficiencyRow {
            vehicle: v.identity().describe(),
            kind: v.kind(),
            efficiency: v.calculate_efficiency(),
        })
        .collect();
    rows.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    rows
}

pub fn generate_efficiency_report(rows: &[EfficiencyRow]) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("               Fleet Efficiency Report            \n");
    report.push_str("==================================================\n\n");

    if rows.is_empty() {
        report.push_str("No vehicles in fleet.\n\n");
        report.push_str("==================================================\n");
        return report;
    }

    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles:    {}\n", rows.len()));
    if let (Some(best), Some(worst)) = (rows.first(), rows.last()) {
        report.push_str(&format!(
            "  Best:        {} ({:.2} {})\n",
            best.vehicle,
            best.efficiency,
            best.kind.efficiency_unit()
        ));
        report.push_str(&format!(
            "  Worst:       {} ({:.2} {})\n",
            worst.vehicle,
            worst.efficiency,
            worst.kind.efficiency_unit()
        ));
    }
    report.push('\n');

    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:>4} {:<30} {:<14} {:>9}\n",
        "Rank", "Vehicle", "Type", "Efficiency"
    ));
    report.push_str("-".repeat(60).as_str());
    report.push('\n');
    for (i, row) in rows.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:<30} {:<14} {:>9.2} {}\n",
            i + 1,
            truncate_str(&row.vehicle, 29),
            row.kind.label(),
            row.efficiency,
            row.kind.efficiency_unit()
        ));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnyVehicle, Car, ElectricCar, Motorcycle};

    fn fleet() -> Vec<AnyVehicle> {
        vec![
            Car::new("Toyota", "Camry", 2022, 15000.0).into(),
            ElectricCar::new("Tesla", "Model 3", 2023, 5000.0, 85.0, 300.0).into(),
            Motorcycle::new("Harley-Davidson", "Street 750", 2021).into(),
        ]
    }

    #[test]
    fn test_rank_orders_best_first() {
        let rows = rank_by_efficiency(&fleet());
        let names: Vec<&str> = rows.iter().map(|r| r.vehicle.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "2023 Tesla Model 3",
                "2021 Harley-Davidson Street 750",
                "2022 Toyota Camry"
            ]
        );
        assert!((rows[2].efficiency - 28.5).abs() < 0.001);
    }

    #[test]
    fn test_rank_ties_keep_order() {
        let bikes = vec![
            Motorcycle::new("Honda", "Rebel", 2020),
            Motorcycle::new("Yamaha", "Bolt", 2019),
        ];
        let rows = rank_by_efficiency(&bikes);
        assert_eq!(rows[0].vehicle, "2020 Honda Rebel");
        assert_eq!(rows[1].vehicle, "2019 Yamaha Bolt");
    }

    #[test]
    fn test_generate_report() {
        let report = generate_efficiency_report(&rank_by_efficiency(&fleet()));
        assert!(report.contains("Fleet Efficiency Report"));
        assert!(report.contains("Vehicles:    3"));
        assert!(report.contains("Best:        2023 Tesla Model 3 (400.00 MPGe)"));
        assert!(report.contains("Worst:       2022 Toyota Camry (28.50 MPG)"));
    }

    #[test]
    fn test_generate_report_empty() {
        let rows: Vec<EfficiencyRow> = Vec::new();
        let report = generate_efficiency_report(&rows);
        assert!(report.contains("No vehicles in fleet."));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long vehicle name", 10), "a very l..");
    }
}
