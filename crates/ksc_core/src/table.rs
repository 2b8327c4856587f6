//! Result-grid derivation.
//!
//! Turns the current gross weight and settings into the visible table:
//! one row per eligible container, one column per configured seasoning.

use crate::calc::{required_seasoning_mass, CalcOptions};
use crate::settings::{Container, Settings};

/// Label of the fixed leading column identifying the container.
pub const CONTAINER_COLUMN_LABEL: &str = "Container";

/// Name of the synthetic no-container row.
pub const NONE_CONTAINER_NAME: &str = "none";

/// The derived grid, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasoningTable {
    /// Seasoning column headers, in configuration order.
    pub seasonings: Vec<String>,
    /// Data rows, in container order after filtering.
    pub rows: Vec<TableRow>,
}

/// One table row: a container and its per-seasoning cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Container display name.
    pub container: String,
    /// Formatted seasoning masses, one per seasoning column.
    pub cells: Vec<String>,
}

/// The configured containers with the synthetic `"none"` container (tare 0)
/// prepended. Applied at derivation time only, never persisted.
pub fn containers_with_none(settings: &Settings) -> Vec<Container> {
    let mut containers = Vec::with_capacity(settings.containers.len() + 1);
    containers.push(Container {
        name: NONE_CONTAINER_NAME.to_string(),
        reading: NONE_CONTAINER_NAME.to_string(),
        tare_weight_grams: 0.0,
    });
    containers.extend(settings.containers.iter().cloned());
    containers
}

/// Derive the visible table for the given gross weight.
///
/// A container appears as a row only if the gross weight is strictly
/// greater than its tare; heavier containers are omitted entirely. With a
/// gross weight of 0 no row survives, including the synthetic one. Empty
/// seasoning or container lists yield a header-only table.
pub fn build_table(gross_weight_g: f64, settings: &Settings) -> SeasoningTable {
    let options = CalcOptions {
        target_concentration: settings.target_concentration,
    };

    let rows = containers_with_none(settings)
        .into_iter()
        .filter(|container| gross_weight_g > container.tare_weight_grams)
        .map(|container| TableRow {
            cells: settings
                .seasonings
                .iter()
                .map(|seasoning| {
                    required_seasoning_mass(
                        gross_weight_g,
                        container.tare_weight_grams,
                        seasoning.salt_equivalent_per_gram,
                        &options,
                    )
                })
                .collect(),
            container: container.name,
        })
        .collect();

    SeasoningTable {
        seasonings: settings
            .seasonings
            .iter()
            .map(|s| s.name.clone())
            .collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Seasoning, SAMPLE_SETTINGS_JSON};

    fn settings_with_tares(tares: &[f64]) -> Settings {
        Settings {
            target_concentration: 0.6,
            seasonings: vec![Seasoning {
                name: "Salt".to_string(),
                reading: "salt".to_string(),
                salt_equivalent_per_gram: 100.0,
            }],
            containers: tares
                .iter()
                .enumerate()
                .map(|(i, &tare)| Container {
                    name: format!("Container {}", i + 1),
                    reading: String::new(),
                    tare_weight_grams: tare,
                })
                .collect(),
        }
    }

    #[test]
    fn heavier_containers_are_omitted() {
        let settings = settings_with_tares(&[0.0, 1000.0]);
        let table = build_table(500.0, &settings);

        // Synthetic none plus the tare-0 container; the 1000g one is gone
        let names: Vec<&str> = table.rows.iter().map(|r| r.container.as_str()).collect();
        assert_eq!(names, vec![NONE_CONTAINER_NAME, "Container 1"]);
    }

    #[test]
    fn zero_gross_weight_produces_no_rows() {
        let settings = settings_with_tares(&[0.0, 180.0]);
        let table = build_table(0.0, &settings);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn equal_tare_is_excluded() {
        let settings = settings_with_tares(&[500.0]);
        let table = build_table(500.0, &settings);

        let names: Vec<&str> = table.rows.iter().map(|r| r.container.as_str()).collect();
        assert_eq!(names, vec![NONE_CONTAINER_NAME]);
    }

    #[test]
    fn none_container_is_always_first_and_eligible() {
        let settings = settings_with_tares(&[180.0]);
        let table = build_table(1.0, &settings);

        assert_eq!(table.rows[0].container, NONE_CONTAINER_NAME);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn cells_follow_seasoning_order() {
        let settings: Settings = serde_json::from_str(SAMPLE_SETTINGS_JSON).unwrap();
        let table = build_table(1250.0, &settings);

        assert_eq!(table.seasonings, vec!["Salt", "Mentsuyu", "Consomme"]);
        // none row: net 1250g at 0.6% -> 7.50g of pure salt
        assert_eq!(table.rows[0].cells[0], "7.50g");
        // Inner pot row: net 688g -> 4.13g of pure salt
        let inner_pot = table
            .rows
            .iter()
            .find(|r| r.container == "Inner pot")
            .unwrap();
        assert_eq!(inner_pot.cells[0], "4.13g");
    }

    #[test]
    fn empty_lists_yield_header_only_table() {
        let table = build_table(0.0, &Settings::default());
        assert!(table.seasonings.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn uses_configured_concentration() {
        let mut settings = settings_with_tares(&[]);
        settings.target_concentration = 1.2;
        let table = build_table(1000.0, &settings);

        // (1000 - 0) * 1.2 / 100 = 12
        assert_eq!(table.rows[0].cells[0], "12.00g");
    }
}
