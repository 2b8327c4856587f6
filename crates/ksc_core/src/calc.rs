//! Seasoning mass calculation.
//!
//! The one formula the whole application exists for: how many grams of a
//! seasoning bring the net ingredient weight to the target salt
//! concentration, given how much pure salt one gram of that seasoning is
//! equivalent to.

/// Options for the concentration calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcOptions {
    /// Desired ratio of salt mass to net ingredient mass.
    pub target_concentration: f64,
}

fn default_target_concentration() -> f64 {
    0.6
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            target_concentration: default_target_concentration(),
        }
    }
}

/// Compute the seasoning mass needed to reach the target concentration.
///
/// `gross_weight_g` is the scale reading with the container still on it;
/// `tare_weight_g` is the empty container's weight. The net weight times
/// `target_concentration / salt_equivalent_per_gram` is the answer,
/// formatted as fixed two-decimal grams (e.g. `"4.80g"`).
///
/// Inputs are deliberately unchecked: a gross weight below the tare yields
/// a negative result (`"-3.00g"`), and a zero salt-equivalent yields
/// `"Infinityg"` or `"NaNg"` depending on the numerator. Degenerate output
/// is preferred over refusing to render a cell.
pub fn required_seasoning_mass(
    gross_weight_g: f64,
    tare_weight_g: f64,
    salt_equivalent_per_gram: f64,
    options: &CalcOptions,
) -> String {
    let ratio = options.target_concentration / salt_equivalent_per_gram;
    format_grams((gross_weight_g - tare_weight_g) * ratio)
}

/// Format a mass as `"<fixed two decimals>g"`.
///
/// Non-finite values render as `Infinity`/`NaN` rather than Rust's
/// `inf`/`NaN` so stored snapshots and cell text keep the documented shape.
fn format_grams(mass_g: f64) -> String {
    if mass_g.is_nan() {
        "NaNg".to_string()
    } else if mass_g == f64::INFINITY {
        "Infinityg".to_string()
    } else if mass_g == f64::NEG_INFINITY {
        "-Infinityg".to_string()
    } else {
        format!("{:.2}g", mass_g)
    }
}
