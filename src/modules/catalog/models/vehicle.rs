use serde::{Deserialize, Serialize};

/// Fitment entry attached to a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleVehicle {
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

/// The buyer's vehicle, as narrowed down in the filter UI.
///
/// Every field is optional; an unset field does not constrain the match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectedVehicle {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<u16>,
    pub engine: Option<String>,
}

impl SelectedVehicle {
    /// Whether a listing with the given fitment entries suits this vehicle.
    ///
    /// No brand selected, or a listing with no fitment entries (universal),
    /// always matches. Otherwise at least one entry must agree on brand, and
    /// on model/year when both sides specify them.
    pub fn matches(&self, fitments: &[CompatibleVehicle]) -> bool {
        let Some(brand) = &self.brand else {
            return true;
        };
        if fitments.is_empty() {
            return true;
        }

        fitments.iter().any(|fitment| {
            if &fitment.brand != brand {
                return false;
            }
            if let (Some(selected), Some(listed)) = (&self.model, &fitment.model) {
                if selected != listed {
                    return false;
                }
            }
            if let (Some(year), Some(years)) = (self.year, &fitment.years) {
                if !years.contains(&year) {
                    return false;
                }
            }
            true
        })
    }
}
