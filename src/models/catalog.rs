use crate::errors::{AppError, AppResult};
use crate::models::TreeForm;
use serde::{Deserialize, Serialize};

/// Deployment-specific option lists offered by the tree form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_species")]
    pub species: Vec<String>,
    #[serde(default = "default_heights")]
    pub heights: Vec<String>,
    #[serde(default = "default_dbh")]
    pub dbh: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            species: default_species(),
            heights: default_heights(),
            dbh: default_dbh(),
        }
    }
}

impl Catalog {
    /// Accepts a species name (case-insensitive) or its 1-based position in the list.
    pub fn resolve_species(&self, input: &str) -> AppResult<String> {
        resolve(&self.species, input, "species")
    }

    pub fn resolve_height(&self, input: &str) -> AppResult<String> {
        resolve(&self.heights, input, "overall height")
    }

    pub fn resolve_dbh(&self, input: &str) -> AppResult<String> {
        resolve(&self.dbh, input, "DBH")
    }

    /// Replace the choice fields of a raw form with their canonical catalog values.
    pub fn build_form(&self, raw: TreeForm) -> AppResult<TreeForm> {
        Ok(TreeForm {
            species: self.resolve_species(&raw.species)?,
            height: self.resolve_height(&raw.height)?,
            dbh: self.resolve_dbh(&raw.dbh)?,
            suffix: raw.suffix.trim().to_string(),
            canopy: raw.canopy.trim().to_string(),
        })
    }
}

/// Empty input resolves to an empty string so completeness is reported by the workflow.
fn resolve(options: &[String], input: &str, label: &str) -> AppResult<String> {
    let needle = input.trim();
    if needle.is_empty() {
        return Ok(String::new());
    }

    if let Some(found) = options.iter().find(|o| o.eq_ignore_ascii_case(needle)) {
        return Ok(found.clone());
    }

    // Numeric categories are matched by value above, so only fall back to an
    // index when the list itself is not numeric.
    if let Ok(idx) = needle.parse::<usize>()
        && !options.iter().any(|o| o.parse::<f64>().is_ok())
        && idx >= 1
        && idx <= options.len()
    {
        return Ok(options[idx - 1].clone());
    }

    Err(AppError::InvalidOption(format!(
        "'{needle}' is not a valid {label}. Valid values: {}",
        options.join(", ")
    )))
}

fn default_species() -> Vec<String> {
    [
        "Alstonia angustiloba",
        "Aquilaria malaccensis",
        "Azadirachta indica",
        "Baringtonia acutangula",
        "Buchanania arborescens",
        "Callophyllum inophyllum",
        "Cerbera odollam rubra",
        "Cinnamomum iners",
        "Coccoloba uvifera",
        "Cratoxylum chochinchinensis",
        "Cratoxylum cochichinensis",
        "Cratoxylum formosum",
        "Dillenia indica",
        "Diospyros blancoi",
        "Diptercarpus baudi",
        "Diptercarpus gracilis",
        "Dyera costulata",
        "Eleocarpus grandiflorus",
        "Ficus lyrata",
        "Filicium decipiens",
        "Garcinia hombroniana",
        "Gardenia carinata",
        "Heteropanax fragrans",
        "Hopea ferrea",
        "Hopea odorata",
        "Leptospermum brachyandrum",
        "Licuala grandis",
        "Maniltoa browneoides",
        "Mesua ferrea",
        "Michelia champaka",
        "Millingtonia hortensis",
        "Millettia pinnata",
        "Mimusops elengi",
        "Pentaspadon motleyi",
        "Podocarpus macrophyllus",
        "Podocarpus polystachyus",
        "Pometia pinnata",
        "Saraca thaipingensis",
        "Shorea roxburghii",
        "Spathodea campanulata",
        "Sterculia foetida",
        "Sterculia parviflora",
        "Syzygium polyanthum",
        "Syzygium grande",
        "Syzygium spicata",
        "Tabebuia argentea",
        "Tabebuia rosea",
        "Terminalia calamansanai",
        "Terminalia catappa",
        "Tristania obovata",
        "Tristaniopsis whiteana",
        "Unknown sp",
        "Mixed sp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_heights() -> Vec<String> {
    (1..=7).map(|n| n.to_string()).collect()
}

fn default_dbh() -> Vec<String> {
    (1..=9).map(|n| n.to_string()).collect()
}
