//! Embedded Osmose template resources.
//!
//! These are opaque artifacts copied verbatim into bundles and archives;
//! their contents are owned by the downstream model, not by this crate.

use osmoconf_core::{Error as CoreError, TemplateStore};

pub const ALL_PARAMETERS: &str = "osm_all-parameters.csv";
pub const MPA: &str = "osm_param-mpa.csv";
pub const LTL: &str = "osm_param-ltl.csv";
pub const GRID: &str = "osm_param-grid.csv";
pub const GRID_MASK: &str = "grid-mask.csv";
pub const LTL_BIOMASS: &str = "osm_ltlbiomass.nc";
pub const PREDATION_ACCESSIBILITY: &str = "predation-accessibility.csv";
pub const DEFAULT_MAP: &str = "maps/default-map.csv";

/// Every bundled template, in the order resources are appended to archives.
const TEMPLATES: [(&str, &[u8]); 8] = [
    (ALL_PARAMETERS, include_bytes!("../templates/osm_all-parameters.csv")),
    (MPA, include_bytes!("../templates/osm_param-mpa.csv")),
    (LTL, include_bytes!("../templates/osm_param-ltl.csv")),
    (GRID, include_bytes!("../templates/osm_param-grid.csv")),
    (GRID_MASK, include_bytes!("../templates/grid-mask.csv")),
    (LTL_BIOMASS, include_bytes!("../templates/osm_ltlbiomass.nc")),
    (
        PREDATION_ACCESSIBILITY,
        include_bytes!("../templates/predation-accessibility.csv"),
    ),
    (DEFAULT_MAP, include_bytes!("../templates/maps/default-map.csv")),
];

/// Template store backed by resources compiled into this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn get(&self, name: &str) -> osmoconf_core::Result<&[u8]> {
        TEMPLATES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| *bytes)
            .ok_or_else(|| CoreError::TemplateMissing {
                name: name.to_string(),
            })
    }

    fn names(&self) -> Vec<&str> {
        TEMPLATES.iter().map(|(n, _)| *n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in EmbeddedTemplates.names() {
            assert!(!EmbeddedTemplates.get(name).unwrap().is_empty(), "{name}");
        }
    }

    #[test]
    fn unknown_name_is_missing() {
        assert!(EmbeddedTemplates.get("osm_param-unknown.csv").is_err());
    }

    #[test]
    fn listing_order_is_stable() {
        assert_eq!(EmbeddedTemplates.names()[0], ALL_PARAMETERS);
        assert_eq!(EmbeddedTemplates.names().len(), 8);
    }
}
