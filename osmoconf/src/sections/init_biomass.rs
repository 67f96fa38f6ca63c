use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::params;

use super::Section;

/// Zero seeding biomass per group.
pub struct InitBiomass;

impl Section for InitBiomass {
    fn name(&self) -> &'static str {
        "init-biomass"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-init-pop.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            params::per_group(&mut rows, groups, "population.seeding.biomass.sp", "0.0")
        })?;
        Ok(())
    }
}
