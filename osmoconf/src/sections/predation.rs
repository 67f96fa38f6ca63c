use std::io::Write;

use osmoconf_core::template::copy_template;
use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::params;
use crate::templates::PREDATION_ACCESSIBILITY;

use super::Section;

/// Predation accessibility, efficiency, and size-ratio defaults.
pub struct Predation;

impl Section for Predation {
    fn name(&self) -> &'static str {
        "predation"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-predation.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            rows.row(&["predation.accessibility.file", PREDATION_ACCESSIBILITY])?;
            rows.row(&["predation.accessibility.stage.structure", "age"])?;
            params::per_group(
                &mut rows,
                groups,
                "predation.accessibility.stage.threshold.sp",
                "0.0",
            )?;
            params::per_group(&mut rows, groups, "predation.efficiency.critical.sp", "0.57")?;
            params::per_group(&mut rows, groups, "predation.ingestion.rate.max.sp", "3.5")?;
            params::per_group_values(
                &mut rows,
                groups,
                "predation.predPrey.sizeRatio.max.sp",
                &["0.0", "0.0"],
            )?;
            params::per_group_values(
                &mut rows,
                groups,
                "predation.predPrey.sizeRatio.min.sp",
                &["0.0", "0.0"],
            )?;
            rows.row(&["predation.predPrey.stage.structure", "size"])?;
            params::per_group(&mut rows, groups, "predation.predPrey.stage.threshold.sp", "0.0")
        })?;

        // The accessibility file the first row points at must exist in the
        // bundle itself, not just in the archive resource set.
        copy_template(templates, sink, PREDATION_ACCESSIBILITY)?;
        Ok(())
    }
}
