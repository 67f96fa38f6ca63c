use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::defaults::OUTPUT_DEFAULTS;
use crate::groups::GroupList;
use crate::params;

use super::Section;

/// Output options: the verbatim defaults block plus per-group cutoffs.
pub struct OutputOptions;

impl Section for OutputOptions {
    fn name(&self) -> &'static str {
        "output"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-output.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            rows.raw(OUTPUT_DEFAULTS.as_bytes())?;
            rows.row(&["output.cutoff.enabled", "true"])?;
            params::per_group(&mut rows, groups, "output.cutoff.age.sp", "0.0")?;
            rows.row(&["output.diet.stage.structure", "agesize"])?;
            params::per_group_values(
                &mut rows,
                groups,
                "output.diet.stage.threshold.sp",
                &["0.0", "0.0", "0.0"],
            )
        })?;
        Ok(())
    }
}
