use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::params;

use super::Section;

/// Maximum starvation mortality rate per group.
pub struct Starvation;

impl Section for Starvation {
    fn name(&self) -> &'static str {
        "starvation"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-starvation.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            params::per_group(&mut rows, groups, "mortality.starvation.rate.max.sp", "0.3")
        })?;
        Ok(())
    }
}
