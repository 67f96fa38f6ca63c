use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::params;

use super::Section;

/// Larva and adult natural mortality defaults.
///
/// The two `.file` rows are `null` placeholders: mortality rate files are an
/// optional model input this generator leaves unset.
pub struct NaturalMortality;

impl Section for NaturalMortality {
    fn name(&self) -> &'static str {
        "natural-mortality"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-natural-mortality.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            rows.row(&["mortality.natural.larva.rate.file", "null"])?;
            params::per_group(&mut rows, groups, "mortality.natural.larva.rate.sp", "0.0")?;
            rows.row(&["mortality.natural.rate.file", "null"])?;
            params::per_group(&mut rows, groups, "mortality.natural.rate.sp", "0.0")
        })?;
        Ok(())
    }
}
