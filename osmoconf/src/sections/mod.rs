//! Section generators, one per configuration domain.
//!
//! Each section owns the file(s) it emits, including any per-group auxiliary
//! files it names inside its parameter rows. Sections are stateless single
//! passes over the group list; the only thing they share is the sink.

mod fishing;
mod init_biomass;
mod movement;
mod natural_mortality;
mod output;
mod predation;
mod reproduction;
mod species;
mod starvation;
mod statics;

use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::defaults::YEAR_PARTS;
use crate::groups::GroupList;

pub use fishing::Fishing;
pub use init_biomass::InitBiomass;
pub use movement::Movement;
pub use natural_mortality::NaturalMortality;
pub use output::OutputOptions;
pub use predation::Predation;
pub use reproduction::Reproduction;
pub use species::Species;
pub use starvation::Starvation;
pub use statics::StaticFiles;

/// One configuration domain.
pub trait Section {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Emit this section's file(s) to the sink.
    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        templates: &dyn TemplateStore,
    ) -> Result<()>;
}

/// Every section, in the fixed order the bundle builder runs them.
///
/// The order only pins down archive entry ordering; the files themselves are
/// independent.
pub fn all() -> [&'static dyn Section; 10] {
    [
        &Fishing,
        &InitBiomass,
        &Movement,
        &NaturalMortality,
        &OutputOptions,
        &Predation,
        &Reproduction,
        &Species,
        &Starvation,
        &StaticFiles,
    ]
}

/// Write a twelve-step seasonality file: a header row, then each
/// fractional-year timepoint paired with `0.0`.
pub(crate) fn write_seasonality(
    sink: &mut dyn Sink,
    path: &str,
    header: &[&str],
) -> Result<()> {
    Ok(sink.write_file(path, &mut |w: &mut dyn Write| {
        let mut rows = RowWriter::new(w);
        rows.row(header)?;
        for part in YEAR_PARTS {
            rows.row(&[part, "0.0"])?;
        }
        Ok(())
    })?)
}
