//! Fixed-order orchestration of every section generator.

use log::debug;
use osmoconf_core::{Sink, TemplateStore};

use crate::groups::GroupList;
use crate::{Result, sections};

/// Generate the complete configuration bundle for `groups` into `sink`.
///
/// Every section runs even for an empty group list: per-group sections then
/// emit zero per-group rows, but fixed-default rows and static templates are
/// always present. Output depends only on the group list, so repeated runs
/// are byte-identical.
pub fn write_bundle(
    groups: &GroupList,
    sink: &mut dyn Sink,
    templates: &dyn TemplateStore,
) -> Result<()> {
    for section in sections::all() {
        debug!(
            "generating section '{}' for {} group(s)",
            section.name(),
            groups.len()
        );
        section.generate(groups, sink, templates)?;
    }
    Ok(())
}
