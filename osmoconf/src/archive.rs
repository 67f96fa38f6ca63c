//! Zip archiving of a bundle plus the bundled template resources.

use std::io::{Seek, Write};

use log::debug;
use osmoconf_core::ZipSink;
use osmoconf_core::template::copy_template;

use crate::groups::GroupList;
use crate::{Result, TemplateStore, bundle};

/// Stream a complete archive to `out`: the generated bundle followed by every
/// template resource, each as one entry named by its logical path.
///
/// Entries are written incrementally, so memory stays bounded regardless of
/// how large the resource set grows. Resources a section already emitted keep
/// their bundle copy; entry names are unique either way.
pub fn write_archive<W: Write + Seek>(
    groups: &GroupList,
    templates: &dyn TemplateStore,
    out: W,
) -> Result<W> {
    let mut sink = ZipSink::new(out);
    bundle::write_bundle(groups, &mut sink, templates)?;
    for name in templates.names() {
        copy_template(templates, &mut sink, name)?;
    }
    debug!("archive complete for {} group(s)", groups.len());
    Ok(sink.finish()?)
}
