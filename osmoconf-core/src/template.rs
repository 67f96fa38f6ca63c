//! Read-only named template resources.

use std::io::Write;

use crate::{Result, Sink};

/// Read-only store of named template resources.
///
/// Decouples generation code from how templates are physically stored; the
/// default implementation embeds them in the binary, but anything keyed by
/// logical name works.
pub trait TemplateStore {
    /// Look up one template by logical name.
    ///
    /// Fails with [`Error::TemplateMissing`](crate::Error::TemplateMissing)
    /// if the name is unknown; a required template is part of the output
    /// contract, so this aborts the whole bundle.
    fn get(&self, name: &str) -> Result<&[u8]>;

    /// Every template name, in a stable order.
    ///
    /// Archive contents must be reproducible, so the order never depends on
    /// hashing or filesystem enumeration.
    fn names(&self) -> Vec<&str>;
}

/// Copy one template verbatim to a sink under its own logical name.
pub fn copy_template(store: &dyn TemplateStore, sink: &mut dyn Sink, name: &str) -> Result<()> {
    copy_template_as(store, sink, name, name)
}

/// Copy one template verbatim to a sink under a different logical name.
///
/// Per-group map files are all instances of the same default-map template.
pub fn copy_template_as(
    store: &dyn TemplateStore,
    sink: &mut dyn Sink,
    name: &str,
    dest: &str,
) -> Result<()> {
    let bytes = store.get(name)?;
    sink.write_file(dest, &mut |w: &mut dyn Write| Ok(w.write_all(bytes)?))
}
