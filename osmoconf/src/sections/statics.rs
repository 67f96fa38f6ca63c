use osmoconf_core::template::copy_template;
use osmoconf_core::{Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::templates::{GRID, GRID_MASK, LTL, LTL_BIOMASS, MPA};

use super::Section;

/// Template-only files copied verbatim, independent of group count.
pub struct StaticFiles;

const STATIC_TEMPLATES: [&str; 5] = [MPA, LTL, GRID_MASK, GRID, LTL_BIOMASS];

impl Section for StaticFiles {
    fn name(&self) -> &'static str {
        "static"
    }

    fn generate(
        &self,
        _groups: &GroupList,
        sink: &mut dyn Sink,
        templates: &dyn TemplateStore,
    ) -> Result<()> {
        for name in STATIC_TEMPLATES {
            copy_template(templates, sink, name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use osmoconf_core::MemorySink;

    use crate::EmbeddedTemplates;

    use super::*;

    #[test]
    fn copies_every_static_template() {
        let mut sink = MemorySink::new();
        StaticFiles
            .generate(&GroupList::default(), &mut sink, &EmbeddedTemplates)
            .unwrap();

        for name in STATIC_TEMPLATES {
            assert!(sink.get(name).is_some(), "{name}");
        }
        assert_eq!(sink.len(), STATIC_TEMPLATES.len());
    }
}
