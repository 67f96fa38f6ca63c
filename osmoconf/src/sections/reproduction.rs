use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;

use super::{Section, write_seasonality};

/// Reproduction seasonality: one file reference and one seasonality file per
/// group, named by positional index.
pub struct Reproduction;

impl Section for Reproduction {
    fn name(&self) -> &'static str {
        "reproduction"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-reproduction.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            for group in groups {
                let key = group.key("reproduction.season.file.sp");
                let file = seasonality_path(group.index());
                rows.row(&[key.as_str(), file.as_str()])?;
            }
            Ok(())
        })?;

        for group in groups {
            write_seasonality(
                sink,
                &seasonality_path(group.index()),
                &["Time (year)", group.name()],
            )?;
        }
        Ok(())
    }
}

fn seasonality_path(index: usize) -> String {
    format!("reproduction-seasonality-sp{index}.csv")
}

#[cfg(test)]
mod tests {
    use osmoconf_core::MemorySink;

    use crate::EmbeddedTemplates;

    use super::*;

    #[test]
    fn seasonality_files_are_named_by_index() {
        let groups = GroupList::new(["one", "two"]).unwrap();
        let mut sink = MemorySink::new();
        Reproduction.generate(&groups, &mut sink, &EmbeddedTemplates).unwrap();

        assert_eq!(
            sink.text("osm_param-reproduction.csv").unwrap(),
            "reproduction.season.file.sp0;reproduction-seasonality-sp0.csv\n\
             reproduction.season.file.sp1;reproduction-seasonality-sp1.csv"
        );

        let sp1 = sink.text("reproduction-seasonality-sp1.csv").unwrap();
        assert!(sp1.starts_with("Time (year);two\n0.0;0.0"));
        assert_eq!(sp1.lines().count(), 13);
    }
}
