use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::groups::GroupList;
use crate::params;
use crate::{Group, Result};

use super::{Section, write_seasonality};

/// Fishing mortality defaults plus one seasonality file per group.
pub struct Fishing;

impl Section for Fishing {
    fn name(&self) -> &'static str {
        "fishing"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-fishing.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            params::per_group(&mut rows, groups, "mortality.fishing.rate.sp", "0.0")?;
            params::per_group(&mut rows, groups, "mortality.fishing.recruitment.age.sp", "0.0")?;
            params::per_group(&mut rows, groups, "mortality.fishing.recruitment.size.sp", "0.0")?;
            for group in groups {
                let key = group.key("mortality.fishing.season.distrib.file.sp");
                let file = seasonality_path(group);
                rows.row(&[key.as_str(), file.as_str()])?;
            }
            Ok(())
        })?;

        for group in groups {
            write_seasonality(sink, &seasonality_path(group), &["Time", "Season"])?;
        }
        Ok(())
    }
}

fn seasonality_path(group: &Group) -> String {
    format!("fishing/fishing-seasonality-{}.csv", group.name())
}

#[cfg(test)]
mod tests {
    use osmoconf_core::MemorySink;

    use crate::EmbeddedTemplates;

    use super::*;

    #[test]
    fn names_and_generates_one_seasonality_file_per_group() {
        let groups = GroupList::new(["herring"]).unwrap();
        let mut sink = MemorySink::new();
        Fishing.generate(&groups, &mut sink, &EmbeddedTemplates).unwrap();

        assert_eq!(
            sink.text("osm_param-fishing.csv").unwrap(),
            "mortality.fishing.rate.sp0;0.0\n\
             mortality.fishing.recruitment.age.sp0;0.0\n\
             mortality.fishing.recruitment.size.sp0;0.0\n\
             mortality.fishing.season.distrib.file.sp0;fishing/fishing-seasonality-herring.csv"
        );

        let seasonality = sink.text("fishing/fishing-seasonality-herring.csv").unwrap();
        assert!(seasonality.starts_with("Time;Season\n0.0;0.0\n0.083333336;0.0"));
        assert_eq!(seasonality.lines().count(), 13);
        assert!(seasonality.ends_with("0.9166667;0.0"));
    }
}
