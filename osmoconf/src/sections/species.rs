use std::io::Write;

use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::Result;
use crate::groups::GroupList;
use crate::params;

use super::Section;

/// Species identity rows plus the fixed life-history default blocks.
pub struct Species;

/// Per-group life-history defaults, in emission order.
const LIFE_HISTORY_DEFAULTS: [(&str, &str); 13] = [
    ("species.egg.size.sp", "0.1"),
    ("species.egg.weight.sp", "0.0005386"),
    ("species.K.sp", "0.0"),
    ("species.length2weight.allometric.power.sp", "0.0"),
    ("species.length2weight.condition.factor.sp", "0.0"),
    ("species.lifespan.sp", "0"),
    ("species.lInf.sp", "0.0"),
    ("species.maturity.size.sp", "0.0"),
    ("species.relativefecundity.sp", "0"),
    ("species.sexratio.sp", "0.0"),
    ("species.t0.sp", "0.0"),
    ("species.vonbertalanffy.threshold.age.sp", "0.0"),
    ("species.length2weight.fl.sp", "false"),
];

impl Section for Species {
    fn name(&self) -> &'static str {
        "species"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        _templates: &dyn TemplateStore,
    ) -> Result<()> {
        sink.write_file("osm_param-species.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            for group in groups {
                let key = group.key("species.name.sp");
                rows.row(&[key.as_str(), group.name()])?;
            }
            for (prefix, value) in LIFE_HISTORY_DEFAULTS {
                params::per_group(&mut rows, groups, prefix, value)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use osmoconf_core::MemorySink;

    use crate::EmbeddedTemplates;

    use super::*;

    #[test]
    fn name_rows_come_before_default_blocks() {
        let groups = GroupList::new(["one", "two"]).unwrap();
        let mut sink = MemorySink::new();
        Species.generate(&groups, &mut sink, &EmbeddedTemplates).unwrap();

        let text = sink.text("osm_param-species.csv").unwrap();
        assert!(text.starts_with("species.name.sp0;one\nspecies.name.sp1;two\n"));
        assert!(text.contains("species.egg.size.sp0;0.1\nspecies.egg.size.sp1;0.1"));
        assert!(text.ends_with("species.length2weight.fl.sp0;false\nspecies.length2weight.fl.sp1;false"));
        // one name row plus thirteen default rows per group
        assert_eq!(text.lines().count(), 2 * 14);
    }

    #[test]
    fn group_name_with_delimiter_survives_a_csv_parse() {
        let name = "north;east \"stock\"";
        let groups = GroupList::new([name]).unwrap();
        let mut sink = MemorySink::new();
        Species.generate(&groups, &mut sink, &EmbeddedTemplates).unwrap();

        let text = sink.text("osm_param-species.csv").unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "species.name.sp0");
        assert_eq!(&first[1], name);
    }
}
