use std::io::Write;

use osmoconf_core::template::{copy_template, copy_template_as};
use osmoconf_core::{RowWriter, Sink, TemplateStore};

use crate::groups::GroupList;
use crate::params;
use crate::templates::{DEFAULT_MAP, GRID_MASK};
use crate::{Group, Result};

use super::Section;

/// Movement defaults plus one distribution map per group.
pub struct Movement;

const SEASON_STEPS: [&str; 12] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

impl Section for Movement {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn generate(
        &self,
        groups: &GroupList,
        sink: &mut dyn Sink,
        templates: &dyn TemplateStore,
    ) -> Result<()> {
        // The shared mask is also emitted by the static section; archive
        // sinks keep a single entry.
        copy_template(templates, sink, GRID_MASK)?;

        sink.write_file("osm_param-movement.csv", &mut |w: &mut dyn Write| {
            let mut rows = RowWriter::new(w);
            params::per_group(&mut rows, groups, "movement.distribution.method.sp", "maps")?;
            params::per_group(&mut rows, groups, "movement.randomwalk.range.sp", "1")?;
            for group in groups {
                write_map_block(&mut rows, group)?;
            }
            Ok(())
        })?;

        for group in groups {
            copy_template_as(templates, sink, DEFAULT_MAP, &map_path(group))?;
        }
        Ok(())
    }
}

/// One map definition: age range, file reference, season indices, species.
fn write_map_block<W: Write>(rows: &mut RowWriter<W>, group: &Group) -> osmoconf_core::Result<()> {
    let prefix = format!("movement.map{}", group.index());
    let age_max = format!("{prefix}.age.max");
    let age_min = format!("{prefix}.age.min");
    let file = format!("{prefix}.file");
    let season = format!("{prefix}.season");
    let species = format!("{prefix}.species");
    let map_file = map_path(group);

    rows.row(&[age_max.as_str(), "2"])?;
    rows.row(&[age_min.as_str(), "0"])?;
    rows.row(&[file.as_str(), map_file.as_str()])?;

    let mut season_row: Vec<&str> = Vec::with_capacity(SEASON_STEPS.len() + 1);
    season_row.push(season.as_str());
    season_row.extend_from_slice(&SEASON_STEPS);
    rows.row(&season_row)?;

    rows.row(&[species.as_str(), group.name()])?;
    Ok(())
}

fn map_path(group: &Group) -> String {
    format!("maps/{}{}.csv", group.name(), group.index())
}
