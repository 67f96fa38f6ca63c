//! Snapshot tests for small generated files.
//!
//! Run `cargo insta review` to update snapshots when changing defaults.

use osmoconf::{EmbeddedTemplates, GroupList, MemorySink, write_bundle};

fn generate(names: &[&str]) -> MemorySink {
    let groups = GroupList::new(names.iter().copied()).unwrap();
    let mut sink = MemorySink::new();
    write_bundle(&groups, &mut sink, &EmbeddedTemplates).unwrap();
    sink
}

#[test]
fn starvation_defaults() {
    let sink = generate(&["one", "two"]);
    insta::assert_snapshot!(sink.text("osm_param-starvation.csv").unwrap(), @r"
    mortality.starvation.rate.max.sp0;0.3
    mortality.starvation.rate.max.sp1;0.3
    ");
}

#[test]
fn init_biomass_defaults() {
    let sink = generate(&["one", "two"]);
    insta::assert_snapshot!(sink.text("osm_param-init-pop.csv").unwrap(), @r"
    population.seeding.biomass.sp0;0.0
    population.seeding.biomass.sp1;0.0
    ");
}

#[test]
fn natural_mortality_defaults() {
    let sink = generate(&["one", "two"]);
    insta::assert_snapshot!(sink.text("osm_param-natural-mortality.csv").unwrap(), @r"
    mortality.natural.larva.rate.file;null
    mortality.natural.larva.rate.sp0;0.0
    mortality.natural.larva.rate.sp1;0.0
    mortality.natural.rate.file;null
    mortality.natural.rate.sp0;0.0
    mortality.natural.rate.sp1;0.0
    ");
}

#[test]
fn reproduction_seasonality_file() {
    let sink = generate(&["one"]);
    insta::assert_snapshot!(sink.text("reproduction-seasonality-sp0.csv").unwrap(), @r"
    Time (year);one
    0.0;0.0
    0.083333336;0.0
    0.16666667;0.0
    0.25;0.0
    0.33333334;0.0
    0.41666666;0.0
    0.5;0.0
    0.5833333;0.0
    0.6666667;0.0
    0.75;0.0
    0.8333333;0.0
    0.9166667;0.0
    ");
}
