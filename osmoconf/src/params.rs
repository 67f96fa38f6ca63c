//! Per-group parameter rows.
//!
//! Most Osmose parameters follow the same shape: one row per group, keyed by
//! a prefix plus the group's positional index, with a default value (or a
//! fixed value tuple) that is identical for every group. Only the key varies
//! by group.

use std::io::Write;

use osmoconf_core::{Result, RowWriter};

use crate::groups::GroupList;

/// Write one `prefix<index>;value` row per group.
pub fn per_group<W: Write>(
    rows: &mut RowWriter<W>,
    groups: &GroupList,
    prefix: &str,
    value: &str,
) -> Result<()> {
    per_group_values(rows, groups, prefix, &[value])
}

/// Write one `prefix<index>;v1;..;vn` row per group.
pub fn per_group_values<W: Write>(
    rows: &mut RowWriter<W>,
    groups: &GroupList,
    prefix: &str,
    values: &[&str],
) -> Result<()> {
    for group in groups {
        let key = group.key(prefix);
        let mut fields = Vec::with_capacity(values.len() + 1);
        fields.push(key.as_str());
        fields.extend_from_slice(values);
        rows.row(&fields)?;
    }
    Ok(())
}
