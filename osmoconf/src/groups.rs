//! Species groups and their stable positional indices.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{Error, Result};

/// One species group: a caller-supplied name plus the 0-based position it was
/// assigned at construction.
///
/// The index is the group's identity in parameter keys and derived file
/// names. It is fixed when the list is built and never recomputed by
/// searching the list, so it cannot drift once generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    index: usize,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Parameter key for this group: `prefix` followed by the positional
    /// index, e.g. `species.name.sp3`.
    pub fn key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.index)
    }
}

/// Ordered, validated list of groups.
#[derive(Debug, Clone, Default)]
pub struct GroupList {
    groups: Vec<Group>,
}

impl GroupList {
    /// Build a list from names in order, assigning each its position.
    ///
    /// Duplicate names are rejected: per-group file names embed the group
    /// name, and two groups sharing one would silently collide on the same
    /// seasonality and map files. Names containing a path separator are
    /// rejected for the same reason; a name like `../x` would otherwise
    /// escape the bundle directory when writing to a filesystem sink.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut groups = Vec::new();
        for (index, name) in names.into_iter().enumerate() {
            let name = name.into();
            if name.contains(['/', '\\']) {
                return Err(Error::InvalidGroupName { name });
            }
            if let Some(&first) = seen.get(&name) {
                return Err(Error::DuplicateGroup {
                    name,
                    first,
                    second: index,
                });
            }
            seen.insert(name.clone(), index);
            groups.push(Group { name, index });
        }
        Ok(Self { groups })
    }

    /// Build a list from explicit names followed by implicit ones.
    ///
    /// Both lists form one contiguous sequence for generation purposes;
    /// implicit groups continue the index numbering where the explicit list
    /// ends.
    pub fn with_implicit<I, J, S, T>(explicit: I, implicit: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(
            explicit
                .into_iter()
                .map(Into::into)
                .chain(implicit.into_iter().map(Into::into)),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a GroupList {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Request payload naming the groups a bundle should be generated for.
///
/// Mirrors the JSON body callers send: an explicit list plus an optional
/// implicit list appended for completeness.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRequest {
    pub group_names: Vec<String>,
    #[serde(default)]
    pub implicit_group_names: Vec<String>,
}

impl BundleRequest {
    /// Validate and flatten both lists into one ordered group list.
    pub fn groups(&self) -> Result<GroupList> {
        GroupList::with_implicit(
            self.group_names.iter().cloned(),
            self.implicit_group_names.iter().cloned(),
        )
    }
}
