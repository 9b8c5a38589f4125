//! Operation catalog - the static registry of remote operations
//!
//! Every callable operation is declared here once, grouped by protocol
//! family, with its ordered parameter names. Backends bind their endpoint
//! maps from this catalog at construction time, and the router derives
//! its name-to-family routing table from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A single declared remote operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Operation name, unique across all protocol families
    pub name: String,
    /// Ordered parameter names the backend expects in the payload
    pub params: Vec<String>,
}

impl OperationSpec {
    pub fn new(name: &str, params: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Routing table mapping operation name to owning protocol family
///
/// Derived once from the full catalog and read-only afterward. Any name
/// not present is not routable.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: BTreeMap<String, String>,
}

impl RoutingTable {
    /// Family owning the given operation name, if any
    pub fn family_of(&self, operation: &str) -> Option<&str> {
        self.routes.get(operation).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate `(operation, family)` pairs in stable name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(op, fam)| (op.as_str(), fam.as_str()))
    }
}

/// Catalog of protocol families and their operations
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    families: BTreeMap<String, Vec<OperationSpec>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in deployment catalog: `onev`, `plc` and `cob`
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            "onev",
            vec![
                OperationSpec::new("ListAll", &["object_type", "filter_attrs", "return_attrs"]),
                OperationSpec::new("Update", &["object_type", "object_id", "data_attrs"]),
                OperationSpec::new("Create", &["object_type", "data_attrs"]),
                OperationSpec::new(
                    "Bind",
                    &[
                        "1st_object_type",
                        "1st_object_id",
                        "2nd_object_type",
                        "2nd_object_id",
                    ],
                ),
                OperationSpec::new("Delete", &["object_type", "object_id"]),
            ],
        );
        catalog.register(
            "plc",
            vec![OperationSpec::new("GetSlices", &["data_attrs", "return_attrs"])],
        );
        catalog.register(
            "cob",
            vec![
                OperationSpec::new("GetPersons", &["person_filter", "return_fields"]),
                OperationSpec::new("AddPerson", &["person_fields"]),
                OperationSpec::new("UpdatePerson", &["person_id_or_email", "person_fields"]),
                OperationSpec::new("DeletePerson", &["person_id_or_email"]),
            ],
        );
        catalog
    }

    /// Register a protocol family and its operations
    pub fn register(&mut self, family: &str, operations: Vec<OperationSpec>) {
        self.families.insert(family.to_string(), operations);
    }

    /// Operations declared for the given protocol family
    pub fn lookup(&self, family: &str) -> Result<&[OperationSpec]> {
        self.families
            .get(family)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::UnknownProtocolFamily(family.to_string()))
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Derive the operation-name routing table
    ///
    /// Operation names are unique across families in a valid deployment;
    /// the table is deterministic across repeated builds.
    pub fn routing_table(&self) -> RoutingTable {
        let mut routes = BTreeMap::new();
        for (family, operations) in &self.families {
            for spec in operations {
                let previous = routes.insert(spec.name.clone(), family.clone());
                debug_assert!(
                    previous.is_none(),
                    "duplicate operation name '{}' in catalog",
                    spec.name
                );
            }
        }
        RoutingTable { routes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_families() {
        let catalog = Catalog::builtin();
        let families: Vec<_> = catalog.families().collect();
        assert_eq!(families, vec!["cob", "onev", "plc"]);
    }

    #[test]
    fn test_unknown_family() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.lookup("ftp"),
            Err(AppError::UnknownProtocolFamily(_))
        ));
    }

    #[test]
    fn test_param_order_preserved() {
        let catalog = Catalog::builtin();
        let onev = catalog.lookup("onev").unwrap();
        let list_all = onev.iter().find(|s| s.name == "ListAll").unwrap();
        assert_eq!(
            list_all.params,
            vec!["object_type", "filter_attrs", "return_attrs"]
        );
    }
}
