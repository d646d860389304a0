//! Builds a [`MaterialTable`] from a materials data file.

use std::path::Path;

use alembic_core::resolver::{GroupMember, MaterialTable};
use tracing::info;

use crate::loader::{DataLoadError, deserialize_file};
use crate::schema::MaterialsData;

/// Load and resolve a materials file.
pub fn load_materials(path: &Path) -> Result<MaterialTable, DataLoadError> {
    let data: MaterialsData = deserialize_file(path)?;
    let table = build_materials(&data, path)?;
    info!(
        file = %path.display(),
        items = table.item_count(),
        fluids = table.fluid_count(),
        groups = table.group_count(),
        "loaded materials"
    );
    Ok(table)
}

/// Resolve parsed materials data. `file` only labels errors.
///
/// Item and fluid names must be unique. Group members must name registered
/// items; a member's `meta` defaults to 0.
pub fn build_materials(data: &MaterialsData, file: &Path) -> Result<MaterialTable, DataLoadError> {
    let mut table = MaterialTable::new();

    for name in &data.items {
        if table.item_id(name).is_some() {
            return Err(DataLoadError::DuplicateName {
                file: file.to_path_buf(),
                name: name.clone(),
            });
        }
        table.register_item(name);
    }

    for name in &data.fluids {
        if table.fluid_id(name).is_some() {
            return Err(DataLoadError::DuplicateName {
                file: file.to_path_buf(),
                name: name.clone(),
            });
        }
        table.register_fluid(name);
    }

    for group in &data.groups {
        let members = group
            .members
            .iter()
            .map(|m| {
                let item = table
                    .item_id(&m.id)
                    .ok_or_else(|| DataLoadError::UnresolvedRef {
                        file: file.to_path_buf(),
                        name: m.id.clone(),
                        expected_kind: "item",
                    })?;
                Ok(GroupMember {
                    item,
                    meta: m.meta.or_u32(0),
                })
            })
            .collect::<Result<Vec<_>, DataLoadError>>()?;
        table.register_group(&group.name, members);
    }

    Ok(table)
}
