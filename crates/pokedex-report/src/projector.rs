use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::model::{DetailView, ProjectedRecord, LIST_SEPARATOR};

/// Flatten detail payloads into records, one per payload, in input order.
///
/// Any payload missing `id`, `name`, `types[].type.name` or
/// `abilities[].ability.name` aborts the whole projection.
pub fn project(payloads: &[Value]) -> Result<Vec<ProjectedRecord>, AppError> {
    payloads
        .iter()
        .enumerate()
        .map(|(index, payload)| {
            project_one(payload).map_err(|e| AppError::Projection {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn project_one(payload: &Value) -> Result<ProjectedRecord, serde_json::Error> {
    let view = DetailView::deserialize(payload)?;
    Ok(ProjectedRecord {
        id: view.id,
        name: view.name,
        categories: view
            .types
            .iter()
            .map(|slot| slot.kind.name.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        traits: view
            .abilities
            .iter()
            .map(|slot| slot.ability.name.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
    })
}
