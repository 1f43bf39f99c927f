//! Grouping of scene objects into instanced draw batches.

use rings_core::{ShadedObject, SphereGeometry};

/// Objects that share one sphere mesh and cull mode.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchPlan {
    pub geometry: SphereGeometry,
    pub double_sided: bool,
    /// Indices into the scene's object list.
    pub members: Vec<usize>,
    pub first_instance: u32,
}

/// Group `objects` by geometry and cull mode, in first-seen order.
///
/// Instances are laid out batch after batch, so `first_instance` of each
/// batch is the running member count of the batches before it.
pub fn plan_batches(objects: &[ShadedObject]) -> Vec<BatchPlan> {
    let mut batches: Vec<BatchPlan> = Vec::new();
    for (index, object) in objects.iter().enumerate() {
        let double_sided = object.material.double_sided;
        match batches
            .iter_mut()
            .find(|b| b.geometry == object.geometry && b.double_sided == double_sided)
        {
            Some(batch) => batch.members.push(index),
            None => batches.push(BatchPlan {
                geometry: object.geometry,
                double_sided,
                members: vec![index],
                first_instance: 0,
            }),
        }
    }
    let mut next = 0u32;
    for batch in &mut batches {
        batch.first_instance = next;
        next += batch.members.len() as u32;
    }
    batches
}

/// Whether any batch needs the back-face culled pipeline.
pub fn needs_culled_pipeline(batches: &[BatchPlan]) -> bool {
    batches.iter().any(|b| !b.double_sided)
}
