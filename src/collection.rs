//! The ordered entity list handed to the renderer.

use std::ops::Index;

use serde::Serialize;
use shapeshow_config::ConfigEntityInfo;
use shapeshow_fonts::FontSource;

use crate::builder::EntityBuilder;
use crate::diagnostics::RecordDiagnostic;
use crate::entity::Entity;

/// Entities in config file order. Renderers draw them in this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityCollection {
    entities: Vec<Entity>,
}

/// Outcome of building a whole config.
#[derive(Debug, Clone, Default)]
pub struct SceneLoad {
    pub entities: EntityCollection,
    pub diagnostics: Vec<RecordDiagnostic>,
}

impl EntityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every record, in order, into a collection.
    ///
    /// Each diagnostic is logged as a warning and also returned with the
    /// index of the record that produced it.
    pub fn build<F: FontSource>(records: &[ConfigEntityInfo], fonts: &mut F) -> SceneLoad {
        let mut builder = EntityBuilder::new(fonts);
        let mut load = SceneLoad {
            entities: EntityCollection {
                entities: Vec::with_capacity(records.len()),
            },
            diagnostics: Vec::new(),
        };

        for (index, info) in records.iter().enumerate() {
            log::debug!("Processing entity {}:\n{}", index + 1, info);
            let built = builder.build(info);
            if let Some(diagnostic) = built.diagnostic {
                log::warn!("Config record {}: {}", index + 1, diagnostic);
                load.diagnostics.push(RecordDiagnostic {
                    record: index,
                    diagnostic,
                });
            }
            load.entities.push(built.entity);
        }

        log::info!(
            "Built {} entities ({} with warnings)",
            load.entities.len(),
            load.diagnostics.len()
        );
        load
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }
}

impl Index<usize> for EntityCollection {
    type Output = Entity;

    fn index(&self, index: usize) -> &Entity {
        &self.entities[index]
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl IntoIterator for EntityCollection {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

impl FromIterator<Entity> for EntityCollection {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}
