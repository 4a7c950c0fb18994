use crate::error::TransformError;
use crate::notebook::{Cell, Resources};
use crate::transformer::Transformer;

/// Runs registered stages over a notebook's cells, one stage at a time.
pub struct Pipeline {
    transformers: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            transformers: Vec::new(),
        }
    }

    pub fn register(&mut self, transformer: Box<dyn Transformer>) {
        self.transformers.push(transformer);
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Apply every stage, in registration order, to every cell, in document order.
    ///
    /// Stops at the first failing cell; earlier cells keep whatever the stages
    /// already did to them.
    pub fn run(&self, cells: &mut [Cell], resources: &mut Resources) -> Result<(), TransformError> {
        for transformer in &self.transformers {
            log::debug!("running {} over {} cell(s)", transformer.name(), cells.len());
            for (index, cell) in cells.iter_mut().enumerate() {
                transformer
                    .transform_cell(cell, resources, index)
                    .map_err(|e| TransformError::Stage {
                        stage: transformer.name().to_string(),
                        cell_index: index,
                        source: Box::new(e),
                    })?;
            }
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
