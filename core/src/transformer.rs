use crate::error::TransformError;
use crate::notebook::{Cell, Resources};

/// A pipeline stage applied to every cell of a notebook in turn.
///
/// Both the cell and the shared resources are owned by the caller; a stage
/// mutates them in place and hands them back by returning.
pub trait Transformer: Send + Sync {
    fn name(&self) -> &str;

    fn transform_cell(
        &self,
        cell: &mut Cell,
        resources: &mut Resources,
        cell_index: usize,
    ) -> Result<(), TransformError>;
}
