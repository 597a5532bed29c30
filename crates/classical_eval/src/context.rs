//! The read-only half of the evaluator: parameters and the material table.

use crate::material::MaterialTable;
use crate::params::{EvalParams, ParamsError};

/// Built once, then shared between workers behind an `Arc`.
#[derive(Clone, Debug)]
pub struct EvalContext {
    pub params: EvalParams,
    pub material: MaterialTable,
}

impl EvalContext {
    pub fn new(params: EvalParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            material: MaterialTable::new(),
        })
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            params: EvalParams::default(),
            material: MaterialTable::new(),
        }
    }
}
