//! Test suite for the artifact export flow
//!
//! This module contains tests for:
//! - Key persistence across runs
//! - Constraint system export
//! - Setup → prove → export → re-read round trips


use ark_relations::lc;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use zkverifier_types::Fr;

/// `a * b = c` with `c` public.
#[derive(Clone)]
pub(crate) struct MulCircuit {
    pub a: Option<Fr>,
    pub b: Option<Fr>,
}

impl MulCircuit {
    pub fn new(a: u64, b: u64) -> Self {
        Self {
            a: Some(Fr::from(a)),
            b: Some(Fr::from(b)),
        }
    }

    pub fn empty() -> Self {
        Self { a: None, b: None }
    }
}

impl ConstraintSynthesizer<Fr> for MulCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let product = match (self.a, self.b) {
            (Some(a), Some(b)) => Some(a * b),
            _ => None,
        };
        let c = cs.new_input_variable(|| product.ok_or(SynthesisError::AssignmentMissing))?;
        let a = cs.new_witness_variable(|| self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = cs.new_witness_variable(|| self.b.ok_or(SynthesisError::AssignmentMissing))?;

        cs.enforce_constraint(lc!() + a, lc!() + b, lc!() + c)?;
        Ok(())
    }
}
