//! Demo circuit: knowledge of `x` such that `x^3 + x + 5 = y`, `y` public.

use ark_relations::lc;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable};
use zkverifier_types::Fr;

#[derive(Clone, Debug)]
pub struct CubicCircuit {
    pub x: Option<Fr>,
}

impl CubicCircuit {
    pub fn new(x: u64) -> Self {
        Self {
            x: Some(Fr::from(x)),
        }
    }

    /// Shape-only instance used for setup and R1CS export.
    pub fn empty() -> Self {
        Self { x: None }
    }

    pub fn output(x: Fr) -> Fr {
        x * x * x + x + Fr::from(5u64)
    }
}

impl ConstraintSynthesizer<Fr> for CubicCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let x_val = self.x;
        let x_sq_val = x_val.map(|x| x * x);
        let x_cu_val = x_sq_val.zip(x_val).map(|(sq, x)| sq * x);

        let y = cs.new_input_variable(|| {
            x_val.map(Self::output).ok_or(SynthesisError::AssignmentMissing)
        })?;
        let x = cs.new_witness_variable(|| x_val.ok_or(SynthesisError::AssignmentMissing))?;
        let x_sq = cs.new_witness_variable(|| x_sq_val.ok_or(SynthesisError::AssignmentMissing))?;
        let x_cu = cs.new_witness_variable(|| x_cu_val.ok_or(SynthesisError::AssignmentMissing))?;

        cs.enforce_constraint(lc!() + x, lc!() + x, lc!() + x_sq)?;
        cs.enforce_constraint(lc!() + x_sq, lc!() + x, lc!() + x_cu)?;
        // (x^3 + x + 5) * 1 = y
        cs.enforce_constraint(
            lc!() + x_cu + x + (Fr::from(5u64), Variable::One),
            lc!() + Variable::One,
            lc!() + y,
        )?;

        Ok(())
    }
}
