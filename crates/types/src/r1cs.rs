use ark_bn254::Fr;
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::Matrix;

/// Compiled rank-1 constraint system, detached from the arkworks builder.
///
/// The constraint `i` reads `<a[i], z> * <b[i], z> = <c[i], z>` where `z`
/// is the full assignment, instance variables first (index 0 is the
/// constant `1`).
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct R1csArtifact {
    pub num_instance_variables: usize,
    pub num_witness_variables: usize,
    pub num_constraints: usize,
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
}

impl R1csArtifact {
    /// Finalize `cs` (inlining all linear combinations) and snapshot its matrices.
    pub fn from_constraint_system(cs: &ConstraintSystemRef<Fr>) -> Result<Self, SynthesisError> {
        cs.finalize();
        let matrices = cs.to_matrices().ok_or(SynthesisError::MissingCS)?;

        Ok(Self {
            num_instance_variables: matrices.num_instance_variables,
            num_witness_variables: matrices.num_witness_variables,
            num_constraints: matrices.num_constraints,
            a: matrices.a,
            b: matrices.b,
            c: matrices.c,
        })
    }

    /// Number of public inputs, excluding the constant.
    pub fn num_public_inputs(&self) -> usize {
        self.num_instance_variables.saturating_sub(1)
    }

    /// Check `assignment` (instance then witness, constant included) against every row.
    pub fn is_satisfied(&self, assignment: &[Fr]) -> bool {
        if assignment.len() != self.num_instance_variables + self.num_witness_variables {
            return false;
        }
        let eval = |row: &[(Fr, usize)]| -> Option<Fr> {
            row.iter()
                .map(|(coeff, index)| assignment.get(*index).map(|v| *coeff * v))
                .sum()
        };

        (0..self.num_constraints).all(|i| {
            match (eval(&self.a[i]), eval(&self.b[i]), eval(&self.c[i])) {
                (Some(a), Some(b), Some(c)) => a * b == c,
                _ => false,
            }
        })
    }
}
