use ark_bn254::Fr;
use ark_relations::r1cs::ConstraintSystemRef;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Public part of a witness: the statement the verifier checks against.
#[derive(Debug, Clone, Default, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicWitness {
    inputs: Vec<Fr>,
}

impl PublicWitness {
    pub fn new(inputs: Vec<Fr>) -> Self {
        Self { inputs }
    }

    /// Public inputs of an assigned constraint system.
    ///
    /// The instance assignment always starts with the constant `1`, which is
    /// not part of the statement. Returns `None` for a system that has been
    /// dropped or never assigned.
    pub fn from_constraint_system(cs: &ConstraintSystemRef<Fr>) -> Option<Self> {
        let inner = cs.borrow()?;
        let inputs = inner.instance_assignment.get(1..)?.to_vec();
        Some(Self { inputs })
    }

    pub fn vector(&self) -> &[Fr] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl From<Vec<Fr>> for PublicWitness {
    fn from(inputs: Vec<Fr>) -> Self {
        Self::new(inputs)
    }
}
