use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Groth16 proof over BN254 in the shape the on-chain verifier expects.
///
/// Besides the three classic elements it carries the Pedersen commitments
/// some circuits emit and a single proof of knowledge covering all of them.
/// Binary encoding is the arkworks canonical one, field order as declared.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof {
    /// A, in G1
    pub ar: G1Affine,
    /// B, in G2
    pub bs: G2Affine,
    /// C, in G1
    pub krs: G1Affine,
    pub commitments: Vec<G1Affine>,
    pub commitment_pok: G1Affine,
}

impl Proof {
    pub fn new(ar: G1Affine, bs: G2Affine, krs: G1Affine) -> Self {
        Self {
            ar,
            bs,
            krs,
            commitments: Vec::new(),
            commitment_pok: G1Affine::identity(),
        }
    }

    pub fn with_commitments(mut self, commitments: Vec<G1Affine>, pok: G1Affine) -> Self {
        self.commitments = commitments;
        self.commitment_pok = pok;
        self
    }

    pub fn has_commitments(&self) -> bool {
        !self.commitments.is_empty()
    }

    /// Drop the commitment data and return the plain arkworks proof.
    pub fn to_groth16(&self) -> ark_groth16::Proof<Bn254> {
        ark_groth16::Proof {
            a: self.ar,
            b: self.bs,
            c: self.krs,
        }
    }
}

impl From<ark_groth16::Proof<Bn254>> for Proof {
    fn from(proof: ark_groth16::Proof<Bn254>) -> Self {
        Self::new(proof.a, proof.b, proof.c)
    }
}
