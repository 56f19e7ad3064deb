//! Decimal text rendering of a proof for the Solidity verifier.
//!
//! The output is three lines of bracketed, comma separated uint256 values:
//!
//! ```text
//! [Ar.X,Ar.Y,Bs.X.A1,Bs.X.A0,Bs.Y.A1,Bs.Y.A0,Krs.X,Krs.Y]
//! [C0.X,C0.Y,C1.X,C1.Y,...]
//! [Pok.X,Pok.Y]
//! ```
//!
//! G2 coordinates put the `c1` (A1) half first, which is the order the EVM
//! pairing precompile expects. Do not "fix" it.

use std::io::{BufWriter, Write};
use std::path::Path;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use tracing::info;
use zkverifier_types::layout::{COMMITMENT_POK_LEN, EACH_COMMITMENT_LEN, PROOF_LEN, WORD_SIZE};
use zkverifier_types::{Fq, G1Affine, Proof};

use crate::error::{ArtifactError, Result};
use crate::fs::open_for_create_or_overwrite;

/// Field element as the unsigned integer of its big-endian canonical bytes.
pub fn field_to_uint<F: PrimeField>(f: &F) -> BigUint {
    BigUint::from_bytes_be(&f.into_bigint().to_bytes_be())
}

fn g1_words(p: &G1Affine) -> [Fq; 2] {
    [p.x, p.y]
}

/// The eight proof words in verifier order.
pub fn proof_words(proof: &Proof) -> [BigUint; PROOF_LEN] {
    let words: [Fq; PROOF_LEN] = [
        proof.ar.x,
        proof.ar.y,
        proof.bs.x.c1,
        proof.bs.x.c0,
        proof.bs.y.c1,
        proof.bs.y.c0,
        proof.krs.x,
        proof.krs.y,
    ];
    words.map(|w| field_to_uint(&w))
}

/// X then Y of every commitment, in proof order.
pub fn commitment_words(proof: &Proof) -> Vec<BigUint> {
    let mut words = Vec::with_capacity(proof.commitments.len() * EACH_COMMITMENT_LEN);
    for commitment in &proof.commitments {
        words.extend(g1_words(commitment).iter().map(|w| field_to_uint(w)));
    }
    words
}

pub fn commitment_pok_words(proof: &Proof) -> [BigUint; COMMITMENT_POK_LEN] {
    g1_words(&proof.commitment_pok).map(|w| field_to_uint(&w))
}

/// `[a,b,c]` with plain decimal elements.
pub fn uint_array_to_string(nums: &[BigUint]) -> String {
    let mut out = String::from("[");
    for (i, n) in nums.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&n.to_str_radix(10));
    }
    out.push(']');
    out
}

/// Render `proof` into `writer`. No trailing newline.
pub fn export_proof_solidity<W: Write>(proof: &Proof, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(uint_array_to_string(&proof_words(proof)).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(uint_array_to_string(&commitment_words(proof)).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(uint_array_to_string(&commitment_pok_words(proof)).as_bytes())?;
    Ok(())
}

pub fn proof_to_solidity_string(proof: &Proof) -> String {
    let mut out = Vec::new();
    // writing into a Vec cannot fail
    let _ = export_proof_solidity(proof, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

pub fn write_proof_as_solidity(proof: &Proof, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = open_for_create_or_overwrite(path)?;
    let mut writer = BufWriter::new(file);

    export_proof_solidity(proof, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ArtifactError::io("write", path, e))?;

    info!(
        path = %path.display(),
        commitments = proof.commitments.len(),
        "wrote proof for solidity"
    );
    Ok(())
}

/// The eight proof words ABI-packed as uint256 big-endian slots.
pub fn proof_calldata(proof: &Proof) -> [u8; PROOF_LEN * WORD_SIZE] {
    let mut out = [0u8; PROOF_LEN * WORD_SIZE];
    for (slot, word) in out.chunks_exact_mut(WORD_SIZE).zip(proof_words(proof)) {
        let bytes = word.to_bytes_be();
        // BN254 base field elements always fit in one word
        slot[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
    }
    out
}

pub fn proof_calldata_hex(proof: &Proof) -> String {
    format!("0x{}", hex::encode(proof_calldata(proof)))
}
