//! Solidity verifier contract generation for Groth16 verifying keys.
//!
//! The generated contract checks
//! `e(-A, B) * e(alpha, beta) * e(vk_x, gamma) * e(C, delta) == 1`
//! with the EVM BN254 precompiles (0x06 add, 0x07 mul, 0x08 pairing).
//! `verifyProof` takes the proof as the eight words produced by
//! [`crate::solidity::proof_words`], G2 halves `c1` first.

use std::io::{BufWriter, Write};
use std::path::Path;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use tracing::info;
use zkverifier_types::{Fq, Fr, G1Affine, G2Affine, VerifyingKey};

use crate::error::{ArtifactError, Result};
use crate::fs::open_for_create_or_overwrite;
use crate::solidity::field_to_uint;

pub const DEFAULT_CONTRACT_NAME: &str = "Verifier";
const PRAGMA: &str = "^0.8.4";

#[derive(Debug, Clone)]
pub struct SolidityVerifierOptions {
    pub contract_name: String,
}

impl Default for SolidityVerifierOptions {
    fn default() -> Self {
        Self {
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
        }
    }
}

/// Artifacts that can render themselves as Solidity source.
pub trait ExportSolidity {
    fn export_solidity_with<W: Write>(
        &self,
        writer: &mut W,
        options: &SolidityVerifierOptions,
    ) -> std::io::Result<()>;

    fn export_solidity<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.export_solidity_with(writer, &SolidityVerifierOptions::default())
    }
}

fn modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_be(&F::MODULUS.to_bytes_be())
}

fn write_g1<W: Write>(w: &mut W, name: &str, p: &G1Affine) -> std::io::Result<()> {
    writeln!(w, "    uint256 constant {}_X = {};", name, field_to_uint(&p.x))?;
    writeln!(w, "    uint256 constant {}_Y = {};", name, field_to_uint(&p.y))
}

fn write_g2<W: Write>(w: &mut W, name: &str, p: &G2Affine) -> std::io::Result<()> {
    writeln!(w, "    uint256 constant {}_X_1 = {};", name, field_to_uint(&p.x.c1))?;
    writeln!(w, "    uint256 constant {}_X_0 = {};", name, field_to_uint(&p.x.c0))?;
    writeln!(w, "    uint256 constant {}_Y_1 = {};", name, field_to_uint(&p.y.c1))?;
    writeln!(w, "    uint256 constant {}_Y_0 = {};", name, field_to_uint(&p.y.c0))
}

fn write_pairing_slot<W: Write>(w: &mut W, start: usize, name: &str) -> std::io::Result<()> {
    for (offset, suffix) in ["X_1", "X_0", "Y_1", "Y_0"].iter().enumerate() {
        writeln!(w, "        pairing[{}] = {}_{};", start + offset, name, suffix)?;
    }
    Ok(())
}

impl ExportSolidity for VerifyingKey {
    fn export_solidity_with<W: Write>(
        &self,
        w: &mut W,
        options: &SolidityVerifierOptions,
    ) -> std::io::Result<()> {
        if self.gamma_abc_g1.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "verifying key has no IC points",
            ));
        }
        let num_inputs = self.gamma_abc_g1.len() - 1;

        writeln!(w, "// SPDX-License-Identifier: MIT")?;
        writeln!(w, "pragma solidity {};", PRAGMA)?;
        writeln!(w)?;
        writeln!(w, "/// @title Groth16 verifier over BN254")?;
        writeln!(w, "/// @notice Generated from a verifying key, do not edit.")?;
        writeln!(w, "contract {} {{", options.contract_name)?;
        writeln!(w, "    // Scalar field size")?;
        writeln!(w, "    uint256 constant R = {};", modulus::<Fr>())?;
        writeln!(w, "    // Base field size")?;
        writeln!(w, "    uint256 constant P = {};", modulus::<Fq>())?;
        writeln!(w)?;

        write_g1(w, "ALPHA", &self.alpha_g1)?;
        write_g2(w, "BETA", &self.beta_g2)?;
        write_g2(w, "GAMMA", &self.gamma_g2)?;
        write_g2(w, "DELTA", &self.delta_g2)?;
        for (i, ic) in self.gamma_abc_g1.iter().enumerate() {
            write_g1(w, &format!("IC{}", i), ic)?;
        }
        writeln!(w)?;

        writeln!(w, "    error ProofInvalid();")?;
        writeln!(w, "    error PublicInputNotInField();")?;
        writeln!(w)?;

        if num_inputs > 0 {
            writeln!(
                w,
                "    function verifyProof(uint256[8] calldata proof, uint256[{}] calldata input) public view returns (bool) {{",
                num_inputs
            )?;
        } else {
            writeln!(
                w,
                "    function verifyProof(uint256[8] calldata proof) public view returns (bool) {{"
            )?;
        }
        writeln!(w, "        (uint256 x, uint256 y) = (IC0_X, IC0_Y);")?;
        for i in 0..num_inputs {
            writeln!(
                w,
                "        (x, y) = accumulate(x, y, IC{}_X, IC{}_Y, input[{}]);",
                i + 1,
                i + 1,
                i
            )?;
        }
        writeln!(w)?;
        writeln!(w, "        uint256[24] memory pairing;")?;
        writeln!(w, "        pairing[0] = proof[0];")?;
        writeln!(w, "        pairing[1] = (P - (proof[1] % P)) % P;")?;
        for i in 2..6 {
            writeln!(w, "        pairing[{}] = proof[{}];", i, i)?;
        }
        writeln!(w, "        pairing[6] = ALPHA_X;")?;
        writeln!(w, "        pairing[7] = ALPHA_Y;")?;
        write_pairing_slot(w, 8, "BETA")?;
        writeln!(w, "        pairing[12] = x;")?;
        writeln!(w, "        pairing[13] = y;")?;
        write_pairing_slot(w, 14, "GAMMA")?;
        writeln!(w, "        pairing[18] = proof[6];")?;
        writeln!(w, "        pairing[19] = proof[7];")?;
        write_pairing_slot(w, 20, "DELTA")?;
        writeln!(w)?;
        writeln!(w, "        uint256[1] memory out;")?;
        writeln!(w, "        bool success;")?;
        writeln!(w, "        assembly {{")?;
        writeln!(w, "            success := staticcall(gas(), 0x08, pairing, 0x300, out, 0x20)")?;
        writeln!(w, "        }}")?;
        writeln!(w, "        return success && out[0] == 1;")?;
        writeln!(w, "    }}")?;
        writeln!(w)?;

        writeln!(
            w,
            "    function accumulate(uint256 x, uint256 y, uint256 icX, uint256 icY, uint256 s) internal view returns (uint256, uint256) {{"
        )?;
        writeln!(w, "        if (s >= R) revert PublicInputNotInField();")?;
        writeln!(w, "        uint256[3] memory mulIn = [icX, icY, s];")?;
        writeln!(w, "        uint256[4] memory addIn;")?;
        writeln!(w, "        bool success;")?;
        writeln!(w, "        assembly {{")?;
        writeln!(
            w,
            "            success := staticcall(gas(), 0x07, mulIn, 0x60, add(addIn, 0x40), 0x40)"
        )?;
        writeln!(w, "        }}")?;
        writeln!(w, "        if (!success) revert ProofInvalid();")?;
        writeln!(w, "        addIn[0] = x;")?;
        writeln!(w, "        addIn[1] = y;")?;
        writeln!(w, "        assembly {{")?;
        writeln!(w, "            success := staticcall(gas(), 0x06, addIn, 0x80, addIn, 0x40)")?;
        writeln!(w, "        }}")?;
        writeln!(w, "        if (!success) revert ProofInvalid();")?;
        writeln!(w, "        return (addIn[0], addIn[1]);")?;
        writeln!(w, "    }}")?;
        writeln!(w, "}}")
    }
}

pub fn write_verifying_key_as_solidity(vk: &VerifyingKey, path: impl AsRef<Path>) -> Result<()> {
    write_verifying_key_as_solidity_with(vk, path, &SolidityVerifierOptions::default())
}

pub fn write_verifying_key_as_solidity_with(
    vk: &VerifyingKey,
    path: impl AsRef<Path>,
    options: &SolidityVerifierOptions,
) -> Result<()> {
    let path = path.as_ref();
    // IC0 is the constant term, every valid key has it
    if vk.gamma_abc_g1.is_empty() {
        return Err(ArtifactError::InvalidVerifyingKey("no IC points"));
    }
    let file = open_for_create_or_overwrite(path)?;
    let mut writer = BufWriter::new(file);

    vk.export_solidity_with(&mut writer, options)
        .and_then(|_| writer.flush())
        .map_err(|e| ArtifactError::io("write", path, e))?;

    info!(
        path = %path.display(),
        contract = %options.contract_name,
        public_inputs = vk.gamma_abc_g1.len() - 1,
        "wrote solidity verifier"
    );
    Ok(())
}
