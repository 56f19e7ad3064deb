/// Word layout of a proof as the Solidity verifier consumes it.
pub mod layout {
    /// Ar (2) + Bs (4) + Krs (2)
    pub const PROOF_LEN: usize = 8;
    /// X and Y of each Pedersen commitment
    pub const EACH_COMMITMENT_LEN: usize = 2;
    /// X and Y of the commitment proof of knowledge
    pub const COMMITMENT_POK_LEN: usize = 2;
    /// Size in bytes of one uint256 calldata word
    pub const WORD_SIZE: usize = 32;
}
