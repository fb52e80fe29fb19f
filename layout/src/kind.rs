/// Instruction numbering of the receiving token program.
///
/// Discriminant values are the program's wire contract and must match it
/// exactly. Kinds whose payloads are not fixed-span (optional-pubkey fields)
/// are not part of this interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenInstructionKind {
    Transfer = 3,
    Approve = 4,
    Revoke = 5,
    MintTo = 7,
    Burn = 8,
    CloseAccount = 9,
    FreezeAccount = 10,
    ThawAccount = 11,
    TransferChecked = 12,
    ApproveChecked = 13,
    MintToChecked = 14,
    BurnChecked = 15,
}

impl TokenInstructionKind {
    pub const ALL: [Self; 12] = [
        Self::Transfer,
        Self::Approve,
        Self::Revoke,
        Self::MintTo,
        Self::Burn,
        Self::CloseAccount,
        Self::FreezeAccount,
        Self::ThawAccount,
        Self::TransferChecked,
        Self::ApproveChecked,
        Self::MintToChecked,
        Self::BurnChecked,
    ];

    /// Leading byte of the encoded payload.
    #[inline]
    pub const fn discm(self) -> u8 {
        self as u8
    }
}
