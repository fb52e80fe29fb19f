/// Wire interpretation of a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTy {
    U8,
    /// 8 bytes, little-endian
    U64Le,
    /// 32-byte public key
    Pubkey,
}

impl FieldTy {
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U64Le => 8,
            Self::Pubkey => 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldTy,
}

impl FieldSpec {
    #[inline]
    pub const fn new(name: &'static str, ty: FieldTy) -> Self {
        Self { name, ty }
    }
}

/// A value for one declared field.
///
/// The `U64` carrier is `u128` so callers may hand over integers wider than
/// the wire field; encoding narrows and rejects anything above `u64::MAX`
/// instead of truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue {
    U8(u8),
    U64(u128),
    Pubkey([u8; 32]),
}

impl FieldValue {
    #[inline]
    pub const fn ty(&self) -> FieldTy {
        match self {
            Self::U8(_) => FieldTy::U8,
            Self::U64(_) => FieldTy::U64Le,
            Self::Pubkey(_) => FieldTy::Pubkey,
        }
    }
}
