use alloc::{vec, vec::Vec};

use crate::{FieldSpec, FieldTy, FieldValue, LayoutError, TokenInstructionKind};

/// Declared wire layout of one instruction kind: discriminant byte followed
/// by `fields` in order at fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IxLayout {
    kind: TokenInstructionKind,
    fields: &'static [FieldSpec],
}

const AMOUNT: FieldSpec = FieldSpec::new("amount", FieldTy::U64Le);
const DECIMALS: FieldSpec = FieldSpec::new("decimals", FieldTy::U8);

const NO_FIELDS: &[FieldSpec] = &[];
const AMOUNT_ONLY: &[FieldSpec] = &[AMOUNT];
const AMOUNT_DECIMALS: &[FieldSpec] = &[AMOUNT, DECIMALS];

pub const TRANSFER_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::Transfer, AMOUNT_ONLY);
pub const APPROVE_IX_LAYOUT: IxLayout = IxLayout::new(TokenInstructionKind::Approve, AMOUNT_ONLY);
pub const REVOKE_IX_LAYOUT: IxLayout = IxLayout::new(TokenInstructionKind::Revoke, NO_FIELDS);
pub const MINT_TO_IX_LAYOUT: IxLayout = IxLayout::new(TokenInstructionKind::MintTo, AMOUNT_ONLY);
pub const BURN_IX_LAYOUT: IxLayout = IxLayout::new(TokenInstructionKind::Burn, AMOUNT_ONLY);
pub const CLOSE_ACCOUNT_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::CloseAccount, NO_FIELDS);
pub const FREEZE_ACCOUNT_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::FreezeAccount, NO_FIELDS);
pub const THAW_ACCOUNT_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::ThawAccount, NO_FIELDS);
pub const TRANSFER_CHECKED_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::TransferChecked, AMOUNT_DECIMALS);
pub const APPROVE_CHECKED_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::ApproveChecked, AMOUNT_DECIMALS);
pub const MINT_TO_CHECKED_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::MintToChecked, AMOUNT_DECIMALS);
pub const BURN_CHECKED_IX_LAYOUT: IxLayout =
    IxLayout::new(TokenInstructionKind::BurnChecked, AMOUNT_DECIMALS);

/// The one place mirroring the program's discriminant -> field-layout table.
#[inline]
pub const fn layout(kind: TokenInstructionKind) -> &'static IxLayout {
    match kind {
        TokenInstructionKind::Transfer => &TRANSFER_IX_LAYOUT,
        TokenInstructionKind::Approve => &APPROVE_IX_LAYOUT,
        TokenInstructionKind::Revoke => &REVOKE_IX_LAYOUT,
        TokenInstructionKind::MintTo => &MINT_TO_IX_LAYOUT,
        TokenInstructionKind::Burn => &BURN_IX_LAYOUT,
        TokenInstructionKind::CloseAccount => &CLOSE_ACCOUNT_IX_LAYOUT,
        TokenInstructionKind::FreezeAccount => &FREEZE_ACCOUNT_IX_LAYOUT,
        TokenInstructionKind::ThawAccount => &THAW_ACCOUNT_IX_LAYOUT,
        TokenInstructionKind::TransferChecked => &TRANSFER_CHECKED_IX_LAYOUT,
        TokenInstructionKind::ApproveChecked => &APPROVE_CHECKED_IX_LAYOUT,
        TokenInstructionKind::MintToChecked => &MINT_TO_CHECKED_IX_LAYOUT,
        TokenInstructionKind::BurnChecked => &BURN_CHECKED_IX_LAYOUT,
    }
}

impl IxLayout {
    #[inline]
    pub const fn new(kind: TokenInstructionKind, fields: &'static [FieldSpec]) -> Self {
        Self { kind, fields }
    }

    #[inline]
    pub const fn kind(&self) -> TokenInstructionKind {
        self.kind
    }

    #[inline]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Total encoded length: discriminant byte plus declared field widths.
    #[inline]
    pub const fn span(&self) -> usize {
        let mut res = 1;
        let mut i = 0;
        while i < self.fields.len() {
            res += self.fields[i].ty.width();
            i += 1;
        }
        res
    }

    /// Writes discriminant then each field in declared order.
    /// The returned buffer is always exactly [`Self::span`] long.
    pub fn encode(&self, values: &[FieldValue]) -> Result<Vec<u8>, LayoutError> {
        if values.len() != self.fields.len() {
            return Err(LayoutError::FieldCount {
                expected: self.fields.len(),
                got: values.len(),
            });
        }
        let mut buf = Vec::with_capacity(self.span());
        buf.push(self.kind.discm());
        for (spec, value) in self.fields.iter().zip(values) {
            match (spec.ty, value) {
                (FieldTy::U8, FieldValue::U8(v)) => buf.push(*v),
                (FieldTy::U64Le, FieldValue::U64(v)) => {
                    let narrowed =
                        u64::try_from(*v).map_err(|_| LayoutError::AmountOutOfRange {
                            field: spec.name,
                            value: *v,
                        })?;
                    buf.extend_from_slice(&narrowed.to_le_bytes());
                }
                (FieldTy::Pubkey, FieldValue::Pubkey(pk)) => buf.extend_from_slice(pk),
                _ => return Err(LayoutError::FieldType { field: spec.name }),
            }
        }
        Ok(buf)
    }

    /// Inverse of [`Self::encode`]. The buffer must be exactly one span of
    /// this layout; anything else is reported, not repaired.
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<FieldValue>, LayoutError> {
        if buf.len() != self.span() {
            return Err(LayoutError::SpanMismatch {
                expected: self.span(),
                got: buf.len(),
            });
        }
        if buf[0] != self.kind.discm() {
            return Err(LayoutError::Discriminant {
                expected: self.kind.discm(),
                got: buf[0],
            });
        }
        let mut values = vec![];
        let mut at = 1;
        for spec in self.fields {
            let end = at + spec.ty.width();
            let bytes = &buf[at..end];
            values.push(match spec.ty {
                FieldTy::U8 => FieldValue::U8(bytes[0]),
                FieldTy::U64Le => {
                    let mut le = [0u8; 8];
                    le.copy_from_slice(bytes);
                    FieldValue::U64(u64::from_le_bytes(le) as u128)
                }
                FieldTy::Pubkey => {
                    let mut pk = [0u8; 32];
                    pk.copy_from_slice(bytes);
                    FieldValue::Pubkey(pk)
                }
            });
            at = end;
        }
        Ok(values)
    }
}
