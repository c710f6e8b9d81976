use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid measurement index. Requested: {index}, ledger holds: {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
