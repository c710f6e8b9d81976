use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown fiber type: '{0}'. Expected 'singlemode' or 'multimode'.")]
    UnknownFiberType(String),

    #[error("Unknown wavelength: '{0}'. Expected one of '850', '1300', '1310', '1550'.")]
    UnknownWavelength(String),
}
