use thiserror::Error;
use gdal::errors::GdalError;
use gdal_sys::CPLErr;
use crate::pc_char_to_string;

pub type Result<T> = std::result::Result<T, GcpVecError>;

#[derive(Error,Debug)]
pub enum GcpVecError {
    #[error("invalid file name {0}")]
    InvalidFileName(String),

    #[error("no GCPs in dataset {0}")]
    NoGcps(String),

    #[error("no vector output driver named {0}")]
    NoSuchDriver(String),

    #[error("failed to convert to C string {0}")]
    CStringConversion( #[from] std::ffi::NulError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    // pass through for errors in gdal crate
    #[error("gdal error {0}")]
    GdalError( #[from] gdal::errors::GdalError),
}

pub fn last_cpl_err (cpl_err_class: CPLErr::Type) -> GcpVecError {
    let last_err_no = unsafe { gdal_sys::CPLGetLastErrorNo() };
    let last_err_msg = pc_char_to_string( unsafe { gdal_sys::CPLGetLastErrorMsg() });
    unsafe { gdal_sys::CPLErrorReset() };
    GcpVecError::GdalError( GdalError::CplError {
        class: cpl_err_class,
        number: last_err_no,
        msg: last_err_msg,
    })
}

