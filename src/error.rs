//! Error types for the cairo crate.

use std::ffi::CStr;
use std::fmt;

use thiserror::Error;

use crate::ffi;

/// Result type alias for cairo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cairo operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The library reported a non-success status.
    #[error("cairo: {0}")]
    Cairo(Status),

    /// A path or string argument contains an interior NUL byte and
    /// cannot be passed to C.
    #[error("argument contains an interior NUL byte")]
    NulByte(#[from] std::ffi::NulError),
}

impl Error {
    /// The underlying cairo status, if any.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Cairo(status) => Some(*status),
            Error::NulByte(_) => None,
        }
    }
}

/// Status of a cairo operation (`cairo_status_t`).
///
/// Most drawing operations do not report errors directly; instead the
/// object they were invoked on latches the first error, readable through
/// its `status()` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    Success = 0,
    NoMemory = 1,
    InvalidRestore = 2,
    InvalidPopGroup = 3,
    NoCurrentPoint = 4,
    InvalidMatrix = 5,
    InvalidStatus = 6,
    NullPointer = 7,
    InvalidString = 8,
    InvalidPathData = 9,
    ReadError = 10,
    WriteError = 11,
    SurfaceFinished = 12,
    SurfaceTypeMismatch = 13,
    PatternTypeMismatch = 14,
    InvalidContent = 15,
    InvalidFormat = 16,
    InvalidVisual = 17,
    FileNotFound = 18,
    InvalidDash = 19,
    InvalidDscComment = 20,
    InvalidIndex = 21,
    ClipNotRepresentable = 22,
    TempFileError = 23,
    InvalidStride = 24,
    FontTypeMismatch = 25,
    UserFontImmutable = 26,
    UserFontError = 27,
    NegativeCount = 28,
    InvalidClusters = 29,
    InvalidSlant = 30,
    InvalidWeight = 31,
    InvalidSize = 32,
    UserFontNotImplemented = 33,
    DeviceTypeMismatch = 34,
    DeviceError = 35,
    InvalidMeshConstruction = 36,
    DeviceFinished = 37,
    Jbig2GlobalMissing = 38,
    PngError = 39,
    FreetypeError = 40,
    Win32GdiError = 41,
    TagError = 42,
    LastStatus = 43,
}

impl Status {
    /// Convert from the raw C status code. Codes newer than this crate
    /// knows about collapse to [`Status::LastStatus`].
    pub(crate) fn from_raw(raw: ffi::CairoStatus) -> Self {
        match raw {
            0 => Status::Success,
            1 => Status::NoMemory,
            2 => Status::InvalidRestore,
            3 => Status::InvalidPopGroup,
            4 => Status::NoCurrentPoint,
            5 => Status::InvalidMatrix,
            6 => Status::InvalidStatus,
            7 => Status::NullPointer,
            8 => Status::InvalidString,
            9 => Status::InvalidPathData,
            10 => Status::ReadError,
            11 => Status::WriteError,
            12 => Status::SurfaceFinished,
            13 => Status::SurfaceTypeMismatch,
            14 => Status::PatternTypeMismatch,
            15 => Status::InvalidContent,
            16 => Status::InvalidFormat,
            17 => Status::InvalidVisual,
            18 => Status::FileNotFound,
            19 => Status::InvalidDash,
            20 => Status::InvalidDscComment,
            21 => Status::InvalidIndex,
            22 => Status::ClipNotRepresentable,
            23 => Status::TempFileError,
            24 => Status::InvalidStride,
            25 => Status::FontTypeMismatch,
            26 => Status::UserFontImmutable,
            27 => Status::UserFontError,
            28 => Status::NegativeCount,
            29 => Status::InvalidClusters,
            30 => Status::InvalidSlant,
            31 => Status::InvalidWeight,
            32 => Status::InvalidSize,
            33 => Status::UserFontNotImplemented,
            34 => Status::DeviceTypeMismatch,
            35 => Status::DeviceError,
            36 => Status::InvalidMeshConstruction,
            37 => Status::DeviceFinished,
            38 => Status::Jbig2GlobalMissing,
            39 => Status::PngError,
            40 => Status::FreetypeError,
            41 => Status::Win32GdiError,
            42 => Status::TagError,
            _ => Status::LastStatus,
        }
    }

    pub(crate) fn to_raw(self) -> ffi::CairoStatus {
        self as ffi::CairoStatus
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// The library's human-readable description of this status.
    pub fn describe(self) -> &'static str {
        unsafe {
            let ptr = ffi::cairo_status_to_string(self.to_raw());
            // cairo returns pointers to static strings here.
            CStr::from_ptr(ptr).to_str().unwrap_or("invalid status")
        }
    }

    /// Turn a status into a `Result`, mapping non-success to
    /// [`Error::Cairo`].
    pub fn to_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Cairo(self))
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_raw() {
        for status in [
            Status::Success,
            Status::NoMemory,
            Status::InvalidIndex,
            Status::PngError,
            Status::TagError,
        ] {
            assert_eq!(Status::from_raw(status.to_raw()), status);
        }
    }

    #[test]
    fn unknown_raw_status_collapses() {
        assert_eq!(Status::from_raw(9999), Status::LastStatus);
    }

    #[test]
    fn success_is_ok() {
        assert!(Status::Success.to_result().is_ok());
        assert_eq!(
            Status::NoMemory.to_result(),
            Err(Error::Cairo(Status::NoMemory))
        );
    }
}
