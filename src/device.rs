//! The backend device underlying a surface.

use crate::error::Result;
use crate::ffi::{self, CairoDevice, Counted, DeviceKind};
use crate::types::DeviceType;
use crate::Status;

/// A backend rendering device (`cairo_device_t`).
///
/// Cloning shares the underlying device through its reference count.
#[derive(Clone, Debug)]
pub struct Device {
    handle: Counted<DeviceKind>,
}

impl Device {
    pub(crate) unsafe fn from_raw_borrowed(raw: *mut CairoDevice) -> Self {
        Self {
            handle: Counted::from_raw_borrowed(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoDevice {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_device_status(self.as_ptr()) })
    }

    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_raw(unsafe { ffi::cairo_device_get_type(self.as_ptr()) })
    }

    /// Acquire the device for direct backend access. Pair with
    /// [`Device::release`].
    pub fn acquire(&mut self) -> Result<()> {
        let status = unsafe { ffi::cairo_device_acquire(self.as_ptr()) };
        Status::from_raw(status).to_result()
    }

    pub fn release(&mut self) {
        unsafe { ffi::cairo_device_release(self.as_ptr()) };
    }

    pub fn flush(&mut self) {
        unsafe { ffi::cairo_device_flush(self.as_ptr()) };
    }

    pub fn finish(&mut self) {
        unsafe { ffi::cairo_device_finish(self.as_ptr()) };
    }
}
