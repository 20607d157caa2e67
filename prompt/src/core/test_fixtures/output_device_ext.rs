// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{OutputDevice, StdMutex, StdoutMock};
use std::sync::Arc;

pub trait OutputDeviceExt {
    /// An [`OutputDevice`] that writes into memory, and the [`StdoutMock`] to inspect
    /// what was written.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LockedOutputDevice, lock_output_device_as_mut};

    #[test]
    fn test_mock_output_device() {
        let (device, mock) = OutputDevice::new_mock();
        assert!(device.is_mock);
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        let _ = mut_ref.write_all(b"Hello, world!\n");
        assert_eq!(mock.get_copy_of_buffer_as_string(), "Hello, world!\n");
    }
}
