// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

/// `std` mutex, not the tokio one: frames are painted from sync code, including from
/// inside the spinner's animation task.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Anything a frame can be painted to.
pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Lock an [`OutputDevice`] and get a `&mut dyn Write`. The lock is held until the end
/// of the enclosing block, so locking twice in one block deadlocks.
///
/// ```
/// use r3bl_prompt::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// }
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where frames are painted. Clones share the writer, so the spinner's animation task
/// and the caller can both hold one. Tests swap in a capture with
/// [`OutputDevice::new_mock()`](crate::OutputDevice::new_mock).
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// Locks the output device for writing. A poisoned lock is recovered, since the
    /// worst outcome is a partially painted frame, which the next paint overwrites.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        drop(mut_ref.flush());
    }
}
