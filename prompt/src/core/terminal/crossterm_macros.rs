// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is a macro to queue commands to the output device. It locks the output device
/// before queuing the commands, and unlocks it after. Errors are [`std::io::Error`]s,
/// propagated with `?`, so the enclosing function must return a `Result` whose error
/// implements `From<std::io::Error>`.
///
/// If you have complex interactions with the output device, use
/// [`queue_commands_no_lock!`] instead, and hold the lock for the span of operations
/// that you wish to perform; this avoids output generated in the wrong order.
#[macro_export]
macro_rules! queue_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(
                $crate::lock_output_device_as_mut!($output_device),
                $command
            )?;
        )*
    }}
}

/// This is similar to [`queue_commands!`], but it does not lock the output device.
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            )?;
        )*
    }}
}

/// This is a macro to execute commands to the output device immediately (queue, then
/// flush). It locks the output device before executing the commands, and unlocks it
/// after.
#[macro_export]
macro_rules! execute_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        {
            let writer = $crate::lock_output_device_as_mut!($output_device);
            $(
                ::crossterm::QueueableCommand::queue(
                    &mut *writer,
                    $command
                )?;
            )*
            ::std::io::Write::flush(writer)?;
        }
    }}
}
