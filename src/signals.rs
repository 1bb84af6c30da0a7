//! Signal handling for the `watch` loop.
//!
//! A background thread turns POSIX signals into [`SignalMessage`]s on a
//! channel. The loop blocks on that channel with a timeout, so a signal wakes
//! it immediately instead of at the next minute boundary.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR2},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc::{Receiver, Sender, channel},
    thread,
};

/// Unified signal message type for all signal-based communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalMessage {
    /// Re-read configuration and stored location (SIGHUP, SIGUSR2)
    Reload,
    /// Leave the loop (SIGINT, SIGTERM)
    Shutdown,
}

/// Signal handling state shared between threads
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running
    pub running: Arc<AtomicBool>,
    /// Channel receiver for unified signal messages
    pub signal_receiver: Receiver<SignalMessage>,
    /// Channel sender, kept so the loop can post messages to itself
    pub signal_sender: Sender<SignalMessage>,
}

/// Map a raw signal number to the message it stands for.
pub fn message_for_signal(signal: i32) -> Option<SignalMessage> {
    match signal {
        SIGINT | SIGTERM => Some(SignalMessage::Shutdown),
        SIGHUP | SIGUSR2 => Some(SignalMessage::Reload),
        _ => None,
    }
}

fn describe_signal(signal: i32, debug_enabled: bool) -> &'static str {
    match signal {
        SIGINT if debug_enabled => "Received SIGINT (Ctrl+C), shutting down...",
        SIGINT => "Received interrupt signal, shutting down...",
        SIGTERM => "Received termination request, shutting down...",
        SIGHUP => "Received hangup signal, reloading...",
        SIGUSR2 => "Received reload signal, reloading...",
        _ => "Received signal",
    }
}

/// Register the handlers and start the forwarding thread.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));
    let (signal_sender, signal_receiver) = channel::<SignalMessage>();

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP, SIGUSR2])
        .context("failed to register signal handlers")?;

    let running_clone = running.clone();
    let signal_sender_clone = signal_sender.clone();

    thread::spawn(move || {
        for sig in signals.forever() {
            let Some(message) = message_for_signal(sig) else {
                continue;
            };

            log_pipe!();
            log_info!("{}", describe_signal(sig, debug_enabled));

            if message == SignalMessage::Shutdown {
                running_clone.store(false, Ordering::SeqCst);
            }

            if signal_sender_clone.send(message).is_err() {
                // Receiver dropped: the loop has already exited
                break;
            }
        }
    });

    Ok(SignalState {
        running,
        signal_receiver,
        signal_sender,
    })
}
