//! Input Actor: Dedicated thread for polling key presses.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture keys without blocking the session loop. It never touches
//! the calculator; it only forwards events.

use super::messages::{InputEvent, KeyCode, KeyModifiers};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal key events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the session loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("deskcalc-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, || Self::poll_event(poll_timeout));
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Wait up to `timeout` for one terminal event.
    fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Main input polling loop.
    ///
    /// A read error is reported once and ends the loop; the terminal is not
    /// polled again after it fails.
    fn run_loop<F>(sender: &Sender<InputEvent>, shutdown: &AtomicBool, mut next_event: F)
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                // The session may already be gone; never block on exit.
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            match next_event() {
                Ok(Some(event)) => {
                    if let Some(input_event) = Self::convert_event(event) {
                        if sender.send(input_event).is_err() {
                            // Receiver dropped, exit
                            break;
                        }
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                    break;
                }
            }
        }
    }

    /// Convert a crossterm event to our `InputEvent`.
    ///
    /// Only key presses matter; releases, repeats, mouse, focus and
    /// resize events are dropped.
    fn convert_event(event: Event) -> Option<InputEvent> {
        let Event::Key(key_event) = event else {
            return None;
        };
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        let code = Self::convert_key_code(key_event.code)?;
        let modifiers = Self::convert_modifiers(key_event.modifiers);
        Some(InputEvent::Key { code, modifiers })
    }

    /// Convert crossterm `KeyCode` to our `KeyCode`.
    const fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    /// Convert crossterm `KeyModifiers` to our `KeyModifiers`.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: event::KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: event::KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_convert_press() {
        let converted = InputActor::convert_event(key(event::KeyCode::Char('7'), KeyEventKind::Press));
        assert_eq!(converted, Some(InputEvent::key(KeyCode::Char('7'))));
    }

    #[test]
    fn test_release_and_repeat_dropped() {
        assert_eq!(
            InputActor::convert_event(key(event::KeyCode::Enter, KeyEventKind::Release)),
            None
        );
        assert_eq!(
            InputActor::convert_event(key(event::KeyCode::Enter, KeyEventKind::Repeat)),
            None
        );
    }

    #[test]
    fn test_unmapped_keys_dropped() {
        assert_eq!(
            InputActor::convert_event(key(event::KeyCode::Left, KeyEventKind::Press)),
            None
        );
        assert_eq!(InputActor::convert_event(Event::Resize(80, 24)), None);
        assert_eq!(InputActor::convert_event(Event::FocusGained), None);
    }

    #[test]
    fn test_convert_control() {
        let event = Event::Key(KeyEvent::new(
            event::KeyCode::Char('c'),
            event::KeyModifiers::CONTROL,
        ));
        assert_eq!(
            InputActor::convert_event(event),
            Some(InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
    }

    #[test]
    fn test_read_error_stops_loop() {
        let (tx, rx) = bounded(4);
        let (done_tx, done_rx) = bounded(1);
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = shutdown.clone();

        let handle = thread::spawn(move || {
            InputActor::run_loop(&tx, &flag, || Err(io::Error::other("tty gone")));
            let _ = done_tx.send(());
        });

        assert_eq!(rx.recv().unwrap(), InputEvent::Error("tty gone".to_string()));
        // The receiver is still alive; the loop must end on its own.
        done_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("input loop kept running after a read error");
        handle.join().unwrap();
        assert!(rx.try_recv().is_err());
        assert!(!shutdown.load(Ordering::Relaxed));
    }

    #[test]
    fn test_loop_forwards_keys_until_shutdown() {
        let (tx, rx) = bounded(4);
        let shutdown = AtomicBool::new(false);
        let mut events = vec![
            key(event::KeyCode::Char('1'), KeyEventKind::Press),
            Event::Resize(80, 24),
            key(event::KeyCode::Enter, KeyEventKind::Press),
        ]
        .into_iter();

        InputActor::run_loop(&tx, &shutdown, || {
            let next = events.next();
            if next.is_none() {
                shutdown.store(true, Ordering::Relaxed);
            }
            Ok(next)
        });

        assert_eq!(rx.try_recv().unwrap(), InputEvent::key(KeyCode::Char('1')));
        assert_eq!(rx.try_recv().unwrap(), InputEvent::key(KeyCode::Enter));
        assert_eq!(rx.try_recv().unwrap(), InputEvent::Shutdown);
        assert!(rx.try_recv().is_err());
    }
}
