//! Session: Main loop that owns the calculator.
//!
//! The session is the only owner of the [`Engine`]. Input arrives as
//! messages from the input actor and each one is handled to completion,
//! output flushed, before the next is received.

use super::messages::{Command, InputEvent, KeyCode, KeyModifiers};
use crate::decimal::to_display_string;
use crate::engine::{Engine, Operator};
use crate::error::{CalcError, SessionError};
use crate::terminal::{OutputBuffer, NEWLINE};
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for a calculator session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key that ends the session (Tab, Esc and Ctrl-C always do).
    pub quit_key: char,
    /// Whether accepted keys are echoed back.
    pub echo: bool,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Capacity of the input event channel.
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quit_key: 'q',
            echo: true,
            input_poll_timeout: Duration::from_millis(10),
            channel_capacity: 64,
        }
    }
}

/// Whether the session keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next event.
    Continue,
    /// End the session.
    Quit,
}

/// An interactive calculator session writing to `W`.
pub struct Session<W: Write> {
    /// The calculator.
    engine: Engine,
    /// Configuration.
    config: SessionConfig,
    /// Output accumulated for the current event.
    output: OutputBuffer,
    /// Where output goes.
    writer: W,
}

impl<W: Write> Session<W> {
    /// Create a session with a fresh engine.
    pub fn new(writer: W, config: SessionConfig) -> Self {
        Self {
            engine: Engine::new(),
            config,
            output: OutputBuffer::new(),
            writer,
        }
    }

    /// The calculator state.
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The output sink.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Print the startup line.
    pub fn banner(&mut self, boot_time: Duration) -> io::Result<()> {
        write!(
            self.writer,
            "Calculator is running. Press {} to exit.(boot in {} msec.){NEWLINE}",
            self.config.quit_key,
            boot_time.as_millis()
        )?;
        self.writer.flush()
    }

    /// Run until a quit key, input shutdown or a fatal input error.
    pub fn run(&mut self, input: &Receiver<InputEvent>) -> Result<(), SessionError> {
        loop {
            let event = input.recv().map_err(|_| SessionError::Disconnected)?;
            if self.handle_event(event)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Handle one event from the input actor.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Flow, SessionError> {
        match event {
            InputEvent::Key { code, modifiers } => Ok(self.handle_key(code, modifiers)?),
            InputEvent::Error(message) => {
                warn!(%message, "input thread failed");
                Err(SessionError::Input(message))
            }
            InputEvent::Shutdown => Ok(Flow::Quit),
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<Flow> {
        let command = Command::from_key(code, modifiers, &self.config);
        self.execute(command)
    }

    /// Apply a command to the engine and flush whatever it printed.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        self.output.clear();

        match command {
            Command::Quit => {
                debug!("quit");
                self.output.newline();
                self.output.flush_to(&mut self.writer)?;
                return Ok(Flow::Quit);
            }
            Command::Input(c) => self.input(c),
            Command::Minus if self.engine.accepts_sign() => self.input('-'),
            Command::Minus => self.press(Operator::Subtract),
            Command::Press(op) => self.press(op),
            Command::Evaluate => self.evaluate(),
            Command::Clear => {
                debug!("clear");
                self.engine.clear();
                self.output.newline();
            }
        }

        self.output.flush_to(&mut self.writer)?;
        Ok(Flow::Continue)
    }

    fn input(&mut self, c: char) {
        if self.engine.push_digit_or_point(c) {
            self.echo(c);
        }
    }

    fn press(&mut self, op: Operator) {
        match self.engine.press(op) {
            Ok(()) => {
                debug!(%op, "operator");
                self.echo(op.symbol());
            }
            Err(e) => self.report(e),
        }
    }

    fn evaluate(&mut self) {
        match self.engine.evaluate() {
            Ok(result) => {
                debug!(%result, "evaluate");
                let shown = to_display_string(&self.engine.current_value());
                self.output.result_line(&shown);
            }
            Err(e) => self.report(e),
        }
    }

    fn echo(&mut self, c: char) {
        if self.config.echo {
            self.output.write_char(c);
        }
    }

    fn report(&mut self, error: CalcError) {
        debug!(%error, "calculation rejected");
        self.output.error_line(&error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use crossbeam_channel::bounded;
    use std::str::FromStr;

    fn session() -> Session<Vec<u8>> {
        Session::new(Vec::new(), SessionConfig::default())
    }

    fn keys(session: &mut Session<Vec<u8>>, input: &str) {
        for c in input.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\x08' => KeyCode::Backspace,
                c => KeyCode::Char(c),
            };
            session.handle_key(code, KeyModifiers::NONE).unwrap();
        }
    }

    fn printed(session: &Session<Vec<u8>>) -> String {
        String::from_utf8(session.writer().clone()).unwrap()
    }

    #[test]
    fn test_echo_and_result() {
        let mut s = session();
        keys(&mut s, "1+2=");
        assert_eq!(printed(&s), "1+2\r\n=3\r\n");
    }

    #[test]
    fn test_enter_evaluates() {
        let mut s = session();
        keys(&mut s, "24*12\n");
        assert_eq!(printed(&s), "24*12\r\n=288\r\n");
    }

    #[test]
    fn test_display_strips_trailing_zeros() {
        let mut s = session();
        keys(&mut s, "1.50*2=");
        assert_eq!(printed(&s), "1.50*2\r\n=3\r\n");
        assert_eq!(s.engine().buffer(), "3.00");
    }

    #[test]
    fn test_rejected_chars_not_echoed() {
        let mut s = session();
        keys(&mut s, "1.2.3x");
        assert_eq!(printed(&s), "1.23");
    }

    #[test]
    fn test_minus_is_sign_then_operator() {
        let mut s = session();
        keys(&mut s, "-5-3=");
        assert_eq!(printed(&s), "-5-3\r\n=-8\r\n");
    }

    #[test]
    fn test_minus_after_operator_is_sign() {
        let mut s = session();
        keys(&mut s, "2*-3=");
        assert_eq!(
            s.engine().current_value(),
            BigDecimal::from_str("-6").unwrap()
        );
    }

    #[test]
    fn test_minus_after_result_subtracts() {
        let mut s = session();
        keys(&mut s, "1+2=-1=");
        assert_eq!(s.engine().current_value(), BigDecimal::from(2));
    }

    #[test]
    fn test_division_error_reported_and_recoverable() {
        let mut s = session();
        keys(&mut s, "1/0=");
        assert_eq!(printed(&s), "1/0\r\nERROR: Division failed: division by zero\r\n");

        keys(&mut s, "\x081/5=");
        assert!(printed(&s).ends_with("\r\n1/5\r\n=0.2\r\n"));
    }

    #[test]
    fn test_one_third() {
        let mut s = session();
        keys(&mut s, "1/3=");
        assert!(printed(&s).ends_with("=0.3333333333333333333333333333333333\r\n"));
    }

    #[test]
    fn test_no_echo() {
        let config = SessionConfig {
            echo: false,
            ..SessionConfig::default()
        };
        let mut s = Session::new(Vec::new(), config);
        keys(&mut s, "7*6=");
        assert_eq!(printed(&s), "\r\n=42\r\n");
    }

    #[test]
    fn test_quit_key() {
        let mut s = session();
        assert_eq!(s.handle_key(KeyCode::Char('1'), KeyModifiers::NONE).unwrap(), Flow::Continue);
        assert_eq!(s.handle_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_banner() {
        let mut s = session();
        s.banner(Duration::from_millis(12)).unwrap();
        assert_eq!(
            printed(&s),
            "Calculator is running. Press q to exit.(boot in 12 msec.)\r\n"
        );
    }

    #[test]
    fn test_run_until_quit() {
        let (tx, rx) = bounded(16);
        for c in "6/4=".chars() {
            tx.send(InputEvent::key(KeyCode::Char(c))).unwrap();
        }
        tx.send(InputEvent::key(KeyCode::Tab)).unwrap();
        tx.send(InputEvent::key(KeyCode::Char('9'))).unwrap();

        let mut s = session();
        s.run(&rx).unwrap();
        assert_eq!(printed(&s), "6/4\r\n=1.5\r\n\r\n");
        assert_eq!(s.engine().buffer(), "1.5");
    }

    #[test]
    fn test_run_stops_on_shutdown() {
        let (tx, rx) = bounded(4);
        tx.send(InputEvent::Shutdown).unwrap();
        let mut s = session();
        assert!(s.run(&rx).is_ok());
    }

    #[test]
    fn test_run_reports_input_error() {
        let (tx, rx) = bounded(4);
        tx.send(InputEvent::Error("read failed".to_string())).unwrap();
        let mut s = session();
        assert!(matches!(s.run(&rx), Err(SessionError::Input(_))));
    }

    #[test]
    fn test_run_reports_disconnect() {
        let (tx, rx) = bounded::<InputEvent>(4);
        drop(tx);
        let mut s = session();
        assert!(matches!(s.run(&rx), Err(SessionError::Disconnected)));
    }
}
