//! Line-driven event loop: each stdin line is one edit event, and the
//! grades are recomputed and echoed after every event. Input is read on its
//! own thread so a pending autosave fires even while the user is idle.

use crate::error::Result;
use crate::report::md::summary_line;
use crate::session::{parse_assignment, Session};
use crate::store::autosave::Autosave;
use crate::store::persistence::Persistence;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

enum Event {
    Edit(String, String),
    Show,
    Reset,
    Quit,
}

fn parse_event(line: &str) -> Option<Result<Event>> {
    match line.trim() {
        "" => None,
        "show" => Some(Ok(Event::Show)),
        "reset" => Some(Ok(Event::Reset)),
        "quit" | "exit" => Some(Ok(Event::Quit)),
        other => Some(parse_assignment(other).map(|(id, raw)| Event::Edit(id, raw))),
    }
}

fn spawn_reader<R>(input: R) -> Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in input.lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Waits for the next line, saving inputs whenever the autosave delay runs
/// out first. `None` means the input is exhausted.
fn next_line(
    lines: &Receiver<io::Result<String>>,
    session: &Session,
    persistence: &mut Persistence,
    autosave: &mut Autosave,
) -> Option<io::Result<String>> {
    loop {
        let received = match autosave.remaining(Instant::now()) {
            Some(wait) => lines.recv_timeout(wait),
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(line) => return Some(line),
            Err(RecvTimeoutError::Timeout) => {
                if autosave.take_due(Instant::now()) {
                    persistence.save_inputs(session.inputs());
                }
            }
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
}

pub fn run_session<R, W>(
    input: R,
    out: &mut W,
    session: &mut Session,
    persistence: &mut Persistence,
    autosave: &mut Autosave,
) -> Result<()>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    writeln!(out, "{}", summary_line(session.computation()))?;
    out.flush()?;

    let lines = spawn_reader(input);
    while let Some(line) = next_line(&lines, session, persistence, autosave) {
        let line = line?;
        let now = Instant::now();
        if autosave.take_due(now) {
            persistence.save_inputs(session.inputs());
        }

        let event = match parse_event(&line) {
            None => continue,
            Some(Ok(event)) => event,
            Some(Err(error)) => {
                writeln!(out, "error: {error}")?;
                continue;
            }
        };

        match event {
            Event::Quit => break,
            Event::Show => {}
            Event::Reset => {
                autosave.cancel();
                session.reset();
                persistence.clear_inputs();
            }
            Event::Edit(id, raw) => {
                if let Err(error) = session.apply_edit(&id, &raw) {
                    writeln!(out, "error: {error}")?;
                    continue;
                }
                autosave.touch(now);
            }
        }
        writeln!(out, "{}", summary_line(session.computation()))?;
        out.flush()?;
    }

    if autosave.take_pending() {
        persistence.save_inputs(session.inputs());
    }
    out.flush()?;
    Ok(())
}
