//! The debounced live-tip loop.
//!
//! Each line read is taken as the current contents of the input box. Once
//! no new line has arrived for the configured delay, the tip for the latest
//! input is printed. Any line that arrives first restarts the wait.

use std::io::Write;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use errata_core::debounce::Debouncer;
use errata_core::suggest_for_input;
use errata_session::Session;
use errata_storage::KeyValueStore;

/// Run until `input` hits EOF. A tip still pending at EOF is shown after the
/// rest of its quiet period.
pub async fn run<S, R, W>(
    session: &mut Session<S>,
    delay: Duration,
    input: R,
    out: &mut W,
) -> eyre::Result<()>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut debouncer = Debouncer::new(delay);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                session.set_input(&line);
                debouncer.touch(now());
            }
            () = wait_for(debouncer.deadline()) => {
                fire(session, &mut debouncer, out)?;
            }
        }
    }

    if debouncer.is_pending() {
        wait_for(debouncer.deadline()).await;
        fire(session, &mut debouncer, out)?;
    }
    Ok(())
}

fn fire<S: KeyValueStore, W: Write>(
    session: &Session<S>,
    debouncer: &mut Debouncer,
    out: &mut W,
) -> eyre::Result<()> {
    if !debouncer.take_due(now()) {
        return Ok(());
    }
    if let Some(tip) = suggest_for_input(session.input()) {
        writeln!(out, "{tip}")?;
        out.flush()?;
    }
    Ok(())
}

// Tokio's clock, so paused test time drives the debouncer too.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
