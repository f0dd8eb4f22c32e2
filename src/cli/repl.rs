//! Interactive read-eval-print loop.

use super::session::Session;
use crate::config::Config;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Printed once when the loop starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Read commands from `reader` until `close`/`exit` or end of input,
/// writing prompts and replies to `writer`.
///
/// # Errors
///
/// Only I/O failures on `reader` or `writer`; command failures are
/// reported to the user and the loop continues.
pub async fn run<R, W>(
    session: &mut Session,
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input, closing session");
            writer.write_all(b"\nGoodbye!\n").await?;
            break;
        };

        let Some(reply) = session.handle_line(&line, config.today()) else {
            continue;
        };

        writer
            .write_all(format!("{}\n", reply.message()).as_bytes())
            .await?;

        if reply.is_exit() {
            break;
        }
    }

    writer.flush().await?;
    debug!(
        contacts = session.contacts().len(),
        birthdays = session.birthdays().len(),
        "Loop finished"
    );
    Ok(())
}
