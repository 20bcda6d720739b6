//! Host loop that mounts the resolved layout in the terminal.

use std::{
    io::{self, Write},
    sync::Arc,
};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    domain::{MessageSender, RouterError},
    usecase::SendMessageUseCase,
};

use super::{
    config::ClientConfig,
    error::ClientError,
    layout::{Layout, MainLayout},
    router::{HashHistory, Router},
};

const PROMPT: &str = "> ";

/// Source of user input lines.
pub trait LineReader {
    /// Read one line. `None` means the user closed the input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError>;
}

/// `rustyline` backed reader with in-memory history.
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> Result<Self, ClientError> {
        let editor = DefaultEditor::new().map_err(|e| ClientError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError> {
        // readline blocks; requires the multi-threaded runtime
        match tokio::task::block_in_place(|| self.editor.readline(prompt)) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(ClientError::Readline(e.to_string())),
        }
    }
}

/// Resolve the start location and run the matching layout until the user quits.
pub async fn run(
    config: ClientConfig,
    router: Router<Layout>,
    sender: Arc<dyn MessageSender>,
) -> Result<(), ClientError> {
    let route = router
        .resolve_location(&config.location)
        .ok_or_else(|| RouterError::NoMatch(config.location.clone()))?;
    tracing::info!(
        route = %route.name,
        component = route.component.name(),
        server = %config.server_url,
        "Mounting layout"
    );

    match route.component {
        Layout::Main => {
            let usecase = SendMessageUseCase::new(sender);
            let mut layout = MainLayout::new();
            let mut reader = TerminalReader::new()?;
            let mut stdout = io::stdout();
            run_session(
                &mut layout,
                router.history(),
                &usecase,
                &mut reader,
                &mut stdout,
            )
            .await
        }
    }
}

/// Drive the main layout: read a line, send it, render the outcome.
///
/// Blank lines are skipped. `/quit`, `/exit` or closing the input ends the
/// session. Any other line is sent exactly as typed, surrounding whitespace
/// included. Send failures are rendered and the session continues.
pub async fn run_session<R: LineReader, W: Write>(
    layout: &mut MainLayout,
    history: &HashHistory,
    usecase: &SendMessageUseCase,
    reader: &mut R,
    out: &mut W,
) -> Result<(), ClientError> {
    layout.render_banner(out, history)?;
    out.flush()?;

    while let Some(line) = reader.read_line(PROMPT)? {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "/quit" | "/exit") {
            break;
        }

        layout.push_user(&line);
        match usecase.execute(&line).await {
            Ok(reply) => layout.show_reply(out, reply)?,
            Err(e) => layout.show_error(out, e)?,
        }
        out.flush()?;
    }

    tracing::info!("Session closed");
    Ok(())
}
