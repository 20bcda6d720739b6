//! Layout components rendered by the terminal host.

use std::io::{self, Write};

use fsagent_shared::time::{format_clock, now_local};

use crate::{
    domain::{RawReply, SendError},
    infrastructure::dto::{FileSystemItemDto, FileType, ReplyResponseDto},
};

use super::router::HashHistory;

/// Components a route can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Main,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Main => "MainLayout",
        }
    }
}

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    User(String),
    Reply(RawReply),
    Error(SendError),
}

/// Conversation view: user messages, agent replies and failures in order.
#[derive(Debug, Default)]
pub struct MainLayout {
    transcript: Vec<EntryKind>,
}

impl MainLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[EntryKind] {
        &self.transcript
    }

    pub fn render_banner<W: Write>(&self, out: &mut W, history: &HashHistory) -> io::Result<()> {
        writeln!(out, "fsagent {} ({})", history.href("/"), Layout::Main.name())?;
        writeln!(out, "Type a message and press Enter. /quit to leave.")
    }

    pub fn push_user(&mut self, message: &str) {
        self.push(EntryKind::User(message.to_string()));
    }

    /// Render a reply and record it.
    pub fn show_reply<W: Write>(&mut self, out: &mut W, reply: RawReply) -> io::Result<()> {
        write!(out, "[{}] agent: ", format_clock(&now_local()))?;
        render_reply(out, &reply)?;
        self.push(EntryKind::Reply(reply));
        Ok(())
    }

    /// Render a failure and record it.
    pub fn show_error<W: Write>(&mut self, out: &mut W, error: SendError) -> io::Result<()> {
        write!(out, "[{}] ", format_clock(&now_local()))?;
        render_error(out, &error)?;
        self.push(EntryKind::Error(error));
        Ok(())
    }

    fn push(&mut self, kind: EntryKind) {
        self.transcript.push(kind);
    }
}

/// Render a reply body.
///
/// Bodies in the agent's reply format get the reply text and, when present,
/// the directory listing. Anything else is printed as received.
pub fn render_reply<W: Write>(out: &mut W, reply: &RawReply) -> io::Result<()> {
    match reply.json::<ReplyResponseDto>() {
        Ok(dto) => {
            writeln!(out, "{}", dto.reply)?;
            let listing = dto.listing();
            if !listing.is_empty() {
                render_listing(out, listing)?;
            }
            Ok(())
        }
        Err(_) => writeln!(out, "{}", reply.body),
    }
}

/// Render a directory listing as an aligned table.
pub fn render_listing<W: Write>(out: &mut W, items: &[FileSystemItemDto]) -> io::Result<()> {
    let name_width = items
        .iter()
        .map(|item| item.file_name.chars().count())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "  {:<name_width$}  {:<9}  {:>10}  TARGET", "NAME", "TYPE", "SIZE")?;
    for item in items {
        let line = format!(
            "  {:<name_width$}  {:<9}  {:>10}  {}",
            item.file_name,
            file_type_label(item.file_type),
            item.size,
            item.target.as_deref().unwrap_or(""),
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

pub fn render_error<W: Write>(out: &mut W, error: &SendError) -> io::Result<()> {
    writeln!(out, "error: {}", error)
}

fn file_type_label(file_type: FileType) -> &'static str {
    match file_type {
        FileType::File => "file",
        FileType::Directory => "directory",
        FileType::Link => "link",
    }
}
