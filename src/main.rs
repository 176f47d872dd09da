use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use snippet_editor::cli::{CliArgs, Command, EditArgs};
use snippet_editor::commands::Cmd;
use snippet_editor::config::EditorConfig;
use snippet_editor::io::{write_snippet, FileError, FileManager};
use snippet_editor::messages::{Msg, SessionMsg, SnippetMsg};
use snippet_editor::model::{Language, SnippetSession};
use snippet_editor::recent_files::RecentFiles;
use snippet_editor::update::update;
use snippet_editor::util::is_snippet_file;

/// Message shown for code with an unterminated placeholder
const INVALID_CODE_MESSAGE: &str =
    "Ensure all opening delimiters have a matching closing delimiter";

/// One CLI invocation: the session being edited and the file it belongs to
struct App {
    session: SnippetSession,
    files: FileManager,
    config: EditorConfig,
}

impl App {
    fn new(config: EditorConfig) -> Self {
        Self {
            session: SnippetSession::default(),
            files: FileManager::new(config.snippet_dir()),
            config,
        }
    }

    /// Open `path` into the session
    fn open(&mut self, path: &Path) -> Result<()> {
        if !is_snippet_file(path) {
            tracing::warn!("{} does not have a .snippet extension", path.display());
        }
        let snippet = match self.files.open(path) {
            Ok(snippet) => snippet,
            Err(e) => {
                if matches!(e, FileError::Open { .. } | FileError::Parse { .. }) {
                    forget(path);
                }
                return Err(e.into());
            }
        };
        self.dispatch(SessionMsg::Replace(Box::new(snippet)).into())?;
        remember(path, &self.session.snippet().title);
        Ok(())
    }

    /// Run one message and perform the side effect it requests
    fn dispatch(&mut self, msg: Msg) -> Result<Option<PathBuf>> {
        match update(&mut self.session, msg) {
            Some(Cmd::SaveFile { path, content }) => {
                let path = path.unwrap_or_else(|| self.files.save_path(self.session.snippet()));
                let written = self.files.write_text(&path, &content)?;
                update(&mut self.session, SessionMsg::MarkClean.into());
                remember(&written, &self.session.snippet().title);
                Ok(Some(written))
            }
            Some(Cmd::Redraw) | None => Ok(None),
        }
    }

    fn save(&mut self, path: Option<PathBuf>) -> Result<PathBuf> {
        self.dispatch(SessionMsg::Save { path }.into())?
            .context("snippet could not be serialized")
    }
}

fn remember(path: &Path, title: &str) {
    let mut recent = RecentFiles::load();
    recent.add(path.to_path_buf(), title);
    if let Err(e) = recent.save() {
        tracing::warn!("Failed to save recent files: {}", e);
    }
}

/// Drop a file that can no longer be opened from the recent list
fn forget(path: &Path) {
    let mut recent = RecentFiles::load();
    let before = recent.entries.len();
    recent.remove(path);
    if recent.entries.len() != before {
        if let Err(e) = recent.save() {
            tracing::warn!("Failed to save recent files: {}", e);
        }
    }
}

fn main() -> ExitCode {
    snippet_editor::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();

    match run(args.command, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: EditorConfig) -> Result<ExitCode> {
    let mut app = App::new(config);

    match command {
        Command::New {
            output,
            title,
            language,
        } => {
            if let Some(author) = app.config.default_author.clone() {
                app.dispatch(SnippetMsg::SetAuthor(author).into())?;
            }
            if let Some(language) = language.or_else(|| app.config.language()) {
                app.dispatch(SnippetMsg::SetLanguage(Some(language)).into())?;
            }
            if let Some(title) = title {
                app.dispatch(SnippetMsg::SetTitle(title).into())?;
            }

            let path = app.save(output)?;
            println!("{}", path.display());
        }

        Command::Preview { file } => {
            app.open(&file)?;
            if !app.session.is_valid_code() {
                eprintln!("warning: {}", INVALID_CODE_MESSAGE);
            }
            let preview = app
                .session
                .preview()
                .with_context(|| format!("cannot preview {}", file.display()))?;
            println!("{}", preview);
        }

        Command::Check { file } => {
            app.open(&file)?;
            let problems = check(&app.session);
            if problems.is_empty() {
                println!("{}: ok", file.display());
            } else {
                for problem in &problems {
                    println!("{}: {}", file.display(), problem);
                }
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Format { file, write } => {
            app.open(&file)?;
            if write {
                app.save(Some(file))?;
            } else {
                let xml = write_snippet(app.session.snippet())
                    .with_context(|| format!("cannot format {}", file.display()))?;
                println!("{}", xml);
            }
        }

        Command::Show { file } => {
            app.open(&file)?;
            print!("{}", describe(&app.session));
        }

        Command::Edit(args) => {
            app.open(&args.file)?;
            edit(&mut app, &args)?;
        }

        Command::Recent => {
            let recent = RecentFiles::load();
            if recent.entries.is_empty() {
                println!("No recent snippet files");
            }
            for entry in &recent.entries {
                println!(
                    "{:<30} {:<12} {}",
                    entry.display_name(),
                    entry.time_ago(),
                    entry.path.display()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn edit(app: &mut App, args: &EditArgs) -> Result<()> {
    let code = match &args.code_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read code from {}", path.display()))?,
        ),
        None => None,
    };

    let changes = args
        .apply(&mut app.session, code)
        .map_err(anyhow::Error::msg)?;

    if changes == 0 && args.output.is_none() {
        println!("{}: unchanged", args.file.display());
        return Ok(());
    }

    let path = app.save(args.output.clone())?;
    println!("{}: {} change(s) saved", path.display(), changes);
    Ok(())
}

/// Problems a user would want fixed before using the snippet
fn check(session: &SnippetSession) -> Vec<String> {
    let snippet = session.snippet();
    let mut problems = Vec::new();

    if !session.is_valid_code() {
        problems.push(INVALID_CODE_MESSAGE.to_string());
    }
    if snippet.title.trim().is_empty() {
        problems.push("Title is empty".to_string());
    }
    if !snippet.is_valid_shortcut() {
        problems.push(format!(
            "Shortcut '{}' does not match {}",
            snippet.shortcut,
            Language::shortcut_pattern(snippet.language)
        ));
    }
    if let Err(e) = session.preview() {
        problems.push(e.to_string());
    }

    problems
}

fn describe(session: &SnippetSession) -> String {
    let snippet = session.snippet();
    let mut out = String::new();

    let language = snippet
        .language
        .map(|l| l.description().to_string())
        .unwrap_or_default();
    let types: Vec<_> = snippet.types.iter().map(|t| t.description()).collect();

    let fields = [
        ("Title", snippet.title.as_str()),
        ("Shortcut", snippet.shortcut.as_str()),
        ("Description", snippet.description.as_str()),
        ("Author", snippet.author.as_str()),
        ("Help URL", snippet.help_url.as_str()),
        ("Format", snippet.format.as_str()),
        ("Language", language.as_str()),
        ("Kind", snippet.kind.description()),
    ];
    for (label, value) in fields {
        out.push_str(&format!("{:<12} {}\n", label, value));
    }
    out.push_str(&format!("{:<12} {}\n", "Types", types.join(", ")));
    out.push_str(&format!("{:<12} {}\n", "Delimiter", snippet.effective_delimiter()));

    if !snippet.namespaces.is_empty() {
        out.push_str(&format!("{:<12} {}\n", "Imports", snippet.namespaces.join(", ")));
    }

    if !snippet.placeholders.is_empty() {
        out.push_str("\nPlaceholders:\n");
        for p in &snippet.placeholders {
            out.push_str(&format!(
                "  {:<16} default={:<16} editable={:<5} tooltip={}\n",
                p.name, p.default_value, p.is_editable, p.tooltip
            ));
        }
    }

    out
}
