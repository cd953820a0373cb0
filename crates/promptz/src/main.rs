//! # Promptz CLI
//!
//! The binary is intentionally thin: it parses arguments, wires up the data
//! directory, dispatches to the `promptzapp` API facade, and renders the
//! structured results it gets back. All business logic lives in the library.
//!
//! The data directory defaults to the OS-appropriate location and can be
//! overridden with `PROMPTZ_DIR` (which is also how the end-to-end tests
//! isolate themselves).

use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use promptzapp::api::{CmdMessage, MessageLevel, PromptzApi};
use promptzapp::config::PromptzConfig;
use promptzapp::error::{PromptzError, Result};
use promptzapp::filter::PromptFilter;
use promptzapp::model::{Prompt, PromptInput};
use promptzapp::store::fs::FileStore;
use std::collections::HashSet;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PromptzApi<FileStore>,
    config: PromptzConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List {
            search,
            kinds,
            categories,
        }) => handle_list(&ctx, search, kinds, categories),
        Some(Commands::Create {
            title,
            content,
            kind,
            category,
            tags,
        }) => handle_create(&mut ctx, title, content, kind, category, tags),
        Some(Commands::Show { positions }) => handle_show(&ctx, positions),
        Some(Commands::Edit {
            position,
            title,
            kind,
            category,
            tags,
            content,
        }) => handle_edit(&mut ctx, position, title, kind, category, tags, content),
        Some(Commands::Pin { positions }) => handle_pin(&mut ctx, positions),
        Some(Commands::Delete { positions }) => handle_delete(&mut ctx, positions),
        Some(Commands::Remove { kind, category }) => handle_remove(&mut ctx, kind, category),
        Some(Commands::Clear { force }) => handle_clear(&mut ctx, force),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { out }) => handle_export(&ctx, out),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Types) => handle_types(&ctx),
        Some(Commands::Categories { kinds }) => handle_categories(&ctx, kinds),
        None => handle_list(&ctx, None, Vec::new(), Vec::new()),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("PROMPTZ_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "promptz", "promptz")
            .ok_or_else(|| PromptzError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = PromptzConfig::load(&data_dir).unwrap_or_default();
    let api = PromptzApi::new(FileStore::open(data_dir));
    Ok(AppContext { api, config })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    kinds: Vec<String>,
    categories: Vec<String>,
) -> Result<()> {
    let filter = PromptFilter {
        kinds: kinds.into_iter().collect(),
        categories: categories.into_iter().collect(),
        search,
    };
    let result = ctx.api.list(&filter)?;
    print_prompts(&result.listed_prompts, ctx.config.preview_length);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: String,
    kind: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let input = PromptInput {
        title,
        kind: kind.unwrap_or_default(),
        category: category.unwrap_or_default(),
        tags,
        content,
    };
    let result = ctx.api.create(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.view(&positions)?;
    print_full_prompts(&result.listed_prompts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: usize,
    title: Option<String>,
    kind: Option<String>,
    category: Option<String>,
    tags: Option<Vec<String>>,
    content: Option<String>,
) -> Result<()> {
    let current = ctx.api.prompt_at(position)?;
    let input = PromptInput {
        title: title.unwrap_or(current.title),
        kind: kind.unwrap_or(current.kind.unwrap_or_default()),
        category: category.unwrap_or(current.category.unwrap_or_default()),
        tags: tags.unwrap_or(current.tags),
        content: content.unwrap_or(current.content),
    };
    let result = ctx.api.update(position, input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pin(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.pin(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(
    ctx: &mut AppContext,
    kind: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .remove_matching(kind.as_deref(), category.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, force: bool) -> Result<()> {
    if !force {
        return Err(PromptzError::Api(
            "Clearing removes every prompt and cannot be undone; pass --force to proceed"
                .to_string(),
        ));
    }
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_file(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export(&out_dir, &ctx.config.export_prefix)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = result.stats {
        println!("{} prompts, {} categories", stats.prompts, stats.categories);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_types(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.kinds()?;
    print_facets(&result.facets, "No types yet.");
    Ok(())
}

fn handle_categories(ctx: &AppContext, kinds: Vec<String>) -> Result<()> {
    let selected: HashSet<String> = kinds.into_iter().collect();
    let result = ctx.api.categories(&selected)?;
    print_facets(&result.facets, "No categories yet.");
    Ok(())
}

fn print_facets(facets: &[String], empty_note: &str) {
    if facets.is_empty() {
        println!("{}", empty_note.dimmed());
        return;
    }
    for facet in facets {
        println!("{}", facet);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_prompts(prompts: &[Prompt]) {
    for (i, prompt) in prompts.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{}", prompt.title.bold());
        let mut meta: Vec<String> = Vec::new();
        if let Some(kind) = &prompt.kind {
            meta.push(kind.clone());
        }
        if let Some(category) = &prompt.category {
            meta.push(category.clone());
        }
        for tag in &prompt.tags {
            meta.push(format!("#{}", tag));
        }
        if !meta.is_empty() {
            println!("{}", meta.join("  ").dimmed());
        }
        println!("--------------------------------");
        println!("{}", prompt.content);
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PIN_MARKER: &str = "⚲";

fn print_prompts(prompts: &[Prompt], preview_length: usize) {
    if prompts.is_empty() {
        println!("No prompts found.");
        return;
    }

    let mut last_was_pinned = false;
    for (i, prompt) in prompts.iter().enumerate() {
        let is_pinned = prompt.is_pinned();

        if last_was_pinned && !is_pinned {
            println!();
        }
        last_was_pinned = is_pinned;

        let idx_str = format!("{}. ", i + 1);
        let left_prefix = if is_pinned {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };

        let preview: String = prompt
            .content
            .chars()
            .take(preview_length)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            prompt.title.clone()
        } else {
            format!("{} {}", prompt.title, preview)
        };

        let fixed_width = left_prefix.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = if is_pinned {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };
        let time_colored = format_time_ago(prompt.created_at()).dimmed();

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_colored,
            title_display,
            " ".repeat(padding),
            time_colored
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
