use chrono::Utc;
use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use jobz::api::{CmdMessage, ConfigAction, FilterStats, JobCard, JobzApi, MessageLevel};
use jobz::config::JobzConfig;
use jobz::error::{JobzError, Result};
use jobz::model::{Job, JobDraft, JobId, Profile};
use jobz::store::fs::FileStore;
use jobz::validate::{validate_job, validate_profile};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, JobFieldArgs, ProfileAction, SkillAction};

fn main() {
    if let Err(e) = run() {
        match &e {
            JobzError::Validation(errors) => {
                eprintln!("{}", "Validation failed:".red());
                for err in errors {
                    eprintln!("  {}", err.to_string().red());
                }
            }
            _ => eprintln!("{}", format!("Error: {}", e).red()),
        }
        std::process::exit(1);
    }
}

struct AppContext {
    api: JobzApi<FileStore>,
    seed: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, tag }) => handle_list(&mut ctx, search, tag),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term), Vec::new()),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, id),
        Some(Commands::Favorites) => handle_favorites(&ctx),
        Some(Commands::Profile { action }) => handle_profile(&mut ctx, action),
        Some(Commands::Skill { action }) => handle_skill(&mut ctx, action),
        Some(Commands::Init { seed }) => handle_init(&mut ctx, seed),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "jobz", "jobz")
            .ok_or_else(|| JobzError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = JobzConfig::load(&data_dir).unwrap_or_default();
    let seed = config.seed_file().map(|p| p.to_path_buf());

    let store = FileStore::new(data_dir.clone());
    let api = JobzApi::open(store, data_dir, seed.as_deref())?;

    if api.data_unavailable() {
        eprintln!(
            "{}",
            "No job data loaded yet. Point `jobz init --seed <file>` at a listings file."
                .yellow()
        );
    }

    Ok(AppContext { api, seed })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, tags: Vec<String>) -> Result<()> {
    if let Some(text) = search {
        ctx.api.set_search(&text);
    }
    for tag in &tags {
        ctx.api.add_filter_tag(tag);
    }

    let result = ctx.api.list()?;
    print_cards(&result.listed_jobs);
    print_stats(result.stats);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: JobId) -> Result<()> {
    let result = ctx.api.view_job(id)?;
    for card in &result.listed_jobs {
        print_full_card(card);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: JobFieldArgs) -> Result<()> {
    let draft = new_draft(fields);
    let errors = validate_job(&draft);
    if !errors.is_empty() {
        return Err(JobzError::Validation(errors));
    }

    let result = ctx.api.create_job(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: JobId, fields: JobFieldArgs) -> Result<()> {
    let current = ctx
        .api
        .session()
        .find_job(id)
        .cloned()
        .ok_or(JobzError::JobNotFound(id))?;

    let draft = merged_draft(&current, fields);
    let errors = validate_job(&draft);
    if !errors.is_empty() {
        return Err(JobzError::Validation(errors));
    }

    let result = ctx.api.update_job(id, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: JobId) -> Result<()> {
    let result = ctx.api.delete_job(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: JobId) -> Result<()> {
    let (_, result) = ctx.api.toggle_favorite(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    print_cards(&result.listed_jobs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile(ctx: &mut AppContext, action: Option<ProfileAction>) -> Result<()> {
    match action {
        None => {
            let result = ctx.api.profile()?;
            if let Some(profile) = &result.profile {
                print_profile(profile);
            }
            print_messages(&result.messages);
        }
        Some(ProfileAction::Set {
            name,
            position,
            email,
        }) => {
            // Unset flags keep the saved values, form-prefill style.
            let current = ctx.api.session().profile.clone();
            let name = name.unwrap_or(current.name);
            let position = position.unwrap_or(current.position);
            let email = email.unwrap_or(current.email);

            let errors = validate_profile(&name, &position, &email);
            if !errors.is_empty() {
                return Err(JobzError::Validation(errors));
            }

            let result = ctx.api.save_profile(name, position, email)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_skill(ctx: &mut AppContext, action: SkillAction) -> Result<()> {
    let result = match action {
        SkillAction::Add { skill } => ctx.api.add_skill(&skill)?,
        SkillAction::Remove { skill } => ctx.api.remove_skill(&skill)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext, seed: Option<PathBuf>) -> Result<()> {
    let seed = seed.or_else(|| ctx.seed.clone());
    let result = ctx.api.init(seed.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("seed-file"), None) => ConfigAction::ShowKey("seed-file".to_string()),
        (Some("seed-file"), Some(v)) => ConfigAction::SetSeedFile(PathBuf::from(v)),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        let shown = config
            .seed_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unset)".to_string());
        println!("seed-file = {}", shown);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn new_draft(fields: JobFieldArgs) -> JobDraft {
    JobDraft {
        company: fields.company.unwrap_or_default(),
        position: fields.position.unwrap_or_default(),
        logo: fields.logo.filter(|l| !l.trim().is_empty()),
        contract: fields.contract.unwrap_or_default(),
        location: fields.location.unwrap_or_default(),
        role: fields.role.unwrap_or_default(),
        level: fields.level.unwrap_or_default(),
        skills: fields.skills.as_deref().map(parse_skills).unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        posted_at: fields
            .posted_at
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        is_new: true,
        is_featured: fields.featured.unwrap_or(false),
    }
}

fn merged_draft(current: &Job, fields: JobFieldArgs) -> JobDraft {
    let mut draft = JobDraft::from_job(current);
    if let Some(v) = fields.company {
        draft.company = v;
    }
    if let Some(v) = fields.position {
        draft.position = v;
    }
    if let Some(v) = fields.logo {
        draft.logo = if v.trim().is_empty() { None } else { Some(v) };
    }
    if let Some(v) = fields.contract {
        draft.contract = v;
    }
    if let Some(v) = fields.location {
        draft.location = v;
    }
    if let Some(v) = fields.role {
        draft.role = v;
    }
    if let Some(v) = fields.level {
        draft.level = v;
    }
    if let Some(v) = fields.skills {
        draft.skills = parse_skills(&v);
    }
    if let Some(v) = fields.description {
        draft.description = v;
    }
    if let Some(v) = fields.posted_at {
        draft.posted_at = v;
    }
    if let Some(v) = fields.featured {
        draft.is_featured = v;
    }
    draft
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

const MAX_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 60;

fn line_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
}

fn print_cards(cards: &[JobCard]) {
    if cards.is_empty() {
        println!("No postings match.");
        return;
    }
    let width = line_width();

    for card in cards {
        let job = &card.job;
        let star = if card.is_favorite { "★" } else { " " };
        let idx = format!("#{}. ", job.id);
        let title = format!("{} — {}", job.position, job.company);
        let mut badge_text = String::new();
        if job.is_new {
            badge_text.push_str(" NEW!");
        }
        if job.is_featured {
            badge_text.push_str(" FEATURED");
        }
        let meta = format!("{} · {} · {}", job.posted_at, job.contract, job.location);

        let fixed = 2 + idx.width() + badge_text.width() + 2 + meta.width();
        let available = width.saturating_sub(fixed);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{} {}{}{}{}  {}",
            star.yellow(),
            idx.normal(),
            title_display.bold(),
            badges(job),
            " ".repeat(padding),
            meta.dimmed()
        );
        println!("       {}", job.tags().join(" · ").dimmed());
    }
}

fn badges(job: &Job) -> String {
    let mut out = String::new();
    if job.is_new {
        out.push_str(&format!("{}", " NEW!".green().bold()));
    }
    if job.is_featured {
        out.push_str(&format!("{}", " FEATURED".purple().bold()));
    }
    out
}

fn print_full_card(card: &JobCard) {
    let job = &card.job;
    let star = if card.is_favorite { " ★" } else { "" };
    println!(
        "{} {}{}{}",
        format!("#{}", job.id).yellow(),
        job.position.bold(),
        badges(job),
        star.yellow()
    );
    println!("{}", format!("{} — {}", job.company, job.location).dimmed());
    println!("--------------------------------");
    println!("{} · {}", job.posted_at, job.contract);
    println!("Tags: {}", job.tags().join(", "));
    if let Some(logo) = &job.logo {
        println!("Logo: {}", logo);
    }
    if !job.description.is_empty() {
        println!("\n{}", job.description);
    }
}

fn print_stats(stats: Option<FilterStats>) {
    if let Some(stats) = stats {
        println!(
            "{}",
            format!("{} of {} postings match.", stats.match_count, stats.total_count).dimmed()
        );
    }
}

fn print_profile(profile: &Profile) {
    println!("{}     {}", "Name:".bold(), profile.name);
    println!("{} {}", "Position:".bold(), profile.position);
    println!("{}    {}", "Email:".bold(), profile.email);
    if profile.skills.is_empty() {
        println!("{}   {}", "Skills:".bold(), "(none)".dimmed());
    } else {
        println!("{}   {}", "Skills:".bold(), profile.skills.join(", "));
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
