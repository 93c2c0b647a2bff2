use anyhow::{bail, Context, Result};
use catalog::{
    ContentType, Exam, LevelPreference, RecordDetails, ResultKind, SearchFilters,
    DEFAULT_DURATION_MINUTES,
};
use clap::{Parser, Subcommand};
use classifier::{KeywordTables, LevelFallback, TextClassifier};
use colored::Colorize;
use server::{
    DisplayableResult, SearchConfig, SearchOrchestrator, SearchOutcome, DEFAULT_BASE_URL,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// TubeScout - find study videos that fit your time, level and exam
#[derive(Parser)]
#[command(name = "tube-scout")]
#[command(about = "Search, classify and rank YouTube study videos", long_about = None)]
struct Cli {
    /// What to do when no level keyword matches
    #[arg(long, global = true, default_value = "intermediate")]
    level_fallback: LevelFallback,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search YouTube and rank study material
    Search {
        /// Topic to search for
        #[arg(short, long)]
        query: String,

        /// Longest acceptable video, in minutes
        #[arg(long, default_value_t = DEFAULT_DURATION_MINUTES,
              value_parser = clap::value_parser!(u32).range(5..=60))]
        max_minutes: u32,

        /// Only show videos with captions
        #[arg(long)]
        captions: bool,

        /// any, beginner, intermediate or advanced
        #[arg(long, default_value = "any")]
        level: LevelPreference,

        /// Exam to prefer (repeatable): neet, jee, gate, iit-jam, cat
        #[arg(long = "exam")]
        exams: Vec<Exam>,

        /// Content type to prefer (repeatable), e.g. pyq, notes, crash-course
        #[arg(long = "content-type")]
        content_types: Vec<ContentType>,

        /// Include guidance and motivation videos
        #[arg(long)]
        show_guidance: bool,

        /// videos, playlists or both
        #[arg(long, default_value = "videos")]
        kind: ResultKind,

        /// Show the text each result was classified from
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// YouTube Data API key
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Catalog API base URL
        #[arg(long, env = "TUBE_SCOUT_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Per-request timeout in seconds
        #[arg(long, env = "TUBE_SCOUT_TIMEOUT_SECS", default_value = "15")]
        timeout_secs: u64,

        /// How long fetched results stay cached, in seconds
        #[arg(long, env = "TUBE_SCOUT_CACHE_TTL_SECS", default_value = "3600")]
        cache_ttl_secs: u64,

        /// Results requested per kind (at most 50)
        #[arg(long, default_value = "25")]
        max_results: u32,
    },

    /// Show how a piece of text would be classified
    Classify {
        /// Title and description text
        #[arg(long)]
        text: String,
    },

    /// List every keyword table
    Keywords,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            max_minutes,
            captions,
            level,
            exams,
            content_types,
            show_guidance,
            kind,
            explain,
            json,
            api_key,
            base_url,
            timeout_secs,
            cache_ttl_secs,
            max_results,
        } => {
            let config = SearchConfig::default()
                .with_api_key(api_key.unwrap_or_default())
                .with_base_url(base_url)
                .with_request_timeout(Duration::from_secs(timeout_secs))
                .with_cache_ttl(Duration::from_secs(cache_ttl_secs))
                .with_max_results(max_results)
                .with_level_fallback(cli.level_fallback);

            let mut filters = SearchFilters::new()
                .with_max_duration_minutes(max_minutes)
                .with_captions_required(captions)
                .with_level(level)
                .with_show_guidance(show_guidance)
                .with_result_kind(kind);
            for exam in exams {
                filters = filters.with_exam(exam);
            }
            for content_type in content_types {
                filters = filters.with_content_type(content_type);
            }

            handle_search(config, &query, &filters, explain, json).await?
        }
        Commands::Classify { text } => handle_classify(&text, cli.level_fallback),
        Commands::Keywords => handle_keywords(),
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    config: SearchConfig,
    query: &str,
    filters: &SearchFilters,
    explain: bool,
    json: bool,
) -> Result<()> {
    let orchestrator =
        SearchOrchestrator::from_config(config).context("Failed to set up the search client")?;

    let start = Instant::now();
    let outcome = match orchestrator.search(query, filters).await {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!("Search failed: {}", err);
            bail!("{}", err.user_message());
        }
    };
    debug!("Search completed in {:?}", start.elapsed());

    if json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize results")?;
        println!("{}", rendered);
    } else {
        print_outcome(&outcome, explain);
    }
    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(text: &str, fallback: LevelFallback) {
    let classifier = TextClassifier::new().with_level_fallback(fallback);
    let classification = classifier.classify(text);

    println!("{}", "Classification:".bold().blue());
    println!("{}Level: {}", "• ".green(), classification.level);
    println!("{}Exams: {}", "• ".green(), join_or_none(&classification.exams));
    println!("{}Content type: {}", "• ".green(), classification.content_type);

    println!("Content-type scores:");
    for (content_type, score) in classifier.content_type_scores(text) {
        println!("  - {}: {}", content_type, score);
    }
}

/// Handle the 'keywords' command
fn handle_keywords() {
    let tables = KeywordTables::default();

    println!("{}", "Level keywords:".bold().blue());
    print_keywords("Beginner", &tables.beginner);
    print_keywords("Advanced", &tables.advanced);
    print_keywords("Intermediate", &tables.intermediate);
    print_keywords("Theory", &tables.theory);
    print_keywords("Practical", &tables.practical);

    println!("{}", "Exam keywords:".bold().blue());
    for (exam, keywords) in &tables.exams {
        print_keywords(exam.as_str(), keywords);
    }

    println!("{}", "Content-type keywords:".bold().blue());
    for (content_type, keywords) in &tables.content_types {
        print_keywords(content_type.as_str(), keywords);
    }
}

fn print_keywords(label: &str, keywords: &[String]) {
    println!("  {} {}", format!("{}:", label).green(), keywords.join(", "));
}

fn join_or_none<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Helper function to format and print search results
fn print_outcome(outcome: &SearchOutcome, explain: bool) {
    if outcome.is_empty() {
        println!(
            "{} No matches for '{}'. Try relaxing your filters.",
            "!".yellow(),
            outcome.query
        );
        return;
    }

    println!(
        "{}",
        format!("Study results for '{}':", outcome.query).bold().blue()
    );
    for (index, result) in outcome.results.iter().enumerate() {
        print_result(index + 1, result, explain);
    }
}

fn print_result(rank: usize, result: &DisplayableResult, explain: bool) {
    let record = &result.record;

    println!(
        "{}. {} [{}]",
        rank.to_string().green(),
        record.title.bold(),
        result.kind
    );

    let details = match record.details {
        RecordDetails::Video {
            duration_minutes,
            has_captions,
            view_count,
        } => format!(
            "{} min | captions: {} | {} views",
            duration_minutes,
            if has_captions { "yes" } else { "no" },
            view_count
        ),
        RecordDetails::Playlist { item_count } => format!("{} videos", item_count),
    };
    println!("   {}", details);
    println!(
        "   Level: {} | Exams: {} | Type: {}",
        record.level,
        join_or_none(&record.exams),
        record.content_type
    );

    let published = if record.published_date.is_empty() {
        "unknown date"
    } else {
        record.published_date.as_str()
    };
    println!("   {} · {}", record.channel, published);
    println!("   {}", result.url.cyan());

    if explain {
        println!("   Matched text: {}", record.matched_text_excerpt.replace('\n', " | "));
    }
}
