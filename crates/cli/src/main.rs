use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{MovieRecord, RawDataset, Studio, parser};
use pipeline::{SeedTables, score_dataset};
use std::path::PathBuf;
use std::time::Instant;

/// BracketSeeder - tournament seeds from scraped movie metadata
#[derive(Parser)]
#[command(name = "bracket-seeder")]
#[command(about = "Score Disney and Pixar films into tournament bracket seeds", long_about = None)]
struct Cli {
    /// Path to the raw dataset directory
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the scored CSVs
    Score {
        /// Directory the scored CSVs are written to
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },

    /// Print a ranked seeding table
    Rank {
        /// Restrict the table to one studio
        #[arg(long)]
        studio: Option<StudioArg>,

        /// Number of titles to show
        #[arg(long, default_value = "40")]
        limit: usize,

        /// Show the bottom of the ranking instead of the top
        #[arg(long)]
        bottom: bool,
    },

    /// Show one title's merged record in detail
    Movie {
        /// Exact title to look up (in the combined table)
        #[arg(long)]
        title: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StudioArg {
    Disney,
    Pixar,
}

impl From<StudioArg> for Studio {
    fn from(arg: StudioArg) -> Self {
        match arg {
            StudioArg::Disney => Studio::Disney,
            StudioArg::Pixar => Studio::Pixar,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading raw dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let dataset = RawDataset::load_from_dir(&cli.data_dir)
        .context("Failed to load the raw dataset")?;
    let tables = score_dataset(&dataset).context("Failed to score the dataset")?;
    println!(
        "{} Scored {} titles in {:?}",
        "✓".green(),
        tables.total.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Score { out_dir } => handle_score(&tables, &out_dir)?,
        Commands::Rank {
            studio,
            limit,
            bottom,
        } => handle_rank(&tables, studio.map(Studio::from), limit, bottom),
        Commands::Movie { title } => handle_movie(&tables, &title)?,
    }

    Ok(())
}

/// Handle the 'score' command
fn handle_score(tables: &SeedTables, out_dir: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for (name, cohort) in [
        ("pixar.csv", &tables.pixar),
        ("disney.csv", &tables.disney),
        ("total.csv", &tables.total),
    ] {
        let path = out_dir.join(name);
        parser::write_movie_csv(&path, cohort)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{} {} ({} rows)",
            "•".green(),
            path.display(),
            cohort.len()
        );
    }
    Ok(())
}

/// Handle the 'rank' command
fn handle_rank(tables: &SeedTables, studio: Option<Studio>, limit: usize, bottom: bool) {
    let mut ranked: Vec<&MovieRecord> = tables.cohort(studio).iter().collect();
    ranked.sort_by(|a, b| {
        b.seed_score
            .partial_cmp(&a.seed_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let label = match studio {
        Some(studio) => studio.to_string(),
        None => "Disney vs Pixar".to_string(),
    };
    let which = if bottom { "bottom" } else { "top" };
    println!(
        "{}",
        format!("Seeding table ({label}, {which} {limit}):").bold().blue()
    );

    let start = if bottom {
        ranked.len().saturating_sub(limit)
    } else {
        0
    };
    for (index, record) in ranked.iter().enumerate().skip(start).take(limit) {
        println!(
            "{:>3}. {} ({}) [{}] - Seed: {:.2}",
            (index + 1).to_string().green(),
            record.title,
            record.year,
            record.studio,
            record.seed_score.unwrap_or(0.0)
        );
    }
}

/// Handle the 'movie' command
fn handle_movie(tables: &SeedTables, title: &str) -> Result<()> {
    let record = tables
        .total
        .iter()
        .find(|record| record.title == title)
        .ok_or_else(|| anyhow!("Title '{}' not found in the merged table", title))?;

    println!("{}", format!("{} ({})", record.title, record.year).bold().blue());
    println!("{}Studio: {}", "• ".green(), record.studio);
    println!(
        "{}IMDB: rating {}, votes {}",
        "• ".green(),
        fmt_opt(record.i_audience_rating),
        fmt_opt(record.i_audience_votes)
    );
    println!(
        "{}Rotten Tomatoes: audience {} ({} ratings), critics {}",
        "• ".green(),
        fmt_opt(record.r_audience_score),
        fmt_opt(record.r_audience_count),
        fmt_opt(record.r_critic_score)
    );
    println!(
        "{}Box office: budget {}, gross {}, opening weekend {}",
        "• ".cyan(),
        fmt_opt(record.budget),
        fmt_opt(record.gross),
        fmt_opt(record.opening_weekend)
    );
    println!(
        "{}Opening weekend (adjusted): {}",
        "• ".cyan(),
        fmt_opt(record.opening_weekend_adjusted.map(|v| v.round()))
    );

    println!("Scaled columns:");
    for (name, value) in [
        ("I_Audience_Rating", record.i_audience_rating_scaled),
        ("R_Audience_Score", record.r_audience_score_scaled),
        ("R_Audience_Rating", record.r_audience_rating_scaled),
        ("R_Critic_Score", record.r_critic_score_scaled),
        ("R_Critic_Rating", record.r_critic_rating_scaled),
        ("Cumulative Worldwide Gross", record.gross_scaled),
        ("Opening_Weekend_USA", record.opening_weekend_scaled),
        ("Opening_Weekend_USA_Adjusted", record.opening_weekend_adjusted_scaled),
        ("Yearly_Votes", record.yearly_votes_scaled),
    ] {
        println!("  - {}: {}", name, fmt_opt(value));
    }

    println!(
        "{}",
        format!("Seed score: {:.2}", record.seed_score.unwrap_or(0.0)).bold()
    );
    Ok(())
}

/// Render an optional value, absent fields as "-"
fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
