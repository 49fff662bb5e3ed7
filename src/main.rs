use anyhow::Result;
use ats_engine::{storage, AtsScorer, TextAssistant};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "atscore")]
#[command(about = "Score resumes for ATS compatibility and polish their wording")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a resume JSON file and print the full report
    Score {
        file: PathBuf,
        /// Print only the total score and grade
        #[arg(long)]
        brief: bool,
    },
    /// Generate a professional summary for a job title
    Summary {
        job_title: String,
        #[arg(long, default_value = "5+")]
        years: String,
        /// Comma or semicolon separated skills to highlight
        #[arg(long, default_value = "")]
        skills: String,
    },
    /// Enhance a single bullet point
    Enhance { text: String },
    /// Suggest ATS keywords for a job title
    Keywords {
        job_title: String,
        /// Extra skills to merge in; repeatable
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { file, brief } => {
            let resume = storage::load_resume(&file)?;
            let scorer = AtsScorer::new();
            let result = scorer.calculate_score(&resume);
            info!("Scored {} at {}", file.display(), result.total_score);
            if brief {
                println!("{}/100 ({})", result.total_score, result.grade);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Command::Summary {
            job_title,
            years,
            skills,
        } => {
            let assistant = TextAssistant::new();
            println!("{}", assistant.generate_summary(&job_title, &years, &skills));
        }
        Command::Enhance { text } => {
            let assistant = TextAssistant::new();
            println!("{}", assistant.enhance_bullet(&text));
        }
        Command::Keywords { job_title, skills } => {
            let assistant = TextAssistant::new();
            for keyword in assistant.generate_keywords(&job_title, &skills) {
                println!("{keyword}");
            }
        }
    }

    Ok(())
}
