//! Resume ranker: rank candidate resumes against a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::OutputFormat;
use resume_ranker::engine::{RankingEngine, ResumeInput};
use resume_ranker::error::{Result, ResumeRankerError};
use resume_ranker::input::InputManager;
use resume_ranker::output::{self, formatter, ConsoleFormatter};
use resume_ranker::{Config, SkillTaxonomy};
use std::path::PathBuf;
use std::process;

const INPUT_EXTENSIONS: [&str; 4] = ["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            output,
            save,
            detailed,
        } => {
            validate_inputs(&job, &resumes)?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;

            info!(
                "Ranking {} resumes against {}",
                resumes.len(),
                job.display()
            );

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let progress = ProgressBar::new(resumes.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut inputs: Vec<ResumeInput> = Vec::with_capacity(resumes.len());
            for (index, path) in resumes.iter().enumerate() {
                progress.set_message(path.display().to_string());
                inputs.push(input_manager.load_resume(path, index).await?);
                progress.inc(1);
            }
            progress.finish_and_clear();

            let engine = RankingEngine::new(SkillTaxonomy::builtin(), config.engine_options())?;
            let ranked = engine.rank_resumes(&job_text, &inputs);

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output && save.is_none(), detailed)
                        .format_ranking(&ranked)
                }
                OutputFormat::Json => formatter::to_json(&ranked)?,
                OutputFormat::Csv => output::ranked_results_to_csv(&ranked)?,
            };
            emit(rendered, save).await
        }

        Commands::Analyze {
            job,
            resume,
            output,
        } => {
            validate_inputs(&job, std::slice::from_ref(&resume))?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;
            if output_format == OutputFormat::Csv {
                return Err(ResumeRankerError::InvalidInput(
                    "CSV output is only available for ranking".to_string(),
                ));
            }

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;
            let input = input_manager.load_resume(&resume, 0).await?;

            let engine = RankingEngine::new(SkillTaxonomy::builtin(), config.engine_options())?;
            let analysis = engine.analyze_one(&job_text, &input);

            let rendered = match output_format {
                OutputFormat::Json => formatter::to_json(&analysis)?,
                _ => ConsoleFormatter::new(config.output.color_output, true)
                    .format_analysis(&analysis),
            };
            print!("{}", rendered);
            Ok(())
        }

        Commands::Extract { file } => {
            cli::validate_file_extension(&file, &INPUT_EXTENSIONS)
                .map_err(ResumeRankerError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&file).await?;

            let engine = RankingEngine::new(SkillTaxonomy::builtin(), config.engine_options())?;
            let profile = engine.extract_profile(&text);
            println!("{}", formatter::to_json(&profile)?);
            Ok(())
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Reset) => {
                    let config = Config::default();
                    config.save()?;
                    println!("Configuration reset to defaults");
                }
                _ => {
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeRankerError::Configuration(format!(
                            "Failed to render config: {}",
                            e
                        ))
                    })?;
                    println!("{}", rendered);
                }
            }
            Ok(())
        }
    }
}

fn validate_inputs(job: &PathBuf, resumes: &[PathBuf]) -> Result<()> {
    cli::validate_file_extension(job, &INPUT_EXTENSIONS)
        .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;
    for resume in resumes {
        cli::validate_file_extension(resume, &INPUT_EXTENSIONS)
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;
    }
    Ok(())
}

async fn emit(rendered: String, save: Option<PathBuf>) -> Result<()> {
    match save {
        Some(path) => {
            tokio::fs::write(&path, rendered).await?;
            info!("Saved output to {}", path.display());
            Ok(())
        }
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}
