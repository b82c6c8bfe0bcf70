use clap::Parser;
use qastore::application::{init::init, submission_body, QuestionService};
use qastore::cli::commands::SubmissionArgs;
use qastore::cli::{format_answer_list, format_question_list, to_pretty_json, Cli, Commands};
use qastore::error::{QaError, Result};
use qastore::infrastructure::logging::init_logging;
use qastore::infrastructure::{Config, JsonFileRepository};
use qastore::WriteStatus;

/// Exit code for a rejected submission
const REJECTED_EXIT_CODE: i32 = 3;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd, cli.file, cli.log_level)?;

    let _logger = init_logging(&config.log_level).map_err(QaError::Config)?;

    let service = QuestionService::new(JsonFileRepository::new(&config.store));

    match cli.command {
        Commands::Init { path } => {
            let path = path.unwrap_or(config.store);
            init(&path).await?;
            println!("Initialized question store at {}", path.display());
            Ok(0)
        }
        Commands::Questions => {
            let questions = service.list().await?;
            println!("{}", format_question_list(&questions).trim_end());
            Ok(0)
        }
        Commands::Question { id } => {
            let question = service.show(&id).await?;
            println!("{}", to_pretty_json(&question)?);
            Ok(0)
        }
        Commands::Ask(args) => {
            let body = body_from_args(&args)?;
            let status = service.ask(&body).await?;
            Ok(report(status))
        }
        Commands::Answers { question_id } => {
            let answers = service.answers(&question_id).await?;
            println!("{}", format_answer_list(&answers).trim_end());
            Ok(0)
        }
        Commands::Answer {
            question_id,
            answer_id,
        } => {
            let answer = service.answer(&question_id, &answer_id).await?;
            println!("{}", to_pretty_json(&answer)?);
            Ok(0)
        }
        Commands::Reply { question_id, body } => {
            let body = body_from_args(&body)?;
            let status = service.reply(&question_id, &body).await?;
            Ok(report(status))
        }
    }
}

fn body_from_args(args: &SubmissionArgs) -> Result<serde_json::Value> {
    submission_body(
        args.json.as_deref(),
        args.author.as_deref(),
        args.summary.as_deref(),
    )
}

/// Print the status token and pick the exit code
fn report(status: WriteStatus) -> i32 {
    println!("{}", status);
    if status.is_success() {
        0
    } else {
        REJECTED_EXIT_CODE
    }
}
