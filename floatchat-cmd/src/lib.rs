//! Command implementations for the FloatChat CLI.
//!
//! Provides subcommands for asking one-off questions, running an
//! interactive chat session, fitting the temperature predictor, and
//! printing the standalone tsunami risk assessment.

use clap::Subcommand;

pub mod chat;
pub mod model;
pub mod risk;

#[derive(Subcommand)]
pub enum Command {
    /// Ask a single question and print the full response as JSON
    Ask {
        /// Path to an ARGO profile CSV file or a directory of CSV files
        #[arg(short = 'd', long)]
        data: String,

        /// The question to ask
        #[arg(short = 'p', long)]
        prompt: String,

        /// Session identifier for the conversation log
        #[arg(short = 's', long, default_value = "default")]
        session: String,

        /// Optional temperature model snapshot to attach to the engine
        #[arg(short = 'm', long)]
        model: Option<String>,
    },

    /// Interactive chat session (reads prompts from stdin)
    Repl {
        /// Path to an ARGO profile CSV file or a directory of CSV files
        #[arg(short = 'd', long)]
        data: String,

        /// Session identifier for the conversation log
        #[arg(short = 's', long, default_value = "default")]
        session: String,
    },

    /// Fit the temperature predictor and snapshot it to disk
    Train {
        /// Path to an ARGO profile CSV file or a directory of CSV files
        #[arg(short = 'd', long)]
        data: String,

        /// Output path for the model snapshot JSON
        #[arg(short = 'o', long)]
        model_out: String,
    },

    /// Predict temperature at a position and depth using a model snapshot
    Predict {
        /// Path to a model snapshot written by `train`
        #[arg(short = 'm', long)]
        model: String,

        /// Latitude in degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long)]
        lon: f64,

        /// Pressure in dbar (depth proxy)
        #[arg(long)]
        pressure: f64,
    },

    /// Print the regional tsunami risk assessment as JSON
    Risk {
        /// Path to an ARGO profile CSV file or a directory of CSV files
        #[arg(short = 'd', long)]
        data: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Ask {
            data,
            prompt,
            session,
            model,
        } => chat::run_ask(&data, &prompt, &session, model.as_deref()).await,
        Command::Repl { data, session } => chat::run_repl(&data, &session).await,
        Command::Train { data, model_out } => model::run_train(&data, &model_out),
        Command::Predict {
            model,
            lat,
            lon,
            pressure,
        } => model::run_predict(&model, lat, lon, pressure),
        Command::Risk { data } => risk::run_risk(&data),
    }
}
