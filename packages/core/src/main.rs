use clap::Parser;
use dotenvy::dotenv;

use leads_calculator::cli::Cli;
use leads_calculator::config::{Config, OutputFormat};
use leads_calculator::error::AppError;
use leads_calculator::funnel::LeadsEngine;
use leads_calculator::logging::init_logging;
use leads_calculator::report;

fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_env().map_err(AppError::Config)?.with_cli(cli);
    tracing::debug!("Running with config: {:?}", config);

    let engine = LeadsEngine::new(config.load_market()?);
    let inputs = cli.inputs(engine.default_inputs());

    if cli.show_market {
        println!("{}", report::render_market(engine.market()));
    }

    let estimate = engine.estimate(&inputs);
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&estimate)?),
        OutputFormat::Text => match &estimate {
            Some(estimate) => print!("{}", report::render_text(estimate, engine.market())),
            None => println!("{}", report::render_no_result(&inputs)),
        },
    }

    Ok(())
}
