use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{error, info};

use ballot_cli::{
    cli::{parse_voter_count, Cli, Commands},
    session::Session,
    simulate::simulate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = ballot_cli::logging::init_tracing(cli.audit_log.as_deref());

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuração inválida: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Run { voters } => {
            let voters = match voters {
                Some(n) => n,
                None => prompt_voter_count()?,
            };
            info!("🗳️ Iniciando sessão com {} eleitores", voters);

            let mut session = Session::start(&config, voters)?;
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }
        Commands::Simulate { voters, seed, json } => {
            let (_, results) = simulate(&config, voters, seed)?;
            if json {
                println!("{}", results.to_json()?);
            } else {
                println!("{}", results);
            }
        }
    }

    Ok(())
}

fn prompt_voter_count() -> Result<usize, Box<dyn std::error::Error>> {
    print!("Enter the number of voters: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_voter_count(&line)?)
}
