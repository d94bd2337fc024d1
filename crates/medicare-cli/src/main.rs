use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use medicare_core::{available_slots, load_clinic, ChatSession, ClinicInfo, Responder};
use medicare_schema::QuickAction;
use medicare_server::state::AppState;

#[derive(Parser)]
#[command(name = "medicare", version, about = "MediCare clinic virtual assistant")]
struct Cli {
    #[arg(
        long,
        help = "Path to a clinic profile YAML (defaults to the built-in MediCare profile)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Serve {
        #[arg(long, default_value = "3000", help = "HTTP API server port")]
        port: u16,
    },
    #[command(about = "Local chat REPL (no server needed)")]
    Chat,
    #[command(about = "Print upcoming appointment availability")]
    Slots,
    #[command(about = "Print the clinic profile")]
    Info,
    #[command(about = "Validate a clinic profile file")]
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Serve { port } => {
            let clinic = load_profile(&cli.config)?;
            let state = AppState::new(clinic);
            medicare_server::serve(state, &format!("0.0.0.0:{port}")).await?;
        }
        Commands::Chat => {
            let clinic = load_profile(&cli.config)?;
            run_repl(clinic)?;
        }
        Commands::Slots => {
            print_slots();
        }
        Commands::Info => {
            let clinic = load_profile(&cli.config)?;
            print_info(&clinic);
        }
        Commands::Validate => {
            let Some(path) = &cli.config else {
                anyhow::bail!("--config is required for validate");
            };
            let clinic = load_clinic(path)?;
            println!(
                "Profile valid. {} insurers, doctor: {}.",
                clinic.insurance.len(),
                clinic.doctor
            );
        }
    }

    Ok(())
}

fn load_profile(config: &Option<PathBuf>) -> Result<ClinicInfo> {
    match config {
        Some(path) => load_clinic(path),
        None => Ok(ClinicInfo::default()),
    }
}

fn run_repl(clinic: ClinicInfo) -> Result<()> {
    let responder = Responder::new(&clinic);
    let mut session = ChatSession::new(&responder);

    println!("{}", responder.greeting());
    println!("Atalhos: /agendar /endereco /convenios /valores. 'quit' para sair.");
    println!("---");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "quit" || input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let reply = match input {
            "/agendar" => session.handle_quick_action(&responder, QuickAction::Book),
            "/endereco" => session.handle_quick_action(&responder, QuickAction::Address),
            "/convenios" => session.handle_quick_action(&responder, QuickAction::Insurance),
            "/valores" => session.handle_quick_action(&responder, QuickAction::Price),
            text => session.handle_input(&responder, text),
        };
        println!("{}", reply.content);
    }

    Ok(())
}

fn print_slots() {
    let slots = available_slots();
    println!("{:<14} {:<8} {:<12}", "DATA", "HORA", "DISPONÍVEL");
    println!("{}", "-".repeat(36));
    for slot in &slots {
        println!(
            "{:<14} {:<8} {:<12}",
            slot.date.format("%d/%m/%Y"),
            slot.time.format("%H:%M"),
            if slot.available { "sim" } else { "não" },
        );
    }
    println!("{} horários nos próximos 7 dias.", slots.len());
}

fn print_info(clinic: &ClinicInfo) {
    println!("{}", clinic.name);
    println!("Endereço: {}", clinic.address);
    println!("Telefone: {}", clinic.phone);
    println!("Horários: {}", clinic.hours);
    println!("Consulta particular: {}", clinic.private_consultation);
    println!("Médico: {}", clinic.doctor);
    println!("Convênios:");
    for insurer in &clinic.insurance {
        println!("  - {insurer}");
    }
}
