use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use memsh::{Shell, ShellConfig};

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "A shell over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// TOML file with the prompt and the initial tree
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Folder to start in (created if missing)
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output results as JSON (output, exit, cwd)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };
    if cli.cwd.is_some() {
        config.cwd = cli.cwd;
    }

    let mut shell = match Shell::with_config(&config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: Cannot prepare filesystem: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("session started in {}", shell.fs().current_directory_path());

    // Determine script source: -c, file, or piped stdin
    let script = if let Some(s) = cli.script {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if !std::io::stdin().is_terminal() {
        match read_script(std::io::stdin()) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script from stdin: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    match script {
        Some(script) => run_script(&mut shell, &script, cli.json),
        None => {
            if let Err(e) = repl(&mut shell).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_script(shell: &mut Shell, script: &str, json: bool) {
    let outcome = shell.run_script(script);
    if json {
        println!("{}", serde_json::json!({
            "output": outcome.output,
            "exit": outcome.exit,
            "cwd": shell.fs().current_directory_path(),
        }));
    } else if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
}

async fn repl(shell: &mut Shell) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", shell.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let outcome = shell.execute(&line);
        if outcome.exit {
            break;
        }
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
    }
    Ok(())
}

/// Read a whole script; fails on I/O errors and on input that is not UTF-8.
fn read_script(mut reader: impl Read) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
