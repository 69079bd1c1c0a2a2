//! Scheduler CLI Client
//!
//! Interactive front end: prints each response batch, then reads one line
//! from stdin and sends it.

use std::io::{self, BufRead, Write};

use clap::Parser;
use scheduler::network::Client;
use scheduler::protocol::{markup, BatchEnd};
use scheduler::Config;

/// Scheduler CLI
#[derive(Parser, Debug)]
#[command(name = "scheduler-cli")]
#[command(about = "Interactive client for the scheduler service")]
struct Args {
    /// Server address
    #[arg(short, long, default_value_t = Config::default().listen_addr)]
    server: String,
}

fn main() {
    let args = Args::parse();

    println!("Attempting to open connection...");
    let mut client = match Client::connect(&args.server) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Could not open connection to the server: {}", e);
            std::process::exit(1);
        }
    };
    println!("Connection opened!\n");

    if let Err(e) = repl(&mut client) {
        eprintln!("Connection lost: {}", e);
        std::process::exit(1);
    }

    println!("Client shutdown.");
}

fn repl(client: &mut Client) -> scheduler::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        let batch = client.receive_batch()?;
        for line in &batch.lines {
            println!("{}", markup::strip(line));
        }

        if batch.end == BatchEnd::Connection {
            println!("Server disconnected.");
            return Ok(());
        }

        print!("> ");
        io::stdout().flush()?;

        match input.next() {
            Some(line) => client.send(&line?)?,
            None => return Ok(()),
        }
    }
}
