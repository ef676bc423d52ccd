use clap::Parser;
use std::io;

use qr_forge::cli::{handle_config_action, Args, Command};
use qr_forge::config::Config;
use qr_forge::menu::{Controller, Prompter};
use qr_forge::render::{QrCodeRenderer, RenderOptions};
use qr_forge::session::Session;

/// Set up the Ctrl+C handler.
///
/// Prompts block on stdin, so the handler ends the process itself.
fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        eprintln!("\nReceived Ctrl+C, exiting...");
        std::process::exit(130);
    })
}

fn main() {
    let args = Args::parse();

    if let Some(Command::Config { action }) = args.command {
        if let Err(e) = handle_config_action(action, args.config.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = match RenderOptions::try_from(&config.render) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_ctrlc_handler() {
        eprintln!("Warning: Could not set up Ctrl+C handler: {}", e);
    }

    let output_dir = args.output_dir.unwrap_or(config.output.dir);
    let clear_screen = config.ui.clear_screen && !args.no_clear;
    let renderer = QrCodeRenderer::new(options);
    let mut session = Session::new();

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let prompter = Prompter::new(stdin.lock(), stdout.lock());
        let mut controller = Controller::new(&mut session, &renderer, prompter, output_dir)
            .with_clear_screen(clear_screen);
        controller.run()
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::info!("Session ended after {} QR code(s)", session.count());
}
