use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use postboard::adapters::ReqwestHttpClient;
use postboard::api::ApiClient;
use postboard::app::{App, AppMessage};
use postboard::cli::{parse_args, CliCommand, USAGE};
use postboard::startup::{init_logging, Config};
use postboard::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use postboard::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tick interval for spinner animation between input events.
const TICK_MS: u64 = 100;

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("postboard {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run { base_url } => base_url,
    };

    color_eyre::install()?;
    init_logging();
    setup_panic_hook();

    let config = Config::resolve(base_url);
    tracing::info!(base_url = %config.base_url, "starting postboard");

    let gateway = ApiClient::with_base_url(ReqwestHttpClient::new(), config.base_url);
    let mut app = App::new(Arc::new(gateway));
    app.initialize();

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app).await;

    leave_tui_mode(&mut io::stdout());
    result
}

/// The event loop: draw when dirty, then wait for a key event, a fetch
/// result, or the animation tick, whichever comes first.
async fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                    Some(Ok(Event::Resize(..))) => {
                        app.needs_redraw = true;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("input stream error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => None,
                }
            } => {
                if let Some(msg) = message {
                    app.handle_message(msg);
                }
            }
        }
    }
}
