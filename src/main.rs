use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use nxtwatch::adapters::{FileSessionStore, ReqwestHttpClient};
use nxtwatch::api::VideoApi;
use nxtwatch::app::{App, AppMessage};
use nxtwatch::cli::{parse_args, run_cli_command, start_route};
use nxtwatch::config::AppConfig;
use nxtwatch::logging;
use nxtwatch::terminal::{install_panic_hook, TerminalSession};
use nxtwatch::traits::SessionStore;
use nxtwatch::ui;

/// Spinner animation interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.data_dir));

    // Flags are handled before any terminal setup
    if let Some(result) = run_cli_command(parse_args(std::env::args()), session.as_ref()) {
        return Ok(result?);
    }

    color_eyre::install()?;
    install_panic_hook();
    logging::init(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, session))
}

async fn run(config: AppConfig, session: Arc<dyn SessionStore>) -> Result<()> {
    let http = Arc::new(ReqwestHttpClient::new());
    let api = VideoApi::new(config.api_url.clone(), http, session.clone());
    let mut app = App::new(api, session, &config);

    let mut term = TerminalSession::new()?;
    let size = term.size()?;
    app.update_terminal_dimensions(size.width, size.height);
    app.start_at(start_route(std::env::args()));

    let result = run_app(term.terminal(), &mut app).await;
    term.restore();

    match &result {
        Ok(()) => tracing::info!("nxtwatch exiting"),
        Err(err) => tracing::error!(error = %err, "nxtwatch exiting with error"),
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    // stdin closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
