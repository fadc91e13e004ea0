use folio::app::App;
use folio::cli::{parse_args, run_cli_command, CliCommand};
use folio::config::AppConfig;
use folio::logging::init_logging;
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return Ok(result?);
    }
    let animations = match command {
        CliCommand::RunTui { animations } => animations,
        _ => true,
    };

    let mut config = AppConfig::from_env();
    if !animations {
        config = config.with_animations(false);
    }

    // Logging failure is not fatal: the TUI just runs without a log file
    match init_logging(&config) {
        Ok(path) => tracing::info!(path = %path.display(), "folio starting"),
        Err(err) => eprintln!("folio: {}", err),
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let size = manager.size()?;

        let mut app = App::new(config);
        app.update_terminal_dimensions(size.width, size.height);

        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        tracing::info!("folio stopped");
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let tick = app.config.tick_duration();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(tick) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
