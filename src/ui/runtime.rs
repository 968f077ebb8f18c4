use crate::config::Config;
use crate::form::{ExpiryScheduler, FormSession, TracingSink};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the form until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    // Message timers only; the event loop itself stays on this thread.
    let timers = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("spidr-timers")
        .enable_time()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.timing.tick_rate();
    let events = EventHandler::new(tick_rate);

    let session = FormSession::new(config.timing.message_timings(), TracingSink);
    let mut app = App::new(session, config.ui.show_logo);
    app.attach_scheduler(ExpiryScheduler::new(timers.handle().clone(), events.sender()));
    tracing::info!("Form session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.insert_str(&text),
            Ok(AppEvent::MessageExpired { generation }) => {
                app.on_message_expired(generation);
            }
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app aborts any pending message timer.
    drop(app);
    drop(guard);
    timers.shutdown_background();
    tracing::info!("Form session ended");
    Ok(())
}
