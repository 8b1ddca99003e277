use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use structopt::StructOpt;

use menucard::app::App;
use menucard::menu::Menu;
use menucard::prefs;
use menucard::theme::Theme;

#[derive(StructOpt)]
#[structopt(
    name = "menucard",
    about = "A terminal viewer for the Hot Mix restaurant menu card."
)]
struct Cli {
    /// Start in the light theme regardless of the saved preference
    #[structopt(long)]
    light: bool,

    /// Start in the dark theme regardless of the saved preference
    #[structopt(long, conflicts_with = "light")]
    dark: bool,

    /// Path of the theme preference file
    #[structopt(long, parse(from_os_str))]
    prefs: Option<PathBuf>,

    /// Do not write the theme preference back on toggle
    #[structopt(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();

    let prefs_path = args.prefs.clone().or_else(prefs::default_path);
    let dark = if args.light {
        false
    } else if args.dark {
        true
    } else {
        prefs_path
            .as_deref()
            .and_then(prefs::load)
            .unwrap_or(true)
    };

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let save_path = if args.no_save { None } else { prefs_path };
    let mut app = App::new(Menu::hot_mix(), Theme::new(dark), save_path);

    let size = terminal.size()?;
    app.relayout(size.width, size.height, Instant::now());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key.code, key.modifiers, Instant::now());
                }
                Event::Resize(width, height) => {
                    app.relayout(width, height, Instant::now());
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
