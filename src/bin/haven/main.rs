//! haven - ambient sound mixer for the terminal
//!
//! Run with: cargo run

mod app;
mod ui;

use app::App;
use color_eyre::eyre::Result as EyreResult;

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let mut app = App::new()?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    app.save_settings();
    result
}
