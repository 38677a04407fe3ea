// curvetty: compile a function of x and plot it in the terminal

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use curvetty::config::{Config, Mode, USAGE};
use curvetty::logging;
use curvetty::sampling::SampleSet;
use curvetty::ui::panes::table::format_value;
use curvetty::ui::App;
use curvetty::Formula;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if config.mode == Mode::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::init(level, config.verbose);

    let mut formula = Formula::new();
    if let Some(expression) = &config.expression {
        if !formula.parse(expression) && config.mode != Mode::Interactive {
            if let Some(e) = formula.last_error() {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    }

    match &config.mode {
        Mode::Table => {
            let samples = SampleSet::sample(&formula, config.from, config.to, config.samples);
            let mut out = io::stdout().lock();
            writeln!(out, "x\tf(x)")?;
            for s in samples.points() {
                writeln!(out, "{}\t{}", s.x, format_value(s.y))?;
            }
            Ok(())
        }
        Mode::Evaluate(points) => {
            let mut out = io::stdout().lock();
            for x in points {
                writeln!(out, "{}", format_value(formula.evaluate(*x)))?;
            }
            Ok(())
        }
        Mode::Interactive => run_tui(formula, &config),
        Mode::Help => Ok(()),
    }
}

fn run_tui(formula: Formula, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // stderr belongs to the terminal UI from here on
    logging::set_echo(false);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(formula, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    logging::set_echo(config.verbose);

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
