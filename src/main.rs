use clap::Parser;

use tickwriter::app::{App, AppConfig, DEFAULT_FRAME_RATE};
use tickwriter::engine::{load_script, WriterConfig};
use tickwriter::markup::tag_help;
use tickwriter::ui::{Cli, TuiManager};

fn main() {
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Error)
        .parse_default_env()
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.tags {
        println!("{}", tag_help());
        return Ok(());
    }
    let script_path = cli.script.ok_or("no script file given")?;

    let mut writer = match &cli.config {
        Some(path) => WriterConfig::load(path)?,
        None => WriterConfig::default(),
    };
    if let Some(speed) = cli.speed {
        writer.writing_speed = speed;
    }
    if let Some(pause) = cli.pause {
        writer.punctuation_pause = pause;
    }
    writer.write_whole_words |= cli.whole_words;
    writer.validate()?;

    let script = load_script(&script_path)?;
    log::info!("playing {}", script_path.display());

    let mut app = App::new(AppConfig {
        writer,
        frame_rate: cli.fps.unwrap_or(DEFAULT_FRAME_RATE),
        rich_text: !cli.plain,
        sounds: cli.sounds,
        bell: cli.bell,
        ..AppConfig::default()
    });
    app.start(&script);

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
