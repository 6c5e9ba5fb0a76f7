use ratatui::style::Style;
use tickwriter::app::{App, AppConfig};
use tickwriter::engine::WriterConfig;
use tickwriter::ui::rich_text::{plain, to_lines, Palette};

fn shown(app: &App) -> String {
    let state = app.get_render_state();
    plain(&to_lines(&state.text, state.rich_text, Palette::new(Style::default())))
}

#[test]
fn unrevealed_text_stays_blank_after_literal_angle_bracket() {
    let mut app = App::new(AppConfig {
        writer: WriterConfig {
            writing_speed: 10.0,
            punctuation_pause: 0.0,
            ..WriterConfig::default()
        },
        ..AppConfig::default()
    });
    app.start("I <3 you so much");
    for _ in 0..4 {
        app.tick(0.1);
    }

    assert_eq!(
        app.get_render_state().text,
        "I <3 <color=#FFFFFF00>you so much</color>"
    );
    let shown = shown(&app);
    assert_eq!(shown, format!("I <3 {}", " ".repeat(11)));
    assert!(!shown.contains("you"));
}
