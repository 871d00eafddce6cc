mod app;
mod keyboard;
mod poster_cache;
mod screen;
mod style;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("kinolog=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut app = iced::application(app::Kinolog::new, app::Kinolog::update, app::Kinolog::view)
        .title(app::Kinolog::title)
        .subscription(app::Kinolog::subscription)
        .theme(app::Kinolog::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window_size(ws.size());

    if let Some(pos) = ws.position() {
        app = app.position(iced::window::Position::Specific(pos));
    } else {
        app = app.centered();
    }

    app.run()
}
