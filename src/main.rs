//! Showreel - a single-page portfolio app for a freelance video editor
//! Built with iced for a warm dark one-page layout

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Restore the last window geometry before the runtime starts
    let window_size = features::Settings::load().window.size();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: window_size,
            // Close requests run teardown (follower, reveals, settings)
            // before the app exits
            exit_on_close_request: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
