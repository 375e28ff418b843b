use dishview_ui::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("dishview_ui", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    log::info!("Starting dishview with {config:?}");

    app::application(config).run()
}
