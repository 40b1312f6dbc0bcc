//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting LogoWall");

    let config = logowall_app::AppConfig {
        manifest: std::env::args_os().nth(1).map(std::path::PathBuf::from),
        ..Default::default()
    };
    pollster::block_on(logowall_app::App::run(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
