//! Native viewer binary: opens a window and runs the scrollscape scene.

use scrollscape::Viewer;

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(preset) = std::env::args().nth(1) {
        log::info!("using preset {preset}");
        builder = builder.with_preset_path(preset);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
