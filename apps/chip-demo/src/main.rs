mod render;
mod screens;

use chipflow_ui::Density;
use screens::Viewport;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // A 360dp phone with 16dp of screen padding on each side.
    let viewport = Viewport {
        width: 328,
        density: Density::new(1.0),
    };

    let screens: [(&str, fn(Viewport) -> Result<(), chipflow_ui::LayoutError>); 4] = [
        ("basic", screens::basic_tags),
        ("generic", screens::generic_items),
        ("single", screens::single_select),
        ("multi", screens::multi_select),
    ];
    for (name, screen) in screens {
        if let Err(err) = screen(viewport) {
            log::error!("screen '{name}' failed: {err}");
            std::process::exit(1);
        }
        println!();
    }
}
