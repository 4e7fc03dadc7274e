//! Demo walking the built-in device catalog
//!
//! Resolves a small example layout (a centered button with a top
//! spacing, corner radius and title font) against every known device
//! screen and prints the adapted values.

use adaptive_layout::{
    Anchor, Axis, DeviceCatalog, FontSpec, LayoutConfig, LengthSpec, ScaleEngine, ScreenMetrics,
    Size, SizeSpec,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("adaptive_layout=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    init_logger();

    let catalog = DeviceCatalog::builtin();
    let engine = ScaleEngine::new(&catalog);

    let config = LayoutConfig::new(
        vec![
            LengthSpec::new("top_space", 30.0, Anchor::Fixed(Axis::Height)),
            LengthSpec::new("corner_radius", 8.0, Anchor::Preferred),
        ],
        vec![SizeSpec::new(
            "button",
            Size::new(200.0, 44.0),
            Anchor::Fixed(Axis::Height),
        )],
    )
    .expect("demo layout values are valid");

    let title_font = FontSpec::regular("Helvetica Neue", 16.0);

    for profile in catalog.profiles() {
        let metrics = ScreenMetrics::new(profile.screen);
        let resolved = config.resolve(&engine, &metrics);

        let label = catalog
            .lookup(metrics.size())
            .map(|known| known.name.as_str())
            .unwrap_or("unknown device");

        let button = resolved.size("button").unwrap_or(Size::new(0.0, 0.0));
        tracing::info!(
            device = label,
            screen = ?metrics.size(),
            button_width = button.width,
            button_height = button.height,
            top_space = resolved.length("top_space").unwrap_or(0.0),
            corner_radius = resolved.length("corner_radius").unwrap_or(0.0),
            font_pt = title_font.point_size(&engine, &metrics),
            "resolved layout"
        );
    }
}
