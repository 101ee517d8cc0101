mod ascii;
mod host;

use std::time::Duration;

use anyhow::Context;
use slidekit_core::{Runtime, FRAME_INTERVAL_60HZ_NANOS, NANOS_PER_MILLI};
use slidekit_foundation::SlideConfig;
use slidekit_graphics::Density;
use slidekit_ui::{MonotonicClock, SlideToConfirm};

use crate::ascii::AsciiRenderer;
use crate::host::{LoadingHost, Script};

/// Track width in dp; the original screen pads a phone-width column.
const TRACK_WIDTH_DP: f32 = 320.0;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density = read_density()?;
    let config = SlideConfig::default();
    config.validate()?;

    println!("=== slidekit slide-to-confirm demo ===");
    println!("Scripted gestures: a partial swipe, a full swipe, then a fling.");
    println!("Each confirmed slide starts a 2 s loading phase.");
    println!();

    let runtime = Runtime::default();
    let host = LoadingHost::new();
    let slide = SlideToConfirm::new(&runtime.handle(), config, density, host.gate(), false);
    let width_px = TRACK_WIDTH_DP * density.scale();
    slide.on_size_changed(width_px);
    log::info!("track measured at {width_px:.0}px (density {})", density.scale());

    let clock = MonotonicClock::new();
    let mut script = Script::demo(density.scale());
    let mut renderer = AsciiRenderer::new(40);

    loop {
        let now_nanos = clock.frame_time_nanos();
        let now_millis = now_nanos / NANOS_PER_MILLI;

        for event in script.due(now_millis) {
            slide.on_pointer_event(&event);
        }
        host.update(now_millis, &slide);
        runtime.handle().drain_frame_callbacks(now_nanos);
        slide.render(&mut renderer);

        if script.is_finished() && !runtime.needs_frame() && !host.is_loading() {
            break;
        }
        std::thread::sleep(Duration::from_nanos(FRAME_INTERVAL_60HZ_NANOS));
    }

    println!();
    println!("Confirmed {} time(s).", host.commits());
    Ok(())
}

fn read_density() -> anyhow::Result<Density> {
    match std::env::var("SLIDEKIT_DENSITY") {
        Ok(raw) => {
            let scale: f32 = raw
                .trim()
                .parse()
                .with_context(|| format!("SLIDEKIT_DENSITY={raw:?} is not a number"))?;
            anyhow::ensure!(
                scale.is_finite() && scale > 0.0,
                "SLIDEKIT_DENSITY must be positive, got {scale}"
            );
            Ok(Density::new(scale))
        }
        Err(_) => Ok(Density::BASELINE),
    }
}
