#![cfg_attr(ps2_ee, no_std)]
#![cfg_attr(ps2_ee, no_main)]

#[cfg(ps2_ee)]
mod ee {
    use core::ffi::{c_char, c_int};

    use gs_prims::{gskit::GsKit, logger, Canvas, DisplayConfig, Scene};
    use log::LevelFilter;

    #[no_mangle]
    pub extern "C" fn main(_argc: c_int, _argv: *const *const c_char) -> c_int {
        match logger::init(LevelFilter::Info) {
            Ok(()) => {}
            // only fails when a logger is already installed, which keeps receiving records
            Err(_) => {}
        }

        let config = DisplayConfig::default();
        let gs = match GsKit::init(&config) {
            Ok(gs) => gs,
            Err(e) => {
                log::error!("{}", e);
                loop {}
            }
        };

        let mut canvas = Canvas::new(gs);
        let scene = match Scene::for_canvas(&canvas, config.clear_color) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("{}", e);
                loop {}
            }
        };

        loop {
            scene.render(&mut canvas);
        }
    }

    #[panic_handler]
    fn panic(info: &core::panic::PanicInfo) -> ! {
        log::error!("{}", info);
        loop {}
    }
}

#[cfg(not(ps2_ee))]
mod host {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::{Parser, ValueEnum};
    use gs_prims::{soft::Framebuffer, Canvas, DisplayConfig, Scene, VideoMode};

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Mode {
        Ntsc,
        Pal,
    }

    impl From<Mode> for VideoMode {
        fn from(mode: Mode) -> Self {
            match mode {
                Mode::Ntsc => VideoMode::Ntsc,
                Mode::Pal => VideoMode::Pal,
            }
        }
    }

    /// Renders the GS demo frame into memory.
    #[derive(Debug, Parser)]
    #[command(version, about)]
    struct Args {
        /// Video mode whose resolution to use
        #[arg(long, value_enum, default_value = "ntsc")]
        mode: Mode,

        /// Number of frames to render
        #[arg(long, default_value_t = 1)]
        frames: u64,

        /// Save the last frame; the format follows the extension (png, bmp, ppm)
        #[arg(long)]
        dump: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let config = DisplayConfig::with_mode(args.mode.into());
        let mut canvas = Canvas::new(Framebuffer::from_config(&config)?);
        let scene = Scene::for_canvas(&canvas, config.clear_color)?;
        log::info!(
            "rendering {} frame(s) at {}x{}",
            args.frames,
            canvas.width(),
            canvas.height()
        );

        for _ in 0..args.frames {
            scene.render(&mut canvas);
        }

        if let Some(path) = args.dump {
            let fb = canvas.backend();
            let frame = image::RgbImage::from_raw(canvas.width(), canvas.height(), fb.rgb_bytes())
                .ok_or_else(|| anyhow::anyhow!("frame buffer size does not match its resolution"))?;
            frame
                .save(&path)
                .with_context(|| format!("writing dump to {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        Ok(())
    }

}

#[cfg(not(ps2_ee))]
fn main() -> anyhow::Result<()> {
    host::run()
}
