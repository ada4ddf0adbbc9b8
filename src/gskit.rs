//! Console backend: gsKit through the C shim in `csrc/gs_shim.c`.

use core::ffi::c_int;
use core::ptr::NonNull;

use crate::backend::GsBackend;
use crate::color::Rgbaq;
use crate::config::{self, DisplayConfig, FlipMode};
use crate::error::Error;

pub mod ffi {
    use core::ffi::c_int;

    /// gsKit's `GSGLOBAL`; only ever handled by pointer.
    #[repr(C)]
    pub struct GsGlobal {
        _private: [u8; 0],
    }

    extern "C" {
        pub fn gs_shim_init_global() -> *mut GsGlobal;
        pub fn gs_shim_set_prim_alpha_enable(gs: *mut GsGlobal, enable: c_int);
        pub fn gs_shim_width(gs: *const GsGlobal) -> c_int;
        pub fn gs_shim_height(gs: *const GsGlobal) -> c_int;
        pub fn gs_shim_dma_init_gif() -> c_int;
        pub fn gs_shim_dma_chan_init_gif() -> c_int;
        pub fn gs_shim_set_primalpha(gs: *mut GsGlobal, alpha: u64, per_context: u8);
        pub fn gs_shim_set_clamp(gs: *mut GsGlobal, mode: c_int);
        pub fn gs_shim_init_screen(gs: *mut GsGlobal);
        pub fn gs_shim_mode_switch(gs: *mut GsGlobal, persistent: c_int);
        pub fn gs_shim_clear(gs: *mut GsGlobal, color: u64);
        pub fn gs_shim_prim_sprite(
            gs: *mut GsGlobal,
            x1: f32,
            y1: f32,
            x2: f32,
            y2: f32,
            z: c_int,
            color: u64,
        );
        pub fn gs_shim_prim_triangle(
            gs: *mut GsGlobal,
            x1: f32,
            y1: f32,
            z1: c_int,
            x2: f32,
            y2: f32,
            z2: c_int,
            x3: f32,
            y3: f32,
            z3: c_int,
            color: u64,
        );
        pub fn gs_shim_prim_line(
            gs: *mut GsGlobal,
            x1: f32,
            y1: f32,
            z1: c_int,
            x2: f32,
            y2: f32,
            z2: c_int,
            color: u64,
        );
        pub fn gs_shim_prim_point(gs: *mut GsGlobal, x: f32, y: f32, z: c_int, color: u64);
        pub fn gs_shim_flip(gs: *mut GsGlobal);
    }
}

/// The initialised GS context.
pub struct GsKit {
    global: NonNull<ffi::GsGlobal>,
    width: u32,
    height: u32,
}

impl GsKit {
    /// Brings up the GIF DMA channel and the display. Call once.
    pub fn init(config: &DisplayConfig) -> Result<Self, Error> {
        let global = NonNull::new(unsafe { ffi::gs_shim_init_global() }).ok_or(Error::GlobalInit)?;
        let gs = global.as_ptr();

        unsafe {
            ffi::gs_shim_set_prim_alpha_enable(gs, config.prim_alpha_enable as c_int);

            let rc = ffi::gs_shim_dma_init_gif();
            if rc < 0 {
                return Err(Error::DmaInit(rc));
            }
            let rc = ffi::gs_shim_dma_chan_init_gif();
            if rc < 0 {
                return Err(Error::DmaChannel(rc));
            }

            ffi::gs_shim_set_primalpha(gs, config.prim_alpha.0, 0);
            ffi::gs_shim_set_clamp(gs, config.clamp as c_int);
            ffi::gs_shim_init_screen(gs);
            ffi::gs_shim_mode_switch(gs, (config.flip == FlipMode::Persistent) as c_int);
        }

        let (width, height) = unsafe { (ffi::gs_shim_width(gs), ffi::gs_shim_height(gs)) };
        let (width, height) = (width.max(0) as u32, height.max(0) as u32);
        config::check_resolution(width, height)?;

        log::info!("GS ready at {}x{}", width, height);
        log::debug!(
            "prim alpha {} ({:#x}), clamp {:?}, flip {:?}",
            config.prim_alpha_enable,
            config.prim_alpha.0,
            config.clamp,
            config.flip
        );

        Ok(Self {
            global,
            width,
            height,
        })
    }

    fn gs(&self) -> *mut ffi::GsGlobal {
        self.global.as_ptr()
    }
}

impl GsBackend for GsKit {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgbaq) {
        unsafe { ffi::gs_shim_clear(self.gs(), color.0) }
    }

    fn prim_sprite(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, z: i32, color: Rgbaq) {
        unsafe { ffi::gs_shim_prim_sprite(self.gs(), x1, y1, x2, y2, z, color.0) }
    }

    fn prim_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        z1: i32,
        x2: f32,
        y2: f32,
        z2: i32,
        x3: f32,
        y3: f32,
        z3: i32,
        color: Rgbaq,
    ) {
        unsafe {
            ffi::gs_shim_prim_triangle(self.gs(), x1, y1, z1, x2, y2, z2, x3, y3, z3, color.0)
        }
    }

    fn prim_line(&mut self, x1: f32, y1: f32, z1: i32, x2: f32, y2: f32, z2: i32, color: Rgbaq) {
        unsafe { ffi::gs_shim_prim_line(self.gs(), x1, y1, z1, x2, y2, z2, color.0) }
    }

    fn prim_point(&mut self, x: f32, y: f32, z: i32, color: Rgbaq) {
        unsafe { ffi::gs_shim_prim_point(self.gs(), x, y, z, color.0) }
    }

    fn flip(&mut self) {
        unsafe { ffi::gs_shim_flip(self.gs()) }
    }
}
