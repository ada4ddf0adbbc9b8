use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("gsKit could not allocate the global context")]
    GlobalInit,

    #[error("dmaKit initialization failed with code {0}")]
    DmaInit(i32),

    #[error("GIF DMA channel initialization failed with code {0}")]
    DmaChannel(i32),

    #[error("unsupported resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("demo scene does not fit on a {width}x{height} screen")]
    SceneDoesNotFit { width: u32, height: u32 },
}
