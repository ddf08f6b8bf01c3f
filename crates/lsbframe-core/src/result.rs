use crate::LsbFrameError;

pub type Result<T> = std::result::Result<T, LsbFrameError>;
