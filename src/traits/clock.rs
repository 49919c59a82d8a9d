/// Frame time source
pub trait FrameClock {
    /// Seconds since an arbitrary fixed origin, monotonically non-decreasing
    fn now(&self) -> f64;
}
