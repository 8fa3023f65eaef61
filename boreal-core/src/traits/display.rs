//! Display and clock-boost traits

/// The low-power LCD
///
/// Pixel pushing and fonts live in the driver; the core only decides
/// when the display is powered and asks for the current reading to
/// be rendered.
pub trait Display {
    /// True when the panel is initialized and accepting draws
    fn is_ready(&self) -> bool;

    /// Power the panel on (after rendering, so the first visible
    /// frame is complete)
    fn power_on(&mut self);

    /// Power the panel off for sleep
    fn power_off(&mut self);

    /// Render the current temperature reading
    fn render(&mut self, temperature_c: f32);
}

/// Elevated system clock for display rendering
///
/// Rendering briefly needs the PLL. The core treats it as a scoped
/// resource: readiness is checked first, then enable, render,
/// disable — the disable call is unconditional once enabled.
pub trait SystemClock {
    /// Raise the system clock
    fn pll_enable(&mut self);

    /// Return to the low-power clock
    fn pll_disable(&mut self);
}
