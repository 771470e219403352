/// All tunable parameters for one noise field, mirrored 1:1 by the server's
/// request fields.
#[derive(Clone, Debug)]
pub struct NoiseParams {
    /// Generate immediately when the owning object is created.
    pub autogenerate: bool,
    /// Side length of the square buffer; buffer length is noise_size².
    pub noise_size: usize,
    /// Seed for the lattice hash. Same seed + same params = same buffer.
    pub seed: u64,
    /// Base wavelength in cells. Larger interval = coarser pattern.
    pub interval: u32,
    /// Amplitude applied to the summed octaves.
    pub height: f32,
    /// Octave count; the fractional part blends in one partial octave.
    pub octaves: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            autogenerate: false,
            noise_size: 256,
            seed: 1,
            interval: 12,
            height: 1.0,
            octaves: 5.0,
        }
    }
}
