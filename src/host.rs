use crate::config::NoiseParams;
use crate::error::NoiseError;
use crate::generator;
use crate::grid::NoiseGrid;

pub type ObjectId = u64;

/// Lifecycle notifications fired around a [`NoiseObject`]. Hosts register a
/// listener to mirror the object into their own bookkeeping; both hooks are
/// pure notifications and carry only the object identity.
pub trait LifecycleListener {
    fn on_added(&mut self, _id: ObjectId) {}
    fn on_removed(&mut self, _id: ObjectId) {}
}

/// One noise field plus its parameters, exposed to a host environment.
///
/// Field accessors forward directly with no validation; invalid values are
/// only rejected when generation runs. The grid is reallocated whenever the
/// configured size changed since the last generation.
pub struct NoiseObject {
    id: ObjectId,
    params: NoiseParams,
    grid: NoiseGrid,
    listeners: Vec<Box<dyn LifecycleListener>>,
}

impl NoiseObject {
    pub fn new(id: ObjectId, params: NoiseParams) -> Self {
        Self {
            id,
            params,
            grid: NoiseGrid::new(),
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn add_listener(&mut self, listener: Box<dyn LifecycleListener>) {
        self.listeners.push(listener);
    }

    /// Host calls this once after construction: pre-allocates the buffer,
    /// runs generation when autogenerate is set, then notifies listeners.
    pub fn on_create(&mut self) -> Result<(), NoiseError> {
        self.grid.resize(self.params.noise_size)?;
        if self.params.autogenerate {
            self.generate_fbm_noise()?;
        }
        for listener in &mut self.listeners {
            listener.on_added(self.id);
        }
        Ok(())
    }

    /// Host calls this before teardown. Notification only.
    pub fn on_destroy(&mut self) {
        for listener in &mut self.listeners {
            listener.on_removed(self.id);
        }
    }

    pub fn seed(&self) -> u64 {
        self.params.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.params.seed = seed;
    }

    pub fn noise_size(&self) -> usize {
        self.params.noise_size
    }

    pub fn set_noise_size(&mut self, noise_size: usize) {
        self.params.noise_size = noise_size;
    }

    pub fn interval(&self) -> u32 {
        self.params.interval
    }

    pub fn set_interval(&mut self, interval: u32) {
        self.params.interval = interval;
    }

    pub fn height(&self) -> f32 {
        self.params.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.params.height = height;
    }

    pub fn octaves(&self) -> f32 {
        self.params.octaves
    }

    pub fn set_octaves(&mut self, octaves: f32) {
        self.params.octaves = octaves;
    }

    pub fn autogenerate(&self) -> bool {
        self.params.autogenerate
    }

    pub fn set_autogenerate(&mut self, autogenerate: bool) {
        self.params.autogenerate = autogenerate;
    }

    /// Regenerate the buffer from the current parameters.
    pub fn generate_fbm_noise(&mut self) -> Result<(), NoiseError> {
        generator::generate_into(&mut self.grid, &self.params)
    }

    /// Wrapped lookup into the current buffer.
    pub fn get_noise(&self, x: i32, y: i32) -> f32 {
        self.grid.sample(x, y)
    }

    /// Extrema of the last generation; (0, 0) before the first one.
    pub fn range(&self) -> (f32, f32) {
        self.grid.range()
    }

    pub fn grid(&self) -> &NoiseGrid {
        &self.grid
    }
}
