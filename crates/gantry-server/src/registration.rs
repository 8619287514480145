//! Plugin registration and guarded slot state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use gantry_core::{PhaseSet, PluginConfig, Shape, synthesize};
use parking_lot::RwLock;
use tracing::{debug, error};

use crate::descriptor::{ConfigSchema, PluginDescriptor};
use crate::error::ServerResult;
use crate::naming::NameSource;

type MakeFn = Arc<dyn Fn() -> Box<dyn PluginConfig> + Send + Sync>;

// ─── Constructor ─────────────────────────────────────────────────────────────

/// Config factory handed over at registration time.
///
/// Factories cross a plugin-library boundary, so the signature a
/// plugin declares for its factory cannot be trusted statically;
/// registration rejects anything other than a zero-argument,
/// single-result factory.
#[derive(Clone)]
pub struct Constructor {
    params: usize,
    results: usize,
    make: MakeFn,
}

impl Constructor {
    /// Wraps a plain factory function as a well-formed declaration.
    pub fn new<C, F>(make: F) -> Self
    where
        C: PluginConfig + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self::declared(0, 1, make)
    }

    /// Wraps a factory with an explicitly declared signature.
    ///
    /// `params` and `results` are the argument and result counts the
    /// plugin reports for its factory; [`register`] validates them.
    pub fn declared<C, F>(params: usize, results: usize, make: F) -> Self
    where
        C: PluginConfig + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            params,
            results,
            make: Arc::new(move || Box::new(make())),
        }
    }
}

impl std::fmt::Debug for Constructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constructor")
            .field("params", &self.params)
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}

// ─── Registration ────────────────────────────────────────────────────────────

/// Registers a plugin slot from its config factory and metadata.
///
/// Validation failures (absent constructor, wrong declared signature)
/// are logged and yield `None`; the caller must treat a missing
/// registration as "plugin not usable". On success the factory is
/// invoked exactly once, purely to obtain the config's shape and
/// declared phases — the produced value is discarded.
///
/// `I` and `E` are the external runtime's instance and event state
/// types; this core only provides guarded storage for them.
pub fn register<I, E>(
    constructor: Option<Constructor>,
    version: &str,
    priority: i32,
) -> Option<Registration<I, E>> {
    let Some(constructor) = constructor else {
        error!("Missing config constructor");
        return None;
    };

    if constructor.params != 0 || constructor.results != 1 {
        error!(
            params = constructor.params,
            results = constructor.results,
            "Wrong constructor signature"
        );
        return None;
    }

    let prototype = (constructor.make)();
    let config_shape = prototype.shape();
    let phases = PhaseSet::detect(prototype.as_ref());
    drop(prototype);

    debug!(version, priority, "Registered plugin slot");

    Some(Registration {
        constructor,
        config_shape,
        phases,
        version: version.to_string(),
        priority,
        slot: RwLock::new(SlotState::default()),
    })
}

/// Instance and event storage for one plugin slot.
///
/// All three fields form one critical-section group behind the
/// registration's guard.
struct SlotState<I, E> {
    instances: HashMap<i32, I>,
    events: HashMap<i32, E>,
    last_close_instance: Option<SystemTime>,
}

impl<I, E> Default for SlotState<I, E> {
    fn default() -> Self {
        Self {
            instances: HashMap::new(),
            events: HashMap::new(),
            last_close_instance: None,
        }
    }
}

/// One registered plugin slot.
///
/// Couples the config factory and registration metadata with the
/// guarded instance/event storage the external runtime populates over
/// the slot's lifetime. The config shape and phase set are captured
/// once at registration and immutable afterwards, so
/// [`describe`](Self::describe) takes no lock.
pub struct Registration<I, E> {
    constructor: Constructor,
    config_shape: Shape,
    phases: PhaseSet,
    version: String,
    priority: i32,
    slot: RwLock<SlotState<I, E>>,
}

impl<I, E> Registration<I, E> {
    /// Produces a fresh configuration value from the registered
    /// factory, for the runtime's per-instance needs.
    pub fn new_config(&self) -> Box<dyn PluginConfig> {
        (self.constructor.make)()
    }

    /// Version string stored at registration.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Priority stored at registration.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Structural shape of the configuration type.
    pub fn config_shape(&self) -> &Shape {
        &self.config_shape
    }

    /// Phases the plugin declared at registration.
    pub fn phases(&self) -> PhaseSet {
        self.phases
    }

    /// Assembles the published descriptor.
    ///
    /// The plugin name comes from the external naming service; a
    /// failure there aborts the call and is returned verbatim.
    pub fn describe(&self, names: &dyn NameSource) -> ServerResult<PluginDescriptor> {
        let name = names.plugin_name()?;
        let schema = ConfigSchema {
            name: name.clone(),
            config: synthesize(&self.config_shape),
        };
        Ok(PluginDescriptor {
            name,
            mod_time: None,
            load_time: None,
            phases: self
                .phases
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            version: self.version.clone(),
            priority: self.priority,
            schema,
        })
    }

    // ─── Guarded slot state ──────────────────────────────────────────────────

    /// Stores instance state under the slot guard.
    pub fn insert_instance(&self, id: i32, state: I) {
        self.slot.write().instances.insert(id, state);
    }

    /// Removes and returns instance state.
    pub fn remove_instance(&self, id: i32) -> Option<I> {
        self.slot.write().instances.remove(&id)
    }

    /// Reads instance state under the shared guard.
    pub fn with_instance<R>(&self, id: i32, f: impl FnOnce(&I) -> R) -> Option<R> {
        let slot = self.slot.read();
        slot.instances.get(&id).map(f)
    }

    /// Number of live instances.
    pub fn instance_count(&self) -> usize {
        self.slot.read().instances.len()
    }

    /// Stores event state under the slot guard.
    pub fn insert_event(&self, id: i32, state: E) {
        self.slot.write().events.insert(id, state);
    }

    /// Removes and returns event state.
    pub fn remove_event(&self, id: i32) -> Option<E> {
        self.slot.write().events.remove(&id)
    }

    /// Reads event state under the shared guard.
    pub fn with_event<R>(&self, id: i32, f: impl FnOnce(&E) -> R) -> Option<R> {
        let slot = self.slot.read();
        slot.events.get(&id).map(f)
    }

    /// Number of pending events.
    pub fn event_count(&self) -> usize {
        self.slot.read().events.len()
    }

    /// Stamps the close timestamp; called by the runtime on instance
    /// teardown.
    pub fn mark_instance_closed(&self) {
        self.slot.write().last_close_instance = Some(SystemTime::now());
    }

    /// When the runtime last closed an instance, if ever.
    pub fn last_instance_close(&self) -> Option<SystemTime> {
        self.slot.read().last_close_instance
    }
}
