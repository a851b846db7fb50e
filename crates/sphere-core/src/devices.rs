//! MIDI input discovery and the single active listener.
//!
//! The host's MIDI API sits behind [`MidiBackend`]. [`DeviceSelector`] keeps
//! at most one listener attached: switching devices detaches the old listener
//! before the new one is attached, so no message is ever delivered twice.

use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceHandle {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MidiError {
    #[error("{0}")]
    Unavailable(String),
    #[error("MIDI input '{0}' not found")]
    DeviceNotFound(String),
}

/// What the status line shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceStatus {
    Unavailable(String),
    NoDevices,
    Detected(usize),
    Connected(String),
    NoneSelected,
    Missing(String),
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Unavailable(e) => write!(f, "WebMidi error: {}", e),
            DeviceStatus::NoDevices => f.write_str("No MIDI devices detected"),
            DeviceStatus::Detected(n) => write!(f, "{} MIDI input(s) detected", n),
            DeviceStatus::Connected(name) => write!(f, "Connected to {}", name),
            DeviceStatus::NoneSelected => f.write_str("No MIDI input selected"),
            DeviceStatus::Missing(id) => write!(f, "MIDI input '{}' not found", id),
        }
    }
}

/// Host MIDI API. `attach` hands back a listener that must be returned to
/// `detach`; once `detach` returns no further messages from that device reach
/// the mapper.
pub trait MidiBackend {
    type Listener;

    fn inputs(&self) -> Vec<DeviceHandle>;
    fn attach(&mut self, device: &DeviceHandle) -> Result<Self::Listener, MidiError>;
    fn detach(&mut self, listener: Self::Listener);
}

pub type DeviceList = SmallVec<[DeviceHandle; 4]>;

pub struct DeviceSelector<B: MidiBackend> {
    backend: B,
    devices: DeviceList,
    active: Option<(DeviceHandle, B::Listener)>,
}

impl<B: MidiBackend> DeviceSelector<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            devices: SmallVec::new(),
            active: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Re-read the input list from the backend.
    pub fn refresh(&mut self) -> DeviceStatus {
        self.devices = self.backend.inputs().into_iter().collect();
        if self.devices.is_empty() {
            log::info!("[midi] no input devices");
            DeviceStatus::NoDevices
        } else {
            log::info!("[midi] {} input(s) detected", self.devices.len());
            DeviceStatus::Detected(self.devices.len())
        }
    }

    pub fn devices(&self) -> &[DeviceHandle] {
        &self.devices
    }

    pub fn active(&self) -> Option<&DeviceHandle> {
        self.active.as_ref().map(|(d, _)| d)
    }

    /// Switch to `id`, or to nothing. The previous listener is always
    /// detached first, even when the new id is unknown or fails to attach.
    pub fn select(&mut self, id: Option<&str>) -> Result<DeviceStatus, MidiError> {
        self.release();
        let Some(id) = id.filter(|s| !s.is_empty()) else {
            return Ok(DeviceStatus::NoneSelected);
        };
        let device = self
            .devices
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| MidiError::DeviceNotFound(id.to_string()))?;
        let listener = self.backend.attach(&device)?;
        log::info!("[midi] listening to '{}' ({})", device.name, device.id);
        let status = DeviceStatus::Connected(device.name.clone());
        self.active = Some((device, listener));
        Ok(status)
    }

    /// Like [`select`](Self::select) but folds errors into a status.
    pub fn select_status(&mut self, id: Option<&str>) -> DeviceStatus {
        match self.select(id) {
            Ok(status) => status,
            Err(MidiError::DeviceNotFound(id)) => DeviceStatus::Missing(id),
            Err(MidiError::Unavailable(e)) => DeviceStatus::Unavailable(e),
        }
    }

    /// Detach the active listener, if any.
    pub fn release(&mut self) {
        if let Some((device, listener)) = self.active.take() {
            self.backend.detach(listener);
            log::info!("[midi] detached from '{}'", device.name);
        }
    }
}

impl<B: MidiBackend> Drop for DeviceSelector<B> {
    fn drop(&mut self) {
        self.release();
    }
}
