//! MIDI message decoding and the controller → parameter mapping.

use crate::constants::*;
use crate::params::Param;
use crate::scene::SceneContext;
use fnv::FnvHashMap;

/// Channel-voice messages the sphere reacts to. Everything else decodes to
/// [`MidiMessage::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    /// Control change: channel (0-15), controller (0-127), value (0-127)
    ControlChange { channel: u8, controller: u8, value: u8 },
    /// Note on with a non-zero velocity
    NoteOn { channel: u8, note: u8, velocity: u8 },
    /// Note off, including note-on with velocity 0
    NoteOff { channel: u8, note: u8, velocity: u8 },
    Other,
}

impl MidiMessage {
    /// Decode one complete message as delivered by the host (status byte
    /// first). Running status is not reconstructed.
    pub fn parse(bytes: &[u8]) -> Self {
        let [status, d1, d2, ..] = *bytes else {
            return MidiMessage::Other;
        };
        if status & 0x80 == 0 {
            return MidiMessage::Other;
        }
        let channel = status & 0x0F;
        let (d1, d2) = (d1 & 0x7F, d2 & 0x7F);
        match status & 0xF0 {
            0x80 => MidiMessage::NoteOff {
                channel,
                note: d1,
                velocity: d2,
            },
            0x90 if d2 == 0 => MidiMessage::NoteOff {
                channel,
                note: d1,
                velocity: 0,
            },
            0x90 => MidiMessage::NoteOn {
                channel,
                note: d1,
                velocity: d2,
            },
            0xB0 => MidiMessage::ControlChange {
                channel,
                controller: d1,
                value: d2,
            },
            _ => MidiMessage::Other,
        }
    }
}

/// Fixed table from controller number to the parameter it drives.
#[derive(Clone, Debug)]
pub struct ControlBinding {
    table: FnvHashMap<u8, Param>,
}

impl Default for ControlBinding {
    fn default() -> Self {
        Self::from_pairs([
            (CC_MOD_WHEEL, Param::Bump),
            (CC_BRIGHTNESS, Param::Displacement),
        ])
    }
}

impl ControlBinding {
    pub fn empty() -> Self {
        Self {
            table: FnvHashMap::default(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, Param)>) -> Self {
        Self {
            table: pairs.into_iter().collect(),
        }
    }

    pub fn bind(&mut self, controller: u8, param: Param) -> Option<Param> {
        self.table.insert(controller, param)
    }

    pub fn lookup(&self, controller: u8) -> Option<Param> {
        self.table.get(&controller).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Outcome of feeding one message to the mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MidiEffect {
    Param { param: Param, value: f32 },
    Rotation { x: f32, y: f32 },
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct MidiMapper {
    binding: ControlBinding,
}

impl MidiMapper {
    pub fn new(binding: ControlBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &ControlBinding {
        &self.binding
    }

    pub fn handle(&self, msg: &MidiMessage, ctx: &mut SceneContext) -> MidiEffect {
        match *msg {
            MidiMessage::ControlChange {
                controller, value, ..
            } => {
                let Some(param) = self.binding.lookup(controller) else {
                    return MidiEffect::Ignored;
                };
                let t = value.min(MIDI_VALUE_MAX) as f32 / MIDI_VALUE_MAX as f32;
                let target = ctx.params.range(param).denormalize(t);
                let value = ctx.params.set(param, target);
                MidiEffect::Param { param, value }
            }
            MidiMessage::NoteOn { note, .. } => {
                let (x, y) = note_rotation(note);
                ctx.rotation.x = x;
                ctx.rotation.y = y;
                MidiEffect::Rotation { x, y }
            }
            MidiMessage::NoteOff { .. } | MidiMessage::Other => MidiEffect::Ignored,
        }
    }
}

/// Rotation a note-on snaps the sphere to. Notes below C2 give a small
/// negative angle.
#[inline]
pub fn note_rotation(note: u8) -> (f32, f32) {
    let n = (note as f32 - NOTE_ROTATION_LOW as f32) / NOTE_ROTATION_SPAN;
    (n * NOTE_ROTATION_X, n * NOTE_ROTATION_Y)
}
