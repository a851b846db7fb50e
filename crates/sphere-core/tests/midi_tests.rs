// Host-side tests for MIDI decoding, control bindings and device switching.

use sphere_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn cc(controller: u8, value: u8) -> MidiMessage {
    MidiMessage::ControlChange {
        channel: 0,
        controller,
        value,
    }
}

#[test]
fn mod_wheel_spans_full_bump_range() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();

    mapper.handle(&cc(1, 127), &mut ctx);
    assert_eq!(ctx.params.get(Param::Bump), 5.0);

    mapper.handle(&cc(1, 0), &mut ctx);
    assert_eq!(ctx.params.get(Param::Bump), 0.0);
}

#[test]
fn cc74_drives_displacement() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    let effect = mapper.handle(&cc(74, 127), &mut ctx);
    assert_eq!(
        effect,
        MidiEffect::Param {
            param: Param::Displacement,
            value: 2.0
        }
    );
    let mid = mapper.handle(&cc(74, 64), &mut ctx);
    match mid {
        MidiEffect::Param { value, .. } => assert!(approx(value, 64.0 / 127.0 * 2.0)),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(ctx.params.get(Param::Bump), 1.0);
}

#[test]
fn unbound_controllers_are_ignored() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    assert_eq!(mapper.handle(&cc(7, 100), &mut ctx), MidiEffect::Ignored);
    assert_eq!(ctx.params.revision(), 0);
}

#[test]
fn out_of_range_values_clamp() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    mapper.handle(&cc(1, 200), &mut ctx);
    assert_eq!(ctx.params.get(Param::Bump), 5.0);
}

#[test]
fn custom_binding_table() {
    let mapper = MidiMapper::new(ControlBinding::from_pairs([
        (74, Param::Bump),
        (71, Param::Displacement),
    ]));
    let mut ctx = SceneContext::default();
    mapper.handle(&cc(74, 127), &mut ctx);
    mapper.handle(&cc(71, 0), &mut ctx);
    assert_eq!(ctx.params.get(Param::Bump), 5.0);
    assert_eq!(ctx.params.get(Param::Displacement), 0.0);
    assert_eq!(mapper.handle(&cc(1, 127), &mut ctx), MidiEffect::Ignored);
}

#[test]
fn note_on_snaps_rotation() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    ctx.rotation = Rotation { x: 3.0, y: 4.0 };
    let msg = MidiMessage::parse(&[0x90, 96, 100]);
    assert_eq!(
        mapper.handle(&msg, &mut ctx),
        MidiEffect::Rotation { x: 0.01, y: 0.02 }
    );
    assert!(approx(ctx.rotation.x, 0.01));
    assert!(approx(ctx.rotation.y, 0.02));

    mapper.handle(&MidiMessage::parse(&[0x90, 36, 1]), &mut ctx);
    assert_eq!(ctx.rotation, Rotation { x: 0.0, y: 0.0 });
}

#[test]
fn note_off_and_other_messages_do_nothing() {
    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    let messages: [&[u8]; 4] = [&[0x80, 60, 0], &[0x90, 60, 0], &[0xE0, 0, 64], &[0xF8]];
    for bytes in messages {
        assert_eq!(
            mapper.handle(&MidiMessage::parse(bytes), &mut ctx),
            MidiEffect::Ignored
        );
    }
    assert_eq!(ctx.rotation, Rotation::default());
    assert_eq!(ctx.params.revision(), 0);
}

// ---------------- device switching ----------------

/// Fake host: every attached listener receives each injected message.
#[derive(Default)]
struct FakeHost {
    devices: Vec<DeviceHandle>,
    listeners: Vec<(u32, String)>,
    next_id: u32,
    log: Vec<String>,
}

#[derive(Clone)]
struct FakeBackend(Rc<RefCell<FakeHost>>);

impl MidiBackend for FakeBackend {
    type Listener = u32;

    fn inputs(&self) -> Vec<DeviceHandle> {
        self.0.borrow().devices.clone()
    }

    fn attach(&mut self, device: &DeviceHandle) -> Result<u32, MidiError> {
        let mut host = self.0.borrow_mut();
        host.next_id += 1;
        let id = host.next_id;
        host.listeners.push((id, device.id.clone()));
        host.log.push(format!("attach {}", device.id));
        Ok(id)
    }

    fn detach(&mut self, listener: u32) {
        let mut host = self.0.borrow_mut();
        host.listeners.retain(|(id, _)| *id != listener);
        host.log.push(format!("detach {listener}"));
    }
}

fn host_with(ids: &[&str]) -> Rc<RefCell<FakeHost>> {
    Rc::new(RefCell::new(FakeHost {
        devices: ids
            .iter()
            .map(|id| DeviceHandle {
                id: id.to_string(),
                name: format!("Keys {id}"),
            })
            .collect(),
        ..Default::default()
    }))
}

fn deliver(
    host: &Rc<RefCell<FakeHost>>,
    bytes: &[u8],
    mapper: &MidiMapper,
    ctx: &mut SceneContext,
) {
    let listeners = host.borrow().listeners.len();
    let msg = MidiMessage::parse(bytes);
    for _ in 0..listeners {
        mapper.handle(&msg, ctx);
    }
}

#[test]
fn switching_twice_leaves_one_listener() {
    let host = host_with(&["a", "b"]);
    let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
    assert_eq!(selector.refresh(), DeviceStatus::Detected(2));

    selector.select(Some("a")).unwrap();
    let status = selector.select(Some("b")).unwrap();
    assert_eq!(status.to_string(), "Connected to Keys b");
    assert_eq!(host.borrow().listeners.len(), 1);
    assert_eq!(selector.active().map(|d| d.id.as_str()), Some("b"));

    let mapper = MidiMapper::default();
    let mut ctx = SceneContext::default();
    let before = ctx.params.revision();
    deliver(&host, &[0xB0, 1, 90], &mapper, &mut ctx);
    assert_eq!(ctx.params.revision() - before, 1);
}

#[test]
fn old_listener_is_detached_before_new_attach() {
    let host = host_with(&["a", "b"]);
    let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
    selector.refresh();
    selector.select(Some("a")).unwrap();
    selector.select(Some("b")).unwrap();
    assert_eq!(host.borrow().log, vec!["attach a", "detach 1", "attach b"]);
}

#[test]
fn selecting_none_detaches() {
    let host = host_with(&["a"]);
    let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
    selector.refresh();
    selector.select(Some("a")).unwrap();
    assert_eq!(
        selector.select(None).unwrap().to_string(),
        "No MIDI input selected"
    );
    assert!(host.borrow().listeners.is_empty());
    assert!(selector.active().is_none());
}

#[test]
fn unknown_device_leaves_nothing_attached() {
    let host = host_with(&["a"]);
    let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
    selector.refresh();
    selector.select(Some("a")).unwrap();
    assert_eq!(
        selector.select(Some("ghost")),
        Err(MidiError::DeviceNotFound("ghost".into()))
    );
    assert!(host.borrow().listeners.is_empty());
    assert_eq!(
        selector.select_status(Some("ghost")),
        DeviceStatus::Missing("ghost".into())
    );
}

#[test]
fn zero_devices_reports_status_and_pointer_still_works() {
    let host = host_with(&[]);
    let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
    let status = selector.refresh();
    assert_eq!(status, DeviceStatus::NoDevices);
    assert_eq!(status.to_string(), "No MIDI devices detected");
    assert!(selector.devices().is_empty());

    let mut ctx = SceneContext::default();
    let mut drag = DragMapper::default();
    drag.pointer_down(100.0);
    assert!(drag.pointer_move(90.0, &mut ctx.params));
    assert!(ctx.params.get(Param::Bump) > 1.0);
}

#[test]
fn dropping_the_selector_releases_the_listener() {
    let host = host_with(&["a"]);
    {
        let mut selector = DeviceSelector::new(FakeBackend(host.clone()));
        selector.refresh();
        selector.select(Some("a")).unwrap();
        assert_eq!(host.borrow().listeners.len(), 1);
    }
    assert!(host.borrow().listeners.is_empty());
}

#[test]
fn status_strings_match_the_ui() {
    assert_eq!(DeviceStatus::Detected(3).to_string(), "3 MIDI input(s) detected");
    assert_eq!(
        DeviceStatus::Unavailable("SecurityError".into()).to_string(),
        "WebMidi error: SecurityError"
    );
}
