//! End-to-end flow tests: link stream -> frame -> dispatch -> report ->
//! point updates, and point write -> outbound command bytes.

use std::sync::Arc;

use zwgate_commandclass::classes::{SwitchBinaryProcessor, POINT_ON, POINT_VALUE};
use zwgate_commandclass::{
    CommandArgument, CommandClassProcessor, CommandClassRegistry, CommandClassVersion,
    FrameBuffer,
};
use zwgate_points::{MemoryBridge, PointPath, PointValue};

fn build_registry() -> CommandClassRegistry {
    let mut registry = CommandClassRegistry::new();
    registry
        .register(Arc::new(SwitchBinaryProcessor))
        .expect("registration must succeed");
    registry
}

#[test]
fn test_inbound_stream_to_point_updates() {
    let registry = build_registry();
    let mut bridge = MemoryBridge::new();
    let path = PointPath::new(["Node12", "SwitchBinary"]);
    let version = CommandClassVersion::V2;

    SwitchBinaryProcessor
        .describe_points(&path, version, &mut bridge)
        .unwrap();

    // Two reports arrive back to back on the link, with leading line noise.
    let mut buffer = FrameBuffer::new();
    buffer.push(&[0x00, 0x00]);
    buffer.push(&FrameBuffer::encode_link(&[0x25, 0x03, 0xFF, 0x50, 0x02]));
    buffer.push(&FrameBuffer::encode_link(&[0x25, 0x03, 0x00]));

    let argument = CommandArgument::new(12);
    let mut decoded = 0;
    while let Some(frame) = buffer.next_frame() {
        let report = registry.dispatch(&frame, &argument).unwrap();
        report.update(&path, version, false, &mut bridge);
        decoded += 1;
    }

    // Both frames decoded; the second report wins.
    assert_eq!(decoded, 2);
    assert_eq!(
        bridge.value(&path.point(POINT_ON)),
        Some(&PointValue::Bool(false))
    );
    assert_eq!(
        bridge.value(&path.point(POINT_VALUE)),
        Some(&PointValue::Byte(0x00))
    );
}

#[test]
fn test_initial_sync_then_write() {
    let path = PointPath::new(["Node12", "SwitchBinary"]);
    let version = CommandClassVersion::V1;

    // First contact: the processor asks for the current state.
    let requests =
        SwitchBinaryProcessor.initial_requests(&path, version, false, true);
    let frames: Vec<Vec<u8>> = requests.iter().map(|r| r.encode()).collect();
    assert_eq!(frames, vec![vec![0x25, 0x02]]);

    // An external client flips the switch on.
    let out = SwitchBinaryProcessor
        .write(
            &path.point(POINT_ON),
            version,
            true,
            &PointValue::Bool(true),
        )
        .unwrap();
    assert!(out.secure);
    assert_eq!(out.encode(), vec![0x25, 0x01, 0xFF]);
}

#[test]
fn test_decode_failure_does_not_poison_registry() {
    let registry = build_registry();
    let argument = CommandArgument::new(7);

    assert!(registry.dispatch(&[0x25, 0x03], &argument).is_err());
    assert!(registry.dispatch(&[0x31, 0x05, 0x01], &argument).is_err());
    assert!(registry.dispatch(&[0x25, 0x03, 0xFF], &argument).is_ok());
}
