mod support;

use simbridge_device::{
    BridgeConfig, BridgeError, DeviceBridge, DeviceState, LocalManager, Manager, SimctlBridge,
};
use std::sync::Arc;
use support::ScriptedRunner;

const LISTING: &str = r#"{"devices": {
    "com.apple.CoreSimulator.SimRuntime.iOS-17-4": [
        {"state": "Shutdown", "isAvailable": true, "name": "iPhone 15", "udid": "AAAA-1111"},
        {"state": "Booted", "isAvailable": true, "name": "iPhone 15 Pro", "udid": "BBBB-2222"}
    ]
}}"#;

fn bridge(runner: &Arc<ScriptedRunner>) -> SimctlBridge {
    let config = BridgeConfig {
        xcrun: "/usr/bin/xcrun".to_string(),
        ..BridgeConfig::default()
    };
    SimctlBridge::with_runner(&config, runner.clone())
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_boot_by_name_issues_simctl_boot() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond_ok(LISTING)
            .respond_ok(LISTING)
            .respond_ok(""),
    );
    let manager: LocalManager = Manager::new(bridge(&runner));

    let device = manager.find_device_by_name("iPhone 15").unwrap();
    assert_eq!(device.udid, "AAAA-1111");
    manager.boot_simulator(&device.id).unwrap();

    let calls = runner.invocations();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].0, "/usr/bin/xcrun");
    assert_eq!(calls[0].1, args(&["simctl", "list", "devices", "--json"]));
    assert_eq!(calls[2].1, args(&["simctl", "boot", "AAAA-1111"]));
}

#[test]
fn test_boot_sequence() {
    let runner = Arc::new(ScriptedRunner::new().respond_ok(LISTING).respond_ok(""));
    let manager = Manager::new(bridge(&runner));

    manager.boot_simulator("AAAA-1111").unwrap();

    let calls = runner.invocations();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].1, args(&["simctl", "boot", "AAAA-1111"]));
}

#[test]
fn test_shutdown_sequence() {
    let runner = Arc::new(ScriptedRunner::new().respond_ok(LISTING).respond_ok(""));
    let manager = Manager::new(bridge(&runner));

    manager.shutdown_simulator("BBBB-2222").unwrap();
    assert_eq!(
        runner.invocations()[1].1,
        args(&["simctl", "shutdown", "BBBB-2222"])
    );
}

#[test]
fn test_failed_boot_carries_stderr() {
    let runner = Arc::new(ScriptedRunner::new().respond_ok(LISTING).respond_exit(
        149,
        "",
        "An error was encountered processing the command (domain=com.apple.CoreSimulator.SimError, code=405)\n",
    ));
    let manager = Manager::new(bridge(&runner));

    match manager.boot_simulator("AAAA-1111") {
        Err(BridgeError::BackendCommandFailed { command, message }) => {
            assert_eq!(command, "simctl boot AAAA-1111");
            assert!(message.contains("code=405"));
        }
        other => panic!("expected BackendCommandFailed, got {:?}", other),
    }
}

#[test]
fn test_missing_xcrun_is_backend_unavailable() {
    let runner = Arc::new(ScriptedRunner::new().respond_spawn_error());
    let bridge = bridge(&runner);
    assert!(matches!(
        bridge.list_devices(),
        Err(BridgeError::BackendUnavailable(_))
    ));
}

#[test]
fn test_list_failure_exit() {
    let runner = Arc::new(ScriptedRunner::new().respond_exit(72, "", "xcrun: error: unable to find utility \"simctl\""));
    let bridge = bridge(&runner);
    assert!(matches!(
        bridge.list_devices(),
        Err(BridgeError::BackendCommandFailed { .. })
    ));
}

#[test]
fn test_get_device_state_by_udid() {
    let runner = Arc::new(ScriptedRunner::new().respond_ok(LISTING).respond_ok(LISTING));
    let bridge = bridge(&runner);

    assert_eq!(bridge.get_device_state("BBBB-2222").unwrap(), DeviceState::Booted);
    assert!(matches!(
        bridge.get_device_state("nope"),
        Err(BridgeError::NotFound(_))
    ));
}

#[cfg(unix)]
#[test]
fn test_real_failing_tool_maps_to_backend_failure() {
    // `false` ignores its arguments and exits 1
    let config = BridgeConfig {
        xcrun: "false".to_string(),
        ..BridgeConfig::default()
    };
    let bridge = SimctlBridge::new(&config);
    assert!(matches!(
        bridge.boot_simulator("AAAA-1111"),
        Err(BridgeError::BackendCommandFailed { .. })
    ));
}
