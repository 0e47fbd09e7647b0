#![cfg(test)]

use arpseek_core::scanner::{ArpScan, ScanError};

#[cfg(unix)]
use crate::utils::FakeScanner;

/// Real arp-scan output shape: banner text around tab-separated host rows.
#[cfg(unix)]
const SWEEP_OUTPUT: &str = "Interesting packets: 1\n\
    192.168.1.1\t00:11:22:33:44:55\tunknown\n\
    192.168.1.42\tAB:CD:EF:12:34:56\tunknown";

#[cfg(unix)]
#[tokio::test]
async fn scan_returns_ip_of_first_matching_mac() {
    let fake = FakeScanner::new(SWEEP_OUTPUT, 0);
    let scanner = ArpScan::new(fake.command());

    let record = scanner
        .scan("192.168.1.0/24", "ab:cd:ef:12:34:56")
        .await
        .expect("scan should succeed")
        .expect("query MAC is present in the sweep output");

    assert_eq!(record.ip, "192.168.1.42");
}

#[cfg(unix)]
#[tokio::test]
async fn scan_reports_absence_for_unknown_mac() {
    let fake = FakeScanner::new(SWEEP_OUTPUT, 0);
    let scanner = ArpScan::new(fake.command());

    let found = scanner
        .scan("192.168.1.0/24", "ff:ff:ff:ff:ff:ff")
        .await
        .expect("scan should succeed");

    assert!(found.is_none(), "absence must be Ok(None), not an error");
}

#[cfg(unix)]
#[tokio::test]
async fn scanner_exit_failure_is_an_error() {
    let fake = FakeScanner::new("pcap_open_live: Operation not permitted", 1);
    let scanner = ArpScan::new(fake.command());

    let err = scanner
        .scan("192.168.1.0/24", "ab:cd:ef:12:34:56")
        .await
        .expect_err("non-zero exit must not look like a clean miss");

    assert!(matches!(err, ScanError::Exited { .. }), "got: {err}");
}

#[tokio::test]
async fn missing_scanner_is_a_launch_error() {
    let scanner = ArpScan::new("/nonexistent/arpseek-no-such-scanner");

    let err = scanner
        .scan("10.0.0.0/24", "aa:bb:cc:dd:ee:ff")
        .await
        .expect_err("an unlaunchable scanner must be a hard error");

    assert!(matches!(err, ScanError::Launch { .. }), "got: {err}");
}
