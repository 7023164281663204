use std::net::{SocketAddr, TcpListener};
use tracing::warn;

/// Check if a specific port is available
pub fn is_port_available(port: u16) -> bool {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpListener::bind(addr).is_ok()
}

/// Return the preferred port if it is free, otherwise scan upward for the
/// next free one. Falls back to the preferred port (and a bind-time error)
/// when the whole scan range is taken.
pub fn pick_port(preferred: u16) -> u16 {
    if is_port_available(preferred) {
        return preferred;
    }

    warn!("Port {} is not available, searching for alternative...", preferred);

    let scan_end = preferred.saturating_add(100);
    for port in preferred..=scan_end {
        if is_port_available(port) {
            warn!("Using alternative port: {}", port);
            return port;
        }
    }

    warn!("No available ports found, returning preferred port {}", preferred);
    preferred
}
