// crates/dbus-text/src/env.rs

//! Default bus addresses taken from the process environment.

use crate::address::{Address, decode_many};
use alloc::string::String;
use alloc::vec::Vec;
use log::warn;

/// Environment variable holding the system bus address.
pub const SYSTEM_BUS_ADDRESS_VAR: &str = "DBUS_SYSTEM_BUS_ADDRESS";
/// Environment variable holding the session bus address.
pub const SESSION_BUS_ADDRESS_VAR: &str = "DBUS_SESSION_BUS_ADDRESS";
/// Environment variable set by the bus daemon for activated services.
pub const STARTER_ADDRESS_VAR: &str = "DBUS_STARTER_ADDRESS";

/// Address of the system bus when `DBUS_SYSTEM_BUS_ADDRESS` is unset.
pub const DEFAULT_SYSTEM_BUS_ADDRESS: &str = "unix:path=/var/run/dbus/system_bus_socket";

/// Returns the system bus addresses, falling back to the well-known socket.
pub fn system_address() -> Option<Vec<Address>> {
    system_address_from(process_env)
}

/// Returns the session bus addresses, if `DBUS_SESSION_BUS_ADDRESS` is set and valid.
pub fn session_address() -> Option<Vec<Address>> {
    session_address_from(process_env)
}

/// Returns the starter bus addresses, if `DBUS_STARTER_ADDRESS` is set and valid.
pub fn starter_address() -> Option<Vec<Address>> {
    starter_address_from(process_env)
}

/// Like [`system_address`], reading variables through `lookup`.
pub fn system_address_from<F>(lookup: F) -> Option<Vec<Address>>
where
    F: Fn(&str) -> Option<String>,
{
    let text = lookup(SYSTEM_BUS_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_SYSTEM_BUS_ADDRESS.into());
    parse_variable(SYSTEM_BUS_ADDRESS_VAR, &text)
}

/// Like [`session_address`], reading variables through `lookup`.
pub fn session_address_from<F>(lookup: F) -> Option<Vec<Address>>
where
    F: Fn(&str) -> Option<String>,
{
    let text = lookup(SESSION_BUS_ADDRESS_VAR)?;
    parse_variable(SESSION_BUS_ADDRESS_VAR, &text)
}

/// Like [`starter_address`], reading variables through `lookup`.
pub fn starter_address_from<F>(lookup: F) -> Option<Vec<Address>>
where
    F: Fn(&str) -> Option<String>,
{
    let text = lookup(STARTER_ADDRESS_VAR)?;
    parse_variable(STARTER_ADDRESS_VAR, &text)
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// An empty list counts as no address.
fn parse_variable(name: &str, text: &str) -> Option<Vec<Address>> {
    match decode_many(text) {
        Ok(addresses) if addresses.is_empty() => None,
        Ok(addresses) => Some(addresses),
        Err(e) => {
            warn!("Ignoring {}: {}", name, e);
            None
        }
    }
}
